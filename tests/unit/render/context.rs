use super::*;
use crate::foundation::core::{ChannelOrder, SurfaceSize};
use crate::style::shape::StyleAttrs;

struct TestViewer {
    zoom: f64,
}

impl ViewerInfo for TestViewer {
    fn background_color(&self) -> Color {
        Color::BLACK
    }

    fn dimensions(&self) -> SurfaceSize {
        SurfaceSize::new(100, 100)
    }

    fn zoom_level(&self) -> f64 {
        self.zoom
    }
}

fn red() -> Color {
    Color::from_name("red").unwrap()
}

fn blue() -> Color {
    Color::from_name("blue").unwrap()
}

#[test]
fn fill_falls_back_to_line_color_and_alpha() {
    let mut shape = StyleAttrs::new(red());
    shape.fill = true;
    shape.alpha = Some(0.5);

    let mut list = RenderList::new();
    let mut cr = RenderContext::new(&mut list);
    cr.set_fill_from_shape(&shape);

    let brush = cr.brush().expect("fill requested");
    assert_eq!(brush.color, red());
    assert_eq!(brush.alpha, 0.5);
}

#[test]
fn fillcolor_overrides_color_but_alpha_still_inherited() {
    let mut shape = StyleAttrs::new(red());
    shape.fill = true;
    shape.alpha = Some(0.5);
    shape.fillcolor = Some(blue());

    let mut list = RenderList::new();
    let mut cr = RenderContext::new(&mut list);
    cr.set_fill_from_shape(&shape);

    let brush = cr.brush().expect("fill requested");
    assert_eq!(brush.color, blue());
    assert_eq!(brush.alpha, 0.5);
}

#[test]
fn fillalpha_wins_over_line_alpha() {
    let mut shape = StyleAttrs::new(red());
    shape.fill = true;
    shape.alpha = Some(0.5);
    shape.fillalpha = Some(0.9);

    let mut list = RenderList::new();
    let mut cr = RenderContext::new(&mut list);
    cr.set_fill_from_shape(&shape);

    assert_eq!(cr.brush().unwrap().alpha, 0.9);
}

#[test]
fn no_fill_clears_brush() {
    let mut list = RenderList::new();
    let mut cr = RenderContext::new(&mut list);
    cr.set_fill(Some(blue()), 1.0);
    assert!(cr.brush().is_some());

    let shape = StyleAttrs::new(red());
    cr.set_fill_from_shape(&shape);
    assert!(cr.brush().is_none());
}

#[test]
fn absent_attributes_resolve_to_default_pen() {
    let shape = StyleAttrs::new(red());
    let mut list = RenderList::new();
    let mut cr = RenderContext::new(&mut list);
    cr.set_line_from_shape(&shape);

    let pen = cr.pen();
    assert_eq!(pen.color, red());
    assert_eq!(pen.alpha, 1.0);
    assert_eq!(pen.linewidth, 1.0);
    assert_eq!(pen.style, LineStyle::Solid);
}

#[test]
fn explicit_fontsize_wins_over_viewer_scaling() {
    let mut shape = StyleAttrs::new(red());
    shape.font = Some("monospace".to_string());
    shape.fontsize = Some(20.0);

    let viewer = TestViewer { zoom: 6.0 };
    let mut list = RenderList::new();
    let mut cr = RenderContext::new(&mut list);
    cr.set_font_from_shape(&shape, &viewer);

    let font = cr.font().expect("font declared");
    assert_eq!(font.family, "monospace");
    assert_eq!(font.size, 20.0);
    assert_eq!(font.color, red());
}

#[test]
fn missing_fontsize_scales_against_viewer() {
    let mut shape = StyleAttrs::new(red());
    shape.font = Some("sans".to_string());

    let viewer = TestViewer { zoom: 6.0 };
    let mut list = RenderList::new();
    let mut cr = RenderContext::new(&mut list);
    cr.set_font_from_shape(&shape, &viewer);

    assert_eq!(cr.font().unwrap().size, 18.0);
}

#[test]
fn shape_without_font_resolves_none() {
    let shape = StyleAttrs::new(red());
    let viewer = TestViewer { zoom: 0.0 };
    let mut list = RenderList::new();
    let mut cr = RenderContext::new(&mut list);
    cr.set_font("sans", 10.0, Color::BLACK, 1.0);
    cr.set_font_from_shape(&shape, &viewer);
    assert!(cr.font().is_none());
}

#[test]
fn circle_snapshot_is_unaffected_by_later_style_changes() {
    let mut list = RenderList::new();
    let mut cr = RenderContext::new(&mut list);
    cr.set_line(red(), 0.5, 3.0, LineStyle::Solid);
    cr.draw_circle(Point::new(11.0, 22.0), 7.5);

    // Later state changes must not retroactively touch the snapshot.
    cr.set_line(blue(), 1.0, 1.0, LineStyle::Dash);
    cr.set_fill(Some(blue()), 1.0);

    match &list.commands()[0] {
        DrawCommand::Circle {
            center,
            radius,
            pen,
            brush,
        } => {
            assert_eq!(*center, Point::new(11.0, 22.0));
            assert_eq!(*radius, 7.5);
            assert_eq!(pen.color, red());
            assert_eq!(pen.linewidth, 3.0);
            assert!(brush.is_none());
        }
        other => panic!("expected circle, got {}", other.kind()),
    }
}

#[test]
fn draw_text_without_font_uses_default() {
    let mut list = RenderList::new();
    let mut cr = RenderContext::new(&mut list);
    cr.draw_text(Point::new(1.0, 2.0), "M31", 45.0);

    match &list.commands()[0] {
        DrawCommand::Text { font, rot_deg, .. } => {
            assert_eq!(*font, Font::default());
            assert_eq!(*rot_deg, 45.0);
        }
        other => panic!("expected text, got {}", other.kind()),
    }
}

#[test]
fn text_extents_requires_surface() {
    let mut list = RenderList::new();
    let cr = RenderContext::new(&mut list);
    assert!(matches!(
        cr.text_extents("abc"),
        Err(SkyvecError::UnboundSurface(_))
    ));
    assert!(list.is_empty());
}

#[test]
fn draw_image_carries_no_style() {
    let data = PixelData::new(1, 1, ChannelOrder::rgb(), vec![9, 9, 9]).unwrap();
    let mut list = RenderList::new();
    let mut cr = RenderContext::new(&mut list);
    cr.set_fill(Some(blue()), 0.3);
    cr.draw_image(Point::new(4.0, 5.0), data);

    match &list.commands()[0] {
        DrawCommand::Image { pos, data } => {
            assert_eq!(*pos, Point::new(4.0, 5.0));
            assert_eq!(data.bytes(), &[9, 9, 9]);
        }
        other => panic!("expected image, got {}", other.kind()),
    }
}
