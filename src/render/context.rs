use crate::foundation::color::Color;
use crate::foundation::core::{PixelData, Point};
use crate::foundation::error::{SkyvecError, SkyvecResult};
use crate::plan::list::{DrawCommand, RenderList};
use crate::render::backend::Surface;
use crate::scene::viewer::ViewerInfo;
use crate::style::paint::{Brush, Font, LineStyle, Pen};
use crate::style::shape::ShapeStyle;

/// Stateful cursor shapes draw through during scene traversal.
///
/// Holds the current pen, optional brush and optional font; each
/// `draw_*` primitive snapshots that style into one [`DrawCommand`] appended
/// to the bound [`RenderList`]. Coordinates are device-space: callers map
/// data-space geometry through their
/// [`CoordMapper`](crate::scene::viewer::CoordMapper) first.
///
/// Short-lived: one per draw call or per frame traversal, never shared across
/// threads or frames.
pub struct RenderContext<'a> {
    list: &'a mut RenderList,
    surface: Option<&'a dyn Surface>,
    /// Renderer-specific font size compensation (DPI/zoom), applied whenever
    /// a font is resolved or set.
    font_scale: f64,
    pen: Pen,
    brush: Option<Brush>,
    font: Option<Font>,
}

impl<'a> RenderContext<'a> {
    /// Context with no surface metrics and identity font scaling.
    pub fn new(list: &'a mut RenderList) -> Self {
        Self::bound(list, None, 1.0)
    }

    pub(crate) fn bound(
        list: &'a mut RenderList,
        surface: Option<&'a dyn Surface>,
        font_scale: f64,
    ) -> Self {
        Self {
            list,
            surface,
            font_scale,
            pen: Pen::default(),
            brush: None,
            font: None,
        }
    }

    /// Pen currently in effect.
    pub fn pen(&self) -> &Pen {
        &self.pen
    }

    /// Brush currently in effect, if any.
    pub fn brush(&self) -> Option<&Brush> {
        self.brush.as_ref()
    }

    /// Font currently in effect, if any.
    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    // ---- style resolution --------------------------------------------------

    /// Derive the pen from a shape's line attributes.
    pub fn set_line_from_shape(&mut self, shape: &dyn ShapeStyle) {
        self.pen = Pen::new(
            shape.color(),
            shape.alpha(),
            shape.linewidth(),
            shape.linestyle(),
        );
    }

    /// Derive the brush from a shape's fill attributes.
    ///
    /// Resolved only when the shape requests a fill; fill color falls back to
    /// the line color and fill alpha falls back to the line alpha.
    pub fn set_fill_from_shape(&mut self, shape: &dyn ShapeStyle) {
        if shape.fill() {
            let color = shape.fillcolor().unwrap_or_else(|| shape.color());
            let alpha = shape.fillalpha().unwrap_or_else(|| shape.alpha());
            self.brush = Some(Brush::new(color, alpha));
        } else {
            self.brush = None;
        }
    }

    /// Derive the font from a shape's text attributes.
    ///
    /// Resolved only when the shape declares a font family. An explicit
    /// `fontsize` wins; otherwise the shape scales its base size against the
    /// viewer. Either way the renderer's size compensation is applied before
    /// the font is stored.
    pub fn set_font_from_shape(&mut self, shape: &dyn ShapeStyle, viewer: &dyn ViewerInfo) {
        match shape.font() {
            Some(family) => {
                let size = shape
                    .fontsize()
                    .unwrap_or_else(|| shape.scale_font(viewer));
                self.font = Some(Font::new(
                    family,
                    size * self.font_scale,
                    shape.color(),
                    shape.alpha(),
                ));
            }
            None => self.font = None,
        }
    }

    /// Run all three resolvers against `shape`.
    pub fn initialize_from_shape(&mut self, shape: &dyn ShapeStyle, viewer: &dyn ViewerInfo) {
        self.set_line_from_shape(shape);
        self.set_fill_from_shape(shape);
        self.set_font_from_shape(shape, viewer);
    }

    // ---- direct style setters ----------------------------------------------

    /// Set the pen directly.
    pub fn set_line(&mut self, color: Color, alpha: f32, linewidth: f32, style: LineStyle) {
        self.pen = Pen::new(color, alpha, linewidth, style);
    }

    /// Set the fill; `None` clears it.
    pub fn set_fill(&mut self, color: Option<Color>, alpha: f32) {
        self.brush = color.map(|c| Brush::new(c, alpha));
    }

    /// Set the font directly; the renderer's size compensation still applies.
    pub fn set_font(&mut self, family: &str, size: f64, color: Color, alpha: f32) {
        self.font = Some(Font::new(family, size * self.font_scale, color, alpha));
    }

    // ---- queries -------------------------------------------------------------

    /// Measure `text` in the current font via the bound surface's metrics.
    ///
    /// A query, not a draw: appends nothing. Errors when no surface is bound.
    pub fn text_extents(&self, text: &str) -> SkyvecResult<(f64, f64)> {
        let surface = self.surface.ok_or_else(|| {
            SkyvecError::unbound_surface("text_extents requires a bound surface")
        })?;
        let font = self.font.clone().unwrap_or_default();
        Ok(surface.text_extents(text, &font))
    }

    // ---- drawing primitives ----------------------------------------------------

    /// Append an image blit. Carries no pen or brush.
    pub fn draw_image(&mut self, pos: Point, data: PixelData) {
        self.list.append(DrawCommand::Image { pos, data });
    }

    /// Append a line, snapshotting the current pen and brush.
    pub fn draw_line(&mut self, start: Point, end: Point) {
        self.list.append(DrawCommand::Line {
            start,
            end,
            pen: self.pen,
            brush: self.brush,
        });
    }

    /// Append a circle, snapshotting the current pen and brush.
    pub fn draw_circle(&mut self, center: Point, radius: f64) {
        self.list.append(DrawCommand::Circle {
            center,
            radius,
            pen: self.pen,
            brush: self.brush,
        });
    }

    /// Append a bezier chain, snapshotting the current pen and brush.
    pub fn draw_bezier_curve(&mut self, points: Vec<Point>) {
        self.list.append(DrawCommand::Bezier {
            points,
            pen: self.pen,
            brush: self.brush,
        });
    }

    /// Append a bezier-approximated ellipse, snapshotting the current style.
    pub fn draw_ellipse_bezier(&mut self, points: Vec<Point>) {
        self.list.append(DrawCommand::EllipseBezier {
            points,
            pen: self.pen,
            brush: self.brush,
        });
    }

    /// Append a closed polygon, snapshotting the current pen and brush.
    pub fn draw_polygon(&mut self, points: Vec<Point>) {
        self.list.append(DrawCommand::Polygon {
            points,
            pen: self.pen,
            brush: self.brush,
        });
    }

    /// Append an open polyline, snapshotting the current pen and brush.
    pub fn draw_path(&mut self, points: Vec<Point>) {
        self.list.append(DrawCommand::Path {
            points,
            pen: self.pen,
            brush: self.brush,
        });
    }

    /// Append a text draw. Snapshots the current font, or the default font
    /// when none was resolved, so the command is always well-formed.
    pub fn draw_text(&mut self, pos: Point, text: impl Into<String>, rot_deg: f64) {
        self.list.append(DrawCommand::Text {
            pos,
            text: text.into(),
            rot_deg,
            pen: self.pen,
            brush: self.brush,
            font: self.font.clone().unwrap_or_default(),
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/context.rs"]
mod tests;
