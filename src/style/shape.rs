use crate::foundation::color::Color;
use crate::scene::viewer::ViewerInfo;
use crate::style::paint::LineStyle;

/// Base font size used when a shape scales its font against the viewer.
pub const BASE_FONT_SIZE: f64 = 12.0;

const MIN_SCALED_FONT_SIZE: f64 = 8.0;
const MAX_SCALED_FONT_SIZE: f64 = 48.0;

/// Style attributes a canvas shape exposes to the rendering core.
///
/// Everything except the line color is optional; the provided methods give
/// the documented defaults, so a minimal shape implements `color` alone and
/// renders with a default pen, no fill and no font.
pub trait ShapeStyle {
    /// Line color. The one attribute every shape must supply.
    fn color(&self) -> Color;

    /// Line opacity; defaults to fully opaque.
    fn alpha(&self) -> f32 {
        1.0
    }

    /// Line width in device pixels.
    fn linewidth(&self) -> f32 {
        1.0
    }

    /// Dash pattern for the stroke.
    fn linestyle(&self) -> LineStyle {
        LineStyle::Solid
    }

    /// Whether the shape wants its interior filled.
    fn fill(&self) -> bool {
        false
    }

    /// Distinct fill color; `None` falls back to the line color.
    fn fillcolor(&self) -> Option<Color> {
        None
    }

    /// Distinct fill opacity; `None` falls back to the line alpha.
    fn fillalpha(&self) -> Option<f32> {
        None
    }

    /// Font family, for shapes that render text.
    fn font(&self) -> Option<&str> {
        None
    }

    /// Explicit font size; `None` asks [`ShapeStyle::scale_font`] instead.
    fn fontsize(&self) -> Option<f64> {
        None
    }

    /// Derive a font size from the current viewer zoom.
    fn scale_font(&self, viewer: &dyn ViewerInfo) -> f64 {
        (BASE_FONT_SIZE + viewer.zoom_level()).clamp(MIN_SCALED_FONT_SIZE, MAX_SCALED_FONT_SIZE)
    }
}

/// Plain attribute carrier implementing [`ShapeStyle`].
///
/// Useful for tests and for shape types that store their style as data rather
/// than computing it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StyleAttrs {
    /// Line color.
    pub color: Color,
    /// Line opacity; `None` means fully opaque.
    pub alpha: Option<f32>,
    /// Line width in device pixels; `None` means 1.
    pub linewidth: Option<f32>,
    /// Dash pattern; `None` means solid.
    pub linestyle: Option<LineStyle>,
    /// Whether the interior is filled.
    pub fill: bool,
    /// Distinct fill color; `None` falls back to the line color.
    pub fillcolor: Option<Color>,
    /// Distinct fill opacity; `None` falls back to the line alpha.
    pub fillalpha: Option<f32>,
    /// Font family, for shapes that render text.
    pub font: Option<String>,
    /// Explicit font size; `None` scales with the viewer zoom.
    pub fontsize: Option<f64>,
}

impl StyleAttrs {
    /// Attributes with the given line color and every optional left unset.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            alpha: None,
            linewidth: None,
            linestyle: None,
            fill: false,
            fillcolor: None,
            fillalpha: None,
            font: None,
            fontsize: None,
        }
    }
}

impl ShapeStyle for StyleAttrs {
    fn color(&self) -> Color {
        self.color
    }

    fn alpha(&self) -> f32 {
        self.alpha.unwrap_or(1.0)
    }

    fn linewidth(&self) -> f32 {
        self.linewidth.unwrap_or(1.0)
    }

    fn linestyle(&self) -> LineStyle {
        self.linestyle.unwrap_or_default()
    }

    fn fill(&self) -> bool {
        self.fill
    }

    fn fillcolor(&self) -> Option<Color> {
        self.fillcolor
    }

    fn fillalpha(&self) -> Option<f32> {
        self.fillalpha
    }

    fn font(&self) -> Option<&str> {
        self.font.as_deref()
    }

    fn fontsize(&self) -> Option<f64> {
        self.fontsize
    }
}
