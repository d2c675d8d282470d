use crate::foundation::color::Color;

/// Stroke dash pattern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineStyle {
    /// Continuous stroke.
    #[default]
    Solid,
    /// Dashed stroke.
    Dash,
}

/// Stroke style captured into a draw command.
///
/// Immutable value; build a new one per state change instead of mutating.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pen {
    /// Stroke color.
    pub color: Color,
    /// Stroke opacity in `[0, 1]`.
    pub alpha: f32,
    /// Stroke width in pixels, at least 1.
    pub linewidth: f32,
    /// Dash pattern.
    pub style: LineStyle,
}

impl Pen {
    /// Build a pen. Alpha is clamped to `[0, 1]`, line width to `>= 1` pixel.
    pub fn new(color: Color, alpha: f32, linewidth: f32, style: LineStyle) -> Self {
        Self {
            color,
            alpha: alpha.clamp(0.0, 1.0),
            linewidth: linewidth.max(1.0),
            style,
        }
    }

    /// Opaque solid pen of width 1.
    pub fn solid(color: Color) -> Self {
        Self::new(color, 1.0, 1.0, LineStyle::Solid)
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::solid(Color::BLACK)
    }
}

/// Fill style captured into a draw command.
///
/// "No fill" is expressed as `Option<Brush>::None` everywhere, never as a
/// flag on the brush itself.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Brush {
    /// Fill color.
    pub color: Color,
    /// Fill opacity in `[0, 1]`.
    pub alpha: f32,
}

impl Brush {
    /// Build a brush. Alpha is clamped to `[0, 1]`.
    pub fn new(color: Color, alpha: f32) -> Self {
        Self {
            color,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }
}

/// Text style captured into a text command.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Font {
    /// Family name, e.g. `"sans"`.
    pub family: String,
    /// Size in device/scaled units (after any renderer size compensation).
    pub size: f64,
    /// Glyph color.
    pub color: Color,
    /// Glyph opacity in `[0, 1]`.
    pub alpha: f32,
}

impl Font {
    /// Build a font. Alpha is clamped to `[0, 1]`.
    pub fn new(family: impl Into<String>, size: f64, color: Color, alpha: f32) -> Self {
        Self {
            family: family.into(),
            size,
            color,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new("sans", 12.0, Color::BLACK, 1.0)
    }
}
