/// An RGB color with float channels in `[0, 1]`.
///
/// Opacity is carried separately (as `alpha` on [`Pen`](crate::Pen),
/// [`Brush`](crate::Brush) and [`Font`](crate::Font)), so `Color` itself has
/// no alpha channel.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel in `[0, 1]`.
    pub r: f32,
    /// Green channel in `[0, 1]`.
    pub g: f32,
    /// Blue channel in `[0, 1]`.
    pub b: f32,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    /// Color from float channels. Values are taken as-is, not clamped.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
        }
    }

    /// Quantize to 8-bit channels, clamping out-of-range values.
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        fn q(c: f32) -> u8 {
            (c.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        (q(self.r), q(self.g), q(self.b))
    }

    /// Resolve a color by name.
    ///
    /// Covers the overlay color names commonly used by viewer shapes; returns
    /// `None` for anything unrecognized so callers can fall back explicitly.
    pub fn from_name(name: &str) -> Option<Self> {
        let rgb8 = match name.to_ascii_lowercase().as_str() {
            "black" => (0, 0, 0),
            "white" => (255, 255, 255),
            "ivory" => (255, 255, 240),
            "red" => (255, 0, 0),
            "green" => (0, 255, 0),
            "blue" => (0, 0, 255),
            "cyan" => (0, 255, 255),
            "magenta" => (255, 0, 255),
            "yellow" => (255, 255, 0),
            "orange" => (255, 165, 0),
            "skyblue" => (135, 206, 235),
            "lightgreen" => (144, 238, 144),
            "darkgreen" => (0, 100, 0),
            "pink" => (255, 192, 203),
            "purple" => (128, 0, 128),
            "gray" | "grey" => (128, 128, 128),
            "brown" => (165, 42, 42),
            "gold" => (255, 215, 0),
            "turquoise" => (64, 224, 208),
            "navy" => (0, 0, 128),
            "salmon" => (250, 128, 114),
            "coral" => (255, 127, 80),
            _ => return None,
        };
        let (r, g, b) = rgb8;
        Some(Self::from_rgb8(r, g, b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
