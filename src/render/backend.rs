use crate::foundation::core::{ChannelOrder, PixelData, Point, SurfaceSize};
use crate::foundation::error::SkyvecResult;
use crate::style::paint::{Brush, Font, Pen};

/// Concrete drawing target a [`RenderList`](crate::RenderList) is replayed
/// against.
///
/// A backend (software raster, GPU, PDF, ...) implements one method per
/// primitive kind plus the style setters pushed before each primitive. All
/// methods are fallible: a backend rejecting a single malformed command
/// returns an error which the replay loop isolates to that command.
pub trait DrawBackend {
    /// Adopt the captured stroke and optional fill for subsequent primitives.
    fn setup_pen_brush(&mut self, pen: &Pen, brush: Option<&Brush>) -> SkyvecResult<()>;

    /// Adopt the captured font for a subsequent text primitive.
    fn set_font(&mut self, font: &Font) -> SkyvecResult<()>;

    /// Blit a pixel buffer with its top-left corner at `pos`.
    fn draw_image(&mut self, pos: Point, data: &PixelData) -> SkyvecResult<()>;

    /// Stroke a straight segment.
    fn draw_line(&mut self, start: Point, end: Point) -> SkyvecResult<()>;

    /// Stroke (and fill, per the current brush) a circle.
    fn draw_circle(&mut self, center: Point, radius: f64) -> SkyvecResult<()>;

    /// Stroke a chain of cubic bezier control points.
    fn draw_bezier_curve(&mut self, points: &[Point]) -> SkyvecResult<()>;

    /// Stroke an ellipse given as four beziers' control points.
    fn draw_ellipse_bezier(&mut self, points: &[Point]) -> SkyvecResult<()>;

    /// Stroke (and fill) a closed polygon.
    fn draw_polygon(&mut self, points: &[Point]) -> SkyvecResult<()>;

    /// Stroke an open polyline.
    fn draw_path(&mut self, points: &[Point]) -> SkyvecResult<()>;

    /// Render a text run rotated `rot_deg` degrees about `pos`.
    fn draw_text(&mut self, pos: Point, text: &str, rot_deg: f64) -> SkyvecResult<()>;

    /// Measure `text` in `font`, returning device-space `(width, height)`.
    fn text_extents(&mut self, text: &str, font: &Font) -> SkyvecResult<(f64, f64)>;
}

/// Bound backend surface: pixel readback plus font metrics.
///
/// Acquired and owned externally; the renderer only references it.
pub trait Surface {
    /// Surface dimensions in device pixels.
    fn size(&self) -> SurfaceSize;

    /// Channel layout of the buffer returned by [`Surface::pixels`].
    fn channel_order(&self) -> ChannelOrder;

    /// Read back the surface's raw interleaved pixels.
    fn pixels(&self) -> SkyvecResult<Vec<u8>>;

    /// Measure `text` in `font`, returning device-space `(width, height)`.
    fn text_extents(&self, text: &str, font: &Font) -> (f64, f64);
}
