use crate::foundation::color::Color;
use crate::foundation::core::{Point, SurfaceSize};

/// Viewer state the rendering core consumes.
///
/// Injected capability: the viewer widget (external) implements this so the
/// renderer can seed frame backgrounds and shapes can scale their fonts with
/// the current zoom.
pub trait ViewerInfo {
    /// Current background color of the viewer.
    fn background_color(&self) -> Color;

    /// Current viewport dimensions in device pixels.
    fn dimensions(&self) -> SurfaceSize;

    /// Current zoom level; 0.0 means 1:1, positive zooms in.
    fn zoom_level(&self) -> f64 {
        0.0
    }
}

/// Converts data-space points to device/canvas-pixel points.
///
/// Shapes apply this before issuing draw primitives; everything downstream of
/// a [`RenderContext`](crate::RenderContext) is device-space only.
pub trait CoordMapper {
    /// Map one data-space point into canvas pixels.
    fn data_to_canvas(&self, pt: Point) -> Point;

    /// Map a slice of points through [`CoordMapper::data_to_canvas`].
    fn map_points(&self, pts: &[Point]) -> Vec<Point> {
        pts.iter().map(|p| self.data_to_canvas(*p)).collect()
    }
}
