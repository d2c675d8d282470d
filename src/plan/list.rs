use crate::foundation::color::Color;
use crate::foundation::core::{PixelData, Point, SurfaceSize};
use crate::style::paint::{Brush, Font, Pen};

/// Primitive kind tag, used for replay diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CommandKind {
    /// Pixel buffer blit.
    Image,
    /// Straight line segment.
    Line,
    /// Circle from center and radius.
    Circle,
    /// Cubic bezier chain.
    Bezier,
    /// Bezier-approximated ellipse.
    EllipseBezier,
    /// Closed polygon.
    Polygon,
    /// Open polyline.
    Path,
    /// Text run.
    Text,
}

impl CommandKind {
    /// Stable lowercase name, suitable for log fields.
    pub fn name(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Line => "line",
            Self::Circle => "circle",
            Self::Bezier => "bezier",
            Self::EllipseBezier => "ellipse_bezier",
            Self::Polygon => "polygon",
            Self::Path => "path",
            Self::Text => "text",
        }
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One deferred drawing operation.
///
/// Geometry is device-space only; each non-image variant snapshots the pen
/// and optional brush in effect when it was issued (text also snapshots the
/// font). Commands are never mutated once appended to a [`RenderList`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum DrawCommand {
    /// Blit a raw pixel buffer with its top-left corner at `pos`.
    ///
    /// Carries no pen or brush: compositing style is intrinsic to the pixels.
    Image {
        /// Top-left corner of the blit, in device space.
        pos: Point,
        /// Raw pixel buffer to blit.
        data: PixelData,
    },
    /// Straight segment from `start` to `end`.
    Line {
        /// Segment start point.
        start: Point,
        /// Segment end point.
        end: Point,
        /// Stroke style snapshot.
        pen: Pen,
        /// Optional fill style snapshot.
        brush: Option<Brush>,
    },
    /// Circle from center and device-space radius.
    Circle {
        /// Circle center.
        center: Point,
        /// Device-space radius.
        radius: f64,
        /// Stroke style snapshot.
        pen: Pen,
        /// Optional fill style snapshot.
        brush: Option<Brush>,
    },
    /// A chain of cubic bezier control points.
    Bezier {
        /// Cubic bezier control points.
        points: Vec<Point>,
        /// Stroke style snapshot.
        pen: Pen,
        /// Optional fill style snapshot.
        brush: Option<Brush>,
    },
    /// An ellipse approximated by four bezier curves (control points).
    EllipseBezier {
        /// Control points of the four approximating bezier curves.
        points: Vec<Point>,
        /// Stroke style snapshot.
        pen: Pen,
        /// Optional fill style snapshot.
        brush: Option<Brush>,
    },
    /// Closed polygon vertices.
    Polygon {
        /// Polygon vertices in order.
        points: Vec<Point>,
        /// Stroke style snapshot.
        pen: Pen,
        /// Optional fill style snapshot.
        brush: Option<Brush>,
    },
    /// Open polyline vertices.
    Path {
        /// Polyline vertices in order.
        points: Vec<Point>,
        /// Stroke style snapshot.
        pen: Pen,
        /// Optional fill style snapshot.
        brush: Option<Brush>,
    },
    /// Text run anchored at `pos`.
    Text {
        /// Anchor position.
        pos: Point,
        /// Text content.
        text: String,
        /// Rotation in degrees, counter-clockwise about `pos`.
        rot_deg: f64,
        /// Stroke style snapshot.
        pen: Pen,
        /// Optional fill style snapshot.
        brush: Option<Brush>,
        /// Font snapshot.
        font: Font,
    },
}

impl DrawCommand {
    /// Tag for this command, used in replay diagnostics.
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Image { .. } => CommandKind::Image,
            Self::Line { .. } => CommandKind::Line,
            Self::Circle { .. } => CommandKind::Circle,
            Self::Bezier { .. } => CommandKind::Bezier,
            Self::EllipseBezier { .. } => CommandKind::EllipseBezier,
            Self::Polygon { .. } => CommandKind::Polygon,
            Self::Path { .. } => CommandKind::Path,
            Self::Text { .. } => CommandKind::Text,
        }
    }
}

/// Ordered, append-only command list for one frame.
///
/// Insertion order is paint order: later commands paint over earlier ones.
/// The list grows during scene traversal, is replayed read-only, and is
/// replaced wholesale at the next frame's initialize.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct RenderList {
    commands: Vec<DrawCommand>,
}

impl RenderList {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a fresh list with the single full-viewport background fill.
    pub fn background(size: SurfaceSize, bg: Color) -> Self {
        let (w, h) = (f64::from(size.width), f64::from(size.height));
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(w, 0.0),
            Point::new(w, h),
            Point::new(h, 0.0),
        ];
        Self {
            commands: vec![DrawCommand::Polygon {
                points,
                pen: Pen::solid(bg),
                brush: Some(Brush::new(bg, 1.0)),
            }],
        }
    }

    /// Push a command at the end of paint order.
    pub fn append(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }

    /// Buffered commands in paint order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of buffered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the list holds no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/list.rs"]
mod tests;
