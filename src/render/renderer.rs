use std::sync::Arc;

use crate::foundation::core::{ChannelOrder, PixelData, Point, SurfaceSize};
use crate::foundation::error::{SkyvecError, SkyvecResult};
use crate::plan::list::{DrawCommand, RenderList};
use crate::render::backend::{DrawBackend, Surface};
use crate::render::context::RenderContext;
use crate::scene::viewer::ViewerInfo;
use crate::style::paint::Font;
use crate::style::shape::ShapeStyle;

/// Per-replay accounting: every command is counted, failed ones are skipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayStats {
    /// Commands dispatched, including failed ones.
    pub commands_total: u64,
    /// Commands the backend rejected and the replay skipped.
    pub commands_failed: u64,
}

/// Owns the [`RenderList`] for the lifetime of one frame and replays it.
///
/// Two phases per frame:
///
/// 1. **Accumulate**: [`CanvasRenderer::initialize`] reseeds the list with
///    the background fill, then the scene traversal appends commands through
///    contexts handed out by [`CanvasRenderer::setup_context`].
/// 2. **Replay**: [`CanvasRenderer::draw_vector`] dispatches the list, in
///    insertion order, to a concrete [`DrawBackend`].
///
/// Single-threaded by design: one accumulate pass and one replay pass per
/// frame, on the thread owning the viewer and surface.
pub struct CanvasRenderer {
    size: SurfaceSize,
    font_scale: f64,
    surface: Option<Arc<dyn Surface>>,
    list: RenderList,
}

impl CanvasRenderer {
    /// Renderer with no surface, a zero-sized viewport and an empty list.
    pub fn new() -> Self {
        Self {
            size: SurfaceSize::new(0, 0),
            font_scale: 1.0,
            surface: None,
            list: RenderList::new(),
        }
    }

    /// Track a viewport resize; takes effect at the next `initialize`.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    /// Current viewport dimensions.
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Bind the backend surface used for readback and text metrics.
    ///
    /// The surface is referenced, not owned; the renderer adopts its
    /// dimensions.
    pub fn bind_surface(&mut self, surface: Arc<dyn Surface>) {
        self.size = surface.size();
        self.surface = Some(surface);
    }

    /// Whether a surface is currently bound.
    pub fn surface_bound(&self) -> bool {
        self.surface.is_some()
    }

    /// Set the renderer-specific font size compensation (DPI or zoom).
    pub fn set_font_scale(&mut self, scale: f64) {
        self.font_scale = scale;
    }

    /// Apply the renderer's font size compensation to `size`.
    pub fn scale_fontsize(&self, size: f64) -> f64 {
        size * self.font_scale
    }

    /// The command list accumulated so far this frame.
    pub fn render_list(&self) -> &RenderList {
        &self.list
    }

    /// Start a new frame: discard the previous list and reseed it with a
    /// single full-viewport polygon filled with the viewer background.
    pub fn initialize(&mut self, viewer: &dyn ViewerInfo) {
        self.size = viewer.dimensions();
        self.list = RenderList::background(self.size, viewer.background_color());
        tracing::debug!(
            width = self.size.width,
            height = self.size.height,
            "render list reseeded"
        );
    }

    /// Hand the scene traversal a context for one shape, with its line and
    /// fill styles already resolved (fonts are resolved per text shape via
    /// [`RenderContext::set_font_from_shape`]).
    pub fn setup_context(&mut self, shape: &dyn ShapeStyle) -> RenderContext<'_> {
        let mut cr = RenderContext::bound(&mut self.list, self.surface.as_deref(), self.font_scale);
        cr.set_line_from_shape(shape);
        cr.set_fill_from_shape(shape);
        cr
    }

    /// A bare context over this frame's list, with default style.
    pub fn context(&mut self) -> RenderContext<'_> {
        RenderContext::bound(&mut self.list, self.surface.as_deref(), self.font_scale)
    }

    /// Direct-blit fast path: append one image command at `(x, y)` without a
    /// full scene traversal.
    pub fn render_image(&mut self, data: PixelData, x: f64, y: f64) {
        tracing::debug!(x, y, width = data.width(), height = data.height(), "blit image");
        let mut cr = self.context();
        cr.draw_image(Point::new(x, y), data);
    }

    /// Replay the accumulated list against `target`, strictly in insertion
    /// order.
    ///
    /// Read-only over the list and therefore repeatable: invoking it twice
    /// without an intervening `initialize` dispatches the identical command
    /// stream. A failure drawing one command is logged with the command's
    /// kind and counted; the remaining commands are still drawn.
    pub fn draw_vector(&self, target: &mut dyn DrawBackend) -> ReplayStats {
        let mut stats = ReplayStats::default();
        for cmd in self.list.commands() {
            stats.commands_total += 1;
            if let Err(err) = replay_command(target, cmd) {
                stats.commands_failed += 1;
                tracing::error!(kind = cmd.kind().name(), error = %err, "error drawing command, skipping");
            }
        }
        stats
    }

    /// Measure `text` in `font` via the bound surface's metrics.
    pub fn text_extents(&self, text: &str, font: &Font) -> SkyvecResult<(f64, f64)> {
        let surface = self.surface.as_deref().ok_or_else(|| {
            SkyvecError::unbound_surface("text_extents requires a bound surface")
        })?;
        Ok(surface.text_extents(text, font))
    }

    /// Read back the bound surface's pixels, reordered to `order` when given
    /// (otherwise in the surface's native layout).
    pub fn get_surface_as_array(&self, order: Option<&ChannelOrder>) -> SkyvecResult<PixelData> {
        let surface = self.surface.as_deref().ok_or_else(|| {
            SkyvecError::unbound_surface("get_surface_as_array requires a bound surface")
        })?;
        let size = surface.size();
        let data = PixelData::new(size.width, size.height, surface.channel_order(), surface.pixels()?)?;
        match order {
            Some(order) => data.reorder(order),
            None => Ok(data),
        }
    }
}

impl Default for CanvasRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Dispatch one command to the single matching backend call, pushing its
/// captured style first. The match is exhaustive over the closed command set,
/// so an unknown kind cannot reach a frame at runtime.
fn replay_command(target: &mut dyn DrawBackend, cmd: &DrawCommand) -> SkyvecResult<()> {
    match cmd {
        DrawCommand::Image { pos, data } => target.draw_image(*pos, data),
        DrawCommand::Line {
            start,
            end,
            pen,
            brush,
        } => {
            target.setup_pen_brush(pen, brush.as_ref())?;
            target.draw_line(*start, *end)
        }
        DrawCommand::Circle {
            center,
            radius,
            pen,
            brush,
        } => {
            target.setup_pen_brush(pen, brush.as_ref())?;
            target.draw_circle(*center, *radius)
        }
        DrawCommand::Bezier { points, pen, brush } => {
            target.setup_pen_brush(pen, brush.as_ref())?;
            target.draw_bezier_curve(points)
        }
        DrawCommand::EllipseBezier { points, pen, brush } => {
            target.setup_pen_brush(pen, brush.as_ref())?;
            target.draw_ellipse_bezier(points)
        }
        DrawCommand::Polygon { points, pen, brush } => {
            target.setup_pen_brush(pen, brush.as_ref())?;
            target.draw_polygon(points)
        }
        DrawCommand::Path { points, pen, brush } => {
            target.setup_pen_brush(pen, brush.as_ref())?;
            target.draw_path(points)
        }
        DrawCommand::Text {
            pos,
            text,
            rot_deg,
            pen,
            brush,
            font,
        } => {
            target.setup_pen_brush(pen, brush.as_ref())?;
            target.set_font(font)?;
            target.draw_text(*pos, text, *rot_deg)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
