//! skyvec is the deferred vector-rendering core of an astronomical image
//! viewer.
//!
//! Shapes draw themselves against a [`RenderContext`], which resolves their
//! style into immutable [`Pen`]/[`Brush`]/[`Font`] values and appends tagged
//! [`DrawCommand`]s to a per-frame [`RenderList`]. A [`CanvasRenderer`] owns
//! that list's lifecycle and later replays it against a concrete
//! [`DrawBackend`], isolating per-command failures.
//!
//! # Frame pipeline
//!
//! 1. **Initialize**: [`CanvasRenderer::initialize`] reseeds the list with a
//!    full-viewport background fill from the viewer state.
//! 2. **Accumulate**: the scene traversal (external) drives each shape
//!    through a context from [`CanvasRenderer::setup_context`]; shapes map
//!    their geometry with a [`CoordMapper`] and issue device-space
//!    primitives.
//! 3. **Replay**: [`CanvasRenderer::draw_vector`] dispatches every command,
//!    in paint order, to the backend; a bad command is logged and skipped,
//!    never aborting the frame.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Device space only**: commands never carry data-space coordinates.
//! - **Append-only list**: commands are immutable once buffered; replay is
//!   read-only and repeatable.
//! - **Single-threaded**: one accumulate and one replay pass per frame, on
//!   the thread owning the viewer and surface.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod plan;
mod render;
mod scene;
mod style;

pub use foundation::color::Color;
pub use foundation::core::{Channel, ChannelOrder, PixelData, Point, SurfaceSize, Vec2};
pub use foundation::error::{SkyvecError, SkyvecResult};
pub use plan::list::{CommandKind, DrawCommand, RenderList};
pub use render::backend::{DrawBackend, Surface};
pub use render::context::RenderContext;
pub use render::renderer::{CanvasRenderer, ReplayStats};
pub use scene::viewer::{CoordMapper, ViewerInfo};
pub use style::paint::{Brush, Font, LineStyle, Pen};
pub use style::shape::{BASE_FONT_SIZE, ShapeStyle, StyleAttrs};
