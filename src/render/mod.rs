mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, CurvePrimitive, LinePrimitive, MarkerPrimitive, RectPrimitive, TextHAlign,
    TextPrimitive, TextVAlign,
};

use crate::error::GraphResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from graph domain logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
