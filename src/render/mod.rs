mod null_renderer;
mod primitives;
mod scene;
mod surface;
mod svg_backend;

pub use null_renderer::NullRenderer;
pub use primitives::{
    AxisGroup, AxisOrientation, AxisTick, Color, GradientDef, GradientStop, PathFill,
    PathPrimitive, Stroke, TextHAlign, TextPrimitive, cubic_link_path, path_data_from_vertices,
    rect_path,
};
pub use scene::Scene;
pub use surface::Surface;
pub use svg_backend::{SvgRenderer, render_svg_document};

use crate::error::VisResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `Scene` so output
/// serialization stays isolated from chart domain and lifecycle logic.
pub trait Renderer {
    fn render(&mut self, scene: &Scene) -> VisResult<()>;
}
