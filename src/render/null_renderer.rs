use crate::error::VisResult;
use crate::render::{Renderer, Scene};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates scene content so tests catch invalid geometry before
/// a real backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_calls: usize,
    pub last_gradient_count: usize,
    pub last_path_count: usize,
    pub last_axis_count: usize,
    pub last_label_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, scene: &Scene) -> VisResult<()> {
        scene.validate()?;
        self.render_calls += 1;
        self.last_gradient_count = scene.gradients.len();
        self.last_path_count = scene.paths.len();
        self.last_axis_count = scene.axes.len();
        self.last_label_count = scene.labels.len();
        Ok(())
    }
}
