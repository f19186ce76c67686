use crate::core::Viewport;
use crate::render::Scene;

/// The one persistent drawing handle owned by a plugin instance.
///
/// Created in `setup`, scoped to the host container, and threaded explicitly
/// into every render. Each render clears and repopulates the scene; there is
/// no incremental diffing across renders.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    scene: Scene,
}

impl Surface {
    /// Allocates the surface and injects the one-time stylesheet.
    #[must_use]
    pub fn mount(viewport: Viewport, stylesheet: impl Into<String>) -> Self {
        Self {
            scene: Scene::new(viewport).with_stylesheet(stylesheet),
        }
    }

    /// Starts a render pass: adopts the container's current dimensions and
    /// wipes all prior visual elements.
    pub fn begin_render(&mut self, viewport: Viewport) -> &mut Scene {
        self.scene.viewport = viewport;
        self.scene.clear();
        &mut self.scene
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}
