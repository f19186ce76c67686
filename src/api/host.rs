use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::api::plugin::Visualization;
use crate::core::Viewport;

/// The host-supplied mount point. Dimensions are read at the start of each
/// render, never tracked reactively; a resize takes effect on the next
/// render the host triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub width: u32,
    pub height: u32,
}

impl Container {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Current client dimensions as a drawing viewport.
    #[must_use]
    pub fn client_viewport(self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}

/// Opaque host metadata passed alongside each render. Carried through for
/// completeness; nothing in the render path reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RenderDetails {
    #[serde(flatten)]
    pub host_metadata: IndexMap<String, serde_json::Value>,
}

/// Host-side channels a render needs: the error display and the completion
/// acknowledgment the host uses to serialize renders and time snapshots.
pub trait RenderHost {
    /// Surfaces a recoverable problem in the host's error UI.
    fn report_error(&mut self, title: &str, message: &str);

    /// Signals that all drawing work for the current render was issued.
    /// Invoked exactly once per completed render, never on an aborted one.
    fn rendering_done(&mut self);
}

/// Process-wide plugin registry analog.
///
/// Registration is an explicit call made once at startup — no module-load
/// side effects — so the lifecycle is drivable from tests without a host.
#[derive(Default)]
pub struct VisRegistry {
    visualizations: Vec<Box<dyn Visualization>>,
}

impl VisRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a visualization. Later registrations win id lookups, matching
    /// host behavior when a plugin is re-registered.
    pub fn register(&mut self, visualization: Box<dyn Visualization>) {
        self.visualizations.push(visualization);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visualizations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visualizations.is_empty()
    }

    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.visualizations
            .iter()
            .map(|vis| vis.descriptor().id)
            .collect()
    }

    #[must_use]
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Box<dyn Visualization>> {
        self.visualizations
            .iter_mut()
            .rev()
            .find(|vis| vis.descriptor().id == id)
    }
}
