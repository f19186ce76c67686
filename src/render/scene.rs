use crate::core::Viewport;
use crate::error::{VisError, VisResult};
use crate::render::{AxisGroup, GradientDef, PathPrimitive, TextPrimitive};

/// Backend-agnostic scene for one render pass.
///
/// The stylesheet survives `clear` because it is injected once at setup;
/// every other element set is rebuilt from scratch on each render, so two
/// renders over identical inputs compare equal.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub viewport: Viewport,
    pub stylesheet: Option<String>,
    pub gradients: Vec<GradientDef>,
    pub paths: Vec<PathPrimitive>,
    pub axes: Vec<AxisGroup>,
    pub labels: Vec<TextPrimitive>,
    /// Aggregate of the plotted measure over all rows, surfaced for the
    /// host's summary display.
    pub measure_total: Option<f64>,
}

impl Scene {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            stylesheet: None,
            gradients: Vec::new(),
            paths: Vec::new(),
            axes: Vec::new(),
            labels: Vec::new(),
            measure_total: None,
        }
    }

    #[must_use]
    pub fn with_stylesheet(mut self, stylesheet: impl Into<String>) -> Self {
        self.stylesheet = Some(stylesheet.into());
        self
    }

    #[must_use]
    pub fn with_gradient(mut self, gradient: GradientDef) -> Self {
        self.gradients.push(gradient);
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: PathPrimitive) -> Self {
        self.paths.push(path);
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisGroup) -> Self {
        self.axes.push(axis);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: TextPrimitive) -> Self {
        self.labels.push(label);
        self
    }

    /// Drops all visual elements while keeping the injected stylesheet.
    pub fn clear(&mut self) {
        self.gradients.clear();
        self.paths.clear();
        self.axes.clear();
        self.labels.clear();
        self.measure_total = None;
    }

    pub fn validate(&self) -> VisResult<()> {
        if !self.viewport.is_valid() {
            return Err(VisError::InvalidContainer {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for gradient in &self.gradients {
            gradient.validate()?;
        }
        for path in &self.paths {
            path.validate()?;
        }
        for axis in &self.axes {
            axis.validate()?;
        }
        for label in &self.labels {
            label.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gradients.is_empty()
            && self.paths.is_empty()
            && self.axes.is_empty()
            && self.labels.is_empty()
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.gradients.len() + self.paths.len() + self.axes.len() + self.labels.len()
    }
}
