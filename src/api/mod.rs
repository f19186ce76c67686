mod config;
mod descriptor;
mod host;
mod placeholder_chart;
mod plugin;
mod sankey_chart;
mod validation;

pub use config::{DEFAULT_COLOR_RANGE, LabelType, RenderConfig};
pub use descriptor::{OptionDescriptor, OptionDisplay, OptionType, VisualizationDescriptor};
pub use host::{Container, RenderDetails, RenderHost, VisRegistry};
pub use plugin::{NODE_LINK_STYLESHEET, RenderRequest, SankeyVis, Visualization};
pub use validation::{ShapeConstraints, check_shape};
