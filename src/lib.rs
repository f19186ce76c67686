//! sankey-vis: visualization plugin core for BI dashboard hosts.
//!
//! The crate models the host-facing plugin contract (descriptor, options
//! schema, setup/render lifecycle, completion signaling), the data shaping
//! that turns dimension/measure rows into a node-link flow graph, and the
//! scale and geometry work that maps data domains onto pixel space. Output
//! is a backend-agnostic scene; the bundled SVG backend serializes it into
//! the markup a host composites.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{RenderConfig, RenderRequest, SankeyVis, VisRegistry, Visualization};
pub use error::{VisError, VisResult};
