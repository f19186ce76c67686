use serde_json::json;
use tracing::{debug, warn};

use crate::api::config::RenderConfig;
use crate::api::descriptor::{
    OptionDescriptor, OptionDisplay, OptionType, VisualizationDescriptor,
};
use crate::api::host::{Container, RenderDetails, RenderHost};
use crate::api::placeholder_chart::build_placeholder_chart;
use crate::api::sankey_chart::build_sankey_chart;
use crate::api::validation::{ShapeConstraints, check_shape};
use crate::core::{QueryResponse, Row, build_flow_graph};
use crate::render::{Scene, Surface};

/// Styles injected once at setup; node and link elements fade on hover.
pub const NODE_LINK_STYLESHEET: &str = ".node,\n.link {\n  transition: 0.5s opacity;\n}";

/// Everything the host hands a visualization for one render pass.
/// All of it is read-only; the only thing a render writes is its surface.
#[derive(Debug)]
pub struct RenderRequest<'a> {
    pub rows: &'a [Row],
    pub container: Container,
    pub config: &'a RenderConfig,
    pub query: &'a QueryResponse,
    pub details: &'a RenderDetails,
}

/// Lifecycle contract a host drives: `setup` once when the container first
/// exists, then `render` on every data or configuration change, never
/// concurrently.
pub trait Visualization {
    /// Static metadata and options schema, stable across the plugin's life.
    fn descriptor(&self) -> VisualizationDescriptor;

    /// One-time surface allocation and style injection for a container.
    fn setup(&mut self, container: Container, initial_config: &RenderConfig);

    /// Rebuilds the drawing surface from the request.
    ///
    /// Never panics across this boundary: failures are reported through the
    /// host channel, and `rendering_done` fires exactly once per completed
    /// render (not at all for an aborted one).
    fn render(&mut self, request: &RenderRequest<'_>, host: &mut dyn RenderHost);

    /// Current surface contents, if `setup` has run.
    fn scene(&self) -> Option<&Scene>;
}

/// The sankey visualization plugin.
///
/// The default render path draws the placeholder area chart; the intended
/// sankey output is live behind [`SankeyVis::with_flow_rendering`], which
/// routes rows through the flow-graph builder instead.
pub struct SankeyVis {
    surface: Option<Surface>,
    flow_rendering: bool,
}

impl SankeyVis {
    pub const ID: &'static str = "sankey";
    pub const LABEL: &'static str = "Sankey";

    #[must_use]
    pub fn new() -> Self {
        Self {
            surface: None,
            flow_rendering: false,
        }
    }

    /// Opts into the flow-graph render path.
    #[must_use]
    pub fn with_flow_rendering(mut self, flow_rendering: bool) -> Self {
        self.flow_rendering = flow_rendering;
        self
    }

    /// Query shape this chart can draw: no pivots, at least two dimensions
    /// to form flow levels, exactly one measure for link weights.
    #[must_use]
    pub const fn shape_constraints() -> ShapeConstraints {
        ShapeConstraints::unbounded()
            .with_pivots(0, Some(0))
            .with_dimensions(2, None)
            .with_measures(1, Some(1))
    }
}

impl Default for SankeyVis {
    fn default() -> Self {
        Self::new()
    }
}

impl Visualization for SankeyVis {
    fn descriptor(&self) -> VisualizationDescriptor {
        VisualizationDescriptor::new(Self::ID, Self::LABEL)
            .with_option(
                "color_range",
                OptionDescriptor::new(
                    "Color Range",
                    OptionType::Array,
                    json!(crate::api::config::DEFAULT_COLOR_RANGE),
                )
                .with_display(OptionDisplay::Colors),
            )
            .with_option(
                "label_type",
                OptionDescriptor::new("Label Type", OptionType::String, json!("name"))
                    .with_display(OptionDisplay::Select)
                    .with_value("Name", "name")
                    .with_value("Name (value)", "name_value"),
            )
            .with_option(
                "show_null_points",
                OptionDescriptor::new("Plot Null Values", OptionType::Boolean, json!(true)),
            )
    }

    fn setup(&mut self, container: Container, _initial_config: &RenderConfig) {
        self.surface = Some(Surface::mount(
            container.client_viewport(),
            NODE_LINK_STYLESHEET,
        ));
    }

    fn render(&mut self, request: &RenderRequest<'_>, host: &mut dyn RenderHost) {
        if let Err(err) = check_shape(request.query, Self::shape_constraints()) {
            warn!(error = %err, "skipping render: query shape rejected");
            host.report_error("Unsupported query shape", &err.to_string());
            return;
        }

        let Some(surface) = self.surface.as_mut() else {
            warn!("skipping render: invoked before setup");
            host.report_error("Render lifecycle error", "render invoked before setup");
            return;
        };

        let viewport = request.container.client_viewport();
        if !viewport.is_valid() {
            // A zero-sized container occurs while the host is still laying
            // out; acknowledge the render and wait for the next one.
            debug!("container has no extent; nothing to draw");
            host.rendering_done();
            return;
        }

        let scene = surface.begin_render(viewport);

        if self.flow_rendering {
            let dimensions = &request.query.fields.dimension_like;
            let measure = &request.query.fields.measure_like[0];
            let graph = build_flow_graph(
                request.rows,
                dimensions,
                measure,
                request.config.show_null_points,
            );
            debug!(
                nodes = graph.nodes.len(),
                links = graph.links.len(),
                "flow graph built"
            );
            build_sankey_chart(scene, &graph, request.config);
        } else {
            build_placeholder_chart(scene, request.rows, request.query);
        }

        debug!(
            rows = request.rows.len(),
            elements = scene.element_count(),
            "render pass complete"
        );
        host.rendering_done();
    }

    fn scene(&self) -> Option<&Scene> {
        self.surface.as_ref().map(Surface::scene)
    }
}
