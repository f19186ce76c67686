use crate::api::config::{LabelType, RenderConfig};
use crate::core::{
    FlowGraph, SankeyLayoutOptions, format_number, layout_flow_graph,
};
use crate::render::{
    Color, PathFill, PathPrimitive, Scene, Stroke, TextHAlign, TextPrimitive, cubic_link_path,
    rect_path,
};

const LABEL_FONT_SIZE_PX: f64 = 14.0;
const LABEL_GAP_PX: f64 = 6.0;
const LINK_OPACITY: f64 = 0.5;
const MIN_RIBBON_WIDTH_PX: f64 = 1.0;

/// Builds the flow-graph render path: node bars, label text, and cubic link
/// ribbons colored by their source node.
pub(crate) fn build_sankey_chart(scene: &mut Scene, graph: &FlowGraph, config: &RenderConfig) {
    let layout = layout_flow_graph(graph, scene.viewport, SankeyLayoutOptions::default());
    if layout.is_empty() {
        return;
    }

    let palette = config.palette();
    let node_color = |node: usize| palette[node % palette.len()];
    let midline = f64::from(scene.viewport.width) / 2.0;

    for rect in &layout.nodes {
        let node = &graph.nodes[rect.node];

        scene.paths.push(
            PathPrimitive::new(
                rect_path(rect.x0, rect.y0, rect.x1 - rect.x0, rect.y1 - rect.y0),
                PathFill::Solid(node_color(rect.node)),
            )
            .with_class("node"),
        );

        let text = match config.label_type {
            LabelType::Name => node.label.clone(),
            LabelType::NameValue => {
                format!("{} ({})", node.label, format_number(node.weight()))
            }
        };
        // Labels sit outboard of the bar, flipping sides at the midline so
        // they stay inside the container.
        let (x, h_align) = if rect.x0 < midline {
            (rect.x1 + LABEL_GAP_PX, TextHAlign::Left)
        } else {
            (rect.x0 - LABEL_GAP_PX, TextHAlign::Right)
        };
        scene.labels.push(TextPrimitive::new(
            text,
            x,
            rect.center_y(),
            LABEL_FONT_SIZE_PX,
            Color::AXIS_INK,
            h_align,
        ));
    }

    for ribbon in &layout.links {
        let link = &graph.links[ribbon.link];
        scene.paths.push(
            PathPrimitive::new(
                cubic_link_path(
                    ribbon.source_x,
                    ribbon.source_y,
                    ribbon.target_x,
                    ribbon.target_y,
                ),
                PathFill::None,
            )
            .with_stroke(Stroke::new(
                node_color(link.source),
                ribbon.width.max(MIN_RIBBON_WIDTH_PX),
                false,
            ))
            .with_class("link")
            .with_opacity(LINK_OPACITY),
        );
    }

    scene.measure_total = Some(graph.total_flow());
}
