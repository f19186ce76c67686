use ordered_float::OrderedFloat;

use crate::core::flow_graph::FlowGraph;
use crate::core::types::Viewport;

/// Pixel rectangle for one laid-out node. `node` indexes into the graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeRect {
    pub node: usize,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl NodeRect {
    #[must_use]
    pub fn center_y(self) -> f64 {
        (self.y0 + self.y1) / 2.0
    }
}

/// Pixel ribbon for one laid-out link. `link` indexes into the graph;
/// y values are ribbon center lines at each end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkRibbon {
    pub link: usize,
    pub source_x: f64,
    pub source_y: f64,
    pub target_x: f64,
    pub target_y: f64,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SankeyLayout {
    pub nodes: Vec<NodeRect>,
    pub links: Vec<LinkRibbon>,
}

impl SankeyLayout {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Layout tuning; defaults match the conventional node bar proportions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SankeyLayoutOptions {
    pub node_width_px: f64,
    pub node_padding_px: f64,
}

impl Default for SankeyLayoutOptions {
    fn default() -> Self {
        Self {
            node_width_px: 24.0,
            node_padding_px: 8.0,
        }
    }
}

/// Positions graph nodes in depth columns and links as ribbons between them.
///
/// Columns are spread across the viewport width; within a column nodes stack
/// top-down in descending weight order with fixed padding. Node heights and
/// ribbon widths share one value-to-pixel factor chosen so the tallest
/// column fits the viewport. Empty graphs and zero-weight columns produce an
/// empty or flat layout rather than failing.
#[must_use]
pub fn layout_flow_graph(
    graph: &FlowGraph,
    viewport: Viewport,
    options: SankeyLayoutOptions,
) -> SankeyLayout {
    if graph.nodes.is_empty() || !viewport.is_valid() {
        return SankeyLayout::default();
    }

    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let depth_count = graph.depth_count();

    let mut columns: Vec<Vec<usize>> = vec![Vec::new(); depth_count];
    for (index, node) in graph.nodes.iter().enumerate() {
        columns[node.depth].push(index);
    }
    for column in &mut columns {
        column.sort_by_key(|&index| OrderedFloat(-graph.nodes[index].weight()));
    }

    // One shared value→pixel factor, limited by the fullest column.
    let mut scale = f64::INFINITY;
    for column in &columns {
        let weight_sum: f64 = column.iter().map(|&i| graph.nodes[i].weight()).sum();
        if weight_sum <= 0.0 {
            continue;
        }
        let padding_total = options.node_padding_px * column.len().saturating_sub(1) as f64;
        let available = (height - padding_total).max(0.0);
        scale = scale.min(available / weight_sum);
    }
    if !scale.is_finite() {
        scale = 0.0;
    }

    let column_step = if depth_count > 1 {
        (width - options.node_width_px).max(0.0) / (depth_count - 1) as f64
    } else {
        0.0
    };

    let mut rects: Vec<NodeRect> = Vec::with_capacity(graph.nodes.len());
    let mut rect_by_node: Vec<usize> = vec![0; graph.nodes.len()];
    for (depth, column) in columns.iter().enumerate() {
        let x0 = column_step * depth as f64;
        let mut cursor = 0.0;
        for &index in column {
            let node_height = graph.nodes[index].weight() * scale;
            rect_by_node[index] = rects.len();
            rects.push(NodeRect {
                node: index,
                x0,
                y0: cursor,
                x1: x0 + options.node_width_px,
                y1: cursor + node_height,
            });
            cursor += node_height + options.node_padding_px;
        }
    }

    // Ribbon slots walk down each node edge in link declaration order.
    let mut out_cursor: Vec<f64> = rects.iter().map(|rect| rect.y0).collect();
    let mut in_cursor: Vec<f64> = rects.iter().map(|rect| rect.y0).collect();
    let mut ribbons: Vec<LinkRibbon> = Vec::with_capacity(graph.links.len());
    for (index, link) in graph.links.iter().enumerate() {
        let source_rect = rect_by_node[link.source];
        let target_rect = rect_by_node[link.target];
        let ribbon_width = link.value * scale;

        let source_y = out_cursor[source_rect] + ribbon_width / 2.0;
        out_cursor[source_rect] += ribbon_width;
        let target_y = in_cursor[target_rect] + ribbon_width / 2.0;
        in_cursor[target_rect] += ribbon_width;

        ribbons.push(LinkRibbon {
            link: index,
            source_x: rects[source_rect].x1,
            source_y,
            target_x: rects[target_rect].x0,
            target_y,
            width: ribbon_width,
        });
    }

    SankeyLayout {
        nodes: rects,
        links: ribbons,
    }
}
