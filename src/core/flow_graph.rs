use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::core::query::FieldDescriptor;
use crate::core::types::{DrillLink, Row};

/// Node in the flow graph, unique per (label, depth) pair.
///
/// Depth participates in identity: the same label appearing at two path
/// depths must stay two distinct nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowNode {
    pub label: String,
    pub depth: usize,
    pub inflow: f64,
    pub outflow: f64,
}

impl FlowNode {
    /// Throughflow used for layout sizing: the larger of the two sides.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.inflow.max(self.outflow)
    }
}

/// Directed link between two nodes, aggregated over all contributing rows.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowLink {
    pub source: usize,
    pub target: usize,
    pub value: f64,
    pub drill_links: Vec<DrillLink>,
}

/// Deduplicated node/link sets built from dimension paths.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub links: Vec<FlowLink>,
}

impl FlowGraph {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Number of distinct path depths present, 0 for an empty graph.
    #[must_use]
    pub fn depth_count(&self) -> usize {
        self.nodes
            .iter()
            .map(|node| node.depth + 1)
            .max()
            .unwrap_or(0)
    }

    /// Sum of all link values.
    #[must_use]
    pub fn total_flow(&self) -> f64 {
        self.links.iter().map(|link| link.value).sum()
    }
}

/// Builds the node-link flow graph from tabular rows.
///
/// For each row the ordered dimension values form a path of levels; when
/// `show_null_points` is false the path is truncated at the first null
/// dimension, otherwise nulls keep their place with a literal `null` label.
/// Each adjacent level pair contributes a directed link whose value
/// accumulates the row's measure over every row sharing that pair; link
/// drill metadata is the deduplicated union across contributing rows. Rows
/// whose measure has no numeric view are skipped.
#[must_use]
pub fn build_flow_graph(
    rows: &[Row],
    dimensions: &[FieldDescriptor],
    measure: &FieldDescriptor,
    show_null_points: bool,
) -> FlowGraph {
    let mut node_index: IndexMap<(String, usize), usize> = IndexMap::new();
    let mut link_index: IndexMap<(usize, usize), usize> = IndexMap::new();
    let mut nodes: Vec<FlowNode> = Vec::new();
    let mut links: Vec<FlowLink> = Vec::new();

    for row in rows {
        let Some(value) = row.get(&measure.name).and_then(|cell| cell.value_as_f64()) else {
            continue;
        };

        let mut path: SmallVec<[String; 4]> = SmallVec::new();
        for dimension in dimensions {
            let cell = row.get(&dimension.name);
            let is_null = cell.is_none_or(|cell| cell.value.is_null());
            if is_null && !show_null_points {
                break;
            }
            path.push(match cell {
                Some(cell) => cell.value.display_label(),
                None => "null".to_owned(),
            });
        }
        if path.len() < 2 {
            continue;
        }

        let row_links: Vec<DrillLink> = row
            .values()
            .flat_map(|cell| cell.links.iter().cloned())
            .collect();

        for depth in 0..path.len() - 1 {
            let source = intern_node(&mut node_index, &mut nodes, &path[depth], depth);
            let target = intern_node(&mut node_index, &mut nodes, &path[depth + 1], depth + 1);

            nodes[source].outflow += value;
            nodes[target].inflow += value;

            match link_index.get(&(source, target)) {
                Some(&existing) => {
                    links[existing].value += value;
                    merge_drill_links(&mut links[existing].drill_links, &row_links);
                }
                None => {
                    link_index.insert((source, target), links.len());
                    let mut drill_links = Vec::new();
                    merge_drill_links(&mut drill_links, &row_links);
                    links.push(FlowLink {
                        source,
                        target,
                        value,
                        drill_links,
                    });
                }
            }
        }
    }

    FlowGraph { nodes, links }
}

fn intern_node(
    node_index: &mut IndexMap<(String, usize), usize>,
    nodes: &mut Vec<FlowNode>,
    label: &str,
    depth: usize,
) -> usize {
    let key = (label.to_owned(), depth);
    if let Some(&existing) = node_index.get(&key) {
        return existing;
    }
    let index = nodes.len();
    node_index.insert(key, index);
    nodes.push(FlowNode {
        label: label.to_owned(),
        depth,
        inflow: 0.0,
        outflow: 0.0,
    });
    index
}

fn merge_drill_links(existing: &mut Vec<DrillLink>, incoming: &[DrillLink]) {
    for link in incoming {
        if !existing.contains(link) {
            existing.push(link.clone());
        }
    }
}
