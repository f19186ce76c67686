pub mod area;
pub mod flow_graph;
pub mod query;
pub mod sankey_layout;
pub mod scale;
pub mod types;

pub use area::{
    AreaGeometry, AreaVertex, measure_total, project_area_geometry, sample_series,
    series_from_rows,
};
pub use flow_graph::{FlowGraph, FlowLink, FlowNode, build_flow_graph};
pub use query::{FieldDescriptor, QueryFields, QueryResponse};
pub use sankey_layout::{
    LinkRibbon, NodeRect, SankeyLayout, SankeyLayoutOptions, layout_flow_graph,
};
pub use scale::{LinearScale, extent, field_extent, field_values, field_zero_to_max};
pub use types::{Cell, CellValue, DataPoint, DrillLink, Row, Viewport, format_number};
