pub mod force_graph;
pub mod graph_form;
pub mod notice;
pub mod sidebar;
