// Presentation layer - Terminal UI
pub mod chart_view;
pub mod panel;
pub mod render;
pub mod table_view;
