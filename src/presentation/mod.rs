pub mod chart_component;
pub mod dashboard;
pub mod wasm_api;

pub use chart_component::ChartComponent;
pub use dashboard::Dashboard;
