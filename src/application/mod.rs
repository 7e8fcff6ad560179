pub mod chart_adapter;
pub mod financials;

pub use chart_adapter::*;
pub use financials::*;
