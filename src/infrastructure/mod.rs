pub mod dom;
pub mod http;
pub mod rendering;
pub mod services;

pub use dom::{DomContainer, WindowResizeSource};
pub use http::GlooTransport;
pub use rendering::CanvasChartEngine;
pub use services::{BrowserTimeProvider, ConsoleLogger};
