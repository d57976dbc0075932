//! Report renderers implementing [`ReportRenderer`](meshcheck_core::application::ports::ReportRenderer).

pub mod json;
pub mod text;

pub use json::JsonRenderer;
pub use text::TextRenderer;
