//! Report core: finding aggregation, classification and rendering
//!
//! The compiler merges heterogeneous MCP tool payloads into one
//! [`AggregateReport`](crate::models::AggregateReport); the fallback
//! synthesizer substitutes local heuristics when no source is reachable;
//! the renderer maps the report to markdown.

pub mod compiler;
pub mod dedup;
pub mod fallback;
pub mod render;
pub mod resolve;

pub use compiler::{compile, AgentProfile};
pub use dedup::dedup_references;
pub use fallback::synthesize_fallback;
pub use render::render_report;
pub use resolve::{resolve_compliance, resolve_priority};
