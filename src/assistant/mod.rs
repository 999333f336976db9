// file: src/assistant/mod.rs
// description: grounded assistant module exports
// reference: internal module structure

pub mod client;
pub mod context;
pub mod prompt;
pub mod service;

pub use client::ChatClient;
pub use context::{ContextBlock, build_context};
pub use service::Assistant;
