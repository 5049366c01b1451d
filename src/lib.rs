//! Tablet - editable grid view for delimited text documents
//!
//! This crate provides the core types and logic for viewing and editing a
//! CSV document as a grid, implementing the Elm Architecture pattern. The
//! host pushes document text in, pulls serialized text out, and supplies the
//! renderer, link navigator and persistence hooks.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod csv;
pub mod debug_dump;
pub mod editable;
pub mod host;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::GridConfig;
pub use messages::Msg;
pub use model::GridModel;
pub use runtime::GridRuntime;
pub use update::update;
