// FileScout - core/mod.rs
//
// Core business logic layer.
// Dependencies: walkdir for traversal, document decoders for preview.
// Must NOT depend on: ui, platform, app.

pub mod model;
pub mod preview;
pub mod registry;
pub mod results;
pub mod search;
