// FileScout - app/mod.rs
//
// Application layer: orchestration and state management.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod search;
pub mod state;
