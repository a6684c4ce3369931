// FileScout - ui/panels/mod.rs

pub mod about;
pub mod folders;
pub mod notice;
pub mod preview;
pub mod results;
pub mod search_bar;
