//! Tutorial Metadata UI Module
//!
//! Metadata strip shown beneath a tutorial article:
//! - view_model.rs: presence rules and labels derived from the record (no DOM)
//! - view.rs: Leptos component (pure UI), renders the view model's labels

mod view;
mod view_model;

pub use view::TutorialMetadata;
