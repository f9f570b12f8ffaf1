pub mod tutorial_tags;
pub mod ui;
