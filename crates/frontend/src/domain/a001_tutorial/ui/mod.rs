pub mod metadata;
pub mod page;
