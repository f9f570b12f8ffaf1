pub mod link;
pub mod pill;

pub use link::Link;
pub use pill::Pill;
