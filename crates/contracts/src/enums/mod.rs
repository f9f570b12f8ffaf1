pub mod language;
pub mod skill_level;
