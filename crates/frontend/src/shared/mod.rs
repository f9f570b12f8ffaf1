pub mod clipboard;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod emoji;
pub mod i18n;
pub mod theme;
