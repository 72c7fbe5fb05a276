pub mod api;
pub mod config;
pub mod humanize;
pub mod observability;
pub mod upstream;
pub mod wallpaper;
