pub mod app;
pub mod color;
pub mod compare;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod headless;
pub mod images;
pub mod session;
pub mod state;
pub mod ui;
