pub mod api;
pub mod app;
pub mod calendar;
pub mod cmds;
pub mod config;
pub mod ctrl;
pub mod ctx;
pub mod events;
pub mod holiday;
pub mod ui;
