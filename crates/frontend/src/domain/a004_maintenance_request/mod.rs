pub mod api;
pub mod lifecycle_controller;
pub mod ui;
