pub mod api;
pub mod context;
pub mod ui;
