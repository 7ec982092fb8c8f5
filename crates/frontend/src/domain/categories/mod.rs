pub mod api;
pub mod controller;
pub mod selection;
pub mod ui;
