pub mod app;
pub mod controller;
pub mod input;
pub mod list;
pub mod render;
pub mod text_input;
pub mod theme;

pub use app::run;
