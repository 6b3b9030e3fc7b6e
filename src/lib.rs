mod views;
mod routes;
pub mod binding;
pub mod configs;
pub mod controllers;
pub mod error;
pub mod utils;

pub use crate::routes::*;
pub use crate::configs::PageConfig;
pub use crate::controllers::{ MenuController, ThemeController };
pub use crate::error::PageError;
