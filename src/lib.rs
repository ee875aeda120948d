pub mod commands;
pub mod config;
pub mod cv;
pub mod db;
pub mod error;
pub mod gemini;
pub mod lines;
pub mod temperature;
pub mod utils;

pub use error::KitError;
