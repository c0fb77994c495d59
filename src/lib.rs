pub mod config;
pub mod consts;
pub mod error;
pub mod file;
pub mod gui;
pub mod orrery;

pub use config::SimConfig;
pub use error::{SimError, SimResult};
