pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod flash;
pub mod host;
pub mod input;
pub mod motion;
pub mod sim;
pub mod visual;

pub use config::*;
pub use constants::*;
pub use controller::*;
pub use error::*;
pub use flash::*;
pub use host::*;
pub use input::*;
pub use motion::*;
pub use sim::*;
pub use visual::*;

pub use glam::Vec2;
