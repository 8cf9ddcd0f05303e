pub mod camera;
pub mod config;
pub mod constants;
pub mod controller;
pub mod geometry;
pub mod overlap;
pub mod port;
pub mod registry;
pub mod rooms;
pub mod schedule;

pub use camera::*;
pub use config::*;
pub use controller::*;
pub use geometry::*;
pub use overlap::{detect, OverlapReport};
pub use port::*;
pub use registry::*;
pub use rooms::*;
pub use schedule::*;
