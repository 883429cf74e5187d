//! Screen-to-world mapping and launch synthesis
//!
//! Converts reference-space gesture geometry into ground-plane vectors,
//! final launch parameters, and a projected stroke path for visualization.

pub mod launch;
pub mod mapper;
pub mod path;

pub use launch::{LaunchBody, LaunchParameters, LaunchScene, synthesize_launch};
pub use mapper::{CameraFrame, delta_to_world, dir_to_world};
pub use path::{world_fit_segment, world_path_from_samples};
