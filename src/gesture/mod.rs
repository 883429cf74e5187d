//! Gesture capture and estimation
//!
//! Everything here is pure and frame-driven:
//! - Explicit timestamps only, no ambient clock reads
//! - Estimators are deterministic functions of the record and config
//! - No physics or rendering dependencies

pub mod bend;
pub mod controller;
pub mod fit;
pub mod record;

pub use bend::stroke_bend;
pub use controller::{GesturePhase, SwipeController};
pub use fit::{FitResult, fit_stroke};
pub use record::{GestureRecord, Sample, SampleOutcome};
