#![forbid(unsafe_code)]

//! Core domain model and metric formulas for the workout tracker.
//!
//! This crate provides:
//! - Workout types and their distance, speed and calorie formulas
//! - The summary record and its rendering
//! - Validation of raw sensor packages
//! - Batch processing with per-package error reporting

pub mod error;
pub mod info;
pub mod training;
pub mod package;
pub mod driver;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, ErrorCategory, PackageError, Result};
pub use info::InfoMessage;
pub use training::{Running, SportsWalking, Swimming, Training, TrainingBase, Workout};
pub use package::{read_package, Package, WorkoutType};
pub use driver::{process, sample_packages, Outcome};
pub use config::Config;
