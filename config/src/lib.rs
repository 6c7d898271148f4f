//! # Config Crate
//!
//! Centralized configuration constants for the QR tag pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, SIZE_RANGE, BEVEL_DEPTH};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//!
//! // Supported ranges gate incoming design parameters
//! assert!(SIZE_RANGE.contains(50.0));
//! assert!(BEVEL_DEPTH > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Millimetres**: Every length is in printer millimetres
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
