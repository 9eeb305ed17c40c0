//! Core algorithms for robust estimation.
//!
//! This crate holds the numerically exacting parts of robustat: selection of
//! order statistics among implicit pairwise combinations, the margin
//! calculations that turn a misrate into index offsets, and the portable PRNG
//! that every randomized step draws from. It is designed to work in `no_std`
//! environments with only an allocator.
//!
//! # Features
//!
//! - `std` (default): `std::error::Error` impls and serde derives
//!
//! # Usage
//!
//! Most users go through the `robustat` crate, which wraps these functions
//! around a validated `Sample` type and adds logging. The slice-level API is
//! usable directly:
//!
//! ```
//! use robustat_core::{bounds, estimators};
//!
//! let x: Vec<f64> = (1..=30).map(f64::from).collect();
//! let y: Vec<f64> = (21..=50).map(f64::from).collect();
//!
//! assert_eq!(estimators::shift(&x, &y).unwrap(), -20.0);
//! let b = bounds::shift_bounds(&x, &y, 1e-3).unwrap();
//! assert_eq!((b.lower, b.upper), (-28.0, -12.0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod assumptions;
pub mod bounds;
pub mod constants;
pub mod error;
pub mod estimators;
pub mod margin;
pub mod math;
pub mod rng;
pub mod selection;

// Re-export commonly used items at crate root
pub use assumptions::{AssumptionError, AssumptionId, Subject, Violation};
pub use bounds::Bounds;
pub use error::{Error, Result};
pub use rng::Rng;
