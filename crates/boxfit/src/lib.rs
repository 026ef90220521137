//! # boxfit
//!
//! How many items fit in a container, kept up to date as dimensions change.
//!
//! ## Quick Start
//!
//! ```rust
//! use boxfit::{Dimension, FitState};
//!
//! let mut state = FitState::new();
//! state.set_item(Dimension::new(40.0, 30.0, 20.0));
//! assert_eq!(state.total_fit(), 12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support

/// Core types, calculators and stores.
pub use boxfit_core as core;

// Re-export commonly used types at root level
pub use boxfit_core::{
    fit_ratio, total_fit, Config, Dimension, Error, FitRatio, FitSnapshot, FitState, Result,
    SubscriptionId,
};
