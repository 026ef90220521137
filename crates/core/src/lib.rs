//! # boxfit core
//!
//! How many copies of an item fit inside a container, recomputed every time
//! either set of dimensions changes.
//!
//! ## Core Components
//!
//! - **Dimensions**: [`Dimension`], [`Axis`], [`DimTuple`]
//! - **Calculators**: [`fit_ratio`] (container / item per axis) and
//!   [`total_fit`] (product of the floored finite ratios)
//! - **Observable state**: [`Store`] cells composed by [`FitState`], which
//!   keeps the derived values in step with its inputs
//! - **Configuration**: [`Config`] for initial values and the optional
//!   validation policy
//!
//! ```rust
//! use boxfit_core::{Dimension, FitState};
//!
//! let mut state = FitState::new();
//! state.subscribe_total_fit(|n| println!("{} items fit", n));
//!
//! state.set_container(Dimension::new(240.0, 60.0, 40.0));
//! assert_eq!(state.total_fit(), 12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod config;
pub mod dimension;
pub mod error;
pub mod fit;
pub mod state;
pub mod store;

// Re-exports
pub use config::Config;
pub use dimension::{Axis, DimTuple, Dimension};
pub use error::{Error, Result};
pub use fit::{fit_ratio, total_fit, FitRatio};
pub use state::{FitSnapshot, FitState};
pub use store::{Store, Subscriber, SubscriptionId};
