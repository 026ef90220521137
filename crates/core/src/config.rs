//! Initial values and validation policy for [`FitState`](crate::FitState).

use crate::dimension::Dimension;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a fit state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Initial container dimensions.
    pub container: Dimension,

    /// Initial item dimensions.
    pub item: Dimension,

    /// Initial repeat flag.
    pub repeat: bool,

    /// Whether the `try_set_*` setters reject non-positive or non-finite extents.
    /// The plain setters always accept any value.
    pub validate_dimensions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            container: Dimension::default_container(),
            item: Dimension::default_item(),
            repeat: true,
            validate_dimensions: false,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial container dimensions.
    pub fn with_container(mut self, container: Dimension) -> Self {
        self.container = container;
        self
    }

    /// Sets the initial item dimensions.
    pub fn with_item(mut self, item: Dimension) -> Self {
        self.item = item;
        self
    }

    /// Sets the initial repeat flag.
    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }

    /// Enables or disables dimension validation in the `try_set_*` setters.
    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validate_dimensions = enabled;
        self
    }

    /// Checks the initial dimensions against the configured policy.
    pub fn validate(&self) -> Result<()> {
        if !self.validate_dimensions {
            return Ok(());
        }
        self.container
            .validate()
            .map_err(|e| Error::ConfigError(format!("container: {}", e)))?;
        self.item
            .validate()
            .map_err(|e| Error::ConfigError(format!("item: {}", e)))?;
        Ok(())
    }
}
