//! Engine configuration
//!
//! Numeric and behavioral options for a layout surface. The container and
//! item bindings themselves are supplied by the host's [`Surface`]
//! implementation, not by configuration.
//!
//! [`Surface`]: crate::surface::Surface

use serde::{Deserialize, Serialize};

use crate::error::MasonryError;

fn default_gap_size() -> f32 {
    10.0
}

/// Configuration for a masonry layout surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasonryConfig {
    /// Fixed pixel width shared by every item. Required, must be positive.
    pub item_width: f32,

    /// Pixel spacing between items, both horizontally and vertically
    #[serde(default = "default_gap_size")]
    pub gap_size: f32,

    /// Enables the drag-to-reorder controller
    #[serde(default)]
    pub draggable: bool,
}

impl MasonryConfig {
    /// Configuration with the given item width and default options
    pub fn new(item_width: f32) -> Self {
        Self {
            item_width,
            gap_size: default_gap_size(),
            draggable: false,
        }
    }

    /// Parse a configuration from YAML and validate it
    pub fn from_yaml_str(content: &str) -> Result<Self, MasonryError> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| MasonryError::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can produce a layout.
    ///
    /// A non-positive item width or a negative gap cannot be laid out and
    /// must be rejected before the engine becomes interactive.
    pub fn validate(&self) -> Result<(), MasonryError> {
        if !self.item_width.is_finite() || self.item_width <= 0.0 {
            return Err(MasonryError::Config(format!(
                "item_width must be positive, got {}",
                self.item_width
            )));
        }
        if !self.gap_size.is_finite() || self.gap_size < 0.0 {
            return Err(MasonryError::Config(format!(
                "gap_size must be non-negative, got {}",
                self.gap_size
            )));
        }
        Ok(())
    }
}
