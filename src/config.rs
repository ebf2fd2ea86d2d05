//! Triangulator configuration and builder

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{DelaunayError, Result};

/// Default super-triangle margin, in multiples of the larger bounding-box side
pub const DEFAULT_SUPER_TRIANGLE_MARGIN: f64 = 20.0;

/// Smallest margin for which the super-triangle still encloses the bounding box
pub const MIN_SUPER_TRIANGLE_MARGIN: f64 = 2.0;

/// What to do with input points that exactly repeat an earlier point
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Insert only the first occurrence and log the rest
    #[default]
    Skip,
    /// Fail the call with `InvalidInput`
    Reject,
}

/// Settings for a [`Delaunay`](crate::Delaunay) triangulator
///
/// # Example
///
/// ```rust
/// use rust_planar_delaunay::*;
///
/// let config = TriangulatorConfigBuilder::new()
///     .super_triangle_margin(50.0)
///     .unwrap()
///     .duplicate_policy(DuplicatePolicy::Reject)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.super_triangle_margin, 50.0);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangulatorConfig {
    /// How far the super-triangle reaches past the input
    ///
    /// The super-triangle vertices sit `margin * deltaMax` away from the
    /// bounding-box center, where `deltaMax` is the larger box side. Points
    /// near the convex hull whose true Delaunay triangles have very large
    /// circumcircles need a larger margin, at the cost of precision.
    pub super_triangle_margin: f64,

    /// Handling of exact duplicate input points
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for TriangulatorConfig {
    fn default() -> Self {
        Self {
            super_triangle_margin: DEFAULT_SUPER_TRIANGLE_MARGIN,
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

impl TriangulatorConfig {
    /// Check the settings
    ///
    /// The fields are public, so a config built as a struct literal or
    /// deserialized never went through the builder. [`Delaunay`](crate::Delaunay)
    /// calls this before every run.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the super-triangle margin is not finite or is
    /// below [`MIN_SUPER_TRIANGLE_MARGIN`].
    pub fn validate(&self) -> Result<()> {
        check_margin(self.super_triangle_margin)
    }
}

fn check_margin(margin: f64) -> Result<()> {
    if !margin.is_finite() || margin < MIN_SUPER_TRIANGLE_MARGIN {
        return Err(DelaunayError::InvalidConfig(format!(
            "super-triangle margin must be finite and >= {} (got {})",
            MIN_SUPER_TRIANGLE_MARGIN, margin
        )));
    }
    Ok(())
}

/// Builder for creating a validated [`TriangulatorConfig`]
#[derive(Debug, Clone, Default)]
pub struct TriangulatorConfigBuilder {
    config: TriangulatorConfig,
}

impl TriangulatorConfigBuilder {
    /// Create a builder with default values
    ///
    /// Defaults:
    /// - super_triangle_margin: 20
    /// - duplicate_policy: Skip
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the super-triangle margin
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the margin is not finite or is below 2, where
    /// the super-triangle would no longer enclose the bounding box.
    pub fn super_triangle_margin(mut self, margin: f64) -> Result<Self> {
        check_margin(margin)?;
        self.config.super_triangle_margin = margin;
        Ok(self)
    }

    /// Set the duplicate point policy
    pub fn duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.config.duplicate_policy = policy;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the assembled settings fail
    /// [`TriangulatorConfig::validate`].
    pub fn build(self) -> Result<TriangulatorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
