//! Configuration for filter lookups.
//!
//! Configuration is usually loaded from a TOML file:
//!
//! ```toml
//! order = 4
//! prefer_symmlet = true
//! sides = ["left", "right"]
//!
//! [output]
//! format = "json"
//! precision = 12
//! ```
//!
//! Every field is optional; missing fields take the values of
//! `FilterConfig::default()`.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::{MAX_BOUNDARY_ORDER, MIN_BOUNDARY_ORDER, MIN_INTERIOR_ORDER};
use crate::error::{FilterError, Result};
use crate::filters::Side;
use crate::output::OutputFormat;

/// Largest number of fractional digits that still carries information for `f64`.
const MAX_PRECISION: usize = 17;

/// Filter selection and output configuration
///
/// # Example
/// ```
/// use daubechies_filters::config::FilterConfig;
///
/// let config = FilterConfig::from_toml_str("order = 6\nsides = [\"L\"]").unwrap();
/// assert_eq!(config.order, 6);
/// assert!(config.prefer_symmlet);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Vanishing-moment order `p`
    pub order: i32,
    /// Use the tabulated symmlet for interior filters when one exists
    pub prefer_symmlet: bool,
    /// Edges whose boundary families are requested (empty for interior only)
    pub sides: Vec<Side>,
    /// Presentation settings
    pub output: OutputConfig,
}

/// Presentation settings for filter reports
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Report format
    pub format: OutputFormat,
    /// Fractional digits printed by the text and CSV formats
    pub precision: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            order: 4,
            prefer_symmlet: true,
            sides: vec![Side::Left, Side::Right],
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            precision: 16,
        }
    }
}

impl FilterConfig {
    /// Parse and validate a TOML document
    ///
    /// # Errors
    /// Returns `FilterError::Config` on malformed TOML or invalid values
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FilterConfig =
            toml::from_str(content).map_err(|e| FilterError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    ///
    /// # Errors
    /// Returns `FilterError::Config` if the file cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| FilterError::Config(format!("{}: {}", path.display(), e)))?;
        log::debug!("Loading filter configuration from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Check that the requested filters exist
    ///
    /// # Errors
    /// Returns `FilterError::Config` describing the first invalid value
    pub fn validate(&self) -> Result<()> {
        if self.order < MIN_INTERIOR_ORDER {
            return Err(FilterError::Config(format!(
                "order must be >= {}, got {}",
                MIN_INTERIOR_ORDER, self.order
            )));
        }
        if !self.sides.is_empty()
            && !(MIN_BOUNDARY_ORDER..=MAX_BOUNDARY_ORDER).contains(&self.order)
        {
            return Err(FilterError::Config(format!(
                "boundary families need order in {}..={}, got {}",
                MIN_BOUNDARY_ORDER, MAX_BOUNDARY_ORDER, self.order
            )));
        }
        if self.output.precision > MAX_PRECISION {
            return Err(FilterError::Config(format!(
                "precision must be <= {}, got {}",
                MAX_PRECISION, self.output.precision
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        FilterConfig::default().validate().unwrap();
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = FilterConfig::from_toml_str("").unwrap();
        assert_eq!(config.order, 4);
        assert!(config.prefer_symmlet);
        assert_eq!(config.sides, vec![Side::Left, Side::Right]);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_full_document() {
        let config = FilterConfig::from_toml_str(
            r#"
            order = 7
            prefer_symmlet = false
            sides = ["R"]

            [output]
            format = "csv"
            precision = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.order, 7);
        assert!(!config.prefer_symmlet);
        assert_eq!(config.sides, vec![Side::Right]);
        assert_eq!(config.output.format, OutputFormat::Csv);
        assert_eq!(config.output.precision, 10);
    }

    #[test]
    fn test_interior_only_allows_high_orders() {
        let config = FilterConfig::from_toml_str("order = 12\nsides = []").unwrap();
        assert_eq!(config.order, 12);
        assert!(config.sides.is_empty());
    }

    #[test]
    fn test_boundary_order_out_of_range() {
        let result = FilterConfig::from_toml_str("order = 9");
        assert!(matches!(result, Err(FilterError::Config(_))));
    }

    #[test]
    fn test_invalid_order() {
        let result = FilterConfig::from_toml_str("order = 0\nsides = []");
        assert!(matches!(result, Err(FilterError::Config(_))));
    }

    #[test]
    fn test_invalid_side_rejected() {
        let result = FilterConfig::from_toml_str("sides = [\"up\"]");
        assert!(matches!(result, Err(FilterError::Config(_))));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = FilterConfig::from_toml_str("orders = 3");
        assert!(matches!(result, Err(FilterError::Config(_))));
    }

    #[test]
    fn test_precision_limit() {
        let result = FilterConfig::from_toml_str("[output]\nprecision = 30");
        assert!(matches!(result, Err(FilterError::Config(_))));
    }
}
