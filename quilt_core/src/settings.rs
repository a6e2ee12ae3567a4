//! # Calculator Settings
//!
//! Default values the calculator starts from, and falls back to when a
//! secondary field is left blank. Settings are stored as JSON; any field left
//! out of the file keeps its built-in default.
//!
//! ## Example
//!
//! ```rust
//! use quilt_core::settings::CalculatorDefaults;
//!
//! let defaults: CalculatorDefaults = serde_json::from_str(r#"{ "strip_width_in": 2.5 }"#).unwrap();
//! assert_eq!(defaults.strip_width_in, 2.5);
//! assert_eq!(defaults.backing_fabric_width_in, 43.0);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::layout::Canvas;
use crate::errors::{CalcError, CalcResult};
use crate::materials::{BackingOrientation, DEFAULT_EXTRA_WIDTH_IN, DEFAULT_STRIP_WIDTH_IN, STANDARD_BOLT_WIDTH_IN};

/// Starting values for every calculator input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorDefaults {
    pub quilt_width_in: f64,
    pub quilt_length_in: f64,
    /// Batting margin on each side
    pub extra_width_in: f64,
    pub binding_fabric_width_in: f64,
    pub backing_fabric_width_in: f64,
    pub backing_orientation: BackingOrientation,
    pub wideback: bool,
    pub strip_width_in: f64,
    /// Diagram canvas
    pub canvas: Canvas,
}

impl Default for CalculatorDefaults {
    fn default() -> Self {
        CalculatorDefaults {
            quilt_width_in: 48.0,
            quilt_length_in: 48.0,
            extra_width_in: DEFAULT_EXTRA_WIDTH_IN,
            binding_fabric_width_in: STANDARD_BOLT_WIDTH_IN,
            backing_fabric_width_in: STANDARD_BOLT_WIDTH_IN,
            backing_orientation: BackingOrientation::Vertical,
            wideback: false,
            strip_width_in: DEFAULT_STRIP_WIDTH_IN,
            canvas: Canvas::default(),
        }
    }
}

impl CalculatorDefaults {
    /// Load settings from a JSON file.
    ///
    /// # Errors
    ///
    /// * `CalcError::FileError` - the file cannot be read
    /// * `CalcError::SerializationError` - the file is not valid settings JSON
    pub fn load(path: &Path) -> CalcResult<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CalcError::file_error("read settings", path.display().to_string(), e.to_string()))?;
        let defaults: CalculatorDefaults = serde_json::from_str(&contents)
            .map_err(|e| CalcError::serialization(format!("Invalid settings in {}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "loaded calculator settings");
        Ok(defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::calculations::yardage::YardageInput;
    use crate::materials::WIDEBACK_WIDTH_IN;
    use crate::session::CalculatorSession;

    #[test]
    fn test_defaults_match_engine_defaults() {
        let session = CalculatorSession::new(CalculatorDefaults::default());
        assert_eq!(session.input(), YardageInput::default());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let defaults: CalculatorDefaults =
            serde_json::from_str(r#"{ "wideback": true, "backing_orientation": "Horizontal" }"#).unwrap();
        assert!(defaults.wideback);
        assert_eq!(defaults.quilt_width_in, 48.0);

        let session = CalculatorSession::new(defaults);
        let input = session.input();
        assert!(input.backing.is_wideback);
        assert_eq!(input.backing.orientation, BackingOrientation::Horizontal);
        assert_eq!(session.result().unwrap().backing_fabric_width_in, WIDEBACK_WIDTH_IN);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "extra_width_in": 4.0, "canvas": {{ "width": 300.0, "height": 200.0, "padding": 10.0 }} }}"#)
            .unwrap();

        let defaults = CalculatorDefaults::load(file.path()).unwrap();
        assert_eq!(defaults.extra_width_in, 4.0);
        assert_eq!(defaults.canvas, Canvas::new(300.0, 200.0, 10.0));
    }

    #[test]
    fn test_load_errors() {
        let missing = CalculatorDefaults::load(Path::new("/nonexistent/quiltcalc.json")).unwrap_err();
        assert_eq!(missing.error_code(), "FILE_ERROR");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let invalid = CalculatorDefaults::load(file.path()).unwrap_err();
        assert_eq!(invalid.error_code(), "SERIALIZATION_ERROR");
    }
}
