//! Quilt and Fabric Inputs
//!
//! Value types describing the quilt top and the fabric bought to finish it.
//! Widths are in inches as printed on the bolt end.
//!
//! ## Backing Orientation
//!
//! - **Vertical**: panels run along the quilt length, seams are vertical
//! - **Horizontal**: panels run across the quilt width, seams are horizontal

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Width of wideback fabric (in)
pub const WIDEBACK_WIDTH_IN: f64 = 108.0;

/// Usable width of standard quilting cotton (in)
pub const STANDARD_BOLT_WIDTH_IN: f64 = 43.0;

/// Common binding strip width (in)
pub const DEFAULT_STRIP_WIDTH_IN: f64 = 1.5;

/// Extra batting around each side of the quilt top (in)
pub const DEFAULT_EXTRA_WIDTH_IN: f64 = 3.0;

/// Finished quilt top dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuiltSpec {
    /// Quilt top width (in)
    pub width_in: f64,
    /// Quilt top length (in)
    pub length_in: f64,
}

impl QuiltSpec {
    pub fn new(width_in: f64, length_in: f64) -> Self {
        QuiltSpec { width_in, length_in }
    }
}

/// Uniform border between the quilt top and the batting edge, added on all four sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginSpec {
    /// Extra width on each side (in)
    pub extra_width_in: f64,
}

impl MarginSpec {
    pub fn new(extra_width_in: f64) -> Self {
        MarginSpec { extra_width_in }
    }
}

impl Default for MarginSpec {
    fn default() -> Self {
        MarginSpec::new(DEFAULT_EXTRA_WIDTH_IN)
    }
}

/// A fabric bolt, described by its usable width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FabricSpec {
    /// Bolt width less any trim allowance (in)
    pub usable_width_in: f64,
}

impl FabricSpec {
    pub fn new(usable_width_in: f64) -> Self {
        FabricSpec { usable_width_in }
    }
}

impl Default for FabricSpec {
    fn default() -> Self {
        FabricSpec::new(STANDARD_BOLT_WIDTH_IN)
    }
}

/// Direction the backing panels run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BackingOrientation {
    /// Panels run along the length; seams are vertical
    #[default]
    Vertical,
    /// Panels run across the width; seams are horizontal
    Horizontal,
}

impl BackingOrientation {
    pub const ALL: [BackingOrientation; 2] = [BackingOrientation::Vertical, BackingOrientation::Horizontal];

    /// Lowercase name used in layout descriptions
    pub fn display_name(&self) -> &'static str {
        match self {
            BackingOrientation::Vertical => "vertical",
            BackingOrientation::Horizontal => "horizontal",
        }
    }
}

impl fmt::Display for BackingOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for BackingOrientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vertical" | "v" => Ok(BackingOrientation::Vertical),
            "horizontal" | "h" => Ok(BackingOrientation::Horizontal),
            other => Err(format!("unknown backing orientation '{}' (expected vertical or horizontal)", other)),
        }
    }
}

/// Backing fabric selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BackingConfig {
    /// Panel direction
    pub orientation: BackingOrientation,
    /// Bolt width for standard backing (in); ignored for wideback
    pub fabric_width_in: f64,
    /// Wideback fabric is always 108" wide
    pub is_wideback: bool,
}

impl BackingConfig {
    /// Standard-width backing fabric
    pub fn standard(orientation: BackingOrientation, fabric_width_in: f64) -> Self {
        BackingConfig {
            orientation,
            fabric_width_in,
            is_wideback: false,
        }
    }

    /// 108" wideback fabric
    pub fn wideback(orientation: BackingOrientation) -> Self {
        BackingConfig {
            orientation,
            fabric_width_in: WIDEBACK_WIDTH_IN,
            is_wideback: true,
        }
    }
}

impl Default for BackingConfig {
    fn default() -> Self {
        BackingConfig::standard(BackingOrientation::Vertical, STANDARD_BOLT_WIDTH_IN)
    }
}

/// Binding strip cut width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BindingConfig {
    /// Width each strip is cut (in)
    pub strip_width_in: f64,
}

impl BindingConfig {
    pub fn new(strip_width_in: f64) -> Self {
        BindingConfig { strip_width_in }
    }
}

impl Default for BindingConfig {
    fn default() -> Self {
        BindingConfig::new(DEFAULT_STRIP_WIDTH_IN)
    }
}
