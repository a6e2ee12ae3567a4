//! Standard Batting Sizes
//!
//! Packaged batting is sold in a handful of bed sizes. The catalog is ordered
//! smallest to largest, and that order is the tie-break when more than one
//! size would fit: the first match is the cheapest usable package.
//!
//! | Size        | Width | Height |
//! |-------------|-------|--------|
//! | Crib        | 45"   | 60"    |
//! | Throw       | 60"   | 72"    |
//! | Twin        | 72"   | 90"    |
//! | Full/Double | 81"   | 96"    |
//! | Queen       | 90"   | 108"   |
//! | King        | 120"  | 120"   |

use serde::{Deserialize, Serialize};

/// Name reported when no packaged size is large enough
pub const CUSTOM_BATTING_NAME: &str = "Custom";

/// Packaged batting size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StandardBattingSize {
    /// 45" x 60"
    Crib,
    /// 60" x 72"
    Throw,
    /// 72" x 90"
    Twin,
    /// 81" x 96"
    #[serde(rename = "Full/Double")]
    FullDouble,
    /// 90" x 108"
    Queen,
    /// 120" x 120"
    King,
}

impl StandardBattingSize {
    /// The catalog, smallest first
    pub const ALL: [StandardBattingSize; 6] = [
        StandardBattingSize::Crib,
        StandardBattingSize::Throw,
        StandardBattingSize::Twin,
        StandardBattingSize::FullDouble,
        StandardBattingSize::Queen,
        StandardBattingSize::King,
    ];

    /// Package dimensions as (width_in, height_in)
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            StandardBattingSize::Crib => (45.0, 60.0),
            StandardBattingSize::Throw => (60.0, 72.0),
            StandardBattingSize::Twin => (72.0, 90.0),
            StandardBattingSize::FullDouble => (81.0, 96.0),
            StandardBattingSize::Queen => (90.0, 108.0),
            StandardBattingSize::King => (120.0, 120.0),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StandardBattingSize::Crib => "Crib",
            StandardBattingSize::Throw => "Throw",
            StandardBattingSize::Twin => "Twin",
            StandardBattingSize::FullDouble => "Full/Double",
            StandardBattingSize::Queen => "Queen",
            StandardBattingSize::King => "King",
        }
    }

    /// True if a `width` x `length` piece fits without turning the package
    pub fn fits_directly(&self, width_in: f64, length_in: f64) -> bool {
        let (w, h) = self.dimensions();
        width_in <= w && length_in <= h
    }

    /// True if the piece fits once the package is turned 90 degrees
    pub fn fits_rotated(&self, width_in: f64, length_in: f64) -> bool {
        let (w, h) = self.dimensions();
        width_in <= h && length_in <= w
    }
}

/// The batting package to buy for a given batting rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattingRecommendation {
    /// Catalog name, or "Custom"
    pub name: String,
    /// Catalog entry; `None` for a custom cut
    pub size: Option<StandardBattingSize>,
    /// Package (or custom cut) width (in)
    pub width_in: f64,
    /// Package (or custom cut) height (in)
    pub height_in: f64,
    /// The package has to be turned 90 degrees to cover the quilt
    pub rotated: bool,
}

impl BattingRecommendation {
    fn standard(size: StandardBattingSize, rotated: bool) -> Self {
        let (width_in, height_in) = size.dimensions();
        BattingRecommendation {
            name: size.display_name().to_string(),
            size: Some(size),
            width_in,
            height_in,
            rotated,
        }
    }

    fn custom(width_in: f64, length_in: f64) -> Self {
        BattingRecommendation {
            name: CUSTOM_BATTING_NAME.to_string(),
            size: None,
            width_in: width_in.ceil(),
            height_in: length_in.ceil(),
            rotated: false,
        }
    }

    pub fn is_custom(&self) -> bool {
        self.size.is_none()
    }
}

/// Find the smallest packaged batting that covers a `width` x `length` piece.
///
/// Each catalog entry is tried as-is first, then turned; the first entry that
/// fits either way wins. When nothing fits, a custom cut rounded up to whole
/// inches is returned.
///
/// # Example
///
/// ```rust
/// use quilt_core::materials::batting_sizes::{recommend_batting, StandardBattingSize};
///
/// let rec = recommend_batting(54.0, 54.0);
/// assert_eq!(rec.size, Some(StandardBattingSize::Throw));
/// assert!(!rec.rotated);
///
/// let rec = recommend_batting(130.5, 100.0);
/// assert!(rec.is_custom());
/// assert_eq!((rec.width_in, rec.height_in), (131.0, 100.0));
/// ```
pub fn recommend_batting(width_in: f64, length_in: f64) -> BattingRecommendation {
    for size in StandardBattingSize::ALL {
        if size.fits_directly(width_in, length_in) {
            return BattingRecommendation::standard(size, false);
        }
        if size.fits_rotated(width_in, length_in) {
            return BattingRecommendation::standard(size, true);
        }
    }
    BattingRecommendation::custom(width_in, length_in)
}
