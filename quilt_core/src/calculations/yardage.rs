//! # Yardage Calculation
//!
//! Turns quilt dimensions and fabric choices into a shopping list: batting
//! size and package, backing panels and yardage, binding strips and yardage.
//!
//! ## Assumptions
//!
//! - Batting and backing are cut to the same size: quilt plus the margin on every side
//! - Backing yardage is bought as whole panels the full length of the run
//! - Binding strips are cut selvage to selvage, losing 1" to the selvages
//! - 10" is added to the binding length for joining strips and mitring corners
//! - Fabric is bought in quarter yards and is always rounded up
//!
//! ## Input Policy
//!
//! Only the quilt width and length are validated. Every other number is
//! coerced to a sensible quilting default so a half-typed form still
//! produces a result:
//!
//! | Input                  | Replaced when      | With |
//! |------------------------|--------------------|------|
//! | margin                 | negative / NaN     | 0"   |
//! | backing fabric width   | <= 0 / NaN         | 43"  |
//! | binding fabric width   | <= 1" / NaN        | 43"  |
//! | binding strip width    | <= 0 / NaN         | 1.5" |
//!
//! ## Example
//!
//! ```rust
//! use quilt_core::calculations::yardage::compute_yardage;
//! use quilt_core::materials::{
//!     BackingConfig, BackingOrientation, BindingConfig, FabricSpec, MarginSpec, QuiltSpec,
//! };
//!
//! let result = compute_yardage(
//!     QuiltSpec::new(48.0, 48.0),
//!     MarginSpec::new(3.0),
//!     BindingConfig::new(1.5),
//!     FabricSpec::new(43.0),
//!     BackingConfig::standard(BackingOrientation::Vertical, 43.0),
//! )
//! .unwrap();
//!
//! assert_eq!(result.recommended_batting.name, "Throw");
//! assert_eq!(result.backing_panel_count, 2);
//! assert_eq!(result.backing_yards, 3.0);
//! assert_eq!(result.binding_strip_count, 6);
//! assert_eq!(result.binding_yards, 0.25);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::materials::{
    recommend_batting, BackingConfig, BackingOrientation, BattingRecommendation, BindingConfig, FabricSpec,
    MarginSpec, QuiltSpec, DEFAULT_STRIP_WIDTH_IN, STANDARD_BOLT_WIDTH_IN, WIDEBACK_WIDTH_IN,
};
use crate::units::{Inches, Yards};

/// Binding length added for joining strips and finishing (in)
pub const BINDING_JOIN_ALLOWANCE_IN: f64 = 10.0;

/// Width lost to selvages when cutting binding strips (in)
pub const SELVAGE_ALLOWANCE_IN: f64 = 1.0;

/// Message shown when the quilt width or length is unusable
pub const INVALID_DIMENSION_MESSAGE: &str = "Please enter valid quilt dimensions";

/// Everything the yardage engine needs, bundled for storage and JSON transport.
///
/// ## JSON Example
///
/// ```json
/// {
///   "quilt": { "width_in": 48.0, "length_in": 48.0 },
///   "margin": { "extra_width_in": 3.0 },
///   "binding": { "strip_width_in": 1.5 },
///   "binding_fabric": { "usable_width_in": 43.0 },
///   "backing": { "orientation": "Vertical", "fabric_width_in": 43.0, "is_wideback": false }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YardageInput {
    pub quilt: QuiltSpec,
    pub margin: MarginSpec,
    pub binding: BindingConfig,
    pub binding_fabric: FabricSpec,
    pub backing: BackingConfig,
}

impl YardageInput {
    /// Validate the two primary dimensions.
    pub fn validate(&self) -> CalcResult<()> {
        validate_dimension("width_in", self.quilt.width_in)?;
        validate_dimension("length_in", self.quilt.length_in)?;
        Ok(())
    }

    /// Margin with negative or non-finite values treated as no margin
    pub fn effective_margin_in(&self) -> f64 {
        let extra = self.margin.extra_width_in;
        if extra.is_finite() && extra > 0.0 {
            extra
        } else {
            0.0
        }
    }

    /// Width of the backing fabric actually used for piecing
    pub fn effective_backing_width_in(&self) -> f64 {
        if self.backing.is_wideback {
            WIDEBACK_WIDTH_IN
        } else {
            positive_or(self.backing.fabric_width_in, STANDARD_BOLT_WIDTH_IN)
        }
    }

    /// Binding fabric width; must leave something after the selvage allowance
    pub fn effective_binding_fabric_width_in(&self) -> f64 {
        let width = self.binding_fabric.usable_width_in;
        if width.is_finite() && width > SELVAGE_ALLOWANCE_IN {
            width
        } else {
            STANDARD_BOLT_WIDTH_IN
        }
    }

    pub fn effective_strip_width_in(&self) -> f64 {
        positive_or(self.binding.strip_width_in, DEFAULT_STRIP_WIDTH_IN)
    }
}

impl Default for YardageInput {
    fn default() -> Self {
        YardageInput {
            quilt: QuiltSpec::new(48.0, 48.0),
            margin: MarginSpec::default(),
            binding: BindingConfig::default(),
            binding_fabric: FabricSpec::default(),
            backing: BackingConfig::default(),
        }
    }
}

/// Results of a yardage calculation. Recomputed on every input change, never stored.
///
/// ## JSON Example
///
/// ```json
/// {
///   "batting_width_in": 54.0,
///   "batting_length_in": 54.0,
///   "recommended_batting": { "name": "Throw", "size": "Throw", "width_in": 60.0, "height_in": 72.0, "rotated": false },
///   "backing_panel_count": 2,
///   "backing_yards": 3.0,
///   "backing_layout_description": "2 vertical panels",
///   "binding_strip_count": 6,
///   "binding_yards": 0.25
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Batting width: quilt width plus the margin on both sides (in)
    pub batting_width_in: f64,
    /// Batting length: quilt length plus the margin on both ends (in)
    pub batting_length_in: f64,
    /// Packaged batting to buy
    pub recommended_batting: BattingRecommendation,

    /// Backing width, same as batting (in)
    pub backing_width_in: f64,
    /// Backing length, same as batting (in)
    pub backing_length_in: f64,
    /// Fabric width used for piecing, 108" for wideback (in)
    pub backing_fabric_width_in: f64,
    /// Panel direction
    pub backing_orientation: BackingOrientation,
    /// Number of panels sewn together
    pub backing_panel_count: u32,
    /// Seams joining the panels (panel count - 1)
    pub backing_seam_count: u32,
    /// Backing yardage before rounding
    pub backing_yards_exact: f64,
    /// Backing yardage to buy, rounded up to a quarter yard
    pub backing_yards: f64,
    /// e.g. "Single vertical panel", "2 vertical panels"
    pub backing_layout_description: String,
    /// e.g. "No piecing required", "1 vertical seam(s)"
    pub backing_piecing_description: String,

    /// Batting perimeter (in)
    pub binding_perimeter_in: f64,
    /// Perimeter plus the joining allowance (in)
    pub binding_length_needed_in: f64,
    /// Strips cut selvage to selvage
    pub binding_strip_count: u32,
    /// Binding yardage before rounding
    pub binding_yards_exact: f64,
    /// Binding yardage to buy, rounded up to a quarter yard
    pub binding_yards: f64,
}

impl CalculationResult {
    /// True when the backing has to be pieced from more than one panel
    pub fn needs_piecing(&self) -> bool {
        self.backing_panel_count > 1
    }

    /// Human-readable summary, one line per item.
    pub fn summary_lines(&self) -> Vec<String> {
        let batting = &self.recommended_batting;
        let mut lines = vec![format!(
            "Batting:  {} x {}",
            Inches(self.batting_width_in),
            Inches(self.batting_length_in)
        )];
        if batting.is_custom() {
            lines.push(format!("  Buy:    {} cut", batting.name));
        } else {
            lines.push(format!(
                "  Buy:    {} ({}\" x {}\"){}",
                batting.name,
                batting.width_in,
                batting.height_in,
                if batting.rotated { ", turned" } else { "" }
            ));
        }
        lines.push(format!(
            "Backing:  {} x {} from {}\" fabric",
            Inches(self.backing_width_in),
            Inches(self.backing_length_in),
            self.backing_fabric_width_in
        ));
        lines.push(format!(
            "  Layout: {} ({})",
            self.backing_layout_description, self.backing_piecing_description
        ));
        lines.push(format!("  Buy:    {}", Yards(self.backing_yards)));
        lines.push(format!(
            "Binding:  {} strips, {} total length",
            self.binding_strip_count,
            Inches(self.binding_length_needed_in)
        ));
        lines.push(format!("  Buy:    {}", Yards(self.binding_yards)));
        lines
    }
}

/// Backing panel plan for one orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BackingPlan {
    panel_count: u32,
    yards_exact: Yards,
}

/// Compute batting, backing and binding requirements.
///
/// # Errors
///
/// * `CalcError::InvalidDimension` - quilt width or length is not a positive finite number
pub fn compute_yardage(
    quilt: QuiltSpec,
    margin: MarginSpec,
    binding: BindingConfig,
    binding_fabric: FabricSpec,
    backing: BackingConfig,
) -> CalcResult<CalculationResult> {
    calculate(&YardageInput {
        quilt,
        margin,
        binding,
        binding_fabric,
        backing,
    })
}

/// Compute batting, backing and binding requirements from a bundled input.
pub fn calculate(input: &YardageInput) -> CalcResult<CalculationResult> {
    input.validate()?;

    let margin = Inches(input.effective_margin_in());
    let batting_width = Inches(input.quilt.width_in) + margin * 2.0;
    let batting_length = Inches(input.quilt.length_in) + margin * 2.0;
    let (batting_width_in, batting_length_in) = (batting_width.value(), batting_length.value());
    let recommended_batting = recommend_batting(batting_width_in, batting_length_in);

    let backing_fabric_width_in = input.effective_backing_width_in();
    let orientation = input.backing.orientation;
    // Across: the dimension the bolt width has to cover. Along: the length of each panel.
    let (across, along) = match orientation {
        BackingOrientation::Vertical => (batting_width, batting_length),
        BackingOrientation::Horizontal => (batting_length, batting_width),
    };
    let plan = plan_backing(across, along, Inches(backing_fabric_width_in));
    let backing_seam_count = plan.panel_count - 1;

    let binding_perimeter = (batting_width + batting_length) * 2.0;
    let binding_length_needed = binding_perimeter + Inches(BINDING_JOIN_ALLOWANCE_IN);
    let strip_length_in = input.effective_binding_fabric_width_in() - SELVAGE_ALLOWANCE_IN;
    let binding_strip_count = (binding_length_needed.value() / strip_length_in).ceil() as u32;
    let binding_yards_exact = Yards::from(Inches(input.effective_strip_width_in()) * f64::from(binding_strip_count));

    let result = CalculationResult {
        batting_width_in,
        batting_length_in,
        recommended_batting,
        backing_width_in: batting_width_in,
        backing_length_in: batting_length_in,
        backing_fabric_width_in,
        backing_orientation: orientation,
        backing_panel_count: plan.panel_count,
        backing_seam_count,
        backing_yards_exact: plan.yards_exact.value(),
        backing_yards: plan.yards_exact.round_up_to_quarter().value(),
        backing_layout_description: layout_description(orientation, plan.panel_count),
        backing_piecing_description: piecing_description(orientation, backing_seam_count),
        binding_perimeter_in: binding_perimeter.value(),
        binding_length_needed_in: binding_length_needed.value(),
        binding_strip_count,
        binding_yards_exact: binding_yards_exact.value(),
        binding_yards: binding_yards_exact.round_up_to_quarter().value(),
    };

    debug!(
        batting_width_in,
        batting_length_in,
        batting = %result.recommended_batting.name,
        panels = result.backing_panel_count,
        backing_yards = result.backing_yards,
        strips = result.binding_strip_count,
        binding_yards = result.binding_yards,
        "computed yardage"
    );

    Ok(result)
}

fn validate_dimension(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_dimension(field, value.to_string(), INVALID_DIMENSION_MESSAGE));
    }
    Ok(())
}

fn positive_or(value: f64, default: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        default
    }
}

/// Panels needed to cover `across` with fabric `fabric_width` wide,
/// each panel `along` long.
fn plan_backing(across: Inches, along: Inches, fabric_width: Inches) -> BackingPlan {
    if across <= fabric_width {
        return BackingPlan {
            panel_count: 1,
            yards_exact: along.into(),
        };
    }
    let panel_count = (across.value() / fabric_width.value()).ceil() as u32;
    BackingPlan {
        panel_count,
        yards_exact: (along * f64::from(panel_count)).into(),
    }
}

fn layout_description(orientation: BackingOrientation, panel_count: u32) -> String {
    if panel_count == 1 {
        format!("Single {} panel", orientation)
    } else {
        format!("{} {} panels", panel_count, orientation)
    }
}

fn piecing_description(orientation: BackingOrientation, seam_count: u32) -> String {
    if seam_count == 0 {
        "No piecing required".to_string()
    } else {
        format!("{} {} seam(s)", seam_count, orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(width: f64, length: f64, extra: f64) -> YardageInput {
        YardageInput {
            quilt: QuiltSpec::new(width, length),
            margin: MarginSpec::new(extra),
            ..YardageInput::default()
        }
    }

    #[test]
    fn test_throw_quilt_example() {
        let result = calculate(&input(48.0, 48.0, 3.0)).unwrap();

        assert_eq!(result.batting_width_in, 54.0);
        assert_eq!(result.batting_length_in, 54.0);
        assert_eq!(result.recommended_batting.name, "Throw");
        assert!(!result.recommended_batting.rotated);

        assert_eq!(result.backing_panel_count, 2);
        assert_eq!(result.backing_seam_count, 1);
        assert_eq!(result.backing_yards, 3.0);
        assert_eq!(result.backing_layout_description, "2 vertical panels");
        assert_eq!(result.backing_piecing_description, "1 vertical seam(s)");
    }

    #[test]
    fn test_binding_example() {
        let result = calculate(&input(48.0, 48.0, 3.0)).unwrap();

        assert_eq!(result.binding_perimeter_in, 216.0);
        assert_eq!(result.binding_length_needed_in, 226.0);
        assert_eq!(result.binding_strip_count, 6);
        assert_eq!(result.binding_yards_exact, 0.25);
        assert_eq!(result.binding_yards, 0.25);
    }

    #[test]
    fn test_single_panel_when_fabric_is_wide_enough() {
        let mut yardage = input(36.0, 50.0, 3.0);
        yardage.backing = BackingConfig::standard(BackingOrientation::Vertical, 43.0);
        let result = calculate(&yardage).unwrap();

        // 42" batting fits on a 43" bolt
        assert_eq!(result.backing_panel_count, 1);
        assert_eq!(result.backing_seam_count, 0);
        assert_eq!(result.backing_yards_exact, 56.0 / 36.0);
        assert_eq!(result.backing_yards, 1.75);
        assert_eq!(result.backing_layout_description, "Single vertical panel");
        assert_eq!(result.backing_piecing_description, "No piecing required");
        assert!(!result.needs_piecing());
    }

    #[test]
    fn test_horizontal_swaps_roles() {
        let mut yardage = input(80.0, 60.0, 4.0);
        yardage.backing = BackingConfig::standard(BackingOrientation::Horizontal, 42.0);
        let result = calculate(&yardage).unwrap();

        // Length 68" across the bolt -> 2 panels, each 88" long
        assert_eq!(result.backing_panel_count, 2);
        assert_eq!(result.backing_yards_exact, 88.0 * 2.0 / 36.0);
        assert_eq!(result.backing_yards, 5.0);
        assert_eq!(result.backing_layout_description, "2 horizontal panels");
        assert_eq!(result.backing_piecing_description, "1 horizontal seam(s)");
    }

    #[test]
    fn test_horizontal_single_panel() {
        let mut yardage = input(60.0, 34.0, 3.0);
        yardage.backing = BackingConfig::standard(BackingOrientation::Horizontal, 43.0);
        let result = calculate(&yardage).unwrap();

        // 40" batting length fits across the bolt; one 66" panel
        assert_eq!(result.backing_panel_count, 1);
        assert_eq!(result.backing_seam_count, 0);
        assert_eq!(result.backing_yards_exact, 66.0 / 36.0);
        assert_eq!(result.backing_yards, 2.0);
        assert_eq!(result.backing_layout_description, "Single horizontal panel");
        assert_eq!(result.backing_piecing_description, "No piecing required");
    }

    #[test]
    fn test_horizontal_wideback() {
        let mut yardage = input(100.0, 90.0, 4.0);
        yardage.backing = BackingConfig::wideback(BackingOrientation::Horizontal);
        let result = calculate(&yardage).unwrap();

        // 98" length across 108" fabric, one panel 108" long
        assert_eq!(result.backing_panel_count, 1);
        assert_eq!(result.backing_yards, 3.0);
        assert_eq!(result.backing_layout_description, "Single horizontal panel");

        let mut yardage = input(110.0, 104.0, 4.0);
        yardage.backing = BackingConfig::wideback(BackingOrientation::Horizontal);
        let result = calculate(&yardage).unwrap();

        // 112" length needs two 118" panels
        assert_eq!(result.backing_panel_count, 2);
        assert_eq!(result.backing_yards_exact, 118.0 * 2.0 / 36.0);
        assert_eq!(result.backing_yards, 6.75);
        assert_eq!(result.backing_layout_description, "2 horizontal panels");
        assert_eq!(result.backing_piecing_description, "1 horizontal seam(s)");
    }

    #[test]
    fn test_wideback_ignores_fabric_width() {
        let mut yardage = input(90.0, 100.0, 4.0);
        yardage.backing = BackingConfig {
            orientation: BackingOrientation::Vertical,
            fabric_width_in: 43.0,
            is_wideback: true,
        };
        let result = calculate(&yardage).unwrap();

        assert_eq!(result.backing_fabric_width_in, WIDEBACK_WIDTH_IN);
        assert_eq!(result.backing_panel_count, 1);
        assert_eq!(result.backing_yards, 3.0);
    }

    #[test]
    fn test_three_panels() {
        let result = calculate(&input(96.0, 100.0, 4.0)).unwrap();
        // 104 / 43 -> 3 panels of 108"
        assert_eq!(result.backing_panel_count, 3);
        assert_eq!(result.backing_seam_count, 2);
        assert_eq!(result.backing_yards, 9.0);
        assert_eq!(result.recommended_batting.name, "King");
    }

    #[test]
    fn test_oversized_quilt_gets_custom_batting() {
        let result = calculate(&input(120.0, 110.5, 3.0)).unwrap();
        assert_eq!(result.recommended_batting.name, "Custom");
        assert_eq!(result.recommended_batting.width_in, 126.0);
        assert_eq!(result.recommended_batting.height_in, 117.0);
    }

    #[test]
    fn test_invalid_dimensions() {
        for (width, length) in [(0.0, 48.0), (48.0, -1.0), (f64::NAN, 48.0), (48.0, f64::INFINITY)] {
            let err = calculate(&input(width, length, 3.0)).unwrap_err();
            assert_eq!(err.error_code(), "INVALID_DIMENSION");
            assert!(err.to_string().starts_with(INVALID_DIMENSION_MESSAGE));
        }
    }

    #[test]
    fn test_secondary_inputs_are_coerced() {
        let yardage = YardageInput {
            quilt: QuiltSpec::new(48.0, 48.0),
            margin: MarginSpec::new(f64::NAN),
            binding: BindingConfig::new(0.0),
            binding_fabric: FabricSpec::new(0.5),
            backing: BackingConfig::standard(BackingOrientation::Vertical, -10.0),
        };
        let result = calculate(&yardage).unwrap();

        assert_eq!(result.batting_width_in, 48.0);
        assert_eq!(result.backing_fabric_width_in, STANDARD_BOLT_WIDTH_IN);
        // 202" of binding from 42" strips
        assert_eq!(result.binding_strip_count, 5);
        assert_eq!(result.binding_yards_exact, 5.0 * DEFAULT_STRIP_WIDTH_IN / 36.0);
    }

    #[test]
    fn test_zero_margin_is_kept() {
        let result = calculate(&input(40.0, 40.0, 0.0)).unwrap();
        assert_eq!(result.batting_width_in, 40.0);
        assert_eq!(result.recommended_batting.name, "Crib");
    }

    #[test]
    fn test_compute_yardage_matches_calculate() {
        let direct = compute_yardage(
            QuiltSpec::new(60.0, 72.0),
            MarginSpec::new(4.0),
            BindingConfig::new(2.25),
            FabricSpec::new(42.0),
            BackingConfig::wideback(BackingOrientation::Horizontal),
        )
        .unwrap();
        let bundled = calculate(&YardageInput {
            quilt: QuiltSpec::new(60.0, 72.0),
            margin: MarginSpec::new(4.0),
            binding: BindingConfig::new(2.25),
            binding_fabric: FabricSpec::new(42.0),
            backing: BackingConfig::wideback(BackingOrientation::Horizontal),
        })
        .unwrap();
        assert_eq!(direct, bundled);
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&YardageInput::default()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("\"backing_yards\": 3.0"));
        let roundtrip: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, result);
    }

    #[test]
    fn test_summary_lines() {
        let result = calculate(&YardageInput::default()).unwrap();
        let lines = result.summary_lines();
        assert!(lines.iter().any(|l| l.contains("Throw (60\" x 72\")")));
        assert!(lines.iter().any(|l| l.contains("3.00 yds")));
        assert!(lines.iter().any(|l| l.contains("6 strips")));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn orientation() -> impl Strategy<Value = BackingOrientation> {
        prop_oneof![Just(BackingOrientation::Vertical), Just(BackingOrientation::Horizontal)]
    }

    fn is_quarter_multiple(yards: f64) -> bool {
        (yards * 4.0).fract() == 0.0
    }

    proptest! {
        #[test]
        fn batting_adds_margin_on_both_sides(
            width in 1.0f64..200.0,
            length in 1.0f64..200.0,
            extra in 0.0f64..12.0,
        ) {
            let result = compute_yardage(
                QuiltSpec::new(width, length),
                MarginSpec::new(extra),
                BindingConfig::default(),
                FabricSpec::default(),
                BackingConfig::default(),
            ).unwrap();
            prop_assert_eq!(result.batting_width_in, width + 2.0 * extra);
            prop_assert_eq!(result.batting_length_in, length + 2.0 * extra);
        }

        #[test]
        fn yardage_rounds_up_to_quarters(
            width in 1.0f64..200.0,
            length in 1.0f64..200.0,
            extra in 0.0f64..12.0,
            fabric_width in 20.0f64..120.0,
            binding_fabric in 20.0f64..60.0,
            strip in 1.0f64..3.0,
            orientation in orientation(),
            wideback in any::<bool>(),
        ) {
            let backing = BackingConfig { orientation, fabric_width_in: fabric_width, is_wideback: wideback };
            let result = compute_yardage(
                QuiltSpec::new(width, length),
                MarginSpec::new(extra),
                BindingConfig::new(strip),
                FabricSpec::new(binding_fabric),
                backing,
            ).unwrap();

            prop_assert!(is_quarter_multiple(result.backing_yards));
            prop_assert!(result.backing_yards >= result.backing_yards_exact);
            prop_assert!(result.backing_yards - result.backing_yards_exact < 0.25);
            prop_assert!(is_quarter_multiple(result.binding_yards));
            prop_assert!(result.binding_yards >= result.binding_yards_exact);
        }

        #[test]
        fn vertical_panel_count_rule(
            width in 1.0f64..250.0,
            length in 1.0f64..250.0,
            extra in 0.0f64..12.0,
            fabric_width in 20.0f64..120.0,
        ) {
            let result = compute_yardage(
                QuiltSpec::new(width, length),
                MarginSpec::new(extra),
                BindingConfig::default(),
                FabricSpec::default(),
                BackingConfig::standard(BackingOrientation::Vertical, fabric_width),
            ).unwrap();

            if result.batting_width_in <= fabric_width {
                prop_assert_eq!(result.backing_panel_count, 1);
            } else {
                prop_assert!(result.backing_panel_count >= 2);
                prop_assert_eq!(
                    result.backing_panel_count,
                    (result.batting_width_in / fabric_width).ceil() as u32
                );
            }
            prop_assert_eq!(result.backing_seam_count, result.backing_panel_count - 1);
        }

        #[test]
        fn horizontal_panel_count_rule(
            width in 1.0f64..250.0,
            length in 1.0f64..250.0,
            extra in 0.0f64..12.0,
            fabric_width in 20.0f64..120.0,
        ) {
            let result = compute_yardage(
                QuiltSpec::new(width, length),
                MarginSpec::new(extra),
                BindingConfig::default(),
                FabricSpec::default(),
                BackingConfig::standard(BackingOrientation::Horizontal, fabric_width),
            ).unwrap();

            if result.batting_length_in <= fabric_width {
                prop_assert_eq!(result.backing_panel_count, 1);
                prop_assert_eq!(result.backing_yards_exact, result.batting_width_in / 36.0);
            } else {
                prop_assert_eq!(
                    result.backing_panel_count,
                    (result.batting_length_in / fabric_width).ceil() as u32
                );
                prop_assert_eq!(
                    result.backing_yards_exact,
                    result.batting_width_in * f64::from(result.backing_panel_count) / 36.0
                );
            }
            prop_assert_eq!(result.backing_seam_count, result.backing_panel_count - 1);
        }

        #[test]
        fn recommendation_is_first_fitting_catalog_entry(
            width in 1.0f64..140.0,
            length in 1.0f64..140.0,
        ) {
            let rec = recommend_batting(width, length);
            let first_fit = crate::materials::StandardBattingSize::ALL
                .into_iter()
                .find(|s| s.fits_directly(width, length) || s.fits_rotated(width, length));
            prop_assert_eq!(rec.size, first_fit);
            if first_fit.is_none() {
                prop_assert_eq!(rec.width_in, width.ceil());
                prop_assert_eq!(rec.height_in, length.ceil());
            }
        }

        #[test]
        fn calculation_is_idempotent(
            width in 1.0f64..200.0,
            length in 1.0f64..200.0,
            extra in 0.0f64..12.0,
        ) {
            let input = YardageInput {
                quilt: QuiltSpec::new(width, length),
                margin: MarginSpec::new(extra),
                ..YardageInput::default()
            };
            let first = calculate(&input).unwrap();
            let second = calculate(&input).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
