//! # Quilt Layout Geometry
//!
//! Places the batting/backing rectangle, the quilt top and the backing seams
//! on a drawing canvas. The output is plain coordinates tagged with a
//! [`LayoutRole`], so any renderer (SVG, terminal, GUI canvas) can style each
//! piece without re-deriving the geometry.
//!
//! ## Scaling
//!
//! One uniform scale is used for both axes:
//!
//! ```text
//! scale = (min(canvas_w, canvas_h) - 2 * padding) / max(batting_w, batting_l)
//! ```
//!
//! Fitting the larger batting dimension into the smaller canvas dimension keeps
//! the aspect ratio and cannot overflow the canvas in either direction.
//!
//! ## Example
//!
//! ```rust
//! use quilt_core::calculations::layout::{layout_quilt, Canvas, LayoutInput, LayoutRole};
//! use quilt_core::materials::BackingOrientation;
//!
//! let layout = layout_quilt(&LayoutInput {
//!     quilt_width_in: 48.0,
//!     quilt_length_in: 48.0,
//!     batting_width_in: 54.0,
//!     batting_length_in: 54.0,
//!     seam_orientation: BackingOrientation::Vertical,
//!     seam_count: 1,
//!     canvas: Canvas::default(),
//! })
//! .unwrap();
//!
//! let seam = layout.lines_with_role(LayoutRole::Seam).next().unwrap();
//! assert_eq!(seam.start.x, 225.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::yardage::CalculationResult;
use crate::errors::{CalcError, CalcResult};
use crate::materials::{BackingOrientation, QuiltSpec};
use crate::units::Inches;

/// Default diagram canvas size (px)
pub const DEFAULT_CANVAS_SIZE: f64 = 450.0;

/// Default space kept clear around the batting (px)
pub const DEFAULT_CANVAS_PADDING: f64 = 60.0;

/// Most backing seams a diagram will draw
pub const MAX_SEAM_COUNT: u32 = 1000;

/// Drawing surface the layout is fitted to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    /// Clear border on every side
    pub padding: f64,
}

impl Canvas {
    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Canvas { width, height, padding }
    }

    /// Side length of the largest square that fits inside the padding
    pub fn available(&self) -> f64 {
        self.width.min(self.height) - 2.0 * self.padding
    }

    fn validate(&self) -> CalcResult<()> {
        for (field, value) in [("canvas.width", self.width), ("canvas.height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_dimension(field, value.to_string(), "Canvas must have a positive size"));
            }
        }
        let half = self.width.min(self.height) / 2.0;
        if !self.padding.is_finite() || self.padding < 0.0 || self.padding >= half {
            return Err(CalcError::invalid_dimension(
                "canvas.padding",
                self.padding.to_string(),
                format!("Padding must be at least 0 and less than {}", half),
            ));
        }
        Ok(())
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas::new(DEFAULT_CANVAS_SIZE, DEFAULT_CANVAS_SIZE, DEFAULT_CANVAS_PADDING)
    }
}

/// What a layout element depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutRole {
    /// The finished quilt top
    QuiltTop,
    /// Batting and backing (cut to the same size)
    Batting,
    /// Backing panel seam
    Seam,
    /// Dimension annotation
    Dimension,
}

/// A point in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Axis-aligned rectangle, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutRect {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    pub role: LayoutRole,
}

impl LayoutRect {
    pub fn right(&self) -> f64 {
        self.origin.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.origin.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.origin.x + self.width / 2.0, self.origin.y + self.height / 2.0)
    }
}

/// Straight line segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutLine {
    pub start: Point,
    pub end: Point,
    pub role: LayoutRole,
}

/// Text annotation anchored at a point.
///
/// `vertical` labels are meant to be drawn rotated 90 degrees about the anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutLabel {
    pub anchor: Point,
    pub text: String,
    pub vertical: bool,
    pub role: LayoutRole,
}

/// Input to [`layout_quilt`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutInput {
    pub quilt_width_in: f64,
    pub quilt_length_in: f64,
    pub batting_width_in: f64,
    pub batting_length_in: f64,
    /// Vertical seams divide the width, horizontal seams divide the height
    pub seam_orientation: BackingOrientation,
    pub seam_count: u32,
    pub canvas: Canvas,
}

impl LayoutInput {
    /// Build the layout input for a quilt and its yardage result.
    pub fn from_result(quilt: &QuiltSpec, result: &CalculationResult, canvas: Canvas) -> Self {
        LayoutInput {
            quilt_width_in: quilt.width_in,
            quilt_length_in: quilt.length_in,
            batting_width_in: result.batting_width_in,
            batting_length_in: result.batting_length_in,
            seam_orientation: result.backing_orientation,
            seam_count: result.backing_seam_count,
            canvas,
        }
    }

    fn validate(&self) -> CalcResult<()> {
        self.canvas.validate()?;
        let dims = [
            ("batting_width_in", self.batting_width_in),
            ("batting_length_in", self.batting_length_in),
            ("quilt_width_in", self.quilt_width_in),
            ("quilt_length_in", self.quilt_length_in),
        ];
        for (field, value) in dims {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_dimension(field, value.to_string(), "Dimension must be positive"));
            }
        }
        if self.seam_count > MAX_SEAM_COUNT {
            return Err(CalcError::invalid_dimension(
                "seam_count",
                self.seam_count.to_string(),
                format!("At most {} seams can be drawn", MAX_SEAM_COUNT),
            ));
        }
        if self.quilt_width_in > self.batting_width_in {
            return Err(CalcError::invalid_dimension(
                "quilt_width_in",
                self.quilt_width_in.to_string(),
                "Quilt top is wider than the batting",
            ));
        }
        if self.quilt_length_in > self.batting_length_in {
            return Err(CalcError::invalid_dimension(
                "quilt_length_in",
                self.quilt_length_in.to_string(),
                "Quilt top is longer than the batting",
            ));
        }
        Ok(())
    }
}

/// Proportional diagram geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Canvas units per inch
    pub scale: f64,
    /// Batting first, then the quilt top (draw order)
    pub rects: Vec<LayoutRect>,
    pub lines: Vec<LayoutLine>,
    pub labels: Vec<LayoutLabel>,
}

impl LayoutResult {
    pub fn rect(&self, role: LayoutRole) -> Option<&LayoutRect> {
        self.rects.iter().find(|r| r.role == role)
    }

    pub fn lines_with_role(&self, role: LayoutRole) -> impl Iterator<Item = &LayoutLine> {
        self.lines.iter().filter(move |l| l.role == role)
    }
}

/// Lay out the batting, quilt top and seams on `input.canvas`.
///
/// # Errors
///
/// * `CalcError::InvalidDimension` - a dimension is not positive, the quilt is
///   larger than the batting, the padding leaves no room to draw, or there are
///   more than [`MAX_SEAM_COUNT`] seams
pub fn layout_quilt(input: &LayoutInput) -> CalcResult<LayoutResult> {
    input.validate()?;

    let canvas = input.canvas;
    let available = canvas.available();
    let scale = available / input.batting_width_in.max(input.batting_length_in);

    // The larger side spans the padded area exactly; float error must not push past it
    let (batting_w, batting_h) = if input.batting_width_in >= input.batting_length_in {
        (available, (input.batting_length_in * scale).min(available))
    } else {
        ((input.batting_width_in * scale).min(available), available)
    };
    let batting = LayoutRect {
        origin: Point::new((canvas.width - batting_w) / 2.0, (canvas.height - batting_h) / 2.0),
        width: batting_w,
        height: batting_h,
        role: LayoutRole::Batting,
    };

    let quilt_w = (input.quilt_width_in * scale).min(batting_w);
    let quilt_h = (input.quilt_length_in * scale).min(batting_h);
    let quilt = LayoutRect {
        origin: Point::new(
            batting.origin.x + (batting_w - quilt_w) / 2.0,
            batting.origin.y + (batting_h - quilt_h) / 2.0,
        ),
        width: quilt_w,
        height: quilt_h,
        role: LayoutRole::QuiltTop,
    };

    let lines = seam_lines(&batting, input.seam_orientation, input.seam_count);
    let labels = dimension_labels(&batting, input, canvas.padding);

    debug!(scale, seams = lines.len(), "laid out quilt diagram");

    Ok(LayoutResult {
        scale,
        rects: vec![batting, quilt],
        lines,
        labels,
    })
}

/// Seams splitting the batting into `seam_count + 1` equal panels.
fn seam_lines(batting: &LayoutRect, orientation: BackingOrientation, seam_count: u32) -> Vec<LayoutLine> {
    let panels = f64::from(seam_count) + 1.0;
    (1..=seam_count)
        .map(|i| {
            let i = f64::from(i);
            match orientation {
                BackingOrientation::Vertical => {
                    let x = batting.origin.x + (batting.width / panels) * i;
                    LayoutLine {
                        start: Point::new(x, batting.origin.y),
                        end: Point::new(x, batting.bottom()),
                        role: LayoutRole::Seam,
                    }
                }
                BackingOrientation::Horizontal => {
                    let y = batting.origin.y + (batting.height / panels) * i;
                    LayoutLine {
                        start: Point::new(batting.origin.x, y),
                        end: Point::new(batting.right(), y),
                        role: LayoutRole::Seam,
                    }
                }
            }
        })
        .collect()
}

/// Batting width under the rectangle, length to its right, half a padding out.
fn dimension_labels(batting: &LayoutRect, input: &LayoutInput, padding: f64) -> Vec<LayoutLabel> {
    let offset = padding / 2.0;
    let center = batting.center();
    vec![
        LayoutLabel {
            anchor: Point::new(center.x, batting.bottom() + offset),
            text: Inches(input.batting_width_in).to_string(),
            vertical: false,
            role: LayoutRole::Dimension,
        },
        LayoutLabel {
            anchor: Point::new(batting.right() + offset, center.y),
            text: Inches(input.batting_length_in).to_string(),
            vertical: true,
            role: LayoutRole::Dimension,
        },
    ]
}
