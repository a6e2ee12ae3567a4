//! # Calculations
//!
//! The two pure computations behind the calculator. Each follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - a pure function `(&input) -> Result<*Result, CalcError>`
//!
//! Both are cheap and total over their validated inputs, so callers simply
//! re-run them whenever an input changes.
//!
//! ## Available Calculations
//!
//! - [`yardage`] - Batting, backing and binding requirements
//! - [`layout`] - Proportional quilt-on-batting diagram geometry

pub mod layout;
pub mod yardage;

pub use layout::{layout_quilt, Canvas, LayoutInput, LayoutLabel, LayoutLine, LayoutRect, LayoutResult, LayoutRole, Point};
pub use yardage::{calculate, compute_yardage, CalculationResult, YardageInput};
