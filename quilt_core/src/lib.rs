//! # quilt_core - Quilt Yardage Calculation Engine
//!
//! `quilt_core` is the computational heart of QuiltCalc: given a quilt's
//! dimensions and the fabrics chosen to finish it, it works out how much
//! batting, backing and binding to buy, and how to draw the quilt on its
//! batting.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All inputs and results implement Serialize/Deserialize
//! - **Forgiving Input**: Only the quilt width and length can fail validation
//! - **Never Under-buy**: Yardage is always rounded up to a quarter yard
//!
//! ## Quick Start
//!
//! ```rust
//! use quilt_core::calculations::yardage::{calculate, YardageInput};
//! use quilt_core::materials::{MarginSpec, QuiltSpec};
//!
//! let input = YardageInput {
//!     quilt: QuiltSpec::new(60.0, 72.0),
//!     margin: MarginSpec::new(4.0),
//!     ..YardageInput::default()
//! };
//! let result = calculate(&input).unwrap();
//!
//! println!("{}", serde_json::to_string_pretty(&result).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Yardage engine and layout geometry
//! - [`materials`] - Quilt/fabric inputs and the batting catalog
//! - [`units`] - Inch and yard wrappers, quarter-yard rounding
//! - [`input`] - Lenient parsing of typed values
//! - [`session`] - Form state with recompute-on-change
//! - [`settings`] - Calculator defaults
//! - [`materials_list`] - Shopping list
//! - [`storage`] - Key-value persistence for the shopping list
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod input;
pub mod materials;
pub mod materials_list;
pub mod session;
pub mod settings;
pub mod storage;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{compute_yardage, layout_quilt, CalculationResult, LayoutInput, LayoutResult, YardageInput};
pub use errors::{CalcError, CalcResult};
pub use materials_list::MaterialsList;
pub use session::CalculatorSession;
pub use settings::CalculatorDefaults;
