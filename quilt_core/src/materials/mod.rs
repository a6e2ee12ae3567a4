//! # Materials
//!
//! The three layers bought for a quilt and the inputs that describe them:
//!
//! - **Batting**: packaged sizes and the purchase recommendation
//! - **Backing**: bolt width, orientation, wideback selection
//! - **Binding**: strip width and binding fabric bolt width
//!
//! ## Example
//!
//! ```rust
//! use quilt_core::materials::{BackingConfig, BackingOrientation, recommend_batting};
//!
//! let backing = BackingConfig::wideback(BackingOrientation::Vertical);
//! assert_eq!(backing.fabric_width_in, 108.0);
//!
//! let batting = recommend_batting(66.0, 84.0);
//! assert_eq!(batting.name, "Twin");
//! ```

pub mod batting_sizes;
pub mod fabric;

pub use batting_sizes::{recommend_batting, BattingRecommendation, StandardBattingSize, CUSTOM_BATTING_NAME};
pub use fabric::{
    BackingConfig, BackingOrientation, BindingConfig, FabricSpec, MarginSpec, QuiltSpec,
    DEFAULT_EXTRA_WIDTH_IN, DEFAULT_STRIP_WIDTH_IN, STANDARD_BOLT_WIDTH_IN, WIDEBACK_WIDTH_IN,
};
