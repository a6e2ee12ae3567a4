//! # Input Parsing
//!
//! Helpers for turning what a quilter types into numbers for the engine.
//! Parsing is lenient on purpose: a half-typed value like `"12."` or an empty
//! box must never block the calculator.
//!
//! - [`parse_lenient`] reads the leading number of a string
//! - [`parse_or_default`] / [`parse_non_negative_or`] apply field defaults
//! - [`sanitize_numeric`] filters keystrokes the way a numeric text box does
//! - [`step_value`] implements the up/down stepper arrows
//! - [`FractionalValue`] is the whole-inch + eighth-inch picker used for quilt dimensions
//!
//! ## Example
//!
//! ```rust
//! use quilt_core::input::{parse_lenient, parse_or_default, FractionalValue};
//!
//! assert_eq!(parse_lenient("12.5in"), Some(12.5));
//! assert_eq!(parse_lenient(""), None);
//! assert_eq!(parse_or_default("", 43.0), 43.0);
//!
//! let value = FractionalValue::from_inches(48.4);
//! assert_eq!(value.label(), "48⅜");
//! ```

use serde::{Deserialize, Serialize};

use crate::units::EIGHTH_LABELS;

/// Largest whole-inch value the dimension picker accepts
pub const MAX_WHOLE_INCHES: u32 = 999;

/// Read the leading decimal number of `text`.
///
/// Accepts an optional sign, digits and at most one decimal point, ignoring
/// anything that follows (`"12.5in"` is 12.5, `"12."` is 12, `".5"` is 0.5).
/// Returns `None` when no digits lead the string.
pub fn parse_lenient(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_point = false;

    for (i, c) in trimmed.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return None;
    }
    // A trailing "." (or a bare sign) is not part of the number
    let number = trimmed[..end].trim_end_matches('.');
    number.parse::<f64>().ok()
}

/// Parse `text`, using `default` when it is unparsable, zero or negative.
pub fn parse_or_default(text: &str, default: f64) -> f64 {
    match parse_lenient(text) {
        Some(value) if value > 0.0 => value,
        _ => default,
    }
}

/// Parse `text`, using `default` when it is unparsable or negative. Zero is kept.
pub fn parse_non_negative_or(text: &str, default: f64) -> f64 {
    match parse_lenient(text) {
        Some(value) if value >= 0.0 => value,
        _ => default,
    }
}

/// Drop everything but digits (and `.` when `allow_decimal`), keeping at most `max_digits` characters.
pub fn sanitize_numeric(text: &str, allow_decimal: bool, max_digits: usize) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || (allow_decimal && *c == '.'))
        .take(max_digits)
        .collect()
}

/// Stepper arrow direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

/// Apply one stepper press to a text value. Unparsable text counts as 0; never goes below 0.
pub fn step_value(text: &str, step: f64, direction: StepDirection) -> String {
    let current = parse_lenient(text).unwrap_or(0.0);
    let next = match direction {
        StepDirection::Up => current + step,
        StepDirection::Down => (current - step).max(0.0),
    };
    format_number(next)
}

/// Format without a trailing `.0` for whole numbers, the way a text box shows it.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// The six numeric calculator fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    QuiltWidth,
    QuiltLength,
    ExtraWidth,
    BackingFabricWidth,
    BindingFabricWidth,
    BindingStripWidth,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::QuiltWidth,
        FormField::QuiltLength,
        FormField::ExtraWidth,
        FormField::BackingFabricWidth,
        FormField::BindingFabricWidth,
        FormField::BindingStripWidth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::QuiltWidth => "Quilt Width (inches)",
            FormField::QuiltLength => "Quilt Length (inches)",
            FormField::ExtraWidth => "Extra Width (each side)",
            FormField::BackingFabricWidth => "Backing Fabric Width (in)",
            FormField::BindingFabricWidth => "Binding Fabric Width (in)",
            FormField::BindingStripWidth => "Binding Width (in)",
        }
    }

    /// Stepper increment
    pub fn step(&self) -> f64 {
        match self {
            FormField::BindingStripWidth => 0.25,
            _ => 1.0,
        }
    }

    /// Characters the text box accepts
    pub fn max_digits(&self) -> usize {
        match self {
            FormField::ExtraWidth => 2,
            FormField::BindingStripWidth => 4,
            // whole inches plus an eighth, e.g. "999.875"
            FormField::QuiltWidth | FormField::QuiltLength => 7,
            FormField::BackingFabricWidth | FormField::BindingFabricWidth => 3,
        }
    }

    /// Backing fabric is sold in whole-inch widths
    pub fn allows_decimal(&self) -> bool {
        !matches!(self, FormField::BackingFabricWidth)
    }

    /// Quilt dimensions use the whole + eighths picker instead of a plain text box
    pub fn is_fractional(&self) -> bool {
        matches!(self, FormField::QuiltWidth | FormField::QuiltLength)
    }

    /// The two fields the engine validates instead of defaulting
    pub fn is_required(&self) -> bool {
        self.is_fractional()
    }

    /// Filter a keystroke update for this field
    pub fn sanitize(&self, text: &str) -> String {
        sanitize_numeric(text, self.allows_decimal(), self.max_digits())
    }
}

/// Whole inches plus an eighth-inch fraction, as picked on a tape-measure style control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FractionalValue {
    /// 0..=999
    pub whole: u32,
    /// 0..8
    pub eighths: u8,
}

impl FractionalValue {
    pub fn new(whole: u32, eighths: u8) -> Self {
        FractionalValue {
            whole: whole.min(MAX_WHOLE_INCHES),
            eighths: eighths % 8,
        }
    }

    /// Split a length into whole inches and the eighth closest to its fractional part.
    ///
    /// The fraction never carries into the whole number: 47.99 is 47⅞. A value
    /// exactly halfway between two eighths takes the lower one.
    pub fn from_inches(value: f64) -> Self {
        if !value.is_finite() || value <= 0.0 {
            return FractionalValue::default();
        }
        let whole = value.floor();
        let frac = value - whole;
        let eighths = ((frac * 8.0 - 0.5).ceil().max(0.0) as u8).min(7);
        FractionalValue::new(whole.min(MAX_WHOLE_INCHES as f64) as u32, eighths)
    }

    pub fn value(&self) -> f64 {
        self.whole as f64 + self.eighths as f64 / 8.0
    }

    pub fn increment(&self) -> Self {
        FractionalValue::new((self.whole + 1).min(MAX_WHOLE_INCHES), self.eighths)
    }

    pub fn decrement(&self) -> Self {
        FractionalValue::new(self.whole.saturating_sub(1), self.eighths)
    }

    /// Advance to the next eighth, wrapping 7/8 back to 0
    pub fn cycle_fraction(&self) -> Self {
        FractionalValue::new(self.whole, (self.eighths + 1) % 8)
    }

    /// Replace the whole part from typed text (digits only, at most three)
    pub fn with_whole_text(&self, text: &str) -> Self {
        let digits = sanitize_numeric(text, false, 3);
        let whole = digits.parse::<u32>().unwrap_or(0);
        FractionalValue::new(whole, self.eighths)
    }

    /// Label of the fraction part alone, "0" when there is none
    pub fn fraction_label(&self) -> &'static str {
        match self.eighths {
            0 => "0",
            e => EIGHTH_LABELS[e as usize],
        }
    }

    /// e.g. "48", "48⅜"
    pub fn label(&self) -> String {
        format!("{}{}", self.whole, EIGHTH_LABELS[self.eighths as usize])
    }

    /// Text form handed to the engine input
    pub fn to_text(&self) -> String {
        format_number(self.value())
    }
}
