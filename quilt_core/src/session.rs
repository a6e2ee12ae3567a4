//! # Calculator Session
//!
//! Holds the calculator form as typed and the latest result. Every change
//! re-runs the engine immediately; the calculation is cheap and has no side
//! effects, so there is nothing to debounce or cancel.
//!
//! ## Example
//!
//! ```rust
//! use quilt_core::input::FormField;
//! use quilt_core::session::CalculatorSession;
//!
//! let mut session = CalculatorSession::default();
//! assert_eq!(session.result().unwrap().backing_yards, 3.0);
//!
//! session.set_field(FormField::QuiltWidth, "");
//! assert!(session.result().is_err());
//!
//! session.set_field(FormField::QuiltWidth, "36");
//! assert_eq!(session.result().unwrap().backing_panel_count, 1);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::layout::{layout_quilt, LayoutInput, LayoutResult};
use crate::calculations::yardage::{calculate, CalculationResult, YardageInput};
use crate::errors::{CalcError, CalcResult};
use crate::input::{
    format_number, parse_lenient, parse_non_negative_or, parse_or_default, FormField, FractionalValue,
};
use crate::materials::{BackingConfig, BackingOrientation, BindingConfig, FabricSpec, MarginSpec, QuiltSpec};
use crate::settings::CalculatorDefaults;

/// The calculator form exactly as entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuiltForm {
    pub quilt_width: String,
    pub quilt_length: String,
    pub extra_width: String,
    pub backing_fabric_width: String,
    pub binding_fabric_width: String,
    pub binding_strip_width: String,
    pub backing_orientation: BackingOrientation,
    pub wideback: bool,
}

impl QuiltForm {
    /// Form pre-filled from settings
    pub fn from_defaults(defaults: &CalculatorDefaults) -> Self {
        QuiltForm {
            quilt_width: format_number(defaults.quilt_width_in),
            quilt_length: format_number(defaults.quilt_length_in),
            extra_width: format_number(defaults.extra_width_in),
            backing_fabric_width: format_number(defaults.backing_fabric_width_in),
            binding_fabric_width: format_number(defaults.binding_fabric_width_in),
            binding_strip_width: format_number(defaults.strip_width_in),
            backing_orientation: defaults.backing_orientation,
            wideback: defaults.wideback,
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::QuiltWidth => &self.quilt_width,
            FormField::QuiltLength => &self.quilt_length,
            FormField::ExtraWidth => &self.extra_width,
            FormField::BackingFabricWidth => &self.backing_fabric_width,
            FormField::BindingFabricWidth => &self.binding_fabric_width,
            FormField::BindingStripWidth => &self.binding_strip_width,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::QuiltWidth => &mut self.quilt_width,
            FormField::QuiltLength => &mut self.quilt_length,
            FormField::ExtraWidth => &mut self.extra_width,
            FormField::BackingFabricWidth => &mut self.backing_fabric_width,
            FormField::BindingFabricWidth => &mut self.binding_fabric_width,
            FormField::BindingStripWidth => &mut self.binding_strip_width,
        }
    }

    /// Convert to engine input.
    ///
    /// Quilt dimensions that do not parse become NaN so the engine reports
    /// them; blank secondary fields take the value from `defaults`.
    pub fn to_input(&self, defaults: &CalculatorDefaults) -> YardageInput {
        let backing_width = parse_or_default(&self.backing_fabric_width, defaults.backing_fabric_width_in);
        let backing = if self.wideback {
            BackingConfig::wideback(self.backing_orientation)
        } else {
            BackingConfig::standard(self.backing_orientation, backing_width)
        };
        YardageInput {
            quilt: QuiltSpec::new(
                parse_lenient(&self.quilt_width).unwrap_or(f64::NAN),
                parse_lenient(&self.quilt_length).unwrap_or(f64::NAN),
            ),
            margin: MarginSpec::new(parse_non_negative_or(&self.extra_width, defaults.extra_width_in)),
            binding: BindingConfig::new(parse_or_default(&self.binding_strip_width, defaults.strip_width_in)),
            binding_fabric: FabricSpec::new(parse_or_default(
                &self.binding_fabric_width,
                defaults.binding_fabric_width_in,
            )),
            backing,
        }
    }
}

impl Default for QuiltForm {
    fn default() -> Self {
        QuiltForm::from_defaults(&CalculatorDefaults::default())
    }
}

/// Calculator form, defaults and the most recent result.
#[derive(Debug, Clone)]
pub struct CalculatorSession {
    defaults: CalculatorDefaults,
    form: QuiltForm,
    result: CalcResult<CalculationResult>,
}

impl CalculatorSession {
    pub fn new(defaults: CalculatorDefaults) -> Self {
        let form = QuiltForm::from_defaults(&defaults);
        let result = calculate(&form.to_input(&defaults));
        CalculatorSession { defaults, form, result }
    }

    pub fn form(&self) -> &QuiltForm {
        &self.form
    }

    pub fn defaults(&self) -> &CalculatorDefaults {
        &self.defaults
    }

    /// Latest result, or the validation error to show in its place
    pub fn result(&self) -> Result<&CalculationResult, &CalcError> {
        self.result.as_ref()
    }

    /// Engine input for the current form
    pub fn input(&self) -> YardageInput {
        self.form.to_input(&self.defaults)
    }

    /// Store typed text (filtered like the text box would) and recompute.
    pub fn set_field(&mut self, field: FormField, text: &str) -> Result<&CalculationResult, &CalcError> {
        *self.form.field_mut(field) = field.sanitize(text);
        self.recompute();
        self.result()
    }

    /// Store text exactly as given, without keystroke filtering, and recompute.
    ///
    /// For values that arrive whole (command-line flags, prompts), where a
    /// sign or extra digits must reach the engine instead of being dropped.
    pub fn set_text(&mut self, field: FormField, text: &str) -> Result<&CalculationResult, &CalcError> {
        *self.form.field_mut(field) = text.trim().to_string();
        self.recompute();
        self.result()
    }

    /// Store a value from the whole + eighths picker and recompute.
    pub fn set_fractional(&mut self, field: FormField, value: FractionalValue) -> Result<&CalculationResult, &CalcError> {
        self.set_field(field, &value.to_text())
    }

    pub fn set_orientation(&mut self, orientation: BackingOrientation) -> Result<&CalculationResult, &CalcError> {
        self.form.backing_orientation = orientation;
        self.recompute();
        self.result()
    }

    pub fn set_wideback(&mut self, wideback: bool) -> Result<&CalculationResult, &CalcError> {
        self.form.wideback = wideback;
        self.recompute();
        self.result()
    }

    /// Reset every field to the defaults
    pub fn clear(&mut self) {
        self.form = QuiltForm::from_defaults(&self.defaults);
        self.recompute();
    }

    /// Diagram for the current result, `None` while the form is invalid.
    pub fn layout(&self) -> Option<CalcResult<LayoutResult>> {
        let result = self.result.as_ref().ok()?;
        let input = self.input();
        Some(layout_quilt(&LayoutInput::from_result(&input.quilt, result, self.defaults.canvas)))
    }

    fn recompute(&mut self) {
        self.result = calculate(&self.input());
        if let Err(e) = &self.result {
            debug!(error = %e, "form not calculable");
        }
    }
}

impl Default for CalculatorSession {
    fn default() -> Self {
        CalculatorSession::new(CalculatorDefaults::default())
    }
}
