//! Conversion of a raw `WineForm` into a `WineSample` request body.
//!
//! Checks run in a fixed order and stop at the first failure: the
//! document number first (submissions only), then the two required text
//! fields, then the eleven numeric attributes in wire order. No request is
//! ever built from a partially valid form.

use crate::errors::{Reason, ValidationError};
use crate::model::fields::{FormField, NumericField};
use crate::model::form::WineForm;
use crate::model::wine::WineSample;

/// Minimum trimmed length, in characters, of a submitted document number.
pub const DOCUMENTO_MIN_LEN: usize = 11;

/// Parses one numeric input. Absent, blank, unparseable and non-finite
/// values are rejected.
pub fn validate_number(raw: Option<&str>, label: &str) -> Result<f64, ValidationError> {
    let not_a_number = || ValidationError::new(label, Reason::NotANumber);
    let text = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or_else(not_a_number)?;
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(not_a_number()),
    }
}

/// Returns the trimmed document number when it is long enough. Content is
/// not inspected.
pub fn validate_documento(raw: Option<&str>) -> Result<String, ValidationError> {
    let trimmed = raw.unwrap_or_default().trim();
    if trimmed.chars().count() < DOCUMENTO_MIN_LEN {
        return Err(ValidationError::new(
            FormField::Documento.label(),
            Reason::TooShort {
                min: DOCUMENTO_MIN_LEN,
            },
        ));
    }
    Ok(trimmed.to_string())
}

/// Validation for the create form.
pub fn validate_submission(form: &WineForm) -> Result<WineSample, ValidationError> {
    let documento = validate_documento(form.get(FormField::Documento))?;
    build_sample(form, documento)
}

/// Validation for the edit form. The document number is read-only there
/// and already stored by the service, so only its trimmed value is
/// carried over.
pub fn validate_update(form: &WineForm) -> Result<WineSample, ValidationError> {
    let documento = form
        .get(FormField::Documento)
        .unwrap_or_default()
        .trim()
        .to_string();
    build_sample(form, documento)
}

fn build_sample(form: &WineForm, documento: String) -> Result<WineSample, ValidationError> {
    let mut sample = WineSample {
        nome: required_text(form, FormField::Nome)?,
        fornecedor: required_text(form, FormField::Fornecedor)?,
        documento,
        acidez_fixa: 0.0,
        acidez_volatil: 0.0,
        acido_citrico: 0.0,
        acucar_residual: 0.0,
        cloretos: 0.0,
        dioxido_enxofre_livre: 0.0,
        dioxido_enxofre_total: 0.0,
        densidade: 0.0,
        ph: 0.0,
        sulfatos: 0.0,
        teor_alcoolico: 0.0,
    };
    for field in NumericField::ALL {
        let raw = form.get(FormField::Numeric(field));
        *field.slot_mut(&mut sample) = validate_number(raw, field.label())?;
    }
    Ok(sample)
}

fn required_text(form: &WineForm, field: FormField) -> Result<String, ValidationError> {
    match form.get(field) {
        Some(value) if !value.trim().is_empty() => Ok(value.to_string()),
        _ => Err(ValidationError::new(field.label(), Reason::Missing)),
    }
}
