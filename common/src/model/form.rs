//! Raw form values as the user typed them.
//!
//! A `WineForm` never holds parsed numbers: every input is kept as the
//! string the browser reported, and a field that was never filled is
//! simply absent. Turning a form into a request body is the job of
//! `crate::validation`.

use std::collections::BTreeMap;

use super::fields::{FormField, NumericField};
use super::wine::WineSample;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WineForm {
    values: BTreeMap<FormField, String>,
}

impl WineForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled with a stored sample, as shown by the edit surface.
    pub fn from_sample(sample: &WineSample) -> Self {
        let mut form = Self::new();
        form.set(FormField::Nome, sample.nome.clone());
        form.set(FormField::Fornecedor, sample.fornecedor.clone());
        form.set(FormField::Documento, sample.documento.clone());
        for field in NumericField::ALL {
            form.set(FormField::Numeric(field), field.value_of(sample).to_string());
        }
        form
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_sample_renders_numbers_in_shortest_form() {
        let sample = WineSample {
            nome: "Lagoas".into(),
            fornecedor: "Vinhos BR".into(),
            documento: "12345678901".into(),
            acidez_fixa: 7.4,
            acidez_volatil: 0.7,
            acido_citrico: 0.0,
            acucar_residual: 1.9,
            cloretos: 0.076,
            dioxido_enxofre_livre: 11.0,
            dioxido_enxofre_total: 34.0,
            densidade: 0.9978,
            ph: 3.51,
            sulfatos: 0.56,
            teor_alcoolico: 9.4,
        };
        let form = WineForm::from_sample(&sample);

        assert_eq!(form.get(FormField::Documento), Some("12345678901"));
        assert_eq!(form.get(FormField::Numeric(NumericField::AcidezFixa)), Some("7.4"));
        assert_eq!(form.get(FormField::Numeric(NumericField::AcidoCitrico)), Some("0"));
        assert_eq!(
            form.get(FormField::Numeric(NumericField::DioxidoEnxofreTotal)),
            Some("34")
        );
    }

    #[test]
    fn unset_fields_read_as_absent() {
        let mut form = WineForm::new();
        assert_eq!(form.get(FormField::Nome), None);
        form.set(FormField::Nome, "");
        assert_eq!(form.get(FormField::Nome), Some(""));
        form.clear();
        assert!(form.is_empty());
    }
}
