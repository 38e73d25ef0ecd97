//! Field catalogue shared by the forms, the validator and the renderer.
//!
//! `NumericField` lists the eleven physicochemical attributes in the order
//! the service declares them; `FormField` adds the three free-text fields.
//! Keys are the JSON property names used on the wire; labels are what the
//! user sees.

use super::wine::WineSample;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NumericField {
    AcidezFixa,
    AcidezVolatil,
    AcidoCitrico,
    AcucarResidual,
    Cloretos,
    DioxidoEnxofreLivre,
    DioxidoEnxofreTotal,
    Densidade,
    Ph,
    Sulfatos,
    TeorAlcoolico,
}

impl NumericField {
    pub const ALL: [NumericField; 11] = [
        NumericField::AcidezFixa,
        NumericField::AcidezVolatil,
        NumericField::AcidoCitrico,
        NumericField::AcucarResidual,
        NumericField::Cloretos,
        NumericField::DioxidoEnxofreLivre,
        NumericField::DioxidoEnxofreTotal,
        NumericField::Densidade,
        NumericField::Ph,
        NumericField::Sulfatos,
        NumericField::TeorAlcoolico,
    ];

    pub fn key(self) -> &'static str {
        match self {
            NumericField::AcidezFixa => "acidez_fixa",
            NumericField::AcidezVolatil => "acidez_volatil",
            NumericField::AcidoCitrico => "acido_citrico",
            NumericField::AcucarResidual => "acucar_residual",
            NumericField::Cloretos => "cloretos",
            NumericField::DioxidoEnxofreLivre => "dioxido_enxofre_livre",
            NumericField::DioxidoEnxofreTotal => "dioxido_enxofre_total",
            NumericField::Densidade => "densidade",
            NumericField::Ph => "ph",
            NumericField::Sulfatos => "sulfatos",
            NumericField::TeorAlcoolico => "teor_alcoolico",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NumericField::AcidezFixa => "Acidez Fixa",
            NumericField::AcidezVolatil => "Acidez Volátil",
            NumericField::AcidoCitrico => "Ácido Cítrico",
            NumericField::AcucarResidual => "Açúcar Residual",
            NumericField::Cloretos => "Cloretos",
            NumericField::DioxidoEnxofreLivre => "SO₂ Livre",
            NumericField::DioxidoEnxofreTotal => "SO₂ Total",
            NumericField::Densidade => "Densidade",
            NumericField::Ph => "pH",
            NumericField::Sulfatos => "Sulfatos",
            NumericField::TeorAlcoolico => "Teor Alcoólico",
        }
    }

    pub fn value_of(self, sample: &WineSample) -> f64 {
        match self {
            NumericField::AcidezFixa => sample.acidez_fixa,
            NumericField::AcidezVolatil => sample.acidez_volatil,
            NumericField::AcidoCitrico => sample.acido_citrico,
            NumericField::AcucarResidual => sample.acucar_residual,
            NumericField::Cloretos => sample.cloretos,
            NumericField::DioxidoEnxofreLivre => sample.dioxido_enxofre_livre,
            NumericField::DioxidoEnxofreTotal => sample.dioxido_enxofre_total,
            NumericField::Densidade => sample.densidade,
            NumericField::Ph => sample.ph,
            NumericField::Sulfatos => sample.sulfatos,
            NumericField::TeorAlcoolico => sample.teor_alcoolico,
        }
    }

    pub fn slot_mut(self, sample: &mut WineSample) -> &mut f64 {
        match self {
            NumericField::AcidezFixa => &mut sample.acidez_fixa,
            NumericField::AcidezVolatil => &mut sample.acidez_volatil,
            NumericField::AcidoCitrico => &mut sample.acido_citrico,
            NumericField::AcucarResidual => &mut sample.acucar_residual,
            NumericField::Cloretos => &mut sample.cloretos,
            NumericField::DioxidoEnxofreLivre => &mut sample.dioxido_enxofre_livre,
            NumericField::DioxidoEnxofreTotal => &mut sample.dioxido_enxofre_total,
            NumericField::Densidade => &mut sample.densidade,
            NumericField::Ph => &mut sample.ph,
            NumericField::Sulfatos => &mut sample.sulfatos,
            NumericField::TeorAlcoolico => &mut sample.teor_alcoolico,
        }
    }
}

/// Any input the create or edit form exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormField {
    Nome,
    Fornecedor,
    Documento,
    Numeric(NumericField),
}

impl FormField {
    /// Form order: the three text fields, then the numeric ones.
    pub fn all() -> impl Iterator<Item = FormField> {
        [FormField::Nome, FormField::Fornecedor, FormField::Documento]
            .into_iter()
            .chain(NumericField::ALL.into_iter().map(FormField::Numeric))
    }

    pub fn key(self) -> &'static str {
        match self {
            FormField::Nome => "nome",
            FormField::Fornecedor => "fornecedor",
            FormField::Documento => "documento",
            FormField::Numeric(field) => field.key(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Nome => "Nome",
            FormField::Fornecedor => "Fornecedor",
            FormField::Documento => "Documento",
            FormField::Numeric(field) => field.label(),
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, FormField::Numeric(_))
    }
}
