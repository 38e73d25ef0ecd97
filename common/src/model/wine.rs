use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification label the service assigns to a good sample.
pub const GOOD_LABEL: &str = "BOM";

/// Server-assigned identifier of a catalog entry.
///
/// Never generated on the client: values only come from list, create or
/// fetch responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WineId(pub u64);

impl fmt::Display for WineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The body sent on create and update: a `WineRecord` without `id` and
/// `classificacao`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WineSample {
    pub nome: String,
    pub fornecedor: String,
    pub documento: String,
    pub acidez_fixa: f64,
    pub acidez_volatil: f64,
    pub acido_citrico: f64,
    pub acucar_residual: f64,
    pub cloretos: f64,
    pub dioxido_enxofre_livre: f64,
    pub dioxido_enxofre_total: f64,
    pub densidade: f64,
    pub ph: f64,
    pub sulfatos: f64,
    pub teor_alcoolico: f64,
}

/// One catalog entry as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WineRecord {
    pub id: WineId,
    #[serde(flatten)]
    pub sample: WineSample,
    /// Present once the service has classified the sample.
    #[serde(default)]
    pub classificacao: Option<String>,
}

impl WineRecord {
    pub fn is_good(&self) -> bool {
        is_good_label(self.classificacao.as_deref())
    }
}

/// Exact comparison against [`GOOD_LABEL`]; anything else, including a
/// missing label, is not good.
pub fn is_good_label(label: Option<&str>) -> bool {
    label == Some(GOOD_LABEL)
}
