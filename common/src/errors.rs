//! Error taxonomy shared by the record store client and the workflows.
//!
//! Messages are user-facing and stay in Portuguese, matching the rest of
//! the interface.

use thiserror::Error;

/// Why a single form field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Reason {
    #[error("é obrigatório")]
    Missing,
    #[error("deve ser um número válido")]
    NotANumber,
    #[error("deve ter pelo menos {min} caracteres")]
    TooShort { min: usize },
}

/// Client-side rejection raised before any request is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("O campo {field} {reason}")]
pub struct ValidationError {
    /// User-facing label of the offending field.
    pub field: String,
    pub reason: Reason,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: Reason) -> Self {
        Self {
            field: field.into(),
            reason,
        }
    }
}

/// The service answered with a non-success status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RemoteError {
    pub status: u16,
    pub message: String,
}

/// No usable response was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Erro: {cause}")]
pub struct TransportError {
    pub cause: String,
}

impl TransportError {
    pub fn new(cause: impl ToString) -> Self {
        Self {
            cause: cause.to_string(),
        }
    }
}

/// Failure of one record store round trip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error(transparent)]
    Remote(#[from] RemoteError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}
