//! Record Store Client for the classification service.
//!
//! `RecordStore` performs the five catalog operations as single request /
//! response round trips: no retries, no timeouts, no caching. It owns JSON
//! encoding, status checking and error-body extraction; the actual bytes
//! travel through a `Transport`, which is `GlooTransport` in the browser.

mod http;

use std::rc::Rc;

use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;

use common::errors::{ClientError, RemoteError, TransportError};
use common::model::wine::{WineId, WineRecord, WineSample};
use common::requests::{wine_path, WINES_PATH};
use common::responses::error_message;

pub use http::GlooTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// One outgoing call. `path` is relative to the service base address and
/// `body`, when present, is JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<String>,
}

/// Whatever the service answered, success or not.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait Transport {
    /// Sends one request. Fails only when no response was obtained.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for Rc<T> {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        (**self).send(request).await
    }
}

pub struct RecordStore<T> {
    transport: T,
}

impl<T: Transport> RecordStore<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// All records, in the order the service returns them.
    pub async fn list(&self) -> Result<Vec<WineRecord>, ClientError> {
        let response = self.call(Method::Get, WINES_PATH.to_string(), None).await?;
        decode(&response)
    }

    /// Submits a new sample; the answer carries the assigned id and
    /// classification.
    pub async fn create(&self, sample: &WineSample) -> Result<WineRecord, ClientError> {
        let body = encode(sample)?;
        let response = self.call(Method::Post, WINES_PATH.to_string(), Some(body)).await?;
        decode(&response)
    }

    pub async fn fetch_one(&self, id: WineId) -> Result<WineRecord, ClientError> {
        let response = self.call(Method::Get, wine_path(id), None).await?;
        decode(&response)
    }

    /// Full replacement of a stored record. The response body is ignored.
    pub async fn update(&self, id: WineId, sample: &WineSample) -> Result<(), ClientError> {
        let body = encode(sample)?;
        self.call(Method::Put, wine_path(id), Some(body)).await?;
        Ok(())
    }

    pub async fn delete(&self, id: WineId) -> Result<(), ClientError> {
        self.call(Method::Delete, wine_path(id), None).await?;
        Ok(())
    }

    async fn call(
        &self,
        method: Method,
        path: String,
        body: Option<String>,
    ) -> Result<ApiResponse, ClientError> {
        debug!("{} {}", method.as_str(), path);
        let response = self
            .transport
            .send(ApiRequest { method, path, body })
            .await?;
        if response.is_success() {
            return Ok(response);
        }

        let message = error_message(response.status, &response.status_text, &response.body);
        debug!("request failed with status {}: {}", response.status, message);
        Err(RemoteError {
            status: response.status,
            message,
        }
        .into())
    }
}

fn encode(sample: &WineSample) -> Result<String, ClientError> {
    serde_json::to_string(sample).map_err(|e| TransportError::new(e).into())
}

/// A success response that cannot be decoded counts as no usable response.
fn decode<D: DeserializeOwned>(response: &ApiResponse) -> Result<D, ClientError> {
    serde_json::from_str(&response.body)
        .map_err(|e| TransportError::new(format!("resposta inválida do servidor ({})", e)).into())
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted transport shared by the client and workflow tests.

    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    #[derive(Default)]
    pub struct ScriptedTransport {
        replies: RefCell<VecDeque<Result<ApiResponse, TransportError>>>,
        sent: RefCell<Vec<ApiRequest>>,
    }

    impl ScriptedTransport {
        pub fn new() -> Rc<Self> {
            Rc::new(Self::default())
        }

        pub fn reply(&self, status: u16, body: &str) -> &Self {
            let status_text = match status {
                200 => "OK",
                404 => "Not Found",
                422 => "Unprocessable Entity",
                500 => "Internal Server Error",
                _ => "",
            };
            self.replies.borrow_mut().push_back(Ok(ApiResponse {
                status,
                status_text: status_text.to_string(),
                body: body.to_string(),
            }));
            self
        }

        pub fn fail(&self, cause: &str) -> &Self {
            self.replies
                .borrow_mut()
                .push_back(Err(TransportError::new(cause)));
            self
        }

        pub fn sent(&self) -> Vec<ApiRequest> {
            self.sent.borrow().clone()
        }

        /// `"METHOD path"` for every request sent so far.
        pub fn calls(&self) -> Vec<String> {
            self.sent
                .borrow()
                .iter()
                .map(|r| format!("{} {}", r.method.as_str(), r.path))
                .collect()
        }
    }

    #[async_trait(?Send)]
    impl Transport for ScriptedTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
            self.sent.borrow_mut().push(request);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::new("no scripted reply")))
        }
    }

    pub fn record_json(id: u64, nome: &str, classificacao: &str) -> String {
        serde_json::json!({
            "id": id,
            "nome": nome,
            "fornecedor": "Vinhos BR",
            "documento": "***.***.*89-01",
            "acidez_fixa": 7.4,
            "acidez_volatil": 0.7,
            "acido_citrico": 0.0,
            "acucar_residual": 1.9,
            "cloretos": 0.076,
            "dioxido_enxofre_livre": 11.0,
            "dioxido_enxofre_total": 34.0,
            "densidade": 0.9978,
            "ph": 3.51,
            "sulfatos": 0.56,
            "teor_alcoolico": 9.4,
            "classificacao": classificacao
        })
        .to_string()
    }
}
