use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};

use common::errors::TransportError;

use super::{ApiRequest, ApiResponse, Method, Transport};

/// Browser `fetch` transport rooted at the service base address.
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.url(&request.path);
        let builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };

        let response = match request.body {
            Some(body) => {
                builder
                    .header("Content-Type", "application/json")
                    .body(body)
                    .map_err(TransportError::new)?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(TransportError::new)?;

        let status = response.status();
        let status_text = response.status_text();
        // An unreadable body on a failed call still leaves the status line.
        let body = response.text().await.unwrap_or_default();

        Ok(ApiResponse {
            status,
            status_text,
            body,
        })
    }
}
