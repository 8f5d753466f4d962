use guardrail_web::{ApiError, HttpResponse, Transport};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};

/// [`Transport`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> color_eyre::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("guardrail/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    async fn send(request: RequestBuilder) -> Result<HttpResponse, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        tracing::debug!(status, bytes = body.len(), "response received");
        Ok(HttpResponse { status, body })
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, ApiError> {
        tracing::debug!(url, "GET");
        Self::send(self.client.get(url)).await
    }

    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, ApiError> {
        tracing::debug!(url, "POST");
        Self::send(
            self.client
                .post(url)
                .header(CONTENT_TYPE, "application/json")
                .body(body),
        )
        .await
    }
}
