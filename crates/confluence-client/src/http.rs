//! Authenticated JSON transport.

use reqwest::{Client as HttpClient, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

const DISABLE_SYSTEM_PROXY_ENV: &str = "CONFLUENCE_DISABLE_SYSTEM_PROXY";

fn build_http_client() -> HttpClient {
    if should_disable_system_proxy() {
        HttpClient::builder()
            .no_proxy()
            .build()
            .expect("Failed to build reqwest client")
    } else {
        HttpClient::new()
    }
}

fn should_disable_system_proxy() -> bool {
    if std::env::var_os(DISABLE_SYSTEM_PROXY_ENV).is_some() {
        return true;
    }

    cfg!(test)
}

/// REST client bound to one Confluence site.
///
/// Every request carries basic auth. Errors are terminal: there is no retry,
/// backoff, or timeout policy here beyond what reqwest itself applies.
pub struct Client {
    http: HttpClient,
    base_url: String,
    public_base_url: String,
    username: String,
    token: String,
}

impl Client {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: build_http_client(),
            base_url: config.base_url(),
            public_base_url: config.public_base_url(),
            username: config.username.clone(),
            token: config.token.clone(),
        }
    }

    /// Base URL for user-facing links, e.g. to resolve `_links.webui` paths.
    pub fn public_base_url(&self) -> &str {
        &self.public_base_url
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(Method::GET, path, None::<&()>).await?;
        decode(path, response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::POST, path, Some(body)).await?;
        decode(path, response).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::PUT, path, Some(body)).await?;
        decode(path, response).await
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.send(Method::DELETE, path, None::<&()>).await?;
        Ok(())
    }

    async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .http
            .request(method.clone(), &url)
            .basic_auth(&self.username, Some(&self.token));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                path: path.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, %method, path, "request rejected");
            return Err(ClientError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                method: method.to_string(),
                path: path.to_string(),
            });
        }

        Ok(response)
    }
}

async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T> {
    let body = response
        .text()
        .await
        .map_err(|source| ClientError::Transport {
            path: path.to_string(),
            source,
        })?;
    serde_json::from_str(&body).map_err(|source| ClientError::Decode {
        path: path.to_string(),
        source,
    })
}
