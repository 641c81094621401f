use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::VectorStoreAdmin;
use crate::domain::{
    CollectionInfo, CollectionName, CollectionStatus, DomainError, Point, ServerInfo, VectorParams,
};

pub const DEFAULT_QDRANT_URL: &str = "http://localhost";
pub const DEFAULT_QDRANT_PORT: u16 = 6333;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how to reach a Qdrant server.
#[derive(Debug, Clone)]
pub struct QdrantConfig {
    pub url: String,
    pub port: u16,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for QdrantConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_QDRANT_URL.to_string(),
            port: DEFAULT_QDRANT_PORT,
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Combine a user supplied URL and port into the REST base URL.
///
/// A URL without a scheme gets `http://`. The port is applied only when the
/// URL does not already name one.
pub fn resolve_base_url(url: &str, port: u16) -> Result<Url, DomainError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(DomainError::invalid_input("Qdrant URL must not be empty"));
    }

    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    let mut parsed = Url::parse(&with_scheme)
        .map_err(|e| DomainError::invalid_input(format!("Invalid Qdrant URL '{}': {}", url, e)))?;

    // `Url` drops a scheme's default port (`:80`, `:443`), so look at the
    // raw authority instead of `parsed.port()`.
    if !has_explicit_port(&with_scheme) {
        parsed.set_port(Some(port)).map_err(|_| {
            DomainError::invalid_input(format!("Cannot set a port on URL '{}'", url))
        })?;
    }

    Ok(parsed)
}

fn has_explicit_port(url: &str) -> bool {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let authority = rest
        .split(|c| matches!(c, '/' | '?' | '#'))
        .next()
        .unwrap_or_default();
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, hp)| hp);

    // IPv6 literals carry colons of their own: `[::1]:6333`.
    let after_host = match host_port.rfind(']') {
        Some(end) if host_port.starts_with('[') => &host_port[end + 1..],
        _ => host_port,
    };

    match after_host.rsplit_once(':') {
        Some((_, port)) => !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

#[derive(Deserialize)]
struct ApiResponse<T> {
    result: T,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    status: ApiErrorStatus,
}

#[derive(Deserialize)]
struct ApiErrorStatus {
    error: String,
}

#[derive(Deserialize)]
struct RootResponse {
    title: String,
    version: String,
}

#[derive(Deserialize)]
struct CollectionsResult {
    collections: Vec<CollectionDescription>,
}

#[derive(Deserialize)]
struct CollectionDescription {
    name: String,
}

#[derive(Deserialize)]
struct CollectionInfoResult {
    status: CollectionStatus,
    #[serde(default)]
    points_count: Option<u64>,
    config: CollectionConfigResult,
}

#[derive(Deserialize)]
struct CollectionConfigResult {
    params: CollectionParamsResult,
}

#[derive(Deserialize)]
struct CollectionParamsResult {
    #[serde(default)]
    vectors: Option<VectorsConfigResult>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum VectorsConfigResult {
    Single(VectorParams),
    Named(HashMap<String, serde_json::Value>),
}

impl CollectionInfoResult {
    fn into_info(self, name: CollectionName) -> CollectionInfo {
        let vectors = match self.config.params.vectors {
            Some(VectorsConfigResult::Single(params)) => Some(params),
            Some(VectorsConfigResult::Named(_)) | None => None,
        };
        CollectionInfo::new(name, self.status, self.points_count.unwrap_or(0), vectors)
    }
}

#[derive(Serialize)]
struct CreateCollectionRequest {
    vectors: VectorParams,
}

#[derive(Serialize)]
struct UpsertPointsRequest<'a> {
    points: &'a [Point],
}

/// [`VectorStoreAdmin`] over the Qdrant REST API.
pub struct QdrantRestClient {
    client: reqwest::Client,
    base_url: Url,
}

impl QdrantRestClient {
    pub fn new(config: &QdrantConfig) -> Result<Self, DomainError> {
        let base_url = resolve_base_url(&config.url, config.port)?;

        let mut headers = HeaderMap::new();
        if let Some(key) = config.api_key.as_deref().filter(|k| !k.is_empty()) {
            let value = HeaderValue::from_str(key)
                .map_err(|_| DomainError::invalid_input("API key contains invalid characters"))?;
            headers.insert("api-key", value);
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout.min(Duration::from_secs(5)))
            .default_headers(headers)
            .build()
            .map_err(|e| DomainError::internal(format!("Failed to build HTTP client: {}", e)))?;

        debug!("Qdrant REST client targeting {}", base_url);

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL with `segments` appended, each percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, DomainError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DomainError::internal(format!("Cannot build a path on {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, DomainError> {
        request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                DomainError::connection(format!(
                    "Qdrant not reachable at {}: {}",
                    self.base_url.as_str().trim_end_matches('/'),
                    e
                ))
            } else {
                DomainError::vector_store(format!("Request failed: {}", e))
            }
        })
    }

    async fn read_result<T: DeserializeOwned>(
        response: Response,
        context: &str,
    ) -> Result<T, DomainError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from(response, context).await);
        }

        let body: ApiResponse<T> = response.json().await.map_err(|e| {
            DomainError::vector_store(format!("{}: failed to parse response: {}", context, e))
        })?;
        Ok(body.result)
    }

    async fn error_from(response: Response, context: &str) -> DomainError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);
        warn!("{}: Qdrant returned {}: {}", context, status, message);

        if status == StatusCode::NOT_FOUND {
            DomainError::not_found(format!("{}: {}", context, message))
        } else {
            DomainError::vector_store(format!("{}: Qdrant returned {}: {}", context, status, message))
        }
    }
}

/// Qdrant error bodies look like `{"status": {"error": "..."}}`; anything
/// else is passed through as text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .map(|b| b.status.error)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[async_trait]
impl VectorStoreAdmin for QdrantRestClient {
    async fn server_info(&self) -> Result<ServerInfo, DomainError> {
        let url = self.endpoint(&[])?;
        let response = self.send(self.client.get(url)).await?;

        // Any HTTP answer means the server is up, even one refusing the
        // request (a secured instance without an api-key answers 401).
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<RootResponse>(&body) {
            Ok(root) if status.is_success() => Ok(ServerInfo::new(root.title, root.version)),
            _ => {
                warn!("Server info: Qdrant returned {}: {}", status, error_message(&body));
                Ok(ServerInfo::new(format!("HTTP {}", status), "unknown"))
            }
        }
    }

    async fn list_collections(&self) -> Result<Vec<CollectionName>, DomainError> {
        let url = self.endpoint(&["collections"])?;
        let response = self.send(self.client.get(url)).await?;
        let result: CollectionsResult = Self::read_result(response, "List collections").await?;

        result
            .collections
            .into_iter()
            .map(|c| CollectionName::parse(&c.name))
            .collect()
    }

    async fn collection_info(
        &self,
        name: &CollectionName,
    ) -> Result<Option<CollectionInfo>, DomainError> {
        let url = self.endpoint(&["collections", name.as_str()])?;
        let response = self.send(self.client.get(url)).await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("Collection {} does not exist", name);
            return Ok(None);
        }

        let result: CollectionInfoResult = Self::read_result(response, "Collection info").await?;
        Ok(Some(result.into_info(name.clone())))
    }

    async fn create_collection(
        &self,
        name: &CollectionName,
        params: VectorParams,
    ) -> Result<(), DomainError> {
        let url = self.endpoint(&["collections", name.as_str()])?;
        let body = CreateCollectionRequest { vectors: params };
        let response = self.send(self.client.put(url).json(&body)).await?;

        let created: bool = Self::read_result(response, "Create collection").await?;
        if !created {
            return Err(DomainError::vector_store(format!(
                "Qdrant did not create collection '{}'",
                name
            )));
        }
        Ok(())
    }

    async fn delete_collection(&self, name: &CollectionName) -> Result<bool, DomainError> {
        let url = self.endpoint(&["collections", name.as_str()])?;
        let response = self.send(self.client.delete(url)).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }

        Self::read_result(response, "Delete collection").await
    }

    async fn upsert_points(
        &self,
        name: &CollectionName,
        points: &[Point],
        wait: bool,
    ) -> Result<(), DomainError> {
        if points.is_empty() {
            return Ok(());
        }

        let mut url = self.endpoint(&["collections", name.as_str(), "points"])?;
        url.query_pairs_mut()
            .append_pair("wait", if wait { "true" } else { "false" });

        let body = UpsertPointsRequest { points };
        let response = self.send(self.client.put(url).json(&body)).await?;

        let _: serde_json::Value = Self::read_result(response, "Upsert points").await?;
        debug!("Upserted {} points into {}", points.len(), name);
        Ok(())
    }
}
