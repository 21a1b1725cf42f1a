//! HTTP client for the BabbageBox backend.

// No request timeout: a request runs until the transport reports completion or failure.
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;

use crate::api::{ApiError, BackendApi};
use crate::types::config::ServerConfig;
use crate::types::memory::{MemoryRecord, MemoryUpdate};

#[derive(Clone, Debug)]
pub struct HttpBackend {
    base: String,
    client: Client,
}

impl HttpBackend {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Response, ApiError> {
        let res = request.send().await?;
        if !res.status().is_success() {
            return Err(ApiError::Status {
                status: res.status().as_u16(),
                url: url.to_string(),
            });
        }
        Ok(res)
    }

    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);
        let res = self.send(self.client.get(&url), &url).await?;
        read_json(res).await
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read a response body as JSON, yielding `Null` when it does not parse.
async fn read_json(res: Response) -> Result<Value, ApiError> {
    let bytes = res.bytes().await?;
    match serde_json::from_slice(&bytes) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::debug!("Response body is not JSON: {}", e);
            Ok(Value::Null)
        }
    }
}

#[async_trait]
impl BackendApi for HttpBackend {
    async fn get_config(&self) -> Result<ServerConfig, ApiError> {
        let body = self.get_json("/api/config").await?;
        Ok(ServerConfig::from_value(body))
    }

    async fn list_conversations(&self) -> Result<Vec<Value>, ApiError> {
        match self.get_json("/api/conversations").await? {
            Value::Array(conversations) => Ok(conversations),
            other => {
                tracing::debug!("Expected conversation array, got {}", type_name(&other));
                Ok(Vec::new())
            }
        }
    }

    async fn list_memories(&self) -> Result<Vec<MemoryRecord>, ApiError> {
        let body = self.get_json("/api/memory").await?;
        Ok(MemoryRecord::list_from_value(body))
    }

    async fn delete_memory(&self, id: i64) -> Result<(), ApiError> {
        let url = self.url(&format!("/api/memory/{}", id));
        tracing::debug!("DELETE {}", url);
        self.send(self.client.delete(&url), &url).await?;
        Ok(())
    }

    async fn update_memory(
        &self,
        id: i64,
        content: &str,
    ) -> Result<Option<MemoryRecord>, ApiError> {
        let url = self.url(&format!("/api/memory/{}", id));
        tracing::debug!("PUT {}", url);
        let request = self.client.put(&url).json(&MemoryUpdate { content });
        let res = self.send(request, &url).await?;
        Ok(MemoryRecord::from_value(read_json(res).await?))
    }
}
