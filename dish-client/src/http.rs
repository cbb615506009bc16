//! Gateway to the catalog backend
//!
//! Three endpoints, all relative to the configured base URL:
//! - `GET /dishes` returns `{ "data": [Dish] }`
//! - `PUT /dishes` creates or updates one dish
//! - `DELETE /dishes/{id}` removes one dish
//!
//! Mutation response bodies are never read; only the status matters.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use shared::{Dish, DishId, DishUpsert, ListEnvelope};

use crate::{ClientConfig, ClientError, ClientResult};

/// Backend gateway trait
#[async_trait]
pub trait DishGateway: Send + Sync {
    async fn list_dishes(&self) -> ClientResult<Vec<Dish>>;
    async fn upsert_dish(&self, dish: &DishUpsert) -> ClientResult<()>;
    async fn delete_dish(&self, id: &DishId) -> ClientResult<()>;
}

/// Network gateway over reqwest
#[derive(Debug, Clone)]
pub struct NetworkDishGateway {
    client: Client,
    base_url: Url,
}

impl NetworkDishGateway {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = Url::parse(config.base_url.trim())
            .map_err(|e| ClientError::Config(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "{} is not an http(s) base URL",
                config.base_url
            )));
        }

        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // new() rejects cannot-be-a-base URLs
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        match status {
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(body)),
            _ => Err(ClientError::Status { status, body }),
        }
    }
}

#[async_trait]
impl DishGateway for NetworkDishGateway {
    async fn list_dishes(&self) -> ClientResult<Vec<Dish>> {
        let url = self.endpoint(&["dishes"]);
        tracing::debug!(%url, "GET dishes");

        let response = self.client.get(url).send().await?;
        let body = Self::check_status(response).await?.bytes().await?;
        let envelope: ListEnvelope<Dish> = serde_json::from_slice(&body)?;

        tracing::debug!(count = envelope.data.len(), "dishes received");
        Ok(envelope.into_inner())
    }

    async fn upsert_dish(&self, dish: &DishUpsert) -> ClientResult<()> {
        let url = self.endpoint(&["dishes"]);
        tracing::debug!(%url, id = ?dish.id, "PUT dish");

        let response = self.client.put(url).json(dish).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn delete_dish(&self, id: &DishId) -> ClientResult<()> {
        let url = self.endpoint(&["dishes", id.as_str()]);
        tracing::debug!(%url, "DELETE dish");

        let response = self.client.delete(url).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_segments() {
        let gateway = NetworkDishGateway::new(&ClientConfig::new("http://localhost:9000")).unwrap();
        assert_eq!(
            gateway.endpoint(&["dishes"]).as_str(),
            "http://localhost:9000/dishes"
        );
        assert_eq!(
            gateway.endpoint(&["dishes", "1"]).as_str(),
            "http://localhost:9000/dishes/1"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let gateway =
            NetworkDishGateway::new(&ClientConfig::new("https://menu.example.com/api/")).unwrap();
        assert_eq!(
            gateway.endpoint(&["dishes", "a b"]).as_str(),
            "https://menu.example.com/api/dishes/a%20b"
        );
    }

    #[test]
    fn test_rejects_non_http_base() {
        let err = NetworkDishGateway::new(&ClientConfig::new("mailto:chef@example.com")).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));

        let err = NetworkDishGateway::new(&ClientConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }
}
