use reqwest::Client;
use serde_json::Value;

pub mod config;
pub mod error;
pub mod limit;

pub use config::Config;
pub use error::FetchError;
pub use limit::{effective_limit, RequestLimit};

/// A single upstream search result. Nothing inside it is inspected.
pub type ImageResult = Value;

pub fn image_url(image: &ImageResult) -> Option<&str> {
    image["url"].as_str()
}

#[derive(Debug, Clone)]
pub struct CatService {
    client: Client,
    config: Config,
}

impl CatService {
    pub fn new(config: Config) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn with_client(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetches between 6 and 10 images, fewer if the upstream returns less.
    ///
    /// The upstream is always asked for `config.upstream_limit` results and
    /// the clamp is applied to the response. Failures are logged here and
    /// handed back unchanged.
    pub async fn fetch_images(
        &self,
        desired_count: Option<i64>,
    ) -> Result<Vec<ImageResult>, FetchError> {
        let limit = RequestLimit::new(desired_count);
        self.fetch_with_limit(limit).await
    }

    pub async fn fetch_images_from_input(
        &self,
        raw: Option<&str>,
    ) -> Result<Vec<ImageResult>, FetchError> {
        self.fetch_with_limit(RequestLimit::parse(raw)).await
    }

    async fn fetch_with_limit(
        &self,
        limit: RequestLimit,
    ) -> Result<Vec<ImageResult>, FetchError> {
        match self.request_images().await {
            Ok(mut images) => {
                let upstream_count = images.len();
                images.truncate(limit.get());
                log::info!(
                    "API returned: {} cats, using: {}",
                    upstream_count,
                    images.len()
                );
                Ok(images)
            }
            Err(e) => {
                log::error!("Error fetching cats: {}", e);
                Err(e)
            }
        }
    }

    async fn request_images(&self) -> Result<Vec<ImageResult>, FetchError> {
        let resp = self
            .client
            .get(&self.config.api_url)
            .query(&[("limit", self.config.upstream_limit)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str::<Vec<ImageResult>>(&body)?)
    }
}

impl Default for CatService {
    fn default() -> Self {
        Self::new(Config::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_image_url() {
        let image = json!({
            "id": "MTY3ODIyMQ",
            "url": "https://cdn2.thecatapi.com/images/MTY3ODIyMQ.jpg",
            "width": 500,
            "height": 375,
        });
        assert_eq!(
            image_url(&image),
            Some("https://cdn2.thecatapi.com/images/MTY3ODIyMQ.jpg")
        );
        assert_eq!(image_url(&json!({ "id": "abc" })), None);
        assert_eq!(image_url(&json!(42)), None);
    }

    #[test]
    fn test_new_keeps_config() {
        let service =
            CatService::new(Config::with_api_url("http://127.0.0.1:1/x"));
        assert_eq!(service.config().api_url, "http://127.0.0.1:1/x");
        assert_eq!(service.config().upstream_limit, 10);
    }
}
