use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

use super::types::{
    AnalyticsRequest, ApiErrorBody, AppUser, AppUserRequest, MainOverview, Station,
    StationRequest,
};
use super::{BrokerApi, endpoints};
use crate::config::ApiConfig;
use crate::error::{ConsoleError, Result};

/// Live client for the broker's management REST API
#[derive(Debug, Clone)]
pub struct HttpBrokerApi {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBrokerApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("memphis-console/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token {
            Some(ref token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response> {
        let response = self.authorized(request).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body: ApiErrorBody = response.json().await.unwrap_or_default();
        let message = if body.message.is_empty() {
            status.canonical_reason().unwrap_or("request failed").to_string()
        } else {
            body.message
        };
        Err(ConsoleError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        Ok(self.send(request).await?.json().await?)
    }
}

#[async_trait]
impl BrokerApi for HttpBrokerApi {
    async fn create_station(&self, request: &StationRequest) -> Result<Station> {
        info!("Creating station '{}'", request.name);
        self.send_json(self.client.post(self.url(endpoints::CREATE_STATION)).json(request))
            .await
    }

    async fn create_app_user(&self, username: &str) -> Result<AppUser> {
        info!("Creating application user '{}'", username);
        let body = AppUserRequest {
            username,
            user_type: "application",
        };
        self.send_json(self.client.post(self.url(endpoints::ADD_USER)).json(&body))
            .await
    }

    async fn main_overview(&self) -> Result<MainOverview> {
        debug!("Fetching main overview");
        self.send_json(self.client.get(self.url(endpoints::GET_MAIN_OVERVIEW_DATA)))
            .await
    }

    async fn done_next_steps(&self) -> Result<()> {
        self.send(self.client.post(self.url(endpoints::DONE_NEXT_STEPS)))
            .await
            .map(|_| ())
    }

    async fn edit_analytics(&self, send_analytics: bool) -> Result<()> {
        let body = AnalyticsRequest { send_analytics };
        self.send(self.client.put(self.url(endpoints::EDIT_ANALYTICS)).json(&body))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let config = ApiConfig {
            url: "http://broker:9000/api/".to_string(),
            ..ApiConfig::default()
        };
        let api = HttpBrokerApi::new(&config).unwrap();
        assert_eq!(
            api.url(endpoints::ADD_USER),
            "http://broker:9000/api/usermgmt/addUser"
        );
    }
}
