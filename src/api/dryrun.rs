use async_trait::async_trait;
use std::time::Duration;

use super::BrokerApi;
use super::types::{AppUser, MainOverview, Station, StationRequest, SystemComponent};
use crate::error::Result;

const SIMULATED_LATENCY: Duration = Duration::from_millis(400);

/// Answers every call with canned success, for demoing the wizard without a broker
pub struct DryrunApi;

#[async_trait]
impl BrokerApi for DryrunApi {
    async fn create_station(&self, request: &StationRequest) -> Result<Station> {
        tokio::time::sleep(SIMULATED_LATENCY).await;
        Ok(Station {
            name: request.name.clone(),
        })
    }

    async fn create_app_user(&self, username: &str) -> Result<AppUser> {
        tokio::time::sleep(SIMULATED_LATENCY).await;
        Ok(AppUser {
            username: username.to_string(),
            broker_connection_creds: "memphis".to_string(),
        })
    }

    async fn main_overview(&self) -> Result<MainOverview> {
        Ok(MainOverview {
            system_components: vec![
                SystemComponent {
                    component: "memphis-ui".to_string(),
                    actual_pods: Some(1),
                },
                SystemComponent {
                    component: "memphis-broker".to_string(),
                    actual_pods: Some(3),
                },
            ],
        })
    }

    async fn done_next_steps(&self) -> Result<()> {
        Ok(())
    }

    async fn edit_analytics(&self, _send_analytics: bool) -> Result<()> {
        Ok(())
    }
}
