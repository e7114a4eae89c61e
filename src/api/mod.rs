mod client;
mod dryrun;
mod types;

pub use client::HttpBrokerApi;
pub use dryrun::DryrunApi;
pub use types::{
    AnalyticsRequest, AppUser, AppUserRequest, MainOverview, RetentionType, Station,
    StationRequest, StorageType, SystemComponent,
};

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::ApiConfig;
use crate::error::Result;

/// Paths relative to the configured API base URL
pub mod endpoints {
    pub const CREATE_STATION: &str = "/stations/createStation";
    pub const ADD_USER: &str = "/usermgmt/addUser";
    pub const GET_MAIN_OVERVIEW_DATA: &str = "/monitoring/getMainOverviewData";
    pub const DONE_NEXT_STEPS: &str = "/usermgmt/doneNextSteps";
    pub const EDIT_ANALYTICS: &str = "/usermgmt/editAnalytics";
}

/// The slice of the broker management API the console uses
#[async_trait]
pub trait BrokerApi: Send + Sync {
    async fn create_station(&self, request: &StationRequest) -> Result<Station>;
    async fn create_app_user(&self, username: &str) -> Result<AppUser>;
    async fn main_overview(&self) -> Result<MainOverview>;
    async fn done_next_steps(&self) -> Result<()>;
    async fn edit_analytics(&self, send_analytics: bool) -> Result<()>;
}

/// Create the appropriate API client based on dryrun mode
pub fn create_api(config: &ApiConfig, dryrun: bool) -> Result<Arc<dyn BrokerApi>> {
    if dryrun {
        Ok(Arc::new(DryrunApi))
    } else {
        Ok(Arc::new(HttpBrokerApi::new(config)?))
    }
}

/// Running broker replicas from the overview. The first component tagged
/// "broker" wins; without one the second entry is used.
pub fn select_actual_pods(components: &[SystemComponent]) -> Option<u32> {
    let idx = components
        .iter()
        .position(|c| c.component.contains("broker"))
        .unwrap_or(1);
    components.get(idx).and_then(|c| c.actual_pods)
}
