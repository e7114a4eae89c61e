use serde::{Deserialize, Serialize};

/// How a station decides what to drop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RetentionType {
    /// Age of the message in seconds
    #[default]
    #[serde(rename = "message_age_sec")]
    MessageAge,
    /// Total stored size in bytes
    #[serde(rename = "bytes")]
    Size,
    /// Number of stored messages
    #[serde(rename = "messages")]
    Messages,
}

impl RetentionType {
    pub fn label(&self) -> &'static str {
        match self {
            RetentionType::MessageAge => "Time",
            RetentionType::Size => "Size",
            RetentionType::Messages => "Messages",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            RetentionType::MessageAge => RetentionType::Size,
            RetentionType::Size => RetentionType::Messages,
            RetentionType::Messages => RetentionType::MessageAge,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    #[default]
    File,
    Memory,
}

impl StorageType {
    pub fn label(&self) -> &'static str {
        match self {
            StorageType::File => "File",
            StorageType::Memory => "Memory",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            StorageType::File => StorageType::Memory,
            StorageType::Memory => StorageType::File,
        }
    }
}

/// Body of `POST /stations/createStation`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationRequest {
    pub name: String,
    pub retention_type: RetentionType,
    pub retention_value: u64,
    pub storage_type: StorageType,
    pub replicas: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Station {
    pub name: String,
}

/// Body of `POST /usermgmt/addUser`
#[derive(Debug, Clone, Serialize)]
pub struct AppUserRequest<'a> {
    pub username: &'a str,
    pub user_type: &'static str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppUser {
    pub username: String,
    /// Token producers and consumers present when connecting
    #[serde(default)]
    pub broker_connection_creds: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MainOverview {
    #[serde(default)]
    pub system_components: Vec<SystemComponent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SystemComponent {
    /// Component kind tag, e.g. "memphis-broker"
    pub component: String,
    #[serde(default)]
    pub actual_pods: Option<u32>,
}

/// Body of `PUT /usermgmt/editAnalytics`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnalyticsRequest {
    pub send_analytics: bool,
}

/// Error body the API returns on non-2xx responses
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
}
