//! Word service management endpoints.

use serde::{Deserialize, Serialize};

use wg_core::error::{WgError, WgResult};

use crate::client::ApiClient;
use crate::response::ServerResponse;

/// Service info returned by `/server/info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service_version: Option<String>,
    pub model: Option<String>,
    pub themes_available: Option<i64>,
}

impl ApiClient {
    /// Get service info (version, model, theme count).
    pub async fn service_info(&self) -> WgResult<ServiceInfo> {
        let resp: ServerResponse<ServiceInfo> = self.get_json("/server/info").await?;
        resp.data
            .ok_or_else(|| WgError::Http("missing service info data".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_info_deserialization() {
        let json = r#"{"service_version":"1.4.0","model":"gen-1","themes_available":12}"#;
        let info: ServiceInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.service_version.as_deref(), Some("1.4.0"));
        assert_eq!(info.themes_available, Some(12));
    }
}
