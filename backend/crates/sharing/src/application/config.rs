//! Application Configuration
//!
//! Configuration for the sharing layer.

use std::time::Duration;

use platform::config::GatewayConfig;

#[derive(Debug, Clone)]
pub struct SharingConfig {
    /// Secret accepted in `x-internal-system-token` on session creation
    pub internal_system_token: Option<String>,
    /// Origin that share links point at
    pub public_base_url: String,
    /// Longest lifetime a shared report may request
    pub shared_report_max_ttl: Duration,
}

impl Default for SharingConfig {
    fn default() -> Self {
        Self {
            internal_system_token: None,
            public_base_url: "http://localhost:3000".to_string(),
            shared_report_max_ttl: Duration::from_secs(720 * 3600),
        }
    }
}

impl SharingConfig {
    pub fn from_gateway(config: &GatewayConfig) -> Self {
        Self {
            internal_system_token: config.internal_system_token.clone(),
            public_base_url: config.public_base_url.clone(),
            shared_report_max_ttl: config.shared_report_max_ttl,
        }
    }

    /// Dashboard page that renders a shared report
    pub fn share_url(&self, campaign_id: &str) -> String {
        format!(
            "{}/shared/influencer-report/{campaign_id}",
            self.public_base_url.trim_end_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_url() {
        let config = SharingConfig {
            public_base_url: "https://app.example.com/".to_string(),
            ..SharingConfig::default()
        };
        assert_eq!(
            config.share_url("15"),
            "https://app.example.com/shared/influencer-report/15"
        );
    }
}
