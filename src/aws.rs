use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_sqs::config::Region;

use crate::config::AppConfig;

/// Loads the shared SDK config. Credentials come from the default provider
/// chain; region and endpoint can be pinned through `AppConfig`.
pub async fn sdk_config(config: &AppConfig) -> SdkConfig {
    let region_provider = RegionProviderChain::default_provider()
        .or_else(Region::new(config.fallback_region.clone()));

    let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region_provider);

    if let Some(endpoint_url) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }

    loader.load().await
}

pub async fn sqs_client(config: &AppConfig) -> aws_sdk_sqs::Client {
    let sdk_config = sdk_config(config).await;
    aws_sdk_sqs::Client::new(&sdk_config)
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn test_endpoint_override() {
        let config = AppConfig {
            endpoint_url: Some("http://localhost:9324".to_string()),
            ..AppConfig::default()
        };

        let sdk_config = sdk_config(&config).await;

        assert_eq!(sdk_config.endpoint_url(), Some("http://localhost:9324"));
        assert!(sdk_config.region().is_some());
    }
}
