use crate::domain::money::{FeeSchedule, Money};
use crate::domain::ports::{CdnProvider, Provider};
use crate::error::ProviderError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn qualities(list: &[&str]) -> Vec<String> {
    list.iter().map(|q| q.to_string()).collect()
}

/// Akamai edge network, served from a single configured region.
pub struct AkamaiCdn {
    name: String,
    api_key: String,
    region: String,
    pricing: FeeSchedule,
}

impl AkamaiCdn {
    const REGIONS: [&'static str; 3] = ["US", "EU", "ASIA"];

    pub fn new(api_key: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            name: "AkamaiCDN".to_string(),
            api_key: api_key.into(),
            region: region.into(),
            pricing: FeeSchedule::percentage(dec!(0.085)),
        }
    }

    fn has_credentials(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl Provider for AkamaiCdn {
    fn name(&self) -> &str {
        &self.name
    }
}

impl CdnProvider for AkamaiCdn {
    fn stream_url(
        &self,
        video_id: &str,
        quality: &str,
        _user_location: &str,
    ) -> Result<String, ProviderError> {
        if !self.has_credentials() {
            return Err(ProviderError::Unreachable {
                provider: self.name.clone(),
            });
        }
        Ok(format!(
            "https://akamai-{}.com/video/{}/{}",
            self.region, video_id, quality
        ))
    }

    fn available_qualities(&self, _video_id: &str) -> Vec<String> {
        qualities(&["480p", "720p", "1080p", "4K"])
    }

    fn bandwidth_cost(&self, data_gb: Decimal) -> Money {
        self.pricing.apply(data_gb)
    }

    fn is_available_in_region(&self, region: &str) -> bool {
        Self::REGIONS.contains(&region)
    }
}

/// Amazon CloudFront distribution with global coverage.
pub struct CloudFrontCdn {
    name: String,
    aws_access_key: String,
    aws_secret: String,
    distribution_id: String,
    pricing: FeeSchedule,
}

impl CloudFrontCdn {
    pub fn new(
        aws_access_key: impl Into<String>,
        aws_secret: impl Into<String>,
        distribution_id: impl Into<String>,
    ) -> Self {
        Self {
            name: "CloudFrontCDN".to_string(),
            aws_access_key: aws_access_key.into(),
            aws_secret: aws_secret.into(),
            distribution_id: distribution_id.into(),
            pricing: FeeSchedule::percentage(dec!(0.075)),
        }
    }
}

impl Provider for CloudFrontCdn {
    fn name(&self) -> &str {
        &self.name
    }
}

impl CdnProvider for CloudFrontCdn {
    fn stream_url(
        &self,
        video_id: &str,
        quality: &str,
        _user_location: &str,
    ) -> Result<String, ProviderError> {
        if self.aws_access_key.is_empty() || self.aws_secret.is_empty() {
            return Err(ProviderError::Unreachable {
                provider: self.name.clone(),
            });
        }
        Ok(format!(
            "https://{}.cloudfront.net/{}/{}.m3u8",
            self.distribution_id, video_id, quality
        ))
    }

    fn available_qualities(&self, _video_id: &str) -> Vec<String> {
        qualities(&["360p", "480p", "720p", "1080p", "4K", "8K"])
    }

    fn bandwidth_cost(&self, data_gb: Decimal) -> Money {
        self.pricing.apply(data_gb)
    }

    fn is_available_in_region(&self, _region: &str) -> bool {
        true
    }
}

pub struct FastlyCdn {
    name: String,
    service_id: String,
    api_token: String,
    pricing: FeeSchedule,
}

impl FastlyCdn {
    const REGIONS: [&'static str; 3] = ["US", "EU", "CA"];

    pub fn new(service_id: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            name: "FastlyCDN".to_string(),
            service_id: service_id.into(),
            api_token: api_token.into(),
            pricing: FeeSchedule::percentage(dec!(0.095)),
        }
    }
}

impl Provider for FastlyCdn {
    fn name(&self) -> &str {
        &self.name
    }
}

impl CdnProvider for FastlyCdn {
    fn stream_url(
        &self,
        video_id: &str,
        quality: &str,
        _user_location: &str,
    ) -> Result<String, ProviderError> {
        if self.api_token.is_empty() {
            return Err(ProviderError::Unreachable {
                provider: self.name.clone(),
            });
        }
        Ok(format!(
            "https://fastly-global.com/{}/stream/{}?q={}",
            self.service_id, video_id, quality
        ))
    }

    fn available_qualities(&self, _video_id: &str) -> Vec<String> {
        qualities(&["240p", "480p", "720p", "1080p"])
    }

    fn bandwidth_cost(&self, data_gb: Decimal) -> Money {
        self.pricing.apply(data_gb)
    }

    fn is_available_in_region(&self, region: &str) -> bool {
        Self::REGIONS.contains(&region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_akamai_url_and_cost() {
        let cdn = AkamaiCdn::new("akamai_key", "us-east");
        assert_eq!(
            cdn.stream_url("video456", "1080p", "US").unwrap(),
            "https://akamai-us-east.com/video/video456/1080p"
        );
        assert_eq!(cdn.bandwidth_cost(dec!(2.5)), Money::new(dec!(0.2125)));
        assert!(cdn.is_available_in_region("ASIA"));
        assert!(!cdn.is_available_in_region("CA"));
    }

    #[test]
    fn test_akamai_without_credentials_is_unreachable() {
        let cdn = AkamaiCdn::new("", "us-east");
        assert!(matches!(
            cdn.stream_url("v", "720p", "US"),
            Err(ProviderError::Unreachable { .. })
        ));
    }

    #[test]
    fn test_cloudfront_is_global() {
        let cdn = CloudFrontCdn::new("aws_key", "aws_secret", "distribution123");
        assert!(cdn.is_available_in_region("ANTARCTICA"));
        assert_eq!(
            cdn.stream_url("video456", "8K", "US").unwrap(),
            "https://distribution123.cloudfront.net/video456/8K.m3u8"
        );
        assert_eq!(cdn.available_qualities("video456").last().unwrap(), "8K");
    }

    #[test]
    fn test_fastly_regions_and_url() {
        let cdn = FastlyCdn::new("svc", "token");
        assert!(cdn.is_available_in_region("CA"));
        assert!(!cdn.is_available_in_region("ASIA"));
        assert_eq!(
            cdn.stream_url("v1", "720p", "CA").unwrap(),
            "https://fastly-global.com/svc/stream/v1?q=720p"
        );
    }

    #[test]
    fn test_bandwidth_cost_is_monotonic() {
        let providers: Vec<Box<dyn CdnProvider>> = vec![
            Box::new(AkamaiCdn::new("k", "r")),
            Box::new(CloudFrontCdn::new("a", "b", "c")),
            Box::new(FastlyCdn::new("s", "t")),
        ];
        for cdn in &providers {
            let costs: Vec<Money> = (0..50i64)
                .map(|gb| cdn.bandwidth_cost(Decimal::from(gb)))
                .collect();
            assert!(costs.windows(2).all(|w| w[0] <= w[1]), "{}", cdn.name());
        }
    }

    #[test]
    fn test_region_answers_do_not_depend_on_history() {
        let providers: Vec<Box<dyn CdnProvider>> = vec![
            Box::new(AkamaiCdn::new("k", "r")),
            Box::new(CloudFrontCdn::new("a", "b", "c")),
            Box::new(FastlyCdn::new("s", "t")),
        ];
        let regions = ["US", "EU", "ASIA", "CA", "JP"];
        for cdn in &providers {
            let first: Vec<bool> = regions.iter().map(|r| cdn.is_available_in_region(r)).collect();
            let _ = cdn.stream_url("v1", "720p", "US");
            let _ = cdn.bandwidth_cost(dec!(10));
            let again: Vec<bool> = regions.iter().map(|r| cdn.is_available_in_region(r)).collect();
            assert_eq!(first, again, "{}", cdn.name());
        }
    }
}
