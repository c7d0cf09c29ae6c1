use crate::domain::outcome::{CostComparison, ProviderCost, StreamSession};
use crate::domain::ports::{CdnProvider, CdnProviderBox, VideoAnalyticsBox};
use crate::error::{DispatchError, ProviderError};
use rust_decimal::Decimal;
use tracing::{info, warn};

pub const DEFAULT_QUALITY: &str = "1080p";

/// Streams videos through a primary CDN, failing over to a backup.
///
/// The service never looks inside a CDN; it only uses the `CdnProvider`
/// operations, so any pair of providers can be swapped in.
pub struct VideoStreamingService {
    primary_cdn: CdnProviderBox,
    backup_cdn: CdnProviderBox,
    analytics: VideoAnalyticsBox,
}

impl VideoStreamingService {
    pub fn new(
        primary_cdn: CdnProviderBox,
        backup_cdn: CdnProviderBox,
        analytics: VideoAnalyticsBox,
    ) -> Self {
        Self {
            primary_cdn,
            backup_cdn,
            analytics,
        }
    }

    /// Tries the primary CDN, then the backup. A CDN is skipped when it does
    /// not serve `user_location` or when any of its calls fail.
    pub fn stream_video(
        &self,
        user_id: &str,
        video_id: &str,
        user_location: &str,
        preferred_quality: &str,
    ) -> Result<StreamSession, DispatchError> {
        let candidates = [(&self.primary_cdn, false), (&self.backup_cdn, true)];

        for (cdn, using_backup) in candidates {
            if !cdn.is_available_in_region(user_location) {
                info!(cdn = cdn.name(), region = user_location, "CDN not available in region");
                continue;
            }
            match Self::open_stream(cdn.as_ref(), video_id, user_location, preferred_quality) {
                Ok((stream_url, quality)) => {
                    self.analytics.track_stream_start(user_id, video_id, &quality);
                    return Ok(StreamSession {
                        stream_url,
                        quality,
                        cdn_provider: cdn.name().to_string(),
                        using_backup,
                    });
                }
                Err(e) => warn!(cdn = cdn.name(), error = %e, "CDN failed"),
            }
        }

        Err(DispatchError::Unavailable {
            context: format!("region {user_location}"),
        })
    }

    /// Picks the preferred quality when the CDN offers it, else the CDN's
    /// best (last listed) offering.
    fn open_stream(
        cdn: &dyn CdnProvider,
        video_id: &str,
        user_location: &str,
        preferred_quality: &str,
    ) -> Result<(String, String), ProviderError> {
        let qualities = cdn.available_qualities(video_id);
        let quality = if qualities.iter().any(|q| q == preferred_quality) {
            preferred_quality.to_string()
        } else {
            qualities
                .last()
                .cloned()
                .ok_or_else(|| ProviderError::NoOffering {
                    provider: cdn.name().to_string(),
                    video_id: video_id.to_string(),
                })?
        };
        let url = cdn.stream_url(video_id, &quality, user_location)?;
        Ok((url, quality))
    }

    pub fn report_buffering(&self, user_id: &str, video_id: &str, buffer_time_secs: f64) {
        self.analytics.track_buffering_event(user_id, video_id, buffer_time_secs);
    }

    /// Recommends the cheaper CDN for `estimated_gb` of traffic. Ties go to
    /// the primary.
    pub fn cost_optimized_streaming(
        &self,
        video_id: &str,
        estimated_gb: Decimal,
    ) -> CostComparison {
        let primary = ProviderCost {
            provider: self.primary_cdn.name().to_string(),
            cost: self.primary_cdn.bandwidth_cost(estimated_gb),
        };
        let backup = ProviderCost {
            provider: self.backup_cdn.name().to_string(),
            cost: self.backup_cdn.bandwidth_cost(estimated_gb),
        };
        let cheaper = if primary.cost <= backup.cost {
            &primary
        } else {
            &backup
        };
        info!(video_id, recommended = %cheaper.provider, "cost comparison");

        CostComparison {
            recommended_cdn: cheaper.provider.clone(),
            cost: cheaper.cost,
            savings: primary.cost.abs_diff(backup.cost),
            primary,
            backup,
        }
    }
}
