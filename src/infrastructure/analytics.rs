use crate::domain::ports::{Provider, VideoAnalytics};
use tracing::info;

pub struct GoogleAnalytics {
    name: String,
    tracking_id: String,
}

impl GoogleAnalytics {
    pub fn new(tracking_id: impl Into<String>) -> Self {
        Self {
            name: "GoogleAnalytics".to_string(),
            tracking_id: tracking_id.into(),
        }
    }
}

impl Provider for GoogleAnalytics {
    fn name(&self) -> &str {
        &self.name
    }
}

impl VideoAnalytics for GoogleAnalytics {
    fn track_stream_start(&self, user_id: &str, video_id: &str, quality: &str) {
        info!(
            tracking_id = %self.tracking_id,
            user_id, video_id, quality, "GA: Stream started"
        );
    }

    fn track_buffering_event(&self, user_id: &str, video_id: &str, buffer_time_secs: f64) {
        info!(
            tracking_id = %self.tracking_id,
            user_id, video_id, buffer_time_secs, "GA: Buffering"
        );
    }
}

pub struct MixpanelAnalytics {
    name: String,
    project_token: String,
}

impl MixpanelAnalytics {
    pub fn new(project_token: impl Into<String>) -> Self {
        Self {
            name: "MixpanelAnalytics".to_string(),
            project_token: project_token.into(),
        }
    }
}

impl Provider for MixpanelAnalytics {
    fn name(&self) -> &str {
        &self.name
    }
}

impl VideoAnalytics for MixpanelAnalytics {
    fn track_stream_start(&self, user_id: &str, video_id: &str, quality: &str) {
        info!(
            project = %self.project_token,
            "Mixpanel: Video Play - {user_id} watched {video_id} in {quality}"
        );
    }

    fn track_buffering_event(&self, user_id: &str, video_id: &str, buffer_time_secs: f64) {
        info!(
            project = %self.project_token,
            "Mixpanel: Buffer Event - {user_id} buffered {buffer_time_secs}s on {video_id}"
        );
    }
}
