use std::time::Duration;

use crate::provider::{SessionsSettings, SettingsProvider};

pub const DEFAULT_SESSIONS_ENABLED: bool = true;
pub const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(30 * 60);
pub const DEFAULT_SAMPLING_RATE: f64 = 1.0;

/// Values compiled into the SDK; the last layer consulted
#[derive(Debug, Clone, Copy, Default)]
pub struct SdkDefaultSettings;

impl SessionsSettings for SdkDefaultSettings {
	fn sessions_enabled(&self) -> Option<bool> {
		Some(DEFAULT_SESSIONS_ENABLED)
	}

	fn session_timeout(&self) -> Option<Duration> {
		Some(DEFAULT_SESSION_TIMEOUT)
	}

	fn sampling_rate(&self) -> Option<f64> {
		Some(DEFAULT_SAMPLING_RATE)
	}
}

impl SettingsProvider for SdkDefaultSettings {
	fn update_settings(&self) {}

	fn is_settings_stale(&self) -> bool {
		false
	}
}
