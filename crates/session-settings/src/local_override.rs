use std::time::Duration;

use crate::provider::{SessionsSettings, SettingsProvider};
use crate::source::SettingsSource;

/// Bundle key holding a boolean. Must be JSON `true`/`false`; numbers such
/// as `0`/`1` read as unset.
pub const SESSIONS_ENABLED_KEY: &str = "FirebaseSessionsEnabled";
/// Bundle key holding a string-encoded number of seconds
pub const SESSIONS_TIMEOUT_KEY: &str = "FirebaseSessionsTimeout";
/// Bundle key holding a string-encoded rate. The spelling is what shipped
/// apps use in their bundles and must stay as is.
pub const SESSIONS_SAMPLING_RATE_KEY: &str = "FirebaseSessionsSampingRate";

/// Developer overrides read from the app's bundled configuration.
///
/// Values of the wrong type or that fail to parse read as unset.
#[derive(Debug, Clone, Default)]
pub struct LocalOverrideSettings<S> {
	source: S,
}

impl<S: SettingsSource> LocalOverrideSettings<S> {
	pub fn new(source: S) -> Self {
		Self { source }
	}

	pub fn source(&self) -> &S {
		&self.source
	}

	fn string_as_f64(&self, key: &str) -> Option<f64> {
		self.source.value_for(key)?.as_str()?.parse::<f64>().ok()
	}
}

impl<S: SettingsSource> SessionsSettings for LocalOverrideSettings<S> {
	fn sessions_enabled(&self) -> Option<bool> {
		self.source.value_for(SESSIONS_ENABLED_KEY)?.as_bool()
	}

	fn session_timeout(&self) -> Option<Duration> {
		Duration::try_from_secs_f64(self.string_as_f64(SESSIONS_TIMEOUT_KEY)?).ok()
	}

	fn sampling_rate(&self) -> Option<f64> {
		self.string_as_f64(SESSIONS_SAMPLING_RATE_KEY)
	}
}

/// Bundle values are fixed at build time: nothing to refresh, never stale
impl<S: SettingsSource> SettingsProvider for LocalOverrideSettings<S> {
	fn update_settings(&self) {}

	fn is_settings_stale(&self) -> bool {
		false
	}
}
