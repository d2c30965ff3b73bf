use std::time::Duration;

use crate::defaults::{SdkDefaultSettings, DEFAULT_SAMPLING_RATE, DEFAULT_SESSIONS_ENABLED, DEFAULT_SESSION_TIMEOUT};
use crate::provider::{SessionsSettings, SettingsLayer, SettingsProvider};

/// Ordered stack of settings layers. Each value comes from the first layer
/// that sets it; SDK defaults sit underneath every stack.
pub struct LayeredSettings {
	layers: Vec<Box<dyn SettingsLayer>>,
	defaults: SdkDefaultSettings,
}

impl Default for LayeredSettings {
	fn default() -> Self {
		Self {
			layers: Vec::new(),
			defaults: SdkDefaultSettings,
		}
	}
}

impl LayeredSettings {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a layer below the ones already present
	pub fn with_layer(mut self, layer: impl SettingsLayer + 'static) -> Self {
		self.layers.push(Box::new(layer));
		self
	}

	pub fn layer_count(&self) -> usize {
		self.layers.len()
	}

	pub fn resolved_sessions_enabled(&self) -> bool {
		self.sessions_enabled().unwrap_or(DEFAULT_SESSIONS_ENABLED)
	}

	pub fn resolved_session_timeout(&self) -> Duration {
		self.session_timeout().unwrap_or(DEFAULT_SESSION_TIMEOUT)
	}

	pub fn resolved_sampling_rate(&self) -> f64 {
		self.sampling_rate().unwrap_or(DEFAULT_SAMPLING_RATE)
	}

	fn first<T>(&self, get: impl Fn(&dyn SettingsLayer) -> Option<T>) -> Option<T> {
		self.layers.iter().find_map(|layer| get(layer.as_ref())).or_else(|| get(&self.defaults))
	}
}

impl SessionsSettings for LayeredSettings {
	fn sessions_enabled(&self) -> Option<bool> {
		self.first(|layer| layer.sessions_enabled())
	}

	fn session_timeout(&self) -> Option<Duration> {
		self.first(|layer| layer.session_timeout())
	}

	fn sampling_rate(&self) -> Option<f64> {
		self.first(|layer| layer.sampling_rate())
	}
}

impl SettingsProvider for LayeredSettings {
	fn update_settings(&self) {
		for layer in &self.layers {
			layer.update_settings();
		}
	}

	fn is_settings_stale(&self) -> bool {
		self.layers.iter().any(|layer| layer.is_settings_stale())
	}
}
