use std::time::Duration;

/// Values a settings layer may know about. `None` means "not set here".
pub trait SessionsSettings: Send + Sync {
	fn sessions_enabled(&self) -> Option<bool>;

	/// How long the app may stay in the background before a new session starts
	fn session_timeout(&self) -> Option<Duration>;

	fn sampling_rate(&self) -> Option<f64>;
}

/// Refresh lifecycle of a settings layer
pub trait SettingsProvider: Send + Sync {
	fn update_settings(&self);

	fn is_settings_stale(&self) -> bool;
}

/// Anything that can sit in a [`crate::LayeredSettings`] stack
pub trait SettingsLayer: SessionsSettings + SettingsProvider {}

impl<T: SessionsSettings + SettingsProvider> SettingsLayer for T {}
