/// Errors raised while loading a bundled configuration file.
///
/// Reading individual keys never fails; see [`crate::SettingsSource`].
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	/// The file could not be read
	#[error("Failed to read settings file: {0}")]
	Io(#[from] std::io::Error),

	/// The file is not valid JSON
	#[error("Failed to parse settings JSON: {0}")]
	Json(#[from] serde_json::Error),

	/// The top-level JSON value is not a key/value object
	#[error("Settings file must contain a JSON object, found {0}")]
	NotAnObject(String),
}

/// Result type for settings operations
pub type Result<T> = std::result::Result<T, SettingsError>;
