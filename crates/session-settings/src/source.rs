use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Result, SettingsError};

/// Key/value lookup backing a settings layer.
///
/// Returns the raw value; typing and parsing belong to the reader.
pub trait SettingsSource: Send + Sync {
	fn value_for(&self, key: &str) -> Option<Value>;
}

impl SettingsSource for Map<String, Value> {
	fn value_for(&self, key: &str) -> Option<Value> {
		self.get(key).cloned()
	}
}

/// The app's bundled configuration dictionary, loaded from a JSON object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BundleConfig {
	values: Map<String, Value>,
}

impl BundleConfig {
	pub fn new(values: Map<String, Value>) -> Self {
		Self { values }
	}

	pub fn from_json_str(content: &str) -> Result<Self> {
		match serde_json::from_str::<Value>(content)? {
			Value::Object(values) => Ok(Self { values }),
			other => Err(SettingsError::NotAnObject(json_kind(&other).to_string())),
		}
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		debug!(?path, "loading bundled settings");
		let content = std::fs::read_to_string(path)?;
		Self::from_json_str(&content)
	}

	/// Loads `path` if it exists; a missing file is an empty bundle
	pub fn from_optional_path(path: &Path) -> Result<Self> {
		if path.exists() {
			Self::from_path(path)
		} else {
			debug!(?path, "bundled settings not found, using empty bundle");
			Ok(Self::default())
		}
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

impl SettingsSource for BundleConfig {
	fn value_for(&self, key: &str) -> Option<Value> {
		self.values.value_for(key)
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
