use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of the session being reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
	pub session_id: String,
	/// Present only when a prior session existed in this install
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub previous_session_id: Option<String>,
}

impl SessionInfo {
	pub fn new(session_id: impl Into<String>) -> Self {
		Self {
			session_id: session_id.into(),
			previous_session_id: None,
		}
	}

	pub fn with_previous(mut self, previous_session_id: impl Into<String>) -> Self {
		self.previous_session_id = Some(previous_session_id.into());
		self
	}
}

/// Backend environment the SDK logs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DevEnvironment {
	#[default]
	Prod,
	Staging,
	Autopush,
}

impl fmt::Display for DevEnvironment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			DevEnvironment::Prod => "prod",
			DevEnvironment::Staging => "staging",
			DevEnvironment::Autopush => "autopush",
		};
		write!(f, "{}", label)
	}
}

impl std::str::FromStr for DevEnvironment {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"prod" => Ok(DevEnvironment::Prod),
			"staging" => Ok(DevEnvironment::Staging),
			"autopush" => Ok(DevEnvironment::Autopush),
			_ => Err(format!("Unknown environment: {}", s)),
		}
	}
}

/// Connectivity class reported by the host platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
	Wifi,
	Mobile,
	#[default]
	None,
	/// A value the host reported that this SDK does not know about
	Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInfo {
	pub network_type: NetworkType,
	/// Platform radio access technology token, empty when not on cellular
	#[serde(default)]
	pub mobile_subtype: String,
}

impl NetworkInfo {
	pub fn new(network_type: NetworkType, mobile_subtype: impl Into<String>) -> Self {
		Self {
			network_type,
			mobile_subtype: mobile_subtype.into(),
		}
	}
}

/// Application and device metadata, already collected by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationInfo {
	pub app_id: String,
	pub sdk_version: String,
	#[serde(default)]
	pub environment: DevEnvironment,
	pub device_model: String,
	pub app_display_version: String,
	pub os_name: String,
	#[serde(default)]
	pub mcc_mnc: String,
	#[serde(default)]
	pub network_info: NetworkInfo,
}
