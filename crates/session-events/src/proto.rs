//! Protobuf wire schema for session events.
//!
//! Field tags are fixed by the ingestion backend and must never be renumbered.
//! Optional string fields are omitted from the wire when absent; nested
//! messages and the platform oneof are length-delimited.

use prost::Message;

mod application;
mod session;

pub use application::{
	application_info_message, network_connection_info, AndroidApplicationInfoMessage, AppleApplicationInfoMessage, ApplicationInfoMessage, LogEnvironment,
	NetworkConnectionInfoMessage, OsName,
};
pub use session::{DataCollectionState, DataCollectionStatusMessage, SessionDataMessage};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum EventType {
	EventTypeUnknown = 0,
	SessionStart = 1,
}

/// One session telemetry event, as sent on the wire
#[derive(Clone, PartialEq, Message)]
pub struct SessionEvent {
	#[prost(enumeration = "EventType", tag = "1")]
	pub event_type: i32,

	#[prost(message, optional, tag = "2")]
	pub session_data: Option<SessionDataMessage>,

	#[prost(message, optional, tag = "3")]
	pub application_info: Option<ApplicationInfoMessage>,
}

impl SessionEvent {
	/// Empty record tagged as a session start
	pub fn session_start() -> Self {
		Self {
			event_type: EventType::SessionStart as i32,
			session_data: None,
			application_info: None,
		}
	}

	/// Late-bound: the Firebase installation id of this app install
	pub fn set_installation_id(&mut self, installation_id: impl Into<String>) {
		self.session_data.get_or_insert_with(SessionDataMessage::default).firebase_installation_id = Some(installation_id.into());
	}

	/// Late-bound: the sampling rate the session was admitted under
	pub fn set_sampling_rate(&mut self, sampling_rate: f64) {
		self.session_data
			.get_or_insert_with(SessionDataMessage::default)
			.data_collection_status
			.get_or_insert_with(DataCollectionStatusMessage::default)
			.session_sampling_rate = sampling_rate;
	}

	pub fn installation_id(&self) -> Option<&str> {
		self.session_data.as_ref().and_then(|data| data.firebase_installation_id.as_deref())
	}

	/// Sampling rate, 0.0 until set
	pub fn sampling_rate(&self) -> f64 {
		self.collection_status().map_or(0.0, |status| status.session_sampling_rate)
	}

	pub fn collection_status(&self) -> Option<&DataCollectionStatusMessage> {
		self.session_data.as_ref().and_then(|data| data.data_collection_status.as_ref())
	}

	/// The Apple platform variant, if that is the populated one
	pub fn apple_app_info(&self) -> Option<&AppleApplicationInfoMessage> {
		match self.application_info.as_ref()?.platform_info.as_ref()? {
			application_info_message::PlatformInfo::AppleAppInfo(info) => Some(info),
			application_info_message::PlatformInfo::AndroidAppInfo(_) => None,
		}
	}
}
