use std::sync::Arc;

use crate::logger::{Logger, TracingLogger};
use crate::mapping;
use crate::model::{ApplicationInfo, SessionInfo};
use crate::proto::network_connection_info::MobileSubtype;
use crate::proto::{
	application_info_message, AppleApplicationInfoMessage, ApplicationInfoMessage, DataCollectionState, DataCollectionStatusMessage, NetworkConnectionInfoMessage, SessionDataMessage,
	SessionEvent,
};
use crate::radio::{NoCellularRadio, RadioClassifier};
use crate::time::{TimeProvider, WallClock};

/// Builds session start events from host-supplied session and app state.
///
/// Defaults: wall-clock time, no cellular radio, `tracing` diagnostics.
#[derive(Clone)]
pub struct EventBuilder {
	time: Arc<dyn TimeProvider>,
	radio: Arc<dyn RadioClassifier>,
	logger: Arc<dyn Logger>,
}

impl Default for EventBuilder {
	fn default() -> Self {
		Self {
			time: Arc::new(WallClock),
			radio: Arc::new(NoCellularRadio),
			logger: Arc::new(TracingLogger),
		}
	}
}

impl EventBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_time_provider(mut self, time: impl TimeProvider + 'static) -> Self {
		self.time = Arc::new(time);
		self
	}

	pub fn with_radio(mut self, radio: impl RadioClassifier + 'static) -> Self {
		self.radio = Arc::new(radio);
		self
	}

	pub fn with_logger<L: Logger + 'static>(mut self, logger: Arc<L>) -> Self {
		self.logger = logger;
		self
	}

	/// Builds a complete record except for the two late-bound fields: the
	/// installation id stays absent and the sampling rate stays at 0.0.
	/// The timestamp is read from the time source exactly once, here.
	pub fn build(&self, session: &SessionInfo, app: &ApplicationInfo) -> SessionEvent {
		let session_data = SessionDataMessage {
			session_id: session.session_id.clone(),
			previous_session_id: session.previous_session_id.clone(),
			firebase_installation_id: None,
			event_timestamp_us: self.time.timestamp_us(),
			data_collection_status: Some(DataCollectionStatusMessage {
				performance: DataCollectionState::CollectionUnknown as i32,
				crashlytics: DataCollectionState::CollectionUnknown as i32,
				session_sampling_rate: 0.0,
			}),
		};

		let apple_app_info = AppleApplicationInfoMessage {
			bundle_short_version: app.app_display_version.clone(),
			network_connection_info: Some(NetworkConnectionInfoMessage {
				network_type: mapping::network_type(app.network_info.network_type) as i32,
				mobile_subtype: self.mobile_subtype(&app.network_info.mobile_subtype) as i32,
			}),
			os_name: mapping::os_name(&app.os_name, self.logger.as_ref()) as i32,
			mcc_mnc: app.mcc_mnc.clone(),
		};

		let application_info = ApplicationInfoMessage {
			app_id: app.app_id.clone(),
			device_model: app.device_model.clone(),
			session_sdk_version: app.sdk_version.clone(),
			log_environment: mapping::log_environment(app.environment) as i32,
			platform_info: Some(application_info_message::PlatformInfo::AppleAppInfo(apple_app_info)),
			..Default::default()
		};

		SessionEvent {
			session_data: Some(session_data),
			application_info: Some(application_info),
			..SessionEvent::session_start()
		}
	}

	fn mobile_subtype(&self, token: &str) -> MobileSubtype {
		let subtype = self.radio.classify(token);
		if subtype == MobileSubtype::UnknownMobileSubtype && !token.is_empty() {
			self.logger.log_info(&format!("Unrecognized mobile subtype: \"{}\"", token));
		}
		subtype
	}
}
