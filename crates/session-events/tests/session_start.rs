#[cfg(test)]
mod tests {
	use session_events::proto::network_connection_info::{MobileSubtype, NetworkType as WireNetworkType};
	use session_events::proto::{EventType, LogEnvironment, OsName};
	use session_events::radio::tokens;
	use session_events::*;
	use std::sync::Arc;

	// ============================================================================
	// HELPERS
	// ============================================================================

	fn scenario_app() -> ApplicationInfo {
		ApplicationInfo {
			app_id: "app1".to_string(),
			sdk_version: "1.2.3".to_string(),
			environment: DevEnvironment::Prod,
			device_model: "iPhone14".to_string(),
			app_display_version: "2.0".to_string(),
			os_name: "ios".to_string(),
			mcc_mnc: "310260".to_string(),
			network_info: NetworkInfo::new(NetworkType::Wifi, ""),
		}
	}

	fn builder_at(timestamp_us: u64) -> EventBuilder {
		EventBuilder::new().with_time_provider(FixedTime(timestamp_us))
	}

	// ============================================================================
	// CONCRETE SCENARIO
	// ============================================================================

	#[test]
	fn test_wifi_ios_session_survives_the_wire() {
		let event = builder_at(1_000_000).build(&SessionInfo::new("S1"), &scenario_app());
		let codec = WireCodec::new();

		let decoded = codec.decode(&codec.encode(&event));

		assert_eq!(decoded.event_type(), EventType::SessionStart);
		let data = decoded.session_data.as_ref().unwrap();
		assert_eq!(data.session_id, "S1");
		assert_eq!(data.previous_session_id, None);
		assert_eq!(data.event_timestamp_us, 1_000_000);
		assert_eq!(decoded.installation_id(), None);
		assert_eq!(decoded.sampling_rate(), 0.0);

		let app = decoded.application_info.as_ref().unwrap();
		assert_eq!(app.log_environment(), LogEnvironment::LogEnvironmentProd);

		let apple = decoded.apple_app_info().unwrap();
		assert_eq!(apple.os_name(), OsName::Ios);
		let network = apple.network_connection_info.as_ref().unwrap();
		assert_eq!(network.network_type(), WireNetworkType::Wifi);
		assert_eq!(network.mobile_subtype(), MobileSubtype::UnknownMobileSubtype);
	}

	#[test]
	fn test_scenario_wire_bytes_after_late_bound_fields() {
		let mut event = builder_at(1_000_000).build(&SessionInfo::new("S1"), &scenario_app());
		event.set_installation_id("abc");
		event.set_sampling_rate(1.0);

		let session_data: &[u8] = &[
			0x12, 0x18, // session_data, 24 bytes
			0x0a, 0x02, b'S', b'1', // session_id
			0x1a, 0x03, b'a', b'b', b'c', // firebase_installation_id
			0x20, 0xc0, 0x84, 0x3d, // event_timestamp_us = 1_000_000
			0x32, 0x09, // data_collection_status
			0x19, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xf0, 0x3f, // session_sampling_rate = 1.0
		];
		let application_info: &[u8] = &[
			0x1a, 0x2e, // application_info, 46 bytes
			0x0a, 0x04, b'a', b'p', b'p', b'1', // app_id
			0x12, 0x08, b'i', b'P', b'h', b'o', b'n', b'e', b'1', b'4', // device_model
			0x32, 0x13, // apple_app_info, 19 bytes
			0x0a, 0x03, b'2', b'.', b'0', // bundle_short_version
			0x1a, 0x02, 0x08, 0x01, // network_connection_info { network_type: WIFI }
			0x20, 0x04, // os_name = IOS
			0x2a, 0x06, b'3', b'1', b'0', b'2', b'6', b'0', // mcc_mnc
			0x3a, 0x05, b'1', b'.', b'2', b'.', b'3', // session_sdk_version
			0x40, 0x03, // log_environment = PROD
		];
		let expected = [&[0x08, 0x01][..], session_data, application_info].concat();

		assert_eq!(WireCodec::new().encode(&event), expected);
		assert_eq!(WireCodec::new().decode(&expected), event);
	}

	// ============================================================================
	// ROUND TRIP
	// ============================================================================

	#[test]
	fn test_round_trip_across_inputs() {
		let codec = WireCodec::new();
		let sessions = [SessionInfo::new("S1"), SessionInfo::new("S2").with_previous("S1"), SessionInfo::new("S3").with_previous("")];
		let environments = [DevEnvironment::Prod, DevEnvironment::Staging, DevEnvironment::Autopush];
		let networks = [
			NetworkInfo::new(NetworkType::Wifi, ""),
			NetworkInfo::new(NetworkType::Mobile, tokens::LTE),
			NetworkInfo::new(NetworkType::Mobile, tokens::NR_NSA),
			NetworkInfo::new(NetworkType::None, ""),
			NetworkInfo::new(NetworkType::Unknown, "garbage"),
		];
		let builder = builder_at(u64::MAX).with_radio(CellularRadio::default());

		for session in &sessions {
			for environment in environments {
				for network in &networks {
					let app = ApplicationInfo {
						environment,
						network_info: network.clone(),
						..scenario_app()
					};
					let event = builder.build(session, &app);
					assert_eq!(codec.decode(&codec.encode(&event)), event);
				}
			}
		}
	}

	#[test]
	fn test_round_trip_after_late_bound_fields() {
		let codec = WireCodec::new();
		let mut event = builder_at(42).build(&SessionInfo::new("S1"), &scenario_app());
		event.set_installation_id("abc");
		event.set_sampling_rate(0.125);

		let decoded = codec.round_trip(&event);

		assert_eq!(decoded, event);
		assert_eq!(decoded.installation_id(), Some("abc"));
		assert_eq!(decoded.sampling_rate(), 0.125);
	}

	#[test]
	fn test_unicode_strings_round_trip() {
		let codec = WireCodec::new();
		let app = ApplicationInfo {
			device_model: "iPhone15,3 ✨".to_string(),
			app_display_version: "2.0 (β)".to_string(),
			..scenario_app()
		};
		let event = builder_at(7).build(&SessionInfo::new("séance-1"), &app);

		assert_eq!(codec.decode(&codec.encode(&event)), event);
	}

	// ============================================================================
	// DEGRADED PATHS
	// ============================================================================

	#[test]
	fn test_unknown_os_name_is_recorded_not_raised() {
		let logger = Arc::new(MemoryLogger::new());
		let app = ApplicationInfo {
			os_name: "bogus".to_string(),
			..scenario_app()
		};

		let event = builder_at(1).with_logger(logger.clone()).build(&SessionInfo::new("S1"), &app);

		assert_eq!(event.apple_app_info().unwrap().os_name(), OsName::UnknownOsname);
		assert_eq!(logger.messages(LogLevel::Warning).len(), 1);
	}

	#[test]
	fn test_encode_failure_yields_nothing_to_send() {
		let logger = Arc::new(MemoryLogger::new());
		let codec = WireCodec::new().with_logger(logger.clone()).with_max_encoded_len(8);
		let event = builder_at(1).build(&SessionInfo::new("S1"), &scenario_app());

		assert!(codec.encode(&event).is_empty());
		assert!(matches!(codec.try_encode(&event), Err(CodecError::Encode(_))));
		assert!(!logger.messages(LogLevel::Error).is_empty());
	}

	#[test]
	fn test_one_byte_of_valid_input_decodes_to_default() {
		let logger = Arc::new(MemoryLogger::new());
		let codec = WireCodec::new().with_logger(logger.clone());
		let bytes = WireCodec::new().encode(&builder_at(1).build(&SessionInfo::new("S1"), &scenario_app()));

		let decoded = codec.decode(&bytes[..1]);

		assert_eq!(decoded, SessionEvent::default());
		let diagnostics = logger.messages(LogLevel::Info);
		assert_eq!(diagnostics.len(), 1);
		assert!(!diagnostics[0].is_empty());
	}
}
