use session_events::radio::tokens;
use session_events::{ApplicationInfo, CellularRadio, DevEnvironment, EventBuilder, NetworkInfo, NetworkType, SessionInfo, WireCodec};
use tracing::Level;

fn main() {
	tracing_subscriber::fmt().with_max_level(Level::INFO).with_target(false).init();

	// 1. Host-collected state
	let session = SessionInfo::new("9b3f0c2e4d5a4f7e8a1b2c3d4e5f6a7b").with_previous("1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d");
	let app = ApplicationInfo {
		app_id: "1:123456789:ios:abcdef".to_string(),
		sdk_version: "10.3.0".to_string(),
		environment: DevEnvironment::Prod,
		device_model: "iPhone14,2".to_string(),
		app_display_version: "2.0".to_string(),
		os_name: "iOS".to_string(),
		mcc_mnc: "310260".to_string(),
		network_info: NetworkInfo::new(NetworkType::Mobile, tokens::LTE),
	};

	// 2. Build, then fill in the late-bound fields
	let mut event = EventBuilder::new().with_radio(CellularRadio::default()).build(&session, &app);
	event.set_installation_id("fid-example");
	event.set_sampling_rate(1.0);

	// 3. Encode for upload
	let codec = WireCodec::new();
	let bytes = codec.encode(&event);
	if bytes.is_empty() {
		tracing::error!("Nothing to send");
		return;
	}
	tracing::info!(len = bytes.len(), "Encoded session start event");

	// 4. Verify the bytes read back to the same record
	let decoded = codec.decode(&bytes);
	tracing::info!(matches = decoded == event, "Round trip");

	// 5. A truncated upload is logged and decodes to defaults
	let partial = codec.decode(&bytes[..1]);
	tracing::info!(event_type = ?partial.event_type(), "Decoded truncated bytes");
}
