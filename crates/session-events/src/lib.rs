//! Session Events Crate
//!
//! Builds the "session start" telemetry event and encodes it to the
//! protobuf wire schema used by the sessions ingestion backend.
//!
//! # Architecture
//!
//! - [`EventBuilder`] turns [`SessionInfo`] and [`ApplicationInfo`] into a
//!   [`SessionEvent`] record. Time, radio classification and logging are
//!   injected capabilities so construction stays deterministic under test.
//! - [`WireCodec`] encodes a record to bytes and decodes bytes back. Its
//!   total `encode`/`decode` never fail: errors are logged and turned into
//!   an empty buffer or a partially populated record.
//!
//! # Example
//!
//! ```rust
//! use session_events::{ApplicationInfo, DevEnvironment, EventBuilder, FixedTime, NetworkInfo, NetworkType, SessionInfo, WireCodec};
//!
//! let session = SessionInfo::new("S1");
//! let app = ApplicationInfo {
//! 	app_id: "app1".into(),
//! 	sdk_version: "1.2.3".into(),
//! 	environment: DevEnvironment::Prod,
//! 	device_model: "iPhone14".into(),
//! 	app_display_version: "2.0".into(),
//! 	os_name: "ios".into(),
//! 	mcc_mnc: "310260".into(),
//! 	network_info: NetworkInfo::new(NetworkType::Wifi, ""),
//! };
//!
//! let mut event = EventBuilder::new().with_time_provider(FixedTime(1_000_000)).build(&session, &app);
//! event.set_sampling_rate(1.0);
//!
//! let codec = WireCodec::new();
//! let bytes = codec.encode(&event);
//! assert_eq!(codec.decode(&bytes), event);
//! ```

pub mod builder;
pub mod codec;
pub mod error;
pub mod logger;
pub mod mapping;
pub mod model;
pub mod proto;
pub mod radio;
pub mod time;

pub use builder::EventBuilder;
pub use codec::WireCodec;
pub use error::{CodecError, Result};
pub use logger::{LogLevel, Logger, MemoryLogger, TracingLogger};
pub use model::{ApplicationInfo, DevEnvironment, NetworkInfo, NetworkType, SessionInfo};
pub use proto::SessionEvent;
pub use radio::{CellularRadio, NoCellularRadio, RadioClassifier};
pub use time::{FixedTime, TimeProvider, WallClock};
