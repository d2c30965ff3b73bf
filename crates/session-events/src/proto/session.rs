use prost::Message;

/// Collection state of a sibling SDK at the time the session started
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum DataCollectionState {
	CollectionUnknown = 0,
	CollectionSdkNotInstalled = 1,
	CollectionEnabled = 2,
	CollectionDisabled = 3,
	CollectionDisabledRemote = 4,
	CollectionSampled = 5,
}

#[derive(Clone, PartialEq, Message)]
pub struct DataCollectionStatusMessage {
	#[prost(enumeration = "DataCollectionState", tag = "1")]
	pub performance: i32,

	#[prost(enumeration = "DataCollectionState", tag = "2")]
	pub crashlytics: i32,

	#[prost(double, tag = "3")]
	pub session_sampling_rate: f64,
}

#[derive(Clone, PartialEq, Message)]
pub struct SessionDataMessage {
	#[prost(string, tag = "1")]
	pub session_id: String,

	#[prost(string, optional, tag = "2")]
	pub previous_session_id: Option<String>,

	#[prost(string, optional, tag = "3")]
	pub firebase_installation_id: Option<String>,

	/// Microseconds since the Unix epoch, captured when the event was built
	#[prost(uint64, tag = "4")]
	pub event_timestamp_us: u64,

	#[prost(message, optional, tag = "6")]
	pub data_collection_status: Option<DataCollectionStatusMessage>,
}
