use prost::Message;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum LogEnvironment {
	LogEnvironmentUnknown = 0,
	LogEnvironmentAutopush = 1,
	LogEnvironmentStaging = 2,
	LogEnvironmentProd = 3,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum OsName {
	UnknownOsname = 0,
	Macos = 1,
	Maccatalyst = 2,
	IosOnMac = 3,
	Ios = 4,
	Tvos = 5,
	Watchos = 6,
	Ipados = 7,
	Unspecified = 8,
}

#[derive(Clone, PartialEq, Message)]
pub struct ApplicationInfoMessage {
	#[prost(string, tag = "1")]
	pub app_id: String,

	#[prost(string, tag = "2")]
	pub device_model: String,

	#[prost(string, tag = "3")]
	pub development_platform_name: String,

	#[prost(string, tag = "4")]
	pub development_platform_version: String,

	#[prost(oneof = "application_info_message::PlatformInfo", tags = "5, 6")]
	pub platform_info: Option<application_info_message::PlatformInfo>,

	#[prost(string, tag = "7")]
	pub session_sdk_version: String,

	#[prost(enumeration = "LogEnvironment", tag = "8")]
	pub log_environment: i32,
}

pub mod application_info_message {
	use super::*;

	#[derive(Clone, PartialEq, prost::Oneof)]
	pub enum PlatformInfo {
		#[prost(message, tag = "5")]
		AndroidAppInfo(AndroidApplicationInfoMessage),
		#[prost(message, tag = "6")]
		AppleAppInfo(AppleApplicationInfoMessage),
	}
}

#[derive(Clone, PartialEq, Message)]
pub struct AndroidApplicationInfoMessage {
	#[prost(string, tag = "1")]
	pub package_name: String,

	#[prost(string, tag = "3")]
	pub version_name: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct AppleApplicationInfoMessage {
	/// CFBundleShortVersionString of the host app
	#[prost(string, tag = "1")]
	pub bundle_short_version: String,

	#[prost(message, optional, tag = "3")]
	pub network_connection_info: Option<NetworkConnectionInfoMessage>,

	#[prost(enumeration = "OsName", tag = "4")]
	pub os_name: i32,

	#[prost(string, tag = "5")]
	pub mcc_mnc: String,
}

#[derive(Clone, PartialEq, Message)]
pub struct NetworkConnectionInfoMessage {
	#[prost(enumeration = "network_connection_info::NetworkType", tag = "1")]
	pub network_type: i32,

	#[prost(enumeration = "network_connection_info::MobileSubtype", tag = "2")]
	pub mobile_subtype: i32,
}

/// Enums nested under `NetworkConnectionInfo` in the schema.
///
/// Numbering follows the Android connectivity constants the backend
/// shares across platforms, which is why `Mobile` is zero.
pub mod network_connection_info {
	#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
	#[repr(i32)]
	pub enum NetworkType {
		Mobile = 0,
		Wifi = 1,
		MobileMms = 2,
		MobileSupl = 3,
		MobileDun = 4,
		MobileHipri = 5,
		Wimax = 6,
		Bluetooth = 7,
		Dummy = 8,
		Ethernet = 9,
		MobileFota = 10,
		MobileIms = 11,
		MobileCbs = 12,
		WifiP2p = 13,
		MobileIa = 14,
		MobileEmergency = 15,
		Proxy = 16,
		Vpn = 17,
	}

	#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
	#[repr(i32)]
	pub enum MobileSubtype {
		UnknownMobileSubtype = 0,
		Gprs = 1,
		Edge = 2,
		Umts = 3,
		Cdma = 4,
		Evdo0 = 5,
		EvdoA = 6,
		Rtt = 7,
		Hsdpa = 8,
		Hsupa = 9,
		Hspa = 10,
		Iden = 11,
		EvdoB = 12,
		Lte = 13,
		Ehrpd = 14,
		Hspap = 15,
		Gsm = 16,
		TdScdma = 17,
		Iwlan = 18,
		LteCa = 19,
		Nr = 20,
		Combined = 100,
	}
}
