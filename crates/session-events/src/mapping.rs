//! Translation tables from host values to wire enums.
//!
//! Every function here is total: values that cannot be classified map to
//! the schema's sentinel member instead of failing.

use crate::logger::Logger;
use crate::model::{DevEnvironment, NetworkType};
use crate::proto::network_connection_info;
use crate::proto::{LogEnvironment, OsName};

pub fn log_environment(environment: DevEnvironment) -> LogEnvironment {
	match environment {
		DevEnvironment::Prod => LogEnvironment::LogEnvironmentProd,
		DevEnvironment::Staging => LogEnvironment::LogEnvironmentStaging,
		DevEnvironment::Autopush => LogEnvironment::LogEnvironmentAutopush,
	}
}

/// No connection and unrecognized connections both report `Dummy`
pub fn network_type(network_type: NetworkType) -> network_connection_info::NetworkType {
	match network_type {
		NetworkType::Wifi => network_connection_info::NetworkType::Wifi,
		NetworkType::Mobile => network_connection_info::NetworkType::Mobile,
		NetworkType::None | NetworkType::Unknown => network_connection_info::NetworkType::Dummy,
	}
}

/// Case-insensitive; unrecognized names are logged as a warning
pub fn os_name(os_name: &str, logger: &dyn Logger) -> OsName {
	match os_name.to_lowercase().as_str() {
		"macos" => OsName::Macos,
		"maccatalyst" => OsName::Maccatalyst,
		"ios_on_mac" => OsName::IosOnMac,
		"ios" => OsName::Ios,
		"tvos" => OsName::Tvos,
		"watchos" => OsName::Watchos,
		"ipados" => OsName::Ipados,
		_ => {
			logger.log_warning(&format!("Found unknown OSName: \"{}\" while converting.", os_name));
			OsName::UnknownOsname
		}
	}
}
