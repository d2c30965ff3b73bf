use crate::proto::network_connection_info::MobileSubtype;

/// Classifies a platform radio access technology token into a cellular
/// generation. Implementations are chosen per target platform.
pub trait RadioClassifier: Send + Sync {
	fn classify(&self, token: &str) -> MobileSubtype;
}

/// Platforms that expose no cellular radio information
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCellularRadio;

impl RadioClassifier for NoCellularRadio {
	fn classify(&self, _token: &str) -> MobileSubtype {
		MobileSubtype::UnknownMobileSubtype
	}
}

/// CoreTelephony radio access technology tokens
pub mod tokens {
	pub const GPRS: &str = "CTRadioAccessTechnologyGPRS";
	pub const EDGE: &str = "CTRadioAccessTechnologyEdge";
	pub const WCDMA: &str = "CTRadioAccessTechnologyWCDMA";
	pub const HSDPA: &str = "CTRadioAccessTechnologyHSDPA";
	pub const HSUPA: &str = "CTRadioAccessTechnologyHSUPA";
	pub const CDMA_1X: &str = "CTRadioAccessTechnologyCDMA1x";
	pub const CDMA_EVDO_REV0: &str = "CTRadioAccessTechnologyCDMAEVDORev0";
	pub const CDMA_EVDO_REVA: &str = "CTRadioAccessTechnologyCDMAEVDORevA";
	pub const CDMA_EVDO_REVB: &str = "CTRadioAccessTechnologyCDMAEVDORevB";
	pub const EHRPD: &str = "CTRadioAccessTechnologyeHRPD";
	pub const LTE: &str = "CTRadioAccessTechnologyLTE";
	pub const NR_NSA: &str = "CTRadioAccessTechnologyNRNSA";
	pub const NR: &str = "CTRadioAccessTechnologyNR";
}

/// Devices with a cellular modem.
///
/// `nr_supported` reflects whether the OS can report 5G (NR and NR-NSA)
/// tokens; without it those tokens are not trusted and classify as unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellularRadio {
	pub nr_supported: bool,
}

impl CellularRadio {
	pub fn new(nr_supported: bool) -> Self {
		Self { nr_supported }
	}
}

impl Default for CellularRadio {
	fn default() -> Self {
		Self { nr_supported: true }
	}
}

impl RadioClassifier for CellularRadio {
	fn classify(&self, token: &str) -> MobileSubtype {
		match token {
			tokens::GPRS => MobileSubtype::Gprs,
			tokens::EDGE => MobileSubtype::Edge,
			tokens::WCDMA | tokens::CDMA_1X => MobileSubtype::Cdma,
			tokens::HSDPA => MobileSubtype::Hsdpa,
			tokens::HSUPA => MobileSubtype::Hsupa,
			tokens::CDMA_EVDO_REV0 => MobileSubtype::Evdo0,
			tokens::CDMA_EVDO_REVA => MobileSubtype::EvdoA,
			tokens::CDMA_EVDO_REVB => MobileSubtype::EvdoB,
			tokens::EHRPD => MobileSubtype::Ehrpd,
			tokens::LTE => MobileSubtype::Lte,
			tokens::NR_NSA | tokens::NR if self.nr_supported => MobileSubtype::Nr,
			_ => MobileSubtype::UnknownMobileSubtype,
		}
	}
}
