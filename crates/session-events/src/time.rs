/// Source of the event timestamp, in microseconds since the Unix epoch
pub trait TimeProvider: Send + Sync {
	fn timestamp_us(&self) -> u64;
}

/// Current wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl TimeProvider for WallClock {
	fn timestamp_us(&self) -> u64 {
		// pre-epoch clocks clamp to 0
		u64::try_from(chrono::Utc::now().timestamp_micros()).unwrap_or(0)
	}
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTime(pub u64);

impl TimeProvider for FixedTime {
	fn timestamp_us(&self) -> u64 {
		self.0
	}
}
