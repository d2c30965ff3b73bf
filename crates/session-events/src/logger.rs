use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Severity of a diagnostic emitted by the event pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
	Error,
	Warning,
	Info,
}

impl fmt::Display for LogLevel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			LogLevel::Error => write!(f, "error"),
			LogLevel::Warning => write!(f, "warning"),
			LogLevel::Info => write!(f, "info"),
		}
	}
}

/// Diagnostic sink injected into the builder and codec.
///
/// Nothing in the pipeline reports failures through return values on its
/// total paths, so this is the only channel a host has to observe them.
pub trait Logger: Send + Sync {
	fn log_error(&self, message: &str);

	fn log_warning(&self, message: &str);

	fn log_info(&self, message: &str);
}

/// Forwards diagnostics to `tracing` under the `sessions` target.
///
/// The library never installs a subscriber; hosts decide where these go.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
	fn log_error(&self, message: &str) {
		tracing::error!(target: "sessions", "{}", message);
	}

	fn log_warning(&self, message: &str) {
		tracing::warn!(target: "sessions", "{}", message);
	}

	fn log_info(&self, message: &str) {
		tracing::info!(target: "sessions", "{}", message);
	}
}

/// Keeps every diagnostic in memory so callers can inspect them later.
#[derive(Debug, Default)]
pub struct MemoryLogger {
	entries: Mutex<Vec<(LogLevel, String)>>,
}

impl MemoryLogger {
	pub fn new() -> Self {
		Self::default()
	}

	/// Snapshot of everything logged so far, oldest first
	pub fn entries(&self) -> Vec<(LogLevel, String)> {
		self.entries.lock().unwrap_or_else(PoisonError::into_inner).clone()
	}

	/// Messages logged at the given level
	pub fn messages(&self, level: LogLevel) -> Vec<String> {
		self.entries
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.iter()
			.filter(|(l, _)| *l == level)
			.map(|(_, m)| m.clone())
			.collect()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.lock().unwrap_or_else(PoisonError::into_inner).is_empty()
	}

	fn push(&self, level: LogLevel, message: &str) {
		self.entries.lock().unwrap_or_else(PoisonError::into_inner).push((level, message.to_string()));
	}
}

impl Logger for MemoryLogger {
	fn log_error(&self, message: &str) {
		self.push(LogLevel::Error, message);
	}

	fn log_warning(&self, message: &str) {
		self.push(LogLevel::Warning, message);
	}

	fn log_info(&self, message: &str) {
		self.push(LogLevel::Info, message);
	}
}
