use std::sync::Arc;

use prost::encoding::{decode_key, decode_varint, WireType};
use prost::Message;

use crate::error::{CodecError, Result};
use crate::logger::{Logger, TracingLogger};
use crate::proto::SessionEvent;

/// Encodes session events for transport and decodes them for verification.
///
/// `encode` and `decode` never fail: a failed event must not take the host
/// app down, so errors are logged and callers see an empty buffer or a
/// partially populated record. The `try_*` variants expose the error.
#[derive(Clone)]
pub struct WireCodec {
	logger: Arc<dyn Logger>,
	max_encoded_len: Option<usize>,
}

impl Default for WireCodec {
	fn default() -> Self {
		Self {
			logger: Arc::new(TracingLogger),
			max_encoded_len: None,
		}
	}
}

impl WireCodec {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_logger<L: Logger + 'static>(mut self, logger: Arc<L>) -> Self {
		self.logger = logger;
		self
	}

	/// Encode into a fixed-size buffer; records that do not fit fail to encode
	pub fn with_max_encoded_len(mut self, max_encoded_len: usize) -> Self {
		self.max_encoded_len = Some(max_encoded_len);
		self
	}

	pub fn try_encode(&self, event: &SessionEvent) -> Result<Vec<u8>> {
		let Some(limit) = self.max_encoded_len else {
			return Ok(event.encode_to_vec());
		};

		let capacity = limit.min(event.encoded_len());
		let mut storage = vec![0_u8; capacity];
		let mut buf = storage.as_mut_slice();
		event.encode(&mut buf)?;
		let written = capacity - buf.len();
		storage.truncate(written);
		Ok(storage)
	}

	/// Bytes ready for upload. Empty means encoding failed and nothing
	/// should be sent.
	pub fn encode(&self, event: &SessionEvent) -> Vec<u8> {
		match self.try_encode(event) {
			Ok(bytes) => bytes,
			Err(e) => {
				self.logger.log_error(&e.to_string());
				self.logger.log_error("Session event generated nil transportBytes. Returning empty data.");
				Vec::new()
			}
		}
	}

	/// Strict decode: any malformed input is an error and nothing is returned
	pub fn try_decode(&self, bytes: &[u8]) -> Result<SessionEvent> {
		SessionEvent::decode(bytes).map_err(CodecError::from)
	}

	/// Best-effort decode. Top-level fields read before a malformed region
	/// are kept; the field that fails and everything after it stay at their
	/// defaults. Empty input decodes silently to the default record.
	pub fn decode(&self, bytes: &[u8]) -> SessionEvent {
		let mut event = SessionEvent::default();
		let mut rest = bytes;
		while !rest.is_empty() {
			let span = field_span(rest);
			let chunk = span.map_or(rest, |len| &rest[..len]);

			// merge into a copy so a half-read nested message never leaks out
			let mut next = event.clone();
			if let Err(e) = next.merge(chunk) {
				self.logger.log_info(&format!("Failed to decode transportBytes: {}", e));
				break;
			}
			event = next;

			if span.is_none() {
				break;
			}
			rest = &rest[chunk.len()..];
		}
		event
	}

	/// Encodes then decodes `event`. Used to validate that encoding works;
	/// not meant for production paths.
	pub fn round_trip(&self, event: &SessionEvent) -> SessionEvent {
		self.decode(&self.encode(event))
	}
}

/// Byte length of the first field in `buf`, key included. `None` when the
/// field is truncated or is a group, which the caller leaves to prost.
fn field_span(buf: &[u8]) -> Option<usize> {
	let mut cursor = buf;
	let (_, wire_type) = decode_key(&mut cursor).ok()?;
	let payload = match wire_type {
		WireType::Varint => {
			decode_varint(&mut cursor).ok()?;
			0
		}
		WireType::SixtyFourBit => 8,
		WireType::LengthDelimited => usize::try_from(decode_varint(&mut cursor).ok()?).ok()?,
		WireType::ThirtyTwoBit => 4,
		WireType::StartGroup | WireType::EndGroup => return None,
	};
	let end = (buf.len() - cursor.len()).checked_add(payload)?;
	(end <= buf.len()).then_some(end)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::logger::{LogLevel, MemoryLogger};
	use crate::proto::{EventType, SessionDataMessage};

	fn sample_event() -> SessionEvent {
		let mut event = SessionEvent::session_start();
		event.session_data = Some(SessionDataMessage {
			session_id: "S1".to_string(),
			event_timestamp_us: 1_000_000,
			..Default::default()
		});
		event.set_installation_id("fid");
		event
	}

	#[test]
	fn test_encode_decode() {
		let codec = WireCodec::new();
		let event = sample_event();

		let bytes = codec.encode(&event);
		assert!(!bytes.is_empty());
		assert_eq!(codec.decode(&bytes), event);
		assert_eq!(codec.try_decode(&bytes).unwrap(), event);
		assert_eq!(codec.round_trip(&event), event);
	}

	#[test]
	fn test_bounded_encode_matches_unbounded_when_it_fits() {
		let event = sample_event();
		let unbounded = WireCodec::new().encode(&event);
		let bounded = WireCodec::new().with_max_encoded_len(1024).encode(&event);

		assert_eq!(bounded, unbounded);
	}

	#[test]
	fn test_exact_fit_encodes() {
		let event = sample_event();
		let len = event.encoded_len();

		assert_eq!(WireCodec::new().with_max_encoded_len(len).try_encode(&event).unwrap().len(), len);
		assert!(WireCodec::new().with_max_encoded_len(len - 1).try_encode(&event).is_err());
	}

	#[test]
	fn test_encode_failure_returns_empty_and_logs() {
		let logger = Arc::new(MemoryLogger::new());
		let codec = WireCodec::new().with_logger(logger.clone()).with_max_encoded_len(3);

		let bytes = codec.encode(&sample_event());

		assert!(bytes.is_empty());
		let errors = logger.messages(LogLevel::Error);
		assert_eq!(errors.len(), 2);
		assert!(errors[0].starts_with("Failed to encode session event"));
	}

	#[test]
	fn test_decode_of_truncated_input_is_default_and_logged() {
		let logger = Arc::new(MemoryLogger::new());
		let codec = WireCodec::new().with_logger(logger.clone());
		let bytes = WireCodec::new().encode(&sample_event());

		let decoded = codec.decode(&bytes[..1]);

		assert_eq!(decoded, SessionEvent::default());
		assert_eq!(decoded.event_type(), EventType::EventTypeUnknown);
		let infos = logger.messages(LogLevel::Info);
		assert_eq!(infos.len(), 1);
		assert!(infos[0].len() > "Failed to decode transportBytes: ".len());
	}

	#[test]
	fn test_decode_keeps_fields_before_corruption() {
		let logger = Arc::new(MemoryLogger::new());
		let codec = WireCodec::new().with_logger(logger.clone());

		let mut bytes = WireCodec::new().encode(&sample_event());
		// length-delimited field 3 claiming more bytes than remain
		bytes.extend_from_slice(&[0x1a, 0x7f]);

		let decoded = codec.decode(&bytes);

		assert_eq!(decoded.event_type(), EventType::SessionStart);
		assert_eq!(decoded.session_data.as_ref().map(|d| d.session_id.as_str()), Some("S1"));
		assert!(decoded.application_info.is_none());
		assert!(codec.try_decode(&bytes).is_err());
		assert!(!logger.is_empty());
	}

	#[test]
	fn test_corrupt_nested_field_is_rolled_back() {
		let logger = Arc::new(MemoryLogger::new());
		let codec = WireCodec::new().with_logger(logger.clone());

		// session_data framed correctly, but its only field claims 5 bytes of 1
		let bytes = [0x08, 0x01, 0x12, 0x03, 0x0a, 0x05, b'S', 0x1a, 0x00];

		let decoded = codec.decode(&bytes);

		assert_eq!(decoded.event_type(), EventType::SessionStart);
		assert!(decoded.session_data.is_none());
		assert!(decoded.application_info.is_none());
		assert_eq!(logger.messages(LogLevel::Info).len(), 1);
	}

	#[test]
	fn test_fields_split_across_the_input_still_merge() {
		let event = sample_event();
		let mut bytes = SessionEvent::session_start().encode_to_vec();
		bytes.extend(
			SessionEvent {
				session_data: event.session_data.clone(),
				..Default::default()
			}
			.encode_to_vec(),
		);

		assert_eq!(WireCodec::new().decode(&bytes), event);
	}

	#[test]
	fn test_unbounded_limit_does_not_preallocate() {
		let event = sample_event();
		let codec = WireCodec::new().with_max_encoded_len(usize::MAX);

		assert_eq!(codec.try_encode(&event).unwrap(), event.encode_to_vec());
		assert_eq!(codec.encode(&event), WireCodec::new().encode(&event));
	}

	#[test]
	fn test_empty_input_decodes_to_default_silently() {
		let logger = Arc::new(MemoryLogger::new());
		let codec = WireCodec::new().with_logger(logger.clone());

		assert_eq!(codec.decode(&[]), SessionEvent::default());
		assert!(logger.is_empty());
	}
}
