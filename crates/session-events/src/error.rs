/// Errors surfaced by the typed `try_*` codec paths
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum CodecError {
	/// The encoder could not write the record into the output buffer
	#[error("Failed to encode session event: {0}")]
	Encode(#[from] prost::EncodeError),

	/// The input bytes are not a valid session event
	#[error("Failed to decode session event: {0}")]
	Decode(#[from] prost::DecodeError),
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, CodecError>;
