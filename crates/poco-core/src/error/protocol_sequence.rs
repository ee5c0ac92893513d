use super::Error;

/// Result sets were requested in a way the cursor cannot honor.
///
/// This occurs when:
/// - More result sets are read than the query produced
/// - A reader is used after it has been disposed
/// - A joined row is not as wide as the types it is split across
#[derive(Debug)]
pub(super) struct ProtocolSequenceError {
    message: Box<str>,
}

impl std::error::Error for ProtocolSequenceError {}

impl core::fmt::Display for ProtocolSequenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "result set sequence violated: {}", self.message)
    }
}

impl Error {
    /// Creates a protocol sequence error.
    pub fn protocol_sequence(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ProtocolSequence(ProtocolSequenceError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a protocol sequence error.
    pub fn is_protocol_sequence(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ProtocolSequence(_))
    }
}
