use thiserror::Error;

use crate::mac::MacError;
use crate::sender::SendError;

#[derive(Debug, Error)]
pub enum WolError {
    // input errors, raised before any socket exists
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error(transparent)]
    Mac(#[from] MacError),

    #[error("no target named '{0}' in configuration")]
    UnknownTarget(String),

    #[error("interface '{0}' not found or has no IPv4 address")]
    NoBroadcastAddress(String),

    // transport errors
    #[error(transparent)]
    Send(#[from] SendError),

    #[error("only {sent} of {expected} bytes were sent")]
    ShortSend { sent: usize, expected: usize },
}

impl WolError {
    /// Input errors are detected before any network activity.
    pub fn is_input_error(&self) -> bool {
        match self {
            WolError::MissingField(_)
            | WolError::Mac(_)
            | WolError::UnknownTarget(_)
            | WolError::NoBroadcastAddress(_) => true,
            WolError::Send(SendError::AddressParseFailed { .. }) => true,
            WolError::Send(_) | WolError::ShortSend { .. } => false,
        }
    }
}
