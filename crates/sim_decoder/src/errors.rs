use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Malformed input, instruction at offset {offset:#06x} is truncated")]
    Truncated { offset: u64 },

    #[error("Unsupported op code ({op_code:#04x}) at offset {offset:#06x}")]
    UnsupportedOpCode { op_code: u8, offset: u64 },

    #[error("Invalid mod encoding ({0:#04b})")]
    InvalidModEncoding(u8),

    #[error("Invalid register encoding ({0:#05b})")]
    InvalidRegisterEncoding(u8),

    #[error("Invalid segment encoding ({0:#05b})")]
    InvalidSegmentEncoding(u8),

    #[error("Could not read from stream: {0}")]
    Io(#[from] std::io::Error),
}

impl DecodeError {
    /// Errors that can only be caused by a defect in the decoder, never by the input.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            DecodeError::InvalidModEncoding(_) | DecodeError::InvalidRegisterEncoding(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
