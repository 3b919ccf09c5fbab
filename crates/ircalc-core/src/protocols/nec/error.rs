use thiserror::Error;

#[derive(Debug, Error)]
pub enum NecError {
    #[error("telegram does not match the NEC layout: {text:?}")]
    MalformedTelegram { text: String },
    #[error("address inverse mismatch: expected 0x{expected:02X}, got 0x{actual:02X}")]
    AddressInverseMismatch { expected: u8, actual: u8 },
    #[error("command inverse mismatch: expected 0x{expected:02X}, got 0x{actual:02X}")]
    CommandInverseMismatch { expected: u8, actual: u8 },
}
