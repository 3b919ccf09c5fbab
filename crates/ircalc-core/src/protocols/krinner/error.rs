use thiserror::Error;

#[derive(Debug, Error)]
pub enum KrinnerError {
    #[error("pulse token is not a non-negative integer: {token:?}")]
    MalformedPulseToken { token: String },
    #[error("no frame decoded to a data byte")]
    NoDecodableFrames,
}
