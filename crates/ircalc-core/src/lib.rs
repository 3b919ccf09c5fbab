//! ircalc core library for infrared remote-control codecs.
//!
//! This crate implements the two codecs used by the CLI: the NEC telegram
//! encoder/decoder and the Krinner Lumix raw pulse-train decoder. Parsing
//! is text-oriented and side-effect free; all I/O stays with the caller.
//! Protocol conventions are captured in per-protocol `layout` and `reader`
//! modules so parsers stay minimal and consistent.
//!
//! Invariants:
//! - A telegram is valid iff its second byte is the bitwise inverse of the
//!   first and its fourth the inverse of the third.
//! - Frame disagreement within a capture is surfaced (`frames_match`),
//!   never raised as an error.
//! - Reports are plain data; equal inputs produce equal reports.
//!
//! Version française (résumé):
//! Cette crate fournit les deux codecs purs : télégrammes NEC (encodage et
//! décodage avec contrôle des octets inversés) et trames brutes Krinner
//! (segmentation par silence, classification par seuil, extraction des
//! champs canal/commande). Aucune E/S ; les conventions de protocole
//! vivent dans `layout` et `reader`.
//!
//! # Examples
//! ```
//! use ircalc_core::encode_telegram;
//!
//! let report = encode_telegram(0x01, 0x45);
//! assert_eq!(report.telegram_hex, "0x01FE45BA");
//! ```

use serde::{Deserialize, Serialize};

mod protocols;

pub use protocols::krinner::error::KrinnerError;
pub use protocols::krinner::layout::{DEFAULT_REPEATS, DEFAULT_THRESHOLD_US};
pub use protocols::krinner::{
    Channel, RemoteCommand, decode_frame, decode_pulse_train, encode_pulse_train,
    parse_pulse_train, segment_frames,
};
pub use protocols::nec::commands;
pub use protocols::nec::error::NecError;
pub use protocols::nec::{decode_telegram, encode_telegram};

/// Fully expanded NEC telegram with every display form a caller needs.
///
/// Returned by both [`encode_telegram`] and [`decode_telegram`]; after
/// decoding, the inverse bytes are validated, so all fields are derived
/// from `address` and `command` alone.
///
/// # Examples
/// ```
/// use ircalc_core::decode_telegram;
///
/// let report = decode_telegram("0x01FE45BA")?;
/// assert_eq!(report.address, 0x01);
/// assert_eq!(report.command_hex, "0x45");
/// # Ok::<(), ircalc_core::NecError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramReport {
    /// Device address byte.
    pub address: u8,
    /// Address as `0x`-prefixed uppercase hex.
    pub address_hex: String,
    /// Bitwise inverse of the address.
    pub address_inv: u8,
    /// Address inverse as `0x`-prefixed uppercase hex.
    pub address_inv_hex: String,
    /// Command byte.
    pub command: u8,
    /// Command as `0x`-prefixed uppercase hex.
    pub command_hex: String,
    /// Bitwise inverse of the command.
    pub command_inv: u8,
    /// Command inverse as `0x`-prefixed uppercase hex.
    pub command_inv_hex: String,
    /// Command as an 8-digit binary string.
    pub command_binary: String,
    /// Command inverse as an 8-digit binary string.
    pub command_inv_binary: String,
    /// Full 32-bit telegram `[address][~address][command][~command]`.
    pub telegram: u32,
    /// Telegram as `0x`-prefixed 8-digit uppercase hex.
    pub telegram_hex: String,
}

/// Decoded raw capture: the canonical byte with its derived fields.
///
/// # Examples
/// ```
/// use ircalc_core::{
///     Channel, DEFAULT_THRESHOLD_US, RemoteCommand, decode_pulse_train, encode_pulse_train,
/// };
///
/// let pulses = encode_pulse_train(0x0D, 3)
///     .iter()
///     .map(u32::to_string)
///     .collect::<Vec<_>>()
///     .join(",");
/// let report = decode_pulse_train(&pulses, DEFAULT_THRESHOLD_US)?;
/// assert_eq!(report.channel, Channel::A);
/// assert_eq!(report.command, RemoteCommand::Off);
/// assert!(report.frames_match);
/// # Ok::<(), ircalc_core::KrinnerError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureReport {
    /// Canonical data byte (first decodable frame).
    pub byte: u8,
    /// Byte as `0x`-prefixed uppercase hex.
    pub byte_hex: String,
    /// Byte as an 8-digit binary string.
    pub byte_binary: String,
    /// Channel extracted from bits 3..=4.
    pub channel: Channel,
    /// Command extracted from bits 5..=6.
    pub command: RemoteCommand,
    /// Number of frames that decoded to a byte.
    pub frames_decoded: usize,
    /// Whether every decoded frame agreed with the canonical byte.
    pub frames_match: bool,
}
