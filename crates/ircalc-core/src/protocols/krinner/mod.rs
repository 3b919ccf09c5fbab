//! Krinner Lumix raw pulse-train decoding and encoding.
//!
//! The decoder consumes the comma-separated microsecond timing lists
//! produced by an IR blaster's raw-capture mode. Captures carry the same
//! code in several repeated frames separated by a long silence gap; each
//! frame is decoded independently (header and end-marker pairs discarded,
//! spaces classified against a fixed threshold) and agreement between
//! frames is reported rather than enforced.
//!
//! The bit-field mapping of the decoded byte to channel and command is
//! reverse-engineered from observed captures, not taken from a protocol
//! document. Timing constants and field positions live in `layout`, pulse
//! text parsing in `reader`.

pub mod encoder;
pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use encoder::encode_pulse_train;
pub use parser::{Channel, RemoteCommand, decode_frame, decode_pulse_train, segment_frames};
pub use reader::parse_pulse_train;
