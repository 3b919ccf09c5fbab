use serde::{Deserialize, Serialize};

use super::error::KrinnerError;
use super::layout;
use super::reader::parse_pulse_train;
use crate::CaptureReport;
use crate::protocols::common::format::{binary_byte, hex_byte};

/// Remote channel selector, taken from bits 3..=4 of the decoded byte.
///
/// The mapping is reverse-engineered from observed captures; channel D
/// (`00`) follows the pattern but has not been seen on the air. A byte
/// whose channel bits conflict with newly observed remotes means the
/// table needs revisiting, not extending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    A,
    B,
    C,
    D,
    #[serde(rename = "unknown")]
    Unknown,
}

/// Remote action, taken from bits 5..=6 of the decoded byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteCommand {
    Off,
    On,
    Flicker,
    Unknown,
}

/// Splits a pulse train into repeated frames.
///
/// A pulse longer than the frame-gap threshold closes the current frame
/// (the gap pulse stays with the frame it terminates) unless it is the
/// last value of the train; trailing pulses form a final frame.
pub fn segment_frames(train: &[u32]) -> Vec<Vec<u32>> {
    let mut frames = Vec::new();
    let mut current = Vec::new();
    for (index, &pulse) in train.iter().enumerate() {
        current.push(pulse);
        if pulse > layout::FRAME_GAP_MIN_US && index + 1 < train.len() {
            frames.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        frames.push(current);
    }
    frames
}

/// Decodes one frame into its data byte.
///
/// Returns `None` for frames with too few mark/space pairs or with a
/// data section that does not classify to exactly eight bits.
pub fn decode_frame(frame: &[u32], threshold_us: u32) -> Option<u8> {
    // Raw captures start with a zero-length placeholder mark.
    let frame = if frame.first() == Some(&0) {
        &frame[1..]
    } else {
        frame
    };

    let pairs: Vec<(u32, u32)> = frame
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect();
    if pairs.len() < layout::MIN_FRAME_PAIRS {
        return None;
    }

    // Header pair first, end-marker pair last; the interior is data.
    let data_pairs = &pairs[1..pairs.len() - 1];

    let mut bits = Vec::with_capacity(layout::DATA_BITS);
    for &(_, space) in data_pairs {
        if space > layout::DATA_SPACE_MAX_US {
            // Inter-frame artifact, not part of this frame's data.
            break;
        }
        bits.push(space > threshold_us);
    }
    if bits.len() != layout::DATA_BITS {
        return None;
    }

    let mut value = 0u8;
    for (position, &bit) in bits.iter().enumerate() {
        if bit {
            value |= 1 << position;
        }
    }
    Some(value)
}

/// Decodes a raw capture into its byte, channel and command.
///
/// Every segmented frame is decoded independently; the first decodable
/// frame's byte is canonical and `frames_match` records whether all
/// decoded frames agree with it. Disagreement is reported, not fatal.
pub fn decode_pulse_train(raw: &str, threshold_us: u32) -> Result<CaptureReport, KrinnerError> {
    let train = parse_pulse_train(raw)?;
    let decoded: Vec<u8> = segment_frames(&train)
        .iter()
        .filter_map(|frame| decode_frame(frame, threshold_us))
        .collect();

    let byte = match decoded.first() {
        Some(&byte) => byte,
        None => return Err(KrinnerError::NoDecodableFrames),
    };
    let frames_match = decoded.iter().all(|&other| other == byte);

    Ok(CaptureReport {
        byte,
        byte_hex: hex_byte(byte),
        byte_binary: binary_byte(byte),
        channel: channel_of(byte),
        command: command_of(byte),
        frames_decoded: decoded.len(),
        frames_match,
    })
}

fn channel_of(byte: u8) -> Channel {
    match (byte >> layout::CHANNEL_SHIFT) & layout::FIELD_MASK {
        0b01 => Channel::A,
        0b11 => Channel::B,
        0b10 => Channel::C,
        0b00 => Channel::D,
        _ => Channel::Unknown,
    }
}

fn command_of(byte: u8) -> RemoteCommand {
    match (byte >> layout::COMMAND_SHIFT) & layout::FIELD_MASK {
        0b00 => RemoteCommand::Off,
        0b11 => RemoteCommand::On,
        0b10 => RemoteCommand::Flicker,
        _ => RemoteCommand::Unknown,
    }
}
