use super::error::NecError;
use super::layout;
use super::reader::TelegramReader;
use crate::TelegramReport;
use crate::protocols::common::format::{binary_byte, hex_byte};

/// Bitwise inverse of an 8-bit value, the NEC redundancy byte.
pub fn inverse(byte: u8) -> u8 {
    !byte
}

/// Encodes an address/command pair into a full telegram report.
///
/// Total function: every `u8` pair produces a valid telegram.
pub fn encode_telegram(address: u8, command: u8) -> TelegramReport {
    build_report(address, command)
}

/// Decodes and validates a telegram given as hex text.
///
/// Accepts an optional `0x`/`0X` prefix followed by 2 address digits,
/// 2 address-inverse digits, 2 command digits and 1 or 2 command-inverse
/// digits (the final group may omit a leading zero).
pub fn decode_telegram(text: &str) -> Result<TelegramReport, NecError> {
    let reader = TelegramReader::new(text)?;
    let address = reader.read_byte(layout::ADDRESS_RANGE.clone())?;
    let address_inv = reader.read_byte(layout::ADDRESS_INV_RANGE.clone())?;
    let command = reader.read_byte(layout::COMMAND_RANGE.clone())?;
    let command_inv = reader.read_tail_byte(layout::COMMAND_INV_OFFSET)?;

    if address_inv != inverse(address) {
        return Err(NecError::AddressInverseMismatch {
            expected: inverse(address),
            actual: address_inv,
        });
    }
    if command_inv != inverse(command) {
        return Err(NecError::CommandInverseMismatch {
            expected: inverse(command),
            actual: command_inv,
        });
    }

    Ok(build_report(address, command))
}

fn build_report(address: u8, command: u8) -> TelegramReport {
    let address_inv = inverse(address);
    let command_inv = inverse(command);
    let telegram = (u32::from(address) << layout::ADDRESS_SHIFT)
        | (u32::from(address_inv) << layout::ADDRESS_INV_SHIFT)
        | (u32::from(command) << layout::COMMAND_SHIFT)
        | u32::from(command_inv);

    TelegramReport {
        address,
        address_hex: hex_byte(address),
        address_inv,
        address_inv_hex: hex_byte(address_inv),
        command,
        command_hex: hex_byte(command),
        command_inv,
        command_inv_hex: hex_byte(command_inv),
        command_binary: binary_byte(command),
        command_inv_binary: binary_byte(command_inv),
        telegram,
        telegram_hex: format!("0x{telegram:08X}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_telegram, encode_telegram, inverse};
    use crate::NecError;

    #[test]
    fn encode_known_telegram() {
        let report = encode_telegram(0x01, 0x45);
        assert_eq!(report.telegram, 0x01FE45BA);
        assert_eq!(report.telegram_hex, "0x01FE45BA");
        assert_eq!(report.address_inv, 0xFE);
        assert_eq!(report.command_inv, 0xBA);
        assert_eq!(report.command_binary, "01000101");
        assert_eq!(report.command_inv_binary, "10111010");
    }

    #[test]
    fn decode_known_telegram() {
        let report = decode_telegram("0x01FE45BA").unwrap();
        assert_eq!(report.address, 0x01);
        assert_eq!(report.command, 0x45);
    }

    #[test]
    fn decode_is_prefix_and_case_insensitive() {
        for text in ["0x01FE45BA", "0X01FE45BA", "01fe45ba", "01FE45ba"] {
            let report = decode_telegram(text).unwrap();
            assert_eq!(report.address, 0x01);
            assert_eq!(report.command, 0x45);
        }
    }

    #[test]
    fn round_trip_all_pairs() {
        for address in 0..=255u8 {
            for command in 0..=255u8 {
                let encoded = encode_telegram(address, command);
                let decoded = decode_telegram(&encoded.telegram_hex).unwrap();
                assert_eq!(decoded.address, address);
                assert_eq!(decoded.command, command);
                assert_eq!(decoded.telegram, encoded.telegram);
            }
        }
    }

    #[test]
    fn decode_single_digit_command_inverse() {
        // 0x01FEF00F written with the leading zero of the last group omitted.
        let report = decode_telegram("01FEF0F").unwrap();
        assert_eq!(report.command, 0xF0);
        assert_eq!(report.command_inv, 0x0F);
        assert_eq!(report.telegram, 0x01FEF00F);
    }

    #[test]
    fn decode_rejects_address_inverse_mismatch() {
        let err = decode_telegram("0x01FF45BA").unwrap_err();
        match err {
            NecError::AddressInverseMismatch { expected, actual } => {
                assert_eq!(expected, 0xFE);
                assert_eq!(actual, 0xFF);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn decode_rejects_command_inverse_mismatch() {
        let err = decode_telegram("0x01FE45BB").unwrap_err();
        match err {
            NecError::CommandInverseMismatch { expected, actual } => {
                assert_eq!(expected, 0xBA);
                assert_eq!(actual, 0xBB);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn decode_rejects_malformed_text() {
        for text in ["", "0x", "01FE45", "0x01FE45BA0", "zz1FE45BA", "0x01 FE45BA"] {
            let err = decode_telegram(text).unwrap_err();
            assert!(matches!(err, NecError::MalformedTelegram { .. }), "{text:?}");
        }
    }

    #[test]
    fn inverse_is_involutive() {
        for byte in 0..=255u8 {
            assert_eq!(inverse(inverse(byte)), byte);
            assert_eq!(u16::from(byte) + u16::from(inverse(byte)), 255);
        }
    }
}
