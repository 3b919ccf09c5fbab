use super::error::NecError;
use super::layout;

pub struct TelegramReader<'a> {
    text: &'a str,
    digits: &'a str,
}

impl<'a> TelegramReader<'a> {
    pub fn new(text: &'a str) -> Result<Self, NecError> {
        let digits = text
            .strip_prefix(layout::HEX_PREFIX_LOWER)
            .or_else(|| text.strip_prefix(layout::HEX_PREFIX_UPPER))
            .unwrap_or(text);
        let in_bounds = (layout::MIN_DIGITS..=layout::MAX_DIGITS).contains(&digits.len());
        if !in_bounds || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(NecError::MalformedTelegram {
                text: text.to_string(),
            });
        }
        Ok(Self { text, digits })
    }

    pub fn read_byte(&self, range: std::ops::Range<usize>) -> Result<u8, NecError> {
        let group = self.digits.get(range).ok_or_else(|| self.malformed())?;
        u8::from_str_radix(group, 16).map_err(|_| self.malformed())
    }

    /// Reads the trailing byte group, which may be one or two digits.
    pub fn read_tail_byte(&self, offset: usize) -> Result<u8, NecError> {
        let group = self.digits.get(offset..).ok_or_else(|| self.malformed())?;
        u8::from_str_radix(group, 16).map_err(|_| self.malformed())
    }

    fn malformed(&self) -> NecError {
        NecError::MalformedTelegram {
            text: self.text.to_string(),
        }
    }
}
