//! Known NEC command sets for supported LED-candle remotes.
//!
//! All listed brands share NEC address 0x00. The byte tables were lifted
//! from the remotes shipped with each product line.

/// One brand's button-to-command-byte table.
#[derive(Debug, Clone)]
pub struct CommandSet {
    pub brand: &'static str,
    pub address: u8,
    pub on: u8,
    pub off: u8,
    pub timer_2h: Option<u8>,
    pub timer_4h: Option<u8>,
    pub timer_6h: Option<u8>,
    pub timer_8h: Option<u8>,
}

/// HEMA rechargeable LED tealights (Taizhou Sparkle Lights BAT-LEDS01).
pub const HEMA: CommandSet = CommandSet {
    brand: "hema",
    address: 0x00,
    on: 0x45,
    off: 0x47,
    timer_2h: Some(0x44),
    timer_4h: Some(0x43),
    timer_6h: Some(0x07),
    timer_8h: Some(0x09),
};

/// Deluxe Homeart "Real Flame" candles. Timer commands may need to be
/// preceded by ON.
pub const DELUXE: CommandSet = CommandSet {
    brand: "deluxe",
    address: 0x00,
    on: 0x0C,
    off: 0x5E,
    timer_2h: Some(0x46),
    timer_4h: Some(0x40),
    timer_6h: Some(0x15),
    timer_8h: Some(0x19),
};

pub const COMMAND_SETS: &[&CommandSet] = &[&HEMA, &DELUXE];

pub const ACTIONS: &[&str] = &["on", "off", "timer-2h", "timer-4h", "timer-6h", "timer-8h"];

/// Looks up a command set by brand name, case-insensitively.
pub fn find(brand: &str) -> Option<&'static CommandSet> {
    COMMAND_SETS
        .iter()
        .copied()
        .find(|set| set.brand.eq_ignore_ascii_case(brand))
}

impl CommandSet {
    /// Resolves an action name to its command byte, case-insensitively.
    ///
    /// Returns `None` for unknown actions and for timer durations the
    /// brand's remote does not offer.
    pub fn command_for(&self, action: &str) -> Option<u8> {
        match action.to_ascii_lowercase().as_str() {
            "on" => Some(self.on),
            "off" => Some(self.off),
            "timer-2h" => self.timer_2h,
            "timer-4h" => self.timer_4h,
            "timer-6h" => self.timer_6h,
            "timer-8h" => self.timer_8h,
            _ => None,
        }
    }
}
