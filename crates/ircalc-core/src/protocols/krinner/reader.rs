use super::error::KrinnerError;

/// Parses a comma-separated pulse list into microsecond durations.
///
/// Whitespace is ignored wherever it appears and empty tokens are
/// skipped, matching the raw-capture output of IR blaster firmware.
pub fn parse_pulse_train(raw: &str) -> Result<Vec<u32>, KrinnerError> {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    cleaned
        .split(',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u32>()
                .map_err(|_| KrinnerError::MalformedPulseToken {
                    token: token.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_pulse_train;
    use crate::KrinnerError;

    #[test]
    fn parse_skips_whitespace_and_empty_tokens() {
        let train = parse_pulse_train("0, 2000,1000, , 4 00,,5600").unwrap();
        assert_eq!(train, vec![0, 2000, 1000, 400, 5600]);
    }

    #[test]
    fn parse_empty_string_yields_empty_train() {
        assert_eq!(parse_pulse_train("").unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn parse_rejects_bad_tokens() {
        for raw in ["0,abc,400", "0,-100,400", "0,4.5,400"] {
            let err = parse_pulse_train(raw).unwrap_err();
            assert!(matches!(err, KrinnerError::MalformedPulseToken { .. }), "{raw:?}");
        }
    }
}
