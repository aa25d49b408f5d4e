use thiserror::Error;

/// Errors returned by seek bar setters and state decoding.
///
/// A rejected call never leaves the control half-updated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeekBarError {
    #[error("tick count {tick_count} is invalid; a seek bar needs at least 2 ticks")]
    InvalidTickCount { tick_count: usize },
    #[error("thumb index {index} is out of bounds for {tick_count} ticks")]
    IndexOutOfRange { index: i64, tick_count: usize },
    #[error("saved seek bar state could not be decoded: {0}")]
    InvalidState(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_bad_value() {
        let err = SeekBarError::InvalidTickCount { tick_count: 1 };
        assert!(err.to_string().contains("tick count 1"));

        let err = SeekBarError::IndexOutOfRange {
            index: 5,
            tick_count: 5,
        };
        assert_eq!(err.to_string(), "thumb index 5 is out of bounds for 5 ticks");
    }
}
