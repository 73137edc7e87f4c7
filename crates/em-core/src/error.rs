//! Error types for the metering calculators.

use thiserror::Error;

/// Errors raised by the metering calculators.
///
/// All errors are synchronous and fatal for the call that produced them;
/// there is no recovery path inside the library.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeterError {
    /// The profile argument violates the ordering contract.
    #[error("invalid profile: {reason}")]
    InvalidProfile { reason: &'static str },

    /// The day value has a fractional component.
    #[error("day must be an integer, got {value}")]
    NonIntegerDay { value: f64 },

    /// The day value falls outside the fixed 365-day calendar.
    #[error("day out of range: {day} is not within [1, 365]")]
    DayOutOfRange { day: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        insta::assert_snapshot!(
            MeterError::InvalidProfile {
                reason: "events are not in timestamp order"
            }
            .to_string(),
            @"invalid profile: events are not in timestamp order"
        );
        insta::assert_snapshot!(
            MeterError::NonIntegerDay { value: 3.5 }.to_string(),
            @"day must be an integer, got 3.5"
        );
        insta::assert_snapshot!(
            MeterError::DayOutOfRange { day: 400 }.to_string(),
            @"day out of range: 400 is not within [1, 365]"
        );
    }
}
