//! Usage profiles: an initial state plus ordered state-change events.

use serde::{Deserialize, Serialize};

use crate::error::MeterError;
use crate::state::State;

/// Number of minutes in one metering period (a day).
pub const MAX_IN_PERIOD: u32 = 1440;

/// Highest day number in the fixed uniform calendar.
const DAYS_PER_YEAR: u16 = 365;

/// A single state-change record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// The state the appliance switched into.
    pub state: State,
    /// Minutes since the start of the profile window.
    pub timestamp: u32,
}

impl Event {
    #[must_use]
    pub const fn new(state: State, timestamp: u32) -> Self {
        Self { state, timestamp }
    }
}

/// One timeline of appliance activity: the state in effect at minute 0 of
/// the window plus every subsequent state change.
///
/// A profile spans either a single day (timestamps in `[0, 1439]`) or up to
/// one month (timestamps in minutes since the month start). Events must be
/// presented in non-decreasing timestamp order; the calculators fail with
/// [`MeterError::InvalidProfile`] otherwise. Raw device streams with
/// duplicate or non-monotonic records should be passed through
/// [`clean_events`](crate::clean_events) first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub initial: State,
    pub events: Vec<Event>,
}

impl Profile {
    #[must_use]
    pub fn new(initial: State, events: Vec<Event>) -> Self {
        Self { initial, events }
    }

    /// A profile with no state changes, held in `initial` for the whole
    /// window.
    #[must_use]
    pub fn constant(initial: State) -> Self {
        Self {
            initial,
            events: Vec::new(),
        }
    }

    /// Ordering contract shared by every calculator.
    pub(crate) fn ensure_ordered(&self) -> Result<(), MeterError> {
        let ordered = self
            .events
            .windows(2)
            .all(|pair| pair[0].timestamp <= pair[1].timestamp);
        if ordered {
            Ok(())
        } else {
            Err(MeterError::InvalidProfile {
                reason: "events are not in timestamp order",
            })
        }
    }

    /// Day-scoped profiles must additionally fit within one 1440-minute
    /// period.
    pub(crate) fn ensure_daily(&self) -> Result<(), MeterError> {
        self.ensure_ordered()?;
        if self
            .events
            .last()
            .is_some_and(|event| event.timestamp >= MAX_IN_PERIOD)
        {
            return Err(MeterError::InvalidProfile {
                reason: "event timestamp exceeds the day period",
            });
        }
        Ok(())
    }
}

/// A validated 1-based day number in the fixed 365-day calendar.
///
/// Constructed via `TryFrom`; the `f64` conversion applies the integer check
/// before the range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(u16);

impl Day {
    /// The first day of the calendar.
    pub const MIN: Self = Self(1);

    /// The last day of the calendar.
    pub const MAX: Self = Self(DAYS_PER_YEAR);

    /// Creates a day after range validation.
    pub fn new(day: i64) -> Result<Self, MeterError> {
        u16::try_from(day)
            .ok()
            .filter(|d| (1..=DAYS_PER_YEAR).contains(d))
            .map(Self)
            .ok_or(MeterError::DayOutOfRange { day })
    }

    /// The day number.
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Zero-based position of this day in a list of per-day profiles.
    pub(crate) const fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl TryFrom<i64> for Day {
    type Error = MeterError;

    fn try_from(day: i64) -> Result<Self, Self::Error> {
        Self::new(day)
    }
}

impl TryFrom<i32> for Day {
    type Error = MeterError;

    fn try_from(day: i32) -> Result<Self, Self::Error> {
        Self::new(i64::from(day))
    }
}

impl TryFrom<f64> for Day {
    type Error = MeterError;

    #[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
    fn try_from(day: f64) -> Result<Self, Self::Error> {
        if !day.is_finite() || day.fract() != 0.0 {
            return Err(MeterError::NonIntegerDay { value: day });
        }
        Self::new(day as i64)
    }
}
