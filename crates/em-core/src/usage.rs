//! Daily energy usage from a state-change profile.

use crate::error::MeterError;
use crate::profile::{Event, MAX_IN_PERIOD, Profile};
use crate::state::State;

/// A derived interval: one state held for a number of minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StateSpan {
    pub(crate) state: State,
    pub(crate) minutes: u32,
}

/// Expands a day's events into contiguous spans covering `[0, MAX_IN_PERIOD)`.
///
/// The first span runs from the start of the day to the first event, each
/// middle span between consecutive events, and the last span from the final
/// event to the day boundary. Span durations always sum to `MAX_IN_PERIOD`.
pub(crate) fn expand_spans(initial: State, events: &[Event]) -> Vec<StateSpan> {
    let mut spans = Vec::with_capacity(events.len() + 1);
    let mut state = initial;
    let mut span_start = 0;
    for event in events {
        spans.push(StateSpan {
            state,
            minutes: event.timestamp - span_start,
        });
        state = event.state;
        span_start = event.timestamp;
    }
    spans.push(StateSpan {
        state,
        minutes: MAX_IN_PERIOD - span_start,
    });
    spans
}

/// Calculates the total minutes the appliance spent switched on over one day.
///
/// `profile` must be day-scoped (timestamps in `[0, 1439]`, non-decreasing).
/// A profile with no events reports the full period when `initial` is
/// [`State::On`] and zero otherwise.
pub fn calculate_energy_usage_simple(profile: &Profile) -> Result<u32, MeterError> {
    profile.ensure_daily()?;
    let used = expand_spans(profile.initial, &profile.events)
        .iter()
        .filter(|span| span.state == State::On)
        .map(|span| span.minutes)
        .sum();
    Ok(used)
}
