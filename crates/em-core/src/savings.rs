//! Energy saved by the automatic shutoff device.

use crate::error::MeterError;
use crate::profile::{MAX_IN_PERIOD, Profile};
use crate::state::State;

/// Calculates the total minutes of energy saved by automatic shutoff over
/// one day.
///
/// Only time attributable to [`State::AutoOff`] counts. A manual `Off` event
/// arriving while the appliance is already auto-off is redundant — the device
/// had already achieved the saving — so the interval it opens is still
/// counted, and the reclassification chains across consecutive `Off` events
/// until the appliance is switched back on.
pub fn calculate_energy_savings(profile: &Profile) -> Result<u32, MeterError> {
    profile.ensure_daily()?;

    let mut saved = 0;
    // State of the previously retained interval; starts as the initial
    // state, which is never reclassified.
    let mut state = profile.initial;
    let mut span_start = 0;
    for event in &profile.events {
        if state == State::AutoOff {
            saved += event.timestamp - span_start;
        }
        state = if event.state == State::Off && state == State::AutoOff {
            State::AutoOff
        } else {
            event.state
        };
        span_start = event.timestamp;
    }
    if state == State::AutoOff {
        saved += MAX_IN_PERIOD - span_start;
    }
    Ok(saved)
}
