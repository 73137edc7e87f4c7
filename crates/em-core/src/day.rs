//! Per-day usage out of a month-long profile.

use crate::error::MeterError;
use crate::profile::{Day, Event, MAX_IN_PERIOD, Profile};
use crate::usage::calculate_energy_usage_simple;

/// Partitions a month-scoped profile into per-day profiles with day-relative
/// timestamps.
///
/// Walks the events once, closing out a day whenever an event belongs to a
/// later one. A day's initial state is the last event of the previous day,
/// or the previous day's own initial state when it had no events, so state
/// carries forward unchanged across empty days.
fn split_into_days(profile: &Profile) -> Vec<Profile> {
    let mut days = Vec::new();
    let mut day_events: Vec<Event> = Vec::new();
    let mut day_initial = profile.initial;
    let mut current_day = 0;

    for event in &profile.events {
        while event.timestamp / MAX_IN_PERIOD > current_day {
            let next_initial = day_events.last().map_or(day_initial, |last| last.state);
            days.push(Profile::new(day_initial, std::mem::take(&mut day_events)));
            day_initial = next_initial;
            current_day += 1;
        }
        day_events.push(Event::new(event.state, event.timestamp % MAX_IN_PERIOD));
    }
    days.push(Profile::new(day_initial, day_events));
    days
}

/// Calculates one day's energy usage from an up-to-one-month profile.
///
/// `profile` timestamps are minutes since the start of the month; `day`
/// accepts anything convertible to [`Day`] (the `f64` conversion applies the
/// integer check before the range check). Days after the one containing the
/// last state change hold that state for their full period.
pub fn calculate_energy_usage_for_day<D>(profile: &Profile, day: D) -> Result<u32, MeterError>
where
    D: TryInto<Day, Error = MeterError>,
{
    let day = day.try_into()?;
    profile.ensure_ordered()?;

    let Some(last) = profile.events.last() else {
        return calculate_energy_usage_simple(&Profile::constant(profile.initial));
    };

    if u32::from(day.get()) > last.timestamp.div_ceil(MAX_IN_PERIOD) {
        return calculate_energy_usage_simple(&Profile::constant(last.state));
    }

    let days = split_into_days(profile);
    tracing::trace!(
        day = day.get(),
        days_built = days.len(),
        "sliced month profile"
    );
    match days.get(day.index()) {
        Some(day_profile) => calculate_energy_usage_simple(day_profile),
        None => calculate_energy_usage_simple(&Profile::constant(last.state)),
    }
}
