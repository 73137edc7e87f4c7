//! Spurious event cleanup.

use crate::profile::Event;

/// Drops events that do not advance the timeline.
///
/// The first event is always retained; each later event survives only if its
/// timestamp is strictly greater than the previously *retained* event's, so
/// a run of duplicate or backwards records collapses onto the first retained
/// one. Raw device streams sometimes report the same transition twice; the
/// calculators expect such input to be cleaned before use. Idempotent.
#[must_use]
pub fn clean_events(events: &[Event]) -> Vec<Event> {
    let mut cleaned: Vec<Event> = Vec::with_capacity(events.len());
    for event in events {
        match cleaned.last() {
            Some(retained) if event.timestamp <= retained.timestamp => {
                tracing::trace!(timestamp = event.timestamp, "dropping non-monotonic event");
            }
            _ => cleaned.push(*event),
        }
    }
    cleaned
}
