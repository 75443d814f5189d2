use chrono::{DateTime, Months, Timelike, Utc};
use chrono_tz::Europe::Amsterdam;

use crate::models::BookedSlot;

/// Salon wall-clock opening hour (Europe/Amsterdam).
pub const OPENING_HOUR: u32 = 9;
/// First non-bookable hour of the evening.
pub const CLOSING_HOUR: u32 = 17;
/// How far ahead a booking may be placed, in calendar months.
pub const BOOKING_HORIZON_MONTHS: u32 = 3;

/// Whether `candidate` can be booked, given the slots already taken.
///
/// Rejects times in the past, beyond the horizon, outside business hours
/// (evaluated as Amsterdam wall-clock time), or inside an occupied
/// interval. Slots without a server-computed `end_time` are not treated as
/// blocking.
pub fn is_bookable(candidate: DateTime<Utc>, now: DateTime<Utc>, booked: &[BookedSlot]) -> bool {
    if candidate < now {
        return false;
    }

    match now.checked_add_months(Months::new(BOOKING_HORIZON_MONTHS)) {
        Some(horizon) if candidate <= horizon => {}
        _ => return false,
    }

    let hour = candidate.with_timezone(&Amsterdam).hour();
    if !(OPENING_HOUR..CLOSING_HOUR).contains(&hour) {
        return false;
    }

    !booked.iter().any(|slot| match slot.end_time {
        Some(end) => candidate >= slot.date && candidate < end,
        None => false,
    })
}
