//! Deadline arithmetic for step offsets.

use super::TaskGroupDomainError;
use chrono::{NaiveDateTime, TimeDelta};

/// Returns `reference` shifted by `days` whole days.
///
/// The computation is naive: no time zone is applied, so the time of day is
/// preserved across the shift.
///
/// # Errors
///
/// Returns [`TaskGroupDomainError::DeadlineOutOfRange`] when the result
/// falls outside the range `NaiveDateTime` can represent.
pub fn deadline_from(
    reference: NaiveDateTime,
    days: i32,
) -> Result<NaiveDateTime, TaskGroupDomainError> {
    TimeDelta::try_days(i64::from(days))
        .and_then(|offset| reference.checked_add_signed(offset))
        .ok_or(TaskGroupDomainError::DeadlineOutOfRange { days })
}
