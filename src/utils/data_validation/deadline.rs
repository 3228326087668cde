use chrono::NaiveDate;

use crate::familywish_errors::FWErr;

#[derive(Debug, Clone)]
pub enum DeadlineErr {
    DeadlineNotIsoDate,
}

pub fn parse_deadline(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

pub fn deadline_validate(raw: &str) -> Result<NaiveDate, FWErr> {
    parse_deadline(raw).ok_or(FWErr::ValidationDeadlineError(
        DeadlineErr::DeadlineNotIsoDate,
    ))
}

/// Wishes close the day after the deadline; the deadline day is still open.
/// A missing or unreadable deadline never locks.
pub fn wishes_locked_on(deadline: Option<&str>, today: NaiveDate) -> bool {
    match deadline.and_then(parse_deadline) {
        Some(deadline) => today > deadline,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn deadline_day_is_inclusive() {
        let deadline = Some("2026-12-01");
        assert!(!wishes_locked_on(deadline, day(2026, 11, 30)));
        assert!(!wishes_locked_on(deadline, day(2026, 12, 1)));
        assert!(wishes_locked_on(deadline, day(2026, 12, 2)));
    }

    #[test]
    fn empty_or_garbage_deadline_never_locks() {
        assert!(!wishes_locked_on(None, day(2030, 1, 1)));
        assert!(!wishes_locked_on(Some(""), day(2030, 1, 1)));
        assert!(!wishes_locked_on(Some("next friday"), day(2030, 1, 1)));
    }

    #[test]
    fn validate_accepts_iso_dates_only() {
        assert_eq!(deadline_validate(" 2026-12-24 ").unwrap(), day(2026, 12, 24));
        assert!(deadline_validate("24.12.2026").is_err());
    }
}
