//! Acceptance rules for new and edited leave requests.
//!
//! Pure decision logic: callers load the requester's existing non-deleted
//! date ranges (excluding the request being edited, if any) and get back
//! either acceptance or one specific rejection reason. No side effects.

use chrono::NaiveDate;
use derive_more::Display;

/// Longest admissible leave span, in days between start and end.
pub const MAX_SPAN_DAYS: i64 = 365;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Display)]
pub enum ValidationError {
    #[display(fmt = "end date cannot be before start date")]
    InvalidRange,
    #[display(fmt = "leave span cannot exceed {} days", MAX_SPAN_DAYS)]
    SpanTooLong,
    #[display(fmt = "overlaps an existing leave request")]
    Overlap,
}

/// Checks a candidate `[start, end]` range against the requester's existing
/// non-deleted ranges. Overlap uses full interval intersection, boundary
/// inclusive: sharing a single day counts as a collision.
pub fn validate_range(
    start: NaiveDate,
    end: NaiveDate,
    existing: &[(NaiveDate, NaiveDate)],
) -> Result<(), ValidationError> {
    if end < start {
        return Err(ValidationError::InvalidRange);
    }

    if (end - start).num_days() > MAX_SPAN_DAYS {
        return Err(ValidationError::SpanTooLong);
    }

    if existing
        .iter()
        .any(|&(ex_start, ex_end)| ex_start <= end && start <= ex_end)
    {
        return Err(ValidationError::Overlap);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn accepts_a_plain_range() {
        assert_eq!(validate_range(d(2025, 3, 1), d(2025, 3, 5), &[]), Ok(()));
    }

    #[test]
    fn accepts_a_single_day() {
        assert_eq!(validate_range(d(2025, 3, 1), d(2025, 3, 1), &[]), Ok(()));
    }

    #[test]
    fn rejects_end_before_start() {
        assert_eq!(
            validate_range(d(2025, 3, 5), d(2025, 3, 1), &[]),
            Err(ValidationError::InvalidRange)
        );
    }

    #[test]
    fn span_cap_is_inclusive_at_365_days() {
        assert_eq!(validate_range(d(2025, 1, 1), d(2026, 1, 1), &[]), Ok(()));
        assert_eq!(
            validate_range(d(2025, 1, 1), d(2026, 1, 2), &[]),
            Err(ValidationError::SpanTooLong)
        );
    }

    #[test]
    fn rejects_partial_overlap() {
        // Existing 03-01..03-05 against a new 03-03..03-10: the existing end
        // falls inside the new range.
        let existing = [(d(2025, 3, 1), d(2025, 3, 5))];
        assert_eq!(
            validate_range(d(2025, 3, 3), d(2025, 3, 10), &existing),
            Err(ValidationError::Overlap)
        );
    }

    #[test]
    fn rejects_candidate_containing_an_existing_range() {
        // Neither endpoint of the existing range lies outside the candidate;
        // an endpoint-only rule would miss this one.
        let existing = [(d(2024, 1, 10), d(2024, 1, 20))];
        assert_eq!(
            validate_range(d(2024, 1, 5), d(2024, 1, 25), &existing),
            Err(ValidationError::Overlap)
        );
    }

    #[test]
    fn rejects_candidate_inside_an_existing_range() {
        let existing = [(d(2024, 1, 1), d(2024, 1, 31))];
        assert_eq!(
            validate_range(d(2024, 1, 10), d(2024, 1, 12), &existing),
            Err(ValidationError::Overlap)
        );
    }

    #[test]
    fn shared_boundary_day_counts_as_overlap() {
        let existing = [(d(2025, 3, 1), d(2025, 3, 5))];
        assert_eq!(
            validate_range(d(2025, 3, 5), d(2025, 3, 8), &existing),
            Err(ValidationError::Overlap)
        );
    }

    #[test]
    fn adjacent_ranges_do_not_collide() {
        let existing = [(d(2025, 3, 1), d(2025, 3, 5))];
        assert_eq!(validate_range(d(2025, 3, 6), d(2025, 3, 8), &existing), Ok(()));
    }

    #[test]
    fn unrelated_ranges_are_ignored() {
        let existing = [
            (d(2025, 1, 1), d(2025, 1, 10)),
            (d(2025, 6, 1), d(2025, 6, 10)),
        ];
        assert_eq!(validate_range(d(2025, 3, 1), d(2025, 3, 5), &existing), Ok(()));
    }
}
