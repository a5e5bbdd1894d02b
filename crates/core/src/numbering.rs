//! Date-scoped document numbers.
//!
//! Purchase orders are numbered `PO-YYYYMMDD-NNN` where the date is the PO
//! date. Payments are numbered `PAY-YYYYMMDD-NNN` where the date is the day
//! the payment was recorded. `NNN` is a per-day sequence starting at 1, zero
//! padded to three digits. Past 999 the suffix simply grows wider.

use chrono::NaiveDate;

/// Prefix for purchase order numbers.
pub const PO_PREFIX: &str = "PO";

/// Prefix for payment references.
pub const PAYMENT_PREFIX: &str = "PAY";

/// Formats a date as the `YYYYMMDD` segment of a document number.
#[must_use]
pub fn date_segment(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Returns the `PREFIX-YYYYMMDD-` stem shared by every number issued on `date`.
///
/// Used as the `LIKE 'stem%'` filter when looking up existing numbers.
#[must_use]
pub fn day_stem(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}-{}-", date_segment(date))
}

/// Formats a complete document number.
#[must_use]
pub fn format_number(prefix: &str, date: NaiveDate, sequence: u32) -> String {
    format!("{}{sequence:03}", day_stem(prefix, date))
}

/// Extracts the sequence suffix from `number` if it was issued on `date` under `prefix`.
#[must_use]
pub fn parse_sequence(prefix: &str, date: NaiveDate, number: &str) -> Option<u32> {
    number
        .strip_prefix(&day_stem(prefix, date))
        .filter(|suffix| !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|suffix| suffix.parse().ok())
}

/// Next purchase order number for `date`, given every number already issued.
///
/// Numbers from other days or with a malformed suffix are ignored. The
/// sequence continues from the numeric maximum, so gaps are never refilled.
#[must_use]
pub fn next_po_number<'a, I>(date: NaiveDate, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let last = existing
        .into_iter()
        .filter_map(|number| parse_sequence(PO_PREFIX, date, number))
        .max()
        .unwrap_or(0);

    format_number(PO_PREFIX, date, last.saturating_add(1))
}

/// Next payment reference for the recording day, given how many were already issued that day.
#[must_use]
pub fn next_payment_ref(recorded_on: NaiveDate, issued_today: u64) -> String {
    let sequence = u32::try_from(issued_today.saturating_add(1)).unwrap_or(u32::MAX);
    format_number(PAYMENT_PREFIX, recorded_on, sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_po_of_the_day() {
        let number = next_po_number(date(2023, 1, 1), std::iter::empty());
        assert_eq!(number, "PO-20230101-001");
    }

    #[test]
    fn test_po_sequence_continues_from_max() {
        let existing = ["PO-20230101-001", "PO-20230101-003", "PO-20230101-002"];
        let number = next_po_number(date(2023, 1, 1), existing);
        assert_eq!(number, "PO-20230101-004");
    }

    #[test]
    fn test_po_sequence_restarts_on_new_date() {
        let existing = ["PO-20230101-001", "PO-20230101-002"];
        let number = next_po_number(date(2023, 1, 2), existing);
        assert_eq!(number, "PO-20230102-001");
    }

    #[test]
    fn test_po_sequence_past_999() {
        let existing = ["PO-20230101-999", "PO-20230101-1000"];
        let number = next_po_number(date(2023, 1, 1), existing);
        assert_eq!(number, "PO-20230101-1001");
    }

    #[test]
    fn test_malformed_numbers_ignored() {
        let existing = ["PO-20230101-abc", "PO-20230101-", "PAY-20230101-007"];
        let number = next_po_number(date(2023, 1, 1), existing);
        assert_eq!(number, "PO-20230101-001");
    }

    #[test]
    fn test_payment_ref_from_count() {
        assert_eq!(next_payment_ref(date(2024, 2, 29), 0), "PAY-20240229-001");
        assert_eq!(next_payment_ref(date(2024, 2, 29), 41), "PAY-20240229-042");
    }

    #[test]
    fn test_parse_sequence() {
        assert_eq!(
            parse_sequence(PAYMENT_PREFIX, date(2024, 2, 29), "PAY-20240229-042"),
            Some(42)
        );
        assert_eq!(
            parse_sequence(PAYMENT_PREFIX, date(2024, 3, 1), "PAY-20240229-042"),
            None
        );
    }

    #[test]
    fn test_day_stem() {
        assert_eq!(day_stem(PO_PREFIX, date(2023, 12, 5)), "PO-20231205-");
    }
}
