//! Account ID generation.
//!
//! IDs are the registration time in Unix milliseconds, zero-padded to
//! [`ID_WIDTH`] digits. Fixed width keeps lexical order equal to creation
//! order, which the profile mapping relies on for listing.

use std::collections::HashSet;

/// Minimum number of digits in a generated ID.
pub const ID_WIDTH: usize = 13;

/// Format a numeric ID.
#[must_use]
pub fn format_id(value: u64) -> String {
    format!("{value:0width$}", width = ID_WIDTH)
}

/// Next account ID given the current time and every ID already issued.
///
/// The result is strictly greater than every existing numeric ID and never
/// equal to any existing ID, so IDs are unique even when two registrations
/// land in the same millisecond or the clock goes backwards.
#[must_use]
pub fn next_account_id<'a, I>(now_millis: i64, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let existing: HashSet<&str> = existing.into_iter().collect();
    let floor = existing
        .iter()
        .filter_map(|id| id.parse::<u64>().ok())
        .max()
        .map_or(0, |max| max.saturating_add(1));

    let mut candidate = u64::try_from(now_millis).unwrap_or(0).max(floor);
    loop {
        let id = format_id(candidate);
        if !existing.contains(id.as_str()) {
            return id;
        }
        candidate = candidate.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn uses_clock_when_store_is_empty() {
        assert_eq!(next_account_id(1_712_345_678_901, []), "1712345678901");
    }

    #[test]
    fn pads_small_values() {
        assert_eq!(format_id(42), "0000000000042");
    }

    #[test]
    fn bumps_past_existing_ids_in_same_millisecond() {
        let existing = ["1712345678901", "1712345678902"];
        assert_eq!(
            next_account_id(1_712_345_678_901, existing),
            "1712345678903"
        );
    }

    #[test]
    fn stays_monotonic_when_clock_goes_backwards() {
        let existing = ["1712345678901"];
        assert_eq!(next_account_id(1_000, existing), "1712345678902");
    }

    #[test]
    fn ignores_non_numeric_legacy_ids() {
        let existing = ["0000000000005", "legacy-id"];
        assert_eq!(next_account_id(5, existing), "0000000000006");
    }

    #[test]
    fn negative_clock_is_clamped() {
        assert_eq!(next_account_id(-5, []), "0000000000000");
    }

    #[test]
    fn generated_ids_sort_in_creation_order() {
        let mut issued: Vec<String> = Vec::new();
        for now in [999, 1_000, 1_000, 5] {
            let id = next_account_id(now, issued.iter().map(String::as_str));
            issued.push(id);
        }
        let mut sorted = issued.clone();
        sorted.sort();
        assert_eq!(issued, sorted);
    }
}
