//! Duplicate detection for statement imports
//!
//! Bank statements regularly overlap (the user re-downloads a period they
//! already imported), so every parsed candidate is checked against the
//! stored transactions before commit. A candidate is a duplicate of an
//! existing transaction when all three hold:
//!
//! 1. amounts differ by at most one paisa
//! 2. both fall on the same calendar day
//! 3. one description contains the other, case- and whitespace-insensitive
//!
//! A candidate without a resolvable date is never a duplicate.

use crate::models::{StatementCandidate, Transaction};

/// Check whether a candidate matches one existing transaction
pub fn is_duplicate_of(candidate: &StatementCandidate, existing: &Transaction) -> bool {
    if (existing.amount.paise() - candidate.amount.paise()).abs() > 1 {
        return false;
    }

    let candidate_date = match candidate.date {
        Some(date) => date,
        None => return false,
    };
    if existing.date.date() != candidate_date.date() {
        return false;
    }

    let candidate_desc = candidate.description.trim().to_lowercase();
    let existing_desc = existing.description.trim().to_lowercase();
    existing_desc.contains(&candidate_desc) || candidate_desc.contains(&existing_desc)
}

/// Flag every candidate that matches any existing transaction
///
/// Flags are assigned, not accumulated, so re-running over the same inputs
/// yields the same result.
pub fn mark_duplicates(candidates: &mut [StatementCandidate], existing: &[Transaction]) {
    for candidate in candidates.iter_mut() {
        candidate.is_duplicate = existing.iter().any(|txn| is_duplicate_of(candidate, txn));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, TransactionKind};
    use chrono::NaiveDate;

    fn existing(description: &str, paise: i64, y: i32, m: u32, d: u32) -> Transaction {
        Transaction::new(
            description,
            Amount::from_paise(paise),
            TransactionKind::Expense,
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
        )
    }

    fn candidate(description: &str, paise: i64, y: i32, m: u32, d: u32) -> StatementCandidate {
        let mut c = StatementCandidate::new(
            description,
            Amount::from_paise(paise),
            TransactionKind::Expense,
        );
        c.date = Some(
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        );
        c
    }

    #[test]
    fn test_exact_match_is_duplicate() {
        let txn = existing("UPI-SWIGGY-BLR", 25000, 2025, 8, 14);
        let cand = candidate("UPI-SWIGGY-BLR", 25000, 2025, 8, 14);
        assert!(is_duplicate_of(&cand, &txn));
    }

    #[test]
    fn test_one_paisa_tolerance() {
        let txn = existing("UPI-SWIGGY-BLR", 25000, 2025, 8, 14);

        let within = candidate("UPI-SWIGGY-BLR", 25001, 2025, 8, 14);
        assert!(is_duplicate_of(&within, &txn));

        let outside = candidate("UPI-SWIGGY-BLR", 25002, 2025, 8, 14);
        assert!(!is_duplicate_of(&outside, &txn));
    }

    #[test]
    fn test_time_of_day_ignored() {
        // Fixture dates differ in time but share the calendar day
        let txn = existing("UPI-SWIGGY-BLR", 25000, 2025, 8, 14);
        let cand = candidate("UPI-SWIGGY-BLR", 25000, 2025, 8, 14);
        assert!(is_duplicate_of(&cand, &txn));
    }

    #[test]
    fn test_different_day_not_duplicate() {
        let txn = existing("UPI-SWIGGY-BLR", 25000, 2025, 8, 14);
        let cand = candidate("UPI-SWIGGY-BLR", 25000, 2025, 8, 15);
        assert!(!is_duplicate_of(&cand, &txn));
    }

    #[test]
    fn test_missing_date_fails_closed() {
        let txn = existing("UPI-SWIGGY-BLR", 25000, 2025, 8, 14);
        let mut cand = candidate("UPI-SWIGGY-BLR", 25000, 2025, 8, 14);
        cand.date = None;
        assert!(!is_duplicate_of(&cand, &txn));
    }

    #[test]
    fn test_substring_match_both_directions() {
        let txn = existing("UPI-SWIGGY-BLR-ORDER-8812", 25000, 2025, 8, 14);

        // Candidate shorter than existing
        let shorter = candidate("swiggy-blr", 25000, 2025, 8, 14);
        assert!(is_duplicate_of(&shorter, &txn));

        // Candidate longer than existing
        let txn_short = existing("SWIGGY", 25000, 2025, 8, 14);
        let longer = candidate("UPI-SWIGGY-BLR-ORDER-8812", 25000, 2025, 8, 14);
        assert!(is_duplicate_of(&longer, &txn_short));
    }

    #[test]
    fn test_unrelated_description_not_duplicate() {
        let txn = existing("UPI-SWIGGY-BLR", 25000, 2025, 8, 14);
        let cand = candidate("UPI-ZOMATO-BLR", 25000, 2025, 8, 14);
        assert!(!is_duplicate_of(&cand, &txn));
    }

    #[test]
    fn test_whitespace_and_case_insensitive() {
        let txn = existing("  UPI-Swiggy-BLR  ", 25000, 2025, 8, 14);
        let cand = candidate("upi-swiggy-blr", 25000, 2025, 8, 14);
        assert!(is_duplicate_of(&cand, &txn));
    }

    #[test]
    fn test_mark_duplicates_any_existing() {
        let existing_txns = vec![
            existing("UPI-SWIGGY-BLR", 25000, 2025, 8, 14),
            existing("UPI-IRCTC", 120000, 2025, 8, 10),
        ];

        let mut candidates = vec![
            candidate("UPI-IRCTC", 120000, 2025, 8, 10),
            candidate("UPI-AMAZON", 99900, 2025, 8, 12),
        ];

        mark_duplicates(&mut candidates, &existing_txns);

        assert!(candidates[0].is_duplicate);
        assert!(!candidates[1].is_duplicate);
    }

    #[test]
    fn test_mark_duplicates_idempotent() {
        let existing_txns = vec![existing("UPI-SWIGGY-BLR", 25000, 2025, 8, 14)];
        let mut candidates = vec![
            candidate("UPI-SWIGGY-BLR", 25000, 2025, 8, 14),
            candidate("UPI-AMAZON", 99900, 2025, 8, 12),
        ];

        mark_duplicates(&mut candidates, &existing_txns);
        let first: Vec<bool> = candidates.iter().map(|c| c.is_duplicate).collect();

        mark_duplicates(&mut candidates, &existing_txns);
        let second: Vec<bool> = candidates.iter().map(|c| c.is_duplicate).collect();

        assert_eq!(first, second);
        assert_eq!(first, vec![true, false]);
    }

    #[test]
    fn test_stale_flag_cleared_when_existing_removed() {
        let mut candidates = vec![candidate("UPI-SWIGGY-BLR", 25000, 2025, 8, 14)];
        candidates[0].is_duplicate = true;

        mark_duplicates(&mut candidates, &[]);
        assert!(!candidates[0].is_duplicate);
    }
}
