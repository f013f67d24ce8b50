//! Weighted-sum scoring.

use crate::models::Issue;

/// Compute the quality score for a set of issues.
///
/// Starts from 100 and subtracts a fixed penalty per issue by severity
/// (High 15, Medium 7, Low 2), floored at 0. A pure function of the
/// issue multiset: no other signal (file count, PR size, request
/// history) affects the result.
pub fn score(issues: &[Issue]) -> u8 {
    let penalty: u32 = issues.iter().map(|i| i.severity.penalty()).sum();
    100u32.saturating_sub(penalty) as u8
}
