//! Natural-language insights derived from the issue tally.

use crate::models::IssueTally;

/// One line per non-zero counter, in reporting priority order.
pub fn generate_insights(tally: &IssueTally) -> Vec<String> {
    tally
        .non_zero()
        .map(|(kind, count)| format!("{} {}", count, kind.insight_phrase()))
        .collect()
}
