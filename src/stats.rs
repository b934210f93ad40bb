// 📊 Reign Statistics - Aggregators over the monarch list
// Three independent reductions plus the report that bundles them
//
// Tie policy (all aggregators): first occurrence in input order wins

use crate::monarch::Monarch;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

// ============================================================================
// REIGN RESULT
// ============================================================================

/// Reign - who (monarch or house) held the throne and for how many years
///
/// Displays as `"<holder> (<years> years)"`. The default is `("", 0)`.
/// Years are i64: a house total can exceed any single i32 reign.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reign {
    pub holder: String,
    pub years: i64,
}

impl Reign {
    pub fn new(holder: &str, years: i64) -> Self {
        Reign {
            holder: holder.to_string(),
            years,
        }
    }
}

impl fmt::Display for Reign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} years)", self.holder, self.years)
    }
}

/// Pick the largest value, keeping the earliest entry on ties
fn first_max<'a, K, V, I>(entries: I) -> Option<(&'a K, &'a V)>
where
    K: 'a,
    V: Ord + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    entries.into_iter().fold(None, |best, entry| match best {
        Some(current) if entry.1 <= current.1 => Some(current),
        _ => Some(entry),
    })
}

// ============================================================================
// AGGREGATORS
// ============================================================================

/// Monarch with the longest individual reign
///
/// Monarchs are keyed by name. A later monarch with the same name overwrites
/// the earlier reign length but keeps the earlier position.
pub fn longest_reigning_monarch(monarchs: &[Monarch]) -> Reign {
    let mut by_name: IndexMap<&str, i64> = IndexMap::new();
    for monarch in monarchs {
        by_name.insert(monarch.name_or_empty(), i64::from(monarch.reign_length()));
    }

    first_max(by_name.iter())
        .map(|(name, years)| Reign::new(name, *years))
        .unwrap_or_default()
}

/// House with the longest cumulative reign
pub fn longest_reigning_house(monarchs: &[Monarch]) -> Reign {
    let mut by_house: IndexMap<&str, i64> = IndexMap::new();
    for monarch in monarchs {
        let years = i64::from(monarch.reign_length());
        *by_house.entry(monarch.house_or_empty()).or_insert(0) += years;
    }

    first_max(by_house.iter())
        .map(|(house, years)| Reign::new(house, *years))
        .unwrap_or_default()
}

/// Most common first name, or "" when no monarch has a name
pub fn most_common_first_name(monarchs: &[Monarch]) -> String {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for first_name in monarchs.iter().filter_map(Monarch::first_name) {
        *counts.entry(first_name).or_insert(0) += 1;
    }

    first_max(counts.iter())
        .map(|(name, _)| name.to_string())
        .unwrap_or_default()
}

// ============================================================================
// REPORT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonarchReport {
    pub monarch_count: usize,
    pub longest_reigning_monarch: Reign,
    pub longest_reigning_house: Reign,
    pub most_common_first_name: String,
}

impl MonarchReport {
    /// Run all three aggregators over the same list
    pub fn compute(monarchs: &[Monarch]) -> Self {
        MonarchReport {
            monarch_count: monarchs.len(),
            longest_reigning_monarch: longest_reigning_monarch(monarchs),
            longest_reigning_house: longest_reigning_house(monarchs),
            most_common_first_name: most_common_first_name(monarchs),
        }
    }

    /// Console text: question, answer, blank line, for each statistic
    pub fn render(&self) -> String {
        let answers = [
            (
                "How many monarchs are there in the list?",
                self.monarch_count.to_string(),
            ),
            (
                "Which monarch ruled the longest (and for how long)?",
                self.longest_reigning_monarch.to_string(),
            ),
            (
                "Which house ruled the longest (and for how long)?",
                self.longest_reigning_house.to_string(),
            ),
            (
                "What was the most common first name?",
                self.most_common_first_name.clone(),
            ),
        ];

        answers
            .iter()
            .map(|(question, answer)| format!("{}\n{}\n\n", question, answer))
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
