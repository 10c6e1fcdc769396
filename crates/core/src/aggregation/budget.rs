//! Budget sums per category and type within each calendar month.

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;
use serde::Serialize;

use super::RecordAggregator;
use crate::budget::{BudgetEntry, BudgetEntryType};

/// Sum of one (category, type, month, year) bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetBucket {
    /// Category.
    pub category: String,
    /// Calendar month of `createdAt`, 1-12.
    pub month: u32,
    /// Calendar year of `createdAt`.
    pub year: i32,
    /// Sum of amounts in the bucket.
    pub total_amount: Decimal,
}

/// All buckets of one entry type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetTypeGroup {
    /// Income or expense.
    #[serde(rename = "type")]
    pub entry_type: BudgetEntryType,
    /// Sum over all buckets.
    pub total: Decimal,
    /// Buckets ordered by year, month and category.
    pub details: Vec<BudgetBucket>,
}

impl RecordAggregator {
    /// Buckets entries by category, type and creation month, then groups the buckets by type.
    #[must_use]
    pub fn budgets(entries: &[BudgetEntry]) -> Vec<BudgetTypeGroup> {
        let mut buckets: BTreeMap<(BudgetEntryType, i32, u32, &str), Decimal> = BTreeMap::new();
        for entry in entries {
            let created = entry.created_at.date_naive();
            *buckets
                .entry((
                    entry.entry_type,
                    created.year(),
                    created.month(),
                    entry.category.as_str(),
                ))
                .or_default() += entry.amount;
        }

        let mut groups: Vec<BudgetTypeGroup> = Vec::new();
        for ((entry_type, year, month, category), total_amount) in buckets {
            let bucket = BudgetBucket {
                category: category.to_string(),
                month,
                year,
                total_amount,
            };
            match groups.last_mut() {
                Some(group) if group.entry_type == entry_type => {
                    group.total += total_amount;
                    group.details.push(bucket);
                }
                _ => groups.push(BudgetTypeGroup {
                    entry_type,
                    total: total_amount,
                    details: vec![bucket],
                }),
            }
        }
        groups
    }
}
