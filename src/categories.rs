//! Category partitioning and legend discovery.
//!
//! Groups every course occurrence by category, then by plan, keeping
//! first-seen order at both levels and display order inside each bucket.

use indexmap::IndexMap;

use crate::ident::{normalize, place, CategoryKey, Placement};
use crate::model::{CategoryEntry, Plan};

/// Occurrences of one category, bucketed by normalized plan name.
pub type PlanBuckets<'a> = IndexMap<String, Vec<Placement<'a>>>;

#[derive(Debug, Default)]
pub struct CategoryPartition<'a> {
    buckets: IndexMap<CategoryKey, PlanBuckets<'a>>,
}

impl<'a> CategoryPartition<'a> {
    /// Partition all plans: plans in order, terms in order, courses in order.
    pub fn build(plans: &'a [Plan]) -> Self {
        let mut buckets: IndexMap<CategoryKey, PlanBuckets<'a>> = IndexMap::new();
        for plan in plans {
            let plan_key = normalize(&plan.name);
            for placement in place(plan) {
                buckets
                    .entry(placement.category())
                    .or_default()
                    .entry(plan_key.clone())
                    .or_default()
                    .push(placement);
            }
        }
        Self { buckets }
    }

    /// Categories in first-seen order, including the empty category if any
    /// course has none.
    pub fn categories(&self) -> impl Iterator<Item = (&CategoryKey, &PlanBuckets<'a>)> {
        self.buckets.iter()
    }

    /// Plans that hold at least one course of `category`, in first-seen order.
    pub fn plans_of(&self, category: &CategoryKey) -> Vec<&str> {
        self.buckets
            .get(category)
            .map(|plans| plans.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Occurrences of `category` in `plan_key`, in display order.
    pub fn courses(&self, category: &CategoryKey, plan_key: &str) -> &[Placement<'a>] {
        self.buckets
            .get(category)
            .and_then(|plans| plans.get(plan_key))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

// ─── Legend ──────────────────────────────────────────────────────────────────

/// One legend button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    pub key: CategoryKey,
    /// Button caption.
    pub label: String,
    /// CSS colour, may be empty.
    pub color: String,
}

impl LegendEntry {
    pub fn button_id(&self) -> &str {
        self.key.button_id()
    }
}

/// Legend buttons: the category table in order, then any category used by a
/// course but missing from the table. The empty category never gets one.
pub fn legend_entries(table: &[CategoryEntry], partition: &CategoryPartition<'_>) -> Vec<LegendEntry> {
    let mut entries: IndexMap<CategoryKey, LegendEntry> = IndexMap::new();
    for row in table {
        let key = CategoryKey::new(&row.name);
        if key.is_empty() || entries.contains_key(&key) {
            continue;
        }
        entries.insert(
            key.clone(),
            LegendEntry {
                key,
                label: row.name.trim().to_string(),
                color: row.color.clone(),
            },
        );
    }
    for (key, plans) in partition.categories() {
        if key.is_empty() || entries.contains_key(key) {
            continue;
        }
        let label = plans
            .values()
            .flatten()
            .next()
            .map(|p| p.course.category.trim().to_string())
            .unwrap_or_else(|| key.as_str().to_string());
        entries.insert(
            key.clone(),
            LegendEntry {
                key: key.clone(),
                label,
                color: String::new(),
            },
        );
    }
    entries.into_values().collect()
}

#[cfg(test)]
#[path = "../tests/rust/test_categories.rs"]
mod tests;
