use std::collections::BTreeMap;

use crate::domain::{CategoryShare, ExpenseRecord, ExpenseType};

/// Buckets spend by expense category for distribution views.
pub struct CategoryService;

impl CategoryService {
    /// Total amount per category over all expenses, in category declaration order.
    ///
    /// Categories with no expenses are omitted; unrecognised types share the
    /// `Unknown` bucket.
    pub fn distribution(expenses: &[ExpenseRecord]) -> Vec<CategoryShare> {
        Self::totals_by_category(expenses)
            .into_iter()
            .map(|(category, value)| CategoryShare::new(category, value))
            .collect()
    }

    pub fn totals_by_category(expenses: &[ExpenseRecord]) -> BTreeMap<ExpenseType, f64> {
        let mut totals = BTreeMap::new();
        for expense in expenses {
            *totals.entry(expense.expense_type).or_insert(0.0) += expense.amount;
        }
        totals
    }
}
