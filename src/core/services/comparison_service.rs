use chrono::Datelike;

use crate::domain::{CategoryYearPair, ExpenseRecord, ExpenseType};

/// Categories shown in the year-over-year comparison, in display order.
pub const COMPARED_CATEGORIES: [ExpenseType; 4] = [
    ExpenseType::Fuel,
    ExpenseType::Maintenance,
    ExpenseType::Repair,
    ExpenseType::Insurance,
];

pub struct ComparisonService;

impl ComparisonService {
    /// Spend per compared category in `year` and the year before, zero-filled.
    pub fn yearly(expenses: &[ExpenseRecord], year: i32) -> Vec<CategoryYearPair> {
        if expenses.is_empty() {
            return Vec::new();
        }

        COMPARED_CATEGORIES
            .iter()
            .map(|category| {
                let mut pair = CategoryYearPair {
                    category: *category,
                    name: category.label().to_string(),
                    current_year: 0.0,
                    previous_year: 0.0,
                };
                for expense in expenses.iter().filter(|e| e.expense_type == *category) {
                    match expense.date.year() {
                        y if y == year => pair.current_year += expense.amount,
                        y if y == year - 1 => pair.previous_year += expense.amount,
                        _ => {}
                    }
                }
                pair
            })
            .collect()
    }
}
