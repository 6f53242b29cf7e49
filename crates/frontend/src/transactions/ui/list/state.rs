//! Filter and sort behavior for the transaction history table.

use crate::shared::list_utils::{compare_text, Searchable, Sortable};
use contracts::transactions::TransactionRow;
use std::cmp::Ordering;

impl Searchable for TransactionRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let f = filter.to_lowercase();
        self.part_number.to_lowercase().contains(&f)
            || self.description.to_lowercase().contains(&f)
            || self.transaction_type.as_str().to_lowercase().contains(&f)
            || self.user_id.to_lowercase().contains(&f)
            || self
                .notes
                .as_deref()
                .map(|n| n.to_lowercase().contains(&f))
                .unwrap_or(false)
    }
}

impl Sortable for TransactionRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            // ISO datetimes order correctly as text.
            "date" => self.transaction_date.cmp(&other.transaction_date),
            "part_number" => compare_text(&self.part_number, &other.part_number),
            "type" => self
                .transaction_type
                .as_str()
                .cmp(other.transaction_type.as_str()),
            "quantity" => self.quantity.cmp(&other.quantity),
            "user" => compare_text(&self.user_id, &other.user_id),
            _ => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{filter_list, sort_list};
    use contracts::inventory::TransactionKind;

    fn row(date: &str, part: &str, kind: TransactionKind, quantity: i64) -> TransactionRow {
        TransactionRow {
            transaction_date: date.to_string(),
            part_number: part.to_string(),
            description: "Bearing".to_string(),
            transaction_type: kind,
            quantity,
            previous_quantity: 10,
            new_quantity: 10 + quantity,
            user_id: "system".to_string(),
            notes: None,
        }
    }

    #[test]
    fn newest_first_is_a_descending_date_sort() {
        let mut rows = vec![
            row("2026-03-01T08:00:00Z", "A", TransactionKind::In, 1),
            row("2026-03-03T08:00:00Z", "B", TransactionKind::Out, 2),
            row("2026-03-02T08:00:00Z", "C", TransactionKind::Adjust, 3),
        ];
        sort_list(&mut rows, "date", false);
        let order: Vec<&str> = rows.iter().map(|r| r.part_number.as_str()).collect();
        assert_eq!(order, vec!["B", "C", "A"]);
    }

    #[test]
    fn quantity_sorts_numerically() {
        let mut rows = vec![
            row("2026-03-01T08:00:00Z", "A", TransactionKind::In, 12),
            row("2026-03-01T08:00:00Z", "B", TransactionKind::In, 3),
        ];
        sort_list(&mut rows, "quantity", true);
        assert_eq!(rows[0].part_number, "B");
    }

    #[test]
    fn filter_matches_part_number_and_type() {
        let rows = vec![
            row("2026-03-01T08:00:00Z", "BRG-1", TransactionKind::In, 1),
            row("2026-03-01T08:00:00Z", "BLT-2", TransactionKind::Out, 2),
        ];
        assert_eq!(filter_list(rows.clone(), "brg").len(), 1);
        assert_eq!(filter_list(rows.clone(), "out").len(), 1);
        assert_eq!(filter_list(rows, "missing").len(), 0);
    }
}
