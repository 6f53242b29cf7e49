//! Filter and sort logic for the parts table, kept DOM-free.

use crate::shared::list_utils::{compare_text, Searchable, Sortable};
use contracts::inventory::PartSummary;
use std::cmp::Ordering;

/// Ad-hoc relevance weighting for the active search text: a part-number match
/// outranks a description match, which outranks any other column. Zero means
/// the row is hidden.
pub fn relevance_score(row: &PartSummary, query: &str) -> u32 {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return 0;
    }
    if row.part_number.to_lowercase().contains(&q) {
        return 5;
    }
    if row.description.to_lowercase().contains(&q) {
        return 4;
    }
    if row.supplier.to_lowercase().contains(&q)
        || row.location.to_lowercase().contains(&q)
        || row.kind.to_lowercase().contains(&q)
    {
        return 2;
    }
    0
}

impl Searchable for PartSummary {
    fn matches_filter(&self, filter: &str) -> bool {
        relevance_score(self, filter) > 0
    }
}

impl Sortable for PartSummary {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "part_number" => compare_text(&self.part_number, &other.part_number),
            "description" => compare_text(&self.description, &other.description),
            "supplier" => compare_text(&self.supplier, &other.supplier),
            "type" => compare_text(&self.kind, &other.kind),
            "location" => compare_text(&self.location, &other.location),
            "quantity" => self.quantity.cmp(&other.quantity),
            _ => Ordering::Equal,
        }
    }
}

/// Rows the table shows for the current query and sort.
///
/// With a query: non-matching rows are dropped, the column sort is applied,
/// then a stable re-sort ranks stronger matches first, so the column order
/// survives within each rank.
pub fn visible_rows(
    rows: &[PartSummary],
    query: &str,
    sort_field: &str,
    ascending: bool,
) -> Vec<PartSummary> {
    let query = query.trim();
    let mut result: Vec<PartSummary> = if query.is_empty() {
        rows.to_vec()
    } else {
        rows.iter()
            .filter(|row| row.matches_filter(query))
            .cloned()
            .collect()
    };

    result.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, sort_field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });

    if !query.is_empty() {
        result.sort_by(|a, b| relevance_score(b, query).cmp(&relevance_score(a, query)));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(part_number: &str, description: &str, quantity: i64) -> PartSummary {
        PartSummary {
            id: 1,
            part_number: part_number.to_string(),
            description: description.to_string(),
            supplier: "Acme".to_string(),
            location: "A1".to_string(),
            quantity,
            kind: "Mechanical".to_string(),
        }
    }

    #[test]
    fn quantity_column_sorts_numerically_both_ways() {
        let rows = vec![part("A", "", 5), part("B", "", 2), part("C", "", 9)];

        let ascending = visible_rows(&rows, "", "quantity", true);
        let order: Vec<&str> = ascending.iter().map(|r| r.part_number.as_str()).collect();
        assert_eq!(order, vec!["B", "A", "C"]);

        let descending = visible_rows(&rows, "", "quantity", false);
        let order: Vec<&str> = descending.iter().map(|r| r.part_number.as_str()).collect();
        assert_eq!(order, vec!["C", "A", "B"]);
    }

    #[test]
    fn text_columns_sort_case_insensitively() {
        let rows = vec![part("b-2", "", 0), part("A-1", "", 0), part("a-0", "", 0)];
        let sorted = visible_rows(&rows, "", "part_number", true);
        let order: Vec<&str> = sorted.iter().map(|r| r.part_number.as_str()).collect();
        assert_eq!(order, vec!["a-0", "A-1", "b-2"]);
    }

    #[test]
    fn part_number_match_outranks_description_match() {
        assert_eq!(relevance_score(&part("BRG-100", "Bearing", 1), "brg"), 5);
        assert_eq!(relevance_score(&part("PN-1", "BRG bearing", 1), "brg"), 4);
        assert_eq!(relevance_score(&part("PN-1", "Bolt", 1), "acme"), 2);
        assert_eq!(relevance_score(&part("PN-1", "Bolt", 1), "widget"), 0);
        assert_eq!(relevance_score(&part("PN-1", "Bolt", 1), ""), 0);
    }

    #[test]
    fn query_hides_non_matching_rows_and_ranks_the_rest() {
        let rows = vec![
            part("PN-1", "bearing housing", 1),
            part("BRG-2", "spacer", 2),
            part("PN-3", "bolt", 3),
        ];
        let visible = visible_rows(&rows, "brg", "part_number", true);
        let order: Vec<&str> = visible.iter().map(|r| r.part_number.as_str()).collect();
        assert_eq!(order, vec!["BRG-2"]);
    }

    #[test]
    fn ranks_group_before_column_order_within_rank() {
        let rows = vec![
            part("Z-1", "ACME fitting", 1),
            part("ACME-9", "spacer", 2),
            part("B-2", "ACME bracket", 3),
        ];
        let visible = visible_rows(&rows, "acme", "part_number", true);
        let order: Vec<&str> = visible.iter().map(|r| r.part_number.as_str()).collect();
        // Part-number rank first, then description matches in column order.
        assert_eq!(order, vec!["ACME-9", "B-2", "Z-1"]);
    }
}
