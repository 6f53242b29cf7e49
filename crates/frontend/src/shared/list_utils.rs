/// Универсальные утилиты для работы со списками (поиск, сортировка, заголовки)
use std::cmp::Ordering;
use std::collections::HashMap;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive three-way compare on trimmed text.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.trim().to_lowercase().cmp(&b.trim().to_lowercase())
}

/// Сортирует список по указанному полю
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    // sort_by is stable: ties keep their previous order.
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Фильтрует список по поисковому запросу
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Состояние сортировки таблицы по клику на заголовок.
///
/// Every column remembers the direction of its own last click, so returning
/// to a column continues from where that column left off instead of starting
/// over at ascending.
#[derive(Clone, Debug, PartialEq)]
pub struct SortState {
    active: String,
    ascending: bool,
    /// Direction each column will use on its next click.
    next: HashMap<String, bool>,
}

impl SortState {
    pub fn new(field: &str, ascending: bool) -> Self {
        let mut next = HashMap::new();
        next.insert(field.to_string(), !ascending);
        Self {
            active: field.to_string(),
            ascending,
            next,
        }
    }

    /// Header click: activate the column in its remembered direction and
    /// queue the reverse for its next click.
    pub fn click(&mut self, field: &str) {
        let ascending = self.next.get(field).copied().unwrap_or(true);
        self.next.insert(field.to_string(), !ascending);
        self.active = field.to_string();
        self.ascending = ascending;
    }

    pub fn field(&self) -> &str {
        &self.active
    }

    pub fn ascending(&self) -> bool {
        self.ascending
    }

    pub fn indicator(&self, field: &str) -> &'static str {
        get_sort_indicator(&self.active, field, self.ascending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str, i64);

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            self.0.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => compare_text(self.0, other.0),
                "quantity" => self.1.cmp(&other.1),
                _ => Ordering::Equal,
            }
        }
    }

    #[test]
    fn sorts_numeric_field_both_ways() {
        let mut rows = vec![Row("A", 5), Row("B", 2), Row("C", 9)];
        sort_list(&mut rows, "quantity", true);
        assert_eq!(rows, vec![Row("B", 2), Row("A", 5), Row("C", 9)]);
        sort_list(&mut rows, "quantity", false);
        assert_eq!(rows, vec![Row("C", 9), Row("A", 5), Row("B", 2)]);
    }

    #[test]
    fn text_compare_ignores_case_and_padding() {
        assert_eq!(compare_text("  alpha ", "ALPHA"), Ordering::Equal);
        assert_eq!(compare_text("alpha", "beta"), Ordering::Less);
    }

    #[test]
    fn ties_keep_prior_order() {
        let mut rows = vec![Row("first", 1), Row("second", 1), Row("third", 1)];
        sort_list(&mut rows, "quantity", true);
        assert_eq!(rows, vec![Row("first", 1), Row("second", 1), Row("third", 1)]);
    }

    #[test]
    fn filter_keeps_matches_only() {
        let rows = vec![Row("bolt", 1), Row("nut", 2), Row("Bolt cutter", 3)];
        let filtered = filter_list(rows.clone(), "bolt");
        assert_eq!(filtered, vec![Row("bolt", 1), Row("Bolt cutter", 3)]);
        assert_eq!(filter_list(rows.clone(), "  "), rows);
    }

    #[test]
    fn sort_indicator_tracks_active_column() {
        assert_eq!(get_sort_indicator("quantity", "quantity", true), " ▲");
        assert_eq!(get_sort_indicator("quantity", "quantity", false), " ▼");
        assert_eq!(get_sort_indicator("quantity", "name", true), " ⇅");
    }

    #[test]
    fn repeated_clicks_toggle_direction() {
        let mut sort = SortState::new("part_number", true);
        sort.click("quantity");
        assert_eq!((sort.field(), sort.ascending()), ("quantity", true));
        sort.click("quantity");
        assert_eq!((sort.field(), sort.ascending()), ("quantity", false));
        sort.click("quantity");
        assert_eq!((sort.field(), sort.ascending()), ("quantity", true));
    }

    #[test]
    fn each_column_keeps_its_own_direction() {
        let mut sort = SortState::new("part_number", true);
        sort.click("quantity");
        sort.click("quantity");
        assert!(!sort.ascending());
        sort.click("name");
        assert_eq!((sort.field(), sort.ascending()), ("name", true));
        // Back to quantity: continues where that column left off.
        sort.click("quantity");
        assert_eq!((sort.field(), sort.ascending()), ("quantity", true));
        sort.click("name");
        assert_eq!((sort.field(), sort.ascending()), ("name", false));
    }

    #[test]
    fn initial_column_reverses_on_first_click() {
        let mut sort = SortState::new("date", false);
        assert_eq!((sort.field(), sort.ascending()), ("date", false));
        assert_eq!(sort.indicator("date"), " ▼");
        sort.click("date");
        assert!(sort.ascending());
    }
}
