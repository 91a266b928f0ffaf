use contracts::shared::list_query::FilterCriteria;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Текстовые поля, по которым идёт поиск по подстроке
    fn search_fields(&self) -> Vec<&str>;

    /// Поле для фильтра на равенство (статус/категория).
    /// `None`: у списка нет такого фильтра, и он не применяется.
    fn equality_field(&self) -> Option<&str> {
        None
    }

    /// Проверяет, соответствует ли объект поисковому запросу (без учёта регистра)
    fn matches_filter(&self, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        let needle = filter.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Проверяет точное совпадение поля фильтра на равенство
    fn matches_equality(&self, expected: Option<&str>) -> bool {
        match (expected, self.equality_field()) {
            (None, _) | (_, None) => true,
            (Some(expected), Some(actual)) => actual == expected,
        }
    }
}

/// Фильтрует список по критериям
///
/// Сначала поисковая строка, затем фильтр на равенство. Относительный порядок
/// записей сохраняется.
pub fn filter_list<T: Searchable + Clone>(items: &[T], criteria: &FilterCriteria) -> Vec<T> {
    let expected = criteria.equality_value();
    items
        .iter()
        .filter(|item| item.matches_filter(&criteria.q))
        .filter(|item| item.matches_equality(expected))
        .cloned()
        .collect()
}
