//! Параметры списков: критерии фильтра, запрос страницы и результат пагинации.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Размеры страницы, предлагаемые в UI
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];

/// Размер страницы по умолчанию
pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("page size must be a positive integer, got {0}")]
    InvalidPageSize(usize),
}

/// Критерии фильтра списка (не сохраняются)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Поисковая строка; пустая строка соответствует всем записям
    #[serde(default)]
    pub q: String,
    /// Фильтр на равенство (статус/категория); `None` или "" означает без фильтра
    #[serde(default)]
    pub equals: Option<String>,
}

impl FilterCriteria {
    pub fn new(q: impl Into<String>, equals: Option<String>) -> Self {
        Self {
            q: q.into(),
            equals,
        }
    }

    /// Только поисковая строка
    pub fn search(q: impl Into<String>) -> Self {
        Self::new(q, None)
    }

    /// Значение фильтра на равенство, если оно задано и не пустое
    pub fn equality_value(&self) -> Option<&str> {
        self.equals.as_deref().filter(|v| !v.is_empty())
    }
}

/// Запрос страницы: номер страницы с нуля и положительный размер
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Result<Self, ListError> {
        if page_size == 0 {
            return Err(ListError::InvalidPageSize(page_size));
        }
        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Смещение первой записи страницы
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Видимая страница списка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Количество записей после фильтра (не на странице)
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_rejects_zero_size() {
        assert_eq!(PageRequest::new(0, 0), Err(ListError::InvalidPageSize(0)));
        let req = PageRequest::new(3, 10).unwrap();
        assert_eq!(req.offset(), 30);
    }

    #[test]
    fn test_equality_value_ignores_empty() {
        assert_eq!(FilterCriteria::new("", Some(String::new())).equality_value(), None);
        assert_eq!(
            FilterCriteria::new("", Some("Geci".into())).equality_value(),
            Some("Geci")
        );
    }
}
