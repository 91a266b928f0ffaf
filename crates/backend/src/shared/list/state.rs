use contracts::shared::list_query::{
    FilterCriteria, ListError, Page, PageRequest, DEFAULT_PAGE_SIZE,
};

use super::filter::{filter_list, Searchable};
use super::paginate::paginate;

/// Состояние списка на странице (фильтры + пагинация)
///
/// Любое изменение фильтра или размера страницы возвращает на первую страницу.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListState {
    // filters
    q: String,
    equals: Option<String>,

    // pagination
    page: usize,
    page_size: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            q: String::new(),
            equals: None,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListState {
    pub fn with_page_size(page_size: usize) -> Result<Self, ListError> {
        let mut state = Self::default();
        state.set_page_size(page_size)?;
        Ok(state)
    }

    pub fn q(&self) -> &str {
        &self.q
    }

    pub fn equals(&self) -> Option<&str> {
        self.equals.as_deref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_query(&mut self, q: impl Into<String>) {
        let q = q.into();
        if q != self.q {
            self.q = q;
            self.page = 0;
        }
    }

    pub fn set_equals(&mut self, equals: Option<String>) {
        if equals != self.equals {
            self.equals = equals;
            self.page = 0;
        }
    }

    /// Сбросить поиск и фильтр
    pub fn clear_filters(&mut self) {
        self.set_query(String::new());
        self.set_equals(None);
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), ListError> {
        if page_size == 0 {
            return Err(ListError::InvalidPageSize(page_size));
        }
        if page_size != self.page_size {
            self.page_size = page_size;
            self.page = 0;
        }
        Ok(())
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(self.q.clone(), self.equals.clone())
    }

    pub fn page_request(&self) -> PageRequest {
        // page_size > 0 гарантирован set_page_size
        PageRequest::new(self.page, self.page_size).unwrap_or_default()
    }

    /// Фильтр, затем пагинация
    pub fn apply<T: Searchable + Clone>(&self, items: &[T]) -> Page<T> {
        paginate(filter_list(items, &self.criteria()), self.page_request())
    }
}
