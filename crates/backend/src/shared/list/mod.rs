//! Универсальные утилиты для списков: поиск, фильтр на равенство, пагинация

pub mod filter;
pub mod paginate;
pub mod state;

pub use filter::{filter_list, Searchable};
pub use paginate::paginate;
pub use state::ListState;
