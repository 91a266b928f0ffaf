use contracts::domain::a001_client::aggregate::Client;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a003_order::aggregate::Order;
use contracts::domain::common::AggregateRoot;
use uuid::Uuid;

/// Хранилище одной коллекции в памяти
///
/// Записи хранятся в порядке вставки; именно его сохраняют фильтр и пагинация.
/// Уникальность ID поддерживается вызывающим кодом (сервисы генерируют ID через
/// [`CollectionStore::next_id`]).
#[derive(Debug, Clone)]
pub struct CollectionStore<T> {
    items: Vec<T>,
}

impl<T> Default for CollectionStore<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: AggregateRoot> CollectionStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn list_all(&self) -> &[T] {
        &self.items
    }

    pub fn get_by_id(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Добавить запись в конец коллекции
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
    }

    /// Заменить запись с тем же ID; возвращает false, если такой записи нет
    pub fn replace(&mut self, item: T) -> bool {
        match self.position(item.id()) {
            Some(idx) => {
                self.items[idx] = item;
                true
            }
            None => false,
        }
    }

    /// Удалить запись по ID
    pub fn remove(&mut self, id: &str) -> Option<T> {
        self.position(id).map(|idx| self.items.remove(idx))
    }

    /// Новый ID, которого ещё нет в коллекции: "{prefix}-{uuid}"
    pub fn next_id(&self) -> String {
        loop {
            let candidate = format!("{}-{}", T::id_prefix(), Uuid::new_v4().simple());
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

/// Все коллекции текущей сессии
///
/// Передаётся по ссылке в фильтры, агрегатор и сервисы изменения данных.
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    pub clients: CollectionStore<Client>,
    pub products: CollectionStore<Product>,
    pub orders: CollectionStore<Order>,
}

impl DataStore {
    pub fn new(clients: Vec<Client>, products: Vec<Product>, orders: Vec<Order>) -> Self {
        Self {
            clients: CollectionStore::from_items(clients),
            products: CollectionStore::from_items(products),
            orders: CollectionStore::from_items(orders),
        }
    }
}
