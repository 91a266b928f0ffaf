use contracts::domain::a002_product::aggregate::{Product, ProductDto, ProductPatch};
use contracts::domain::common::AggregateRoot;

use crate::shared::data::CollectionStore;
use crate::shared::error::MutationError;
use crate::shared::list::Searchable;

/// Поиск по названию и описанию, фильтр по категории
impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.nume.as_str(), self.descriere.as_str()]
    }

    fn equality_field(&self) -> Option<&str> {
        Some(self.categorie.as_str())
    }
}

/// Создание нового товара
pub fn create(
    store: &mut CollectionStore<Product>,
    dto: ProductDto,
) -> Result<Product, MutationError> {
    let aggregate = Product::new_for_insert(store.next_id(), dto).map_err(|e| {
        tracing::warn!("Product validation failed: {}", e);
        e
    })?;

    store.insert(aggregate.clone());
    tracing::info!("Product {} '{}' created", aggregate.id, aggregate.description());
    Ok(aggregate)
}

/// Обновление существующего товара (слияние по ID)
pub fn update(
    store: &mut CollectionStore<Product>,
    id: &str,
    patch: &ProductPatch,
) -> Result<Product, MutationError> {
    let mut aggregate = store
        .get_by_id(id)
        .cloned()
        .ok_or_else(|| MutationError::not_found(Product::collection_name(), id))?;

    aggregate.apply(patch);
    aggregate.validate()?;

    store.replace(aggregate.clone());
    tracing::info!("Product {} updated", id);
    Ok(aggregate)
}

/// Удаление товара; строки заказов со ссылкой на него остаются
pub fn delete(store: &mut CollectionStore<Product>, id: &str) -> Result<(), MutationError> {
    let removed = store
        .remove(id)
        .ok_or_else(|| MutationError::not_found(Product::collection_name(), id))?;
    tracing::info!("Product {} '{}' deleted", removed.id, removed.description());
    Ok(())
}

pub fn get_by_id<'a>(store: &'a CollectionStore<Product>, id: &str) -> Option<&'a Product> {
    store.get_by_id(id)
}

pub fn list_all(store: &CollectionStore<Product>) -> &[Product] {
    store.list_all()
}
