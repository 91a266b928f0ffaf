use contracts::domain::a001_client::aggregate::{Client, ClientDto, ClientPatch};
use contracts::domain::a003_order::aggregate::Order;
use contracts::domain::common::AggregateRoot;

use crate::shared::data::CollectionStore;
use crate::shared::error::MutationError;
use crate::shared::list::Searchable;

/// Поиск по названию компании, контактному лицу и email
impl Searchable for Client {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.nume_companie.as_str(),
            self.persoana_contact.as_str(),
            self.email.as_str(),
        ]
    }
}

/// Создание нового клиента
pub fn create(store: &mut CollectionStore<Client>, dto: ClientDto) -> Result<Client, MutationError> {
    let aggregate = Client::new_for_insert(store.next_id(), dto);

    // Валидация до записи: при ошибке коллекция не меняется
    aggregate.validate().map_err(|e| {
        tracing::warn!("Client validation failed: {}", e);
        e
    })?;

    store.insert(aggregate.clone());
    tracing::info!(
        "Client {} '{}' created",
        aggregate.id,
        aggregate.description()
    );
    Ok(aggregate)
}

/// Обновление существующего клиента (слияние по ID)
pub fn update(
    store: &mut CollectionStore<Client>,
    id: &str,
    patch: &ClientPatch,
) -> Result<Client, MutationError> {
    let mut aggregate = store
        .get_by_id(id)
        .cloned()
        .ok_or_else(|| MutationError::not_found(Client::collection_name(), id))?;

    aggregate.apply(patch);
    aggregate.validate()?;

    store.replace(aggregate.clone());
    tracing::info!("Client {} updated", id);
    Ok(aggregate)
}

/// Удаление клиента
///
/// Заказы, ссылающиеся на клиента, не трогаем: их ссылка остаётся висячей.
pub fn delete(store: &mut CollectionStore<Client>, id: &str) -> Result<(), MutationError> {
    let removed = store
        .remove(id)
        .ok_or_else(|| MutationError::not_found(Client::collection_name(), id))?;
    tracing::info!("Client {} '{}' deleted", removed.id, removed.description());
    Ok(())
}

/// Получение клиента по ID
pub fn get_by_id<'a>(store: &'a CollectionStore<Client>, id: &str) -> Option<&'a Client> {
    store.get_by_id(id)
}

/// Получение списка всех клиентов
pub fn list_all(store: &CollectionStore<Client>) -> &[Client] {
    store.list_all()
}

/// История заказов клиента
pub fn orders_for_client<'a>(orders: &'a CollectionStore<Order>, client_id: &str) -> Vec<&'a Order> {
    orders
        .list_all()
        .iter()
        .filter(|o| o.id_client == client_id)
        .collect()
}
