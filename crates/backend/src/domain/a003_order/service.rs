//! Заказы только читаются: список с именами клиентов и карточка заказа с НДС.

use contracts::domain::a001_client::aggregate::Client;
use contracts::domain::a003_order::aggregate::Order;
use contracts::domain::common::AggregateRoot;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::shared::data::{CollectionStore, DataStore};
use crate::shared::error::MutationError;
use crate::shared::format::round_money;
use crate::shared::list::Searchable;

/// Подпись вместо имени удалённого клиента
pub const UNKNOWN_CLIENT: &str = "unknown client";

/// Подпись вместо названия удалённого товара
pub const UNKNOWN_PRODUCT: &str = "unknown product";

/// Висячая слабая ссылка. Не ошибка: вместо объекта показывается заглушка.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum IntegrityWarning {
    #[error("order {order_id} references missing client {client_id}")]
    MissingClient { order_id: String, client_id: String },

    #[error("order {order_id} references missing product {product_id}")]
    MissingProduct { order_id: String, product_id: String },
}

/// Строка списка заказов
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderListItem {
    #[serde(flatten)]
    pub order: Order,
    pub client_name: String,
}

/// Поиск по номеру заказа и имени клиента, фильтр по статусу
impl Searchable for OrderListItem {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.order.id.as_str(), self.client_name.as_str()]
    }

    fn equality_field(&self) -> Option<&str> {
        Some(self.order.status.as_str())
    }
}

/// Строка карточки заказа с текущими данными товара
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLineView {
    pub id_produs: String,
    pub nume: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub pret: Decimal,
    pub cantitate: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
}

/// Карточка заказа
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDetails {
    pub order: Order,
    pub client: Option<Client>,
    pub client_name: String,
    pub lines: Vec<OrderLineView>,
    pub item_count: u64,
    /// Сохранённый итог заказа (без НДС)
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub vat: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_with_vat: Decimal,
    pub warnings: Vec<IntegrityWarning>,
}

/// Имя клиента заказа или заглушка, если клиент удалён
pub fn client_name(clients: &CollectionStore<Client>, order: &Order) -> String {
    match clients.get_by_id(&order.id_client) {
        Some(client) => client.nume_companie.clone(),
        None => {
            tracing::warn!(
                "{}",
                IntegrityWarning::MissingClient {
                    order_id: order.id.clone(),
                    client_id: order.id_client.clone(),
                }
            );
            UNKNOWN_CLIENT.to_string()
        }
    }
}

/// Строки списка заказов в порядке коллекции
pub fn list_items(data: &DataStore) -> Vec<OrderListItem> {
    data.orders
        .list_all()
        .iter()
        .map(|order| OrderListItem {
            order: order.clone(),
            client_name: client_name(&data.clients, order),
        })
        .collect()
}

/// НДС с суммы, округлённый до копеек (бань)
pub fn vat_for(amount: Decimal, vat_rate: Decimal) -> Decimal {
    round_money(amount * vat_rate)
}

/// Сумма с НДС; округляется один раз, от неокруглённого НДС
pub fn total_with_vat(amount: Decimal, vat_rate: Decimal) -> Decimal {
    round_money(amount + amount * vat_rate)
}

/// Карточка заказа
pub fn details(
    data: &DataStore,
    order_id: &str,
    vat_rate: Decimal,
) -> Result<OrderDetails, MutationError> {
    let order = data
        .orders
        .get_by_id(order_id)
        .cloned()
        .ok_or_else(|| MutationError::not_found(Order::collection_name(), order_id))?;

    let mut warnings = Vec::new();

    let client = data.clients.get_by_id(&order.id_client).cloned();
    let client_name = match &client {
        Some(c) => c.nume_companie.clone(),
        None => {
            warnings.push(IntegrityWarning::MissingClient {
                order_id: order.id.clone(),
                client_id: order.id_client.clone(),
            });
            UNKNOWN_CLIENT.to_string()
        }
    };

    let lines: Vec<OrderLineView> = order
        .produse
        .iter()
        .map(|line| {
            let (nume, pret) = match data.products.get_by_id(&line.id_produs) {
                Some(p) => (p.nume.clone(), p.pret),
                None => {
                    warnings.push(IntegrityWarning::MissingProduct {
                        order_id: order.id.clone(),
                        product_id: line.id_produs.clone(),
                    });
                    (UNKNOWN_PRODUCT.to_string(), Decimal::ZERO)
                }
            };
            OrderLineView {
                id_produs: line.id_produs.clone(),
                nume,
                pret,
                cantitate: line.cantitate,
                subtotal: pret * Decimal::from(line.cantitate),
            }
        })
        .collect();

    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    Ok(OrderDetails {
        item_count: order.item_count(),
        subtotal: order.total,
        vat: vat_for(order.total, vat_rate),
        total_with_vat: total_with_vat(order.total, vat_rate),
        client,
        client_name,
        lines,
        warnings,
        order,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::fixture;
    use crate::shared::list::filter_list;
    use contracts::shared::list_query::FilterCriteria;
    use rust_decimal_macros::dec;

    #[test]
    fn test_vat_rounding() {
        assert_eq!(vat_for(dec!(2299.85), dec!(0.19)), dec!(436.97));
        assert_eq!(total_with_vat(dec!(2299.85), dec!(0.19)), dec!(2736.82));
        assert_eq!(vat_for(dec!(999.98), dec!(0.19)), dec!(190.00));
    }

    #[test]
    fn test_details_resolves_lines() {
        let data = fixture::load_embedded().unwrap();
        let d = details(&data, "o1", dec!(0.19)).unwrap();
        assert_eq!(d.client_name, "Alpha Retail");
        assert_eq!(d.item_count, 15);
        assert_eq!(d.lines.len(), 2);
        assert_eq!(d.lines[0].subtotal, dec!(1299.90));
        assert_eq!(d.lines[1].subtotal, dec!(999.95));
        assert_eq!(d.subtotal, dec!(2299.85));
        assert!(d.warnings.is_empty());
    }

    #[test]
    fn test_details_with_dangling_references() {
        let mut data = fixture::load_embedded().unwrap();
        data.clients.remove("c3");
        data.products.remove("p3");
        let d = details(&data, "o3", dec!(0.19)).unwrap();
        assert_eq!(d.client_name, UNKNOWN_CLIENT);
        assert!(d.client.is_none());
        assert_eq!(d.lines[1].nume, UNKNOWN_PRODUCT);
        assert_eq!(d.lines[1].subtotal, Decimal::ZERO);
        assert_eq!(d.warnings.len(), 2);
        // сохранённый итог не пересчитывается
        assert_eq!(d.subtotal, dec!(2799.79));
    }

    #[test]
    fn test_details_missing_order() {
        let data = fixture::load_embedded().unwrap();
        assert_eq!(
            details(&data, "o404", dec!(0.19)),
            Err(MutationError::not_found("comenzi", "o404"))
        );
    }

    #[test]
    fn test_list_search_by_client_and_status() {
        let data = fixture::load_embedded().unwrap();
        let items = list_items(&data);

        let found = filter_list(&items, &FilterCriteria::search("beta"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].order.id, "o2");

        let found = filter_list(&items, &FilterCriteria::new("o", Some("Livrată".into())));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].order.id, "o3");
    }
}
