use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::common::AggregateRoot;
use crate::enums::OrderStatus;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Заказ
///
/// `id_client` и `id_produs` являются слабыми ссылками: клиент или товар могут быть удалены,
/// заказ при этом остаётся. `total` фиксируется на момент заказа и не пересчитывается
/// по текущим ценам строк.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub id_client: String,
    #[serde(default)]
    pub produse: Vec<OrderLine>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub data: NaiveDate,
    pub status: OrderStatus,
}

/// Строка заказа
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id_produs: String,
    pub cantitate: u32,
}

impl Order {
    /// Общее количество единиц товара в заказе
    pub fn item_count(&self) -> u64 {
        self.produse.iter().map(|l| u64::from(l.cantitate)).sum()
    }
}

impl AggregateRoot for Order {
    fn id(&self) -> &str {
        &self.id
    }

    fn description(&self) -> &str {
        &self.id
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "comenzi"
    }

    fn id_prefix() -> &'static str {
        "o"
    }
}
