use serde::{Deserialize, Serialize};

/// Статусы заказа
///
/// В записях хранятся румынские подписи, как в исходных данных.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "În procesare")]
    InProcessing,
    #[serde(rename = "Expediată")]
    Shipped,
    #[serde(rename = "Livrată")]
    Delivered,
}

impl OrderStatus {
    /// Подпись статуса (совпадает с сериализованным значением)
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::InProcessing => "În procesare",
            OrderStatus::Shipped => "Expediată",
            OrderStatus::Delivered => "Livrată",
        }
    }

    /// Получить все статусы
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::InProcessing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
        ]
    }

    /// Парсинг из подписи
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.as_str() == label)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
