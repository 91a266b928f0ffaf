use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Количество записей по периодам наблюдения
///
/// Окна вложенные: всё, что попало в "неделю", попадает и в "месяц", и в "год".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodCounts {
    pub last_week: usize,
    pub last_month: usize,
    pub last_year: usize,
}

/// Суммы заказов по тем же периодам
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodAmounts {
    #[serde(with = "rust_decimal::serde::float")]
    pub last_week: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub last_month: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub last_year: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerStats {
    pub total: usize,
    pub periods: PeriodCounts,
    /// Клиенты без даты регистрации (не попадают ни в один период)
    pub undated: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderStats {
    pub total: usize,
    pub periods: PeriodCounts,
    /// Сумма сохранённых итогов всех заказов
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub amounts: PeriodAmounts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductStats {
    pub total: usize,
    /// Товары "под заказ"
    pub order_only: usize,
    /// Товары с учётом остатка и нулевым остатком
    pub out_of_stock: usize,
}

/// Сводная статистика для стартовой страницы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewStats {
    /// Момент расчёта, от которого отсчитываются периоды
    pub generated_at: DateTime<Utc>,
    pub customers: CustomerStats,
    pub orders: OrderStats,
    pub products: ProductStats,
}
