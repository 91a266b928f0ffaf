use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use contracts::dashboards::d400_overview::dto::{
    CustomerStats, OrderStats, OverviewStats, PeriodAmounts, PeriodCounts, ProductStats,
};
use contracts::domain::a001_client::aggregate::Client;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a003_order::aggregate::Order;
use rust_decimal::Decimal;

use crate::shared::data::DataStore;

/// Периоды наблюдения, отсчитанные назад от дня расчёта
///
/// Дата попадает в окно, если `start <= date <= today`. Будущие даты
/// не попадают ни в одно окно.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodWindows {
    pub today: NaiveDate,
    pub week_start: NaiveDate,
    pub month_start: NaiveDate,
    pub year_start: NaiveDate,
}

impl PeriodWindows {
    pub fn ending_at(now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        let week_start = today
            .checked_sub_signed(Duration::days(7))
            .unwrap_or(today);
        // 31 марта минус месяц = 28/29 февраля (chrono ограничивает день)
        let month_start = today.checked_sub_months(Months::new(1)).unwrap_or(today);
        let year_start = today.checked_sub_months(Months::new(12)).unwrap_or(today);
        Self {
            today,
            week_start,
            month_start,
            year_start,
        }
    }

    fn within(&self, start: NaiveDate, date: NaiveDate) -> bool {
        start <= date && date <= self.today
    }

    pub fn in_last_week(&self, date: NaiveDate) -> bool {
        self.within(self.week_start, date)
    }

    pub fn in_last_month(&self, date: NaiveDate) -> bool {
        self.within(self.month_start, date)
    }

    pub fn in_last_year(&self, date: NaiveDate) -> bool {
        self.within(self.year_start, date)
    }

    fn count(&self, counts: &mut PeriodCounts, date: NaiveDate) {
        if self.in_last_week(date) {
            counts.last_week += 1;
        }
        if self.in_last_month(date) {
            counts.last_month += 1;
        }
        if self.in_last_year(date) {
            counts.last_year += 1;
        }
    }

    fn sum(&self, amounts: &mut PeriodAmounts, date: NaiveDate, value: Decimal) {
        if self.in_last_week(date) {
            amounts.last_week += value;
        }
        if self.in_last_month(date) {
            amounts.last_month += value;
        }
        if self.in_last_year(date) {
            amounts.last_year += value;
        }
    }
}

/// Сводная статистика по трём коллекциям на момент `now`
///
/// Суммы берутся из сохранённых итогов заказов, без пересчёта по строкам.
pub fn aggregate(
    clients: &[Client],
    orders: &[Order],
    products: &[Product],
    now: DateTime<Utc>,
) -> OverviewStats {
    let windows = PeriodWindows::ending_at(now);

    let mut customers = CustomerStats {
        total: clients.len(),
        ..Default::default()
    };
    for client in clients {
        match client.data_inregistrare {
            Some(date) => windows.count(&mut customers.periods, date),
            None => customers.undated += 1,
        }
    }

    let mut order_stats = OrderStats {
        total: orders.len(),
        ..Default::default()
    };
    for order in orders {
        order_stats.total_amount += order.total;
        windows.count(&mut order_stats.periods, order.data);
        windows.sum(&mut order_stats.amounts, order.data, order.total);
    }

    let product_stats = ProductStats {
        total: products.len(),
        order_only: products.iter().filter(|p| p.la_comanda).count(),
        out_of_stock: products
            .iter()
            .filter(|p| !p.la_comanda && p.stoc <= 0)
            .count(),
    };

    OverviewStats {
        generated_at: now,
        customers,
        orders: order_stats,
        products: product_stats,
    }
}

/// То же по всему хранилищу
pub fn get_overview(data: &DataStore, now: DateTime<Utc>) -> OverviewStats {
    let stats = aggregate(
        data.clients.list_all(),
        data.orders.list_all(),
        data.products.list_all(),
        now,
    );
    tracing::debug!(
        "Overview computed: {} clients, {} orders, {} products",
        stats.customers.total,
        stats.orders.total,
        stats.products.total
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::fixture;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_fixture_overview_mid_may() {
        let data = fixture::load_embedded().unwrap();
        let stats = get_overview(&data, at(2025, 5, 16));

        assert_eq!(stats.customers.total, 3);
        assert_eq!(stats.orders.total, 3);
        assert_eq!(stats.products.total, 3);
        assert_eq!(stats.orders.total_amount, dec!(6099.62));

        // o3 (15.05) и o2 (10.05) за неделю, o1 (01.05) за месяц
        assert_eq!(
            stats.orders.periods,
            PeriodCounts {
                last_week: 2,
                last_month: 3,
                last_year: 3
            }
        );
        assert_eq!(stats.orders.amounts.last_week, dec!(3799.77));
        assert_eq!(stats.orders.amounts.last_month, dec!(6099.62));

        // c1 (12.01), c2 (20.04), c3 без даты
        assert_eq!(
            stats.customers.periods,
            PeriodCounts {
                last_week: 0,
                last_month: 1,
                last_year: 2
            }
        );
        assert_eq!(stats.customers.undated, 1);

        assert_eq!(stats.products.order_only, 1);
        assert_eq!(stats.products.out_of_stock, 0);
    }

    #[test]
    fn test_future_and_old_dates_excluded() {
        let data = fixture::load_embedded().unwrap();
        let before = get_overview(&data, at(2025, 4, 1));
        assert_eq!(before.orders.periods, PeriodCounts::default());
        assert_eq!(before.orders.amounts.last_year, Decimal::ZERO);

        let later = get_overview(&data, at(2026, 6, 1));
        assert_eq!(later.orders.periods.last_year, 0);
        assert_eq!(later.orders.total, 3);
    }

    #[test]
    fn test_window_boundaries_inclusive() {
        let w = PeriodWindows::ending_at(at(2025, 3, 31));
        assert_eq!(w.week_start, NaiveDate::from_ymd_opt(2025, 3, 24).unwrap());
        assert_eq!(w.month_start, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
        assert_eq!(w.year_start, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
        assert!(w.in_last_week(w.week_start));
        assert!(w.in_last_week(w.today));
        assert!(!w.in_last_year(NaiveDate::from_ymd_opt(2024, 3, 30).unwrap()));
    }

    #[test]
    fn test_windows_at_earliest_date_do_not_underflow() {
        let w = PeriodWindows::ending_at(DateTime::<Utc>::MIN_UTC);
        assert_eq!(w.week_start, w.today);
        assert_eq!(w.month_start, w.today);
        assert_eq!(w.year_start, w.today);
        assert!(w.in_last_week(w.today));
    }

    #[test]
    fn test_deterministic_for_fixed_now() {
        let data = fixture::load_embedded().unwrap();
        let now = at(2025, 5, 20);
        assert_eq!(get_overview(&data, now), get_overview(&data, now));
    }
}
