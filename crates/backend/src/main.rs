use anyhow::Context;
use chrono::Utc;

use backend::dashboards::d400_overview::service as overview;
use backend::domain::a003_order::service as orders;
use backend::shared::config::{get_fixture_path, load_config};
use backend::shared::data::fixture;
use backend::shared::format::{format_money, format_number};
use backend::shared::list::ListState;
use backend::system;

fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = load_config().context("Failed to load configuration")?;

    let data = match get_fixture_path(&config) {
        Some(path) => fixture::load_from_path(&path)?,
        None => {
            tracing::info!("Using embedded fixture");
            fixture::load_embedded()?
        }
    };

    let stats = overview::get_overview(&data, Utc::now());
    tracing::info!(
        "Clients: {} (week {}, month {}, year {}, undated {})",
        format_number(stats.customers.total),
        stats.customers.periods.last_week,
        stats.customers.periods.last_month,
        stats.customers.periods.last_year,
        stats.customers.undated
    );
    tracing::info!(
        "Orders: {} for {} (last month {})",
        format_number(stats.orders.total),
        format_money(stats.orders.total_amount),
        format_money(stats.orders.amounts.last_month)
    );
    tracing::info!(
        "Products: {} ({} on order, {} out of stock)",
        format_number(stats.products.total),
        stats.products.order_only,
        stats.products.out_of_stock
    );

    let state = ListState::with_page_size(config.list.default_page_size)?;
    let page = state.apply(&orders::list_items(&data));
    tracing::info!(
        "Orders page {}/{} ({} total)",
        page.page + 1,
        page.total_pages.max(1),
        page.total_count
    );
    for item in &page.items {
        let details = orders::details(&data, &item.order.id, config.billing.vat_rate)?;
        tracing::info!(
            "  {} | {} | {} | {} + TVA {} = {}",
            item.order.id,
            item.client_name,
            item.order.status,
            format_money(details.subtotal),
            format_money(details.vat),
            format_money(details.total_with_vat)
        );
    }

    Ok(())
}
