//! Загрузка фикстуры `{clienti, produse, comenzi}`.
//!
//! Записи товаров бывают двух форм: старая с одной строкой `imagine` и новая со
//! списком `imagini`. Обе приводятся к списку здесь, дальше по коду ходит только
//! нормализованный [`Product`].
//!
//! Записи, нарушающие правила агрегатов (пустое название, цена <= 0, отрицательный
//! остаток, строки заказа с нулевым количеством), отбрасываются с предупреждением.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use contracts::domain::a001_client::aggregate::Client;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a003_order::aggregate::Order;
use contracts::domain::common::AggregateRoot;
use contracts::enums::ProductCategory;
use contracts::shared::validation::ValidationError;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use super::collection_store::DataStore;

/// Встроенная фикстура (используется, если путь в конфиге не задан)
const EMBEDDED_FIXTURE: &str = include_str!("../../../data/data.json");

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fixture: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct FixtureFile {
    #[serde(default)]
    clienti: Vec<Client>,
    #[serde(default)]
    produse: Vec<ProductRecord>,
    #[serde(default)]
    comenzi: Vec<Order>,
}

/// Запись товара в том виде, как она лежит в фикстуре
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub nume: String,
    #[serde(default)]
    pub descriere: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub pret: Decimal,
    pub categorie: ProductCategory,
    #[serde(default)]
    pub stoc: Option<i64>,
    #[serde(rename = "laComanda", default)]
    pub la_comanda: bool,
    /// Старая форма: одна ссылка на изображение
    #[serde(default)]
    pub imagine: Option<String>,
    #[serde(default)]
    pub imagini: Option<Vec<String>>,
}

impl From<ProductRecord> for Product {
    fn from(r: ProductRecord) -> Self {
        let mut imagini = r.imagini.unwrap_or_default();
        if let Some(legacy) = r.imagine.filter(|s| !s.trim().is_empty()) {
            if !imagini.contains(&legacy) {
                imagini.insert(0, legacy);
            }
        }

        Product {
            id: r.id,
            nume: r.nume,
            descriere: r.descriere,
            pret: r.pret,
            categorie: r.categorie,
            stoc: r.stoc.unwrap_or(0),
            la_comanda: r.la_comanda,
            imagini,
        }
    }
}

/// Загрузить встроенную фикстуру
pub fn load_embedded() -> Result<DataStore, FixtureError> {
    parse(EMBEDDED_FIXTURE)
}

/// Загрузить фикстуру из файла
pub fn load_from_path(path: &Path) -> Result<DataStore, FixtureError> {
    tracing::info!("Loading fixture from: {}", path.display());
    let contents = std::fs::read_to_string(path).map_err(|source| FixtureError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&contents)
}

/// Разобрать фикстуру из строки JSON
pub fn parse(contents: &str) -> Result<DataStore, FixtureError> {
    let file: FixtureFile = serde_json::from_str(contents)?;

    let clients = dedup_by_id(keep_valid(file.clienti, Client::validate));
    let products = dedup_by_id(keep_valid(
        file.produse.into_iter().map(Product::from).collect(),
        Product::validate,
    ));
    let orders = dedup_by_id(file.comenzi.into_iter().map(drop_empty_lines).collect());

    tracing::info!(
        "Fixture loaded: {} clients, {} products, {} orders",
        clients.len(),
        products.len(),
        orders.len()
    );

    Ok(DataStore::new(clients, products, orders))
}

/// Записи, не прошедшие валидацию, пропускаем с предупреждением
fn keep_valid<T, F>(items: Vec<T>, check: F) -> Vec<T>
where
    T: AggregateRoot,
    F: Fn(&T) -> Result<(), ValidationError>,
{
    items
        .into_iter()
        .filter(|item| match check(item) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    "Invalid record '{}' ({}) in {}, record skipped: {}",
                    item.id(),
                    item.description(),
                    T::full_name(),
                    e
                );
                false
            }
        })
        .collect()
}

/// Строки заказа с нулевым количеством отбрасываются
fn drop_empty_lines(mut order: Order) -> Order {
    order.produse.retain(|line| {
        if line.cantitate == 0 {
            tracing::warn!(
                "Order {} line for product {} has zero quantity, line skipped",
                order.id,
                line.id_produs
            );
        }
        line.cantitate > 0
    });
    order
}

/// Повторяющиеся ID пропускаем: первая запись побеждает
fn dedup_by_id<T: AggregateRoot>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| {
            let fresh = seen.insert(item.id().to_string());
            if !fresh {
                tracing::warn!(
                    "Duplicate id '{}' in {}, record skipped",
                    item.id(),
                    T::full_name()
                );
            }
            fresh
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_embedded_fixture_loads() {
        let store = load_embedded().unwrap();
        assert_eq!(store.clients.len(), 3);
        assert_eq!(store.products.len(), 3);
        assert_eq!(store.orders.len(), 3);
        assert_eq!(
            store.orders.get_by_id("o1").map(|o| o.total),
            Some(dec!(2299.85))
        );
    }

    #[test]
    fn test_legacy_image_normalized_to_list() {
        let store = load_embedded().unwrap();
        let p2 = store.products.get_by_id("p2").unwrap();
        assert_eq!(p2.imagini, vec!["/imagini/blugi1.jpg".to_string()]);
        let p1 = store.products.get_by_id("p1").unwrap();
        assert_eq!(p1.imagini.len(), 2);
    }

    #[test]
    fn test_both_image_forms_merge_without_duplicates() {
        let json = r#"{
            "produse": [{
                "id": "p9",
                "nume": "Curea",
                "pret": 59.5,
                "categorie": "Accesorii",
                "stoc": 4,
                "imagine": "/imagini/a.jpg",
                "imagini": ["/imagini/b.jpg", "/imagini/a.jpg"]
            }, {
                "id": "p10",
                "nume": "Fular",
                "pret": 35,
                "categorie": "Accesorii",
                "stoc": 1,
                "imagine": ""
            }]
        }"#;
        let store = parse(json).unwrap();
        let p9 = store.products.get_by_id("p9").unwrap();
        assert_eq!(p9.imagini, vec!["/imagini/b.jpg", "/imagini/a.jpg"]);
        assert!(store.products.get_by_id("p10").unwrap().imagini.is_empty());
        assert!(store.clients.is_empty());
    }

    #[test]
    fn test_duplicate_ids_skipped() {
        let json = r#"{
            "clienti": [
                {"id": "c1", "nume_companie": "A", "email": "a@a.ro", "telefon": "1"},
                {"id": "c1", "nume_companie": "B", "email": "b@b.ro", "telefon": "2"}
            ]
        }"#;
        let store = parse(json).unwrap();
        assert_eq!(store.clients.len(), 1);
        assert_eq!(store.clients.list_all()[0].nume_companie, "A");
    }

    #[test]
    fn test_invalid_products_skipped() {
        let json = r#"{
            "produse": [
                {"id": "p1", "nume": "", "pret": 10, "categorie": "Geci", "stoc": 1},
                {"id": "p2", "nume": "Geacă", "pret": -5, "categorie": "Geci", "stoc": 1},
                {"id": "p3", "nume": "Geacă", "pret": 99.9, "categorie": "Geci", "stoc": -3},
                {"id": "p4", "nume": "Geacă", "pret": 99.9, "categorie": "Geci", "stoc": -3, "laComanda": true},
                {"id": "p5", "nume": "Geacă", "pret": 99.9, "categorie": "Geci", "stoc": 2}
            ]
        }"#;
        let store = parse(json).unwrap();
        let ids: Vec<&str> = store.products.list_all().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p4", "p5"]);
    }

    #[test]
    fn test_invalid_clients_skipped() {
        let json = r#"{
            "clienti": [
                {"id": "c1", "nume_companie": "A", "email": "", "telefon": "1"},
                {"id": "c2", "nume_companie": "B", "email": "b@b.ro", "telefon": "2"}
            ]
        }"#;
        let store = parse(json).unwrap();
        assert_eq!(store.clients.len(), 1);
        assert!(store.clients.contains("c2"));
    }

    #[test]
    fn test_zero_quantity_lines_dropped() {
        let json = r#"{
            "comenzi": [{
                "id": "o1",
                "id_client": "c1",
                "produse": [
                    {"id_produs": "p1", "cantitate": 0},
                    {"id_produs": "p2", "cantitate": 3}
                ],
                "total": 599.97,
                "data": "2025-05-01",
                "status": "Livrată"
            }]
        }"#;
        let store = parse(json).unwrap();
        let order = store.orders.get_by_id("o1").unwrap();
        assert_eq!(order.produse.len(), 1);
        assert_eq!(order.produse[0].id_produs, "p2");
        assert_eq!(order.item_count(), 3);
        // сохранённый итог не трогаем
        assert_eq!(order.total, dec!(599.97));
    }

    #[test]
    fn test_parse_error_reported() {
        assert!(matches!(parse("{not json"), Err(FixtureError::Parse(_))));
        let missing = load_from_path(Path::new("/nonexistent/data.json"));
        assert!(matches!(missing, Err(FixtureError::Read { .. })));
    }
}
