use backend::domain::a001_client::service as clients;
use backend::domain::a002_product::service as products;
use backend::domain::a003_order::service::{self as orders, UNKNOWN_CLIENT};
use backend::shared::data::{fixture, DataStore};
use backend::shared::error::MutationError;
use backend::shared::list::{filter_list, ListState};
use contracts::domain::a001_client::aggregate::ClientDto;
use contracts::domain::a002_product::aggregate::{ProductDto, ProductPatch};
use contracts::enums::product_category::ProductCategory;
use contracts::shared::list_query::FilterCriteria;
use rust_decimal_macros::dec;

fn store() -> DataStore {
    fixture::load_embedded().expect("embedded fixture must parse")
}

#[test]
fn search_clients_by_company_name() {
    let data = store();
    let found = filter_list(
        clients::list_all(&data.clients),
        &FilterCriteria::search("alpha"),
    );
    let ids: Vec<&str> = found.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c1"]);
}

#[test]
fn second_page_of_seven_products() {
    let mut data = store();
    for i in 0..4 {
        products::create(
            &mut data.products,
            ProductDto {
                nume: format!("Curea {i}"),
                pret: dec!(49.90),
                categorie: Some(ProductCategory::Accessories),
                stoc: Some(10),
                ..Default::default()
            },
        )
        .unwrap();
    }
    assert_eq!(data.products.len(), 7);

    let mut state = ListState::with_page_size(5).unwrap();
    state.set_page(1);
    let page = state.apply(products::list_all(&data.products));
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_count, 7);
    assert_eq!(page.total_pages, 2);
}

#[test]
fn order_details_with_vat() {
    let data = store();
    let details = orders::details(&data, "o1", dec!(0.19)).unwrap();
    assert_eq!(details.subtotal, dec!(2299.85));
    assert_eq!(details.vat, dec!(436.97));
    assert_eq!(details.total_with_vat, dec!(2736.82));
}

#[test]
fn create_client_without_email_is_rejected() {
    let mut data = store();
    let before = data.clients.list_all().to_vec();

    let result = clients::create(
        &mut data.clients,
        ClientDto {
            nume_companie: "Delta Fashion".into(),
            telefon: "+40 700 000 000".into(),
            ..Default::default()
        },
    );

    match result {
        Err(MutationError::Validation(e)) => assert_eq!(e.field(), "email"),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(data.clients.list_all(), before.as_slice());
}

#[test]
fn deleting_client_keeps_orders() {
    let mut data = store();
    clients::delete(&mut data.clients, "c1").unwrap();

    assert!(data.orders.contains("o1"));
    let items = orders::list_items(&data);
    let o1 = items.iter().find(|i| i.order.id == "o1").unwrap();
    assert_eq!(o1.client_name, UNKNOWN_CLIENT);

    let details = orders::details(&data, "o1", dec!(0.19)).unwrap();
    assert_eq!(details.client_name, UNKNOWN_CLIENT);
    assert_eq!(details.warnings.len(), 1);
}

#[test]
fn updating_price_changes_only_price() {
    let mut data = store();
    let before = data.products.get_by_id("p2").cloned().unwrap();

    let updated = products::update(
        &mut data.products,
        "p2",
        &ProductPatch {
            pret: Some(dec!(149.99)),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(updated.pret, dec!(149.99));
    let mut expected = before;
    expected.pret = dec!(149.99);
    assert_eq!(data.products.get_by_id("p2"), Some(&expected));
}
