//! End-to-end storefront scenarios against the built-in catalog.

use std::collections::HashMap;

use suture_core::motion::{ElementBox, ScrollMetrics, ScrollOffset, Transform};
use suture_core::{format_price, Catalog, ProductId, Selection, StoreAction, Storefront};

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init()
        .ok();
}

fn catalog_product(catalog: &Catalog, id: &str) -> std::sync::Arc<suture_core::Product> {
    catalog
        .product(&ProductId::new(id))
        .cloned()
        .expect("product in built-in catalog")
}

#[test]
fn cart_subtotal_of_three_core_pieces() {
    init_tracing();
    let catalog = Catalog::builtin();
    let mut store = Storefront::new();

    for id in ["01", "02", "03"] {
        store.dispatch(StoreAction::AddToCart(catalog_product(&catalog, id)));
    }

    assert_eq!(store.cart().total(), 18797);
    assert_eq!(format_price(store.cart().total()), "Rs. 18,797");
}

#[test]
fn select_then_add_closes_overlay_and_opens_drawer() {
    let catalog = Catalog::builtin();
    let mut store = Storefront::new();
    let coat = catalog_product(&catalog, "L01");

    store.dispatch(StoreAction::Select(coat.clone()));
    assert!(store.selection().is_open());

    store.dispatch(StoreAction::AddToCart(coat.clone()));

    assert_eq!(*store.selection(), Selection::Closed);
    assert_eq!(store.cart().len(), 1);
    assert_eq!(store.cart().entries()[0].product, coat);
    assert!(store.cart().is_drawer_open());
}

#[test]
fn adding_twice_keeps_both_entries() {
    let catalog = Catalog::builtin();
    let mut store = Storefront::new();
    let parka = catalog_product(&catalog, "L06");

    store.dispatch(StoreAction::AddToCart(parka.clone()));
    store.dispatch(StoreAction::AddToCart(parka));

    assert_eq!(store.cart().len(), 2);
    assert_ne!(store.cart().entries()[0].seq, store.cart().entries()[1].seq);
    assert_eq!(store.cart().total(), 24000);
}

#[test]
fn add_then_remove_restores_entries() {
    let catalog = Catalog::builtin();
    let mut store = Storefront::new();
    store.dispatch(StoreAction::AddToCart(catalog_product(&catalog, "02")));
    let before = store.cart().entries().to_vec();

    let knit = catalog_product(&catalog, "03");
    store.dispatch(StoreAction::AddToCart(knit.clone()));
    store.dispatch(StoreAction::Remove(knit.id.clone()));

    assert_eq!(store.cart().entries(), before.as_slice());
}

#[test]
fn closing_closed_overlay_changes_nothing() {
    let mut store = Storefront::new();
    let snapshot = store.clone();
    store.dispatch(StoreAction::CloseSelection);
    assert_eq!(store, snapshot);
}

#[test]
fn sale_banner_progress_never_exceeds_one() {
    let mut elements = HashMap::new();
    elements.insert(
        "sale".to_string(),
        ElementBox {
            top: 4000.0,
            height: 720.0,
        },
    );
    let mut metrics = ScrollMetrics {
        scroll_y: 0.0,
        viewport_height: 900.0,
        document_height: 12000.0,
        elements,
    };
    let offset = ScrollOffset::parse("sale", ["start end", "end start"]).unwrap();
    let fade = Transform::new(vec![0.0, 0.2, 0.8, 1.0], vec![0.0, 1.0, 1.0, 0.0]);

    for scroll_y in (0..12000).step_by(50) {
        metrics.scroll_y = f64::from(scroll_y);
        let progress = offset.progress(&metrics);
        assert!((0.0..=1.0).contains(&progress));
        let opacity = fade.map(progress);
        assert!((0.0..=1.0).contains(&opacity));
    }

    metrics.scroll_y = 4720.0;
    assert_eq!(offset.progress(&metrics), 1.0);
    metrics.scroll_y = 11000.0;
    assert_eq!(offset.progress(&metrics), 1.0);
}

#[test]
fn swapped_in_catalog_with_bad_price_still_shops() {
    init_tracing();
    let json = r#"{
        "products": [
            { "id": "A", "name": "SAMPLE", "collection": "SS25", "price": "TBD",
              "image": "a.jpg", "description": "Unpriced sample." },
            { "id": "B", "name": "SHELL", "collection": "SS25", "price": "Rs. 2,000",
              "image": "b.jpg", "description": "Priced shell." }
        ]
    }"#;
    let catalog = Catalog::from_json(json).expect("valid catalog");
    let mut store = Storefront::new();

    for id in ["A", "B"] {
        store.dispatch(StoreAction::AddToCart(catalog_product(&catalog, id)));
    }

    assert_eq!(store.cart().len(), 2);
    assert_eq!(store.cart().total(), 2000);
}
