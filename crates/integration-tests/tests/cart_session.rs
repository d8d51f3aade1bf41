//! Whole shopping sessions driven through the cart store.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use elegant_context_core::{
    ActionEnvelope, CartAction, CartError, CartItem, CartStore, Catalog, CurrencyCode,
    DispatchError, Product, ProductId, reduce,
};
use elegant_context_integration_tests::{ids, widget_catalog};
use rstest::{fixture, rstest};
use rust_decimal::Decimal;
use serde_json::json;

#[fixture]
fn store() -> CartStore<Catalog> {
    CartStore::new(widget_catalog())
}

fn widget(quantity: u32) -> CartItem {
    CartItem {
        id: ProductId::new("p1"),
        name: "Widget".to_owned(),
        unit_price: Decimal::new(999, 2),
        quantity,
    }
}

#[rstest]
fn widget_walkthrough(mut store: CartStore<Catalog>) {
    assert!(store.state().is_empty());

    store.add_item_to_cart("p1").unwrap();
    assert_eq!(store.state().items(), &[widget(1)]);

    store.add_item_to_cart("p1").unwrap();
    assert_eq!(store.state().items(), &[widget(2)]);

    store.update_item_quantity("p1", -1).unwrap();
    assert_eq!(store.state().items(), &[widget(1)]);

    store.update_item_quantity("p1", -1).unwrap();
    assert!(store.state().is_empty());
}

#[rstest]
fn walkthrough_from_envelopes(mut store: CartStore<Catalog>) {
    let script: Vec<ActionEnvelope> = serde_json::from_value(json!([
        {"type": "ADD_ITEM_TO_CART", "payload": "p1"},
        {"type": "ADD_ITEM", "payload": "p1"},
        {"type": "UPDATE_ITEM_QUANTITY", "payload": {"productId": "p1", "amount": -1}},
        {"type": "UPDATE_QUANTITY", "payload": {"productId": "p1", "amount": -1}},
    ]))
    .unwrap();

    let mut quantities = Vec::new();
    for envelope in &script {
        let state = store.dispatch_envelope(envelope).unwrap();
        quantities.push(state.total_quantity());
    }
    assert_eq!(quantities, [1, 2, 1, 0]);
}

#[rstest]
fn header_and_summary_totals(mut store: CartStore<Catalog>) {
    store.add_item_to_cart("p1").unwrap();
    store.add_item_to_cart("p2").unwrap();
    store.update_item_quantity("p2", 2).unwrap();
    store.add_item_to_cart("p3").unwrap();

    let state = store.state();
    assert_eq!(ids(state), ["p1", "p2", "p3"]);
    assert_eq!(state.total_quantity(), 5);
    // 9.99 + 3 * 24.50 + 3.00
    assert_eq!(state.subtotal(), Some(Decimal::new(8649, 2)));
    assert_eq!(
        state.subtotal_price(CurrencyCode::USD).unwrap().display(),
        "$86.49"
    );
}

#[rstest]
fn rejected_actions_leave_the_cart_alone(mut store: CartStore<Catalog>) {
    store.add_item_to_cart("p2").unwrap();
    let before = store.state().clone();

    let missing_product = store.add_item_to_cart("p404").unwrap_err();
    assert_eq!(
        missing_product,
        CartError::NotFound {
            id: ProductId::new("p404")
        }
    );

    let missing_item = store.update_item_quantity("p1", -1).unwrap_err();
    assert!(matches!(missing_item, CartError::NotFound { .. }));

    let malformed = ActionEnvelope {
        kind: "UPDATE_ITEM_QUANTITY".to_owned(),
        payload: json!({"productId": "p2", "amount": "lots"}),
    };
    assert!(matches!(
        store.dispatch_envelope(&malformed),
        Err(DispatchError::Action(_))
    ));

    assert_eq!(store.state(), &before);
}

#[rstest]
fn cart_keeps_price_seen_when_first_added() {
    let launch = Catalog::new(vec![Product::new("p1", "Widget", Decimal::new(999, 2))]).unwrap();
    let mut store = CartStore::new(launch);
    store.add_item_to_cart("p1").unwrap();
    let cart = store.into_state();

    // Same cart, now backed by a repriced catalog.
    let repriced =
        Catalog::new(vec![Product::new("p1", "Widget", Decimal::new(1499, 2))]).unwrap();
    let next = reduce(&cart, &CartAction::add("p1"), &repriced).unwrap();

    assert_eq!(next.items()[0].unit_price, Decimal::new(999, 2));
    assert_eq!(next.items()[0].quantity, 2);
}

#[rstest]
fn cart_serializes_for_views(mut store: CartStore<Catalog>) {
    store.add_item_to_cart("p1").unwrap();
    let value = serde_json::to_value(store.state()).unwrap();
    assert_eq!(
        value,
        json!({"items": [{"id": "p1", "name": "Widget", "unit_price": "9.99", "quantity": 1}]})
    );
}

#[rstest]
fn demo_catalog_supports_a_full_session() {
    let mut store = CartStore::new(Catalog::demo());
    let all: Vec<ProductId> = store.catalog().iter().map(|p| p.id.clone()).collect();
    for id in &all {
        store.add_item_to_cart(id.clone()).unwrap();
    }
    assert_eq!(store.state().len(), all.len());

    for id in &all {
        store.update_item_quantity(id.clone(), -1).unwrap();
    }
    assert!(store.state().is_empty());
}

#[rstest]
fn oversized_totals_are_reported_not_panicked() {
    let yaml = r#"- { id: p1, title: Bullion, price: "100000000000000000000" }"#;
    let catalog = Catalog::from_yaml(yaml).unwrap();
    let mut store = CartStore::new(catalog);
    store.add_item_to_cart("p1").unwrap();
    store.update_item_quantity("p1", 999_999_999).unwrap();

    let state = store.state();
    assert_eq!(state.items()[0].quantity, 1_000_000_000);
    assert_eq!(state.total_quantity(), 1_000_000_000);
    assert!(state.items()[0].line_total().is_none());
    assert!(state.subtotal().is_none());
    assert!(state.subtotal_price(CurrencyCode::USD).is_none());
}
