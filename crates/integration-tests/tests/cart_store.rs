//! Integration tests for the Cart Store.
//!
//! These tests drive the store the way a sequence of page views would:
//! each view builds a fresh store over the same durable storage.

use pretty_assertions::assert_eq;
use serde_json::json;

use vitrine_integration_tests::{card, config, init_tracing, item};
use vitrine_storefront::cart::{
    AddOutcome, CartStorage, CartStore, FileStorage, MemoryStorage, RemoveOutcome,
};
use vitrine_storefront::error::CartError;
use vitrine_storefront::page::{Notice, Storefront};

fn ids<S: CartStorage>(store: &CartStore<S>) -> Vec<String> {
    store.load().iter().map(|i| i.id.to_string()).collect()
}

// =============================================================================
// Reference Scenario
// =============================================================================

#[test]
fn test_reference_scenario() {
    init_tracing();
    let mut store = CartStore::new(MemoryStorage::new());
    store.initialize().expect("initialize");

    let mixer = vitrine_core::CartItem::new(
        "A1".parse().expect("id"),
        "Mixer",
        "m.png",
        vitrine_core::Category::new("kitchen"),
    );
    assert_eq!(store.add(mixer.clone()).expect("add"), AddOutcome::Added);
    assert_eq!(store.count(), 1);

    assert_eq!(store.add(mixer).expect("add"), AddOutcome::AlreadyPresent);
    assert_eq!(store.count(), 1);

    assert_eq!(store.add(item("B2", "Oven")).expect("add"), AddOutcome::Added);
    assert_eq!(store.count(), 2);

    assert!(matches!(
        store.remove(0).expect("remove"),
        RemoveOutcome::Removed(removed) if removed.id.as_str() == "A1"
    ));
    assert_eq!(ids(&store), vec!["B2"]);

    let before = store.storage().slot("cart").map(str::to_owned);
    assert_eq!(store.remove(5).expect("remove"), RemoveOutcome::OutOfRange);
    assert_eq!(ids(&store), vec!["B2"]);
    assert_eq!(store.storage().slot("cart").map(str::to_owned), before);
}

// =============================================================================
// Persistence Across Page Views
// =============================================================================

#[test]
fn test_round_trip_through_file_storage() {
    init_tracing();
    let tmp = tempfile::TempDir::new().expect("tmp dir");

    {
        let mut first_view = CartStore::new(FileStorage::new(tmp.path()));
        first_view.initialize().expect("initialize");
        first_view.add(item("A1", "Mixer")).expect("add");
        first_view.add(item("B2", "Oven")).expect("add");
        first_view.add(item("C3", "Fryer")).expect("add");
    }

    let second_view = CartStore::new(FileStorage::new(tmp.path()));
    assert_eq!(ids(&second_view), vec!["A1", "B2", "C3"]);
    assert_eq!(
        second_view.load(),
        vec![item("A1", "Mixer"), item("B2", "Oven"), item("C3", "Fryer")]
    );
}

#[test]
fn test_slot_format_matches_page_script() {
    let mut store = CartStore::new(MemoryStorage::new());
    store.add(item("A1", "Mixer")).expect("add");

    let raw = store.storage().slot("cart").expect("slot written");
    let value: serde_json::Value = serde_json::from_str(raw).expect("valid json");
    assert_eq!(
        value,
        json!([{"id": "A1", "name": "Mixer", "image": "mixer.png", "category": "kitchen"}])
    );
}

#[test]
fn test_cart_written_by_page_script_is_readable() {
    let legacy = r#"[{"id":"7","name":"Chest Freezer","image":"https://shop.example/f.jpg","category":"cold rooms"}]"#;
    let store = CartStore::new(MemoryStorage::with_slot("cart", legacy));

    let cart = store.load();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart.first().map(|i| i.category.as_str()), Some("cold rooms"));
}

// =============================================================================
// Self-Healing Storage
// =============================================================================

#[test]
fn test_corrupt_file_loads_empty_then_heals() {
    init_tracing();
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    std::fs::write(tmp.path().join("cart.json"), "{{{ definitely not json").expect("write");

    let mut store = CartStore::new(FileStorage::new(tmp.path()));
    store.initialize().expect("initialize");
    assert!(store.load().is_empty());
    assert_eq!(store.count(), 0);

    store.add(item("A1", "Mixer")).expect("add");
    let healed = CartStore::new(FileStorage::new(tmp.path()));
    assert_eq!(ids(&healed), vec!["A1"]);
}

#[test]
fn test_non_utf8_file_loads_empty_then_heals() {
    init_tracing();
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let slot = tmp.path().join("cart.json");
    std::fs::write(&slot, [0xff, 0xfe, b'[', b']']).expect("write");

    let mut page = Storefront::from_config(&config(tmp.path()));
    page.on_load("/index.html").expect("load tolerates undecodable cart");
    assert_eq!(page.rendered().count, 0);
    assert_eq!(std::fs::read(&slot).expect("read"), [0xff, 0xfe, b'[', b']']);

    let notice = page
        .on_add_to_cart(&card("A1", "Mixer"), "/kitchen.html")
        .expect("add");
    assert_eq!(notice, Notice::Added { name: "Mixer".to_string() });

    let healed = CartStore::new(FileStorage::new(tmp.path()));
    assert_eq!(ids(&healed), vec!["A1"]);
}

#[test]
fn test_invalid_input_never_touches_storage() {
    let mut store = CartStore::new(MemoryStorage::new());
    store.add(item("A1", "Mixer")).expect("add");
    let before = store.storage().slot("cart").map(str::to_owned);

    assert!(matches!(
        store.add_raw(json!({"name": "Ghost"})),
        Err(CartError::InvalidInput(_))
    ));
    assert!(matches!(
        store.add_raw(json!("A1")),
        Err(CartError::InvalidInput(_))
    ));
    assert!(matches!(
        store.remove_raw("first"),
        Err(CartError::InvalidInput(_))
    ));

    assert_eq!(store.storage().slot("cart").map(str::to_owned), before);
}

// =============================================================================
// Sequence Properties
// =============================================================================

#[test]
fn test_count_matches_length_over_mixed_sequence() {
    let mut store = CartStore::new(MemoryStorage::new());
    let ops: [(&str, Option<&str>); 10] = [
        ("add", Some("A1")),
        ("add", Some("B2")),
        ("add", Some("A1")),
        ("remove", Some("4")),
        ("add", Some("C3")),
        ("remove", Some("1")),
        ("add", Some("B2")),
        ("remove", Some("0")),
        ("remove", Some("0")),
        ("remove", Some("0")),
    ];

    let mut expected: Vec<String> = Vec::new();
    for (op, arg) in ops {
        let arg = arg.expect("arg");
        match op {
            "add" => {
                let outcome = store.add(item(arg, arg)).expect("add");
                if expected.iter().any(|id| id == arg) {
                    assert_eq!(outcome, AddOutcome::AlreadyPresent);
                } else {
                    assert_eq!(outcome, AddOutcome::Added);
                    expected.push(arg.to_string());
                }
            }
            _ => {
                let index: usize = arg.parse().expect("index");
                let outcome = store.remove(index).expect("remove");
                if index < expected.len() {
                    expected.remove(index);
                    assert!(matches!(outcome, RemoveOutcome::Removed(_)));
                } else {
                    assert_eq!(outcome, RemoveOutcome::OutOfRange);
                }
            }
        }
        assert_eq!(store.count(), expected.len());
        assert_eq!(ids(&store), expected);
    }
}
