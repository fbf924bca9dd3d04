//! Integration tests for the storefront page component.
//!
//! These tests walk a visitor through catalogue pages, the cart page, and
//! the order handoff, with the cart persisted to a profile directory.

use pretty_assertions::assert_eq;

use vitrine_integration_tests::{card, config, init_tracing};
use vitrine_storefront::cart::RemoveOutcome;
use vitrine_storefront::page::{Notice, Storefront};
use vitrine_storefront::search::NO_RESULTS_MESSAGE;

#[test]
fn test_browse_add_then_order() {
    init_tracing();
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let config = config(tmp.path());

    // Catalogue page
    let mut page = Storefront::from_config(&config);
    page.on_load("/products/kitchen-equipment.html").expect("load");
    let notice = page
        .on_add_to_cart(&card("A1", "Stand Mixer"), "/products/kitchen-equipment.html")
        .expect("add");
    assert_eq!(
        notice,
        Notice::Added {
            name: "Stand Mixer".to_string()
        }
    );
    page.on_add_to_cart(&card("B2", "Deck Oven"), "/products/bakery.html")
        .expect("add");
    assert!(page.rendered().badge_html.contains(">2<"));

    // Cart page, new page view over the same profile
    let mut cart_page = Storefront::from_config(&config);
    cart_page.on_load("/cart.html").expect("load");
    let html = cart_page.rendered().items_html.expect("item list on cart page");
    assert!(html.contains("Stand Mixer"));
    assert!(html.contains("Category: kitchen equipment"));
    assert!(html.contains("Category: bakery"));

    let url = cart_page.on_send_order().expect("order link");
    let text = url
        .query_pairs()
        .find(|(k, _)| k == "text")
        .map(|(_, v)| v.into_owned())
        .expect("text param");
    assert!(text.starts_with("Hello ProKitchen Solutions,"));
    assert!(text.contains("- Stand Mixer (kitchen equipment)\n- Deck Oven (bakery)\n"));
}

#[test]
fn test_duplicate_add_across_pages() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let config = config(tmp.path());

    let mut ovens = Storefront::from_config(&config);
    ovens.on_load("/ovens.html").expect("load");
    ovens
        .on_add_to_cart(&card("A1", "Deck Oven"), "/ovens.html")
        .expect("add");

    let mut bakery = Storefront::from_config(&config);
    bakery.on_load("/bakery.html").expect("load");
    let notice = bakery
        .on_add_to_cart(&card("A1", "Deck Oven (Bakery)"), "/bakery.html")
        .expect("add");

    assert_eq!(notice.to_string(), "Deck Oven (Bakery) is already in your cart!");
    assert_eq!(bakery.cart().count(), 1);
    assert_eq!(
        bakery.cart().load().first().map(|i| i.category.to_string()),
        Some("ovens".to_string())
    );
}

#[test]
fn test_emptying_cart_shows_placeholder_and_blocks_order() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let mut page = Storefront::from_config(&config(tmp.path()));
    page.on_load("/cart.html").expect("load");
    page.on_add_to_cart(&card("A1", "Mixer"), "/kitchen.html")
        .expect("add");

    assert!(matches!(
        page.on_remove("0").expect("remove"),
        RemoveOutcome::Removed(_)
    ));
    assert_eq!(page.on_remove("0").expect("remove"), RemoveOutcome::OutOfRange);

    let out = page.rendered();
    assert_eq!(out.count, 0);
    assert!(out.items_html.expect("item list").contains("empty-cart"));
    assert_eq!(
        page.on_send_order().expect_err("empty").to_string(),
        "Your cart is empty!"
    );
}

#[test]
fn test_search_over_catalogue() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let page = Storefront::from_config(&config(tmp.path()));
    let names = ["Stand Mixer", "Deck Oven", "Blast Chiller"];

    let outcome = page.on_search("CHILL", names);
    assert_eq!(outcome.visible, vec![false, false, true]);

    let none = page.on_search("dishwasher", names);
    assert!(none.show_no_results);
    assert_eq!(NO_RESULTS_MESSAGE, "No products found matching your search.");

    let all = page.on_search("", names);
    assert_eq!(all.visible_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_hero_slideshow_cycles() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let mut page = Storefront::from_config(&config(tmp.path()));
    let mut rx = page.start_slideshow().expect("slideshow");

    let mut seen = Vec::new();
    for _ in 0..4 {
        rx.changed().await.expect("timer running");
        seen.push(*rx.borrow_and_update());
    }
    assert_eq!(seen, vec![1, 2, 0, 1]);
}
