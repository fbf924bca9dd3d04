//! Integration tests for Vitrine.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vitrine-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_store` - Cart Store behaviour across page views and storage backends
//! - `storefront_pages` - Page component flows from load to order handoff
//!
//! This library only holds shared fixtures.

#![cfg_attr(not(test), forbid(unsafe_code))]

use vitrine_core::{CartItem, Category, ProductId, PhoneNumber};
use vitrine_storefront::config::{SlideshowConfig, StorefrontConfig};
use vitrine_storefront::page::ProductCard;
use vitrine_storefront::telemetry::{self, LogFormat};

/// Install tracing once per test binary. Later calls are no-ops.
pub fn init_tracing() {
    let _ = telemetry::init(LogFormat::Pretty);
}

/// A cart item in the `kitchen` category.
///
/// # Panics
///
/// Panics if `id` is blank.
#[must_use]
pub fn item(id: &str, name: &str) -> CartItem {
    CartItem::new(
        ProductId::parse(id).unwrap_or_else(|e| panic!("fixture id {id:?}: {e}")),
        name,
        format!("{}.png", name.to_lowercase()),
        Category::new("kitchen"),
    )
}

/// A product card as read from catalogue markup.
#[must_use]
pub fn card(id: &str, name: &str) -> ProductCard {
    ProductCard {
        id: id.to_string(),
        name: name.to_string(),
        image: format!("images/{id}.jpg"),
    }
}

/// Configuration for a test deployment rooted at `profile_dir`.
///
/// # Panics
///
/// Never; the fixture phone number is valid.
#[must_use]
pub fn config(profile_dir: &std::path::Path) -> StorefrontConfig {
    StorefrontConfig {
        business_name: "ProKitchen Solutions".to_string(),
        whatsapp_number: PhoneNumber::parse("2348164015614")
            .unwrap_or_else(|e| panic!("fixture phone: {e}")),
        profile_dir: profile_dir.to_path_buf(),
        cart_slot: "cart".to_string(),
        slideshow: SlideshowConfig::default(),
        log_format: LogFormat::Pretty,
    }
}
