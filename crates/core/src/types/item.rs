//! Cart item record.

use serde::{Deserialize, Serialize};

use super::{Category, ProductId};

/// One selected product as stored in a cart.
///
/// The serialized form is a flat JSON object with the fields `id`, `name`,
/// `image`, and `category`. Carts written by earlier versions of the
/// storefront pages use the same shape, so existing visitors keep their
/// selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Stable external product identifier. Unique within a cart.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// URL or path of the product image.
    pub image: String,
    /// Classification label derived from the page the product was added on.
    pub category: Category,
}

impl CartItem {
    /// Create a new cart item.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        image: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            category,
        }
    }

    /// Whether this item has the same identity as `other`.
    ///
    /// Identity is the product ID alone; name, image, and category are ignored.
    #[must_use]
    pub fn same_product(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn mixer() -> CartItem {
        CartItem::new(
            ProductId::parse("A1").unwrap(),
            "Mixer",
            "m.png",
            Category::new("kitchen"),
        )
    }

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(mixer()).unwrap();
        assert_eq!(
            value,
            json!({"id": "A1", "name": "Mixer", "image": "m.png", "category": "kitchen"})
        );
    }

    #[test]
    fn test_deserialize_missing_id_fails() {
        let result = serde_json::from_value::<CartItem>(
            json!({"name": "Mixer", "image": "m.png", "category": "kitchen"}),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_same_product_ignores_other_fields() {
        let mut renamed = mixer();
        renamed.name = "Stand Mixer".to_string();
        renamed.category = Category::new("bakery");
        assert!(mixer().same_product(&renamed));
    }

    #[test]
    fn test_different_ids_are_different_products() {
        let mut other = mixer();
        other.id = ProductId::parse("B2").unwrap();
        assert!(!mixer().same_product(&other));
    }
}
