//! Cart rendering.
//!
//! The Cart Store does not draw anything itself. After every mutation it
//! hands the fresh cart to a [`CartRenderer`]. [`HtmlRenderer`] turns that
//! into the two fragments a storefront page shows: the header badge and, on
//! the cart page, the item list with positional remove buttons.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use askama::Template;
use thiserror::Error;
use vitrine_core::CartItem;

/// Cart fragments could not be rendered.
#[derive(Debug, Error)]
#[error("template error: {0}")]
pub struct RenderError(#[from] askama::Error);

/// Receives the cart after each mutation.
pub trait CartRenderer {
    /// Redraw from `cart`, which is exactly what storage now holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be produced.
    fn render(&self, cart: &[CartItem]) -> Result<(), RenderError>;
}

/// Cart item display data for templates.
#[derive(Debug, Clone)]
pub struct CartItemView {
    /// Position in the cart, used as the remove button's `data-index`.
    pub index: usize,
    pub name: String,
    pub image: String,
    pub category: String,
}

/// Cart display data for templates.
#[derive(Debug, Clone, Default)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: usize,
}

impl From<&[CartItem]> for CartView {
    fn from(cart: &[CartItem]) -> Self {
        Self {
            items: cart
                .iter()
                .enumerate()
                .map(|(index, item)| CartItemView {
                    index,
                    name: item.name.clone(),
                    image: item.image.clone(),
                    category: item.category.to_string(),
                })
                .collect(),
            item_count: cart.len(),
        }
    }
}

/// Cart items fragment template.
#[derive(Template)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template.
#[derive(Template)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: usize,
}

/// The most recent output of an [`HtmlRenderer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedCart {
    /// Number of items shown on the badge.
    pub count: usize,
    /// Badge fragment.
    pub badge_html: String,
    /// Item list fragment; `None` unless the list is enabled (cart page).
    pub items_html: Option<String>,
}

/// Askama-backed renderer.
///
/// Clones share their output and settings, so a page can keep one handle
/// while the Cart Store owns another.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    output: Rc<RefCell<RenderedCart>>,
    show_items: Rc<Cell<bool>>,
}

impl HtmlRenderer {
    /// Create a renderer that only draws the badge.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also draw the item list. Only the cart page does this.
    pub fn set_show_items(&self, show: bool) {
        self.show_items.set(show);
    }

    /// Snapshot of the latest output.
    #[must_use]
    pub fn rendered(&self) -> RenderedCart {
        self.output.borrow().clone()
    }
}

impl CartRenderer for HtmlRenderer {
    fn render(&self, cart: &[CartItem]) -> Result<(), RenderError> {
        let count = cart.len();
        let badge_html = CartCountTemplate { count }.render()?;
        let items_html = if self.show_items.get() {
            Some(
                CartItemsTemplate {
                    cart: CartView::from(cart),
                }
                .render()?,
            )
        } else {
            None
        };

        *self.output.borrow_mut() = RenderedCart {
            count,
            badge_html,
            items_html,
        };
        Ok(())
    }
}
