//! The storefront page component.
//!
//! Every storefront site runs the same wiring: a cart badge in the header,
//! add-to-cart buttons on catalogue pages, a search box, a hero slideshow,
//! a mobile menu, and a cart page with remove buttons and a send-order
//! button. [`Storefront`] is that wiring, parameterized by
//! [`StorefrontConfig`]. The host page forwards its events to the `on_*`
//! handlers and applies what they return.

use std::fmt;

use tokio::sync::watch;
use tracing::instrument;
use url::Url;
use vitrine_core::{CartItem, Category, ProductId};

use crate::cart::{AddOutcome, CartStorage, CartStore, FileStorage, RemoveOutcome};
use crate::config::{SlideshowConfig, StorefrontConfig};
use crate::error::{CartError, Result};
use crate::nav::NavToggle;
use crate::order::{OrderDispatcher, OrderError};
use crate::render::{CartRenderer, HtmlRenderer, RenderedCart};
use crate::search::{self, SearchOutcome};
use crate::slideshow::{Slideshow, SlideshowError, SlideshowTimer};

/// Marker in the path of the page that lists the cart.
const CART_PAGE_MARKER: &str = "cart.html";

/// Product data read from a product card's markup.
#[derive(Debug, Clone)]
pub struct ProductCard {
    /// `data-id` attribute.
    pub id: String,
    /// Card heading text.
    pub name: String,
    /// Card image source.
    pub image: String,
}

/// Dialog text shown to the visitor after adding to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Added { name: String },
    AlreadyInCart { name: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added { name } => write!(f, "{name} added to cart!"),
            Self::AlreadyInCart { name } => write!(f, "{name} is already in your cart!"),
        }
    }
}

/// One storefront page view.
pub struct Storefront<S> {
    cart: CartStore<S>,
    view: HtmlRenderer,
    dispatcher: OrderDispatcher,
    nav: NavToggle,
    slideshow_config: SlideshowConfig,
    slideshow: Option<SlideshowTimer>,
}

impl Storefront<FileStorage> {
    /// Page view backed by the configured profile directory.
    #[must_use]
    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(config, FileStorage::new(&config.profile_dir))
    }
}

impl<S: CartStorage> Storefront<S> {
    /// Page view backed by `storage`.
    pub fn new(config: &StorefrontConfig, storage: S) -> Self {
        let view = HtmlRenderer::new();
        let cart = CartStore::with_slot(storage, config.cart_slot.clone()).with_renderer(view.clone());

        Self {
            cart,
            view,
            dispatcher: OrderDispatcher::from_config(config),
            nav: NavToggle::new(),
            slideshow_config: config.slideshow,
            slideshow: None,
        }
    }

    /// The Cart Store behind this page.
    pub const fn cart(&self) -> &CartStore<S> {
        &self.cart
    }

    /// Latest badge and item-list fragments.
    #[must_use]
    pub fn rendered(&self) -> RenderedCart {
        self.view.rendered()
    }

    /// Page loaded: make sure a cart exists and draw it. The item list is
    /// drawn only on the cart page.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be initialized or the fragments
    /// cannot be rendered.
    #[instrument(skip(self))]
    pub fn on_load(&mut self, path: &str) -> Result<()> {
        self.cart.initialize()?;
        self.view.set_show_items(path.contains(CART_PAGE_MARKER));
        self.view.render(&self.cart.load())?;
        Ok(())
    }

    /// Add-to-cart button clicked on the page at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the card has no usable ID or the cart cannot be
    /// persisted.
    #[instrument(skip(self, card), fields(product_id = %card.id))]
    pub fn on_add_to_cart(&mut self, card: &ProductCard, path: &str) -> Result<Notice> {
        let id =
            ProductId::parse(&card.id).map_err(|e| CartError::InvalidInput(e.to_string()))?;
        let item = CartItem::new(id, card.name.clone(), card.image.clone(), Category::from_path(path));

        let name = card.name.clone();
        let notice = match self.cart.add(item)? {
            AddOutcome::Added => Notice::Added { name },
            AddOutcome::AlreadyPresent => Notice::AlreadyInCart { name },
        };
        tracing::info!(%notice, "add to cart");
        Ok(notice)
    }

    /// Remove button clicked; `index` is the button's `data-index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not an integer or the cart cannot be
    /// persisted.
    #[instrument(skip(self))]
    pub fn on_remove(&mut self, index: &str) -> Result<RemoveOutcome> {
        Ok(self.cart.remove_raw(index)?)
    }

    /// Search box changed, search button clicked, or Enter pressed.
    #[must_use]
    pub fn on_search<'a, I>(&self, term: &str, product_names: I) -> SearchOutcome
    where
        I: IntoIterator<Item = &'a str>,
    {
        search::filter(term, product_names)
    }

    /// Send-order button clicked. The returned link is opened in a new tab.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyCart`] if there is nothing to send; its
    /// message is the text to show the visitor.
    #[instrument(skip(self))]
    pub fn on_send_order(&self) -> std::result::Result<Url, OrderError> {
        self.dispatcher.link(&self.cart.load())
    }

    /// Hamburger button clicked. Returns the class list for `.nav-links`.
    pub const fn on_menu_toggle(&mut self) -> &'static str {
        self.nav.toggle()
    }

    /// A navigation link was followed. Returns the class list for `.nav-links`.
    pub const fn on_nav_link(&mut self) -> &'static str {
        self.nav.close()
    }

    /// Start the hero slideshow. Must be called inside a tokio runtime.
    /// Calling it again restarts from the first slide.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured slide count or interval is zero.
    pub fn start_slideshow(&mut self) -> std::result::Result<watch::Receiver<usize>, SlideshowError> {
        let SlideshowConfig {
            interval,
            slide_count,
            pause_on_hover,
        } = self.slideshow_config;

        let timer = SlideshowTimer::spawn(Slideshow::new(slide_count, pause_on_hover)?, interval)?;
        let rx = timer.subscribe();
        self.slideshow = Some(timer);
        Ok(rx)
    }

    /// Pointer entered the hero region.
    pub fn on_hero_enter(&self) {
        if let Some(timer) = &self.slideshow {
            timer.pointer_enter();
        }
    }

    /// Pointer left the hero region.
    pub fn on_hero_leave(&self) {
        if let Some(timer) = &self.slideshow {
            timer.pointer_leave();
        }
    }
}
