//! Order handoff to WhatsApp.
//!
//! Turns a cart snapshot into a plain-text enquiry and a `wa.me` link that
//! opens a chat with the business, pre-filled with that text. Nothing is
//! sent from here; opening the link is the host page's job.

use std::fmt::Write as _;

use thiserror::Error;
use url::Url;
use vitrine_core::{CartItem, PhoneNumber};

use crate::config::StorefrontConfig;

/// Base of every outbound messaging link.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me/";

/// Errors from building an order link.
#[derive(Debug, Error)]
pub enum OrderError {
    /// There is nothing to order.
    #[error("Your cart is empty!")]
    EmptyCart,

    /// The assembled link did not parse as a URL.
    #[error("invalid order link: {0}")]
    InvalidLink(#[from] url::ParseError),
}

/// Builds order messages for one business.
#[derive(Debug, Clone)]
pub struct OrderDispatcher {
    business_name: String,
    phone: PhoneNumber,
}

impl OrderDispatcher {
    /// Create a dispatcher for a business reachable at `phone`.
    #[must_use]
    pub fn new(business_name: impl Into<String>, phone: PhoneNumber) -> Self {
        Self {
            business_name: business_name.into(),
            phone,
        }
    }

    /// Create a dispatcher from storefront configuration.
    #[must_use]
    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(config.business_name.clone(), config.whatsapp_number.clone())
    }

    /// The enquiry text for `cart`, one line per item in cart order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyCart`] if `cart` is empty.
    pub fn message(&self, cart: &[CartItem]) -> Result<String, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let mut message = format!(
            "Hello {},\n\nI am interested in the following equipment:\n\n",
            self.business_name
        );
        for item in cart {
            let _ = writeln!(message, "- {} ({})", item.name, item.category);
        }
        message.push_str("\nPlease contact me with more information.\n\n");
        message.push_str("My contact details:\nName: \nPhone: \nDelivery Address: ");

        Ok(message)
    }

    /// The `wa.me` link carrying the enquiry for `cart`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyCart`] if `cart` is empty.
    #[tracing::instrument(skip(self, cart), fields(items = cart.len()))]
    pub fn link(&self, cart: &[CartItem]) -> Result<Url, OrderError> {
        let message = self.message(cart)?;
        let link = format!(
            "{WHATSAPP_BASE_URL}{}?text={}",
            self.phone.as_str(),
            urlencoding::encode(&message)
        );
        let url = Url::parse(&link)?;
        tracing::info!("order link built");
        Ok(url)
    }
}
