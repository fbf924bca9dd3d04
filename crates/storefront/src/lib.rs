//! Vitrine Storefront library.
//!
//! Page interactivity for small catalogue storefronts: a cart persisted in
//! durable per-browser storage, product search, a hero slideshow, a mobile
//! navigation toggle, and an order handoff to a WhatsApp link.
//!
//! # Architecture
//!
//! - [`cart`] - the Cart Store, the only stateful component
//! - [`render`] - Askama fragments for the cart badge and item list
//! - [`order`] - order message and `wa.me` link construction
//! - [`search`], [`slideshow`], [`nav`] - stateless page collaborators
//! - [`page`] - one parameterized component wiring all of the above
//! - [`config`], [`telemetry`], [`error`] - ambient concerns

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod error;
pub mod nav;
pub mod order;
pub mod page;
pub mod render;
pub mod search;
pub mod slideshow;
pub mod telemetry;
