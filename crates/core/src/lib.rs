//! Vitrine Core - Shared types library.
//!
//! This crate provides the domain types used by the storefront crate and its
//! tests:
//! - [`CartItem`] - one product as stored in a visitor's cart
//! - [`ProductId`] - stable external product identifier
//! - [`Category`] - classification label derived from a page path
//! - [`PhoneNumber`] - contact number used for order handoff links
//!
//! # Architecture
//!
//! The core crate contains only types - no storage, no rendering, no timers.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for identifiers, categories, and phone numbers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
