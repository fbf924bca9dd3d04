//! Core types for Vitrine.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod item;
pub mod phone;

pub use category::Category;
pub use id::{ProductId, ProductIdError};
pub use item::CartItem;
pub use phone::{PhoneNumber, PhoneNumberError};
