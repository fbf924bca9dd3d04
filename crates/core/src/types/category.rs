//! Product category labels.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A product's classification label.
///
/// Storefront pages are organised one category per page, so the label is
/// derived from the page's file name: `/products/kitchen-equipment.html`
/// becomes `"kitchen equipment"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Create a category from an already-formatted label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Derive a category from a URL path.
    ///
    /// Takes the last path segment, drops everything from the first `.`,
    /// and replaces hyphens with spaces. A path ending in `/` yields an
    /// empty label.
    ///
    /// ```
    /// use vitrine_core::Category;
    ///
    /// assert_eq!(Category::from_path("/shop/cold-rooms.html").as_str(), "cold rooms");
    /// assert_eq!(Category::from_path("ovens").as_str(), "ovens");
    /// ```
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let file_name = path.rsplit('/').next().unwrap_or_default();
        let stem = file_name.split('.').next().unwrap_or_default();
        Self(stem.replace('-', " "))
    }

    /// Returns the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
