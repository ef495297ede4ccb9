//! Query key composition.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a cached query: the resource being fetched plus the filter
/// constraining it.
///
/// The canonical string form is `resource:filter`, with `all` standing in
/// for "no filter" (e.g. `products:laptops`, `products:all`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryKey {
    /// Resource name (e.g. "products", "categories").
    resource: String,
    /// Filter key, or `None` for the unfiltered resource.
    filter: Option<String>,
}

impl QueryKey {
    /// Create a query key.
    pub fn new(resource: impl Into<String>, filter: Option<&str>) -> Self {
        Self {
            resource: resource.into(),
            filter: filter.map(String::from),
        }
    }

    /// Key for the unfiltered resource.
    pub fn unfiltered(resource: impl Into<String>) -> Self {
        Self::new(resource, None)
    }

    /// The resource name.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// The filter key, if any.
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}",
            self.resource,
            self.filter.as_deref().unwrap_or("all")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_form() {
        assert_eq!(
            QueryKey::new("products", Some("laptops")).to_string(),
            "products:laptops"
        );
        assert_eq!(QueryKey::unfiltered("products").to_string(), "products:all");
    }

    #[test]
    fn test_filter_distinguishes_keys() {
        let all = QueryKey::unfiltered("products");
        let filtered = QueryKey::new("products", Some("laptops"));
        assert_ne!(all, filtered);
        assert_eq!(all.resource(), filtered.resource());
    }
}
