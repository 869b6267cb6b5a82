use std::fmt;

/// Every cache entry the catalog writes, one variant per query shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogCacheKey {
    AllProducts,
    ProductsPage { page: u32, page_size: u32 },
    Categories,
}

impl CatalogCacheKey {
    /// Shared prefix of every `ProductsPage` key.
    pub const PRODUCTS_PAGE_PREFIX: &'static str = "productsPage:";

    pub fn as_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CatalogCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogCacheKey::AllProducts => write!(f, "allProducts"),
            CatalogCacheKey::ProductsPage { page, page_size } => {
                write!(f, "{}{}:{}", Self::PRODUCTS_PAGE_PREFIX, page, page_size)
            }
            CatalogCacheKey::Categories => write!(f, "productCategories"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn should_build_fixed_keys() {
        assert_eq!(CatalogCacheKey::AllProducts.as_key(), "allProducts");
        assert_eq!(CatalogCacheKey::Categories.as_key(), "productCategories");
    }

    #[test]
    fn should_build_page_key_from_page_and_size() {
        let key = CatalogCacheKey::ProductsPage {
            page: 2,
            page_size: 10,
        };
        assert_eq!(key.as_key(), "productsPage:2:10");
    }

    #[test]
    fn should_not_collide_when_digits_could_be_regrouped() {
        let a = CatalogCacheKey::ProductsPage {
            page: 1,
            page_size: 12,
        };
        let b = CatalogCacheKey::ProductsPage {
            page: 11,
            page_size: 2,
        };
        assert_ne!(a.as_key(), b.as_key());
    }

    #[test]
    fn should_produce_distinct_keys_for_distinct_query_shapes() {
        let mut keys = HashSet::new();
        keys.insert(CatalogCacheKey::AllProducts.as_key());
        keys.insert(CatalogCacheKey::Categories.as_key());
        for page in 1..=30 {
            for page_size in 1..=30 {
                let inserted = keys.insert(
                    CatalogCacheKey::ProductsPage { page, page_size }.as_key(),
                );
                assert!(inserted, "collision at page={page} page_size={page_size}");
            }
        }
        assert_eq!(keys.len(), 2 + 30 * 30);
    }

    #[test]
    fn should_only_prefix_match_page_keys() {
        let prefix = CatalogCacheKey::PRODUCTS_PAGE_PREFIX;
        assert!(
            CatalogCacheKey::ProductsPage {
                page: 3,
                page_size: 5
            }
            .as_key()
            .starts_with(prefix)
        );
        assert!(!CatalogCacheKey::AllProducts.as_key().starts_with(prefix));
        assert!(!CatalogCacheKey::Categories.as_key().starts_with(prefix));
    }
}
