//! Shareable links for a product.
//!
//! Links are `{origin}/product/{id}` and `{origin}/checkout/{id}`, built by plain
//! concatenation. Identifiers are not percent-encoded.

use std::fmt::Display;

use crate::model::ProductId;

/// Which of the two links to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Public product page.
    Product,
    /// Straight to checkout.
    Checkout,
}

impl LinkKind {
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Checkout => "checkout",
        }
    }
}

impl Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path_segment())
    }
}

pub fn share_link(origin: &str, kind: LinkKind, id: &ProductId) -> String {
    format!("{}/{}/{}", origin, kind.path_segment(), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_shapes() {
        let id = ProductId::from("product_12");
        assert_eq!(
            share_link("https://shop.example", LinkKind::Product, &id),
            "https://shop.example/product/product_12"
        );
        assert_eq!(
            share_link("https://shop.example", LinkKind::Checkout, &id),
            "https://shop.example/checkout/product_12"
        );
    }

    #[test]
    fn test_identifier_is_not_encoded() {
        let id = ProductId::from("a b/c");
        assert_eq!(
            share_link("http://localhost:3000", LinkKind::Checkout, &id),
            "http://localhost:3000/checkout/a b/c"
        );
    }
}
