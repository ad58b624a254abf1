//! What the seller sees, derived from [`ScreenState`] alone.

use crate::config::ScreenConfig;
use crate::links::LinkKind;
use crate::model::{ApprovalStatus, ProductId, ProductRecord, ProductStatus};
use crate::screen::{Phase, ScreenState};

pub const LOADING_TEXT: &str = "Loading your products...";
pub const SIGN_IN_TEXT: &str = "Please sign in to see your products.";
pub const HEADING: &str = "My Products";

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView {
    Loading { message: &'static str },
    SignedOut { message: &'static str },
    Products {
        heading: &'static str,
        cards: Vec<ProductCard>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: ProductId,
    pub title: String,
    pub price_label: String,
    pub status: Badge,
    pub approval: Badge,
    pub toggle_label: &'static str,
    pub checkout_label: &'static str,
    pub product_link_copied: bool,
}

pub fn render(state: &ScreenState, config: &ScreenConfig) -> ScreenView {
    match state.phase {
        Phase::Loading => ScreenView::Loading {
            message: LOADING_TEXT,
        },
        Phase::SignedOut => ScreenView::SignedOut {
            message: SIGN_IN_TEXT,
        },
        Phase::Ready => ScreenView::Products {
            heading: HEADING,
            cards: state
                .products
                .iter()
                .map(|record| card(record, state, config))
                .collect(),
        },
    }
}

fn card(record: &ProductRecord, state: &ScreenState, config: &ScreenConfig) -> ProductCard {
    let checkout_copied = state.copied.is_copied(LinkKind::Checkout, &record.id);
    ProductCard {
        id: record.id.clone(),
        title: record.name.clone(),
        price_label: format!("{} {}", config.currency_label, format_price(record.price)),
        status: Badge {
            label: record.status.to_string(),
            tone: match record.status {
                ProductStatus::Active => Tone::Positive,
                ProductStatus::Inactive => Tone::Negative,
            },
        },
        approval: Badge {
            label: record.approval_status.to_string(),
            tone: match record.approval_status {
                ApprovalStatus::Approved => Tone::Info,
                ApprovalStatus::Pending => Tone::Warning,
            },
        },
        toggle_label: if record.status.is_active() {
            "Deactivate"
        } else {
            "Activate"
        },
        checkout_label: if checkout_copied {
            "Checkout link copied!"
        } else {
            "Copy checkout link"
        },
        product_link_copied: state.copied.is_copied(LinkKind::Product, &record.id),
    }
}

/// Groups thousands with `,` and keeps at most two fraction digits, dropping trailing zeros.
pub fn format_price(price: f64) -> String {
    let cents = (price * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        0 => format!("{sign}{grouped}"),
        f if f % 10 == 0 => format!("{sign}{grouped}.{}", f / 10),
        f => format!("{sign}{grouped}.{f:02}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(records: Vec<ProductRecord>) -> ScreenState {
        let mut state = ScreenState {
            phase: Phase::Ready,
            ..ScreenState::default()
        };
        state.products.replace(records);
        state
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(999.0), "999");
        assert_eq!(format_price(1500.0), "1,500");
        assert_eq!(format_price(12.5), "12.5");
        assert_eq!(format_price(1234567.891), "1,234,567.89");
        assert_eq!(format_price(100000.05), "100,000.05");
    }

    #[test]
    fn test_phases_render_their_messages() {
        let config = ScreenConfig::default();
        assert_eq!(
            render(&ScreenState::default(), &config),
            ScreenView::Loading {
                message: LOADING_TEXT
            }
        );

        let signed_out = ScreenState {
            phase: Phase::SignedOut,
            ..ScreenState::default()
        };
        assert_eq!(
            render(&signed_out, &config),
            ScreenView::SignedOut {
                message: SIGN_IN_TEXT
            }
        );
    }

    #[test]
    fn test_card_badges_and_labels() {
        let state = ready(vec![
            ProductRecord::new("p1", "seller_a", "Cashew nuts", 1500.0)
                .with_approval(ApprovalStatus::Approved),
            ProductRecord::new("p2", "seller_a", "Capulana", 420.0)
                .with_status(ProductStatus::Inactive),
        ]);

        let ScreenView::Products { heading, cards } = render(&state, &ScreenConfig::default())
        else {
            panic!("expected product list");
        };
        assert_eq!(heading, HEADING);
        assert_eq!(cards.len(), 2);

        assert_eq!(cards[0].title, "Cashew nuts");
        assert_eq!(cards[0].price_label, "MT 1,500");
        assert_eq!(cards[0].status.tone, Tone::Positive);
        assert_eq!(cards[0].approval.label, "Approved");
        assert_eq!(cards[0].approval.tone, Tone::Info);
        assert_eq!(cards[0].toggle_label, "Deactivate");

        assert_eq!(cards[1].status.label, "Inactive");
        assert_eq!(cards[1].status.tone, Tone::Negative);
        assert_eq!(cards[1].approval.tone, Tone::Warning);
        assert_eq!(cards[1].toggle_label, "Activate");
    }

    #[test]
    fn test_copied_labels_follow_the_right_card() {
        let mut state = ready(vec![
            ProductRecord::new("p1", "seller_a", "A", 1.0),
            ProductRecord::new("p2", "seller_a", "B", 2.0),
        ]);
        state.copied.mark(LinkKind::Checkout, ProductId::from("p2"));
        state.copied.mark(LinkKind::Product, ProductId::from("p1"));

        let config = ScreenConfig {
            currency_label: "USD".to_string(),
            ..ScreenConfig::default()
        };
        let ScreenView::Products { cards, .. } = render(&state, &config) else {
            panic!("expected product list");
        };

        assert_eq!(cards[0].checkout_label, "Copy checkout link");
        assert!(cards[0].product_link_copied);
        assert_eq!(cards[1].checkout_label, "Checkout link copied!");
        assert!(!cards[1].product_link_copied);
        assert_eq!(cards[1].price_label, "USD 2");
    }
}
