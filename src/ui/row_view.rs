//! Pure view-model derivation for the pair list. Kept free of egui so
//! the display rules stay unit-testable.

use crate::domain::{Pair, UNKNOWN_PRICE};

/// What the status line of a row shows. Loading wins over a stale
/// error, an error wins over stale prices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RowStatus {
    Loading,
    Error(String),
    Prices { usd: String, native: String },
}

pub(crate) fn row_status(pair: &Pair) -> RowStatus {
    if pair.loading {
        RowStatus::Loading
    } else if let Some(error) = &pair.error {
        RowStatus::Error(error.clone())
    } else {
        RowStatus::Prices {
            usd: display_price(pair.price_usd.as_deref()),
            native: display_price(pair.price_native.as_deref()),
        }
    }
}

pub(crate) fn display_price(price: Option<&str>) -> String {
    price.unwrap_or(UNKNOWN_PRICE).to_owned()
}

/// Storage stat formatting, e.g. `1.50 KB`.
pub(crate) fn format_storage_kb(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PairAddress;

    fn pair() -> Pair {
        Pair::new(
            "Test".to_owned(),
            PairAddress::parse("0x0000000000000000000000000000000000000000").unwrap(),
        )
    }

    #[test]
    fn fresh_pair_shows_placeholder_prices() {
        assert_eq!(
            row_status(&pair()),
            RowStatus::Prices {
                usd: UNKNOWN_PRICE.to_owned(),
                native: UNKNOWN_PRICE.to_owned(),
            }
        );
    }

    #[test]
    fn loading_wins_over_error_and_prices() {
        let mut p = pair();
        p.price_usd = Some("1.0".to_owned());
        p.error = Some("HTTP 500".to_owned());
        p.loading = true;
        assert_eq!(row_status(&p), RowStatus::Loading);
    }

    #[test]
    fn error_wins_over_stale_prices() {
        let mut p = pair();
        p.price_usd = Some("1.0".to_owned());
        p.error = Some("HTTP 404".to_owned());
        assert_eq!(row_status(&p), RowStatus::Error("HTTP 404".to_owned()));
    }

    #[test]
    fn fetched_prices_display_verbatim() {
        let mut p = pair();
        p.price_usd = Some("0.0001234".to_owned());
        p.price_native = Some("1.0000".to_owned());
        assert_eq!(
            row_status(&p),
            RowStatus::Prices {
                usd: "0.0001234".to_owned(),
                native: "1.0000".to_owned(),
            }
        );
    }

    #[test]
    fn storage_kb_formatting() {
        assert_eq!(format_storage_kb(0), "0.00 KB");
        assert_eq!(format_storage_kb(1536), "1.50 KB");
        assert_eq!(format_storage_kb(1024), "1.00 KB");
    }
}
