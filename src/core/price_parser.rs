use regex::Regex;
use std::sync::LazyLock;

use crate::error::catalog::CatalogError;
use crate::model::price::Price;

// ASCII digits only; only dollar prices appear in the catalog data.
static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$([0-9]{1,9})(?:\.([0-9]{1,2}))?$").expect("price pattern"));

pub fn parse_price(text: &str) -> Result<Price, CatalogError> {
    let invalid = || CatalogError::InvalidPrice(text.to_string());
    let caps = PRICE_RE.captures(text.trim()).ok_or_else(invalid)?;

    let whole: u64 = caps[1].parse().map_err(|_| invalid())?;
    let fraction: u64 = match caps.get(2) {
        Some(m) => {
            let digits: u64 = m.as_str().parse().map_err(|_| invalid())?;
            if m.as_str().len() == 1 { digits * 10 } else { digits }
        }
        None => 0,
    };

    Ok(Price::usd(whole * 100 + fraction))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dollar_prices() {
        assert_eq!(parse_price("$49.99").unwrap().cents, 4999);
        assert_eq!(parse_price("$40").unwrap().cents, 4000);
        assert_eq!(parse_price("$0.5").unwrap().cents, 50);
        assert_eq!(parse_price("  $34.99 ").unwrap().cents, 3499);
    }

    #[test]
    fn rejects_other_forms() {
        for text in ["49.99", "€49.99", "$", "$-5", "$4.999", "$49.99 USD", "", "$1,000"] {
            assert!(parse_price(text).is_err(), "accepted {text:?}");
        }
    }

    #[test]
    fn non_ascii_digits_are_an_invalid_price() {
        let err = parse_price("$٤٩").unwrap_err();
        assert!(matches!(&err, CatalogError::InvalidPrice(text) if text == "$٤٩"));
        assert_eq!(err.to_string(), "invalid price: \"$٤٩\"");
    }

    #[test]
    fn error_names_the_input() {
        let err = parse_price("£12").unwrap_err();
        assert!(err.to_string().contains("£12"));
    }
}
