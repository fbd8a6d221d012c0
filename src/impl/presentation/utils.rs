use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Display locale for amounts. Brazilian Portuguese groups thousands with '.'
/// and uses ',' as the decimal mark (R$ 1.234,56).
const LOCALE: Locale = Locale::pt;

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, BRL = 2).
fn decimal_places(currency: Currency) -> u32 {
    currency.exponent().unwrap_or(0) as u32
}

/// Format amount with currency symbol first, thousands separators and the
/// currency's number of decimal places. Rounds half away from zero at the
/// last displayed place.
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    let decimal_places = decimal_places(currency);
    let scale = 10_i64.pow(decimal_places);
    let minor = (amount.abs() * scale as f64).round() as i64;
    let sign = if amount < 0.0 && minor != 0 { "-" } else { "" };
    let integer_part = (minor / scale).to_formatted_string(&LOCALE);
    if decimal_places == 0 {
        return format!("{}{} {}", sign, currency.symbol(), integer_part);
    }
    format!(
        "{}{} {}{}{:0width$}",
        sign,
        currency.symbol(),
        integer_part,
        LOCALE.decimal(),
        minor % scale,
        width = decimal_places as usize,
    )
}

/// `part` as a percentage of `total`; 0 when the ratio is undefined.
pub(crate) fn ratio_percent(part: f64, total: f64) -> f64 {
    let ratio = part / total * 100.0;
    if ratio.is_finite() {
        ratio
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_brl_with_grouping_and_cents() {
        let s = format_amount(1234.5, Currency::BRL);
        assert!(s.ends_with("1.234,50"), "{s}");
        assert!(s.starts_with(&Currency::BRL.symbol().to_string()), "{s}");
    }

    #[test]
    fn rounds_to_cents() {
        assert!(format_amount(0.005, Currency::BRL).ends_with("0,01"));
        assert!(format_amount(2.999, Currency::BRL).ends_with("3,00"));
    }

    #[test]
    fn zero_decimal_currency_has_no_decimal_mark() {
        let s = format_amount(1500.4, Currency::JPY);
        assert!(s.ends_with("1.500"), "{s}");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        assert!(format_amount(-10.0, Currency::BRL).starts_with('-'));
        assert!(!format_amount(-0.001, Currency::BRL).starts_with('-'));
    }

    #[test]
    fn undefined_ratios_are_zero() {
        assert_eq!(ratio_percent(5.0, 0.0), 0.0);
        assert_eq!(ratio_percent(0.0, 0.0), 0.0);
        assert_eq!(ratio_percent(25.0, 100.0), 25.0);
    }
}
