//! Currency display formatting.
//!
//! Purely client-side: a static lookup table of the supported
//! currencies plus amount formatting for badges and spending rows.
//! Exchange-rate conversion happens on the backend; by the time an
//! amount reaches this module it is already in the display currency.

use shared::FormattedAmount;

/// Display metadata for one supported currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

/// The currencies the spending tracker offers in its selector.
pub const CURRENCIES: &[CurrencyInfo] = &[
    CurrencyInfo { code: "USD", symbol: "$", name: "US Dollar" },
    CurrencyInfo { code: "EUR", symbol: "€", name: "Euro" },
    CurrencyInfo { code: "GBP", symbol: "£", name: "British Pound" },
    CurrencyInfo { code: "JPY", symbol: "¥", name: "Japanese Yen" },
    CurrencyInfo { code: "AUD", symbol: "A$", name: "Australian Dollar" },
    CurrencyInfo { code: "CAD", symbol: "C$", name: "Canadian Dollar" },
    CurrencyInfo { code: "CHF", symbol: "CHF", name: "Swiss Franc" },
    CurrencyInfo { code: "CNY", symbol: "¥", name: "Chinese Yuan" },
    CurrencyInfo { code: "INR", symbol: "₹", name: "Indian Rupee" },
    CurrencyInfo { code: "KRW", symbol: "₩", name: "South Korean Won" },
    CurrencyInfo { code: "SGD", symbol: "S$", name: "Singapore Dollar" },
    CurrencyInfo { code: "HKD", symbol: "HK$", name: "Hong Kong Dollar" },
    CurrencyInfo { code: "NZD", symbol: "NZ$", name: "New Zealand Dollar" },
    CurrencyInfo { code: "SEK", symbol: "kr", name: "Swedish Krona" },
    CurrencyInfo { code: "NOK", symbol: "kr", name: "Norwegian Krone" },
    CurrencyInfo { code: "MXN", symbol: "$", name: "Mexican Peso" },
    CurrencyInfo { code: "BRL", symbol: "R$", name: "Brazilian Real" },
    CurrencyInfo { code: "ZAR", symbol: "R", name: "South African Rand" },
    CurrencyInfo { code: "THB", symbol: "฿", name: "Thai Baht" },
    CurrencyInfo { code: "MYR", symbol: "RM", name: "Malaysian Ringgit" },
];

/// Look up the display metadata for a currency code.
pub fn currency_info(code: &str) -> Option<&'static CurrencyInfo> {
    CURRENCIES.iter().find(|currency| currency.code == code)
}

/// Symbol for a currency code, falling back to the code itself.
pub fn currency_symbol(code: &str) -> &str {
    currency_info(code).map(|currency| currency.symbol).unwrap_or(code)
}

/// Human-readable name for a currency code, falling back to the code.
pub fn currency_name(code: &str) -> &str {
    currency_info(code).map(|currency| currency.name).unwrap_or(code)
}

/// Currencies customarily written without decimal places.
fn is_zero_decimal(code: &str) -> bool {
    code == "JPY" || code == "KRW"
}

/// Format an amount with its currency symbol, e.g. `$1,234.50` or `¥1,235`.
pub fn format_currency(amount: f64, code: &str) -> String {
    let decimals = if is_zero_decimal(code) { 0 } else { 2 };
    let fixed = format!("{:.*}", decimals, amount.abs());
    let (integer_part, fraction) = match fixed.split_once('.') {
        Some((integer_part, fraction)) => (integer_part, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut result = String::new();
    if amount < 0.0 {
        result.push('-');
    }
    result.push_str(currency_symbol(code));
    result.push_str(&group_thousands(integer_part));
    if let Some(fraction) = fraction {
        result.push('.');
        result.push_str(fraction);
    }
    result
}

/// Format an amount with the currency code as a suffix, e.g. `€10.00 EUR`.
pub fn format_currency_with_code(amount: f64, code: &str) -> String {
    format!("{} {}", format_currency(amount, code), code)
}

/// Format a spending for display in the user's currency, with an
/// "Originally ..." secondary line when the spending was entered in a
/// different one.
pub fn format_spending_amount(
    display_amount: f64,
    display_code: &str,
    original_amount: Option<f64>,
    original_code: Option<&str>,
) -> FormattedAmount {
    let primary = format_currency(display_amount, display_code);

    let secondary = match (original_amount, original_code) {
        (Some(amount), Some(code)) if code != display_code => {
            Some(format!("Originally {}", format_currency(amount, code)))
        }
        _ => None,
    };

    FormattedAmount { primary, secondary }
}

/// Insert comma separators into a plain digit string.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
