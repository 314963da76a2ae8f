//! Static currency catalog and the allow-list of currencies the widget supports.

/// A single currency entry. Identity is the ISO 4217 `code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyRecord {
    pub name: &'static str,
    pub code: &'static str,
    pub symbol: &'static str,
    pub flag: &'static str,
}

impl CurrencyRecord {
    const fn new(
        name: &'static str,
        code: &'static str,
        symbol: &'static str,
        flag: &'static str,
    ) -> Self {
        Self {
            name,
            code,
            symbol,
            flag,
        }
    }

    /// Label used by the currency pickers, e.g. `USD - United States Dollar`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.code, self.name)
    }
}

pub const DEFAULT_FROM: &str = "USD";
pub const DEFAULT_TO: &str = "EUR";

/// Currencies the exchange-rate service can convert between.
pub const SUPPORTED_CODES: [&str; 31] = [
    "AUD", "BGN", "BRL", "CAD", "CHF", "CNY", "CZK", "DKK", "EUR", "GBP", "HKD", "HUF", "IDR",
    "ILS", "INR", "ISK", "JPY", "KRW", "MXN", "MYR", "NOK", "NZD", "PHP", "PLN", "RON", "SEK",
    "SGD", "THB", "TRY", "ZAR", "USD",
];

pub static MASTER_CURRENCIES: &[CurrencyRecord] = &[
    CurrencyRecord::new("Afghan Afghani", "AFN", "؋", "🇦🇫"),
    CurrencyRecord::new("Argentine Peso", "ARS", "$", "🇦🇷"),
    CurrencyRecord::new("Australian Dollar", "AUD", "$", "🇦🇺"),
    CurrencyRecord::new("Bulgarian Lev", "BGN", "лв", "🇧🇬"),
    CurrencyRecord::new("Brazilian Real", "BRL", "R$", "🇧🇷"),
    CurrencyRecord::new("Canadian Dollar", "CAD", "$", "🇨🇦"),
    CurrencyRecord::new("Swiss Franc", "CHF", "CHF", "🇨🇭"),
    CurrencyRecord::new("Chilean Peso", "CLP", "$", "🇨🇱"),
    CurrencyRecord::new("Chinese Yuan", "CNY", "¥", "🇨🇳"),
    CurrencyRecord::new("Colombian Peso", "COP", "$", "🇨🇴"),
    CurrencyRecord::new("Czech Koruna", "CZK", "Kč", "🇨🇿"),
    CurrencyRecord::new("Danish Krone", "DKK", "kr", "🇩🇰"),
    CurrencyRecord::new("Egyptian Pound", "EGP", "£", "🇪🇬"),
    CurrencyRecord::new("Euro", "EUR", "€", "🇪🇺"),
    CurrencyRecord::new("British Pound Sterling", "GBP", "£", "🇬🇧"),
    CurrencyRecord::new("Hong Kong Dollar", "HKD", "$", "🇭🇰"),
    CurrencyRecord::new("Hungarian Forint", "HUF", "Ft", "🇭🇺"),
    CurrencyRecord::new("Indonesian Rupiah", "IDR", "Rp", "🇮🇩"),
    CurrencyRecord::new("Israeli New Shekel", "ILS", "₪", "🇮🇱"),
    CurrencyRecord::new("Indian Rupee", "INR", "₹", "🇮🇳"),
    CurrencyRecord::new("Icelandic Krona", "ISK", "kr", "🇮🇸"),
    CurrencyRecord::new("Japanese Yen", "JPY", "¥", "🇯🇵"),
    CurrencyRecord::new("Kenyan Shilling", "KES", "KSh", "🇰🇪"),
    CurrencyRecord::new("South Korean Won", "KRW", "₩", "🇰🇷"),
    CurrencyRecord::new("Mexican Peso", "MXN", "$", "🇲🇽"),
    CurrencyRecord::new("Malaysian Ringgit", "MYR", "RM", "🇲🇾"),
    CurrencyRecord::new("Nigerian Naira", "NGN", "₦", "🇳🇬"),
    CurrencyRecord::new("Norwegian Krone", "NOK", "kr", "🇳🇴"),
    CurrencyRecord::new("New Zealand Dollar", "NZD", "$", "🇳🇿"),
    CurrencyRecord::new("Pakistani Rupee", "PKR", "₨", "🇵🇰"),
    CurrencyRecord::new("Philippine Peso", "PHP", "₱", "🇵🇭"),
    CurrencyRecord::new("Polish Zloty", "PLN", "zł", "🇵🇱"),
    CurrencyRecord::new("Romanian Leu", "RON", "lei", "🇷🇴"),
    CurrencyRecord::new("Russian Ruble", "RUB", "₽", "🇷🇺"),
    CurrencyRecord::new("Saudi Riyal", "SAR", "﷼", "🇸🇦"),
    CurrencyRecord::new("Swedish Krona", "SEK", "kr", "🇸🇪"),
    CurrencyRecord::new("Singapore Dollar", "SGD", "$", "🇸🇬"),
    CurrencyRecord::new("Thai Baht", "THB", "฿", "🇹🇭"),
    CurrencyRecord::new("Turkish Lira", "TRY", "₺", "🇹🇷"),
    CurrencyRecord::new("New Taiwan Dollar", "TWD", "NT$", "🇹🇼"),
    CurrencyRecord::new("Ukrainian Hryvnia", "UAH", "₴", "🇺🇦"),
    CurrencyRecord::new("United States Dollar", "USD", "$", "🇺🇸"),
    CurrencyRecord::new("Vietnamese Dong", "VND", "₫", "🇻🇳"),
    CurrencyRecord::new("South African Rand", "ZAR", "R", "🇿🇦"),
];

/// Keeps only allow-listed entries of `master`, in their original order.
pub fn filter_supported(master: &[CurrencyRecord]) -> Vec<CurrencyRecord> {
    master
        .iter()
        .filter(|record| SUPPORTED_CODES.contains(&record.code))
        .copied()
        .collect()
}

pub fn list_supported_currencies() -> Vec<CurrencyRecord> {
    filter_supported(MASTER_CURRENCIES)
}

/// The supported currency list with lookups by code.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<CurrencyRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::from_records(list_supported_currencies())
    }

    pub fn from_records(records: Vec<CurrencyRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CurrencyRecord] {
        &self.records
    }

    /// Case-insensitive lookup by ISO code.
    pub fn find(&self, code: &str) -> Option<&CurrencyRecord> {
        let code = code.trim();
        self.records
            .iter()
            .find(|record| record.code.eq_ignore_ascii_case(code))
    }

    /// Lookup by picker label (`USD - United States Dollar`) or plain code.
    pub fn find_by_label(&self, label: &str) -> Option<&CurrencyRecord> {
        let label = label.trim();
        self.records
            .iter()
            .find(|record| record.label() == label)
            .or_else(|| self.find(label))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.find(code).is_some()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
