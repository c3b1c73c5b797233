//! Display Formatting
//!
//! Pure helpers shared by every screen that shows money or dates:
//!
//! - [`currency`]: `.`-grouped VND amounts and their inverse
//! - [`date`]: defensive timestamp rendering in Vietnamese day/month/year order

pub mod currency;
pub mod date;

pub use currency::{
    CurrencyParseError, VND_SUFFIX, format_amount_vnd, format_currency, format_currency_vnd,
    parse_currency,
};
pub use date::{PLACEHOLDER, safe_date, safe_date_time};
