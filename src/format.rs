//! Display formatting for amounts, dates and percentages.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use time::Date;

use crate::{
    Error,
    month::{MonthKey, short_month_name},
    timezone::local_now,
};

/// Format `number` as a dollar amount with two decimal places, e.g. "$1,234.50"
/// or "-$12.00".
pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .expect("\"$\" is a valid currency prefix")
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .expect("\"-$\" is a valid currency prefix")
            .precision(Precision::Decimals(2))
    });

    let formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        return "$0.00".to_owned();
    };

    pad_cents(formatted_string)
}

/// numfmt drops trailing zeros from the fractional part, e.g. "12.30" is
/// rendered as "12.3" and "7.00" as "7".
fn pad_cents(formatted_string: String) -> String {
    match formatted_string.rfind('.') {
        None => format!("{formatted_string}.00"),
        Some(dot) => match formatted_string.len() - dot - 1 {
            0 => format!("{formatted_string}00"),
            1 => format!("{formatted_string}0"),
            _ => formatted_string,
        },
    }
}

/// Formats a percentage rounded to a whole number, avoiding "-0%".
pub fn format_percentage(value: f64) -> String {
    let rounded = value.round();
    if rounded.abs() < 0.5 {
        "0%".to_string()
    } else {
        format!("{:.0}%", rounded)
    }
}

/// Format a date for display, e.g. "Jun 5, 2024".
pub fn format_date(date: Date) -> String {
    format!(
        "{} {}, {}",
        short_month_name(date.month()),
        date.day(),
        date.year()
    )
}

/// Format a date the way date inputs expect it, e.g. "2024-06-05".
pub fn format_date_input(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month() as u8,
        date.day()
    )
}

/// The key of the current month in `local_timezone`, e.g. "2024-06".
///
/// # Errors
/// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a valid,
/// canonical timezone name.
pub fn current_month(local_timezone: &str) -> Result<MonthKey, Error> {
    local_now(local_timezone).map(MonthKey::current)
}

/// Serde helpers for dates stored as "YYYY-MM-DD" strings.
pub mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};
    use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

    use super::format_date_input;

    const FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

    /// Serialize `date` as "YYYY-MM-DD".
    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_date_input(*date))
    }

    /// Deserialize a date from "YYYY-MM-DD".
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse(&text).map_err(D::Error::custom)
    }

    /// For optional fields, use together with `#[serde(default)]`.
    pub fn deserialize_option<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Date>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|text| parse(&text).map_err(D::Error::custom))
            .transpose()
    }

    /// Parse a "YYYY-MM-DD" date.
    pub fn parse(text: &str) -> Result<Date, time::error::Parse> {
        Date::parse(text.trim(), FORMAT)
    }
}
