//! Decode rules shared by every PVOutput endpoint.
//!
//! Responses are positional: a comma separated line with no field names.
//! Each endpoint declares an ordered field table and pulls values out of a
//! [`Fields`] cursor with the typed helpers below.

use crate::core::DecodeError;
use chrono::{NaiveDate, NaiveTime};
use std::str::FromStr;

/// Literal the API uses for a missing numeric reading.
pub(crate) const NAN: &str = "NaN";

/// Ordered view over the raw fields of one response.
pub(crate) struct Fields<'a> {
    names: &'static [&'static str],
    values: Vec<&'a str>,
    pos: usize,
}

impl<'a> Fields<'a> {
    /// Split `text` on commas and check it against the field table.
    pub(crate) fn split(
        endpoint: &'static str,
        names: &'static [&'static str],
        text: &'a str,
    ) -> Result<Self, DecodeError> {
        let values: Vec<&str> = text.trim().split(',').collect();
        if values.len() != names.len() {
            return Err(DecodeError::FieldCount {
                endpoint,
                expected: names.len(),
                found: values.len(),
            });
        }
        Ok(Self {
            names,
            values,
            pos: 0,
        })
    }

    fn next_raw(&mut self) -> (&'static str, &'a str) {
        // split() guarantees one value per name; decoders read each name once.
        let item = (self.names[self.pos], self.values[self.pos]);
        self.pos += 1;
        item
    }

    /// String field, passed through unchanged.
    pub(crate) fn text(&mut self) -> String {
        self.next_raw().1.to_string()
    }

    /// String field that must not be empty.
    pub(crate) fn required_text(&mut self) -> Result<String, DecodeError> {
        let (field, raw) = self.next_raw();
        if raw.is_empty() {
            return Err(DecodeError::Missing { field });
        }
        Ok(raw.to_string())
    }

    /// Numeric field where `NaN` means "no reading".
    pub(crate) fn number<T: FromStr>(&mut self) -> Result<Option<T>, DecodeError> {
        let (field, raw) = self.next_raw();
        nan_or(field, raw)
    }

    /// Date field where an empty value means "unknown".
    pub(crate) fn date(&mut self) -> Result<Option<NaiveDate>, DecodeError> {
        let (field, raw) = self.next_raw();
        optional_date(field, raw)
    }

    /// Date field that must be present.
    pub(crate) fn required_date(&mut self) -> Result<NaiveDate, DecodeError> {
        let (field, raw) = self.next_raw();
        optional_date(field, raw)?.ok_or(DecodeError::Missing { field })
    }

    /// Time-of-day field, `HH:MM` or `HH:MM:SS`.
    pub(crate) fn time(&mut self) -> Result<NaiveTime, DecodeError> {
        let (field, raw) = self.next_raw();
        NaiveTime::parse_from_str(raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
            .map_err(|_| DecodeError::Time {
                field,
                value: raw.to_string(),
            })
    }
}

pub(crate) fn nan_or<T: FromStr>(field: &'static str, raw: &str) -> Result<Option<T>, DecodeError> {
    if raw == NAN {
        return Ok(None);
    }
    raw.parse().map(Some).map_err(|_| DecodeError::Number {
        field,
        value: raw.to_string(),
    })
}

/// `YYYYMMDD` is rewritten to `YYYY-MM-DD` before parsing.
pub(crate) fn optional_date(field: &'static str, raw: &str) -> Result<Option<NaiveDate>, DecodeError> {
    if raw.is_empty() {
        return Ok(None);
    }
    let invalid = || DecodeError::Date {
        field,
        value: raw.to_string(),
    };
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let iso = format!("{}-{}-{}", &raw[..4], &raw[4..6], &raw[6..]);
    NaiveDate::parse_from_str(&iso, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| invalid())
}

/// Text before the first `;`. Anything after it is extension data this client ignores.
pub(crate) fn primary_section(text: &str) -> &str {
    text.split_once(';').map_or(text, |(head, _)| head)
}
