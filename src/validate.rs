use chrono::NaiveDate;

use crate::error::{Result, TrackerError};

const ID_PREFIX: &str = "EXP";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepts exactly `YYYY-MM-DD` naming a real calendar day and returns the input unchanged.
pub fn validate_date(date: &str) -> Result<&str> {
    let invalid = || TrackerError::InvalidDate(date.to_string());

    let bytes = date.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        });
    if !shape_ok {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| invalid())?;
    Ok(date)
}

pub fn validate_amount(amount: f64) -> Result<f64> {
    // Non-finite amounts can't be stored as JSON numbers
    if amount.is_finite() && amount > 0.0 {
        Ok(amount)
    } else {
        Err(TrackerError::InvalidAmount(amount))
    }
}

pub fn normalize_category(category: &str) -> Result<String> {
    let normalized = category.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(TrackerError::EmptyCategory);
    }
    Ok(normalized)
}

/// Derives `EXP-<date without dashes>-<seq>` where `seq` continues from the
/// numeric suffix of the *last* id, regardless of which date that id carries.
pub fn generate_id(date: &str, existing_ids: &[String]) -> Result<String> {
    let last_id = existing_ids.last().ok_or(TrackerError::NoExistingRecords)?;
    let next = id_suffix(last_id)?
        .checked_add(1)
        .ok_or_else(|| TrackerError::MalformedId(last_id.clone()))?;
    Ok(format_id(date, next))
}

/// The id given to the first record of an empty collection.
pub fn first_id(date: &str) -> String {
    format_id(date, 1)
}

fn format_id(date: &str, sequence: u32) -> String {
    format!("{ID_PREFIX}-{}-{sequence:04}", date.replace('-', ""))
}

fn id_suffix(id: &str) -> Result<u32> {
    id.rsplit('-')
        .next()
        .and_then(|suffix| suffix.parse().ok())
        .ok_or_else(|| TrackerError::MalformedId(id.to_string()))
}
