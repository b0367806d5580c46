//! Field projection and value formatting.
//!
//! Reduces a raw [`CountryRecord`] to the fixed set of fields shown to the
//! user, relabelled in Portuguese, with numbers formatted as `1.234.567.891`.

use serde::Serialize;
use serde_json::{Number, Value};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::config::MISSING_VALUE;
use crate::country::CountryRecord;

/// The fields shown to the user, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum KnownField {
    Name,
    Region,
    Population,
    Capital,
    Currency,
    Gdp,
    GdpPerCapita,
    LifeExpectancyMale,
    LifeExpectancyFemale,
    InternetUsers,
}

impl KnownField {
    /// Key of the field in the API record.
    pub fn key(&self) -> &'static str {
        match self {
            KnownField::Name => "name",
            KnownField::Region => "region",
            KnownField::Population => "population",
            KnownField::Capital => "capital",
            KnownField::Currency => "currency",
            KnownField::Gdp => "gdp",
            KnownField::GdpPerCapita => "gdp_per_capita",
            KnownField::LifeExpectancyMale => "life_expectancy_male",
            KnownField::LifeExpectancyFemale => "life_expectancy_female",
            KnownField::InternetUsers => "internet_users",
        }
    }

    /// Human-readable label shown in the table.
    pub fn label(&self) -> &'static str {
        match self {
            KnownField::Name => "Name",
            KnownField::Region => "Região",
            KnownField::Population => "População (Milhões)",
            KnownField::Capital => "Capital",
            KnownField::Currency => "Moeda",
            KnownField::Gdp => "PIB (USD)",
            KnownField::GdpPerCapita => "PIB per capita (USD)",
            KnownField::LifeExpectancyMale => "Expectativa de vida (homens)",
            KnownField::LifeExpectancyFemale => "Expectativa de vida (mulheres)",
            KnownField::InternetUsers => "Usuários de internet (%)",
        }
    }
}

/// One row of the projected table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectedField {
    pub label: &'static str,
    pub value: String,
}

/// Projected rows in [`KnownField`] order.
pub type ProjectedFields = Vec<ProjectedField>;

/// Keeps the known fields present in `record`, in declaration order.
///
/// Fields missing from the record are left out rather than shown as "N/A".
pub fn project(record: &CountryRecord) -> ProjectedFields {
    KnownField::iter()
        .filter_map(|field| {
            record.get(field.key()).map(|value| ProjectedField {
                label: field.label(),
                value: format_value(Some(value)),
            })
        })
        .collect()
}

/// Formats a record value for display.
///
/// Numbers go through [`format_number`], strings pass through unchanged,
/// nested values are shown as compact JSON. Missing and null values become
/// `"N/A"`.
pub fn format_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => MISSING_VALUE.to_string(),
        Some(Value::Number(n)) => format_number(n),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other @ (Value::Array(_) | Value::Object(_))) => other.to_string(),
    }
}

/// Formats a number with three decimals and period-separated thousands.
///
/// Done in two explicit steps so the output never depends on a locale:
/// `1234567.891` → `"1,234,567.891"` → `"1.234.567.891"`.
pub fn format_number(n: &Number) -> String {
    group_thousands(n).replace(',', ".")
}

/// `{:,.3f}`: comma-grouped integer part, exactly three decimals.
fn group_thousands(n: &Number) -> String {
    // Integers are formatted exactly; going through f64 would lose digits past 2^53.
    let (negative, int_part, frac_part) = if let Some(i) = n.as_i64() {
        (i < 0, i.unsigned_abs().to_string(), "000".to_string())
    } else if let Some(u) = n.as_u64() {
        (false, u.to_string(), "000".to_string())
    } else {
        let f = n.as_f64().unwrap_or(0.0);
        let fixed = format!("{:.3}", f.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "000"));
        (
            f.is_sign_negative(),
            int_part.to_string(),
            frac_part.to_string(),
        )
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 5);
    if negative {
        grouped.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push('.');
    grouped.push_str(&frac_part);
    grouped
}
