use std::str::FromStr;

use chrono::NaiveDate;
use counsel_core::errors::CoreError;
use counsel_store::views::Facet;

/// Parse a display label such as `Non-Compliant` or `google-ads`.
pub fn parse_label<T>(raw: &str) -> anyhow::Result<T>
where
    T: FromStr<Err = CoreError>,
{
    raw.parse::<T>().map_err(anyhow::Error::from)
}

/// Parse an optional filter value; missing or `all` leaves the facet open.
pub fn parse_facet<T>(raw: Option<&str>) -> anyhow::Result<Facet<T>>
where
    T: FromStr<Err = CoreError>,
{
    raw.map_or(Ok(Facet::All), |raw| {
        raw.parse::<Facet<T>>().map_err(anyhow::Error::from)
    })
}

pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}' (expected YYYY-MM-DD): {error}"))
}
