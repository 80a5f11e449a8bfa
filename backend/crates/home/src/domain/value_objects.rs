//! Domain Value Objects
//!
//! Validated scalar types for listings and the listing query filter.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of property, fixed per listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(i16)]
pub enum PropertyType {
    Residential = 0,
    Condo = 1,
}

impl PropertyType {
    pub const ALL: [PropertyType; 2] = [PropertyType::Residential, PropertyType::Condo];

    /// Storage id
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    pub const fn code(&self) -> &'static str {
        match self {
            PropertyType::Residential => "RESIDENTIAL",
            PropertyType::Condo => "CONDO",
        }
    }

    pub fn from_id(id: i16) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Asking price; finite and never negative
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub fn new(value: f64) -> AppResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::bad_request("Price must be a non-negative number"));
        }
        Ok(Self(value))
    }

    pub fn from_db(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Trimmed, non-empty, bounded text such as an address or a city
pub fn required_text(field: &'static str, raw: &str, max_chars: usize) -> AppResult<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(AppError::bad_request(format!("{field} cannot be empty")));
    }
    if value.chars().count() > max_chars {
        return Err(AppError::bad_request(format!(
            "{field} must be at most {max_chars} characters"
        )));
    }
    Ok(value.to_string())
}

/// Non-negative finite measurement (bathrooms, land size)
pub fn non_negative(field: &'static str, value: f64) -> AppResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::bad_request(format!("{field} must be a non-negative number")));
    }
    Ok(value)
}

pub const ADDRESS_MAX_CHARS: usize = 255;
pub const CITY_MAX_CHARS: usize = 100;
pub const MESSAGE_MAX_CHARS: usize = 2000;
const IMAGE_URL_MAX_CHARS: usize = 2048;
pub const MAX_BEDROOMS: i32 = 1000;

pub fn bedrooms(value: i32) -> AppResult<i32> {
    if !(0..=MAX_BEDROOMS).contains(&value) {
        return Err(AppError::bad_request(format!(
            "Number of bedrooms must be between 0 and {MAX_BEDROOMS}"
        )));
    }
    Ok(value)
}

/// Absolute http(s) URL of a listing image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrl(String);

impl ImageUrl {
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let url = raw.as_ref().trim();
        let has_scheme = url.starts_with("https://") || url.starts_with("http://");
        let host_present = url.split_once("://").is_some_and(|(_, rest)| !rest.is_empty());

        if !has_scheme || !host_present || url.contains(char::is_whitespace) {
            return Err(AppError::bad_request("Image url must be an absolute http(s) URL"));
        }
        if url.len() > IMAGE_URL_MAX_CHARS {
            return Err(AppError::bad_request("Image url is too long"));
        }
        Ok(Self(url.to_string()))
    }

    pub fn from_db(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Inclusive price bounds; either side may be open
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub gte: Option<Price>,
    pub lte: Option<Price>,
}

impl PriceRange {
    /// `None` when both bounds are absent
    pub fn new(gte: Option<f64>, lte: Option<f64>) -> AppResult<Option<Self>> {
        let gte = gte.map(Price::new).transpose()?;
        let lte = lte.map(Price::new).transpose()?;

        if let (Some(min), Some(max)) = (gte, lte) {
            if min > max {
                return Err(AppError::bad_request(
                    "minPrice must be less than or equal to maxPrice",
                ));
            }
        }

        Ok((gte.is_some() || lte.is_some()).then_some(Self { gte, lte }))
    }

    pub fn contains(&self, price: Price) -> bool {
        self.gte.is_none_or(|min| price >= min) && self.lte.is_none_or(|max| price <= max)
    }
}

/// Listing query: required property type, optional city and price range
///
/// Request-scoped; shapes a single `WHERE` clause and is never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeFilter {
    pub property_type: PropertyType,
    pub city: Option<String>,
    pub price: Option<PriceRange>,
}

impl HomeFilter {
    pub fn new(
        property_type: PropertyType,
        city: Option<String>,
        min_price: Option<f64>,
        max_price: Option<f64>,
    ) -> AppResult<Self> {
        // blank city means "any city"
        let city = city
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(Self {
            property_type,
            city,
            price: PriceRange::new(min_price, max_price)?,
        })
    }
}
