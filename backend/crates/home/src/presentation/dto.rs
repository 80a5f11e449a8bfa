//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::{CreateHomeInput, UpdateHomeInput};
use crate::domain::entities::{Home, Image, Inquiry, Message};
use crate::domain::value_objects::PropertyType;

// ============================================================================
// Listing Query
// ============================================================================

/// Query string of GET /api/homes
///
/// `propertyType` is required; a request without it is rejected by the
/// extractor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeQuery {
    pub property_type: PropertyType,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub min_price: Option<f64>,
    #[serde(default)]
    pub max_price: Option<f64>,
}

/// Row of the listing page, with the cover image only
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeSummaryResponse {
    pub id: Uuid,
    pub address: String,
    pub city: String,
    pub price: f64,
    pub property_type: PropertyType,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: f64,
    pub land_size: f64,
    pub listed_date: DateTime<Utc>,
    pub image: Option<String>,
}

impl From<Home> for HomeSummaryResponse {
    fn from(home: Home) -> Self {
        Self {
            id: home.id.into_uuid(),
            image: home.cover_image().map(|i| i.url.as_str().to_owned()),
            address: home.address,
            city: home.city,
            price: home.price.value(),
            property_type: home.property_type,
            number_of_bedrooms: home.number_of_bedrooms,
            number_of_bathrooms: home.number_of_bathrooms,
            land_size: home.land_size,
            listed_date: home.listed_date,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImageResponse {
    pub id: Uuid,
    pub url: String,
}

impl From<Image> for ImageResponse {
    fn from(image: Image) -> Self {
        Self {
            id: image.id.into_uuid(),
            url: image.url.as_str().to_owned(),
        }
    }
}

/// Full listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeDetailResponse {
    pub id: Uuid,
    pub address: String,
    pub city: String,
    pub price: f64,
    pub property_type: PropertyType,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: f64,
    pub land_size: f64,
    pub listed_date: DateTime<Utc>,
    pub images: Vec<ImageResponse>,
}

impl From<Home> for HomeDetailResponse {
    fn from(home: Home) -> Self {
        Self {
            id: home.id.into_uuid(),
            address: home.address,
            city: home.city,
            price: home.price.value(),
            property_type: home.property_type,
            number_of_bedrooms: home.number_of_bedrooms,
            number_of_bathrooms: home.number_of_bathrooms,
            land_size: home.land_size,
            listed_date: home.listed_date,
            images: home.images.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// Create / Update
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHomeRequest {
    pub address: String,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: f64,
    pub city: String,
    pub price: f64,
    pub land_size: f64,
    pub property_type: PropertyType,
    #[serde(default)]
    pub images: Vec<String>,
}

impl From<CreateHomeRequest> for CreateHomeInput {
    fn from(req: CreateHomeRequest) -> Self {
        Self {
            address: req.address,
            number_of_bedrooms: req.number_of_bedrooms,
            number_of_bathrooms: req.number_of_bathrooms,
            city: req.city,
            price: req.price,
            land_size: req.land_size,
            property_type: req.property_type,
            images: req.images,
        }
    }
}

/// Every field optional; `images` replaces the whole list when present
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateHomeRequest {
    pub address: Option<String>,
    pub number_of_bedrooms: Option<i32>,
    pub number_of_bathrooms: Option<f64>,
    pub city: Option<String>,
    pub price: Option<f64>,
    pub land_size: Option<f64>,
    pub property_type: Option<PropertyType>,
    pub images: Option<Vec<String>>,
}

impl From<UpdateHomeRequest> for UpdateHomeInput {
    fn from(req: UpdateHomeRequest) -> Self {
        Self {
            address: req.address,
            number_of_bedrooms: req.number_of_bedrooms,
            number_of_bathrooms: req.number_of_bathrooms,
            city: req.city,
            price: req.price,
            land_size: req.land_size,
            property_type: req.property_type,
            images: req.images,
        }
    }
}

// ============================================================================
// Inquiries
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct InquireRequest {
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryCreatedResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for InquiryCreatedResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id.into_uuid(),
            created_at: message.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BuyerResponse {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub buyer: BuyerResponse,
}

impl From<Inquiry> for MessageResponse {
    fn from(inquiry: Inquiry) -> Self {
        Self {
            id: inquiry.message.id.into_uuid(),
            message: inquiry.message.body,
            created_at: inquiry.message.created_at,
            buyer: BuyerResponse {
                name: inquiry.buyer.name,
                email: inquiry.buyer.email,
                phone: inquiry.buyer.phone,
            },
        }
    }
}
