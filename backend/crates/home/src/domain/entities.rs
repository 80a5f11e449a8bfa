//! Domain Entities
//!
//! Listings, their images, and buyer inquiries.

use chrono::{DateTime, Utc};
use kernel::id::{HomeId, ImageId, MessageId, UserId};

use crate::domain::value_objects::{ImageUrl, Price, PropertyType};

/// Listing image, kept in upload order
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub id: ImageId,
    pub url: ImageUrl,
}

impl Image {
    pub fn new(url: ImageUrl) -> Self {
        Self {
            id: ImageId::new(),
            url,
        }
    }
}

/// Home entity - a property listed by a realtor
#[derive(Debug, Clone, PartialEq)]
pub struct Home {
    pub id: HomeId,
    pub address: String,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: f64,
    pub city: String,
    pub listed_date: DateTime<Utc>,
    pub price: Price,
    pub land_size: f64,
    pub property_type: PropertyType,
    /// Owning realtor
    pub realtor_id: UserId,
    pub images: Vec<Image>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated fields of a new listing
#[derive(Debug, Clone)]
pub struct NewHome {
    pub address: String,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: f64,
    pub city: String,
    pub price: Price,
    pub land_size: f64,
    pub property_type: PropertyType,
    pub images: Vec<ImageUrl>,
}

/// Validated partial update; `None` leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct HomeChanges {
    pub address: Option<String>,
    pub number_of_bedrooms: Option<i32>,
    pub number_of_bathrooms: Option<f64>,
    pub city: Option<String>,
    pub price: Option<Price>,
    pub land_size: Option<f64>,
    pub property_type: Option<PropertyType>,
    /// Replaces the whole image list
    pub images: Option<Vec<ImageUrl>>,
}

impl Home {
    /// Listed now by `realtor_id`
    pub fn new(realtor_id: UserId, new: NewHome) -> Self {
        let now = Utc::now();
        Self {
            id: HomeId::new(),
            address: new.address,
            number_of_bedrooms: new.number_of_bedrooms,
            number_of_bathrooms: new.number_of_bathrooms,
            city: new.city,
            listed_date: now,
            price: new.price,
            land_size: new.land_size,
            property_type: new.property_type,
            realtor_id,
            images: new.images.into_iter().map(Image::new).collect(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, changes: HomeChanges) {
        if let Some(address) = changes.address {
            self.address = address;
        }
        if let Some(n) = changes.number_of_bedrooms {
            self.number_of_bedrooms = n;
        }
        if let Some(n) = changes.number_of_bathrooms {
            self.number_of_bathrooms = n;
        }
        if let Some(city) = changes.city {
            self.city = city;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(land_size) = changes.land_size {
            self.land_size = land_size;
        }
        if let Some(property_type) = changes.property_type {
            self.property_type = property_type;
        }
        if let Some(images) = changes.images {
            self.images = images.into_iter().map(Image::new).collect();
        }
        self.updated_at = Utc::now();
    }

    /// Cover image for listing summaries
    pub fn cover_image(&self) -> Option<&Image> {
        self.images.first()
    }
}

/// Inquiry sent by a buyer to the listing's realtor
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub home_id: HomeId,
    pub buyer_id: UserId,
    pub realtor_id: UserId,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(home: &Home, buyer_id: UserId, body: String) -> Self {
        Self {
            id: MessageId::new(),
            home_id: home.id,
            buyer_id,
            realtor_id: home.realtor_id,
            body,
            created_at: Utc::now(),
        }
    }
}

/// How the realtor can reach the buyer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyerContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Message joined with its sender's contact details
#[derive(Debug, Clone, PartialEq)]
pub struct Inquiry {
    pub message: Message,
    pub buyer: BuyerContact,
}
