//! Create Home Use Case

use std::sync::Arc;

use kernel::principal::Principal;

use crate::domain::entities::{Home, NewHome};
use crate::domain::repository::HomeRepository;
use crate::domain::services::ensure_can_create;
use crate::domain::value_objects::{
    ADDRESS_MAX_CHARS, CITY_MAX_CHARS, ImageUrl, Price, PropertyType, bedrooms, non_negative,
    required_text,
};
use crate::error::HomeResult;

/// Unvalidated listing fields
#[derive(Debug, Clone)]
pub struct CreateHomeInput {
    pub address: String,
    pub number_of_bedrooms: i32,
    pub number_of_bathrooms: f64,
    pub city: String,
    pub price: f64,
    pub land_size: f64,
    pub property_type: PropertyType,
    pub images: Vec<String>,
}

impl CreateHomeInput {
    fn validate(self) -> HomeResult<NewHome> {
        Ok(NewHome {
            address: required_text("Address", &self.address, ADDRESS_MAX_CHARS)?,
            number_of_bedrooms: bedrooms(self.number_of_bedrooms)?,
            number_of_bathrooms: non_negative("Number of bathrooms", self.number_of_bathrooms)?,
            city: required_text("City", &self.city, CITY_MAX_CHARS)?,
            price: Price::new(self.price)?,
            land_size: non_negative("Land size", self.land_size)?,
            property_type: self.property_type,
            images: self
                .images
                .iter()
                .map(ImageUrl::new)
                .collect::<Result<_, _>>()?,
        })
    }
}

pub struct CreateHomeUseCase<H>
where
    H: HomeRepository,
{
    home_repo: Arc<H>,
}

impl<H> CreateHomeUseCase<H>
where
    H: HomeRepository,
{
    pub fn new(home_repo: Arc<H>) -> Self {
        Self { home_repo }
    }

    pub async fn execute(&self, principal: &Principal, input: CreateHomeInput) -> HomeResult<Home> {
        ensure_can_create(principal)?;

        let home = Home::new(principal.user_id, input.validate()?);
        self.home_repo.create(&home).await?;

        tracing::info!(
            home_id = %home.id,
            realtor_id = %home.realtor_id,
            images = home.images.len(),
            "Home listed"
        );

        Ok(home)
    }
}
