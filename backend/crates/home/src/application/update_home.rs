//! Update Home Use Case

use std::sync::Arc;

use kernel::id::HomeId;
use kernel::principal::Principal;

use crate::domain::entities::{Home, HomeChanges};
use crate::domain::repository::HomeRepository;
use crate::domain::services::ensure_can_manage;
use crate::domain::value_objects::{
    ADDRESS_MAX_CHARS, CITY_MAX_CHARS, ImageUrl, Price, PropertyType, bedrooms, non_negative,
    required_text,
};
use crate::error::{HomeError, HomeResult};

/// Partial update; absent fields stay as they are
#[derive(Debug, Clone, Default)]
pub struct UpdateHomeInput {
    pub address: Option<String>,
    pub number_of_bedrooms: Option<i32>,
    pub number_of_bathrooms: Option<f64>,
    pub city: Option<String>,
    pub price: Option<f64>,
    pub land_size: Option<f64>,
    pub property_type: Option<PropertyType>,
    pub images: Option<Vec<String>>,
}

impl UpdateHomeInput {
    fn validate(self) -> HomeResult<HomeChanges> {
        Ok(HomeChanges {
            address: self
                .address
                .map(|a| required_text("Address", &a, ADDRESS_MAX_CHARS))
                .transpose()?,
            number_of_bedrooms: self.number_of_bedrooms.map(bedrooms).transpose()?,
            number_of_bathrooms: self
                .number_of_bathrooms
                .map(|n| non_negative("Number of bathrooms", n))
                .transpose()?,
            city: self
                .city
                .map(|c| required_text("City", &c, CITY_MAX_CHARS))
                .transpose()?,
            price: self.price.map(Price::new).transpose()?,
            land_size: self
                .land_size
                .map(|n| non_negative("Land size", n))
                .transpose()?,
            property_type: self.property_type,
            images: self
                .images
                .map(|urls| urls.iter().map(ImageUrl::new).collect::<Result<Vec<_>, _>>())
                .transpose()?,
        })
    }
}

pub struct UpdateHomeUseCase<H>
where
    H: HomeRepository,
{
    home_repo: Arc<H>,
}

impl<H> UpdateHomeUseCase<H>
where
    H: HomeRepository,
{
    pub fn new(home_repo: Arc<H>) -> Self {
        Self { home_repo }
    }

    pub async fn execute(
        &self,
        principal: &Principal,
        home_id: &HomeId,
        input: UpdateHomeInput,
    ) -> HomeResult<Home> {
        let mut home = self
            .home_repo
            .find_by_id(home_id)
            .await?
            .ok_or(HomeError::HomeNotFound)?;

        ensure_can_manage(principal, &home)?;

        home.apply(input.validate()?);
        self.home_repo.update(&home).await?;

        tracing::info!(home_id = %home.id, user_id = %principal.user_id, "Home updated");

        Ok(home)
    }
}
