//! HTTP Handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use axum_extra::extract::WithRejection;
use kernel::id::HomeId;
use kernel::principal::Principal;
use std::sync::Arc;

use crate::application::{
    CreateHomeUseCase, DeleteHomeUseCase, GetHomeUseCase, InquireUseCase, ListHomesUseCase,
    ListMessagesUseCase, UpdateHomeUseCase,
};
use crate::domain::repository::{HomeRepository, MessageRepository};
use crate::domain::value_objects::HomeFilter;
use crate::error::{HomeError, HomeResult};
use crate::presentation::dto::{
    CreateHomeRequest, HomeDetailResponse, HomeQuery, HomeSummaryResponse, InquireRequest,
    InquiryCreatedResponse, MessageResponse, UpdateHomeRequest,
};

/// Shared state for listing handlers
#[derive(Clone)]
pub struct HomeAppState<R>
where
    R: HomeRepository + MessageRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Public
// ============================================================================

/// GET /api/homes?propertyType=&city=&minPrice=&maxPrice=
pub async fn list_homes<R>(
    State(state): State<HomeAppState<R>>,
    WithRejection(Query(query), _): WithRejection<Query<HomeQuery>, HomeError>,
) -> HomeResult<Json<Vec<HomeSummaryResponse>>>
where
    R: HomeRepository + MessageRepository + Clone + Send + Sync + 'static,
{
    let filter = HomeFilter::new(query.property_type, query.city, query.min_price, query.max_price)?;

    let homes = ListHomesUseCase::new(state.repo.clone())
        .execute(&filter)
        .await?;

    Ok(Json(homes.into_iter().map(Into::into).collect()))
}

/// GET /api/homes/{id}
pub async fn get_home<R>(
    State(state): State<HomeAppState<R>>,
    WithRejection(Path(home_id), _): WithRejection<Path<HomeId>, HomeError>,
) -> HomeResult<Json<HomeDetailResponse>>
where
    R: HomeRepository + MessageRepository + Clone + Send + Sync + 'static,
{
    let home = GetHomeUseCase::new(state.repo.clone())
        .execute(&home_id)
        .await?;

    Ok(Json(home.into()))
}

// ============================================================================
// Authenticated
// ============================================================================

/// POST /api/homes
pub async fn create_home<R>(
    State(state): State<HomeAppState<R>>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(req), _): WithRejection<Json<CreateHomeRequest>, HomeError>,
) -> HomeResult<impl IntoResponse>
where
    R: HomeRepository + MessageRepository + Clone + Send + Sync + 'static,
{
    let home = CreateHomeUseCase::new(state.repo.clone())
        .execute(&principal, req.into())
        .await?;

    Ok((StatusCode::CREATED, Json(HomeDetailResponse::from(home))))
}

/// PUT /api/homes/{id}
pub async fn update_home<R>(
    State(state): State<HomeAppState<R>>,
    Extension(principal): Extension<Principal>,
    WithRejection(Path(home_id), _): WithRejection<Path<HomeId>, HomeError>,
    WithRejection(Json(req), _): WithRejection<Json<UpdateHomeRequest>, HomeError>,
) -> HomeResult<Json<HomeDetailResponse>>
where
    R: HomeRepository + MessageRepository + Clone + Send + Sync + 'static,
{
    let home = UpdateHomeUseCase::new(state.repo.clone())
        .execute(&principal, &home_id, req.into())
        .await?;

    Ok(Json(home.into()))
}

/// DELETE /api/homes/{id}
pub async fn delete_home<R>(
    State(state): State<HomeAppState<R>>,
    Extension(principal): Extension<Principal>,
    WithRejection(Path(home_id), _): WithRejection<Path<HomeId>, HomeError>,
) -> HomeResult<StatusCode>
where
    R: HomeRepository + MessageRepository + Clone + Send + Sync + 'static,
{
    DeleteHomeUseCase::new(state.repo.clone())
        .execute(&principal, &home_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/homes/{id}/inquire
pub async fn inquire<R>(
    State(state): State<HomeAppState<R>>,
    Extension(principal): Extension<Principal>,
    WithRejection(Path(home_id), _): WithRejection<Path<HomeId>, HomeError>,
    WithRejection(Json(req), _): WithRejection<Json<InquireRequest>, HomeError>,
) -> HomeResult<impl IntoResponse>
where
    R: HomeRepository + MessageRepository + Clone + Send + Sync + 'static,
{
    let message = InquireUseCase::new(state.repo.clone(), state.repo.clone())
        .execute(&principal, &home_id, &req.message)
        .await?;

    Ok((StatusCode::CREATED, Json(InquiryCreatedResponse::from(message))))
}

/// GET /api/homes/{id}/messages
pub async fn list_messages<R>(
    State(state): State<HomeAppState<R>>,
    Extension(principal): Extension<Principal>,
    WithRejection(Path(home_id), _): WithRejection<Path<HomeId>, HomeError>,
) -> HomeResult<Json<Vec<MessageResponse>>>
where
    R: HomeRepository + MessageRepository + Clone + Send + Sync + 'static,
{
    let inquiries = ListMessagesUseCase::new(state.repo.clone(), state.repo.clone())
        .execute(&principal, &home_id)
        .await?;

    Ok(Json(inquiries.into_iter().map(Into::into).collect()))
}
