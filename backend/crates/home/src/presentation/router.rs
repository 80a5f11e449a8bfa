//! Home Router
//!
//! Split in two so the binary can put only the mutating half behind the
//! session middleware. Both halves can be merged under the same prefix.

use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::domain::repository::{HomeRepository, MessageRepository};
use crate::infra::postgres::PgHomeRepository;
use crate::presentation::handlers::{self, HomeAppState};

/// Anonymous listing routes backed by PostgreSQL
pub fn public_home_router(repo: PgHomeRepository) -> Router {
    public_home_router_generic(repo)
}

/// Routes that expect a `Principal` request extension
pub fn protected_home_router(repo: PgHomeRepository) -> Router {
    protected_home_router_generic(repo)
}

pub fn public_home_router_generic<R>(repo: R) -> Router
where
    R: HomeRepository + MessageRepository + Clone + Send + Sync + 'static,
{
    let state = HomeAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/", get(handlers::list_homes::<R>))
        .route("/{id}", get(handlers::get_home::<R>))
        .with_state(state)
}

pub fn protected_home_router_generic<R>(repo: R) -> Router
where
    R: HomeRepository + MessageRepository + Clone + Send + Sync + 'static,
{
    let state = HomeAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/", post(handlers::create_home::<R>))
        .route(
            "/{id}",
            put(handlers::update_home::<R>).delete(handlers::delete_home::<R>),
        )
        .route("/{id}/inquire", post(handlers::inquire::<R>))
        .route("/{id}/messages", get(handlers::list_messages::<R>))
        .with_state(state)
}
