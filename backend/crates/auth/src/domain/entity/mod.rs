//! Entity Module

pub mod auth;
pub mod auth_session;
pub mod user;
