//! HTTP routes for the user operations.
//!
//! ```text
//! GET  /example/get/users/all
//! GET  /example/get/user?email=E
//! POST /example/create/user   {"firstName":..,"lastName":..,"email":..}
//! PUT  /example/update/user   {"email":..,"firstName"?:..,"lastName"?:..}
//! ```

use crate::app_module::AppState;
use crate::di::Inject;
use crate::error::{Result, UserError};
use crate::modules::user::domain::{CreateUserRequest, UpdateUserRequest, User};
use crate::modules::user::service::UserService;
use axum::{
    Json, Router,
    extract::{
        Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    routing::{get, post, put},
};
use serde::Deserialize;

pub const LIST_PATH: &str = "/example/get/users/all";
pub const LOOKUP_PATH: &str = "/example/get/user";
pub const CREATE_PATH: &str = "/example/create/user";
pub const UPDATE_PATH: &str = "/example/update/user";

pub struct UserController;

impl UserController {
    /// Each route answers any other verb with 405 before its extractors run,
    /// so a wrong-verb request never has its body parsed.
    pub fn router() -> Router<AppState> {
        Router::new()
            .route(LIST_PATH, get(list_users).fallback(method_not_allowed))
            .route(LOOKUP_PATH, get(get_user).fallback(method_not_allowed))
            .route(CREATE_PATH, post(create_user).fallback(method_not_allowed))
            .route(UPDATE_PATH, put(update_user).fallback(method_not_allowed))
    }
}

#[derive(Debug, Deserialize)]
struct LookupQuery {
    #[serde(default)]
    email: String,
}

async fn list_users(Inject(service): Inject<UserService>) -> Result<Json<Vec<User>>> {
    Ok(Json(service.list().await?))
}

async fn get_user(
    Inject(service): Inject<UserService>,
    query: std::result::Result<Query<LookupQuery>, QueryRejection>,
) -> Result<Json<User>> {
    let Query(params) = query.map_err(|e| UserError::MalformedRequest(e.body_text()))?;
    Ok(Json(service.lookup(&params.email).await?))
}

async fn create_user(
    Inject(service): Inject<UserService>,
    body: std::result::Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>)> {
    let Json(req) = body.map_err(|e| UserError::MalformedRequest(e.body_text()))?;
    let user = service.create(req).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn update_user(
    Inject(service): Inject<UserService>,
    body: std::result::Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<User>> {
    let Json(req) = body.map_err(|e| UserError::MalformedRequest(e.body_text()))?;
    Ok(Json(service.update(req).await?))
}

async fn method_not_allowed() -> UserError {
    UserError::MethodNotAllowed
}
