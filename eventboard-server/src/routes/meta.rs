//! Enumerations the create/edit form offers

use axum::{Json, Router, routing::get};
use eventboard_core::constants::{CATEGORIES, CATEGORY_ALL, PRIORITIES};
use serde::Serialize;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/meta", get(meta))
}

#[derive(Serialize)]
pub struct Meta {
    pub categories: Vec<&'static str>,
    pub priorities: Vec<&'static str>,
    /// Category value meaning "no filter"
    pub category_all: &'static str,
}

/// GET /meta
async fn meta() -> Json<Meta> {
    Json(Meta {
        categories: CATEGORIES.to_vec(),
        priorities: PRIORITIES.to_vec(),
        category_all: CATEGORY_ALL,
    })
}
