//! In-memory booleans.io server for tests and local development.
//!
//! Speaks the service's wire protocol: urlencoded `val` tokens in, JSON
//! resource documents out, and a plain 200 on delete. State is a map from
//! assigned identifier to stored value.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// One stored boolean as it appears in responses, `val` as its wire token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoolResource {
    pub id: String,
    pub val: String,
}

impl BoolResource {
    fn new(id: &str, value: bool) -> Self {
        Self {
            id: id.to_string(),
            val: to_token(value).to_string(),
        }
    }
}

/// Urlencoded request body for create and update. An absent `val` leaves the
/// stored value unspecified.
#[derive(Deserialize)]
pub struct ValForm {
    pub val: Option<String>,
}

pub fn to_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub fn parse_token(token: &str) -> Option<bool> {
    match token {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

pub type Db = Arc<RwLock<HashMap<String, bool>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/", post(create_bool))
        .route("/{id}", get(get_bool).put(update_bool).delete(delete_bool))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn create_bool(
    State(db): State<Db>,
    Form(input): Form<ValForm>,
) -> Result<(StatusCode, Json<BoolResource>), StatusCode> {
    let value = match input.val {
        None => false,
        Some(token) => parse_token(&token).ok_or(StatusCode::BAD_REQUEST)?,
    };
    let id = Uuid::new_v4().to_string();
    db.write().await.insert(id.clone(), value);
    Ok((StatusCode::CREATED, Json(BoolResource::new(&id, value))))
}

async fn get_bool(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<BoolResource>, StatusCode> {
    let values = db.read().await;
    let value = values.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(BoolResource::new(&id, *value)))
}

async fn update_bool(
    State(db): State<Db>,
    Path(id): Path<String>,
    Form(input): Form<ValForm>,
) -> Result<Json<BoolResource>, StatusCode> {
    let mut values = db.write().await;
    let value = values.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(token) = input.val {
        *value = parse_token(&token).ok_or(StatusCode::BAD_REQUEST)?;
    }
    Ok(Json(BoolResource::new(&id, *value)))
}

async fn delete_bool(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut values = db.write().await;
    values
        .remove(&id)
        .map(|_| StatusCode::OK)
        .ok_or(StatusCode::NOT_FOUND)
}
