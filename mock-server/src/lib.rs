//! In-memory implementation of the heroes backend REST contract.
//!
//! Serves `/api/heroes` CRUD plus the read-only `/api/superpowers` catalog.
//! Error bodies follow the real backend's two shapes — `{"message": ...}`
//! for business errors and `{"errors": {field: [...]}}` for validation
//! errors — so client-side normalization can be exercised end-to-end.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

pub const HERO_NOT_FOUND: &str = "Herói não encontrado.";
pub const NAME_REQUIRED: &str = "O campo nome é obrigatório.";
pub const DUPLICATE_NAME: &str = "Já existe um herói com este nome.";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Hero {
    pub id: Uuid,
    pub name: String,
    pub nickname: String,
    pub superpowers: Vec<String>,
}

#[derive(Deserialize)]
pub struct CreateHero {
    pub name: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub superpowers: Vec<String>,
}

#[derive(Deserialize)]
pub struct UpdateHero {
    pub name: Option<String>,
    pub nickname: Option<String>,
    pub superpowers: Option<Vec<String>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Superpower {
    pub id: u32,
    pub name: String,
    pub description: String,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Hero>>>;

/// Failure responses carry JSON bodies in one of the backend's two shapes.
type ApiFailure = (StatusCode, Json<Value>);

fn message_error(status: StatusCode, message: &str) -> ApiFailure {
    (status, Json(json!({ "message": message })))
}

fn validation_error(field: &str, message: &str) -> ApiFailure {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "errors": { field: [message] } })),
    )
}

/// The fixed superpowers catalog served by `/api/superpowers`.
pub fn superpowers() -> Vec<Superpower> {
    vec![
        Superpower {
            id: 1,
            name: "Super força".to_string(),
            description: "Força muito acima do limite humano.".to_string(),
        },
        Superpower {
            id: 2,
            name: "Voo".to_string(),
            description: "Deslocamento aéreo sem equipamento.".to_string(),
        },
        Superpower {
            id: 3,
            name: "Invisibilidade".to_string(),
            description: "Ficar invisível à vontade.".to_string(),
        },
        Superpower {
            id: 4,
            name: "Telecinese".to_string(),
            description: "Mover objetos com a mente.".to_string(),
        },
        Superpower {
            id: 5,
            name: "Controle do clima".to_string(),
            description: "Manipular tempestades, ventos e temperatura.".to_string(),
        },
    ]
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    let api = Router::new()
        .route("/heroes", get(list_heroes).post(create_hero))
        .route(
            "/heroes/{id}",
            get(get_hero).put(update_hero).delete(delete_hero),
        )
        .route("/superpowers", get(list_superpowers))
        .with_state(db);
    Router::new().nest("/api", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_heroes(State(db): State<Db>) -> Json<Vec<Hero>> {
    let heroes = db.read().await;
    Json(heroes.values().cloned().collect())
}

async fn create_hero(
    State(db): State<Db>,
    Json(input): Json<CreateHero>,
) -> Result<(StatusCode, Json<Hero>), ApiFailure> {
    if input.name.trim().is_empty() {
        return Err(validation_error("name", NAME_REQUIRED));
    }
    let mut heroes = db.write().await;
    if heroes.values().any(|hero| hero.name == input.name) {
        return Err(message_error(StatusCode::CONFLICT, DUPLICATE_NAME));
    }
    let hero = Hero {
        id: Uuid::new_v4(),
        name: input.name,
        nickname: input.nickname,
        superpowers: input.superpowers,
    };
    heroes.insert(hero.id, hero.clone());
    info!(id = %hero.id, name = %hero.name, "hero created");
    Ok((StatusCode::CREATED, Json(hero)))
}

async fn get_hero(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<Json<Hero>, ApiFailure> {
    let heroes = db.read().await;
    heroes
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| message_error(StatusCode::NOT_FOUND, HERO_NOT_FOUND))
}

async fn update_hero(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateHero>,
) -> Result<Json<Hero>, ApiFailure> {
    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            return Err(validation_error("name", NAME_REQUIRED));
        }
    }
    let mut heroes = db.write().await;
    let hero = heroes
        .get_mut(&id)
        .ok_or_else(|| message_error(StatusCode::NOT_FOUND, HERO_NOT_FOUND))?;
    if let Some(name) = input.name {
        hero.name = name;
    }
    if let Some(nickname) = input.nickname {
        hero.nickname = nickname;
    }
    if let Some(superpowers) = input.superpowers {
        hero.superpowers = superpowers;
    }
    Ok(Json(hero.clone()))
}

async fn delete_hero(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<StatusCode, ApiFailure> {
    let mut heroes = db.write().await;
    match heroes.remove(&id) {
        Some(hero) => {
            info!(id = %hero.id, "hero deleted");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(message_error(StatusCode::NOT_FOUND, HERO_NOT_FOUND)),
    }
}

async fn list_superpowers() -> Json<Vec<Superpower>> {
    Json(superpowers())
}
