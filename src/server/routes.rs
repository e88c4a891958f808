//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::error::Error;
use crate::game::{Game, GameMode, GameView};
use crate::selector::{day_key, today_utc, ThreadRngPicker};
use crate::server::state::AppState;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/status", get(status_handler))
        .route("/api/countries", get(countries_handler))
        .route("/api/games", post(create_game_handler))
        .route("/api/games/:id", get(game_handler))
        .route("/api/games/:id/guesses", post(guess_handler))
        .route("/api/games/:id/reset", post(reset_handler))
        .with_state(state)
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::EmptyCatalog => "EMPTY_CATALOG",
            Error::RoundAlreadyOver => "ROUND_ALREADY_OVER",
            Error::DuplicateGuess(_) => "DUPLICATE_GUESS",
            Error::UnknownLocation(_) => "UNKNOWN_LOCATION",
            Error::ResetNotAllowed => "RESET_NOT_ALLOWED",
            Error::InvalidCoordinates(_) => "INVALID_COORDINATES",
            Error::Catalog(_) => "CATALOG_ERROR",
            Error::Config(_) => "CONFIG_ERROR",
            _ => "INTERNAL_ERROR",
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
        }
    }
}

/// Map a core error onto an HTTP status and body
fn error_response(err: Error) -> (StatusCode, Json<ApiError>) {
    let status = match &err {
        Error::UnknownLocation(_) => StatusCode::NOT_FOUND,
        Error::DuplicateGuess(_) | Error::RoundAlreadyOver => StatusCode::CONFLICT,
        Error::ResetNotAllowed => StatusCode::FORBIDDEN,
        Error::EmptyCatalog | Error::Io(_) | Error::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    };
    (status, Json(ApiError::from(err)))
}

fn game_not_found(id: &Uuid) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiError {
            error: format!("Game not found: {}", id),
            code: "NOT_FOUND".to_string(),
        }),
    )
}

/// Game snapshot with its id
#[derive(Debug, Serialize, Deserialize)]
pub struct GameResponse {
    pub id: Uuid,
    #[serde(flatten)]
    pub game: GameView,
}

impl GameResponse {
    fn new(id: Uuid, game: &Game, state: &AppState) -> Self {
        let zoom = state.config.map_zoom(game.round().guesses().len());
        Self {
            id,
            game: game.view(zoom),
        }
    }
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Current UTC date
    pub date: NaiveDate,
    /// Days since 1970-01-01 for `date`
    pub day_key: i64,
    /// Number of guessable locations
    pub locations: usize,
    /// Number of live games
    pub games: usize,
    /// Whether practice games may be created
    pub practice: bool,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let date = today_utc();
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        date,
        day_key: day_key(date),
        locations: state.catalog.len(),
        games: state.game_count().await,
        practice: state.config.game.practice,
    })
}

/// Country search query
#[derive(Debug, Deserialize)]
pub struct CountriesQuery {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

/// Country list response
#[derive(Debug, Serialize, Deserialize)]
pub struct CountriesResponse {
    pub countries: Vec<String>,
}

/// List guessable names, or suggestions for partial input
///
/// GET /api/countries?q=fr&limit=5
async fn countries_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CountriesQuery>,
) -> Json<CountriesResponse> {
    let countries = match query.q.as_deref() {
        Some(q) => state
            .catalog
            .suggest(q, query.limit.unwrap_or(state.config.game.suggestions))
            .into_iter()
            .map(|l| l.name.clone())
            .collect(),
        None => state
            .catalog
            .locations()
            .iter()
            .map(|l| l.name.clone())
            .collect(),
    };

    Json(CountriesResponse { countries })
}

/// Create game request body
#[derive(Debug, Default, Deserialize)]
pub struct CreateGameRequest {
    #[serde(default)]
    pub mode: GameMode,
}

/// Start a new game
///
/// POST /api/games
async fn create_game_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateGameRequest>,
) -> ApiResult<GameResponse> {
    let today = today_utc();

    let game = match req.mode {
        GameMode::Daily => Game::daily(&state.catalog, today),
        GameMode::Practice => {
            if !state.config.game.practice {
                warn!("Rejected practice game: practice mode is disabled");
                return Err((
                    StatusCode::FORBIDDEN,
                    Json(ApiError {
                        error: "Practice mode is disabled".to_string(),
                        code: "PRACTICE_DISABLED".to_string(),
                    }),
                ));
            }
            Game::practice(&state.catalog, &ThreadRngPicker::new(), today)
        }
    }
    .map_err(error_response)?;

    let response_game = game.clone();
    let id = state.insert_game(game, today).await;
    info!(game = %id, mode = %req.mode, date = %today, "Game created");

    Ok(Json(GameResponse::new(id, &response_game, &state)))
}

/// Get a game
///
/// GET /api/games/:id
async fn game_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<GameResponse> {
    let game = state.game(&id).await.ok_or_else(|| game_not_found(&id))?;
    let mut game = game.lock().await;

    if game.roll_over(&state.catalog, today_utc()).map_err(error_response)? {
        info!(game = %id, date = %game.date(), "Game rolled over to a new day");
    }

    Ok(Json(GameResponse::new(id, &game, &state)))
}

/// Guess request body
#[derive(Debug, Deserialize)]
pub struct GuessRequest {
    pub name: String,
}

/// Submit a guess
///
/// POST /api/games/:id/guesses
async fn guess_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<GuessRequest>,
) -> ApiResult<GameResponse> {
    let game = state.game(&id).await.ok_or_else(|| game_not_found(&id))?;
    // Held until the response is built: one evaluation per game at a time
    let mut game = game.lock().await;

    if game.roll_over(&state.catalog, today_utc()).map_err(error_response)? {
        info!(game = %id, date = %game.date(), "Game rolled over to a new day");
    }

    match game.guess(&state.catalog, &req.name) {
        Ok(guess) => {
            debug!(
                game = %id,
                guess = %guess.name,
                distance_km = guess.distance_km,
                direction = %guess.direction,
                "Guess evaluated"
            );
        }
        Err(e) => {
            debug!(game = %id, input = %req.name, error = %e, "Guess rejected");
            return Err(error_response(e));
        }
    }

    if game.status().is_terminal() {
        info!(game = %id, status = %game.status(), attempts = game.round().guesses().len(), "Round finished");
    }

    Ok(Json(GameResponse::new(id, &game, &state)))
}

/// Restart a practice game with a new random secret
///
/// POST /api/games/:id/reset
async fn reset_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<GameResponse> {
    let game = state.game(&id).await.ok_or_else(|| game_not_found(&id))?;
    let mut game = game.lock().await;

    game.reset(&state.catalog, &ThreadRngPicker::new())
        .map_err(error_response)?;
    info!(game = %id, "Practice game reset");

    Ok(Json(GameResponse::new(id, &game, &state)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Location};
    use crate::config::Config;
    use crate::round::RoundStatus;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_catalog() -> Catalog {
        Catalog::new(vec![
            Location::new("Japan", 36.2048, 138.2529),
            Location::new("France", 46.2276, 2.2137),
            Location::new("Chile", -35.6751, -71.543),
            Location::new("Kenya", -0.0236, 37.9062),
            Location::new("Canada", 56.1304, -106.3468),
            Location::new("India", 20.5937, 78.9629),
            Location::new("Spain", 40.4637, -3.7492),
            Location::new("Peru", -9.19, -75.0152),
            Location::new("Norway", 60.472, 8.4689),
        ])
        .unwrap()
    }

    fn create_test_state(practice: bool) -> Arc<AppState> {
        let mut config = Config::default();
        config.game.practice = practice;
        Arc::new(AppState::new(config, test_catalog()))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn create_game(app: &Router, mode: &str) -> (StatusCode, Value) {
        send(app, "POST", "/api/games", Some(json!({ "mode": mode }))).await
    }

    async fn secret_of(state: &AppState, id: &str) -> String {
        let id: Uuid = id.parse().unwrap();
        let game = state.game(&id).await.unwrap();
        let game = game.lock().await;
        game.secret().name.clone()
    }

    fn wrong_names(secret: &str) -> Vec<&'static str> {
        ["Japan", "France", "Chile", "Kenya", "Canada", "India", "Spain", "Peru", "Norway"]
            .into_iter()
            .filter(|n| *n != secret)
            .collect()
    }

    #[tokio::test]
    async fn test_status_endpoint() {
        let state = create_test_state(false);
        let app = create_router(state);

        let (status, body) = send(&app, "GET", "/api/status", None).await;
        assert_eq!(status, StatusCode::OK);

        let status: StatusResponse = serde_json::from_value(body).unwrap();
        assert!(status.running);
        assert_eq!(status.locations, 9);
        assert_eq!(status.games, 0);
        assert_eq!(status.day_key, day_key(status.date));
        assert!(!status.practice);
    }

    #[tokio::test]
    async fn test_countries_endpoint() {
        let app = create_router(create_test_state(false));

        let (status, body) = send(&app, "GET", "/api/countries", None).await;
        assert_eq!(status, StatusCode::OK);
        let all: CountriesResponse = serde_json::from_value(body).unwrap();
        assert_eq!(all.countries.len(), 9);

        let (_, body) = send(&app, "GET", "/api/countries?q=an", None).await;
        let found: CountriesResponse = serde_json::from_value(body).unwrap();
        assert_eq!(found.countries, vec!["Japan", "France", "Canada"]);

        let (_, body) = send(&app, "GET", "/api/countries?q=an&limit=1", None).await;
        let found: CountriesResponse = serde_json::from_value(body).unwrap();
        assert_eq!(found.countries.len(), 1);
    }

    #[tokio::test]
    async fn test_create_daily_game() {
        let state = create_test_state(false);
        let app = create_router(state.clone());

        let (status, body) = create_game(&app, "daily").await;
        assert_eq!(status, StatusCode::OK);

        let game: GameResponse = serde_json::from_value(body).unwrap();
        assert_eq!(game.game.mode, GameMode::Daily);
        assert_eq!(game.game.status, RoundStatus::InProgress);
        assert_eq!(game.game.attempts, 0);
        assert_eq!(game.game.remaining, 6);
        assert_eq!(game.game.zoom, 8);
        assert!(game.game.answer.is_none());
        assert_eq!(state.game_count().await, 1);
    }

    #[tokio::test]
    async fn test_create_game_default_mode() {
        let app = create_router(create_test_state(false));
        let (status, body) = send(&app, "POST", "/api/games", Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "daily");
    }

    #[tokio::test]
    async fn test_guess_then_win() {
        let state = create_test_state(false);
        let app = create_router(state.clone());

        let (_, body) = create_game(&app, "daily").await;
        let id = body["id"].as_str().unwrap().to_string();
        let secret = secret_of(&state, &id).await;
        let wrong = wrong_names(&secret)[0];

        let uri = format!("/api/games/{}/guesses", id);
        let (status, body) = send(&app, "POST", &uri, Some(json!({ "name": wrong }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["attempts"], 1);
        assert_eq!(body["zoom"], 7);
        assert_eq!(body["guesses"][0]["is_correct"], false);
        assert!(body.get("answer").is_none());

        let (status, body) = send(&app, "POST", &uri, Some(json!({ "name": secret.to_lowercase() }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "won");
        assert_eq!(body["guesses"][1]["is_correct"], true);
        assert_eq!(body["guesses"][1]["distance_km"], 0);
        assert_eq!(body["answer"], secret.as_str());

        let (status, body) = send(&app, "POST", &uri, Some(json!({ "name": wrong_names(&secret)[1] }))).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "ROUND_ALREADY_OVER");
    }

    #[tokio::test]
    async fn test_six_misses_lose() {
        let state = create_test_state(false);
        let app = create_router(state.clone());

        let (_, body) = create_game(&app, "daily").await;
        let id = body["id"].as_str().unwrap().to_string();
        let secret = secret_of(&state, &id).await;
        let uri = format!("/api/games/{}/guesses", id);

        let wrong = wrong_names(&secret);
        let mut last = Value::Null;
        for name in &wrong[..6] {
            let (status, body) = send(&app, "POST", &uri, Some(json!({ "name": name }))).await;
            assert_eq!(status, StatusCode::OK);
            last = body;
        }

        assert_eq!(last["status"], "lost");
        assert_eq!(last["remaining"], 0);
        assert_eq!(last["zoom"], 2);
        assert_eq!(last["answer"], secret.as_str());

        let (status, body) = send(&app, "POST", &uri, Some(json!({ "name": wrong[6] }))).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "ROUND_ALREADY_OVER");
    }

    #[tokio::test]
    async fn test_duplicate_and_unknown_guesses() {
        let state = create_test_state(false);
        let app = create_router(state.clone());

        let (_, body) = create_game(&app, "daily").await;
        let id = body["id"].as_str().unwrap().to_string();
        let secret = secret_of(&state, &id).await;
        let wrong = wrong_names(&secret)[0];
        let uri = format!("/api/games/{}/guesses", id);

        send(&app, "POST", &uri, Some(json!({ "name": wrong }))).await;

        let (status, body) = send(&app, "POST", &uri, Some(json!({ "name": wrong.to_uppercase() }))).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "DUPLICATE_GUESS");

        let (status, body) = send(&app, "POST", &uri, Some(json!({ "name": "Atlantis" }))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "UNKNOWN_LOCATION");

        let (_, body) = send(&app, "GET", &format!("/api/games/{}", id), None).await;
        assert_eq!(body["attempts"], 1);
    }

    #[tokio::test]
    async fn test_unknown_game() {
        let app = create_router(create_test_state(false));
        let uri = format!("/api/games/{}", Uuid::new_v4());

        let (status, body) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_practice_disabled() {
        let app = create_router(create_test_state(false));
        let (status, body) = create_game(&app, "practice").await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["code"], "PRACTICE_DISABLED");
    }

    #[tokio::test]
    async fn test_practice_reset() {
        let state = create_test_state(true);
        let app = create_router(state.clone());

        let (status, body) = create_game(&app, "practice").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["mode"], "practice");
        let id = body["id"].as_str().unwrap().to_string();

        let secret = secret_of(&state, &id).await;
        let uri = format!("/api/games/{}/guesses", id);
        send(&app, "POST", &uri, Some(json!({ "name": secret }))).await;

        let (status, body) = send(&app, "POST", &format!("/api/games/{}/reset", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "in_progress");
        assert_eq!(body["attempts"], 0);
    }

    #[tokio::test]
    async fn test_daily_reset_forbidden() {
        let app = create_router(create_test_state(true));

        let (_, body) = create_game(&app, "daily").await;
        let id = body["id"].as_str().unwrap();

        let (status, body) = send(&app, "POST", &format!("/api/games/{}/reset", id), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["code"], "RESET_NOT_ALLOWED");
    }

    #[tokio::test]
    async fn test_concurrent_guesses_respect_cap() {
        let state = create_test_state(false);
        let app = create_router(state.clone());

        let (_, body) = create_game(&app, "daily").await;
        let id = body["id"].as_str().unwrap().to_string();
        let secret = secret_of(&state, &id).await;
        let uri = format!("/api/games/{}/guesses", id);

        let handles: Vec<_> = wrong_names(&secret)
            .into_iter()
            .map(|name| {
                let app = app.clone();
                let uri = uri.clone();
                tokio::spawn(async move {
                    send(&app, "POST", &uri, Some(json!({ "name": name }))).await.0
                })
            })
            .collect();

        let mut accepted = 0;
        for handle in handles {
            if handle.await.unwrap() == StatusCode::OK {
                accepted += 1;
            }
        }

        assert_eq!(accepted, 6);
        let (_, body) = send(&app, "GET", &format!("/api/games/{}", id), None).await;
        assert_eq!(body["attempts"], 6);
        assert_eq!(body["status"], "lost");
    }

    #[tokio::test]
    async fn test_many_creates_stay_under_cap() {
        use crate::constants::game::MAX_LIVE_GAMES;

        let state = create_test_state(false);
        let app = create_router(state.clone());

        for _ in 0..MAX_LIVE_GAMES + 100 {
            let (status, _) = send(&app, "POST", "/api/games", Some(json!({}))).await;
            assert_eq!(status, StatusCode::OK);
        }

        assert!(state.game_count().await <= MAX_LIVE_GAMES);
    }
}
