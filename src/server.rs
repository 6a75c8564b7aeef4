//! Referral Rewards Server
//!
//! HTTP server for the dashboard and leaderboard endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::auth::{AuthGateway, AuthUser};
use crate::config::Config;
use crate::error::RewardsError;
use crate::leaderboard::{LeaderboardEntry, LeaderboardService, LeaderboardStats};
use crate::rewards::{RewardCatalog, RewardDefinition};
use crate::store::{User, UserStore};

pub struct AppState {
    pub store: Arc<UserStore>,
    pub leaderboard: LeaderboardService,
    pub auth: AuthGateway,
    pub started_at: std::time::Instant,
}

impl AppState {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self {
            leaderboard: LeaderboardService::new(store.clone()),
            auth: AuthGateway::new(store.clone()),
            store,
            started_at: std::time::Instant::now(),
        }
    }
}

/// Build the router, nesting every route under `base_path`.
///
/// An empty base path (or "/") mounts the routes at the root.
pub fn create_router(state: Arc<AppState>, base_path: &str) -> Router {
    let routes = Router::new()
        .route("/health", get(health_handler))
        .route("/user/:id", get(user_handler))
        .route("/user/:id/donations", post(donation_handler))
        .route("/leaderboard", get(leaderboard_handler))
        .route("/leaderboard/stats", get(stats_handler))
        .route("/rewards", get(rewards_handler))
        .route("/login", post(login_handler))
        .route("/signup", post(signup_handler))
        .with_state(state);

    let base_path = base_path.trim_end_matches('/');
    let app = if base_path.is_empty() {
        routes
    } else if base_path.starts_with('/') {
        Router::new().nest(base_path, routes)
    } else {
        Router::new().nest(&format!("/{}", base_path), routes)
    };

    app.layer(CorsLayer::permissive())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub healthy: bool,
    pub uptime_secs: u64,
    pub version: String,
    pub users: usize,
}

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        healthy: true,
        uptime_secs: state.started_at.elapsed().as_secs(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        users: state.store.len(),
    })
}

// ============================================================================
// Users
// ============================================================================

fn user_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "User not found" })),
    )
}

async fn user_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<User>, (StatusCode, Json<serde_json::Value>)> {
    // Non-numeric ids can never match a user
    let id: u32 = id.parse().map_err(|_| user_not_found())?;

    state.store.find_by_id(id).map(Json).ok_or_else(user_not_found)
}

#[derive(Debug, Deserialize)]
pub struct DonationRequest {
    pub amount: u64,
}

async fn donation_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<DonationRequest>,
) -> Result<Json<User>, (StatusCode, Json<serde_json::Value>)> {
    let id: u32 = id.parse().map_err(|_| user_not_found())?;

    match state.store.record_donation(id, request.amount) {
        Ok(user) => Ok(Json(user)),
        Err(RewardsError::NotFound(_)) => Err(user_not_found()),
        Err(e) => {
            warn!("Rejected donation for user {}: {}", id, e);
            Err((
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Donation amount must be positive" })),
            ))
        }
    }
}

// ============================================================================
// Leaderboard & rewards
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<usize>,
}

async fn leaderboard_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LeaderboardQuery>,
) -> Json<Vec<LeaderboardEntry>> {
    let entries = match query.limit {
        Some(limit) => state.leaderboard.top(limit),
        None => state.leaderboard.rank(),
    };
    Json(entries)
}

async fn stats_handler(State(state): State<Arc<AppState>>) -> Json<LeaderboardStats> {
    Json(state.leaderboard.stats())
}

async fn rewards_handler() -> Json<Vec<RewardDefinition>> {
    Json(RewardCatalog::list())
}

// ============================================================================
// Login & signup
// ============================================================================

/// Missing, null or non-string credentials are accepted here and simply
/// fail to match, so every bad login answers 401.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: serde_json::Value,
    #[serde(default)]
    pub password: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    /// Accepted in any shape and never read
    #[serde(default)]
    pub password: Option<serde_json::Value>,
}

fn credential(value: &serde_json::Value) -> &str {
    value.as_str().unwrap_or_default()
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthUser>,
    pub message: String,
}

impl AuthResponse {
    fn success(user: AuthUser, message: &str) -> Self {
        Self {
            success: true,
            user: Some(user),
            message: message.to_string(),
        }
    }

    fn failure(message: &str) -> Self {
        Self {
            success: false,
            user: None,
            message: message.to_string(),
        }
    }
}

async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> (StatusCode, Json<AuthResponse>) {
    match state
        .auth
        .login(credential(&request.email), credential(&request.password))
    {
        Ok(user) => (
            StatusCode::OK,
            Json(AuthResponse::success(user, "Login successful")),
        ),
        Err(e) => {
            warn!("Login failed: {}", e);
            (
                StatusCode::UNAUTHORIZED,
                Json(AuthResponse::failure("Invalid credentials")),
            )
        }
    }
}

async fn signup_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SignupRequest>,
) -> (StatusCode, Json<AuthResponse>) {
    match state.auth.signup(&request.name, &request.email, "") {
        Ok(user) => (
            StatusCode::OK,
            Json(AuthResponse::success(user, "Signup successful")),
        ),
        Err(e) => {
            warn!("Signup failed: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(AuthResponse::failure("User already exists")),
            )
        }
    }
}

/// Run the server
pub async fn run_server(config: &Config, store: Arc<UserStore>) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(store));

    let app = create_router(state, &config.server.base_path);
    let addr = config.bind_addr();

    info!(
        "Starting Referral Rewards server on {} (routes under '{}')",
        addr, config.server.base_path
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
