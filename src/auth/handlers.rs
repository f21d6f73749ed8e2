use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse, PublicUser, RegisterRequest, RegisterResponse},
        error::AuthError,
        password::{hash_password, verify_password},
        repo::CreateUserError,
        repo_types::NewUser,
    },
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AuthError> {
    // Fast path; the unique index on email closes the race below.
    if state.users.find_by_email(&payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(AuthError::EmailTaken);
    }

    let hash = hash_password(&payload.password)?;

    let user = state
        .users
        .create(NewUser {
            name: &payload.name,
            email: &payload.email,
            password: &hash,
            role: &payload.role,
        })
        .await
        .map_err(|e| match e {
            CreateUserError::DuplicateEmail => AuthError::EmailTaken,
            CreateUserError::Other(e) => AuthError::Database(e),
        })?;

    info!(user_id = user.id, email = %user.email, role = %user.role, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully",
            user_id: user.id,
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    let user = match state.users.find_by_email(&payload.email).await? {
        Some(u) => u,
        None => {
            warn!(email = %payload.email, "login unknown email");
            return Err(AuthError::InvalidCredentials);
        }
    };

    if !verify_password(&payload.password, &user.password)? {
        warn!(email = %payload.email, user_id = user.id, "login invalid password");
        return Err(AuthError::InvalidCredentials);
    }

    info!(user_id = user.id, email = %user.email, "user logged in");
    Ok(Json(LoginResponse {
        message: "Login successful",
        user: PublicUser::from(user),
    }))
}
