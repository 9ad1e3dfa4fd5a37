use axum::{
    extract::{Query, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::{
    auth::{hash_password, verify_password},
    error::ApiError,
    models::{Message, User},
    requests::{ConversationQuery, LoginRequest, RegisterRequest, SendMessageRequest},
    responses::{MessageResponse, StatusResponse},
};

pub async fn register(
    State(pool): State<SqlitePool>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let password_hash = hash_password(&request.password);

    let result = sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
        .bind(&request.username)
        .bind(&password_hash)
        .execute(&pool)
        .await;

    match result {
        Ok(_) => {
            tracing::info!("Registered user {}", request.username);
            Ok(Json(StatusResponse::USER_REGISTERED))
        }
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            tracing::debug!("Username {} already taken", request.username);
            Err(ApiError::Conflict)
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn login(
    State(pool): State<SqlitePool>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
        .bind(&request.username)
        .fetch_optional(&pool)
        .await?;

    match user {
        Some(user) if verify_password(&request.password, &user.password_hash) => {
            tracing::debug!("Login successful for {}", user.username);
            Ok(Json(StatusResponse::LOGIN_SUCCESSFUL))
        }
        _ => {
            tracing::info!("Rejected login for {}", request.username);
            Err(ApiError::InvalidCredentials)
        }
    }
}

pub async fn list_users(State(pool): State<SqlitePool>) -> Result<Json<Vec<String>>, ApiError> {
    let usernames = sqlx::query_scalar::<_, String>("SELECT username FROM users")
        .fetch_all(&pool)
        .await?;

    Ok(Json(usernames))
}

/// Neither party has to be a registered user.
pub async fn send_message(
    State(pool): State<SqlitePool>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
    sqlx::query("INSERT INTO messages (sender, receiver, text) VALUES (?, ?, ?)")
        .bind(&request.sender)
        .bind(&request.receiver)
        .bind(&request.text)
        .execute(&pool)
        .await?;

    Ok(Json(StatusResponse::MESSAGE_SENT))
}

pub async fn get_messages(
    State(pool): State<SqlitePool>,
    Query(params): Query<ConversationQuery>,
) -> Result<Json<Vec<MessageResponse>>, ApiError> {
    let messages = sqlx::query_as::<_, Message>(
        r#"
        SELECT * FROM messages
        WHERE (sender = ?1 AND receiver = ?2) OR (sender = ?2 AND receiver = ?1)
        ORDER BY timestamp ASC, id ASC
        "#,
    )
    .bind(&params.user1)
    .bind(&params.user2)
    .fetch_all(&pool)
    .await?;

    Ok(Json(
        messages.into_iter().map(MessageResponse::from).collect(),
    ))
}
