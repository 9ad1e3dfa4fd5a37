use chrono::NaiveDateTime;
use sqlx::FromRow;

#[derive(FromRow, Debug, Clone)]
pub struct User {
    pub username: String,
    pub password_hash: String,
}

/// `timestamp` is written by SQLite as UTC without an offset.
#[derive(FromRow, Debug, Clone)]
pub struct Message {
    pub id: i64,
    pub sender: String,
    pub receiver: String,
    pub text: String,
    pub timestamp: NaiveDateTime,
}
