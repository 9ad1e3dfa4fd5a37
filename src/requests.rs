use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub sender: String,
    pub receiver: String,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ConversationQuery {
    pub user1: String,
    pub user2: String,
}
