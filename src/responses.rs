use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Message;

/// Confirmation body shared by the write endpoints and login.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: &'static str,
}

impl StatusResponse {
    pub const USER_REGISTERED: Self = StatusResponse {
        message: "User registered",
    };
    pub const LOGIN_SUCCESSFUL: Self = StatusResponse {
        message: "Login successful",
    };
    pub const MESSAGE_SENT: Self = StatusResponse {
        message: "Message sent",
    };
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: i64,
    pub sender: String,
    pub receiver: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        MessageResponse {
            id: message.id,
            sender: message.sender,
            receiver: message.receiver,
            text: message.text,
            timestamp: message.timestamp.and_utc(),
        }
    }
}
