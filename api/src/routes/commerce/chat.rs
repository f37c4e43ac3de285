use actix_web::{web, HttpResponse};
use cv_core::domain::entities::{new_record_id, BroadcastMessage, Chat, Message, Record};
use cv_core::errors::DomainError;
use validator::Validate;

use crate::app::AppState;
use crate::dto::UserIdQuery;
use crate::handlers::ApiError;
use crate::middleware::SessionContext;

/// POST /send-message
///
/// Appends the message to the sender's chat, starting the chat on first use.
/// Two first messages racing for the same user can still start two chats.
pub async fn send_message(
    state: web::Data<AppState>,
    body: web::Json<Message>,
) -> Result<HttpResponse, ApiError> {
    let mut message = body.into_inner();
    message.id = new_record_id();
    message.timestamp = state.clock.now_utc();

    let chats = &state.repositories.chats;
    let existing = chats
        .find_by_field("user_id", &message.from_user_id)
        .await?
        .into_iter()
        .next();

    match existing {
        Some(chat) => {
            let message = serde_json::to_value(&message)
                .map_err(|e| DomainError::internal(e.to_string()))?;
            if !chats.append_to_field(&chat.id, "messages", message).await? {
                return Err(DomainError::not_found(Chat::RESOURCE).into());
            }
        }
        None => {
            let chat = Chat::start(new_record_id(), message.from_user_id.clone(), message);
            chats.insert(chat).await?;
        }
    }

    Ok(HttpResponse::Ok().json("Message sent"))
}

/// GET /chat-history?user_id=
pub async fn chat_history(
    state: web::Data<AppState>,
    query: web::Query<UserIdQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;

    let chat = state
        .repositories
        .chats
        .find_by_field("user_id", &query.user_id)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| DomainError::not_found(Chat::RESOURCE))?;

    Ok(HttpResponse::Ok().json(chat.messages))
}

/// POST /broadcast (vendor only)
///
/// The sending vendor is recorded as `admin_id` unless the body names one.
pub async fn broadcast(
    state: web::Data<AppState>,
    session: SessionContext,
    body: web::Json<BroadcastMessage>,
) -> Result<HttpResponse, ApiError> {
    let mut message = body.into_inner();
    message.id = new_record_id();
    message.timestamp = state.clock.now_utc();
    if message.admin_id.is_empty() {
        message.admin_id = session.username().to_string();
    }

    state.repositories.broadcasts.insert(message).await?;
    log::info!("Broadcast sent by {}", session.username());

    Ok(HttpResponse::Ok().json("Broadcast sent"))
}
