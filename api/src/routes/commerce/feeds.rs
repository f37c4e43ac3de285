use actix_web::{web, HttpResponse};
use cv_core::domain::entities::{new_record_id, Feed};
use validator::Validate;

use crate::app::AppState;
use crate::dto::UserIdQuery;
use crate::handlers::ApiError;

/// GET /feeds?user_id=
pub async fn user_feeds(
    state: web::Data<AppState>,
    query: web::Query<UserIdQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;

    let feeds = state
        .repositories
        .feeds
        .find_by_field("user_id", &query.user_id)
        .await?;

    Ok(HttpResponse::Ok().json(feeds))
}

/// POST /feed
pub async fn create_feed(
    state: web::Data<AppState>,
    body: web::Json<Feed>,
) -> Result<HttpResponse, ApiError> {
    let mut feed = body.into_inner();
    feed.id = new_record_id();
    feed.created_at = state.clock.now();

    let created = state.repositories.feeds.insert(feed).await?;
    Ok(HttpResponse::Ok().json(created))
}
