use actix_web::{web, HttpResponse};
use cv_core::domain::entities::{new_record_id, Order, OrderStatus, ORDER_STATUS_FIELD};
use cv_core::errors::DomainError;
use validator::Validate;

use crate::app::AppState;
use crate::dto::{OrderIdQuery, UserIdQuery};
use crate::handlers::ApiError;

/// GET /orders?user_id=
pub async fn user_orders(
    state: web::Data<AppState>,
    query: web::Query<UserIdQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;

    let orders = state
        .repositories
        .orders
        .find_by_field("user_id", &query.user_id)
        .await?;

    Ok(HttpResponse::Ok().json(orders))
}

/// POST /order
///
/// New orders always start `Pending` with the current time as creation date.
pub async fn create_order(
    state: web::Data<AppState>,
    body: web::Json<Order>,
) -> Result<HttpResponse, ApiError> {
    let order = body.into_inner().place(new_record_id(), state.clock.now());
    let created = state.repositories.orders.insert(order).await?;

    log::info!("Order {} placed for store {}", created.id, created.store_id);
    Ok(HttpResponse::Ok().json(created))
}

/// PUT /cancel-order?order_id=
pub async fn cancel_order(
    state: web::Data<AppState>,
    query: web::Query<OrderIdQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;

    let status = serde_json::Value::String(OrderStatus::Cancelled.as_str().to_string());
    let updated = state
        .repositories
        .orders
        .set_field(&query.order_id, ORDER_STATUS_FIELD, status)
        .await?;
    if !updated {
        return Err(DomainError::not_found("Order").into());
    }

    log::info!("Order {} cancelled", query.order_id);
    Ok(HttpResponse::Ok().json("Order cancelled"))
}

/// GET /all-orders (vendor only)
pub async fn all_orders(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let orders = state.repositories.orders.find_all().await?;
    Ok(HttpResponse::Ok().json(orders))
}
