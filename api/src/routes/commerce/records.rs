//! CRUD handlers shared by the customer and store routes

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use cv_core::domain::entities::{new_record_id, Customer, Record, Store};
use cv_core::errors::DomainError;
use cv_core::repositories::RecordRepository;
use validator::Validate;

use crate::app::AppState;
use crate::dto::IdQuery;
use crate::handlers::ApiError;

/// A record type with a repository in the application state
pub trait StoredRecord: Record {
    fn repository(state: &AppState) -> &Arc<dyn RecordRepository<Self>>;
}

impl StoredRecord for Customer {
    fn repository(state: &AppState) -> &Arc<dyn RecordRepository<Self>> {
        &state.repositories.customers
    }
}

impl StoredRecord for Store {
    fn repository(state: &AppState) -> &Arc<dyn RecordRepository<Self>> {
        &state.repositories.stores
    }
}

/// GET /customers, GET /stores
pub async fn list<T: StoredRecord>(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let records = T::repository(&state).find_all().await?;
    Ok(HttpResponse::Ok().json(records))
}

/// POST /customer, POST /store
///
/// The id is always assigned by the server.
pub async fn create<T: StoredRecord>(
    state: web::Data<AppState>,
    body: web::Json<T>,
) -> Result<HttpResponse, ApiError> {
    let mut record = body.into_inner();
    record.set_id(new_record_id());

    let created = T::repository(&state).insert(record).await?;
    log::info!("Created {} {}", T::RESOURCE, created.id());

    Ok(HttpResponse::Ok().json(created))
}

/// GET /customer?id=, GET /store?id=
pub async fn get<T: StoredRecord>(
    state: web::Data<AppState>,
    query: web::Query<IdQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;

    let record = T::repository(&state)
        .find_by_id(&query.id)
        .await?
        .ok_or_else(|| DomainError::not_found(T::RESOURCE))?;

    Ok(HttpResponse::Ok().json(record))
}

/// PUT /customer?id=, PUT /store?id=
///
/// Replaces every field except the id.
pub async fn update<T: StoredRecord>(
    state: web::Data<AppState>,
    query: web::Query<IdQuery>,
    body: web::Json<T>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;

    let mut record = body.into_inner();
    record.set_id(query.id.clone());

    if !T::repository(&state).replace(&query.id, record.clone()).await? {
        return Err(DomainError::not_found(T::RESOURCE).into());
    }

    Ok(HttpResponse::Ok().json(record))
}

/// DELETE /customer?id=, DELETE /store?id=
pub async fn delete<T: StoredRecord>(
    state: web::Data<AppState>,
    query: web::Query<IdQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;

    if !T::repository(&state).delete(&query.id).await? {
        return Err(DomainError::not_found(T::RESOURCE).into());
    }
    log::info!("Deleted {} {}", T::RESOURCE, query.id);

    Ok(HttpResponse::Ok().json(format!("{} deleted", T::RESOURCE)))
}
