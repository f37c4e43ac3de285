//! Commerce record routes: customers, stores, orders, chats and feeds

pub mod chat;
pub mod feeds;
pub mod orders;
pub mod records;

use actix_web::web;
use cv_core::domain::entities::{Customer, Role, Store};

use crate::middleware::{RequireRole, SessionAuth};

pub fn configure(cfg: &mut web::ServiceConfig, session_auth: SessionAuth) {
    let vendor_only = RequireRole::new(Role::Vendor);

    cfg.service(
        web::resource("/customers")
            .route(web::get().to(records::list::<Customer>))
            .wrap(session_auth.clone()),
    )
    .service(
        web::resource("/customer")
            .route(web::post().to(records::create::<Customer>))
            .route(web::get().to(records::get::<Customer>))
            .route(web::put().to(records::update::<Customer>))
            .route(web::delete().to(records::delete::<Customer>))
            .wrap(session_auth.clone()),
    )
    .service(
        web::resource("/stores")
            .route(web::get().to(records::list::<Store>))
            .wrap(session_auth.clone()),
    )
    .service(
        web::resource("/store")
            .route(web::post().to(records::create::<Store>))
            .route(web::get().to(records::get::<Store>))
            .route(web::put().to(records::update::<Store>))
            .route(web::delete().to(records::delete::<Store>))
            .wrap(session_auth.clone()),
    )
    .service(
        web::resource("/orders")
            .route(web::get().to(orders::user_orders))
            .wrap(session_auth.clone()),
    )
    .service(
        web::resource("/order")
            .route(web::post().to(orders::create_order))
            .wrap(session_auth.clone()),
    )
    .service(
        web::resource("/cancel-order")
            .route(web::put().to(orders::cancel_order))
            .wrap(session_auth.clone()),
    )
    .service(
        web::resource("/all-orders")
            .route(web::get().to(orders::all_orders))
            .wrap(vendor_only)
            .wrap(session_auth.clone()),
    )
    .service(
        web::resource("/send-message")
            .route(web::post().to(chat::send_message))
            .wrap(session_auth.clone()),
    )
    .service(
        web::resource("/chat-history")
            .route(web::get().to(chat::chat_history))
            .wrap(session_auth.clone()),
    )
    .service(
        web::resource("/broadcast")
            .route(web::post().to(chat::broadcast))
            .wrap(vendor_only)
            .wrap(session_auth.clone()),
    )
    .service(
        web::resource("/feeds")
            .route(web::get().to(feeds::user_feeds))
            .wrap(session_auth.clone()),
    )
    .service(
        web::resource("/feed")
            .route(web::post().to(feeds::create_feed))
            .wrap(session_auth),
    );
}
