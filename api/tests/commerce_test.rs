//! Integration tests for the protected commerce routes

mod common;

use actix_web::{cookie::Cookie, http::StatusCode, test};
use cv_api::create_app;
use cv_core::domain::entities::{Customer, Feed, Message, Order, OrderStatus, Role};

use common::{TestContext, START};

#[actix_web::test]
async fn test_customer_crud() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let session = Cookie::new("token", ctx.token_for("alice", Role::Vendor));

    let req = test::TestRequest::post()
        .uri("/customer")
        .cookie(session.clone())
        .set_json(serde_json::json!({
            "id": "client-chosen",
            "user_id": "u1",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "store_id": "s1",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let created: Customer = test::read_body_json(resp).await;
    assert_ne!(created.id, "client-chosen");

    let req = test::TestRequest::put()
        .uri(&format!("/customer?id={}", created.id))
        .cookie(session.clone())
        .set_json(serde_json::json!({ "first_name": "Augusta", "last_name": "King" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/customer?id={}", created.id))
        .cookie(session.clone())
        .to_request();
    let fetched: Customer = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.first_name, "Augusta");

    let req = test::TestRequest::delete()
        .uri(&format!("/customer?id={}", created.id))
        .cookie(session.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: String = test::read_body_json(resp).await;
    assert_eq!(body, "Customer deleted");

    let req = test::TestRequest::get()
        .uri(&format!("/customer?id={}", created.id))
        .cookie(session.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/customer")
        .cookie(session)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_order_lifecycle() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let session = Cookie::new("token", ctx.token_for("carol", Role::Customer));

    let req = test::TestRequest::post()
        .uri("/order")
        .cookie(session.clone())
        .set_json(serde_json::json!({
            "user_id": "u1",
            "store_id": "s1",
            "product": "tea",
            "quantity": 2,
            "order_status": "Delivered",
        }))
        .to_request();
    let order: Order = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(order.order_status, OrderStatus::Pending);
    assert_eq!(order.creation_date, START);

    let req = test::TestRequest::put()
        .uri(&format!("/cancel-order?order_id={}", order.id))
        .cookie(session.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: String = test::read_body_json(resp).await;
    assert_eq!(body, "Order cancelled");

    let req = test::TestRequest::get()
        .uri("/orders?user_id=u1")
        .cookie(session.clone())
        .to_request();
    let orders: Vec<Order> = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order_status, OrderStatus::Cancelled);

    let req = test::TestRequest::put()
        .uri("/cancel-order?order_id=missing")
        .cookie(session)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_chat_thread_grows_per_user() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let session = Cookie::new("token", ctx.token_for("carol", Role::Customer));

    let req = test::TestRequest::get()
        .uri("/chat-history?user_id=u1")
        .cookie(session.clone())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    for content in ["hello", "anyone there?"] {
        let req = test::TestRequest::post()
            .uri("/send-message")
            .cookie(session.clone())
            .set_json(serde_json::json!({
                "from_user_id": "u1",
                "to_admin": true,
                "content": content,
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: String = test::read_body_json(resp).await;
        assert_eq!(body, "Message sent");
        ctx.clock.advance(30);
    }

    let req = test::TestRequest::get()
        .uri("/chat-history?user_id=u1")
        .cookie(session)
        .to_request();
    let messages: Vec<Message> = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].content, "hello");
    assert_eq!(messages[1].content, "anyone there?");
    assert_eq!(messages[0].timestamp.timestamp(), START);
    assert_eq!(messages[1].timestamp.timestamp(), START + 30);

    let chats = ctx.state.repositories.chats.find_all().await.unwrap();
    assert_eq!(chats.len(), 1);
}

#[actix_web::test]
async fn test_feeds_by_user() {
    let ctx = TestContext::new();
    let app = test::init_service(create_app(ctx.state.clone())).await;
    let session = Cookie::new("token", ctx.token_for("carol", Role::Customer));

    for (user, content) in [("u1", "first"), ("u2", "other"), ("u1", "second")] {
        let req = test::TestRequest::post()
            .uri("/feed")
            .cookie(session.clone())
            .set_json(serde_json::json!({ "user_id": user, "content": content }))
            .to_request();
        let feed: Feed = test::read_body_json(test::call_service(&app, req).await).await;
        assert_eq!(feed.created_at, START);
    }

    let req = test::TestRequest::get()
        .uri("/feeds?user_id=u1")
        .cookie(session)
        .to_request();
    let feeds: Vec<Feed> = test::read_body_json(test::call_service(&app, req).await).await;
    let contents: Vec<&str> = feeds.iter().map(|f| f.content.as_str()).collect();
    assert_eq!(contents, vec!["first", "second"]);
}
