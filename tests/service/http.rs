//! End-to-end checks of the REST surface over a real socket.

use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use restaurant_ratings::{http, Services};

struct TestServer {
    base: String,
    client: Client,
}

impl TestServer {
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = http::router(Arc::new(Services::in_memory()));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base: format!("http://{}", addr),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let response = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        read(response).await
    }

    async fn put(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let response = self
            .client
            .put(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        read(response).await
    }

    async fn get(&self, path: &str) -> (StatusCode, Value) {
        let response = self.client.get(self.url(path)).send().await.unwrap();
        read(response).await
    }

    async fn delete(&self, path: &str) -> StatusCode {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .unwrap()
            .status()
    }

    async fn restaurant(&self, name: &str) -> u64 {
        let (status, body) = self
            .post(
                "/api/restaurants",
                json!({
                    "name": name,
                    "description": "test kitchen",
                    "cuisineType": "ITALIAN",
                    "avgCheck": 350.0
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_u64().unwrap()
    }

    async fn visitor(&self, name: &str) -> u64 {
        let (status, body) = self
            .post(
                "/api/visitors",
                json!({ "name": name, "age": 28, "sex": "MALE" }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_u64().unwrap()
    }
}

async fn read(response: reqwest::Response) -> (StatusCode, Value) {
    let status = response.status();
    let text = response.text().await.unwrap();
    let body = if text.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&text).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn health_reports_service_name() {
    let server = TestServer::start().await;
    let (status, body) = server.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "restaurant_ratings");
}

#[tokio::test]
async fn review_lifecycle_drives_restaurant_rating() {
    let server = TestServer::start().await;
    let restaurant = server.restaurant("Trattoria").await;
    let ann = server.visitor("Ann").await;
    let bob = server.visitor("Bob").await;

    let (status, review) = server
        .post(
            "/api/reviews",
            json!({ "restaurantId": restaurant, "visitorId": ann, "rating": 5, "comment": "superb" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(review["restaurantId"], restaurant);
    assert_eq!(review["visitorId"], ann);
    assert_eq!(review["rating"], 5);

    server
        .post(
            "/api/reviews",
            json!({ "restaurantId": restaurant, "visitorId": bob, "rating": 4, "comment": "good" }),
        )
        .await;
    let (_, body) = server.get(&format!("/api/restaurants/{}", restaurant)).await;
    assert_eq!(body["rating"], 4.5);

    let (status, updated) = server
        .put(
            &format!("/api/reviews/{}/{}", restaurant, bob),
            json!({ "rating": 1, "comment": "changed" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["comment"], "changed");
    let (_, body) = server.get(&format!("/api/restaurants/{}", restaurant)).await;
    assert_eq!(body["rating"], 3.0);

    let status = server
        .delete(&format!("/api/reviews/{}/{}", restaurant, ann))
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, body) = server.get(&format!("/api/restaurants/{}", restaurant)).await;
    assert_eq!(body["rating"], 1.0);

    let (status, _) = server
        .get(&format!("/api/reviews/{}/{}", restaurant, ann))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn restaurant_validation_lists_every_violation() {
    let server = TestServer::start().await;
    let (status, body) = server
        .post("/api/restaurants", json!({ "name": "", "avgCheck": -5 }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert_eq!(body["error"], "Bad Request");
    assert_eq!(
        body["message"],
        "name: must not be blank, cuisineType: must not be empty, avgCheck: must be greater than zero"
    );
}

#[tokio::test]
async fn review_without_restaurant_is_bad_request() {
    let server = TestServer::start().await;
    let visitor = server.visitor("Ann").await;

    let (status, body) = server
        .post(
            "/api/reviews",
            json!({ "visitorId": visitor, "rating": 3, "comment": "where?" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "restaurant not specified");
}

#[tokio::test]
async fn review_for_unknown_restaurant_is_not_found() {
    let server = TestServer::start().await;
    let visitor = server.visitor("Ann").await;

    let (status, body) = server
        .post(
            "/api/reviews",
            json!({ "restaurantId": 77, "visitorId": visitor, "rating": 3, "comment": "?" }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["message"], "restaurant or visitor not found");

    let (_, reviews) = server.get("/api/reviews").await;
    assert_eq!(reviews, json!([]));
}

#[tokio::test]
async fn malformed_requests_are_bad_requests() {
    let server = TestServer::start().await;

    let (status, _) = server.get("/api/restaurants/not-a-number").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = server
        .post("/api/visitors", json!({ "age": 20, "sex": "UNKNOWN" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = server
        .post("/api/visitors", json!({ "name": "Kid", "age": -3, "sex": "FEMALE" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "age: must not be negative");
}

#[tokio::test]
async fn min_rating_query_filters_restaurants() {
    let server = TestServer::start().await;
    let good = server.restaurant("Good").await;
    let poor = server.restaurant("Poor").await;
    let ann = server.visitor("Ann").await;

    for (restaurant, rating) in [(good, 5), (poor, 2)] {
        let (status, _) = server
            .post(
                "/api/reviews",
                json!({ "restaurantId": restaurant, "visitorId": ann, "rating": rating, "comment": "ok" }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = server.get("/api/restaurants?minRating=4").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![good]);

    let (_, all) = server.get("/api/restaurants").await;
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn sorted_review_page() {
    let server = TestServer::start().await;
    let restaurant = server.restaurant("Trattoria").await;
    for (name, rating) in [("a", 2), ("b", 5), ("c", 3)] {
        let visitor = server.visitor(name).await;
        server
            .post(
                "/api/reviews",
                json!({ "restaurantId": restaurant, "visitorId": visitor, "rating": rating, "comment": "ok" }),
            )
            .await;
    }

    let (status, page) = server.get("/api/reviews?sort=desc&page=0&size=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["totalElements"], 3);
    assert_eq!(page["totalPages"], 2);
    let ratings: Vec<u64> = page["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["rating"].as_u64().unwrap())
        .collect();
    assert_eq!(ratings, vec![5, 3]);

    let (status, _) = server.get("/api/reviews?size=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deleting_restaurant_cascades_and_is_idempotent() {
    let server = TestServer::start().await;
    let restaurant = server.restaurant("Gone Soon").await;
    let ann = server.visitor("Ann").await;
    server
        .post(
            "/api/reviews",
            json!({ "restaurantId": restaurant, "visitorId": ann, "rating": 4, "comment": "ok" }),
        )
        .await;

    let path = format!("/api/restaurants/{}", restaurant);
    assert_eq!(server.delete(&path).await, StatusCode::NO_CONTENT);
    assert_eq!(server.delete(&path).await, StatusCode::NO_CONTENT);

    let (status, _) = server.get(&path).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, reviews) = server.get("/api/reviews").await;
    assert_eq!(reviews, json!([]));
}
