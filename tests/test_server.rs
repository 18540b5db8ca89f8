use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use volunteer_pool::{
    challenge::{Challenge, MaxOnes},
    config::{Config, Vars},
    pool::Coordinator,
    rng::RandomNumberGenerator,
    server::{self, NO_CHROMOSOMES},
};

fn app() -> (Router, Arc<Coordinator>) {
    let config = Config::new(
        "https://github.com/JJ/splash-volunteer",
        Vars::new(50, 32),
    );
    let pool = Arc::new(Coordinator::with_rng(
        &config,
        RandomNumberGenerator::from_seed(8),
    )
    .unwrap());
    (server::router(Arc::clone(&pool)), pool)
}

fn request(method: Method, uri: &str, peer: [u8; 4]) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .extension(ConnectInfo(SocketAddr::from((peer, 40000))))
        .body(Body::empty())
        .unwrap()
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.contains("json"), "unexpected content type {:?}", content_type);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn put_one(app: &Router, chromosome: &str, fitness: &str, peer: [u8; 4]) -> (StatusCode, Value) {
    call(
        app,
        request(Method::PUT, &format!("/one/{}/{}", chromosome, fitness), peer),
    )
    .await
}

#[tokio::test]
async fn test_empty_pool_random_is_not_found() {
    let (app, _) = app();
    let (status, body) = call(&app, request(Method::GET, "/random", [127, 0, 0, 1])).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.get(NO_CHROMOSOMES).is_some());
}

#[tokio::test]
async fn test_put_then_update() {
    let (app, _) = app();

    let (status, body) = put_one(&app, "1010", "2", [127, 0, 0, 1]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "length": 1, "chromosome": "1010", "updated": false }));

    let (status, body) = put_one(&app, "1010", "3", [127, 0, 0, 1]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "length": 1, "chromosome": "1010", "updated": true }));
}

#[tokio::test]
async fn test_random_returns_stored_chromosome() {
    let (app, _) = app();
    put_one(&app, "101101101101", &MaxOnes.score("101101101101").to_string(), [10, 0, 0, 1]).await;

    let (status, body) = call(&app, request(Method::GET, "/random", [10, 0, 0, 1])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "chromosome": "101101101101", "fitness": 8 }));
}

#[tokio::test]
async fn test_chromosomes_ips_and_sequence() {
    let (app, _) = app();
    let mut rng = RandomNumberGenerator::from_seed(3);
    let mut expected = serde_json::Map::new();
    for i in 0..40u8 {
        let chromosome = rng.chromosome(16);
        let fitness = MaxOnes.score(&chromosome);
        put_one(&app, &chromosome, &fitness.to_string(), [10, 0, 0, i % 3]).await;
        expected.insert(chromosome, json!(fitness));
    }

    let (status, body) = call(&app, request(Method::GET, "/chromosomes", [10, 0, 0, 1])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Object(expected));

    let (status, body) = call(&app, request(Method::GET, "/IPs", [10, 0, 0, 1])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "10.0.0.0": 1, "10.0.0.1": 1, "10.0.0.2": 1 }));

    let (status, body) = call(&app, request(Method::GET, "/seq_number", [10, 0, 0, 1])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "number": 0 }));
}

#[tokio::test]
async fn test_winner_restarts_search() {
    let (app, pool) = app();
    put_one(&app, "0000", "0", [10, 0, 0, 1]).await;

    let fitness = pool.termination().target();
    let chromosome = "1".repeat(fitness as usize);
    let (status, body) = put_one(&app, &chromosome, &fitness.to_string(), [10, 0, 0, 2]).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "length": 0 }));

    let (_, body) = call(&app, request(Method::GET, "/chromosomes", [10, 0, 0, 1])).await;
    assert_eq!(body, json!({}));

    let (_, body) = call(&app, request(Method::GET, "/IPs", [10, 0, 0, 1])).await;
    assert_eq!(body, json!({}));

    let (_, body) = call(&app, request(Method::GET, "/seq_number", [10, 0, 0, 1])).await;
    assert_eq!(body, json!({ "number": 1 }));

    let (status, _) = call(&app, request(Method::GET, "/random", [10, 0, 0, 1])).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_fitness_is_bad_request() {
    let (app, pool) = app();

    for fitness in ["abc", "-1", "1.5"] {
        let (status, body) = put_one(&app, "1010", fitness, [10, 0, 0, 1]).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.get("error").is_some());
    }

    assert!(pool.is_empty());
    assert!(pool.contributors().is_empty());
}
