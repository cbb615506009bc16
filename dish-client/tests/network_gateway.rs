// dish-client/tests/network_gateway.rs
// Wire-format checks for the reqwest gateway against an in-process backend

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
};
use dish_client::{
    ClientConfig, ClientError, Decimal, DishCategory, DishGateway, DishId, DishUpsert,
    NetworkDishGateway,
};
use serde_json::{Value, json};

#[derive(Clone, Default)]
struct Backend {
    upserts: Arc<Mutex<Vec<Value>>>,
    deletes: Arc<Mutex<Vec<String>>>,
}

async fn list() -> Json<Value> {
    Json(json!({
        "data": [
            {
                "_id": "1",
                "name": "Soup",
                "description": "Hot",
                "price": 5,
                "category": "Starter",
                "soldOut": true,
                "waitingTime": 10,
                "__v": 0
            },
            {
                "_id": "2",
                "name": "Steak",
                "description": "Grilled",
                "price": "18",
                "category": " Main Course",
                "soldOut": false,
                "waitingTime": "25"
            }
        ]
    }))
}

async fn upsert(State(backend): State<Backend>, Json(body): Json<Value>) -> Json<Value> {
    backend.upserts.lock().unwrap().push(body.clone());
    Json(json!({ "data": body }))
}

async fn remove(State(backend): State<Backend>, Path(id): Path<String>) -> StatusCode {
    if id == "missing" {
        return StatusCode::NOT_FOUND;
    }
    backend.deletes.lock().unwrap().push(id);
    StatusCode::OK
}

async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn gateway_for(backend: &Backend) -> NetworkDishGateway {
    let router = Router::new()
        .route("/dishes", get(list).put(upsert))
        .route("/dishes/{id}", delete(remove))
        .with_state(backend.clone());
    let base_url = spawn_backend(router).await;
    ClientConfig::new(base_url).with_timeout(5).build_gateway().unwrap()
}

fn tea(id: Option<&str>) -> DishUpsert {
    DishUpsert {
        id: id.map(DishId::new),
        name: "Tea".into(),
        description: "Green".into(),
        price: Decimal::from(3),
        category: DishCategory::MainCourse,
        sold_out: true,
        waiting_time: 2,
    }
}

#[tokio::test]
async fn test_list_dishes_unwraps_envelope() {
    let gateway = gateway_for(&Backend::default()).await;
    let dishes = gateway.list_dishes().await.unwrap();

    assert_eq!(dishes.len(), 2);
    assert_eq!(dishes[0].id, DishId::new("1"));
    assert_eq!(dishes[0].name, "Soup");
    assert_eq!(dishes[1].category, DishCategory::MainCourse);
    assert_eq!(dishes[1].price, Decimal::from(18));
    assert_eq!(dishes[1].waiting_time, 25);
}

#[tokio::test]
async fn test_create_sends_no_id() {
    let backend = Backend::default();
    let gateway = gateway_for(&backend).await;
    gateway.upsert_dish(&tea(None)).await.unwrap();

    let upserts = backend.upserts.lock().unwrap();
    assert_eq!(upserts.len(), 1);
    let body = &upserts[0];
    assert!(body.get("_id").is_none());
    assert_eq!(body["name"], json!("Tea"));
    assert_eq!(body["category"], json!("Main Course"));
    assert_eq!(body["price"].as_f64(), Some(3.0));
    assert_eq!(body["soldOut"], json!(true));
    assert_eq!(body["waitingTime"], json!(2));
}

#[tokio::test]
async fn test_update_sends_id() {
    let backend = Backend::default();
    let gateway = gateway_for(&backend).await;
    gateway.upsert_dish(&tea(Some("abc"))).await.unwrap();

    let upserts = backend.upserts.lock().unwrap();
    assert_eq!(upserts[0]["_id"], json!("abc"));
}

#[tokio::test]
async fn test_delete_by_id() {
    let backend = Backend::default();
    let gateway = gateway_for(&backend).await;
    gateway.delete_dish(&DishId::new("1")).await.unwrap();

    assert_eq!(*backend.deletes.lock().unwrap(), vec!["1".to_string()]);

    let err = gateway.delete_dish(&DishId::new("missing")).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn test_server_error_is_reported() {
    let router = Router::new().route(
        "/dishes",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "kitchen on fire") }),
    );
    let gateway = ClientConfig::new(spawn_backend(router).await)
        .build_gateway()
        .unwrap();

    let err = gateway.list_dishes().await.unwrap_err();
    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, "kitchen on fire");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_malformed_list_is_an_error() {
    let router = Router::new().route("/dishes", get(|| async { Json(json!({ "items": [] })) }));
    let gateway = ClientConfig::new(spawn_backend(router).await)
        .build_gateway()
        .unwrap();

    let err = gateway.list_dishes().await.unwrap_err();
    assert!(matches!(err, ClientError::Serialization(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_http_error() {
    // bind then drop to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let gateway = ClientConfig::new(format!("http://{addr}"))
        .with_timeout(2)
        .build_gateway()
        .unwrap();
    let err = gateway.list_dishes().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let router = Router::new().route(
        "/dishes",
        get(|| async {
            tokio::time::sleep(std::time::Duration::from_secs(3)).await;
            Json(json!({ "data": [] }))
        }),
    );
    let gateway = ClientConfig::new(spawn_backend(router).await)
        .with_timeout(1)
        .build_gateway()
        .unwrap();

    let err = gateway.list_dishes().await.unwrap_err();
    match err {
        ClientError::Http(e) => assert!(e.is_timeout(), "expected a timeout, got {e}"),
        other => panic!("unexpected error: {other}"),
    }
}
