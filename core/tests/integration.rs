//! Full lifecycle test against the live mock backend.
//!
//! # Design
//! Starts the mock server on a random port, then drives every facade
//! operation over real HTTP using ureq. Validates that request building,
//! the interceptor, and error normalization work end-to-end with the
//! actual server, including both backend error shapes.

use std::time::Duration;

use heroes_core::{
    ApiClient, ApiError, HttpMethod, HttpRequest, HttpResponse, CONNECTION_ERROR, VALIDATION_ERROR,
};
use serde_json::{json, Value};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Transport policy lives here, not in the core: status codes come back as
/// data rather than `Err` (the interceptor owns status interpretation), a
/// global timeout bounds every call, and a transport-level failure — no
/// response received — maps to the normalized connectivity error.
fn execute(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(Some(Duration::from_secs(5)))
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => {
            let mut call = agent.get(&req.path);
            for (name, value) in &req.headers {
                call = call.header(name.as_str(), value.as_str());
            }
            call.call()
        }
        (HttpMethod::Delete, _) => {
            let mut call = agent.delete(&req.path);
            for (name, value) in &req.headers {
                call = call.header(name.as_str(), value.as_str());
            }
            call.call()
        }
        (HttpMethod::Post, body) => {
            let mut call = agent.post(&req.path);
            for (name, value) in &req.headers {
                call = call.header(name.as_str(), value.as_str());
            }
            match body {
                Some(body) => call.send(body.as_bytes()),
                None => call.send_empty(),
            }
        }
        (HttpMethod::Put, body) => {
            let mut call = agent.put(&req.path);
            for (name, value) in &req.headers {
                call = call.header(name.as_str(), value.as_str());
            }
            match body {
                Some(body) => call.send(body.as_bytes()),
                None => call.send_empty(),
            }
        }
    }
    .map_err(|_| ApiError::connection())?;

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}

/// Start the mock server on a random port and return its address.
fn spawn_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn hero_crud_lifecycle() {
    let addr = spawn_server();
    let client = ApiClient::new(&format!("http://{addr}"));
    let heroes = client.heroes();
    let superpowers = client.superpowers();

    // Step 1: list — should be empty.
    let listed = heroes.parse_list(execute(heroes.build_list()).unwrap()).unwrap();
    assert_eq!(listed, json!([]));

    // Step 2: the superpowers catalog is seeded.
    let catalog = superpowers
        .parse_list(execute(superpowers.build_list()).unwrap())
        .unwrap();
    assert!(!catalog.as_array().unwrap().is_empty());

    // Step 3: create a hero.
    let req = heroes
        .build_create(&json!({
            "name": "Aranha de Aço",
            "nickname": "Aço",
            "superpowers": ["Super força"],
        }))
        .unwrap();
    let created = heroes.parse_create(execute(req).unwrap()).unwrap();
    assert_eq!(created["name"], "Aranha de Aço");
    let id = created["id"].as_str().unwrap().to_string();

    // Step 4: get the created hero.
    let fetched = heroes.parse_get(execute(heroes.build_get(&id)).unwrap()).unwrap();
    assert_eq!(fetched, created);

    // Step 5: partial update — nickname only, name untouched.
    let req = heroes.build_update(&id, &json!({"nickname": "Teia"})).unwrap();
    let updated = heroes.parse_update(execute(req).unwrap()).unwrap();
    assert_eq!(updated["nickname"], "Teia");
    assert_eq!(updated["name"], "Aranha de Aço");

    // Step 6: list — should have one item.
    let listed = heroes.parse_list(execute(heroes.build_list()).unwrap()).unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // Step 7: delete — empty 204 body comes back as Null.
    let deleted = heroes
        .parse_delete(execute(heroes.build_delete(&id)).unwrap())
        .unwrap();
    assert_eq!(deleted, Value::Null);

    // Step 8: get after delete — normalized message error.
    let err = heroes
        .parse_get(execute(heroes.build_get(&id)).unwrap())
        .unwrap_err();
    assert_eq!(err.message, mock_server::HERO_NOT_FOUND);
    assert_eq!(err.status, Some(404));
    assert!(err.details.is_none());
    assert!(err.response.is_some());

    // Step 9: list — empty again.
    let listed = heroes.parse_list(execute(heroes.build_list()).unwrap()).unwrap();
    assert_eq!(listed, json!([]));
}

#[test]
fn backend_error_shapes_are_normalized() {
    let addr = spawn_server();
    let client = ApiClient::new(&format!("http://{addr}"));
    let heroes = client.heroes();

    // Validation error: blank name → fixed message plus structured details.
    let req = heroes.build_create(&json!({"name": "   "})).unwrap();
    let err = heroes.parse_create(execute(req).unwrap()).unwrap_err();
    assert_eq!(err.message, VALIDATION_ERROR);
    assert_eq!(err.status, Some(400));
    let details = err.details.unwrap();
    assert!(details.get("name").is_some());

    // Business error: duplicate name → the server's message verbatim.
    let req = heroes.build_create(&json!({"name": "Vulto"})).unwrap();
    heroes.parse_create(execute(req).unwrap()).unwrap();
    let req = heroes.build_create(&json!({"name": "Vulto"})).unwrap();
    let err = heroes.parse_create(execute(req).unwrap()).unwrap_err();
    assert_eq!(err.message, mock_server::DUPLICATE_NAME);
    assert_eq!(err.status, Some(409));
    assert!(err.details.is_none());

    // Plain-body error: a malformed id segment is rejected by the server
    // with a non-JSON body, which becomes the message as-is.
    let err = heroes
        .parse_get(execute(heroes.build_get("not-a-uuid")).unwrap())
        .unwrap_err();
    assert_eq!(err.status, Some(400));
    assert!(!err.message.is_empty());
    assert!(err.details.is_none());
}

#[test]
fn unreachable_server_maps_to_connection_error() {
    // Bind then drop to get a port with nothing listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(&format!("http://{addr}"));
    let err = execute(client.heroes().build_list()).unwrap_err();
    assert_eq!(err.message, CONNECTION_ERROR);
    assert!(err.status.is_none());
    assert!(err.response.is_none());
}
