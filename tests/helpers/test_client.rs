// Test HTTP client helpers
//
// Thin wrappers over the test server's client that assert the expected
// status and hand back parsed JSON.

use actix_test::TestServer;
use serde_json::Value;

pub async fn get_json(srv: &TestServer, path: &str) -> Value {
    let mut res = srv.get(path).send().await.unwrap();
    assert_eq!(res.status().as_u16(), 200, "GET {} should return 200", path);
    res.json::<Value>().await.unwrap()
}

pub async fn get_status(srv: &TestServer, path: &str) -> u16 {
    srv.get(path).send().await.unwrap().status().as_u16()
}

pub async fn post_json(srv: &TestServer, path: &str, body: &Value) -> Value {
    let mut res = srv.post(path).send_json(body).await.unwrap();
    assert_eq!(res.status().as_u16(), 201, "POST {} should return 201", path);
    res.json::<Value>().await.unwrap()
}

pub async fn post_status(srv: &TestServer, path: &str, body: &Value) -> u16 {
    srv.post(path)
        .send_json(body)
        .await
        .unwrap()
        .status()
        .as_u16()
}

/// POST expected to fail; returns status and parsed error body
pub async fn post_error(srv: &TestServer, path: &str, body: &Value) -> (u16, Value) {
    let mut res = srv.post(path).send_json(body).await.unwrap();
    let status = res.status().as_u16();
    let body = res.json::<Value>().await.unwrap_or(Value::Null);
    (status, body)
}

pub async fn put_json(srv: &TestServer, path: &str, body: &Value) -> Value {
    let mut res = srv.put(path).send_json(body).await.unwrap();
    assert_eq!(res.status().as_u16(), 200, "PUT {} should return 200", path);
    res.json::<Value>().await.unwrap()
}

pub async fn put_status(srv: &TestServer, path: &str, body: &Value) -> u16 {
    srv.put(path)
        .send_json(body)
        .await
        .unwrap()
        .status()
        .as_u16()
}

pub async fn delete_status(srv: &TestServer, path: &str) -> u16 {
    srv.delete(path).send().await.unwrap().status().as_u16()
}
