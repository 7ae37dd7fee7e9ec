// Comment-specific contract tests: two-step foreign-key check order on
// create and the double denormalized projection (author name + board id).

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use serde_json::json;

#[actix_web::test]
async fn create_with_unknown_author_is_not_found() {
    let srv = spawn_test_server().await;
    let parents = seed_parents(&srv).await;

    let (status, body) = post_error(
        &srv,
        "/comments",
        &json!({"content": "hi", "userId": 999999, "boardId": parents.board_id}),
    )
    .await;

    assert_eq!(status, 404);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("User not found"));
}

#[actix_web::test]
async fn create_with_valid_author_but_unknown_board_is_not_found_and_persists_nothing() {
    let srv = spawn_test_server().await;
    let parents = seed_parents(&srv).await;

    let (status, body) = post_error(
        &srv,
        "/comments",
        &json!({"content": "hi", "userId": parents.user_id, "boardId": 999999}),
    )
    .await;

    assert_eq!(status, 404);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Board not found"));

    let comments = get_json(&srv, "/comments").await;
    assert_eq!(comments.as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn author_is_checked_before_board() {
    let srv = spawn_test_server().await;

    // Both references are bad; the missing user is reported because the
    // user lookup runs first.
    let (status, body) = post_error(
        &srv,
        "/comments",
        &json!({"content": "hi", "userId": 999998, "boardId": 999999}),
    )
    .await;

    assert_eq!(status, 404);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("User not found"));
}

#[actix_web::test]
async fn responses_embed_author_name_and_board_id() {
    let srv = spawn_test_server().await;
    let parents = seed_parents(&srv).await;

    let comment = post_json(
        &srv,
        "/comments",
        &json!({
            "content": "Nice post",
            "userId": parents.user_id,
            "boardId": parents.board_id
        }),
    )
    .await;

    assert_eq!(comment["userName"], "Seed User");
    assert_eq!(comment["boardId"].as_i64(), Some(parents.board_id));

    let fetched = get_json(&srv, &format!("/comments/{}", comment["id"])).await;
    assert_eq!(fetched["userName"], "Seed User");
    assert_eq!(fetched["boardId"].as_i64(), Some(parents.board_id));
}

#[actix_web::test]
async fn comments_have_no_update_route() {
    let srv = spawn_test_server().await;
    let parents = seed_parents(&srv).await;

    let comment = post_json(
        &srv,
        "/comments",
        &json!({
            "content": "hi",
            "userId": parents.user_id,
            "boardId": parents.board_id
        }),
    )
    .await;

    let status = put_status(
        &srv,
        &format!("/comments/{}", comment["id"]),
        &json!({"content": "edited"}),
    )
    .await;
    assert_eq!(status, 404);
}
