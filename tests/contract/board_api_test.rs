// Board-specific contract tests: author existence check on create, the
// denormalized author-name projection, and author immutability on update.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use serde_json::json;

#[actix_web::test]
async fn create_with_unknown_author_is_not_found_and_persists_nothing() {
    let srv = spawn_test_server().await;

    let (status, body) = post_error(
        &srv,
        "/boards",
        &json!({"title": "T", "content": "C", "userId": 999999}),
    )
    .await;

    assert_eq!(status, 404);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("User not found"));

    let boards = get_json(&srv, "/boards").await;
    assert_eq!(boards.as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn responses_embed_the_authors_current_name() {
    let srv = spawn_test_server().await;
    let parents = seed_parents(&srv).await;

    let board = post_json(
        &srv,
        "/boards",
        &json!({"title": "T", "content": "C", "userId": parents.user_id}),
    )
    .await;
    assert_eq!(board["userName"], "Seed User");

    // The projection is recomputed from the user row on every read, so a
    // rename shows up in subsequent board reads.
    put_json(
        &srv,
        &format!("/users/{}", parents.user_id),
        &json!({"name": "Renamed User", "email": random_email()}),
    )
    .await;

    let fetched = get_json(&srv, &format!("/boards/{}", board["id"])).await;
    assert_eq!(fetched["userName"], "Renamed User");

    let listed = get_json(&srv, "/boards").await;
    for item in listed.as_array().unwrap() {
        assert_eq!(item["userName"], "Renamed User");
    }
}

#[actix_web::test]
async fn update_cannot_reassign_the_author() {
    let srv = spawn_test_server().await;
    let parents = seed_parents(&srv).await;

    let other = post_json(
        &srv,
        "/users",
        &json!({"name": "Other", "email": random_email()}),
    )
    .await;

    // A userId in the update payload is not part of the update shape and
    // is ignored outright.
    let updated = put_json(
        &srv,
        &format!("/boards/{}", parents.board_id),
        &json!({"title": "New", "content": "New", "userId": other["id"]}),
    )
    .await;

    assert_eq!(updated["userId"].as_i64(), Some(parents.user_id));
    assert_eq!(updated["title"], "New");
}
