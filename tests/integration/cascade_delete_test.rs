// Deleting a parent removes its dependents instead of leaving dangling
// foreign references. Covers the full user → board → comment chain and the
// board → comment subchain.

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use serde_json::json;

#[actix_web::test]
async fn deleting_a_user_removes_their_boards_and_comments() {
    let srv = spawn_test_server().await;

    let user = post_json(
        &srv,
        "/users",
        &json!({"name": "Ann", "email": "ann@x.com"}),
    )
    .await;
    let user_id = user["id"].as_i64().unwrap();

    let board = post_json(
        &srv,
        "/boards",
        &json!({"title": "T", "content": "C", "userId": user_id}),
    )
    .await;
    assert_eq!(board["userName"], "Ann");
    let board_id = board["id"].as_i64().unwrap();

    let comment = post_json(
        &srv,
        "/comments",
        &json!({"content": "hi", "userId": user_id, "boardId": board_id}),
    )
    .await;
    let comment_id = comment["id"].as_i64().unwrap();

    assert_eq!(delete_status(&srv, &format!("/users/{}", user_id)).await, 204);

    assert_eq!(get_status(&srv, &format!("/users/{}", user_id)).await, 404);
    assert_eq!(get_status(&srv, &format!("/boards/{}", board_id)).await, 404);
    assert_eq!(
        get_status(&srv, &format!("/comments/{}", comment_id)).await,
        404
    );

    // Listings shrink to empty rather than failing on a dangling author.
    let boards = get_json(&srv, "/boards").await;
    assert_eq!(boards.as_array().unwrap().len(), 0);
    let comments = get_json(&srv, "/comments").await;
    assert_eq!(comments.as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn deleting_a_board_removes_its_comments_but_not_the_author() {
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
    let comment_id = comment["id"].as_i64().unwrap();

    assert_eq!(
        delete_status(&srv, &format!("/boards/{}", parents.board_id)).await,
        204
    );

    assert_eq!(
        get_status(&srv, &format!("/comments/{}", comment_id)).await,
        404
    );
    assert_eq!(
        get_status(&srv, &format!("/users/{}", parents.user_id)).await,
        200
    );
}
