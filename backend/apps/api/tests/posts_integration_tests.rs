use axum::http::StatusCode;
use chrono::{DateTime, Utc};

mod common;

use common::{create_test_app, json_body, location, request};

fn timestamp(value: &serde_json::Value) -> DateTime<Utc> {
    value.as_str().unwrap().parse().unwrap()
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = create_test_app();
    let id = uuid::Uuid::new_v4().to_string();

    let requests = [
        request("GET", "/dashboard", None, None),
        request("GET", "/add-post", None, None),
        request("POST", "/add-post", None, Some("title=T&body=B".into())),
        request("GET", &format!("/edit-post/{}", id), None, None),
        request("PUT", &format!("/edit-post/{}", id), None, Some("title=T&body=B".into())),
        request("DELETE", &format!("/delete-post/{}", id), None, None),
    ];

    for req in requests {
        let uri = req.uri().to_string();
        let res = app.send(req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED, "{}", uri);
    }
}

#[tokio::test]
async fn test_forged_token_is_unauthorized() {
    let app = create_test_app();
    let cookie = app.sign_up_and_login("alice", "pw1").await;

    // Flip the last signature character
    let mut forged = cookie.clone();
    let last = forged.pop().unwrap();
    forged.push(if last == 'A' { 'B' } else { 'A' });

    for bad in [forged.as_str(), "token=garbage", "token=a.b"] {
        assert_eq!(
            app.get("/dashboard", Some(bad)).await.status(),
            StatusCode::UNAUTHORIZED
        );
    }
}

#[tokio::test]
async fn test_add_post_page_is_a_view_payload() {
    let app = create_test_app();
    let cookie = app.sign_up_and_login("alice", "pw1").await;

    let res = app.get("/add-post", Some(&cookie)).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res).await["view"], "admin/add-post");
}

#[tokio::test]
async fn test_create_read_update_round_trip() {
    let app = create_test_app();
    let cookie = app.sign_up_and_login("alice", "pw1").await;

    let res = app.create_post(&cookie, "T", "B").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/dashboard");

    let posts = app.list_posts(&cookie).await;
    assert_eq!(posts.len(), 1);
    let id = posts[0]["id"].as_str().unwrap().to_string();

    let res = app.get(&format!("/edit-post/{}", id), Some(&cookie)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let page = json_body(res).await;
    assert_eq!(page["view"], "admin/edit-post");
    let post = &page["data"];
    assert_eq!(post["title"], "T");
    assert_eq!(post["body"], "B");
    let alice_id = post["ownerId"].as_str().unwrap().to_string();

    let res = app.update_post(&cookie, &id, "T2", "B").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), format!("/edit-post/{}", id));

    let page = json_body(app.get(&format!("/edit-post/{}", id), Some(&cookie)).await).await;
    let post = &page["data"];
    assert_eq!(post["title"], "T2");
    assert_eq!(post["body"], "B");
    assert_eq!(post["ownerId"], alice_id);
    assert!(timestamp(&post["updatedAt"]) > timestamp(&post["createdAt"]));
}

#[tokio::test]
async fn test_create_post_requires_title_and_body() {
    let app = create_test_app();
    let cookie = app.sign_up_and_login("alice", "pw1").await;

    assert_eq!(
        app.create_post(&cookie, "", "B").await.status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        app.create_post(&cookie, "T", "").await.status(),
        StatusCode::BAD_REQUEST
    );
    assert!(app.list_posts(&cookie).await.is_empty());
}

#[tokio::test]
async fn test_missing_post_is_not_found_never_forbidden() {
    let app = create_test_app();
    let cookie = app.sign_up_and_login("alice", "pw1").await;

    for id in [uuid::Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
        assert_eq!(
            app.get(&format!("/edit-post/{}", id), Some(&cookie)).await.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            app.update_post(&cookie, &id, "T", "B").await.status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            app.delete_post(&cookie, &id).await.status(),
            StatusCode::NOT_FOUND
        );
    }
}

#[tokio::test]
async fn test_non_owner_is_forbidden() {
    let app = create_test_app();
    let alice = app.sign_up_and_login("alice", "pw1").await;
    let bob = app.sign_up_and_login("bob", "pw2").await;

    let id = app.create_post_id(&alice, "Mine", "Hands off").await;

    assert_eq!(
        app.get(&format!("/edit-post/{}", id), Some(&bob)).await.status(),
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        app.update_post(&bob, &id, "Yours", "now").await.status(),
        StatusCode::FORBIDDEN
    );
    assert_eq!(app.delete_post(&bob, &id).await.status(), StatusCode::FORBIDDEN);

    // Untouched, and still visible to everyone
    let page = json_body(app.get(&format!("/edit-post/{}", id), Some(&alice)).await).await;
    assert_eq!(page["data"]["title"], "Mine");
    assert_eq!(app.list_posts(&bob).await.len(), 1);
}

#[tokio::test]
async fn test_deleted_post_is_gone() {
    let app = create_test_app();
    let cookie = app.sign_up_and_login("alice", "pw1").await;
    let id = app.create_post_id(&cookie, "T", "B").await;

    let res = app.delete_post(&cookie, &id).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/dashboard");

    assert_eq!(
        app.get(&format!("/edit-post/{}", id), Some(&cookie)).await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        app.delete_post(&cookie, &id).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_alice_and_bob_scenario() {
    let app = create_test_app();

    // alice registers and logs in
    let alice = app.sign_up_and_login("alice", "pw1").await;
    assert!(alice.starts_with("token="));

    // Her post shows up in the list
    let res = app.create_post(&alice, "Hi", "World").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    let posts = app.list_posts(&alice).await;
    let post = posts.iter().find(|p| p["title"] == "Hi").unwrap();
    assert_eq!(post["body"], "World");
    let id = post["id"].as_str().unwrap().to_string();

    // bob cannot delete it
    let bob = app.sign_up_and_login("bob", "pw2").await;
    assert_eq!(app.delete_post(&bob, &id).await.status(), StatusCode::FORBIDDEN);

    // alice can
    assert_eq!(app.delete_post(&alice, &id).await.status(), StatusCode::SEE_OTHER);
    let posts = app.list_posts(&alice).await;
    assert!(posts.iter().all(|p| p["id"] != id.as_str()));
}
