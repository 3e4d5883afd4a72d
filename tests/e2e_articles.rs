use axum::http::{Method, StatusCode};
use serde_json::{Value, json};

mod support;

use support::TestApp;

fn slugs(body: &Value) -> Vec<String> {
    body["articles"]
        .as_array()
        .expect("articles array")
        .iter()
        .map(|a| a["slug"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn create_then_get_article() {
    let app = TestApp::new();
    let jake = app.register("jake").await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/articles",
            Some(&jake.token),
            Some(json!({
                "article": {
                    "title": "How to train your dragon",
                    "description": "Ever wonder how?",
                    "body": "You have to believe",
                    "tagList": ["reactjs", "angularjs", "dragons"]
                }
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["article"]["slug"], "how_to_train_your_dragon");
    assert_eq!(
        body["article"]["tagList"],
        json!(["reactjs", "angularjs", "dragons"])
    );
    assert_eq!(body["article"]["favoritesCount"], 0);
    assert_eq!(body["article"]["author"]["username"], "jake");
    assert!(body["article"]["createdAt"].is_string());

    let (status, body) = app
        .send(Method::GET, "/api/articles/how_to_train_your_dragon", None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["article"]["title"], "How to train your dragon");
    assert_eq!(body["article"]["favorited"], false);
}

#[tokio::test]
async fn same_title_twice_gets_distinct_slugs() {
    let app = TestApp::new();
    let jake = app.actor("jake").await;

    let first = app.publish(&jake, "Same title", &[]).await;
    let second = app.publish(&jake, "Same title", &[]).await;

    assert_eq!(first.slug, "same_title");
    assert_eq!(second.slug, "same_title_2");
}

#[tokio::test]
async fn list_is_newest_first_with_total_count() {
    let app = TestApp::new();
    let jake = app.actor("jake").await;
    for title in ["one", "two", "three"] {
        app.publish(&jake, title, &[]).await;
    }

    let (status, body) = app.send(Method::GET, "/api/articles", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(slugs(&body), ["three", "two", "one"]);
    assert_eq!(body["articlesCount"], 3);

    let (_, body) = app
        .send(Method::GET, "/api/articles?limit=1&offset=1", None, None)
        .await;
    assert_eq!(slugs(&body), ["two"]);
    assert_eq!(body["articlesCount"], 3);
}

#[tokio::test]
async fn list_filters_by_tag_author_and_favorited() {
    let app = TestApp::new();
    let jake = app.actor("jake").await;
    let anne = app.actor("anne").await;
    app.publish(&jake, "Dragons", &["dragons"]).await;
    let liked = app.publish(&anne, "Cats", &["cats"]).await;
    app.services
        .article_commands
        .favorite_article(&jake, &liked.slug)
        .await
        .unwrap();

    let (_, body) = app
        .send(Method::GET, "/api/articles?tag=dragons", None, None)
        .await;
    assert_eq!(slugs(&body), ["dragons"]);

    let (_, body) = app
        .send(Method::GET, "/api/articles?author=anne", None, None)
        .await;
    assert_eq!(slugs(&body), ["cats"]);

    let (_, body) = app
        .send(Method::GET, "/api/articles?favorited=jake", Some(&jake.token), None)
        .await;
    assert_eq!(slugs(&body), ["cats"]);
    assert_eq!(body["articles"][0]["favorited"], true);
    assert_eq!(body["articles"][0]["favoritesCount"], 1);

    let (_, body) = app
        .send(Method::GET, "/api/articles?author=nobody", None, None)
        .await;
    assert_eq!(body["articlesCount"], 0);
}

#[tokio::test]
async fn feed_shows_only_followed_authors() {
    let app = TestApp::new();
    let jake = app.actor("jake").await;
    let anne = app.actor("anne").await;
    let fan = app.actor("fan").await;
    app.publish(&jake, "From jake", &[]).await;
    app.publish(&anne, "From anne", &[]).await;
    app.services
        .user_commands
        .follow(&fan, "jake")
        .await
        .unwrap();

    let (status, body) = app
        .send(Method::GET, "/api/articles/feed", Some(&fan.token), None)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(slugs(&body), ["from_jake"]);
    assert_eq!(body["articles"][0]["author"]["following"], true);
    assert_eq!(body["articlesCount"], 1);
}

#[tokio::test]
async fn update_and_delete_article() {
    let app = TestApp::new();
    let jake = app.register("jake").await;
    let author = app.services.authenticate(&jake.token).await.unwrap();
    app.publish(&author, "Old title", &[]).await;

    let (status, body) = app
        .send(
            Method::PUT,
            "/api/articles/old_title",
            Some(&jake.token),
            Some(json!({"article": {"title": "New title"}})),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["article"]["slug"], "new_title");

    let (status, body) = app
        .send(Method::DELETE, "/api/articles/new_title", Some(&jake.token), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = app
        .send(Method::GET, "/api/articles/new_title", None, None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn favorite_and_unfavorite_over_http() {
    let app = TestApp::new();
    let jake = app.actor("jake").await;
    let fan = app.register("fan").await;
    app.publish(&jake, "Hello", &[]).await;

    let (status, body) = app
        .send(Method::POST, "/api/articles/hello/favorite", Some(&fan.token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["article"]["favorited"], true);
    assert_eq!(body["article"]["favoritesCount"], 1);

    let (status, body) = app
        .send(Method::DELETE, "/api/articles/hello/favorite", Some(&fan.token), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["article"]["favorited"], false);
    assert_eq!(body["article"]["favoritesCount"], 0);
}

#[tokio::test]
async fn comments_over_http() {
    let app = TestApp::new();
    let jake = app.actor("jake").await;
    let reader = app.register("reader").await;
    app.publish(&jake, "Hello", &[]).await;

    let (status, body) = app
        .send(
            Method::POST,
            "/api/articles/hello/comments",
            Some(&reader.token),
            Some(json!({"comment": {"body": "Thank you so much!"}})),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["comment"]["body"], "Thank you so much!");
    assert_eq!(body["comment"]["author"]["username"], "reader");
    let id = body["comment"]["id"].as_i64().unwrap();

    let (status, body) = app
        .send(Method::GET, "/api/articles/hello/comments", None, None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["comments"].as_array().unwrap().len(), 1);

    let uri = format!("/api/articles/hello/comments/{id}");
    let (status, _) = app
        .send(Method::DELETE, &uri, Some(&reader.token), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = app
        .send(Method::GET, "/api/articles/hello/comments", None, None)
        .await;
    assert_eq!(body["comments"], json!([]));
}

#[tokio::test]
async fn tags_are_distinct_and_sorted() {
    let app = TestApp::new();
    let jake = app.actor("jake").await;
    app.publish(&jake, "One", &["rust", "axum"]).await;
    app.publish(&jake, "Two", &["rust", "sqlx"]).await;

    let (status, body) = app.send(Method::GET, "/api/tags", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tags"], json!(["axum", "rust", "sqlx"]));
}
