use axum::http::StatusCode;
use serde_json::{Value, json};

use super::common::TestApp;

async fn create(app: &TestApp, group: &str, song: &str) {
    app.server
        .post("/v1/create")
        .json(&json!({ "group": group, "song": song }))
        .await
        .assert_status_ok();
}

#[tokio::test]
#[ignore = "starts an embedded PostgreSQL"]
async fn create_update_and_read_lyrics() {
    let app = TestApp::new().await.unwrap();

    create(&app, "Muse", "Hysteria").await;

    app.server
        .get("/v1/info?group=Muse&song=Hysteria")
        .await
        .assert_json(&json!({
            "group": "Muse",
            "song": "Hysteria",
            "lyrics": "",
            "releaseDate": null,
            "link": ""
        }));

    app.server
        .patch("/v1/update?group=Muse&song=Hysteria")
        .json(&json!({ "lyrics": ["line1", "line2"] }))
        .await
        .assert_status_ok();

    app.server
        .get("/v1/lyrics?group=Muse&song=Hysteria&offset=0&limit=10")
        .await
        .assert_json(&json!({ "lyrics": ["line1", "line2"] }));

    app.server
        .get("/v1/lyrics?group=Muse&song=Hysteria&offset=1&limit=10")
        .await
        .assert_json(&json!({ "lyrics": ["line2"] }));

    app.server
        .get("/v1/info?group=Muse&song=Hysteria")
        .await
        .assert_json(&json!({
            "group": "Muse",
            "song": "Hysteria",
            "lyrics": "line1\nline2",
            "releaseDate": null,
            "link": ""
        }));

    app.stop().await.unwrap();
}

#[tokio::test]
#[ignore = "starts an embedded PostgreSQL"]
async fn lyrics_are_replaced_not_appended() {
    let app = TestApp::new().await.unwrap();

    create(&app, "Muse", "Hysteria").await;

    for lyrics in [json!(["a", "b", "c"]), json!(["d"])] {
        app.server
            .patch("/v1/update?group=Muse&song=Hysteria")
            .json(&json!({ "lyrics": lyrics }))
            .await
            .assert_status_ok();
    }

    app.server
        .get("/v1/lyrics?group=Muse&song=Hysteria&offset=0&limit=10")
        .await
        .assert_json(&json!({ "lyrics": ["d"] }));

    app.stop().await.unwrap();
}

#[tokio::test]
#[ignore = "starts an embedded PostgreSQL"]
async fn update_without_lyrics_drops_verses() {
    let app = TestApp::new().await.unwrap();

    create(&app, "Muse", "Hysteria").await;

    app.server
        .patch("/v1/update?group=Muse&song=Hysteria")
        .json(&json!({ "lyrics": ["line1", "line2"] }))
        .await
        .assert_status_ok();

    app.server
        .patch("/v1/update?group=Muse&song=Hysteria")
        .json(&json!({ "link": "https://muse.mu" }))
        .await
        .assert_status_ok();

    app.server
        .get("/v1/lyrics?group=Muse&song=Hysteria&offset=0&limit=10")
        .await
        .assert_json(&json!({ "lyrics": [] }));

    let info = app
        .server
        .get("/v1/info?group=Muse&song=Hysteria")
        .await
        .json::<Value>();
    assert_eq!(info["link"], "https://muse.mu");
    assert_eq!(info["lyrics"], "");

    app.stop().await.unwrap();
}

#[tokio::test]
#[ignore = "starts an embedded PostgreSQL"]
async fn scalar_fields_can_be_set_and_cleared() {
    let app = TestApp::new().await.unwrap();

    create(&app, "Muse", "Hysteria").await;

    app.server
        .patch("/v1/update?group=Muse&song=Hysteria")
        .json(&json!({
            "link": "https://muse.mu",
            "releaseDate": "2003-09-15"
        }))
        .await
        .assert_status_ok();

    let info = app
        .server
        .get("/v1/info?group=Muse&song=Hysteria")
        .await
        .json::<Value>();
    assert_eq!(info["link"], "https://muse.mu");
    assert_eq!(info["releaseDate"], "2003-09-15");

    app.server
        .patch("/v1/update?group=Muse&song=Hysteria")
        .json(&json!({ "link": null }))
        .await
        .assert_status_ok();

    let info = app
        .server
        .get("/v1/info?group=Muse&song=Hysteria")
        .await
        .json::<Value>();
    assert_eq!(info["link"], "");
    assert_eq!(info["releaseDate"], "2003-09-15");

    app.stop().await.unwrap();
}

#[tokio::test]
#[ignore = "starts an embedded PostgreSQL"]
async fn duplicates_conflict() {
    let app = TestApp::new().await.unwrap();

    create(&app, "Muse", "Hysteria").await;
    create(&app, "Muse", "Uprising").await;

    app.server
        .post("/v1/create")
        .json(&json!({ "group": "Muse", "song": "Hysteria" }))
        .await
        .assert_status(StatusCode::CONFLICT);

    app.server
        .patch("/v1/update?group=Muse&song=Uprising")
        .json(&json!({ "song": "Hysteria", "lyrics": ["kept?"] }))
        .await
        .assert_status(StatusCode::CONFLICT);

    // The failed rename rolled back with its lyrics
    app.server
        .get("/v1/lyrics?group=Muse&song=Uprising&offset=0&limit=10")
        .await
        .assert_json(&json!({ "lyrics": [] }));

    app.stop().await.unwrap();
}

#[tokio::test]
#[ignore = "starts an embedded PostgreSQL"]
async fn delete_twice_is_not_found() {
    let app = TestApp::new().await.unwrap();

    create(&app, "Muse", "Hysteria").await;

    app.server
        .patch("/v1/update?group=Muse&song=Hysteria")
        .json(&json!({ "lyrics": ["line1"] }))
        .await
        .assert_status_ok();

    app.server
        .delete("/v1/delete?group=Muse&song=Hysteria")
        .await
        .assert_status_ok();

    app.server
        .delete("/v1/delete?group=Muse&song=Hysteria")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    app.server
        .get("/v1/lyrics?group=Muse&song=Hysteria&offset=0&limit=10")
        .await
        .assert_status(StatusCode::NOT_FOUND);

    app.stop().await.unwrap();
}

#[tokio::test]
#[ignore = "starts an embedded PostgreSQL"]
async fn search_pages_in_stable_order() {
    let app = TestApp::new().await.unwrap();

    create(&app, "Muse", "Uprising").await;
    create(&app, "Muse", "Hysteria").await;
    create(&app, "Blur", "Song 2").await;

    let page = app
        .server
        .get("/v1/search?by_group=Muse&offset=0&limit=1")
        .await
        .json::<Value>();
    assert_eq!(page["songs"].as_array().map(Vec::len), Some(1));
    assert_eq!(page["songs"][0]["song"], "Hysteria");

    let all = app.server.get("/v1/search").await.json::<Value>();
    let names: Vec<_> = all["songs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|song| song["song"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Song 2", "Hysteria", "Uprising"]);

    app.stop().await.unwrap();
}

#[tokio::test]
#[ignore = "starts an embedded PostgreSQL"]
async fn search_by_lyrics_and_date() {
    let app = TestApp::new().await.unwrap();

    create(&app, "Muse", "Hysteria").await;
    create(&app, "Muse", "Uprising").await;

    app.server
        .patch("/v1/update?group=Muse&song=Hysteria")
        .json(&json!({
            "releaseDate": "2003-12-01",
            "lyrics": ["It's bugging me", "Grating me"]
        }))
        .await
        .assert_status_ok();

    app.server
        .get("/v1/search")
        .json(&json!({ "by_lyrics": "GRATING" }))
        .await
        .assert_json(&json!({
            "songs": [{
                "group": "Muse",
                "song": "Hysteria",
                "releaseDate": "2003-12-01",
                "link": ""
            }]
        }));

    let page = app
        .server
        .get("/v1/search?date_from=2004-01-01")
        .await
        .json::<Value>();
    assert_eq!(page["songs"], json!([]));

    // Both bounds are inclusive
    let page = app
        .server
        .get("/v1/search?date_from=2003-12-01&date_to=2003-12-01")
        .await
        .json::<Value>();
    assert_eq!(page["songs"].as_array().map(Vec::len), Some(1));
    assert_eq!(page["songs"][0]["song"], "Hysteria");

    // `%` matches literally
    let page = app
        .server
        .get("/v1/search?by_song_name=%25")
        .await
        .json::<Value>();
    assert_eq!(page["songs"], json!([]));

    app.stop().await.unwrap();
}
