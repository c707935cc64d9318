mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn list_is_empty_array_initially() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server.client.get(server.url("/api/athletes")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!([]));
    Ok(())
}

#[tokio::test]
async fn create_then_read_back() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server
        .client
        .post(server.url("/api/athletes"))
        .json(&json!({
            "name": "Maya Chen",
            "grade": 11,
            "personalRecord": "",
            "events": ""
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = res.json().await?;
    assert_eq!(created["message"], "Athlete created");
    let id = created["id"].as_i64().unwrap();

    let res = server
        .client
        .get(server.url(&format!("/api/athletes/{id}")))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.json::<Value>().await?,
        json!({
            "id": id,
            "name": "Maya Chen",
            "grade": 11,
            "personalRecord": "",
            "events": ""
        })
    );

    let list: Value = server
        .client
        .get(server.url("/api/athletes"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(list.as_array().map(Vec::len), Some(1));
    Ok(())
}

#[tokio::test]
async fn update_replaces_fields() -> Result<()> {
    let server = common::spawn_server().await?;

    let created: Value = server
        .client
        .post(server.url("/api/athletes"))
        .json(&json!({ "name": "Eli Brooks", "grade": 9 }))
        .send()
        .await?
        .json()
        .await?;
    let id = created["id"].as_i64().unwrap();

    let res = server
        .client
        .put(server.url(&format!("/api/athletes/{id}")))
        .json(&json!({
            "name": "Eli Brooks",
            "grade": 10,
            "personalRecord": "17:42",
            "events": "5K, 3200m"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({ "message": "Athlete updated" }));

    let athlete: Value = server
        .client
        .get(server.url(&format!("/api/athletes/{id}")))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(athlete["grade"], 10);
    assert_eq!(athlete["personalRecord"], "17:42");
    assert_eq!(athlete["events"], "5K, 3200m");
    Ok(())
}

#[tokio::test]
async fn bad_id_and_missing_athlete() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server.client.get(server.url("/api/athletes/abc")).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["error"], "Invalid athlete ID");

    let res = server.client.get(server.url("/api/athletes/42")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?["error"], "Athlete not found");

    let res = server
        .client
        .put(server.url("/api/athletes/abc"))
        .json(&json!({ "name": "X", "grade": 9 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["error"], "Invalid athlete ID");
    Ok(())
}

#[tokio::test]
async fn create_validates_required_fields() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server
        .client
        .post(server.url("/api/athletes"))
        .json(&json!({ "grade": 12 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["error"], "name is required");

    let res = server
        .client
        .post(server.url("/api/athletes"))
        .json(&json!({ "name": "Nora", "grade": 0 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["error"], "grade is required");

    let res = server
        .client
        .post(server.url("/api/athletes"))
        .body("{\"name\": \"Nora\",")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn delete_missing_athlete_still_succeeds() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server.client.delete(server.url("/api/athletes/999")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({ "message": "Athlete deleted" }));
    Ok(())
}

#[tokio::test]
async fn oversized_grade_is_rejected() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server
        .client
        .post(server.url("/api/athletes"))
        .json(&json!({ "name": "Rex Hall", "grade": 300 }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert!(
        body["error"].as_str().unwrap_or_default().contains("expected i8"),
        "{body}"
    );

    let list: Value = server
        .client
        .get(server.url("/api/athletes"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(list, json!([]));
    Ok(())
}
