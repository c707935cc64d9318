mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn create_meet(server: &common::TestServer, name: &str, date: &str) -> Result<i64> {
    let res = server
        .client
        .post(server.url("/api/meets"))
        .json(&json!({
            "name": name,
            "date": date,
            "location": "Jones County High School",
            "description": ""
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await?;
    assert_eq!(body["message"], "Meet created");
    Ok(body["id"].as_i64().unwrap())
}

#[tokio::test]
async fn create_and_get_meet() -> Result<()> {
    let server = common::spawn_server().await?;
    let id = create_meet(&server, "Greyhound Invitational", "2024-09-07").await?;

    let res = server
        .client
        .get(server.url(&format!("/api/meets/{id}")))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.json::<Value>().await?,
        json!({
            "id": id,
            "name": "Greyhound Invitational",
            "date": "2024-09-07",
            "location": "Jones County High School",
            "description": ""
        })
    );
    Ok(())
}

#[tokio::test]
async fn meets_list_in_date_order() -> Result<()> {
    let server = common::spawn_server().await?;
    create_meet(&server, "Region", "2024-10-19").await?;
    create_meet(&server, "Opener", "2024-08-24").await?;

    let meets: Value = server
        .client
        .get(server.url("/api/meets"))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(meets[0]["name"], "Opener");
    assert_eq!(meets[1]["name"], "Region");
    Ok(())
}

#[tokio::test]
async fn invalid_date_is_rejected() -> Result<()> {
    let server = common::spawn_server().await?;
    let id = create_meet(&server, "Opener", "2024-08-24").await?;

    let res = server
        .client
        .put(server.url(&format!("/api/meets/{id}")))
        .json(&json!({
            "name": "Opener",
            "date": "2024-13-40",
            "location": "Gray"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        res.json::<Value>().await?["error"],
        "Invalid date format. Use YYYY-MM-DD"
    );

    let res = server
        .client
        .post(server.url("/api/meets"))
        .json(&json!({ "name": "Opener", "date": "08/24/2024", "location": "Gray" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn update_meet_round_trips_date() -> Result<()> {
    let server = common::spawn_server().await?;
    let id = create_meet(&server, "Opener", "2024-08-24").await?;

    let res = server
        .client
        .put(server.url(&format!("/api/meets/{id}")))
        .json(&json!({
            "name": "Opener (moved)",
            "date": "2024-08-31",
            "location": "Gray",
            "description": "Weather delay"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?["message"], "Meet updated");

    let meet: Value = server
        .client
        .get(server.url(&format!("/api/meets/{id}")))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(meet["date"], "2024-08-31");
    assert_eq!(meet["description"], "Weather delay");
    Ok(())
}

#[tokio::test]
async fn missing_meet_and_bad_id() -> Result<()> {
    let server = common::spawn_server().await?;

    let res = server.client.get(server.url("/api/meets/7")).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?["error"], "Meet not found");

    let res = server.client.delete(server.url("/api/meets/x1")).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?["error"], "Invalid meet ID");

    let res = server.client.delete(server.url("/api/meets/7")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?["message"], "Meet deleted");
    Ok(())
}

#[tokio::test]
async fn results_for_meet_without_results_is_empty() -> Result<()> {
    let server = common::spawn_server().await?;
    let id = create_meet(&server, "Opener", "2024-08-24").await?;

    let res = server
        .client
        .get(server.url(&format!("/api/meets/{id}/results")))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!([]));

    let res = server.client.get(server.url("/api/meets/oops/results")).send().await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}
