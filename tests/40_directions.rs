mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn duplicate_direction_conflicts_and_row_survives() -> Result<()> {
    if !common::db_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_direction_server().await?;
    let client = reqwest::Client::new();

    let payload = json!({
        "name": "Western Shrine",
        "description": "Shrine facing the setting sun",
        "direction": "West",
        "model_path": "models/western_shrine.glb"
    });

    // The row may already exist from a previous run; either way it exists after this
    let res = client
        .post(format!("{}/pois", server.base_url))
        .json(&payload)
        .send()
        .await?;
    assert!(
        res.status() == StatusCode::CREATED || res.status() == StatusCode::CONFLICT,
        "unexpected status {}",
        res.status()
    );

    let existing = client
        .get(format!("{}/pois/direction/West", server.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;

    // A second insert with the same direction must conflict
    let res = client
        .post(format!("{}/pois", server.base_url))
        .json(&json!({
            "name": "Another Western Shrine",
            "direction": "West",
            "model_path": "models/other.glb"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    // ...and leave the existing row unchanged
    let after = client
        .get(format!("{}/pois/direction/West", server.base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(after, existing, "conflicting insert modified the existing row");

    Ok(())
}

#[tokio::test]
async fn direction_lookup_is_case_insensitive() -> Result<()> {
    if !common::db_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_direction_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/pois", server.base_url))
        .json(&json!({
            "name": "Northern Gate",
            "direction": "north",
            "model_path": "models/northern_gate.glb"
        }))
        .send()
        .await?;
    assert!(
        res.status() == StatusCode::CREATED || res.status() == StatusCode::CONFLICT,
        "unexpected status {}",
        res.status()
    );

    let res = client
        .get(format!("{}/pois/direction/NORTH", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["direction"], json!("North"));

    Ok(())
}

#[tokio::test]
async fn unknown_direction_is_404() -> Result<()> {
    if !common::db_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_direction_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/pois/direction/Up", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn invalid_direction_on_create_is_422() -> Result<()> {
    if !common::db_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_direction_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/pois", server.base_url))
        .json(&json!({
            "name": "Skyward Shrine",
            "direction": "Skyward",
            "model_path": "models/sky.glb"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = res.json::<serde_json::Value>().await?;
    assert!(body["field_errors"]["direction"].is_string(), "missing direction detail: {}", body);

    Ok(())
}

#[tokio::test]
async fn direction_listing_returns_array() -> Result<()> {
    if !common::db_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_direction_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/pois", server.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert!(body.is_array(), "expected array, got {}", body);

    Ok(())
}
