mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn create_and_fetch_site() -> Result<()> {
    if !common::db_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let name = format!("Konark Sun Temple {}", common::unique_suffix());
    let res = client
        .post(format!("{}/sites", server.base_url))
        .json(&json!({ "name": &name, "description": "13th century temple" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED, "expected 201, got {}", res.status());

    let created = res.json::<serde_json::Value>().await?;
    let site_id = created["id"].as_i64().expect("id assigned");
    assert_eq!(created["name"], json!(name));
    assert_eq!(created["description"], json!("13th century temple"));

    let res = client
        .get(format!("{}/sites/{}", server.base_url, site_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let fetched = res.json::<serde_json::Value>().await?;
    assert_eq!(fetched, created, "round-trip mismatch");

    Ok(())
}

#[tokio::test]
async fn duplicate_site_name_conflicts() -> Result<()> {
    if !common::db_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let name = format!("Hampi {}", common::unique_suffix());
    let payload = json!({ "name": name });

    let res = client
        .post(format!("{}/sites", server.base_url))
        .json(&payload)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/sites", server.base_url))
        .json(&payload)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], json!("CONFLICT"));

    Ok(())
}

#[tokio::test]
async fn site_without_name_is_rejected() -> Result<()> {
    if !common::db_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/sites", server.base_url))
        .json(&json!({ "description": "nameless" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = res.json::<serde_json::Value>().await?;
    assert!(body["field_errors"]["name"].is_string(), "missing field detail: {}", body);

    Ok(())
}

#[tokio::test]
async fn missing_site_is_404() -> Result<()> {
    if !common::db_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/sites/999999999", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn list_sites_returns_array() -> Result<()> {
    if !common::db_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(format!("{}/sites", server.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert!(body.is_array(), "expected array, got {}", body);

    Ok(())
}
