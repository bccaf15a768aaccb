mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn generate_content_for_missing_poi_is_404() -> Result<()> {
    if !common::db_available() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // The POI lookup fails before the provider is ever contacted
    let res = client
        .get(format!("{}/pois/generate-content/999999999", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["code"], "NOT_FOUND");

    Ok(())
}
