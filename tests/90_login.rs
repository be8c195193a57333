mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;
use uuid::Uuid;

fn unique_email() -> String {
    format!("user-{}@example.com", Uuid::new_v4())
}

#[tokio::test]
#[cfg_attr(
    not(feature = "integration"),
    ignore = "enable with --features integration (requires Postgres)"
)]
async fn signup_rejects_duplicate_email() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let email = unique_email();

    let res = client
        .post(format!("{}/signup", server.base_url))
        .json(&json!({ "name": "Asha", "email": email, "password": "wavecrest9" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body["message"].is_string());

    // Same email again: 400, and no second record is created (login with the
    // original password still works below).
    let res = client
        .post(format!("{}/signup", server.base_url))
        .json(&json!({ "name": "Asha Again", "email": email, "password": "different-pw" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body["error"].is_string());

    let res = client
        .post(format!("{}/login", server.base_url))
        .json(&json!({ "email": email, "password": "wavecrest9" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
#[cfg_attr(
    not(feature = "integration"),
    ignore = "enable with --features integration (requires Postgres)"
)]
async fn login_checks_credentials_and_issues_usable_token() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let email = unique_email();

    let res = client
        .post(format!("{}/signup", server.base_url))
        .json(&json!({ "name": "Binod", "email": email, "password": "monsoon-season" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    // Wrong password
    let res = client
        .post(format!("{}/login", server.base_url))
        .json(&json!({ "email": email, "password": "wrong" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Unknown email gets the same response shape
    let res = client
        .post(format!("{}/login", server.base_url))
        .json(&json!({ "email": unique_email(), "password": "monsoon-season" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Correct credentials
    let res = client
        .post(format!("{}/login", server.base_url))
        .json(&json!({ "email": email, "password": "monsoon-season" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    let token = body["token"].as_str().expect("token in response").to_string();

    // The token grants access to the protected API
    let res = client
        .get(format!("{}/reports", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    // Without it, the same route is a 401
    let res = client
        .get(format!("{}/reports", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
