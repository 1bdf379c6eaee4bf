// Integration tests for the public REST client against a mock server

use mockito::{Matcher, Server};
use mun_core::PublicConfig;
use mun_store::{LookupDirectory, PublicClient, StoreError, get_system_staff_teams};
use serde_json::json;
use std::time::Duration;

fn client_for(server: &Server) -> PublicClient {
    PublicClient::new(server.url(), "anon-key", Duration::from_secs(5))
}

#[tokio::test]
async fn test_list_schools_sends_key_headers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/v1/schools")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("select".into(), "id,name".into()),
            Matcher::UrlEncoded("order".into(), "name.asc".into()),
        ]))
        .match_header("apikey", "anon-key")
        .match_header("authorization", "Bearer anon-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                {"id": "s-1", "name": "Lincoln High"},
                {"id": "s-2", "name": "Roosevelt Academy"}
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let schools = client_for(&server).list_schools().await.unwrap();

    mock.assert_async().await;
    assert_eq!(schools.len(), 2);
    assert_eq!(schools[1].name, "Roosevelt Academy");
}

#[tokio::test]
async fn test_system_staff_teams() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/rest/v1/system_staff_teams")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([{"name": "Executive"}, {"name": "Logistics"}]).to_string())
        .create_async()
        .await;

    let client = client_for(&server);
    let teams = get_system_staff_teams(&client).await.unwrap();
    assert_eq!(teams, vec!["Executive", "Logistics"]);
}

#[tokio::test]
async fn test_http_error_is_surfaced() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/rest/v1/committees")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body("{\"message\":\"Invalid API key\"}")
        .create_async()
        .await;

    let err = client_for(&server).list_committees().await.unwrap_err();
    match err {
        StoreError::Http { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("Invalid API key"));
        }
        other => panic!("expected HTTP error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unconfigured_client_constructs_and_fails_on_use() {
    let config = PublicConfig {
        url_env: "MUN_TEST_UNSET_PUBLIC_URL".to_string(),
        key_envs: vec!["MUN_TEST_UNSET_PUBLIC_KEY".to_string()],
        ..Default::default()
    };

    let client = PublicClient::from_config(&config);
    assert!(!client.is_configured());

    let err = client.list_schools().await.unwrap_err();
    assert!(matches!(err, StoreError::NotConfigured("url")));
}

#[tokio::test]
async fn test_missing_key_only() {
    let config = PublicConfig {
        url_env: "MUN_TEST_UNSET_PUBLIC_URL".to_string(),
        key_envs: vec!["MUN_TEST_UNSET_PUBLIC_KEY".to_string()],
        url: Some("https://project.supabase.co/".to_string()),
        ..Default::default()
    };

    let client = PublicClient::from_config(&config);
    assert_eq!(client.url(), "https://project.supabase.co");
    assert!(matches!(
        client.system_staff_teams().await,
        Err(StoreError::NotConfigured("key"))
    ));
}
