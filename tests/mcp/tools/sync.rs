use harvest::mcp::{HarvestMcpServer, types::SyncLocalesParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

fn fixture_with_missing_keys() -> McpTestFixture {
    McpTestFixture::with_messages(vec![
        (
            "en",
            json!({
                "Common": { "cancel": "Cancel", "submit": "Submit" }
            }),
        ),
        ("fr", json!({ "Common": { "submit": "Envoyer" } })),
    ])
    .unwrap()
}

#[tokio::test]
async fn test_sync_locales_dry_run() {
    let fixture = fixture_with_missing_keys();
    let server = HarvestMcpServer::new();

    let params = Parameters(SyncLocalesParams {
        project_root_path: fixture.root(),
        apply: None,
    });

    let result = server.sync_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["applied"], false);
    assert_eq!(
        json_result["locales"],
        json!([{ "locale": "fr", "added": 1 }])
    );
    assert_eq!(json_result["files"].as_array().unwrap().len(), 1);
    assert_eq!(
        fixture.read_locale_file("fr").unwrap(),
        json!({ "Common": { "submit": "Envoyer" } })
    );
}

#[tokio::test]
async fn test_sync_locales_apply() {
    let fixture = fixture_with_missing_keys();
    let server = HarvestMcpServer::new();

    let params = Parameters(SyncLocalesParams {
        project_root_path: fixture.root(),
        apply: Some(true),
    });

    let result = server.sync_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["applied"], true);
    assert_eq!(
        fixture.read_locale_file("fr").unwrap(),
        json!({ "Common": { "cancel": "Cancel", "submit": "Envoyer" } })
    );
}

#[tokio::test]
async fn test_sync_locales_reports_unreadable_locale() {
    let fixture = fixture_with_missing_keys();
    std::fs::write(fixture.root_path().join("messages/ja.json"), "[1, 2]").unwrap();
    let server = HarvestMcpServer::new();

    let params = Parameters(SyncLocalesParams {
        project_root_path: fixture.root(),
        apply: Some(true),
    });

    let result = server.sync_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    let ja = &json_result["locales"][1];
    assert_eq!(ja["locale"], "ja");
    assert!(ja["error"].is_string());
    assert_eq!(
        std::fs::read_to_string(fixture.root_path().join("messages/ja.json")).unwrap(),
        "[1, 2]"
    );
}
