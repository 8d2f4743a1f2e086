use harvest::mcp::{HarvestMcpServer, types::ScanStringsParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json, fixture_with_dashboard};

fn scan_params(fixture: &McpTestFixture) -> ScanStringsParams {
    ScanStringsParams {
        project_root_path: fixture.root(),
        new_only: None,
        limit: None,
        offset: None,
    }
}

#[tokio::test]
async fn test_scan_strings_reports_keys_without_writing() {
    let fixture = fixture_with_dashboard().unwrap();
    let server = HarvestMcpServer::new();

    let result = server
        .scan_strings(Parameters(scan_params(&fixture)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["baseLocale"], "en");
    assert_eq!(json_result["stats"]["filesProcessed"], 1);
    assert_eq!(json_result["stats"]["accepted"], 6);
    assert_eq!(json_result["stats"]["newKeys"], 6);
    assert_eq!(json_result["stats"]["rejected"]["css_content"], 1);
    assert_eq!(json_result["totalCount"], 6);
    assert_eq!(json_result["items"][0]["key"], "Dashboard.heading.team_dashboard");
    assert_eq!(json_result["items"][0]["text"], "Team dashboard");
    assert_eq!(json_result["items"][0]["isNew"], true);
    assert_eq!(json_result["pagination"]["hasMore"], false);

    assert!(!fixture.root_path().join("messages/en.json").exists());
}

#[tokio::test]
async fn test_scan_strings_pagination() {
    let fixture = fixture_with_dashboard().unwrap();
    let server = HarvestMcpServer::new();

    let params = ScanStringsParams {
        limit: Some(4),
        offset: Some(0),
        ..scan_params(&fixture)
    };
    let first = extract_tool_result_json(&server.scan_strings(Parameters(params)).await.unwrap());

    assert_eq!(first["items"].as_array().unwrap().len(), 4);
    assert_eq!(first["pagination"], json!({ "offset": 0, "limit": 4, "hasMore": true }));

    let params = ScanStringsParams {
        limit: Some(4),
        offset: Some(4),
        ..scan_params(&fixture)
    };
    let second = extract_tool_result_json(&server.scan_strings(Parameters(params)).await.unwrap());

    assert_eq!(second["items"].as_array().unwrap().len(), 2);
    assert_eq!(second["totalCount"], 6);
    assert_eq!(second["pagination"]["hasMore"], false);
}

#[tokio::test]
async fn test_scan_strings_limit_is_capped() {
    let fixture = fixture_with_dashboard().unwrap();
    let server = HarvestMcpServer::new();

    let params = ScanStringsParams {
        limit: Some(1000),
        ..scan_params(&fixture)
    };
    let result = extract_tool_result_json(&server.scan_strings(Parameters(params)).await.unwrap());

    assert_eq!(result["pagination"]["limit"], 200);
}

#[tokio::test]
async fn test_scan_strings_new_only_skips_stored_texts() {
    let fixture = fixture_with_dashboard().unwrap();
    fixture
        .write_locale_file(
            "en",
            &json!({
                "Dashboard": {
                    "heading": { "team_dashboard": "Team dashboard" }
                }
            }),
        )
        .unwrap();
    let server = HarvestMcpServer::new();

    let params = ScanStringsParams {
        new_only: Some(true),
        ..scan_params(&fixture)
    };
    let result = extract_tool_result_json(&server.scan_strings(Parameters(params)).await.unwrap());

    assert_eq!(result["totalCount"], 5);
    assert_eq!(result["stats"]["newKeys"], 5);
    let keys: Vec<&str> = result["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["key"].as_str().unwrap())
        .collect();
    assert!(!keys.contains(&"Dashboard.heading.team_dashboard"));
}

#[tokio::test]
async fn test_scan_strings_malformed_base_is_an_error() {
    let fixture = fixture_with_dashboard().unwrap();
    std::fs::write(fixture.root_path().join("messages/en.json"), "{ nope").unwrap();
    let server = HarvestMcpServer::new();

    let result = server.scan_strings(Parameters(scan_params(&fixture))).await;

    assert!(result.is_err());
}
