use harvest::mcp::{HarvestMcpServer, types::GetConfigParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = HarvestMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["messagesRoot"], "./messages");
    assert_eq!(json_result["config"]["baseLocale"], "en");
    assert_eq!(json_result["config"]["layout"], "file");
    assert!(json_result["config"]["includes"].is_array());
}

#[tokio::test]
async fn test_get_config_from_harvestrc() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "messagesRoot": "locales",
            "primaryLocale": "de",
            "layout": "directory"
        }))
        .unwrap();
    let server = HarvestMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["messagesRoot"], "locales");
    assert_eq!(json_result["config"]["baseLocale"], "de");
    assert_eq!(json_result["config"]["layout"], "directory");
}

#[tokio::test]
async fn test_get_config_invalid_file_is_an_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_config(&json!({ "workers": 0 })).unwrap();
    let server = HarvestMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}
