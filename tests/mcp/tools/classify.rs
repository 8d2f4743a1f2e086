use harvest::mcp::{HarvestMcpServer, types::ClassifyTextParams};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

#[tokio::test]
async fn test_classify_text_without_project() {
    let server = HarvestMcpServer::new();

    let params = Parameters(ClassifyTextParams {
        texts: vec![
            "Save changes".to_string(),
            "flex items-center justify-between".to_string(),
        ],
        project_root_path: None,
    });

    let result = server.classify_text(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["acceptedCount"], 1);
    assert_eq!(json_result["rejectedCount"], 1);
    assert_eq!(
        json_result["items"][0],
        json!({ "text": "Save changes", "accepted": true })
    );
    assert_eq!(json_result["items"][1]["reason"], "css_content");
}

#[tokio::test]
async fn test_classify_text_applies_project_ignore_patterns() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "ignorePatterns": { "contains": ["Acme"] }
        }))
        .unwrap();
    let server = HarvestMcpServer::new();

    let params = Parameters(ClassifyTextParams {
        texts: vec!["Powered by Acme".to_string()],
        project_root_path: Some(fixture.root()),
    });

    let result = server.classify_text(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["acceptedCount"], 0);
    assert_eq!(json_result["items"][0]["reason"], "ignored_pattern");
}
