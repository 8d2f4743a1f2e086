use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;

mod tools;

/// Test fixture for MCP integration tests
///
/// Manages a temporary front-end project with a messages/ directory
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        fs::create_dir_all(project_root.join("messages"))?;
        fs::create_dir(project_root.join(".git"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with locale message files
    pub fn with_messages(locales: Vec<(&str, Value)>) -> Result<Self> {
        let fixture = Self::new()?;
        for (locale, content) in locales {
            fixture.write_locale_file(locale, &content)?;
        }
        Ok(fixture)
    }

    /// Write a locale JSON file to messages/<locale>.json
    pub fn write_locale_file(&self, locale: &str, content: &Value) -> Result<()> {
        let path = self.locale_path(locale);
        let json_str = serde_json::to_string_pretty(content)
            .with_context(|| format!("Failed to serialize JSON for locale: {}", locale))?;
        fs::write(&path, format!("{}\n", json_str))
            .with_context(|| format!("Failed to write locale file: {}", path.display()))?;
        Ok(())
    }

    /// Read a locale JSON file from messages/<locale>.json
    pub fn read_locale_file(&self, locale: &str) -> Result<Value> {
        let path = self.locale_path(locale);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read locale file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON from: {}", path.display()))
    }

    /// Write a component source file
    pub fn write_source_file(&self, relative_path: &str, content: &str) -> Result<()> {
        let path = self.project_root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write source file: {}", path.display()))?;
        Ok(())
    }

    /// Write a .harvestrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        let path = self.project_root.join(".harvestrc.json");
        let json_str = serde_json::to_string_pretty(content)?;
        fs::write(&path, format!("{}\n", json_str))?;
        Ok(())
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    pub fn root_path(&self) -> &Path {
        &self.project_root
    }

    fn locale_path(&self, locale: &str) -> PathBuf {
        self.project_root
            .join("messages")
            .join(format!("{}.json", locale))
    }
}

// ============================================================================
// Fixture Generators
// ============================================================================

/// A page with six translatable strings and one styling attribute.
pub fn fixture_with_dashboard() -> Result<McpTestFixture> {
    let fixture = McpTestFixture::new()?;
    fixture.write_source_file(
        "src/pages/Dashboard.vue",
        r#"<template>
  <main>
    <h1>Team dashboard</h1>
    <p>Recent activity</p>
    <p>Open reports</p>
    <button title="flex items-center justify-between">Invite people</button>
    <button>Export data</button>
    <input placeholder="Filter by name" />
  </main>
</template>
"#,
    )?;
    Ok(fixture)
}

/// Extract JSON from a successful tool result
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let text_content = result.content[0]
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
