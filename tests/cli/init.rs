use anyhow::Result;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let run = test.run(&["init"])?;

    assert_eq!(run.code, Some(0));
    assert_eq!(run.stdout, "✓ Created .harvestrc.json\n");

    let content = test.read_file(".harvestrc.json")?;
    let config: serde_json::Value = serde_json::from_str(&content)?;
    assert_eq!(config["baseLocale"], "en");
    assert_eq!(config["messagesRoot"], "./messages");
    assert!(content.ends_with("}\n"));
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".harvestrc.json", "{}")?;

    let run = test.run(&["init"])?;

    assert_eq!(run.code, Some(2));
    assert!(run.stderr.contains("already exists"));
    assert_eq!(test.read_file(".harvestrc.json")?, "{}");
    Ok(())
}
