use anyhow::Result;

use crate::CliTest;

#[test]
fn test_classify_reports_rejections() -> Result<()> {
    let test = CliTest::new()?;

    let run = test.run(&["classify", "Save changes", "flex items-center justify-between"])?;

    assert_eq!(run.code, Some(1));
    assert!(run.stdout.contains("✓ \"Save changes\""));
    assert!(run.stdout.contains("rejected (css_content)"));
    assert!(run.stdout.contains("2 text(s) classified, 1 rejected"));
    Ok(())
}

#[test]
fn test_classify_all_accepted() -> Result<()> {
    let test = CliTest::new()?;

    let run = test.run(&["classify", "Welcome back", "Delete account"])?;

    assert_eq!(run.code, Some(0));
    assert!(run.stdout.contains("2 text(s) classified, 0 rejected"));
    Ok(())
}

#[test]
fn test_classify_uses_project_ignore_patterns() -> Result<()> {
    let test = CliTest::with_file(
        ".harvestrc.json",
        r#"{ "ignorePatterns": { "exact": ["Acme Cloud"] } }"#,
    )?;

    let run = test.run(&["classify", "Acme Cloud"])?;

    assert_eq!(run.code, Some(1));
    assert!(run.stdout.contains("rejected (ignored_pattern)"));
    Ok(())
}
