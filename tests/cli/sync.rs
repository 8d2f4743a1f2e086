use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

const EN: &str = r#"{
  "Nav": {
    "home": "Home",
    "settings": "Settings"
  }
}
"#;

#[test]
fn test_sync_dry_run_leaves_files_alone() -> Result<()> {
    let test = CliTest::with_file("messages/en.json", EN)?;
    test.write_file("messages/fr.json", "{\n  \"Nav\": {\n    \"home\": \"Accueil\"\n  }\n}\n")?;

    let run = test.run(&["sync"])?;

    assert_eq!(run.code, Some(0));
    assert_eq!(
        run.stdout,
        "Would add 1 key(s) to fr\n\
         Would update 1 file(s):\n\
         \x20 messages/fr.json\n\
         Run with --apply to write these changes.\n\
         ✓ 1 locale(s) behind en\n"
    );
    assert!(!test.read_file("messages/fr.json")?.contains("Settings"));
    Ok(())
}

#[test]
fn test_sync_apply_fills_missing_keys() -> Result<()> {
    let test = CliTest::with_file("messages/en.json", EN)?;
    test.write_file("messages/fr.json", "{\n  \"Nav\": {\n    \"home\": \"Accueil\"\n  }\n}\n")?;

    let run = test.run(&["sync", "--apply"])?;

    assert_eq!(run.code, Some(0));
    assert_eq!(
        test.read_file("messages/fr.json")?,
        r#"{
  "Nav": {
    "home": "Accueil",
    "settings": "Settings"
  }
}
"#
    );

    let again = test.run(&["sync", "--apply"])?;
    assert_eq!(again.stdout, "✓ 1 locale(s) in sync with en\n");
    Ok(())
}

#[test]
fn test_sync_configured_locales_are_created() -> Result<()> {
    let test = CliTest::with_file("messages/en.json", EN)?;
    test.write_file(".harvestrc.json", r#"{ "locales": ["de", "en"] }"#)?;

    let run = test.run(&["sync", "--apply"])?;

    assert_eq!(run.code, Some(0));
    assert_eq!(test.read_file("messages/de.json")?, EN);
    Ok(())
}

#[test]
fn test_sync_malformed_locale_is_left_untouched() -> Result<()> {
    let test = CliTest::with_file("messages/en.json", EN)?;
    test.write_file("messages/fr.json", "{}\n")?;
    test.write_file("messages/ja.json", "[1, 2]")?;

    let run = test.run(&["sync", "--apply"])?;

    assert_eq!(run.code, Some(0));
    assert!(run.stderr.contains("warning:"));
    assert!(run.stderr.contains("locale 'ja' left untouched"));
    assert!(
        run.stdout
            .contains("✘ 1 locale(s) could not be read and were left untouched")
    );
    assert_eq!(test.read_file("messages/ja.json")?, "[1, 2]");
    assert_eq!(test.read_file("messages/fr.json")?, EN);
    Ok(())
}

#[test]
fn test_sync_without_base_locale_fails() -> Result<()> {
    let test = CliTest::with_file("messages/fr.json", "{}\n")?;

    let run = test.run(&["sync"])?;

    assert_eq!(run.code, Some(2));
    assert!(run.stderr.contains("error:"));
    Ok(())
}
