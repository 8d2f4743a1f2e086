use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, USER_CARD};

#[test]
fn test_extract_dry_run_lists_new_keys() -> Result<()> {
    let test = CliTest::with_file("src/components/UserCard.vue", USER_CARD)?;

    let run = test.run(&["extract"])?;

    assert_eq!(run.code, Some(0));
    assert!(run.stdout.contains("Would add 3 key(s) to en:"));
    assert!(run.stdout.contains("+ UserCard.heading.account_settings"));
    assert!(run.stdout.contains("+ UserCard.button.save_changes"));
    assert!(run.stdout.contains("src/components/UserCard.vue:5"));
    assert!(run.stdout.contains("Would update 1 file(s):\n  messages/en.json\n"));
    assert!(run.stdout.contains("Run with --apply to write these changes."));
    assert!(!test.root().join("messages").exists());
    Ok(())
}

#[test]
fn test_extract_apply_writes_base_and_other_locales() -> Result<()> {
    let test = CliTest::with_file("src/components/UserCard.vue", USER_CARD)?;
    test.write_file("messages/en.json", "{}\n")?;
    test.write_file("messages/fr.json", "{\n  \"Legacy\": \"Ancien\"\n}\n")?;

    let run = test.run(&["extract", "--apply"])?;

    assert_eq!(run.code, Some(0));
    assert!(run.stdout.contains("Added 3 key(s) to en:"));
    assert!(run.stdout.contains("Added 3 key(s) to fr"));
    assert!(run.stdout.contains("Processed 1 file(s): 3 accepted"));
    assert_eq!(
        test.read_file("messages/en.json")?,
        r#"{
  "UserCard": {
    "button": {
      "save_changes": "Save changes"
    },
    "heading": {
      "account_settings": "Account settings"
    },
    "placeholder": {
      "search_members": "Search members"
    }
  }
}
"#
    );
    let fr = test.read_file("messages/fr.json")?;
    assert!(fr.contains("\"Legacy\": \"Ancien\""));
    assert!(fr.contains("\"search_members\": \"Search members\""));
    Ok(())
}

#[test]
fn test_extract_twice_is_byte_identical() -> Result<()> {
    let test = CliTest::with_file("src/components/UserCard.vue", USER_CARD)?;
    test.write_file(
        "src/pages/settings/index.vue",
        "<template>\n  <h1>Billing details</h1>\n  <p>Save changes</p>\n</template>\n",
    )?;
    test.write_file("messages/de.json", "{}\n")?;

    test.run(&["extract", "--apply"])?;
    let en = test.read_file("messages/en.json")?;
    let de = test.read_file("messages/de.json")?;

    let run = test.run(&["extract", "--apply"])?;

    assert_eq!(run.code, Some(0));
    assert!(!run.stdout.contains("Added"));
    assert!(!run.stdout.contains("Updated"));
    assert_eq!(test.read_file("messages/en.json")?, en);
    assert_eq!(test.read_file("messages/de.json")?, de);
    assert!(en.contains("\"Settings\""));
    Ok(())
}

#[test]
fn test_extract_malformed_base_locale_is_fatal() -> Result<()> {
    let test = CliTest::with_file("src/components/UserCard.vue", USER_CARD)?;
    test.write_file("messages/en.json", "{ \"oops\": ")?;
    test.write_file("messages/fr.json", "{}\n")?;

    let run = test.run(&["extract", "--apply"])?;

    assert_eq!(run.code, Some(2));
    assert!(run.stderr.contains("error:"));
    assert!(run.stderr.contains("failed to parse locale file"));
    assert_eq!(test.read_file("messages/fr.json")?, "{}\n");
    Ok(())
}

#[test]
fn test_extract_directory_layout() -> Result<()> {
    let test = CliTest::with_file("src/components/UserCard.vue", USER_CARD)?;
    test.write_file(
        ".harvestrc.json",
        r#"{ "layout": "directory", "locales": ["fr"] }"#,
    )?;

    let run = test.run(&["extract", "--apply"])?;

    assert_eq!(run.code, Some(0));
    let en = test.read_file("messages/en/UserCard.json")?;
    assert!(en.starts_with("{\n  \"button\": {"));
    let fr = test.read_file("messages/fr/UserCard.json")?;
    assert_eq!(en, fr);
    assert!(!test.root().join("messages/en/index.json").exists());
    Ok(())
}

#[test]
fn test_extract_reports_rejections_and_skips() -> Result<()> {
    let test = CliTest::with_file(
        "src/pages/Home.vue",
        "<template>\n  <p>Welcome to the dashboard</p>\n  <span title=\"flex items-center justify-between\">Open reports</span>\n</template>\n",
    )?;
    test.write_file(".harvestrc.json", r#"{ "maxFileSize": 200 }"#)?;
    test.write_file("src/pages/Large.vue", &"<p>Lots of words</p>\n".repeat(20))?;

    let run = test.run(&["extract"])?;

    assert_eq!(run.code, Some(0));
    assert!(
        run.stdout
            .contains("Processed 1 file(s): 2 accepted, 1 rejected, 1 skipped")
    );
    assert!(run.stdout.contains("  rejected: css_content 1"));
    assert!(run.stderr.contains("1 file(s) skipped (use -v for details)"));

    let verbose = test.run(&["extract", "-v"])?;
    assert!(verbose.stderr.contains("exceeds maxFileSize"));
    Ok(())
}

#[test]
fn test_extract_base_locale_override() -> Result<()> {
    let test = CliTest::with_file("src/components/UserCard.vue", USER_CARD)?;

    let run = test.run(&["extract", "--apply", "--base-locale", "de"])?;

    assert_eq!(run.code, Some(0));
    assert!(run.stdout.contains("Added 3 key(s) to de:"));
    assert!(test.root().join("messages/de.json").exists());
    assert!(!test.root().join("messages/en.json").exists());
    Ok(())
}
