use anyhow::Result;

use crate::{CliTest, MAP_JSON, stderr, stdout};

#[test]
fn test_preview_json_file() -> Result<()> {
    let test = CliTest::with_file("Map001.json", MAP_JSON)?;

    let output = test.run(&["preview", "Map001.json"])?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Map001.json: ~2 translatable strings\n");

    Ok(())
}

#[test]
fn test_preview_is_capped() -> Result<()> {
    let items: Vec<String> = (0..1200).map(|i| format!(r#"{{"name": "敵{}"}}"#, i)).collect();
    let test = CliTest::with_file("Enemies.json", &format!("[{}]", items.join(",")))?;

    let output = test.run(&["preview", "Enemies.json"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "Enemies.json: ~1000+ translatable strings\n");

    Ok(())
}

#[test]
fn test_preview_nothing_found() -> Result<()> {
    let test = CliTest::with_file("System.json", r#"{"switches": ["", "A_01"], "version": 3}"#)?;

    let output = test.run(&["preview", "System.json"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("~0 translatable strings"));

    Ok(())
}

#[test]
fn test_preview_malformed() -> Result<()> {
    let test = CliTest::with_file("Broken.json", "[1, 2")?;

    let output = test.run(&["preview", "Broken.json"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("malformed JSON in Broken.json"));

    Ok(())
}
