use anyhow::Result;

use crate::{ACTORS_JSON, CliTest, MAP_JSON, stderr, stdout};

const CSV_HEADER: &str = "File,Index,Type,Path,Original,Translation";

fn bundle_test() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_zip(
        "game.zip",
        &[
            ("data/Actors.json", ACTORS_JSON),
            ("data/Map001.json", MAP_JSON),
        ],
    )?;
    Ok(test)
}

#[test]
fn test_export_all_to_default_file() -> Result<()> {
    let test = bundle_test()?;

    let output = test.run(&["export", "game.zip"])?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Wrote 6 rows to all_translations.csv"));

    let csv = test.read_file("all_translations.csv")?;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], CSV_HEADER);
    assert_eq!(lines[1], r#"data/Actors.json,1,name-like,name,"ハロルド","""#);
    assert!(lines[6].starts_with("data/Map001.json,6,text,events.pages.list.parameters,"));

    Ok(())
}

#[test]
fn test_export_single_file_to_stdout() -> Result<()> {
    let test = bundle_test()?;

    let output = test.run(&["export", "game.zip", "--file", "data/Map001.json", "-o", "-"])?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], CSV_HEADER);
    assert_eq!(lines[1], r#"data/Map001.json,1,name-like,displayName,"はじまりの村","""#);

    Ok(())
}

#[test]
fn test_export_to_named_output() -> Result<()> {
    let test = bundle_test()?;

    let output = test.run(&["export", "game.zip", "--file", "data/Actors.json", "-o", "actors.csv"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(test.read_file("actors.csv")?.lines().count(), 5);
    assert!(!test.root().join("data_Actors_json_translations.csv").exists());

    Ok(())
}

#[test]
fn test_export_quotes_embedded_quotes() -> Result<()> {
    let test = CliTest::with_file("Troops.json", r#"{"message1": "「\"勇者\"」が現れた"}"#)?;

    let output = test.run(&["export", "Troops.json", "-o", "-"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains(r#","「""勇者""」が現れた","""#));

    Ok(())
}

#[test]
fn test_export_unknown_file_is_empty() -> Result<()> {
    let test = bundle_test()?;

    let output = test.run(&["export", "game.zip", "--file", "data/Nope.json", "-o", "-"])?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output).trim_end(), CSV_HEADER);
    assert!(stderr(&output).contains("data/Nope.json"));

    Ok(())
}
