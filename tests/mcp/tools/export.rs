use std::fs;

use locx::mcp::types::ExportCsvParams;
use rmcp::{handler::server::wrapper::Parameters, model::ErrorCode};

use crate::{McpTestFixture, extract_tool_result_json, fixture_with_game_zip};

#[tokio::test]
async fn test_export_all_inline() {
    let (fixture, zip) = fixture_with_game_zip().unwrap();
    let session_id = fixture.upload(vec![zip]).await;

    let result = fixture
        .server()
        .export_csv(Parameters(ExportCsvParams {
            session_id,
            file_path: None,
            output_path: None,
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["filename"], "all_translations.csv");
    assert_eq!(json_result["rowCount"], 6);
    assert!(json_result.get("outputPath").is_none());

    let content = json_result["content"].as_str().unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "File,Index,Type,Path,Original,Translation");
    assert_eq!(lines[1], r#"DLC/data/Actors.json,1,name-like,name,"追加キャラ","""#);
    assert!(lines[6].starts_with("Game/data/Items.json,6,"));
}

#[tokio::test]
async fn test_export_single_file() {
    let (fixture, zip) = fixture_with_game_zip().unwrap();
    let session_id = fixture.upload(vec![zip]).await;

    let result = fixture
        .server()
        .export_csv(Parameters(ExportCsvParams {
            session_id,
            file_path: Some("Game/data/Items.json".to_string()),
            output_path: None,
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["filename"], "Game_data_Items_json_translations.csv");
    assert_eq!(json_result["rowCount"], 2);

    let content = json_result["content"].as_str().unwrap();
    assert!(content.contains("Game/data/Items.json,1,name-like,name,\"ポーション\""));
    assert!(!content.contains("Actors.json"));
}

#[tokio::test]
async fn test_export_unknown_file_is_header_only() {
    let (fixture, zip) = fixture_with_game_zip().unwrap();
    let session_id = fixture.upload(vec![zip]).await;

    let result = fixture
        .server()
        .export_csv(Parameters(ExportCsvParams {
            session_id,
            file_path: Some("data/Missing.json".to_string()),
            output_path: None,
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["rowCount"], 0);
    assert_eq!(
        json_result["content"],
        "File,Index,Type,Path,Original,Translation"
    );
}

#[tokio::test]
async fn test_export_to_output_path() {
    let (fixture, zip) = fixture_with_game_zip().unwrap();
    let session_id = fixture.upload(vec![zip]).await;
    let output = fixture.path("out.csv");

    let result = fixture
        .server()
        .export_csv(Parameters(ExportCsvParams {
            session_id,
            file_path: None,
            output_path: Some(output.clone()),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["outputPath"], output.as_str());
    assert!(json_result.get("content").is_none());

    let written = fs::read_to_string(fixture.root_path().join("out.csv")).unwrap();
    assert_eq!(written.lines().count(), 7);
    assert!(written.ends_with(r#""HPを500回復する","""#));
}

#[tokio::test]
async fn test_export_unknown_session() {
    let fixture = McpTestFixture::new().unwrap();

    let err = fixture
        .server()
        .export_csv(Parameters(ExportCsvParams {
            session_id: "missing".to_string(),
            file_path: None,
            output_path: None,
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert_eq!(err.data.unwrap()["kind"], "session_not_found");
}

#[tokio::test]
async fn test_export_row_count_with_multiline_text() {
    let fixture = McpTestFixture::new().unwrap();
    let path = fixture
        .write_file("Troops.json", r#"[null, {"message1": "勇者は\n倒れた"}]"#)
        .unwrap();
    let session_id = fixture.upload(vec![path]).await;

    let result = fixture
        .server()
        .export_csv(Parameters(ExportCsvParams {
            session_id,
            file_path: None,
            output_path: None,
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["rowCount"], 1);
    assert_eq!(json_result["content"].as_str().unwrap().lines().count(), 3);
}
