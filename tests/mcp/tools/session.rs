use locx::mcp::types::{
    GetFileTranslationsParams, ListSessionParams, SessionParams, UploadFilesParams,
};
use rmcp::{handler::server::wrapper::Parameters, model::ErrorCode};

use crate::{McpTestFixture, assert_pagination, extract_tool_result_json, fixture_with_game_zip};

// ============================================================================
// upload_files tests
// ============================================================================

#[tokio::test]
async fn test_upload_zip() {
    let (fixture, zip) = fixture_with_game_zip().unwrap();

    let result = fixture
        .server()
        .upload_files(Parameters(UploadFilesParams { paths: vec![zip] }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert!(json_result["sessionId"].as_str().unwrap().len() == 36);
    assert_eq!(json_result["fileCount"], 4);
    assert_eq!(json_result["entryCount"], 6);
    assert_eq!(
        json_result["message"],
        "Extracted 4 JSON files from the ZIP archive and 6 translatable strings"
    );
    assert_eq!(json_result["files"][0], "DLC/data/Actors.json");
}

#[tokio::test]
async fn test_upload_batch_of_json_files() {
    let fixture = McpTestFixture::new().unwrap();
    let actors = fixture
        .write_file("Actors.json", r#"[null, {"name": "勇者"}]"#)
        .unwrap();
    let skills = fixture
        .write_file("Skills.json", r#"[null, {"name": "ファイア", "message1": "は炎を放った！"}]"#)
        .unwrap();

    let result = fixture
        .server()
        .upload_files(Parameters(UploadFilesParams {
            paths: vec![actors, skills],
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fileCount"], 2);
    assert_eq!(
        json_result["message"],
        "Processed 2 files, found 2 valid files, extracted 3 translation entries"
    );
    assert_eq!(json_result["files"][1], "data/Skills.json");
}

#[tokio::test]
async fn test_upload_unsupported_file_is_invalid_params() {
    let fixture = McpTestFixture::new().unwrap();
    let path = fixture.write_file("notes.txt", "hello").unwrap();

    let err = fixture
        .server()
        .upload_files(Parameters(UploadFilesParams { paths: vec![path] }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains("unsupported file type"));
    assert_eq!(err.data.unwrap()["kind"], "unsupported_file_type");
}

#[tokio::test]
async fn test_upload_nothing() {
    let fixture = McpTestFixture::new().unwrap();

    let err = fixture
        .server()
        .upload_files(Parameters(UploadFilesParams { paths: vec![] }))
        .await
        .unwrap_err();

    assert_eq!(err.message, "no file selected");
}

#[tokio::test]
async fn test_upload_zip_without_data() {
    let fixture = McpTestFixture::new().unwrap();
    let zip = fixture
        .write_zip("empty.zip", &[("www/Actors.json", r#"{"name": "勇者"}"#)])
        .unwrap();

    let err = fixture
        .server()
        .upload_files(Parameters(UploadFilesParams { paths: vec![zip] }))
        .await
        .unwrap_err();

    assert!(err.message.contains("no qualifying files found in empty.zip"));
}

// ============================================================================
// list_session tests
// ============================================================================

#[tokio::test]
async fn test_list_session() {
    let (fixture, zip) = fixture_with_game_zip().unwrap();
    let session_id = fixture.upload(vec![zip]).await;

    let result = fixture
        .server()
        .list_session(Parameters(ListSessionParams {
            session_id: session_id.clone(),
            limit: None,
            offset: None,
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["sessionId"], session_id.as_str());
    assert_eq!(json_result["files"].as_array().unwrap().len(), 4);
    assert_eq!(json_result["totalCount"], 6);
    assert_eq!(json_result["translationEntries"].as_array().unwrap().len(), 6);
    assert_pagination(&json_result, 0, 50, false);

    let tree = json_result["fileTree"].as_array().unwrap();
    assert_eq!(tree.len(), 2);
    assert_eq!(tree[0]["type"], "folder");
    assert_eq!(tree[0]["name"], "DLC/data");
    assert_eq!(tree[1]["id"], "Game/data");
    assert_eq!(tree[1]["children"].as_array().unwrap().len(), 3);
    assert_eq!(tree[1]["children"][0]["type"], "file");
    assert_eq!(tree[1]["children"][0]["id"], "Game/data/Actors.json");
    assert_eq!(tree[1]["children"][0]["file"]["name"], "Actors.json");
}

#[tokio::test]
async fn test_list_session_pagination() {
    let (fixture, zip) = fixture_with_game_zip().unwrap();
    let session_id = fixture.upload(vec![zip]).await;

    let result = fixture
        .server()
        .list_session(Parameters(ListSessionParams {
            session_id: session_id.clone(),
            limit: Some(4),
            offset: Some(0),
        }))
        .await
        .unwrap();
    let first_page = extract_tool_result_json(&result);

    assert_eq!(first_page["translationEntries"].as_array().unwrap().len(), 4);
    assert_pagination(&first_page, 0, 4, true);

    let result = fixture
        .server()
        .list_session(Parameters(ListSessionParams {
            session_id,
            limit: Some(4),
            offset: Some(4),
        }))
        .await
        .unwrap();
    let second_page = extract_tool_result_json(&result);

    let entries = second_page["translationEntries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1]["original"], "HPを500回復する");
    assert_pagination(&second_page, 4, 4, false);
}

#[tokio::test]
async fn test_list_session_limit_is_capped() {
    let (fixture, zip) = fixture_with_game_zip().unwrap();
    let session_id = fixture.upload(vec![zip]).await;

    let result = fixture
        .server()
        .list_session(Parameters(ListSessionParams {
            session_id,
            limit: Some(10_000),
            offset: None,
        }))
        .await
        .unwrap();

    assert_pagination(&extract_tool_result_json(&result), 0, 500, false);
}

#[tokio::test]
async fn test_list_unknown_session() {
    let fixture = McpTestFixture::new().unwrap();

    let err = fixture
        .server()
        .list_session(Parameters(ListSessionParams {
            session_id: "no-such-session".to_string(),
            limit: None,
            offset: None,
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert_eq!(err.message, "session not found or expired: no-such-session");
}

// ============================================================================
// get_file_translations / get_result tests
// ============================================================================

#[tokio::test]
async fn test_get_file_translations() {
    let (fixture, zip) = fixture_with_game_zip().unwrap();
    let session_id = fixture.upload(vec![zip]).await;

    let result = fixture
        .server()
        .get_file_translations(Parameters(GetFileTranslationsParams {
            session_id,
            file_path: "Game/data/Actors.json".to_string(),
        }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 3);
    let entries = json_result["translationEntries"].as_array().unwrap();
    assert_eq!(entries[0]["id"], "Game/data/Actors.json:name:ハロルド");
    assert_eq!(entries[1]["context"]["path"], "profile");
    assert_eq!(entries[2]["original"], "テレーゼ");
}

#[tokio::test]
async fn test_get_file_translations_requires_exact_path() {
    let (fixture, zip) = fixture_with_game_zip().unwrap();
    let session_id = fixture.upload(vec![zip]).await;

    let result = fixture
        .server()
        .get_file_translations(Parameters(GetFileTranslationsParams {
            session_id,
            file_path: "Actors.json".to_string(),
        }))
        .await
        .unwrap();

    assert_eq!(extract_tool_result_json(&result)["totalCount"], 0);
}

#[tokio::test]
async fn test_get_result() {
    let (fixture, zip) = fixture_with_game_zip().unwrap();
    let session_id = fixture.upload(vec![zip]).await;

    let result = fixture
        .server()
        .get_result(Parameters(SessionParams { session_id }))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["validFiles"].as_array().unwrap().len(), 4);
    assert_eq!(json_result["translationEntries"].as_array().unwrap().len(), 6);
    assert!(json_result["message"].as_str().unwrap().starts_with("Extracted 4"));
}

// ============================================================================
// cleanup_session tests
// ============================================================================

#[tokio::test]
async fn test_cleanup_session() {
    let (fixture, zip) = fixture_with_game_zip().unwrap();
    let session_id = fixture.upload(vec![zip]).await;

    let result = fixture
        .server()
        .cleanup_session(Parameters(SessionParams {
            session_id: session_id.clone(),
        }))
        .await
        .unwrap();
    assert_eq!(extract_tool_result_json(&result)["cleaned"], true);

    let err = fixture
        .server()
        .get_result(Parameters(SessionParams {
            session_id: session_id.clone(),
        }))
        .await
        .unwrap_err();
    assert!(err.message.contains("session not found"));

    let err = fixture
        .server()
        .cleanup_session(Parameters(SessionParams {
            session_id: session_id.clone(),
        }))
        .await
        .unwrap_err();
    assert_eq!(err.data.unwrap()["kind"], "session_not_found");

    assert!(!fixture.root_path().join(".scratch").join(&session_id).exists());
}

#[tokio::test]
async fn test_cleanup_session_with_path_id_touches_nothing() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_file("victim/keep.txt", "keep").unwrap();

    let err = fixture
        .server()
        .cleanup_session(Parameters(SessionParams {
            session_id: fixture.path("victim"),
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert_eq!(err.data.unwrap()["kind"], "session_not_found");
    assert!(fixture.root_path().join("victim/keep.txt").exists());
}
