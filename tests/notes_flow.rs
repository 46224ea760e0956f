//! End-to-end behaviour of the note log across tools, resource and prompt.

use demo_mcp_server::core::config::{Config, NotesConfig};
use demo_mcp_server::domains::prompts::PromptService;
use demo_mcp_server::domains::resources::ResourceService;
use demo_mcp_server::domains::tools::definitions::{
    AddNoteParams, AddNoteTool, AddParams, AddTool, ReadNotesTool,
};
use rmcp::model::{CallToolResult, PromptMessageContent, RawContent, ResourceContents};
use tempfile::TempDir;

fn config_in(dir: &TempDir) -> Config {
    Config {
        notes: NotesConfig::at(dir.path().join("notes.txt")),
        ..Config::default()
    }
}

fn tool_text(result: &CallToolResult) -> String {
    match &result.content[0].raw {
        RawContent::Text(text) => text.text.clone(),
        _ => panic!("Expected text content"),
    }
}

async fn latest(config: &Config) -> String {
    let service = ResourceService::new(config.notes.clone());
    let result = service.read_resource("notes://latest").await.unwrap();
    match &result.contents[0] {
        ResourceContents::TextResourceContents { text, .. } => text.clone(),
        _ => panic!("Expected text resource"),
    }
}

async fn summary(config: &Config) -> String {
    let service = PromptService::new(config.notes.clone());
    let result = service.get_prompt("note_summary_prompt", None).await.unwrap();
    match &result.messages[0].content {
        PromptMessageContent::Text { text } => text.clone(),
        _ => panic!("Expected text message"),
    }
}

fn add_note(config: &Config, message: &str) {
    let result = AddNoteTool::execute(
        &AddNoteParams {
            message: message.to_string(),
        },
        config,
    );
    assert_eq!(tool_text(&result), "Note saved!");
}

#[tokio::test]
async fn test_empty_log_everywhere() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    assert_eq!(tool_text(&ReadNotesTool::execute(&config)), "No notes yet");
    assert_eq!(latest(&config).await, "No notes yet");
    assert_eq!(summary(&config).await, "There are no notes yet.");
}

#[tokio::test]
async fn test_notes_flow_through_every_surface() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    add_note(&config, "buy milk");
    add_note(&config, "call mom");

    assert_eq!(
        tool_text(&ReadNotesTool::execute(&config)),
        "buy milk\ncall mom"
    );
    assert_eq!(latest(&config).await, "call mom");
    assert_eq!(
        summary(&config).await,
        "Summarize the current notes: buy milk\ncall mom"
    );

    let on_disk = std::fs::read_to_string(dir.path().join("notes.txt")).unwrap();
    assert_eq!(on_disk, "buy milk\ncall mom\n");
}

#[tokio::test]
async fn test_multiline_message_stays_one_entry() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    add_note(&config, "first line\nsecond line");

    assert_eq!(latest(&config).await, "first line second line");
}

#[test]
fn test_add_is_independent_of_notes() {
    let result = AddTool::execute(&AddParams { a: 2, b: 3 });
    assert_eq!(tool_text(&result), "5");

    let result = AddTool::execute(&AddParams { a: -7, b: 0 });
    assert_eq!(tool_text(&result), "-7");
}
