//! Token streams serialize to JSON for downstream renderers.

use rmdlex::{tokenize, Token, TokenKind};
use serde_json::json;

#[test]
fn test_token_serializes_with_upper_case_kind() {
    let token = Token::new(TokenKind::Header1, "Title", 3);
    assert_eq!(
        serde_json::to_value(&token).unwrap(),
        json!({ "kind": "HEADER1", "text": "Title", "line": 3 })
    );
}

#[test]
fn test_thematic_break_kind_name() {
    assert_eq!(
        serde_json::to_value(TokenKind::ThematicBreak).unwrap(),
        json!("THEMATIC_BREAK")
    );
    assert_eq!(TokenKind::ThematicBreak.to_string(), "THEMATIC_BREAK");
}

#[test]
fn test_token_stream_survives_json() {
    let tokens = tokenize("# A\n- **b**\n```c```");
    let encoded = serde_json::to_string(&tokens).unwrap();
    let decoded: Vec<Token> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, tokens);
}
