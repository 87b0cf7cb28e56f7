use super::client::{AiError, GenerateResponse, parse_recommendations};

fn response_with_text(text: &str) -> GenerateResponse {
    let body = serde_json::json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    });
    serde_json::from_value(body).expect("fixture response")
}

#[test]
fn well_formed_payload_yields_recommendations() {
    let response = response_with_text(
        r#"[{"title":"小半","artist":"陈粒","reason":"深夜里克制又汹涌的情绪"},
            {"title":"Night Drive","artist":"Neon City","reason":"合成器浪潮的城市夜景"}]"#,
    );

    let recs = parse_recommendations(response).expect("recommendations");
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].title, "小半");
    assert_eq!(recs[1].artist, "Neon City");
}

#[test]
fn empty_candidate_list_is_malformed() {
    let response: GenerateResponse = serde_json::from_value(serde_json::json!({})).unwrap();
    assert!(matches!(
        parse_recommendations(response),
        Err(AiError::Malformed(_))
    ));
}

#[test]
fn non_json_candidate_text_is_malformed() {
    let response = response_with_text("sorry, I cannot help with that");
    assert!(matches!(
        parse_recommendations(response),
        Err(AiError::Malformed(_))
    ));
}

#[test]
fn missing_fields_in_items_are_rejected() {
    let response = response_with_text(r#"[{"title":"无题"}]"#);
    assert!(matches!(
        parse_recommendations(response),
        Err(AiError::Malformed(_))
    ));
}
