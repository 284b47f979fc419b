use crate::client::Reply;

/// Render a reply as plain text for the terminal
pub fn render_text(reply: &Reply) -> String {
    match reply {
        Reply::Summary { summary } => format!("Summary\n\n{summary}"),
        Reply::Failed { error, .. } => format!("Error: {error}"),
    }
}

/// Render a reply as pretty-printed JSON
pub fn render_json(reply: &Reply) -> String {
    serde_json::to_string_pretty(reply).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_summary() {
        let reply = Reply::Summary {
            summary: "A short summary.".to_string(),
        };
        assert_eq!(render_text(&reply), "Summary\n\nA short summary.");
    }

    #[test]
    fn test_render_text_error_hides_details() {
        let reply = Reply::Failed {
            error: "Summarization failed".to_string(),
            details: Some("model returned 503".to_string()),
        };
        assert_eq!(render_text(&reply), "Error: Summarization failed");
    }

    #[test]
    fn test_render_json_matches_wire_shape() {
        let reply = Reply::Failed {
            error: "Summarization failed".to_string(),
            details: Some("boom".to_string()),
        };
        let value: serde_json::Value = serde_json::from_str(&render_json(&reply)).unwrap();
        assert_eq!(value, serde_json::json!({"error": "Summarization failed", "details": "boom"}));

        let reply = Reply::Summary {
            summary: "ok".to_string(),
        };
        let value: serde_json::Value = serde_json::from_str(&render_json(&reply)).unwrap();
        assert_eq!(value, serde_json::json!({"summary": "ok"}));
    }
}
