//! Prompt generation for title suggestions
//!
//! Builds the messages sent to the model to turn free-text content into
//! a short list of candidate titles.

use serde_json::{json, Value};

/// Maximum characters of user content forwarded to the model.
const MAX_CONTENT_CHARS: usize = 4000;

/// Generate the system prompt for title suggestions
pub fn system_prompt(count: usize) -> String {
    format!(
        r#"You write titles for submissions on a community ideation portal.

Given the description of an idea, a proposed solution or a prototype, suggest {count} short, distinct titles.

## Rules

- At most 80 characters per title
- Plain text, no quotes, no numbering, no emoji
- Keep the author's language
- Describe the concrete thing being proposed, not the problem in general

## CRITICAL: Output Format

Return ONLY a JSON array of strings, for example:

```json
["Shared e-bikes for dorm commutes", "Group ride booking for students"]
```"#
    )
}

/// Build the user prompt for one piece of content
pub fn user_prompt(content: &str) -> String {
    let trimmed = content.trim();
    let excerpt: String = trimmed.chars().take(MAX_CONTENT_CHARS).collect();
    let truncated = if excerpt.len() < trimmed.len() {
        "\n\n(content truncated)"
    } else {
        ""
    };

    format!("## Content\n\n{}{}\n\nSuggest titles now.", excerpt, truncated)
}

/// Build the messages array for the API request
pub fn build_messages(content: &str) -> Vec<Value> {
    vec![json!({
        "role": "user",
        "content": user_prompt(content)
    })]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_mentions_count_and_format() {
        let prompt = system_prompt(4);
        assert!(prompt.contains("suggest 4 short"));
        assert!(prompt.contains("JSON array"));
    }

    #[test]
    fn test_user_prompt_truncates_long_content() {
        let long = "a".repeat(MAX_CONTENT_CHARS + 10);
        let prompt = user_prompt(&long);
        assert!(prompt.contains("(content truncated)"));

        let short = user_prompt("  bikes for everyone  ");
        assert!(short.contains("bikes for everyone\n"));
        assert!(!short.contains("truncated"));
    }
}
