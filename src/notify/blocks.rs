use serde_json::{json, Value};

/// Message text with optional data appended as a fenced, pretty-printed
/// JSON block.
pub fn plain_text(message: &str, data: Option<&Value>) -> String {
    match data {
        Some(data) => {
            let pretty = serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
            format!("{message}\n```{pretty}```")
        }
        None => message.to_string(),
    }
}

/// Header, field section and divider blocks for a rich message. The section
/// is omitted when there are no fields, since Slack rejects empty sections.
pub fn rich_blocks(title: &str, fields: &[(String, String)]) -> Value {
    let mut blocks = vec![json!({
        "type": "header",
        "text": {
            "type": "plain_text",
            "text": title,
            "emoji": true,
        },
    })];

    if !fields.is_empty() {
        let entries: Vec<Value> = fields
            .iter()
            .map(|(key, value)| {
                json!({
                    "type": "mrkdwn",
                    "text": format!("*{key}:*\n{value}"),
                })
            })
            .collect();
        blocks.push(json!({ "type": "section", "fields": entries }));
    }

    blocks.push(json!({ "type": "divider" }));
    Value::Array(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_without_data_is_the_message() {
        assert_eq!(plain_text("New lead", None), "New lead");
    }

    #[test]
    fn plain_text_appends_pretty_json_in_code_fence() {
        let data = json!({ "firstName": "Ada" });
        assert_eq!(
            plain_text("New lead", Some(&data)),
            "New lead\n```{\n  \"firstName\": \"Ada\"\n}```"
        );
    }

    #[test]
    fn rich_blocks_have_header_section_and_divider() {
        let fields = vec![
            ("firstName".to_string(), "Ada".to_string()),
            ("email".to_string(), "ada@x.com".to_string()),
        ];

        let blocks = rich_blocks("New form submission", &fields);

        assert_eq!(
            blocks,
            json!([
                {
                    "type": "header",
                    "text": { "type": "plain_text", "text": "New form submission", "emoji": true },
                },
                {
                    "type": "section",
                    "fields": [
                        { "type": "mrkdwn", "text": "*firstName:*\nAda" },
                        { "type": "mrkdwn", "text": "*email:*\nada@x.com" },
                    ],
                },
                { "type": "divider" },
            ])
        );
    }

    #[test]
    fn rich_blocks_skip_empty_section() {
        let blocks = rich_blocks("Ping", &[]);
        let kinds: Vec<&str> = blocks
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["type"].as_str().unwrap())
            .collect();
        assert_eq!(kinds, ["header", "divider"]);
    }
}
