pub mod blocks;

use std::time::Duration;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::SlackConfig;

/// What became of a notification. Delivery is best-effort, so callers only
/// ever see an outcome, never an error.
#[derive(Debug, Clone, PartialEq)]
pub enum NotifyOutcome {
    Sent { ts: Option<String> },
    SkippedNoConfig,
    Failed(String),
}

#[derive(Debug)]
pub enum NotifyError {
    Transport(reqwest::Error),
    Status(u16),
    Api(String),
}

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotifyError::Transport(err) => write!(f, "Slack request failed: {err}"),
            NotifyError::Status(code) => write!(f, "Slack responded with HTTP {code}"),
            NotifyError::Api(err) => write!(f, "Slack API error: {err}"),
        }
    }
}

impl std::error::Error for NotifyError {}

impl From<reqwest::Error> for NotifyError {
    fn from(err: reqwest::Error) -> Self {
        NotifyError::Transport(err)
    }
}

#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    ok: bool,
    ts: Option<String>,
    error: Option<String>,
}

pub struct SlackNotifier {
    client: reqwest::Client,
    config: Option<SlackConfig>,
}

impl SlackNotifier {
    pub fn new(config: Option<SlackConfig>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default HTTP client for Slack: {e}");
                reqwest::Client::new()
            });

        Self { client, config }
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Post `message` to the configured channel, with `data` appended as a
    /// JSON code block.
    pub async fn notify_plain(&self, message: &str, data: Option<&Value>) -> NotifyOutcome {
        let Some(config) = self.config.as_ref() else {
            tracing::warn!("Slack not configured. Skipping notification.");
            return NotifyOutcome::SkippedNoConfig;
        };

        let payload = json!({
            "channel": config.channel_id,
            "text": blocks::plain_text(message, data),
        });

        match self.post_message(config, &payload).await {
            Ok(ts) => {
                tracing::info!(ts = ?ts, "Slack notification sent");
                NotifyOutcome::Sent { ts }
            }
            Err(e) => {
                tracing::error!("Error sending Slack notification: {e}");
                NotifyOutcome::Failed(e.to_string())
            }
        }
    }

    /// Post a block message with a header, one line per field and a divider.
    /// `title` doubles as the fallback text.
    pub async fn notify_rich(&self, title: &str, fields: &[(String, String)]) -> NotifyOutcome {
        let Some(config) = self.config.as_ref() else {
            tracing::warn!("Slack not configured. Skipping notification.");
            return NotifyOutcome::SkippedNoConfig;
        };

        let payload = json!({
            "channel": config.channel_id,
            "blocks": blocks::rich_blocks(title, fields),
            "text": title,
        });

        match self.post_message(config, &payload).await {
            Ok(ts) => {
                tracing::info!(ts = ?ts, "Slack rich notification sent");
                NotifyOutcome::Sent { ts }
            }
            Err(e) => {
                tracing::error!("Error sending Slack rich notification: {e}");
                NotifyOutcome::Failed(e.to_string())
            }
        }
    }

    async fn post_message(
        &self,
        config: &SlackConfig,
        payload: &Value,
    ) -> Result<Option<String>, NotifyError> {
        let resp = self
            .client
            .post(format!("{}/chat.postMessage", config.api_url))
            .bearer_auth(&config.bot_token)
            .json(payload)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(NotifyError::Status(status.as_u16()));
        }

        let body: PostMessageResponse = resp.json().await?;
        if !body.ok {
            return Err(NotifyError::Api(
                body.error.unwrap_or_else(|| "unknown_error".to_string()),
            ));
        }

        Ok(body.ts)
    }
}
