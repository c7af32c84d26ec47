use bingo_core::{BallNumber, Draw, POOL_SIZE, State, label_for, progress_line};

use serde_json::{Value, json};
use thiserror::Error;

/// What the delivery side is told about a completed draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Announcement {
    number: BallNumber,
    label: String,
    called: usize,
    total: usize,
    round_reset: bool,
}

impl Announcement {
    pub fn from_draw(draw: &Draw) -> Self {
        Self {
            number: draw.number,
            label: label_for(draw.number),
            called: draw.state.called_count(),
            total: POOL_SIZE,
            round_reset: draw.round_reset,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn number(&self) -> BallNumber {
        self.number
    }

    pub fn round_reset(&self) -> bool {
        self.round_reset
    }

    pub fn progress(&self) -> String {
        format!("{}/{} called this round", self.called, self.total)
    }

    pub fn text(&self) -> String {
        format!("{} ({})", self.label, self.progress())
    }

    /// Chat message blocks: a header, the called label and the round progress.
    pub fn blocks(&self) -> Value {
        json!([
            {
                "type": "header",
                "text": { "type": "plain_text", "text": "🎱 Daily Bingo" }
            },
            {
                "type": "section",
                "text": { "type": "mrkdwn", "text": format!("*Number:* `{}` 🎉", self.label) }
            },
            {
                "type": "context",
                "elements": [
                    { "type": "mrkdwn", "text": format!("_{}_", self.progress()) }
                ]
            }
        ])
    }
}

/// Read-only view of the round in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundStatus {
    pub progress: String,
    pub called: Vec<String>,
}

impl RoundStatus {
    pub fn from_state(state: &State) -> Self {
        Self {
            progress: progress_line(state),
            called: state.history().iter().map(|r| label_for(r.n)).collect(),
        }
    }

    pub fn last_called(&self) -> Option<&str> {
        self.called.last().map(String::as_str)
    }
}

#[derive(Debug, Error)]
pub enum DrawNumberError {
    #[error(transparent)]
    Engine(#[from] bingo_core::Error),
    // The draw is already persisted when this happens.
    #[error("drew {label} but failed to announce it: {source}")]
    Announce {
        label: String,
        #[source]
        source: anyhow::Error,
    },
}
