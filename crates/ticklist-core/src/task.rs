use serde::{Deserialize, Serialize};

/// A single to-do entry. Serialized as `{"text": ..., "complete": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub text: String,

    #[serde(default)]
    pub complete: bool,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            complete: false,
        }
    }

    /// Builds a pending task from raw user input, or `None` when the
    /// trimmed input is empty.
    pub fn from_input(raw: &str) -> Option<Self> {
        normalize_text(raw).map(Self::new)
    }
}

pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_input_trims_and_rejects_blank() {
        assert_eq!(Task::from_input("  Buy milk \n"), Some(Task::new("Buy milk")));
        assert_eq!(Task::from_input("   "), None);
        assert_eq!(Task::from_input(""), None);
    }

    #[test]
    fn json_shape_matches_stored_entries() {
        let task = Task {
            text: "Walk dog".to_string(),
            complete: true,
        };
        let json = serde_json::to_string(&task).expect("serialize task");
        assert_eq!(json, r#"{"text":"Walk dog","complete":true}"#);

        let parsed: Task = serde_json::from_str(r#"{"text":"Walk dog"}"#).expect("parse task");
        assert!(!parsed.complete);
    }
}
