use std::time::Duration;

use log::warn;

use crate::error::{CadenceError, Result};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const QUOTE_FALLBACK_NO_KEY: &str = "Stay hungry, stay foolish. (API key missing)";
const QUOTE_FALLBACK: &str = "Consistency is the key to mastery.";
const HINT_FALLBACK_NO_KEY: &str = "Configure an API key for AI hints.";
const HINT_FALLBACK: &str = "Could not fetch a hint at this time.";
const BREAKDOWN_FALLBACK_NO_KEY: [&str; 4] =
    ["Analyze requirements", "Draft solution", "Implement", "Test"];
const BREAKDOWN_FALLBACK: [&str; 3] = ["Plan", "Execute", "Review"];

/// Best-effort text enrichment. Every call degrades to a fixed fallback on a
/// missing key or any transport/parse failure; nothing here can fail a core
/// operation.
pub struct Assistant {
    client: reqwest::blocking::Client,
    api_key: Option<String>,
    model: String,
}

impl Assistant {
    pub fn new(api_key: Option<String>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .unwrap_or_default();
        Assistant {
            client,
            api_key,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn motivational_quote(&self) -> String {
        let Some(key) = self.api_key.as_deref() else {
            return QUOTE_FALLBACK_NO_KEY.to_string();
        };
        let prompt = "Give me a short, punchy, unique motivational quote for a \
                      software engineering student preparing for tough interviews. \
                      Do not include an author, just the quote.";
        match self.generate(key, prompt) {
            Ok(text) => text,
            Err(e) => {
                warn!("quote request failed: {}", e);
                QUOTE_FALLBACK.to_string()
            }
        }
    }

    pub fn hint(&self, title: &str, topics: &[String]) -> String {
        let Some(key) = self.api_key.as_deref() else {
            return HINT_FALLBACK_NO_KEY.to_string();
        };
        let prompt = format!(
            "Provide a conceptual hint for the coding problem \"{}\" which involves \
             topics: {}. Do not give the code directly. Explain the intuition or the \
             data structure to use in 2-3 sentences.",
            title,
            topics.join(", ")
        );
        match self.generate(key, &prompt) {
            Ok(text) => text,
            Err(e) => {
                warn!("hint request failed: {}", e);
                HINT_FALLBACK.to_string()
            }
        }
    }

    pub fn breakdown_task(&self, title: &str) -> Vec<String> {
        let Some(key) = self.api_key.as_deref() else {
            return BREAKDOWN_FALLBACK_NO_KEY
                .iter()
                .map(|s| s.to_string())
                .collect();
        };
        let prompt = format!(
            "Break down the task \"{}\" into 3-5 actionable subtasks for a student. \
             Return only the subtasks as a bulleted list.",
            title
        );
        match self.generate(key, &prompt) {
            Ok(text) => {
                let subtasks = parse_subtasks(&text);
                if subtasks.is_empty() {
                    BREAKDOWN_FALLBACK.iter().map(|s| s.to_string()).collect()
                } else {
                    subtasks
                }
            }
            Err(e) => {
                warn!("breakdown request failed: {}", e);
                BREAKDOWN_FALLBACK.iter().map(|s| s.to_string()).collect()
            }
        }
    }

    fn generate(&self, api_key: &str, prompt: &str) -> Result<String> {
        let url = format!("{}/{}:generateContent", API_BASE, self.model);
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()?
            .error_for_status()?;

        let value: serde_json::Value = response.json()?;
        let text = value["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or(CadenceError::AssistResponse)?;
        Ok(text.trim().to_string())
    }
}

/// Pulls subtask titles out of a bulleted or numbered list.
fn parse_subtasks(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| {
            line.trim()
                .trim_start_matches(['-', '*', '•'])
                .trim_start_matches(|c: char| c.is_ascii_digit())
                .trim_start_matches(['.', ')'])
                .trim()
                .to_string()
        })
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod fallback_tests {
        use super::*;

        #[test]
        fn quote_without_key_uses_fallback() {
            let assistant = Assistant::new(None);
            assert_eq!(assistant.motivational_quote(), QUOTE_FALLBACK_NO_KEY);
        }

        #[test]
        fn hint_without_key_uses_fallback() {
            let assistant = Assistant::new(None);
            assert_eq!(
                assistant.hint("Two Sum", &["Array".to_string()]),
                HINT_FALLBACK_NO_KEY
            );
        }

        #[test]
        fn breakdown_without_key_uses_fallback() {
            let assistant = Assistant::new(None);
            let subtasks = assistant.breakdown_task("Build portfolio site");
            assert_eq!(subtasks.len(), 4);
            assert_eq!(subtasks[0], "Analyze requirements");
        }
    }

    mod parse_subtasks_tests {
        use super::*;

        #[test]
        fn strips_dashes_and_stars() {
            let parsed = parse_subtasks("- Read the docs\n* Write code\n• Ship it");
            assert_eq!(parsed, vec!["Read the docs", "Write code", "Ship it"]);
        }

        #[test]
        fn strips_numbering() {
            let parsed = parse_subtasks("1. First\n2) Second\n3. Third");
            assert_eq!(parsed, vec!["First", "Second", "Third"]);
        }

        #[test]
        fn drops_blank_lines() {
            let parsed = parse_subtasks("- One\n\n   \n- Two");
            assert_eq!(parsed, vec!["One", "Two"]);
        }

        #[test]
        fn plain_lines_pass_through() {
            let parsed = parse_subtasks("Just a line");
            assert_eq!(parsed, vec!["Just a line"]);
        }
    }
}
