//! # SQL translators
//!
//! Natural language goes in, SQL comes out. Two backends:
//!
//! | Backend | When | Behavior |
//! |---------|------|----------|
//! | [`Translator::Rules`] | default | keyword rules in [`rules`], instant and offline |
//! | [`Translator::OpenAi`] | `translator.backend = "openai"` | chat completion with the schema in the prompt |
//!
//! Search SQL produced by either backend is still checked by
//! [`crate::query::read_only_statement`] before it runs.

pub mod openai;
pub mod rules;

use store::ResultRow;
use thiserror::Error;

use crate::config::{self, TranslatorBackend};
pub use openai::OpenAiTranslator;

#[derive(Debug, Clone, Error)]
pub enum TranslatorError {
    #[error("translator request failed: {0}")]
    Transport(String),
    #[error("translator returned http {status}: {body}")]
    Http { status: u16, body: String },
    #[error("translator rejected the api key")]
    InvalidApiKey,
    #[error("could not read translator reply: {0}")]
    Decode(String),
    #[error("translator returned an empty reply")]
    EmptyReply,
    #[error("missing api key: set OPENAI_API_KEY or translator.api_key")]
    MissingApiKey,
}

#[derive(Debug, Clone)]
pub enum Translator {
    Rules,
    OpenAi(OpenAiTranslator),
}

impl Translator {
    pub fn from_settings(settings: &config::Translator) -> Result<Self, TranslatorError> {
        match settings.backend {
            TranslatorBackend::Rules => Ok(Translator::Rules),
            TranslatorBackend::OpenAi => {
                let api_key = settings
                    .api_key
                    .clone()
                    .filter(|k| !k.trim().is_empty())
                    .ok_or(TranslatorError::MissingApiKey)?;
                Ok(Translator::OpenAi(OpenAiTranslator::new(
                    api_key,
                    settings.model.clone(),
                    settings.base_url.clone(),
                )?))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Translator::Rules => TranslatorBackend::Rules.as_str(),
            Translator::OpenAi(_) => TranslatorBackend::OpenAi.as_str(),
        }
    }

    pub async fn search_sql(&self, query: &str) -> Result<String, TranslatorError> {
        match self {
            Translator::Rules => Ok(rules::search_sql(query)),
            Translator::OpenAi(client) => client.search_sql(query).await,
        }
    }

    pub async fn admin_sql(&self, command: &str) -> Result<String, TranslatorError> {
        match self {
            Translator::Rules => Ok(rules::admin_sql(command)),
            Translator::OpenAi(client) => client.admin_sql(command).await,
        }
    }

    /// Plain-language summary. A failed model call degrades to the rules
    /// summary since the rows are already in hand.
    pub async fn explain(&self, query: &str, rows: &[ResultRow]) -> String {
        match self {
            Translator::Rules => rules::explain(query, rows.len()),
            Translator::OpenAi(client) => match client.explain(query, rows).await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!("explanation failed, using summary: {}", e);
                    rules::explain(query, rows.len())
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(backend: TranslatorBackend, api_key: Option<&str>) -> config::Translator {
        config::Translator {
            backend,
            model: "gpt-4".to_string(),
            api_key: api_key.map(str::to_string),
            base_url: "https://api.openai.com/v1/".to_string(),
        }
    }

    #[tokio::test]
    async fn test_rules_backend() {
        let translator = Translator::from_settings(&settings(TranslatorBackend::Rules, None)).unwrap();
        assert_eq!(translator.name(), "rules");
        assert_eq!(
            translator.search_sql("all flights").await.unwrap(),
            "SELECT * FROM flights LIMIT 5"
        );
        assert!(translator
            .admin_sql("update timezone")
            .await
            .unwrap()
            .starts_with("UPDATE airports"));
        assert_eq!(
            translator.explain("all flights", &[]).await,
            "Found 0 results for your query: all flights"
        );
    }

    #[test]
    fn test_openai_backend_needs_key() {
        let err = Translator::from_settings(&settings(TranslatorBackend::OpenAi, None)).unwrap_err();
        assert!(matches!(err, TranslatorError::MissingApiKey));
        assert!(Translator::from_settings(&settings(TranslatorBackend::OpenAi, Some(" "))).is_err());

        let translator =
            Translator::from_settings(&settings(TranslatorBackend::OpenAi, Some("sk-test"))).unwrap();
        assert_eq!(translator.name(), "openai");
    }
}
