//! Word generation endpoints.

use serde::{Deserialize, Serialize};

use wg_core::error::{WgError, WgResult};

use crate::client::ApiClient;
use crate::response::ServerResponse;

/// A themed word list returned by `/words/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedWordList {
    /// Theme the words belong to.
    pub theme: String,
    /// The generated words. Raw service output; callers normalize before use.
    pub words: Vec<String>,
    /// Model identifier the service used, if reported.
    #[serde(default)]
    pub model: Option<String>,
}

impl ApiClient {
    /// Request a themed word list from the generative word service.
    ///
    /// `max_length` caps individual word length so every word can fit the
    /// largest supported grid.
    pub async fn generate_words(
        &self,
        theme: &str,
        count: usize,
        max_length: usize,
    ) -> WgResult<GeneratedWordList> {
        let body = serde_json::json!({
            "theme": theme,
            "count": count,
            "maxLength": max_length,
        });

        let resp: ServerResponse<GeneratedWordList> =
            self.post_json("/words/generate", &body).await?;

        if let Some(message) = resp.error_message() {
            return Err(WgError::ServerError {
                status: resp.status,
                message,
            });
        }

        resp.data
            .ok_or_else(|| WgError::Http("missing word list data".into()))
    }

    /// List the themes the service can generate words for.
    pub async fn list_themes(&self) -> WgResult<Vec<String>> {
        let resp: ServerResponse<Vec<String>> = self.get_json("/words/themes").await?;
        Ok(resp.data.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_list_deserialization() {
        let json = r#"{"theme":"animals","words":["CAT","DOG"],"model":"gen-1"}"#;
        let list: GeneratedWordList = serde_json::from_str(json).unwrap();
        assert_eq!(list.theme, "animals");
        assert_eq!(list.words.len(), 2);
        assert_eq!(list.model.as_deref(), Some("gen-1"));
    }

    #[test]
    fn test_word_list_without_model() {
        let json = r#"{"theme":"food","words":["MANGO"]}"#;
        let list: GeneratedWordList = serde_json::from_str(json).unwrap();
        assert!(list.model.is_none());
    }

    #[test]
    fn test_theme_list_envelope() {
        let json = r#"{"status":200,"message":"Success!","data":["animals","food"]}"#;
        let resp: ServerResponse<Vec<String>> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.data.unwrap(), vec!["animals", "food"]);
    }
}
