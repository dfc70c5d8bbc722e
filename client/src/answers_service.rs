use anyhow::Result;
use reqwest::Client;
use serde_json::Value;
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::models::{Documents, RunRequest};

/// Client for the remote document-question-answering service.
#[derive(Debug)]
pub struct AnswersClient {
    client: Client,
    config: ApiConfig,
}

impl AnswersClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Sends one submission and returns the raw JSON payload. A single
    /// attempt: no retry, no timeout beyond the client defaults.
    pub async fn get_answers(&self, documents: Documents, questions: Vec<String>) -> Result<Value> {
        let submission_id = Uuid::new_v4();
        log::info!(
            "submission {}: sending {} question(s) to {}",
            submission_id,
            questions.len(),
            self.config.run_url()
        );

        let request = RunRequest {
            documents,
            questions,
        };

        let response = self
            .client
            .post(self.config.run_url())
            .bearer_auth(&self.config.bearer_token)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            log::warn!("submission {} failed with status {}", submission_id, status);
            if error_text.is_empty() {
                return Err(anyhow::anyhow!("answer service error: {}", status));
            }
            return Err(anyhow::anyhow!(
                "answer service error ({}): {}",
                status,
                error_text
            ));
        }

        let payload: Value = response.json().await?;
        log::info!("submission {} completed", submission_id);
        Ok(payload)
    }
}
