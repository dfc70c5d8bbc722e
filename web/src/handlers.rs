use axum::response::Html;
use axum::{Form, Json};
use claire_client::{normalize, parse_documents, parse_questions, Documents, HealthResponse};
use serde::Deserialize;

use crate::answers_client;
use crate::pages::{self, AnswersView, HomeView};

#[derive(Deserialize)]
pub struct HomeForm {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub questions: String,
}

#[derive(Deserialize)]
pub struct AnswersForm {
    #[serde(default)]
    pub documents: String,
    #[serde(default)]
    pub questions: String,
}

pub async fn home_page() -> Html<String> {
    Html(pages::home_page(&HomeView::default()))
}

pub async fn answers_page() -> Html<String> {
    Html(pages::answers_page(&AnswersView::default()))
}

pub async fn about_page() -> Html<String> {
    Html(pages::about_page())
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Home page submission: one document URL plus questions.
pub async fn run_home_query(Form(form): Form<HomeForm>) -> Html<String> {
    let mut view = HomeView {
        url: form.url.clone(),
        questions_text: form.questions.clone(),
        ..Default::default()
    };

    if form.url.trim().is_empty() || form.questions.trim().is_empty() {
        view.error = Some("Please provide both a URL and questions.".to_string());
        return Html(pages::home_page(&view));
    }
    let questions = parse_questions(&form.questions);
    if questions.is_empty() {
        view.error = Some("Provide at least one question (one per line).".to_string());
        return Html(pages::home_page(&view));
    }

    let documents = Documents::Single(form.url.trim().to_string());
    match answers_client().get_answers(documents, questions.clone()).await {
        Ok(raw) => {
            view.entries = normalize(&raw, &questions);
            view.flash = Some("Answers retrieved successfully!".to_string());
        }
        Err(e) => {
            log::error!("home submission failed: {:#}", e);
            view.error = Some("An error occurred while fetching answers.".to_string());
        }
    }
    Html(pages::home_page(&view))
}

/// Answer-fetcher submission: pasted document text(s) plus questions.
pub async fn run_answers_query(Form(form): Form<AnswersForm>) -> Html<String> {
    let mut view = AnswersView {
        documents_text: form.documents.clone(),
        questions_text: form.questions.clone(),
        ..Default::default()
    };

    let questions = parse_questions(&form.questions);
    if questions.is_empty() {
        view.error = Some("Provide at least one question (one per line).".to_string());
        return Html(pages::answers_page(&view));
    }

    let documents = Documents::Many(parse_documents(&form.documents));
    match answers_client().get_answers(documents, questions.clone()).await {
        Ok(raw) => {
            view.entries = normalize(&raw, &questions);
            view.raw = Some(
                serde_json::to_string_pretty(&raw).unwrap_or_else(|_| raw.to_string()),
            );
        }
        Err(e) => {
            log::error!("answers submission failed: {:#}", e);
            view.error = Some(format!("{e:#}"));
        }
    }
    Html(pages::answers_page(&view))
}
