//! Assistant API stubs.
//!
//! The AI assistants are disabled in the open-source build. Each endpoint
//! ignores its request body and returns the same payload every time, shaped
//! the way the front-end script reads it.

use axum::Json;
use serde::Serialize;

/// Message returned by the disabled assistants.
pub const DISABLED_MESSAGE: &str =
    "Cette fonctionnalite IA est desactivee dans la version open-source.";

/// Explanation text returned by the explain stub.
pub const EXPLANATION_PLACEHOLDER: &str =
    "La generation automatique n'est pas disponible dans cette version de demonstration.";

/// Message returned alongside the sample prospecting questions.
pub const PROSPECT_MESSAGE: &str = "Exemple de questions fourni pour la version open-source.";

/// Sample prospecting questions, in display order.
pub const SAMPLE_QUESTIONS: [&str; 3] = [
    "Quelle est votre proposition de valeur principale ?",
    "Quel segment de clients ciblez-vous en priorite ?",
    "Quel budget marketing souhaitez-vous consacrer ce trimestre ?",
];

/// Accounting assistant reply.
#[derive(Debug, Serialize)]
pub struct ComptaResponse {
    pub message: &'static str,
    pub csv_data: Option<String>,
    pub is_html: bool,
    pub html_content: Option<String>,
}

/// Explanation assistant reply.
#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub message: &'static str,
    pub explanation: &'static str,
}

/// Prospecting assistant reply.
#[derive(Debug, Serialize)]
pub struct ProspectResponse {
    pub message: &'static str,
    pub questions: [&'static str; 3],
}

/// Accounting assistant: no CSV, no HTML report.
pub async fn compta() -> Json<ComptaResponse> {
    Json(ComptaResponse {
        message: DISABLED_MESSAGE,
        csv_data: None,
        is_html: false,
        html_content: None,
    })
}

/// Explanation assistant: fixed placeholder explanation.
pub async fn explain() -> Json<ExplainResponse> {
    Json(ExplainResponse {
        message: DISABLED_MESSAGE,
        explanation: EXPLANATION_PLACEHOLDER,
    })
}

/// Prospecting assistant: the three sample questions.
pub async fn prospect() -> Json<ProspectResponse> {
    Json(ProspectResponse {
        message: PROSPECT_MESSAGE,
        questions: SAMPLE_QUESTIONS,
    })
}
