use crate::core::submission_store::SubmissionStore;
use crate::core::AppState;
use crate::domain::model::{CareerSubmission, ContactSubmission, SiteContent};
use crate::domain::ports::Submission;
use crate::http::error::ApiError;
use crate::http::response::{ContentEnvelope, DataEnvelope, HealthBody};
use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

const CONTENT_LOAD_FAILED: &str = "Errore interno durante il caricamento";
const CONTENT_SAVE_FAILED: &str = "Errore interno durante il salvataggio";
const CONTACT_LIST_FAILED: &str = "Errore durante il caricamento richieste contatto";
const CONTACT_SAVE_FAILED: &str = "Errore durante il salvataggio richiesta contatto";
const CAREER_LIST_FAILED: &str = "Errore durante il caricamento candidature";
const CAREER_SAVE_FAILED: &str = "Errore durante il salvataggio candidatura";
const HEALTH_FAILED: &str = "Servizio non disponibile";

type AppStateRef = State<Arc<AppState>>;

fn parse_body(body: &Bytes) -> Result<Value, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Rejected malformed JSON body: {}", e);
        ApiError::malformed_json(&e)
    })
}

fn list_submissions<T: Submission + Serialize>(
    store: &SubmissionStore<T>,
    failure: &'static str,
) -> Result<Json<DataEnvelope<Vec<T>>>, ApiError> {
    let records = store
        .list()
        .map_err(|e| ApiError::from_site_error(e, failure))?;
    Ok(Json(DataEnvelope::new(records)))
}

fn create_submission<T: Submission + Serialize>(
    store: &SubmissionStore<T>,
    body: &Bytes,
    failure: &'static str,
) -> Result<(StatusCode, Json<DataEnvelope<T>>), ApiError> {
    let payload = parse_body(body)?;
    let created = store
        .add(&payload)
        .map_err(|e| ApiError::from_site_error(e, failure))?;

    tracing::info!(kind = T::KIND, id = created.id(), "New submission received");
    Ok((StatusCode::CREATED, Json(DataEnvelope::new(created))))
}

pub async fn get_content(State(state): AppStateRef) -> Result<Json<ContentEnvelope>, ApiError> {
    let content = state
        .content
        .get()
        .map_err(|e| ApiError::from_site_error(e, CONTENT_LOAD_FAILED))?;
    Ok(Json(ContentEnvelope::new(content)))
}

pub async fn put_content(
    State(state): AppStateRef,
    body: Bytes,
) -> Result<Json<DataEnvelope<SiteContent>>, ApiError> {
    let payload = parse_body(&body)?;
    let updated = state
        .content
        .update(&payload)
        .map_err(|e| ApiError::from_site_error(e, CONTENT_SAVE_FAILED))?;

    tracing::info!("Site content updated");
    Ok(Json(DataEnvelope::new(updated)))
}

pub async fn list_contact_submissions(
    State(state): AppStateRef,
) -> Result<Json<DataEnvelope<Vec<ContactSubmission>>>, ApiError> {
    list_submissions(&state.contacts, CONTACT_LIST_FAILED)
}

pub async fn create_contact_submission(
    State(state): AppStateRef,
    body: Bytes,
) -> Result<(StatusCode, Json<DataEnvelope<ContactSubmission>>), ApiError> {
    create_submission(&state.contacts, &body, CONTACT_SAVE_FAILED)
}

pub async fn list_career_submissions(
    State(state): AppStateRef,
) -> Result<Json<DataEnvelope<Vec<CareerSubmission>>>, ApiError> {
    list_submissions(&state.careers, CAREER_LIST_FAILED)
}

pub async fn create_career_submission(
    State(state): AppStateRef,
    body: Bytes,
) -> Result<(StatusCode, Json<DataEnvelope<CareerSubmission>>), ApiError> {
    create_submission(&state.careers, &body, CAREER_SAVE_FAILED)
}

pub async fn health(State(state): AppStateRef) -> Result<Json<HealthBody>, ApiError> {
    let contact_submissions = state
        .contacts
        .len()
        .map_err(|e| ApiError::from_site_error(e, HEALTH_FAILED))?;
    let career_submissions = state
        .careers
        .len()
        .map_err(|e| ApiError::from_site_error(e, HEALTH_FAILED))?;

    Ok(Json(HealthBody {
        status: "ok",
        contact_submissions,
        career_submissions,
    }))
}
