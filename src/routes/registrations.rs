use crate::domain::LeadFields;
use crate::lead_store_client::LeadStore;
use crate::registration_form::{FailureReason, LeadForm, SubmissionStatus};
use crate::routes::landing_page::render_landing_page;
use actix_web::error::{InternalError, UrlencodedError};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use tera::Tera;

/// Upper bound of an urlencoded registration body.
///
/// Every field is capped in graphemes, not bytes: at most 256 + 256 + 254 (email) + 32 + 2000
/// graphemes plus a few digits of age, about 2800 in total. A grapheme may span several code
/// points, and every byte may be percent-encoded into three. Allowing 96 encoded bytes per
/// grapheme covers an eight code point cluster of four-byte characters.
pub const REGISTRATION_FORM_LIMIT: usize = 2_800 * 96;

/// Handles the registration form.
///
/// Every outcome re-renders the landing page: blank fields and a confirmation on success, the
/// submitted values and an indicator otherwise, so that the user can retry without typing
/// everything again. Store failures are logged, never shown.
#[tracing::instrument(
    name = "Registering a new lead",
    skip(form, lead_store, templates),
    fields(
        lead_email = %form.email,
        lead_first_name = %form.prenom
    )
)]
pub async fn register(
    form: web::Form<LeadFields>,
    lead_store: web::Data<LeadStore>,
    templates: web::Data<Tera>,
) -> Result<HttpResponse, actix_web::Error> {
    let mut lead_form = LeadForm::new(form.0);
    lead_form.submit(&lead_store).await;

    let status_code = match lead_form.status() {
        SubmissionStatus::Succeeded => StatusCode::OK,
        SubmissionStatus::Failed(FailureReason::Invalid(_)) => StatusCode::BAD_REQUEST,
        SubmissionStatus::Failed(FailureReason::NotConfigured) => StatusCode::SERVICE_UNAVAILABLE,
        SubmissionStatus::Failed(FailureReason::Store)
        | SubmissionStatus::Idle
        | SubmissionStatus::Submitting => StatusCode::INTERNAL_SERVER_ERROR,
    };

    render_landing_page(&templates, &lead_form, &lead_store, status_code)
}

/// Re-renders the page when the body of `POST /registrations` cannot be extracted (too large,
/// malformed, wrong content type), so that the status region still tells the user what happened.
pub fn registration_form_error(
    error: UrlencodedError,
    request: &HttpRequest,
) -> actix_web::Error {
    tracing::warn!(error.message = %error, "Failed to read a registration form");

    let templates = request.app_data::<web::Data<Tera>>();
    let lead_store = request.app_data::<web::Data<LeadStore>>();
    let (Some(templates), Some(lead_store)) = (templates, lead_store) else {
        return error.into();
    };

    let lead_form = LeadForm::unreadable(
        "le formulaire envoyé est illisible ou trop volumineux.".to_string(),
    );
    match render_landing_page(templates, &lead_form, lead_store, StatusCode::BAD_REQUEST) {
        Ok(response) => InternalError::from_response(error, response).into(),
        Err(e) => e,
    }
}
