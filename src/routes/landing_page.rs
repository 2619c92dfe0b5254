use crate::lead_store_client::LeadStore;
use crate::registration_form::{FailureReason, LeadForm, SubmissionStatus};
use crate::utils::e500;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use anyhow::Context as _;
use tera::{Context, Tera};

/// Renders the whole page around the registration form, with its fields and status region.
pub(in crate::routes) fn render_landing_page(
    templates: &Tera,
    form: &LeadForm,
    lead_store: &LeadStore,
    status_code: StatusCode,
) -> Result<HttpResponse, actix_web::Error> {
    let (status, error_message) = match form.status() {
        SubmissionStatus::Idle => ("idle", None),
        SubmissionStatus::Submitting => ("submitting", None),
        SubmissionStatus::Succeeded => ("success", None),
        SubmissionStatus::Failed(FailureReason::Invalid(message)) => {
            ("invalid", Some(message.as_str()))
        }
        SubmissionStatus::Failed(FailureReason::NotConfigured) => ("inactive", None),
        SubmissionStatus::Failed(FailureReason::Store) => ("error", None),
    };

    let mut template_context = Context::new();
    template_context.insert("fields", form.fields());
    template_context.insert("status", status);
    template_context.insert("error_message", &error_message);
    template_context.insert("submitting", &form.is_submitting());
    template_context.insert("registration_open", &lead_store.is_configured());
    let html_body = templates
        .render("home.html", &template_context)
        .context("Error rendering the landing page")
        .map_err(e500)?;

    Ok(HttpResponse::build(status_code)
        .content_type(ContentType::html())
        .body(html_body))
}
