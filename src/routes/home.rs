use crate::lead_store_client::LeadStore;
use crate::registration_form::LeadForm;
use crate::routes::landing_page::render_landing_page;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use tera::Tera;

pub async fn home(
    lead_store: web::Data<LeadStore>,
    templates: web::Data<Tera>,
) -> Result<HttpResponse, actix_web::Error> {
    render_landing_page(&templates, &LeadForm::default(), &lead_store, StatusCode::OK)
}
