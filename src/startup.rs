use crate::configuration::Settings;
use crate::lead_store_client::LeadStore;
use crate::routes;
use actix_web::{dev::Server, web, App, HttpServer};
use std::io::ErrorKind;
use std::net::TcpListener;
use tera::Tera;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, std::io::Error> {
        let lead_store = LeadStore::from_settings(&configuration.lead_store)
            .map_err(|e| std::io::Error::new(ErrorKind::InvalidData, format!("{e:#}")))?;
        if !lead_store.is_configured() {
            tracing::warn!(
                "No lead store endpoint or API key configured: registration is disabled"
            );
        }

        let templates =
            build_templates().map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(&address)?;
        // Retrieve the port assigned to us by the OS
        let port = listener.local_addr()?.port();
        let server = run(listener, lead_store, templates)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// A more expressive name that makes it clear that this function only returns when the
    /// application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// Templates are compiled into the binary so the server does not depend on its working directory.
pub fn build_templates() -> Result<Tera, tera::Error> {
    let mut templates = Tera::default();
    templates.add_raw_template("home.html", include_str!("../templates/home.html"))?;
    Ok(templates)
}

pub fn run(
    listener: TcpListener,
    lead_store: LeadStore,
    templates: Tera,
) -> Result<Server, std::io::Error> {
    let lead_store = web::Data::new(lead_store);
    let templates = web::Data::new(templates);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/", web::get().to(routes::home))
            .route("/health_check", web::get().to(routes::health_check))
            .route("/registrations", web::post().to(routes::register))
            .app_data(
                web::FormConfig::default()
                    .limit(routes::REGISTRATION_FORM_LIMIT)
                    .error_handler(routes::registration_form_error),
            )
            .app_data(lead_store.clone())
            .app_data(templates.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
