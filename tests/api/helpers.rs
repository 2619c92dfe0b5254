use aridone::configuration::{get_configuration, Settings};
use aridone::startup::Application;
use aridone::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use secrecy::Secret;
use wiremock::MockServer;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    /// Stands in for the hosted record store.
    pub store_server: MockServer,
    pub api_client: reqwest::Client,
}

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // The sink is part of the type returned by `get_subscriber`, hence the two branches.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber).expect("Failed to initialise telemetry");
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).expect("Failed to initialise telemetry");
    }
});

impl TestApp {
    pub async fn get_home(&self) -> reqwest::Response {
        self.api_client
            .get(&self.address)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_raw_registrations(
        &self,
        content_type: &str,
        body: String,
    ) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/registrations", &self.address))
            .header("Content-Type", content_type)
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_registrations<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .post(&format!("{}/registrations", &self.address))
            // This `reqwest` method makes sure that the body is URL-encoded and the
            // `Content-Type` header is set accordingly.
            .form(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Bodies of the inserts the store received, parsed as JSON.
    pub async fn stored_rows(&self) -> Vec<serde_json::Value> {
        self.store_server
            .received_requests()
            .await
            .expect("Request recording is disabled")
            .iter()
            .map(|request| serde_json::from_slice(&request.body).expect("Insert body is not JSON"))
            .collect()
    }
}

/// The registration of the example user, Ava.
pub fn ava() -> serde_json::Value {
    serde_json::json!({
        "prenom": "Ava",
        "nom": "Lee",
        "email": "ava@example.com",
        "age": "17",
        "telephone": "0600000000",
        "attentes": "Learn to code",
    })
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(|_| ()).await
}

/// Spawns the application without lead store credentials.
pub async fn spawn_unconfigured_app() -> TestApp {
    spawn_app_with(|c| c.lead_store.api_key = None).await
}

/// Spawns the application with a store endpoint nothing listens on.
pub async fn spawn_app_with_unreachable_store() -> TestApp {
    // Bind then release a port: connections to it are refused from then on.
    let closed_port = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind a random port.")
        .local_addr()
        .unwrap()
        .port();
    spawn_app_with(|c| c.lead_store.base_url = Some(format!("http://127.0.0.1:{closed_port}")))
        .await
}

async fn spawn_app_with(customise: impl FnOnce(&mut Settings)) -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed. All other
    // invocations will instead skip execution.
    Lazy::force(&TRACING);

    let store_server = MockServer::start().await;

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // Use a random OS port
        c.application.port = 0;
        c.lead_store.base_url = Some(store_server.uri());
        c.lead_store.api_key = Some(Secret::new("test-anon-key".into()));
        customise(&mut c);
        c
    };

    let application = Application::build(configuration)
        .await
        .expect("Failed to build application.");
    let port = application.port();
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        port,
        store_server,
        api_client: reqwest::Client::new(),
    }
}
