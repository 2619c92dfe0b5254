use crate::configuration::LeadStoreSettings;
use crate::domain::NewLead;
use crate::utils::error_chain_fmt;
use anyhow::Context;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode, Url};
use secrecy::{ExposeSecret, Secret};

/// Talks to the hosted record store (a PostgREST endpoint) where registrations end up.
///
/// Every call to `insert_lead` is a single all-or-nothing insert: there is no retry, no queue and
/// no deduplication. Submitting the same lead twice creates two rows.
#[derive(Debug)]
pub struct LeadStoreClient {
    http_client: Client,
    base_url: Url,
    table: String,
    api_key: Secret<String>,
}

/// The store is an optional dependency: the landing page keeps working without credentials, it
/// just cannot register anybody.
#[derive(Debug)]
pub enum LeadStore {
    Configured(LeadStoreClient),
    Unconfigured,
}

#[derive(thiserror::Error)]
pub enum StoreError {
    #[error("The lead store is not configured.")]
    NotConfigured,
    #[error("The lead store rejected the record with status {status}.")]
    Rejected { status: StatusCode, body: String },
    #[error("Failed to reach the lead store.")]
    Transport(#[from] reqwest::Error),
}

impl std::fmt::Debug for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// One row of the `etudiants` table, as the store expects it.
#[derive(serde::Serialize)]
struct LeadRow<'a> {
    prenom: &'a str,
    nom: &'a str,
    email: &'a str,
    age: i32,
    telephone: &'a str,
    attentes: &'a str,
    created_at: DateTime<Utc>,
}

impl LeadStoreClient {
    /// No request timeout is set: a submission lasts as long as the transport lets it.
    pub fn new(base_url: Url, table: String, api_key: Secret<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url,
            table,
            api_key,
        }
    }

    #[tracing::instrument(
        name = "Inserting a new lead in the record store",
        skip(self, lead),
        fields(table = %self.table)
    )]
    pub async fn insert_lead(&self, lead: &NewLead) -> Result<(), StoreError> {
        let url = format!(
            "{}/rest/v1/{}",
            self.base_url.as_str().trim_end_matches('/'),
            self.table
        );
        let row = LeadRow {
            prenom: lead.first_name.as_ref(),
            nom: lead.last_name.as_ref(),
            email: lead.email.as_ref(),
            age: lead.age.get(),
            telephone: lead.phone_number.as_ref(),
            attentes: lead.expectations.as_ref(),
            // Assigned here, exactly once, never by the caller.
            created_at: Utc::now(),
        };

        let response = self
            .http_client
            .post(&url)
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(self.api_key.expose_secret())
            .header("Prefer", "return=minimal")
            .json(&[row])
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await?;
            Err(StoreError::Rejected { status, body })
        }
    }
}

impl LeadStore {
    /// Builds the store out of its settings. Missing credentials yield `Unconfigured`, while an
    /// endpoint that is present but malformed is reported as an error.
    pub fn from_settings(settings: &LeadStoreSettings) -> Result<Self, anyhow::Error> {
        let Some((base_url, api_key)) = settings.credentials() else {
            return Ok(Self::Unconfigured);
        };
        let base_url = Url::parse(&base_url)
            .with_context(|| format!("{base_url} is not a valid lead store endpoint."))?;

        Ok(Self::Configured(LeadStoreClient::new(
            base_url,
            settings.table.clone(),
            api_key,
        )))
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Configured(_))
    }

    pub async fn insert_lead(&self, lead: &NewLead) -> Result<(), StoreError> {
        match self {
            Self::Configured(client) => client.insert_lead(lead).await,
            Self::Unconfigured => Err(StoreError::NotConfigured),
        }
    }
}
