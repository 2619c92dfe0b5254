//! The registration form and the life cycle of a single submission.
//!
//! `idle → submitting → {succeeded, failed}`; both outcomes go back through `submitting` on the
//! next attempt. There is no locking: a form is owned by one caller and the status itself is the
//! in-flight guard.
use crate::domain::{LeadFields, NewLead};
use crate::lead_store_client::{LeadStore, StoreError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// A field is missing or malformed. The message is safe to show to the user.
    Invalid(String),
    /// Registration is inactive: no store credentials were supplied.
    NotConfigured,
    /// The store refused the record or could not be reached. Details are only logged.
    Store,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(FailureReason),
}

/// Why a submission never reached the store.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("A submission is already in flight.")]
    InFlight,
    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, Default)]
pub struct LeadForm {
    fields: LeadFields,
    status: SubmissionStatus,
}

impl LeadForm {
    pub fn new(fields: LeadFields) -> Self {
        Self {
            fields,
            status: SubmissionStatus::Idle,
        }
    }

    /// A form whose body could not be read: there is nothing to validate and nothing to send.
    pub fn unreadable(message: String) -> Self {
        Self {
            fields: LeadFields::default(),
            status: SubmissionStatus::Failed(FailureReason::Invalid(message)),
        }
    }

    pub fn fields(&self) -> &LeadFields {
        &self.fields
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// The submit control is disabled while this is `true`.
    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Validates the fields and moves the form to `Submitting`.
    ///
    /// A form already in flight is left untouched.
    pub fn begin_submission(&mut self) -> Result<NewLead, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::InFlight);
        }

        match NewLead::try_from(self.fields.clone()) {
            Ok(lead) => {
                self.status = SubmissionStatus::Submitting;
                Ok(lead)
            }
            Err(message) => {
                self.status = SubmissionStatus::Failed(FailureReason::Invalid(message.clone()));
                Err(SubmitRejected::Invalid(message))
            }
        }
    }

    /// Records the outcome of the store call. Fields are cleared on success only, so that a
    /// failed attempt can be retried as is.
    pub fn complete(&mut self, outcome: Result<(), StoreError>) {
        self.status = match outcome {
            Ok(()) => {
                self.fields.clear();
                SubmissionStatus::Succeeded
            }
            Err(StoreError::NotConfigured) => {
                tracing::warn!("Lead registration attempted while the store is not configured");
                SubmissionStatus::Failed(FailureReason::NotConfigured)
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to store a new lead"
                );
                SubmissionStatus::Failed(FailureReason::Store)
            }
        };
    }

    /// Runs a whole submission: at most one call to the store, none if the form is rejected
    /// upfront. The outcome is reflected in `status`.
    ///
    /// An unconfigured store wins over validation: the fields are not even looked at.
    pub async fn submit(&mut self, store: &LeadStore) {
        if !store.is_configured() && !self.is_submitting() {
            self.complete(Err(StoreError::NotConfigured));
            return;
        }
        let lead = match self.begin_submission() {
            Ok(lead) => lead,
            Err(rejection) => {
                tracing::info!(%rejection, "Lead submission rejected before reaching the store");
                return;
            }
        };
        let outcome = store.insert_lead(&lead).await;
        self.complete(outcome);
    }
}
