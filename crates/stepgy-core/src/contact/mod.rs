//! Contact form submission
//!
//! [`FormState`] owns the three contact fields and the submission
//! lifecycle:
//!
//! ```text
//! Idle ──submit──▶ Submitting ──success=true──▶ Succeeded(server message), fields cleared
//!   ▲                   │      ──success=false─▶ Failed(ServerRejected), fields kept
//!   │                   │      ──transport err─▶ Failed(Validation | NetworkOrServer), fields kept
//!   └── edits ◀── Succeeded / Failed ──submit──▶ Submitting
//! ```
//!
//! While `Submitting`, edits and further submits are refused. The site
//! also renders the inputs disabled in that state. There is no request
//! level de-duplication: two submits that race past the disabled controls
//! would reach the backend twice.

mod transport;

pub use transport::{
    contact_endpoint, ContactTransport, HttpContactTransport, TransportError, TransportResult,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const SERVER_REJECTED_MESSAGE: &str =
    "Error al enviar el mensaje. Por favor intenta nuevamente.";
pub const VALIDATION_MESSAGE: &str =
    "Por favor revisa que todos los campos estén completados correctamente.";
pub const NETWORK_MESSAGE: &str = "Error de conexión. Por favor intenta nuevamente más tarde.";
pub const SUBMITTING_LABEL: &str = "Enviando...";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("A submission is already in flight")]
    Busy,

    #[error("No submission is in flight")]
    NotSubmitting,
}

pub type ContactResult<T> = Result<T, ContactError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    /// Input `name` attribute
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Tu nombre",
            FormField::Email => "Tu email",
            FormField::Message => "Tu mensaje",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Body of `POST {base}/contact`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// 2xx body of the contact endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The server flagged the input (HTTP 422)
    ValidationError,
    /// Well-formed response with `success: false`
    ServerRejected,
    /// Transport failure, malformed response or any other status
    NetworkOrServerError,
}

impl FailureKind {
    pub fn default_message(&self) -> &'static str {
        match self {
            FailureKind::ValidationError => VALIDATION_MESSAGE,
            FailureKind::ServerRejected => SERVER_REJECTED_MESSAGE,
            FailureKind::NetworkOrServerError => NETWORK_MESSAGE,
        }
    }
}

/// A failed submission as shown to the visitor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    pub fn rejected() -> Self {
        Self {
            kind: FailureKind::ServerRejected,
            message: SERVER_REJECTED_MESSAGE.to_string(),
        }
    }

    /// A server `detail` wins, then the 422 message, then the generic one
    pub fn from_transport(err: &TransportError) -> Self {
        let kind = match err.status() {
            Some(422) => FailureKind::ValidationError,
            _ => FailureKind::NetworkOrServerError,
        };
        let message = err.detail().unwrap_or(kind.default_message()).to_string();
        Self { kind, message }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Submission {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(Failure),
}

/// Contact form fields plus submission status
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    name: String,
    email: String,
    message: String,
    submission: Submission,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idle form pre-filled with the given values
    pub fn with_fields(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            submission: Submission::Idle,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.submission, Submission::Submitting)
    }

    /// Inputs and the submit control are disabled while a request is in flight
    pub fn inputs_disabled(&self) -> bool {
        self.is_submitting()
    }

    pub fn success_message(&self) -> Option<&str> {
        match &self.submission {
            Submission::Succeeded(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.submission {
            Submission::Failed(failure) => Some(failure.message.as_str()),
            _ => None,
        }
    }

    /// Submit button text
    pub fn submit_label<'a>(&self, submit_text: &'a str) -> &'a str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            submit_text
        }
    }

    /// Replace one field's value. Refused while submitting.
    pub fn edit(&mut self, field: FormField, value: impl Into<String>) -> ContactResult<()> {
        if self.is_submitting() {
            return Err(ContactError::Busy);
        }
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
        Ok(())
    }

    /// Enter `Submitting`, clearing any earlier outcome, and return the
    /// payload to send.
    pub fn begin_submit(&mut self) -> ContactResult<ContactRequest> {
        if self.is_submitting() {
            return Err(ContactError::Busy);
        }
        self.submission = Submission::Submitting;
        Ok(ContactRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Resolve the in-flight submission with the transport outcome
    pub fn complete(
        &mut self,
        outcome: TransportResult<ContactResponse>,
    ) -> ContactResult<&Submission> {
        if !self.is_submitting() {
            return Err(ContactError::NotSubmitting);
        }

        self.submission = match outcome {
            Ok(response) if response.success => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                tracing::info!("Contact message delivered");
                Submission::Succeeded(response.message)
            }
            Ok(_) => {
                tracing::warn!("Contact endpoint rejected the message");
                Submission::Failed(Failure::rejected())
            }
            Err(err) => {
                let failure = Failure::from_transport(&err);
                tracing::warn!(kind = ?failure.kind, error = %err, "Contact submission failed");
                Submission::Failed(failure)
            }
        };

        Ok(&self.submission)
    }

    /// Run one full submission: exactly one request, no retry.
    pub async fn submit<T>(&mut self, transport: &T) -> ContactResult<&Submission>
    where
        T: ContactTransport + ?Sized,
    {
        let request = self.begin_submit()?;
        let outcome = transport.send(&request).await;
        self.complete(outcome)
    }
}
