//! HTTP routes

use crate::app::render_document;
use axum::{
    extract::State,
    response::Html,
    routing::get,
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use stepgy_core::{ContactTransport, ContentTree, FormState, Page, VisibilityMap};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
pub struct AppState {
    pub content: Arc<ContentTree>,
    pub transport: Arc<dyn ContactTransport>,
}

impl AppState {
    pub fn new(content: ContentTree, transport: impl ContactTransport + 'static) -> Self {
        Self {
            content: Arc::new(content),
            transport: Arc::new(transport),
        }
    }

    /// Render the page with the given contact form state. Sections are
    /// emitted before their entrance; the browser flips them on scroll.
    pub fn render(&self, form: FormState) -> String {
        let page = Page::compose(&self.content, &VisibilityMap::initial());
        render_document(self.content.clone(), page, form)
    }
}

pub fn router(state: Arc<AppState>, assets_dir: &Path) -> Router {
    Router::new()
        .route("/", get(index).post(submit_contact))
        .route("/health", get(health_check))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.render(FormState::new()))
}

/// Posted contact form fields
#[derive(Debug, Deserialize)]
pub struct ContactInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// One browser form post is one submission: rebuild the form, submit it,
/// and render the page with the outcome.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Form(input): Form<ContactInput>,
) -> Html<String> {
    let mut form = FormState::with_fields(input.name, input.email, input.message);

    if let Err(err) = form.submit(state.transport.as_ref()).await {
        tracing::error!("Contact submission not started: {}", err);
    }

    Html(state.render(form))
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepgy_core::contact::{NETWORK_MESSAGE, SUBMITTING_LABEL, VALIDATION_MESSAGE};
    use stepgy_core::HttpContactTransport;
    use url::Url;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn state_for(server: &MockServer) -> Arc<AppState> {
        let base = Url::parse(&format!("{}/api", server.uri())).unwrap();
        let transport = HttpContactTransport::new(&base, None).unwrap();
        Arc::new(AppState::new(ContentTree::stepgy(), transport))
    }

    fn ana() -> ContactInput {
        ContactInput {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            message: "Hola".to_string(),
        }
    }

    #[tokio::test]
    async fn test_index_renders_every_section() {
        let server = MockServer::start().await;
        let Html(html) = index(State(state_for(&server))).await;

        for anchor in [
            "home", "about", "problem", "solution", "technology", "prototype", "team",
            "gallery", "contact",
        ] {
            assert!(html.contains(&format!("id=\"{anchor}\"")), "missing #{anchor}");
        }
        assert!(html.contains("Energía con tus pasos"));
        assert!(html.contains("Enviar mensaje"));
    }

    #[tokio::test]
    async fn test_index_form_locks_itself_on_submit() {
        let server = MockServer::start().await;
        let Html(html) = index(State(state_for(&server))).await;

        assert!(html.contains("data-state=\"idle\""));
        assert!(html.contains(&format!("data-submitting-label=\"{SUBMITTING_LABEL}\"")));
        assert!(html.contains("form.dataset.state === 'submitting'"));
        assert!(!html.contains(" disabled"));
    }

    #[tokio::test]
    async fn test_successful_submission_clears_form() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/contact"))
            .and(body_json(serde_json::json!({
                "name": "Ana",
                "email": "ana@x.com",
                "message": "Hola"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "message": "Mensaje enviado"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let Html(html) = submit_contact(State(state_for(&server)), Form(ana())).await;

        assert!(html.contains("Mensaje enviado"));
        assert!(!html.contains("ana@x.com"));
        assert!(!html.contains(" disabled"));
        assert!(html.contains("data-state=\"succeeded\""));
        assert!(html.contains("Enviar mensaje"));
    }

    #[tokio::test]
    async fn test_validation_failure_keeps_input() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/contact"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "detail": [{ "loc": ["body", "email"], "msg": "value is not a valid email" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let Html(html) = submit_contact(State(state_for(&server)), Form(ana())).await;

        assert!(html.contains(VALIDATION_MESSAGE));
        assert!(html.contains("ana@x.com"));
    }

    #[tokio::test]
    async fn test_server_detail_is_shown() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/contact"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({ "detail": "Error al guardar el mensaje" })),
            )
            .mount(&server)
            .await;

        let Html(html) = submit_contact(State(state_for(&server)), Form(ana())).await;

        assert!(html.contains("Error al guardar el mensaje"));
        assert!(!html.contains(NETWORK_MESSAGE));
    }

    #[tokio::test]
    async fn test_health_check() {
        let Json(health) = health_check().await;
        assert_eq!(health.status, "ok");
    }
}
