use askama::Template;
use axum::response::IntoResponse;
use uuid::Uuid;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Identifies this rendered form for the loading guard.
    pub form_id: Uuid,
    pub prompt: String,
    /// Gateway body, shown as-is.
    pub response: Option<String>,
    pub alert: Option<&'static str>,
}

impl IndexTemplate {
    pub fn blank() -> Self {
        Self {
            form_id: Uuid::new_v4(),
            prompt: String::new(),
            response: None,
            alert: None,
        }
    }
}

pub async fn index() -> impl IntoResponse {
    IndexTemplate::blank()
}

pub async fn health_check() -> &'static str {
    "OK"
}
