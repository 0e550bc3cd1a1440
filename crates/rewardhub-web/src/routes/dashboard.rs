//! Dashboard route handlers.
//!
//! `/` redirects to the default dashboard; every [`Page`] route renders one
//! askama template with the page identifier as its only parameter.

use askama::Template;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use rewardhub_core::Page;

use crate::state::AppState;

// ============================================================
// TEMPLATES
// ============================================================

#[derive(Template)]
#[template(path = "dashboard_user.html")]
struct UserDashboardTemplate {
    page: &'static str,
    nav: &'static [Page],
}

#[derive(Template)]
#[template(path = "dashboard_company.html")]
struct CompanyDashboardTemplate {
    page: &'static str,
    nav: &'static [Page],
}

#[derive(Template)]
#[template(path = "dashboard_admin.html")]
struct AdminDashboardTemplate {
    page: &'static str,
    nav: &'static [Page],
}

// ============================================================
// HANDLERS
// ============================================================

/// GET / - Redirect to the default dashboard.
pub async fn index() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, Page::DEFAULT.path())]).into_response()
}

/// GET /user, /company, /admin - Render the dashboard for `page`.
pub async fn show(State(state): State<AppState>, page: Page) -> Response {
    render_page(&state, page)
}

// ============================================================
// HELPERS
// ============================================================

fn render_page(state: &AppState, page: Page) -> Response {
    let page_id = page.as_str();
    let nav: &'static [Page] = &Page::ALL;

    let rendered = match page {
        Page::User => UserDashboardTemplate { page: page_id, nav }.render(),
        Page::Company => CompanyDashboardTemplate { page: page_id, nav }.render(),
        Page::Admin => AdminDashboardTemplate { page: page_id, nav }.render(),
    };

    match rendered {
        Ok(html) => Html(html).into_response(),
        Err(e) => render_error(state, page, &e),
    }
}

/// Build the 500 response for a failed render.
fn render_error(state: &AppState, page: Page, err: &askama::Error) -> Response {
    tracing::error!(page = %page, template = page.template(), error = %err, "Template render failed");

    let body = if state.debug {
        format!("Template error in {}: {}", page.template(), err)
    } else {
        "Internal Server Error".to_string()
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_index_redirects_with_found() {
        let response = index().await;
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[header::LOCATION], "/user");
    }

    #[tokio::test]
    async fn test_render_marks_active_page() {
        let response = render_page(&AppState::default(), Page::Company);
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert!(body.contains(r#"data-page="company""#));
        assert!(body.contains(r#"id="switch-company" class="view-switch active""#));
        assert!(body.contains(r#"id="switch-user" class="view-switch""#));
    }

    #[tokio::test]
    async fn test_render_error_hides_details_outside_debug() {
        let err = askama::Error::Fmt(std::fmt::Error);

        let response = render_error(&AppState { debug: false }, Page::Admin, &err);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, "Internal Server Error");

        let response = render_error(&AppState { debug: true }, Page::Admin, &err);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_string(response).await.starts_with("Template error in dashboard_admin.html"));
    }
}
