//! Application module - the session-bound form controller
//!
//! Pairs a `RequestApi` implementation with a `ViewSink`, carries the
//! in-memory session across requests, and turns response bodies into
//! region writes. Platform-specific form wiring lives in the WASM
//! submodule; the native binary drives the controller from a console loop.

#[cfg(feature = "wasm")]
pub mod wasm;

use std::cell::RefCell;

use serde_json::Value;

use crate::error::{ErrorKind, Result};
use crate::interface::RequestApi;
use crate::model::dtos::{CourseFields, LoginParams, RegisterParams};
use crate::model::structs::{Identity, LoginOutcome, Role, ServerMessage, Session};
use crate::view::{Region, Section, ViewSink};

/// Binds the page's forms to the backend and carries the session between
/// requests. One instance per page load.
///
/// Operations never surface transport failures to the user: they are
/// logged and the display left untouched. The only user-visible failure
/// is a login body without a token.
pub struct FormController<A, V> {
    api: A,
    view: V,
    session: RefCell<Session>,
}

impl<A, V> FormController<A, V>
where
    A: RequestApi,
    V: ViewSink,
{
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            session: RefCell::new(Session::default()),
        }
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.session.borrow().clone()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn token(&self) -> Option<String> {
        self.session.borrow().token.clone()
    }

    /// Token for a gated operation. The gated forms stay hidden until
    /// login, so a missing token only happens when the controller is
    /// driven directly; the operation is skipped with a warning instead
    /// of sending a bearer header with no token behind it.
    fn require_token(&self, operation: &str) -> Option<String> {
        let token = self.token();
        if token.is_none() {
            log::warn!("{operation} skipped: not logged in");
        }
        token
    }

    /// Register an account with a requested role and show the server's
    /// answer. Leaves the session untouched.
    pub async fn register(&self, username: &str, password: &str, role: &str) {
        let params = RegisterParams {
            username: username.to_string(),
            password: password.to_string(),
            role: role.to_string(),
        };

        match self.api.register(params).await {
            Ok(body) => self.view.set_text(
                Region::RegisterResponse,
                &message_or(&body, "User registered successfully"),
            ),
            Err(e) => log::error!("register request failed: {e}"),
        }
    }

    /// Log in and, on success, store the session, reveal the sections the
    /// role allows, and load the course list.
    pub async fn login(&self, username: &str, password: &str) {
        let params = LoginParams {
            username: username.to_string(),
            password: password.to_string(),
        };

        let body = match self.api.login(params).await {
            Ok(body) => body,
            Err(e) => {
                log::error!("login request failed: {e}");
                return;
            }
        };

        let outcome: LoginOutcome = from_value_or_default(&body);
        let Some(token) = outcome.access_token else {
            // Body arrived but carries no token: the one failure the page
            // reports. A previously established session stays as it was.
            self.view.set_text(Region::LoginResponse, "Login failed");
            return;
        };

        let role = outcome.role.as_deref().map(Role::parse);
        {
            let mut session = self.session.borrow_mut();
            session.token = Some(token);
            session.role = role.clone();
        }

        self.view.set_text(Region::LoginResponse, "Login successful");
        self.view.reveal(Section::Courses);
        if let Some(role) = &role {
            if role.can_manage_courses() {
                self.view.reveal(Section::CreateCourse);
                self.view.reveal(Section::UpdateCourse);
            }
            if role.can_delete_courses() {
                self.view.reveal(Section::DeleteCourse);
            }
        }

        self.refresh_course_list().await;
    }

    /// Create a course, show the server's answer, and reload the list.
    pub async fn create_course(&self, fields: CourseFields) {
        let Some(token) = self.require_token("create course") else {
            return;
        };

        match self.api.create_course(&token, &fields).await {
            Ok(body) => {
                self.view.set_text(
                    Region::CreateCourseResponse,
                    &message_or(&body, "Course created successfully"),
                );
                // The list reloads whether or not the server accepted the
                // course; only a transport failure skips it.
                self.refresh_course_list().await;
            }
            Err(e) => log::error!("create course request failed: {e}"),
        }
    }

    /// Replace a course wholesale, show the server's answer, and reload
    /// the list.
    pub async fn update_course(&self, course_id: &str, fields: CourseFields) {
        let Some(token) = self.require_token("update course") else {
            return;
        };

        match self.api.update_course(&token, course_id, &fields).await {
            Ok(body) => {
                self.view.set_text(
                    Region::UpdateCourseResponse,
                    &message_or(&body, "Course updated successfully"),
                );
                self.refresh_course_list().await;
            }
            Err(e) => log::error!("update course request failed: {e}"),
        }
    }

    /// Delete a course, show the server's answer, and reload the list.
    pub async fn delete_course(&self, course_id: &str) {
        let Some(token) = self.require_token("delete course") else {
            return;
        };

        match self.api.delete_course(&token, course_id).await {
            Ok(body) => {
                self.view.set_text(
                    Region::DeleteCourseResponse,
                    &message_or(&body, "Course deleted successfully"),
                );
                self.refresh_course_list().await;
            }
            Err(e) => log::error!("delete course request failed: {e}"),
        }
    }

    /// Fetch one course and render it into the detail region. Fields the
    /// body lacks render as empty text, not as an error.
    pub async fn show_course(&self, course_id: &str) {
        let Some(token) = self.require_token("get course") else {
            return;
        };

        match self.api.get_course(&token, course_id).await {
            Ok(body) => self
                .view
                .set_markup(Region::CourseDetail, &course_markup(&body)),
            Err(e) => log::error!("get course request failed: {e}"),
        }
    }

    /// Reload the course list region: clear it, then render one block per
    /// record in arrival order. A non-array body renders as an empty list.
    pub async fn refresh_course_list(&self) {
        let Some(token) = self.require_token("course list") else {
            return;
        };

        match self.api.list_courses(&token).await {
            Ok(body) => {
                let blocks: Vec<String> = body
                    .as_array()
                    .map(|courses| courses.iter().map(course_block).collect())
                    .unwrap_or_default();
                self.view.set_markup(Region::CourseList, &blocks.join("\n"));
            }
            Err(e) => log::error!("course list request failed: {e}"),
        }
    }

    /// Ask the backend who the current token belongs to. Not wired to any
    /// form; the CLI uses it to echo the authenticated identity.
    pub async fn verify_session(&self) -> Result<Identity> {
        let Some(token) = self.token() else {
            return Err(ErrorKind::SessionError("not logged in".to_string()).into());
        };

        let body = self.api.whoami(&token).await?;
        Ok(from_value_or_default(&body["logged_in_as"]))
    }
}

/// Markup for one course record, shaped like the page's detail template.
fn course_markup(course: &Value) -> String {
    format!(
        "<h3>{}</h3>\n\
         <p>{}</p>\n\
         <p><strong>Instructor:</strong> {}</p>\n\
         <p><strong>Duration:</strong> {} hours</p>\n\
         <p><strong>Enrollment limit:</strong> {}</p>",
        field_text(&course["title"]),
        field_text(&course["description"]),
        field_text(&course["instructor"]),
        field_text(&course["duration"]),
        field_text(&course["enrollment_limit"]),
    )
}

fn course_block(course: &Value) -> String {
    format!("<div>\n{}\n</div>", course_markup(course))
}

/// Text for a rendered field: strings verbatim, numbers formatted,
/// anything else (including a missing field) as empty text.
fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// The `msg` field of a response body, or the fallback the page shows.
fn message_or(body: &Value, fallback: &str) -> String {
    let message: ServerMessage = from_value_or_default(body);
    message.msg.unwrap_or_else(|| fallback.to_string())
}

/// Deserialize a structural shape, degrading to defaults when the body
/// does not match.
fn from_value_or_default<T>(body: &Value) -> T
where
    T: Default + serde::de::DeserializeOwned,
{
    serde_json::from_value(body.clone()).unwrap_or_else(|e| {
        log::debug!("unexpected response shape: {e}");
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{course_markup, field_text, message_or};

    #[test]
    fn field_text_covers_the_wire_types() {
        assert_eq!(field_text(&json!("Rust")), "Rust");
        assert_eq!(field_text(&json!(40)), "40");
        assert_eq!(field_text(&json!(null)), "");
    }

    #[test]
    fn course_markup_renders_missing_fields_empty() {
        let markup = course_markup(&json!({"title": "Rust"}));
        assert!(markup.contains("<h3>Rust</h3>"));
        assert!(markup.contains("<strong>Instructor:</strong> </p>"));
    }

    #[test]
    fn message_falls_back_when_body_has_no_msg() {
        assert_eq!(message_or(&json!({"msg": "taken"}), "ok"), "taken");
        assert_eq!(message_or(&json!({}), "ok"), "ok");
        // validation-error bodies keyed by field name also fall back
        assert_eq!(message_or(&json!({"title": ["required"]}), "ok"), "ok");
    }
}
