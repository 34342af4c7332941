//! Browser form wiring for the WASM build
//!
//! Installs submit handlers on the page's fixed form ids and forwards each
//! submission to a shared `FormController` over the fetch-based client.

use std::future::Future;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Event;

use crate::client::gloo::WasmClient;
use crate::config::ApiConfig;
use crate::interface::HttpClient;
use crate::model::dtos::CourseFields;
use crate::view::dom::{element_by_id, field_value};
use crate::view::DomView;

use super::FormController;

type PageController = FormController<WasmClient, DomView>;

const CREATE_FIELD_IDS: [&str; 5] = [
    "course-title",
    "course-description",
    "course-instructor",
    "course-duration",
    "course-enrollment-limit",
];

const UPDATE_FIELD_IDS: [&str; 5] = [
    "update-course-title",
    "update-course-description",
    "update-course-instructor",
    "update-course-duration",
    "update-course-enrollment-limit",
];

/// Entry point: set up logging and bind every form on the page.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let api = WasmClient::new(ApiConfig::same_origin())
        .await
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let controller = Rc::new(FormController::new(api, DomView::new()));

    bind_forms(&controller)?;
    log::info!("course forms bound");
    Ok(())
}

fn bind_forms(controller: &Rc<PageController>) -> Result<(), JsValue> {
    on_submit("register-form", controller, |ctrl| async move {
        ctrl.register(
            &field_value("register-username"),
            &field_value("register-password"),
            &field_value("role"),
        )
        .await;
    })?;

    on_submit("login-form", controller, |ctrl| async move {
        ctrl.login(
            &field_value("login-username"),
            &field_value("login-password"),
        )
        .await;
    })?;

    on_submit("create-course-form", controller, |ctrl| async move {
        ctrl.create_course(course_fields_from(&CREATE_FIELD_IDS)).await;
    })?;

    on_submit("update-course-form", controller, |ctrl| async move {
        let course_id = field_value("update-course-id");
        ctrl.update_course(&course_id, course_fields_from(&UPDATE_FIELD_IDS))
            .await;
    })?;

    on_submit("delete-course-form", controller, |ctrl| async move {
        ctrl.delete_course(&field_value("delete-course-id")).await;
    })?;

    on_submit("get-course-form", controller, |ctrl| async move {
        ctrl.show_course(&field_value("get-course-id")).await;
    })?;

    Ok(())
}

/// Attach a submit handler to a form, swallowing the default page reload.
fn on_submit<F, Fut>(
    form_id: &str,
    controller: &Rc<PageController>,
    handler: F,
) -> Result<(), JsValue>
where
    F: Fn(Rc<PageController>) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let Some(form) = element_by_id(form_id) else {
        return Err(JsValue::from_str(&format!("missing form #{form_id}")));
    };

    let controller = Rc::clone(controller);
    let closure = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        spawn_local(handler(Rc::clone(&controller)));
    }) as Box<dyn FnMut(Event)>);

    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    // The browser drops the listener with its element; forgetting the
    // closure keeps it alive exactly that long.
    closure.forget();
    Ok(())
}

/// Read a full course payload from a form's input ids. The page does no
/// client-side validation; unparseable numbers fall back to zero.
fn course_fields_from(ids: &[&str; 5]) -> CourseFields {
    CourseFields {
        title: field_value(ids[0]),
        description: field_value(ids[1]),
        instructor: field_value(ids[2]),
        duration: field_value(ids[3]).trim().parse().unwrap_or_default(),
        enrollment_limit: field_value(ids[4]).trim().parse().unwrap_or_default(),
    }
}
