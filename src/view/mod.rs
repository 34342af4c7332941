//! Display-region abstraction over the page the controller drives.
//!
//! The surrounding page owns the elements; the controller only writes to
//! them by fixed identifier. `ViewSink` keeps that contract narrow enough
//! that the browser build targets the DOM and the native build a console.

#[cfg(feature = "no-wasm")]
pub mod console;
#[cfg(feature = "no-wasm")]
pub use console::ConsoleView;

#[cfg(feature = "wasm")]
pub mod dom;
#[cfg(feature = "wasm")]
pub use dom::DomView;

/// Output regions the page reserves for controller writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    RegisterResponse,
    LoginResponse,
    CreateCourseResponse,
    UpdateCourseResponse,
    DeleteCourseResponse,
    CourseDetail,
    CourseList,
}

impl Region {
    /// Element identifier of the region in the surrounding page.
    pub fn element_id(self) -> &'static str {
        match self {
            Region::RegisterResponse => "register-response",
            Region::LoginResponse => "login-response",
            Region::CreateCourseResponse => "create-course-response",
            Region::UpdateCourseResponse => "update-course-response",
            Region::DeleteCourseResponse => "delete-course-response",
            Region::CourseDetail => "get-course-response",
            Region::CourseList => "courses-list",
        }
    }
}

/// Page sections kept hidden until the session's role allows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Courses,
    CreateCourse,
    UpdateCourse,
    DeleteCourse,
}

impl Section {
    /// Element identifier of the section in the surrounding page.
    pub fn element_id(self) -> &'static str {
        match self {
            Section::Courses => "courses-section",
            Section::CreateCourse => "create-course-section",
            Section::UpdateCourse => "update-course-section",
            Section::DeleteCourse => "delete-course-section",
        }
    }
}

/// Sink for everything the controller shows to the user.
pub trait ViewSink {
    /// Write plain text into a region.
    fn set_text(&self, region: Region, text: &str);

    /// Replace a region's content with formatted markup. An empty string
    /// clears the region.
    fn set_markup(&self, region: Region, markup: &str);

    /// Reveal a hidden section.
    fn reveal(&self, section: Section);
}
