use crate::{Catalog, Session};

/// Something that feeds user actions into a session.
///
/// A backend receives the catalog and the session to mutate, and decides how
/// the user is asked (a browser, a script, a terminal). It reports failure or
/// cancellation through its error type.
pub trait SurveyBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Collect answers into the session.
    fn collect(&self, catalog: &Catalog, session: &mut Session) -> Result<(), Self::Error>;
}

/// Presents a session.
///
/// Rendering is a pure function of the catalog and the current session
/// state; it never mutates either.
pub trait Renderer {
    /// What the renderer produces (an HTML page, a text report, ...).
    type Output;

    fn render(&self, catalog: &Catalog, session: &Session) -> Self::Output;
}
