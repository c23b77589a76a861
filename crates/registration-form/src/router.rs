// File: src/router.rs
// Purpose: Entry/confirmation routing driven by form events

use registration_validation::FieldKey;
use tracing::debug;

use crate::bundle::SubmissionBundle;
use crate::event::FormEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The registration form
    Entry,
    /// Summary shown after a successful submission
    Confirmation,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Entry => "/",
            Route::Confirmation => "/success",
        }
    }

    /// Parse a request path, tolerating a trailing slash
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Route::Entry),
            "/success" => Some(Route::Confirmation),
            _ => None,
        }
    }
}

/// Tracks the current view and the state carried into it
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Route,
    state: Option<SubmissionBundle>,
    focus: Option<FieldKey>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            current: Route::Entry,
            state: None,
            focus: None,
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// Bundle handed to the confirmation view, if one is in flight
    pub fn state(&self) -> Option<&SubmissionBundle> {
        self.state.as_ref()
    }

    /// Field the entry view should focus after a rejected submit
    pub fn focus_target(&self) -> Option<FieldKey> {
        self.focus
    }

    /// Hand the pending focus request to the view, clearing it
    ///
    /// Each rejected submit moves focus once; later renders leave the
    /// cursor where the user put it.
    pub fn take_focus(&mut self) -> Option<FieldKey> {
        self.focus.take()
    }

    /// React to an event from the form controller
    pub fn dispatch(&mut self, event: FormEvent) -> Route {
        match event {
            FormEvent::SubmissionCompleted(bundle) => {
                self.focus = None;
                self.state = Some(bundle);
                self.current = Route::Confirmation;
                debug!(path = Route::Confirmation.path(), "navigated with submission");
            }
            FormEvent::SubmissionRejected { focus, .. } => {
                self.focus = Some(focus);
                self.current = Route::Entry;
            }
        }
        self.current
    }

    /// Direct navigation to a path; carries no state
    ///
    /// The confirmation view has nothing to show without a bundle, so it
    /// redirects to the entry view. Unknown paths leave the route unchanged.
    pub fn visit(&mut self, path: &str) -> Option<Route> {
        let route = Route::from_path(path)?;
        self.state = None;
        self.focus = None;
        self.current = match route {
            Route::Confirmation => {
                debug!(from = path, to = Route::Entry.path(), "redirect: no submission state");
                Route::Entry
            }
            Route::Entry => Route::Entry,
        };
        Some(self.current)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::from_path("/"), Some(Route::Entry));
        assert_eq!(Route::from_path(""), Some(Route::Entry));
        assert_eq!(Route::from_path("/success"), Some(Route::Confirmation));
        assert_eq!(Route::from_path("/success/"), Some(Route::Confirmation));
        assert_eq!(Route::from_path("/other"), None);
        for route in [Route::Entry, Route::Confirmation] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn test_direct_visit_to_confirmation_redirects() {
        let mut nav = Navigator::new();
        assert_eq!(nav.visit("/success"), Some(Route::Entry));
        assert_eq!(nav.current(), Route::Entry);
        assert!(nav.state().is_none());
    }

    #[test]
    fn test_focus_is_taken_once() {
        let mut nav = Navigator::new();
        let route = nav.dispatch(FormEvent::SubmissionRejected {
            focus: FieldKey::Pan,
            errors: Default::default(),
        });
        assert_eq!(route, Route::Entry);
        assert_eq!(nav.focus_target(), Some(FieldKey::Pan));

        assert_eq!(nav.take_focus(), Some(FieldKey::Pan));
        assert_eq!(nav.take_focus(), None);
        assert_eq!(nav.focus_target(), None);
    }

    #[test]
    fn test_unknown_path_keeps_route() {
        let mut nav = Navigator::new();
        assert_eq!(nav.visit("/admin"), None);
        assert_eq!(nav.current(), Route::Entry);
    }
}
