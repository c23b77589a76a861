// File: src/app.rs
// Purpose: Wires one form session to the router

use registration_validation::FieldKey;
use tracing::debug;

use crate::catalog::CatalogError;
use crate::config::FormConfig;
use crate::confirmation::{ConfirmationPage, ConfirmationView};
use crate::controller::FormController;
use crate::error::FormError;
use crate::router::{Navigator, Route};

/// What the presentation layer should render right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page<'a> {
    /// Pending focus is collected separately with `RegistrationApp::take_focus`
    Form { title: &'a str },
    Confirmation(ConfirmationPage),
}

/// Entry view, confirmation view, and the navigation between them
#[derive(Debug, Clone)]
pub struct RegistrationApp {
    title: String,
    form: FormController,
    navigator: Navigator,
}

impl RegistrationApp {
    pub fn new(config: &FormConfig) -> Result<Self, CatalogError> {
        Ok(Self {
            title: config.form.title.clone(),
            form: FormController::new(config.catalog()?),
            navigator: Navigator::new(),
        })
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormController {
        &mut self.form
    }

    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    /// Submit the form and route on the resulting event
    pub fn submit(&mut self) -> Result<Route, FormError> {
        let event = self.form.submit()?;
        Ok(self.navigator.dispatch(event))
    }

    /// Direct navigation; landing on the entry view starts a new form session
    pub fn visit(&mut self, path: &str) -> Option<Route> {
        let route = self.navigator.visit(path)?;
        if route == Route::Entry {
            self.form.reset();
        }
        Some(route)
    }

    /// Field to focus after a rejected submit; `None` once it has been taken
    pub fn take_focus(&mut self) -> Option<FieldKey> {
        let focus = self.navigator.take_focus();
        if let Some(key) = focus {
            debug!(field = %key, "focus handed to view");
        }
        focus
    }

    pub fn current_page(&self) -> Page<'_> {
        match self.navigator.current() {
            Route::Entry => Page::Form { title: &self.title },
            Route::Confirmation => {
                Page::Confirmation(ConfirmationView::open(self.navigator.state()))
            }
        }
    }
}

impl Default for RegistrationApp {
    fn default() -> Self {
        Self {
            title: FormConfig::default().form.title,
            form: FormController::default(),
            navigator: Navigator::new(),
        }
    }
}
