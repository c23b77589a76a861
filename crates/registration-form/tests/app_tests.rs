//! End-to-end flow through the entry and confirmation views

use pretty_assertions::assert_eq;
use registration_form::*;
use registration_validation::FieldKey;
use rstest::rstest;

fn fill(app: &mut RegistrationApp) {
    let form = app.form_mut();
    for (name, value) in [
        ("firstName", "Asha"),
        ("lastName", "Rao"),
        ("username", "asha_rao"),
        ("email", "asha@rao.in"),
        ("password", "pass1234"),
        ("phoneCode", "+91"),
        ("phoneNumber", "9876543210"),
        ("pan", "ABCDE1234F"),
        ("aadhar", "123456789012"),
    ] {
        form.set_field_by_name(name, value).unwrap();
    }
    form.select_country("India").unwrap();
    form.select_city("Chennai").unwrap();
}

#[test]
fn test_successful_submit_shows_summary() {
    let mut app = RegistrationApp::default();
    fill(&mut app);

    assert_eq!(app.submit().unwrap(), Route::Confirmation);

    let Page::Confirmation(ConfirmationPage::Summary { heading, lines }) = app.current_page() else {
        panic!("expected summary page");
    };
    assert_eq!(heading, "Form Submitted Successfully!");
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0].label, "First Name");
    assert_eq!(lines[0].value, "Asha");
    assert_eq!(lines[5].label, "Phone Code");
    assert_eq!(lines[8].field, FieldKey::City);
    assert_eq!(lines[8].value, "Chennai");
}

#[test]
fn test_rejected_submit_stays_on_form_with_focus() {
    let mut app = RegistrationApp::default();
    fill(&mut app);
    app.form_mut().set_field(FieldKey::Email, "asha@rao");

    assert_eq!(app.submit().unwrap(), Route::Entry);
    assert_eq!(
        app.current_page(),
        Page::Form {
            title: "Internship Form"
        }
    );
    assert_eq!(app.take_focus(), Some(FieldKey::Email));
}

#[test]
fn test_focus_moves_once_per_rejected_submit() {
    let mut app = RegistrationApp::default();
    fill(&mut app);
    app.form_mut().set_field(FieldKey::Pan, "abcde1234f");

    app.submit().unwrap();
    assert_eq!(app.take_focus(), Some(FieldKey::Pan));

    // Re-rendering after the user moved on does not steal focus back
    assert_eq!(app.take_focus(), None);
    assert!(matches!(app.current_page(), Page::Form { .. }));

    // A second rejected submit asks again
    app.form_mut().set_field(FieldKey::Email, "asha@rao");
    app.submit().unwrap();
    assert_eq!(app.take_focus(), Some(FieldKey::Email));
}

#[rstest]
#[case("/success")]
#[case("/success/")]
fn test_direct_visit_to_confirmation_redirects(#[case] path: &str) {
    let mut app = RegistrationApp::default();
    assert_eq!(app.visit(path), Some(Route::Entry));
    assert!(matches!(app.current_page(), Page::Form { .. }));
    assert_eq!(app.take_focus(), None);
}

#[test]
fn test_leaving_confirmation_starts_new_session() {
    let mut app = RegistrationApp::default();
    fill(&mut app);
    app.submit().unwrap();

    assert_eq!(app.visit("/"), Some(Route::Entry));
    assert_eq!(app.form().phase(), FormPhase::Editing);
    assert_eq!(app.form().value(FieldKey::FirstName), "");

    // The old bundle is gone; revisiting the summary redirects
    assert_eq!(app.visit("/success"), Some(Route::Entry));
}

#[test]
fn test_app_from_config_uses_configured_catalog() {
    let config: FormConfig = toml::from_str(
        r#"
        [form]
        title = "Volunteer Signup"

        [[countries]]
        name = "Japan"
        cities = ["Tokyo", "Osaka"]
        "#,
    )
    .unwrap();
    let mut app = RegistrationApp::new(&config).unwrap();

    app.form_mut().select_country("Japan").unwrap();
    assert_eq!(app.form().city_options().map(|c| c.len()), Some(2));
    let err = app.form_mut().select_country("India").unwrap_err();
    assert!(matches!(err, FormError::CountryNotOffered { .. }));
    assert_eq!(app.form().value(FieldKey::Country), "Japan");
    app.form_mut().select_country("").unwrap();
    assert!(!app.form().is_city_enabled());
    assert!(matches!(
        app.current_page(),
        Page::Form { title: "Volunteer Signup", .. }
    ));
}
