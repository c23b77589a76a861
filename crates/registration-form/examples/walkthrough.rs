//! Drives one form session from the command line and prints each view.
//!
//! ```sh
//! cargo run -p registration-form --example walkthrough -- config/registration.toml
//! ```

use registration_form::{ConfirmationPage, FormConfig, FormEvent, Page, RegistrationApp};
use registration_validation::FieldKey;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => FormConfig::load(path)?,
        None => FormConfig::load_default()?,
    };
    let mut app = RegistrationApp::new(&config)?;

    let form = app.form_mut();
    form.set_field(FieldKey::FirstName, "Asha");
    form.touch_field(FieldKey::FirstName, "Asha");
    form.set_field(FieldKey::Email, "asha@example");
    form.touch_field(FieldKey::Email, "asha@example");

    let countries: Vec<String> = form.catalog().countries().map(str::to_string).collect();
    println!("Countries: {}", countries.join(", "));
    if let Some(first) = countries.into_iter().next() {
        form.select_country(first)?;
        if let Some(cities) = form.city_options() {
            println!("Cities: {}", cities.join(", "));
        }
    }

    if let FormEvent::SubmissionRejected { focus, errors } = form.submit()? {
        println!("Submit blocked, focus {}:", focus.label());
        for err in errors.invalid() {
            println!("  {}: {}", err.field.label(), err);
        }
    }

    let form = app.form_mut();
    for (key, value) in [
        (FieldKey::LastName, "Rao"),
        (FieldKey::Username, "asha_rao"),
        (FieldKey::Email, "asha@example.com"),
        (FieldKey::Password, "pass1234"),
        (FieldKey::PhoneCode, "+91"),
        (FieldKey::PhoneNumber, "9876543210"),
        (FieldKey::Pan, "ABCDE1234F"),
        (FieldKey::Aadhar, "123456789012"),
    ] {
        form.set_field(key, value);
    }
    let city = form.city_options().and_then(|c| c.first()).cloned();
    if let Some(city) = city {
        form.select_city(city)?;
    }

    app.submit()?;
    match app.current_page() {
        Page::Confirmation(ConfirmationPage::Summary { heading, lines }) => {
            println!("{}", heading);
            for line in lines {
                println!("  {}: {}", line.label, line.value);
            }
        }
        other => println!("Still on {:?}", other),
    }

    Ok(())
}
