use std::fmt::{self, Write as _};

use super::{badge, escape_html, section_title};
use crate::registry::{
    CrewSizeBand, DisasterType, FamilyFields, MobilizationWindow, ProviderFields, Route,
    SignupForm, SignupRole,
};
use crate::web::form::{field, SignupIntent};

const FORM_ID: &str = "signup-form";

pub(super) fn render(html: &mut String, form: &SignupForm, notice: Option<&str>) -> fmt::Result {
    let role = form.role();
    html.push_str(r#"<section class="page two-column"><div class="primary">"#);
    section_title(
        html,
        Some("Sign up"),
        "Get listed or apply for verification",
        Some(
            "VRN is built to help families find capable help quickly. Providers can apply to be listed and optionally pursue verification badges based on documented readiness indicators.",
        ),
    )?;

    html.push_str(r#"<div class="card"><div class="card-header"><div>"#);
    let (heading, intro) = match role {
        SignupRole::Provider => (
            "Provider onboarding application",
            "Complete the application below. We’ll follow up with next steps for documentation review.",
        ),
        SignupRole::Family => (
            "Family updates",
            "Share your email and location so we can notify you when providers are added in your area.",
        ),
    };
    write!(html, r#"<h2>{heading}</h2><p class="muted">{intro}</p></div><div class="badges">"#)?;
    badge(html, "Secure later (MVP)");
    badge(html, "Demo intake");
    html.push_str("</div></div>\n");

    if form.is_submitted() {
        thank_you(html, form)?;
    } else {
        editing_form(html, form, notice)?;
    }
    html.push_str("</div></div>\n");

    html.push_str(r#"<aside class="secondary">"#);
    role_chooser(html, form)?;
    writeln!(
        html,
        r#"<div class="card"><h2>What verification means</h2><p class="muted">Verification confirms documented readiness indicators at the time of review. It is not an endorsement, guarantee, or a promise of availability.</p><a class="link" href="{}">Read our standards →</a></div>"#,
        Route::About.path()
    )?;
    html.push_str("</aside></section>\n");
    Ok(())
}

fn role_chooser(html: &mut String, form: &SignupForm) -> fmt::Result {
    html.push_str(r#"<div class="card"><h2>Choose your path</h2><div class="role-choices">"#);
    for (role, blurb) in [
        (SignupRole::Provider, "Apply to join the registry"),
        (SignupRole::Family, "Get updates when new providers are added"),
    ] {
        let selected = form.role() == role;
        write!(
            html,
            r#"<button type="submit" form="{FORM_ID}" name="{}" value="{}" formnovalidate class="role-choice{}" aria-pressed="{}"{}><strong>{}</strong><span>{}</span></button>"#,
            field::INTENT,
            SignupIntent::SwitchRole(role).as_value(),
            if selected { " selected" } else { "" },
            selected,
            if form.is_submitted() { " disabled" } else { "" },
            role.label(),
            blurb
        )?;
    }
    html.push_str("</div></div>\n");
    Ok(())
}

fn editing_form(html: &mut String, form: &SignupForm, notice: Option<&str>) -> fmt::Result {
    writeln!(
        html,
        r#"<form id="{FORM_ID}" class="signup" method="post" action="{}">"#,
        Route::Signup.path()
    )?;
    hidden(html, field::ROLE, form.role().as_str())?;

    if let Some(notice) = notice {
        write!(
            html,
            r#"<div class="notice" role="alert">{}</div>"#,
            escape_html(notice)
        )?;
    }

    match form.role() {
        SignupRole::Provider => {
            provider_inputs(html, form.provider())?;
            family_hidden(html, form.family())?;
        }
        SignupRole::Family => {
            family_inputs(html, form.family())?;
            provider_hidden(html, form.provider())?;
        }
    }

    write!(
        html,
        r#"<button type="submit" class="button primary" name="{}" value="{}">Submit →</button>"#,
        field::INTENT,
        SignupIntent::Submit.as_value()
    )?;
    html.push_str(
        r#"<p class="fineprint">For production, connect to a secure database and include your full Provider Participation Agreement.</p>"#,
    );
    html.push_str("</form>\n");
    Ok(())
}

fn provider_inputs(html: &mut String, provider: &ProviderFields) -> fmt::Result {
    html.push_str(r#"<div class="field-row">"#);
    text_input(html, "Company name", field::COMPANY, &provider.company, "Your legal business name", "text")?;
    text_input(html, "HQ location (City, State)", field::HQ_LOCATION, &provider.hq_location, "e.g., Suffolk, VA", "text")?;
    html.push_str(r#"</div><div class="field-row">"#);
    text_input(html, "Primary contact name", field::CONTACT_NAME, &provider.contact_name, "First + last name", "text")?;
    text_input(html, "Phone", field::PHONE, &provider.phone, "(###) ###-####", "tel")?;
    html.push_str("</div>");
    text_input(html, "Email", field::EMAIL, &provider.email, "name@company.com", "email")?;

    html.push_str(r#"<div class="field-row">"#);
    select(
        html,
        "Typical mobilization window",
        field::MOBILIZATION_WINDOW,
        MobilizationWindow::ALL.iter().map(|window| window.label()),
        provider.mobilization_window.label(),
    )?;
    select(
        html,
        "Crew capacity",
        field::CREW_SIZE_BAND,
        CrewSizeBand::ALL.iter().map(|band| band.label()),
        provider.crew_size_band.label(),
    )?;
    html.push_str("</div>");

    html.push_str(r#"<fieldset class="chips"><legend>Disaster types served</legend>"#);
    for kind in DisasterType::servable() {
        let checked = if provider.disaster_types.contains(&kind) {
            " checked"
        } else {
            ""
        };
        write!(
            html,
            r#"<label class="chip"><input type="checkbox" name="{}" value="{2}"{1}><span>{2}</span></label>"#,
            field::DISASTER_TYPE,
            checked,
            escape_html(kind.label())
        )?;
    }
    html.push_str(r#"<p class="fineprint">Select all that apply.</p></fieldset>"#);

    text_input(
        html,
        "Regions served",
        field::REGIONS_SERVED,
        &provider.regions_served,
        "States/regions (e.g., VA, NC, SC; Mid-Atlantic)",
        "text",
    )?;

    html.push_str(r#"<div class="acknowledgements">"#);
    checkbox(
        html,
        field::INSURANCE_ACKNOWLEDGED,
        provider.insurance_acknowledged,
        "I confirm we maintain appropriate insurance and will provide a Certificate of Insurance upon request.",
    )?;
    checkbox(
        html,
        field::ATTESTATION_ACCEPTED,
        provider.attestation_accepted,
        "I certify the information provided is accurate to the best of my knowledge and understand that VRN verification reflects documented readiness indicators at the time of review and is not a performance guarantee.",
    )?;
    html.push_str("</div>\n");
    Ok(())
}

fn family_inputs(html: &mut String, family: &FamilyFields) -> fmt::Result {
    text_input(html, "Email", field::FAMILY_EMAIL, &family.email, "you@example.com", "email")?;
    text_input(html, "Location", field::FAMILY_LOCATION, &family.location, "City, State", "text")?;
    html.push_str(
        r#"<p class="fineprint">We’ll only email you when providers are added or updated in your area.</p>"#,
    );
    Ok(())
}

fn thank_you(html: &mut String, form: &SignupForm) -> fmt::Result {
    let next_steps = match form.role() {
        SignupRole::Provider => {
            "Next: we’ll request supporting documents (insurance COI, relevant licenses/certs, and a brief capabilities summary). Once reviewed, we’ll publish your listing and apply any earned verification badges."
        }
        SignupRole::Family => {
            "You’re subscribed for local updates. We’ll send a note when providers are added or updated in your area."
        }
    };
    write!(
        html,
        r#"<div class="thank-you"><h3>Thank you, we received your submission</h3><p>{next_steps}</p>"#
    )?;

    writeln!(
        html,
        r#"<form id="{FORM_ID}" method="post" action="{}">"#,
        Route::Signup.path()
    )?;
    hidden(html, field::ROLE, form.role().as_str())?;
    hidden(html, field::PHASE, "submitted")?;
    provider_hidden(html, form.provider())?;
    family_hidden(html, form.family())?;
    for (intent, label, class) in [
        (SignupIntent::ReturnToSearch, "Return to Search", "button primary"),
        (SignupIntent::SubmitAnother, "Submit another", "button"),
    ] {
        write!(
            html,
            r#"<button type="submit" class="{class}" name="{}" value="{}">{label}</button>"#,
            field::INTENT,
            intent.as_value()
        )?;
    }
    html.push_str("</form></div>\n");
    Ok(())
}

fn provider_hidden(html: &mut String, provider: &ProviderFields) -> fmt::Result {
    hidden(html, field::COMPANY, &provider.company)?;
    hidden(html, field::CONTACT_NAME, &provider.contact_name)?;
    hidden(html, field::EMAIL, &provider.email)?;
    hidden(html, field::PHONE, &provider.phone)?;
    hidden(html, field::HQ_LOCATION, &provider.hq_location)?;
    for kind in &provider.disaster_types {
        hidden(html, field::DISASTER_TYPE, kind.label())?;
    }
    hidden(html, field::MOBILIZATION_WINDOW, provider.mobilization_window.label())?;
    hidden(html, field::CREW_SIZE_BAND, provider.crew_size_band.label())?;
    hidden(html, field::REGIONS_SERVED, &provider.regions_served)?;
    if provider.insurance_acknowledged {
        hidden(html, field::INSURANCE_ACKNOWLEDGED, "on")?;
    }
    if provider.attestation_accepted {
        hidden(html, field::ATTESTATION_ACCEPTED, "on")?;
    }
    Ok(())
}

fn family_hidden(html: &mut String, family: &FamilyFields) -> fmt::Result {
    hidden(html, field::FAMILY_EMAIL, &family.email)?;
    hidden(html, field::FAMILY_LOCATION, &family.location)
}

fn hidden(html: &mut String, name: &str, value: &str) -> fmt::Result {
    writeln!(
        html,
        r#"<input type="hidden" name="{name}" value="{}">"#,
        escape_html(value)
    )
}

fn text_input(
    html: &mut String,
    label: &str,
    name: &str,
    value: &str,
    placeholder: &str,
    input_type: &str,
) -> fmt::Result {
    writeln!(
        html,
        r#"<label><span>{label}</span><input type="{input_type}" name="{name}" value="{}" placeholder="{}" required></label>"#,
        escape_html(value),
        escape_html(placeholder)
    )
}

fn select<'a>(
    html: &mut String,
    label: &str,
    name: &str,
    options: impl Iterator<Item = &'a str>,
    current: &str,
) -> fmt::Result {
    write!(html, r#"<label><span>{label}</span><select name="{name}">"#)?;
    for option in options {
        let selected = if option == current { " selected" } else { "" };
        write!(
            html,
            r#"<option value="{0}"{1}>{0}</option>"#,
            escape_html(option),
            selected
        )?;
    }
    writeln!(html, "</select></label>")
}

fn checkbox(html: &mut String, name: &str, checked: bool, text: &str) -> fmt::Result {
    writeln!(
        html,
        r#"<label class="check"><input type="checkbox" name="{name}" value="on"{} required><span>{text}</span></label>"#,
        if checked { " checked" } else { "" }
    )
}
