use vrn::registry::{
    DisasterType, FormPhase, RequiredField, Route, SignupForm, SignupRole, SignupSubmission, Site,
};

fn fill_provider(form: &mut SignupForm) {
    let provider = form.provider_mut();
    provider.company = "Harbor Pumps".to_string();
    provider.hq_location = "Norfolk, VA".to_string();
    provider.contact_name = "Sam Lee".to_string();
    provider.phone = "(555) 000-0001".to_string();
    provider.email = "ops@harbor.example".to_string();
    provider.regions_served = "Hampton Roads".to_string();
    provider.insurance_acknowledged = true;
    provider.attestation_accepted = true;
}

#[test]
fn provider_submission_requires_both_acknowledgements() {
    let mut form = SignupForm::new();
    fill_provider(&mut form);
    form.provider_mut().insurance_acknowledged = false;

    let violation = form.submit().expect_err("insurance acknowledgement missing");
    assert_eq!(violation.missing, vec![RequiredField::InsuranceAcknowledgement]);
    assert_eq!(form.phase(), FormPhase::Editing);

    form.provider_mut().insurance_acknowledged = true;
    form.toggle_disaster_type(DisasterType::Wildfire);
    let submission = form.submit().expect("complete provider form");
    match submission {
        SignupSubmission::Provider(provider) => {
            assert!(provider.disaster_types.contains(&DisasterType::Wildfire));
            assert!(provider.disaster_types.contains(&DisasterType::FloodStormSurge));
        }
        other => panic!("unexpected submission {other:?}"),
    }
    assert!(form.is_submitted());
}

#[test]
fn family_role_ignores_provider_requirements() {
    let mut form = SignupForm::new();
    assert!(form.switch_role(SignupRole::Family));
    form.family_mut().email = "resident@example.com".to_string();
    form.family_mut().location = "Chesapeake, VA".to_string();

    let submission = form.submit().expect("family form accepted");
    assert_eq!(submission.role(), SignupRole::Family);
    let payload = serde_json::to_value(&submission).expect("serializes");
    assert_eq!(payload["role"], "family");
    assert_eq!(payload["location"], "Chesapeake, VA");
}

#[test]
fn submitted_signup_round_trips_through_the_site() {
    let mut site = Site::at(Route::Signup);
    let form = site.signup_mut().expect("signup mounted");
    fill_provider(form);
    form.submit().expect("provider accepted");
    assert!(!form.switch_role(SignupRole::Family));

    form.submit_another();
    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(form.provider().company, "Harbor Pumps");
    form.submit().expect("resubmitted");

    site.return_to_search();
    assert_eq!(site.route(), Route::Home);
    assert!(site.signup_mut().is_none());
}
