//! Decoding of the signup form body.
//!
//! Every POST carries the values of both roles (the inactive role travels in
//! hidden inputs) so the server can rebuild the whole form state per request.
//! The body is read as ordered pairs because `disaster_type` repeats.

use std::collections::BTreeSet;

use tracing::debug;

use crate::registry::{
    CrewSizeBand, DisasterType, FamilyFields, FormPhase, MobilizationWindow, ProviderFields,
    SignupForm, SignupRole,
};

pub(crate) mod field {
    pub(crate) const ROLE: &str = "role";
    pub(crate) const PHASE: &str = "phase";
    pub(crate) const INTENT: &str = "intent";
    pub(crate) const COMPANY: &str = "company";
    pub(crate) const CONTACT_NAME: &str = "contact_name";
    pub(crate) const EMAIL: &str = "email";
    pub(crate) const PHONE: &str = "phone";
    pub(crate) const HQ_LOCATION: &str = "hq_location";
    pub(crate) const DISASTER_TYPE: &str = "disaster_type";
    pub(crate) const MOBILIZATION_WINDOW: &str = "mobilization_window";
    pub(crate) const CREW_SIZE_BAND: &str = "crew_size_band";
    pub(crate) const REGIONS_SERVED: &str = "regions_served";
    pub(crate) const INSURANCE_ACKNOWLEDGED: &str = "insurance_acknowledged";
    pub(crate) const ATTESTATION_ACCEPTED: &str = "attestation_accepted";
    pub(crate) const FAMILY_EMAIL: &str = "family_email";
    pub(crate) const FAMILY_LOCATION: &str = "family_location";
}

/// The button that posted the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupIntent {
    Submit,
    SwitchRole(SignupRole),
    SubmitAnother,
    ReturnToSearch,
}

impl SignupIntent {
    pub fn as_value(self) -> &'static str {
        match self {
            SignupIntent::Submit => "submit",
            SignupIntent::SwitchRole(SignupRole::Provider) => "switch_role:provider",
            SignupIntent::SwitchRole(SignupRole::Family) => "switch_role:family",
            SignupIntent::SubmitAnother => "submit_another",
            SignupIntent::ReturnToSearch => "return_to_search",
        }
    }

    /// Unknown or absent intents fall back to a plain submit, which is what an
    /// implicit (Enter key) submission sends.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("submit_another") => SignupIntent::SubmitAnother,
            Some("return_to_search") => SignupIntent::ReturnToSearch,
            Some(value) => match value.strip_prefix("switch_role:").map(SignupRole::parse) {
                Some(Some(role)) => SignupIntent::SwitchRole(role),
                _ => SignupIntent::Submit,
            },
            None => SignupIntent::Submit,
        }
    }
}

/// A decoded POST: the rebuilt form plus what the visitor asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupFormInput {
    pub intent: SignupIntent,
    pub form: SignupForm,
}

impl SignupFormInput {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let value = |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str())
        };
        let text = |name: &str| value(name).unwrap_or_default().to_string();
        let checked = |name: &str| value(name).is_some_and(|raw| !raw.trim().is_empty());

        let role = value(field::ROLE)
            .and_then(SignupRole::parse)
            .unwrap_or_default();
        let phase = match value(field::PHASE) {
            Some("submitted") => FormPhase::Submitted,
            _ => FormPhase::Editing,
        };

        let disaster_types: BTreeSet<DisasterType> = pairs
            .iter()
            .filter(|(key, _)| key == field::DISASTER_TYPE)
            .filter_map(|(_, raw)| {
                let parsed = DisasterType::from_label(raw);
                if parsed.is_none() {
                    debug!(value = %raw, "ignoring unknown disaster type on signup");
                }
                parsed
            })
            .filter(|kind| *kind != DisasterType::Other)
            .collect();

        let mobilization_window = value(field::MOBILIZATION_WINDOW)
            .and_then(MobilizationWindow::from_label)
            .unwrap_or_default();
        let crew_size_band = value(field::CREW_SIZE_BAND)
            .and_then(CrewSizeBand::from_label)
            .unwrap_or_default();

        let provider = ProviderFields {
            company: text(field::COMPANY),
            contact_name: text(field::CONTACT_NAME),
            email: text(field::EMAIL),
            phone: text(field::PHONE),
            hq_location: text(field::HQ_LOCATION),
            disaster_types,
            mobilization_window,
            crew_size_band,
            regions_served: text(field::REGIONS_SERVED),
            insurance_acknowledged: checked(field::INSURANCE_ACKNOWLEDGED),
            attestation_accepted: checked(field::ATTESTATION_ACCEPTED),
        };
        let family = FamilyFields {
            email: text(field::FAMILY_EMAIL),
            location: text(field::FAMILY_LOCATION),
        };

        Self {
            intent: SignupIntent::parse(value(field::INTENT)),
            form: SignupForm::restore(role, phase, provider, family),
        }
    }
}
