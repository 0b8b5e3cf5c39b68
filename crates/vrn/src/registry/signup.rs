use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use super::catalog::{CrewSizeBand, DisasterType, MobilizationWindow};
use super::site::Route;

/// Which signup path the visitor picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignupRole {
    #[default]
    Provider,
    Family,
}

impl SignupRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Provider => "provider",
            Self::Family => "family",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Provider => "Provider / Contractor",
            Self::Family => "Family / Community Member",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "provider" => Some(Self::Provider),
            "family" => Some(Self::Family),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted,
}

/// Provider onboarding application fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderFields {
    pub company: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub hq_location: String,
    pub disaster_types: BTreeSet<DisasterType>,
    pub mobilization_window: MobilizationWindow,
    pub crew_size_band: CrewSizeBand,
    pub regions_served: String,
    pub insurance_acknowledged: bool,
    pub attestation_accepted: bool,
}

impl Default for ProviderFields {
    fn default() -> Self {
        Self {
            company: String::new(),
            contact_name: String::new(),
            email: String::new(),
            phone: String::new(),
            hq_location: String::new(),
            disaster_types: BTreeSet::from([DisasterType::FloodStormSurge]),
            mobilization_window: MobilizationWindow::Under24Hours,
            crew_size_band: CrewSizeBand::From6To15,
            regions_served: String::new(),
            insurance_acknowledged: false,
            attestation_accepted: false,
        }
    }
}

/// Family update subscription fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FamilyFields {
    pub email: String,
    pub location: String,
}

/// Inputs that must be present before a submission is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Company,
    ContactName,
    Email,
    Phone,
    HqLocation,
    RegionsServed,
    InsuranceAcknowledgement,
    Attestation,
    Location,
}

impl RequiredField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Company => "company name",
            Self::ContactName => "primary contact name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::HqLocation => "HQ location",
            Self::RegionsServed => "regions served",
            Self::InsuranceAcknowledgement => "insurance acknowledgement",
            Self::Attestation => "accuracy attestation",
            Self::Location => "location",
        }
    }
}

/// Submission attempted with a required input missing. The only rejection the
/// form produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredFieldViolation {
    pub role: SignupRole,
    pub missing: Vec<RequiredField>,
}

impl fmt::Display for RequiredFieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let missing: Vec<&str> = self.missing.iter().map(|field| field.label()).collect();
        write!(
            f,
            "{} signup is missing required fields: {}",
            self.role.as_str(),
            missing.join(", ")
        )
    }
}

impl std::error::Error for RequiredFieldViolation {}

/// Accepted, role-tagged form values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum SignupSubmission {
    Provider(ProviderFields),
    Family(FamilyFields),
}

impl SignupSubmission {
    pub fn role(&self) -> SignupRole {
        match self {
            SignupSubmission::Provider(_) => SignupRole::Provider,
            SignupSubmission::Family(_) => SignupRole::Family,
        }
    }
}

/// Signup view state: `editing`/`submitted` with an orthogonal role tag.
///
/// Values entered for the inactive role stay in memory; nothing is cleared on
/// role switches or "submit another".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    role: SignupRole,
    phase: FormPhase,
    provider: ProviderFields,
    family: FamilyFields,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a form from previously entered values. A `Submitted` phase is
    /// only honoured when the values would pass [`SignupForm::submit`].
    pub fn restore(
        role: SignupRole,
        phase: FormPhase,
        provider: ProviderFields,
        family: FamilyFields,
    ) -> Self {
        let mut form = Self {
            role,
            phase: FormPhase::Editing,
            provider,
            family,
        };
        if phase == FormPhase::Submitted && form.missing_fields().is_empty() {
            form.phase = FormPhase::Submitted;
        }
        form
    }

    pub fn role(&self) -> SignupRole {
        self.role
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    pub fn provider(&self) -> &ProviderFields {
        &self.provider
    }

    pub fn family(&self) -> &FamilyFields {
        &self.family
    }

    pub fn provider_mut(&mut self) -> &mut ProviderFields {
        &mut self.provider
    }

    pub fn family_mut(&mut self) -> &mut FamilyFields {
        &mut self.family
    }

    /// Swap the visible field set. Ignored once submitted; returns whether the
    /// role changed.
    pub fn switch_role(&mut self, role: SignupRole) -> bool {
        if self.is_submitted() || self.role == role {
            return false;
        }
        self.role = role;
        true
    }

    /// Add or remove a served disaster type. "Other" is not offered.
    pub fn toggle_disaster_type(&mut self, kind: DisasterType) {
        if kind == DisasterType::Other {
            return;
        }
        if !self.provider.disaster_types.remove(&kind) {
            self.provider.disaster_types.insert(kind);
        }
    }

    /// Required inputs still missing for the active role.
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        // presence only, matching the browser's `required` check
        fn blank(value: &str) -> bool {
            value.is_empty()
        }

        let mut missing = Vec::new();
        match self.role {
            SignupRole::Provider => {
                let provider = &self.provider;
                let text_fields = [
                    (RequiredField::Company, &provider.company),
                    (RequiredField::HqLocation, &provider.hq_location),
                    (RequiredField::ContactName, &provider.contact_name),
                    (RequiredField::Phone, &provider.phone),
                    (RequiredField::Email, &provider.email),
                    (RequiredField::RegionsServed, &provider.regions_served),
                ];
                missing.extend(
                    text_fields
                        .into_iter()
                        .filter(|(_, value)| blank(value))
                        .map(|(field, _)| field),
                );
                if !provider.insurance_acknowledged {
                    missing.push(RequiredField::InsuranceAcknowledgement);
                }
                if !provider.attestation_accepted {
                    missing.push(RequiredField::Attestation);
                }
            }
            SignupRole::Family => {
                if blank(&self.family.email) {
                    missing.push(RequiredField::Email);
                }
                if blank(&self.family.location) {
                    missing.push(RequiredField::Location);
                }
            }
        }
        missing
    }

    /// `editing -> submitted` when every required input is present. A form that
    /// is already submitted re-reports its submission.
    pub fn submit(&mut self) -> Result<SignupSubmission, RequiredFieldViolation> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(RequiredFieldViolation {
                role: self.role,
                missing,
            });
        }

        self.phase = FormPhase::Submitted;
        Ok(match self.role {
            SignupRole::Provider => SignupSubmission::Provider(self.provider.clone()),
            SignupRole::Family => SignupSubmission::Family(self.family.clone()),
        })
    }

    /// `submitted -> editing`, keeping every entered value.
    pub fn submit_another(&mut self) {
        self.phase = FormPhase::Editing;
    }

    /// `submitted -> editing` and leave the signup view. The caller mounts the
    /// returned route, which discards this form.
    pub fn return_to_search(&mut self) -> Route {
        self.phase = FormPhase::Editing;
        Route::Home
    }
}
