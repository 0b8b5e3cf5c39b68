//! Registry domain: provider catalog, search filter, signup form and the view
//! selector that mounts them.

pub mod catalog;
pub mod search;
pub mod signup;
pub mod site;

pub use catalog::{
    CatalogError, CrewSizeBand, DisasterType, MobilizationWindow, ProviderCatalog, ProviderRecord,
};
pub use search::{filter_providers, normalize_location, SearchOutcome, SearchQuery};
pub use signup::{
    FamilyFields, FormPhase, ProviderFields, RequiredField, RequiredFieldViolation, SignupForm,
    SignupRole, SignupSubmission,
};
pub use site::{Route, Site, View};
