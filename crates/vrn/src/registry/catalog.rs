use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

/// Closed set of disaster categories offered by the search and signup forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum DisasterType {
    #[default]
    FloodStormSurge,
    HurricaneTropicalStorm,
    SevereStormTornado,
    Wildfire,
    WinterStormIce,
    Earthquake,
    LandslideMudslide,
    Other,
}

impl DisasterType {
    pub const ALL: [DisasterType; 8] = [
        Self::FloodStormSurge,
        Self::HurricaneTropicalStorm,
        Self::SevereStormTornado,
        Self::Wildfire,
        Self::WinterStormIce,
        Self::Earthquake,
        Self::LandslideMudslide,
        Self::Other,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::FloodStormSurge => "Flood / Storm Surge",
            Self::HurricaneTropicalStorm => "Hurricane / Tropical Storm",
            Self::SevereStormTornado => "Severe Storm / Tornado",
            Self::Wildfire => "Wildfire",
            Self::WinterStormIce => "Winter Storm / Ice",
            Self::Earthquake => "Earthquake",
            Self::LandslideMudslide => "Landslide / Mudslide",
            Self::Other => "Other",
        }
    }

    /// Types a provider can claim to serve; "Other" is search-only.
    pub fn servable() -> impl Iterator<Item = DisasterType> {
        Self::ALL.into_iter().filter(|kind| *kind != Self::Other)
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|kind| kind.label() == raw)
    }
}

impl fmt::Display for DisasterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DisasterType {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::from_label(raw).ok_or_else(|| format!("unknown disaster type '{raw}'"))
    }
}

impl Serialize for DisasterType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Self-reported response-time band. Display text only, never a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MobilizationWindow {
    Under12Hours,
    #[default]
    Under24Hours,
    From24To48Hours,
    Over48Hours,
}

impl MobilizationWindow {
    pub const ALL: [MobilizationWindow; 4] = [
        Self::Under12Hours,
        Self::Under24Hours,
        Self::From24To48Hours,
        Self::Over48Hours,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Under12Hours => "<12 hours",
            Self::Under24Hours => "<24 hours",
            Self::From24To48Hours => "24–48 hours",
            Self::Over48Hours => "48+ hours",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|window| window.label() == raw)
    }
}

impl fmt::Display for MobilizationWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for MobilizationWindow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Crew capacity band collected on the provider application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CrewSizeBand {
    UpTo5,
    #[default]
    From6To15,
    From16To25,
    From25To50,
    Over50,
}

impl CrewSizeBand {
    pub const ALL: [CrewSizeBand; 5] = [
        Self::UpTo5,
        Self::From6To15,
        Self::From16To25,
        Self::From25To50,
        Self::Over50,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::UpTo5 => "1–5",
            Self::From6To15 => "6–15",
            Self::From16To25 => "16–25",
            Self::From25To50 => "25–50",
            Self::Over50 => "50+",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|band| band.label() == raw)
    }
}

impl fmt::Display for CrewSizeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for CrewSizeBand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A listed provider. `regions` is free text and only ever substring-matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderRecord {
    pub name: String,
    pub category: String,
    pub regions: String,
    pub mobilization_window: MobilizationWindow,
    pub badges: Vec<String>,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read provider catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid provider catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: field `{field}` must not be empty")]
    EmptyField { row: usize, field: &'static str },
    #[error("row {row}: unknown mobilization window `{value}`")]
    UnknownMobilizationWindow { row: usize, value: String },
    #[error("provider catalog contains no providers")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    name: String,
    category: String,
    regions: String,
    mobilization_window: String,
    #[serde(default)]
    badges: String,
    phone: String,
    email: String,
}

impl CatalogRow {
    fn into_record(self, row: usize) -> Result<ProviderRecord, CatalogError> {
        let required = |field: &'static str, value: String| {
            let value = value.trim().to_string();
            if value.is_empty() {
                Err(CatalogError::EmptyField { row, field })
            } else {
                Ok(value)
            }
        };

        let mobilization_window =
            MobilizationWindow::from_label(&self.mobilization_window).ok_or_else(|| {
                CatalogError::UnknownMobilizationWindow {
                    row,
                    value: self.mobilization_window.clone(),
                }
            })?;

        let badges = self
            .badges
            .split(';')
            .map(str::trim)
            .filter(|badge| !badge.is_empty())
            .map(str::to_string)
            .collect();

        Ok(ProviderRecord {
            name: required("name", self.name)?,
            category: required("category", self.category)?,
            regions: required("regions", self.regions)?,
            mobilization_window,
            badges,
            phone: required("phone", self.phone)?,
            email: required("email", self.email)?,
        })
    }
}

/// Immutable, ordered provider listing shared read-only by every view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderCatalog {
    providers: Vec<ProviderRecord>,
}

impl ProviderCatalog {
    /// The demo listing shipped with the site.
    pub fn seed() -> Self {
        fn record(
            name: &str,
            category: &str,
            regions: &str,
            mobilization_window: MobilizationWindow,
            badges: [&str; 2],
            phone: &str,
            email: &str,
        ) -> ProviderRecord {
            ProviderRecord {
                name: name.to_string(),
                category: category.to_string(),
                regions: regions.to_string(),
                mobilization_window,
                badges: badges.iter().map(|badge| badge.to_string()).collect(),
                phone: phone.to_string(),
                email: email.to_string(),
            }
        }

        Self {
            providers: vec![
                record(
                    "Rapid Dry & Restore",
                    "Water Extraction & Structural Drying",
                    "Southeast (VA/NC/SC)",
                    MobilizationWindow::Under24Hours,
                    ["Compliance Verified", "Equipment Ready"],
                    "(555) 014-2031",
                    "dispatch@rapiddry.example",
                ),
                record(
                    "BlueLine Debris & Haul",
                    "Debris Removal & Hauling",
                    "Mid-Atlantic (VA/MD/DC)",
                    MobilizationWindow::From24To48Hours,
                    ["Disaster Response Experience", "Regional Response"],
                    "(555) 016-7722",
                    "ops@bluelinehaul.example",
                ),
                record(
                    "Evergreen Mitigation Services",
                    "Wildfire Mitigation & Aftermath",
                    "National (Seasonal)",
                    MobilizationWindow::Over48Hours,
                    ["Compliance Verified", "Field-Validated"],
                    "(555) 010-8899",
                    "intake@evergreenms.example",
                ),
            ],
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Read `name,category,regions,mobilization_window,badges,phone,email` rows.
    /// Badges are separated by `;`.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut providers = Vec::new();
        for (index, row) in csv_reader.deserialize::<CatalogRow>().enumerate() {
            // header is line 1
            providers.push(row?.into_record(index + 2)?);
        }

        if providers.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self { providers })
    }

    pub fn providers(&self) -> &[ProviderRecord] {
        &self.providers
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for ProviderCatalog {
    fn default() -> Self {
        Self::seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn seed_lists_three_providers_in_order() {
        let catalog = ProviderCatalog::seed();
        let names: Vec<&str> = catalog
            .providers()
            .iter()
            .map(|provider| provider.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Rapid Dry & Restore",
                "BlueLine Debris & Haul",
                "Evergreen Mitigation Services"
            ]
        );
    }

    #[test]
    fn seed_records_have_no_empty_fields() {
        for provider in ProviderCatalog::seed().providers() {
            for value in [
                &provider.name,
                &provider.category,
                &provider.regions,
                &provider.phone,
                &provider.email,
            ] {
                assert!(!value.trim().is_empty(), "{} has an empty field", provider.name);
            }
            assert!(!provider.badges.is_empty());
        }
    }

    #[test]
    fn disaster_types_round_trip_through_labels() {
        assert_eq!(DisasterType::ALL.len(), 8);
        for kind in DisasterType::ALL {
            assert_eq!(DisasterType::from_label(kind.label()), Some(kind));
        }
        assert_eq!(DisasterType::default().label(), "Flood / Storm Surge");
        assert_eq!(DisasterType::from_label("Tsunami"), None);
        assert!(!DisasterType::servable().any(|kind| kind == DisasterType::Other));
        assert_eq!(DisasterType::servable().count(), 7);
    }

    #[test]
    fn csv_catalog_splits_badges_and_preserves_order() {
        let csv = "name,category,regions,mobilization_window,badges,phone,email\n\
Harbor Pumps,Water Extraction,Gulf Coast (TX/LA),<12 hours,Equipment Ready; Compliance Verified,(555) 000-0001,ops@harbor.example\n\
Ridge Tree Crew,Tree Removal,Pacific Northwest,48+ hours,,(555) 000-0002,crew@ridge.example\n";
        let catalog = ProviderCatalog::from_reader(Cursor::new(csv)).expect("catalog parses");

        assert_eq!(catalog.len(), 2);
        let first = &catalog.providers()[0];
        assert_eq!(first.name, "Harbor Pumps");
        assert_eq!(first.mobilization_window, MobilizationWindow::Under12Hours);
        assert_eq!(first.badges, vec!["Equipment Ready", "Compliance Verified"]);
        assert!(catalog.providers()[1].badges.is_empty());
    }

    #[test]
    fn csv_catalog_rejects_blank_required_fields() {
        let csv = "name,category,regions,mobilization_window,badges,phone,email\n\
Harbor Pumps,Water Extraction,  ,<12 hours,,(555) 000-0001,ops@harbor.example\n";
        let err = ProviderCatalog::from_reader(Cursor::new(csv)).expect_err("blank regions");
        assert!(matches!(
            err,
            CatalogError::EmptyField {
                row: 2,
                field: "regions"
            }
        ));
    }

    #[test]
    fn csv_catalog_rejects_unknown_mobilization_window() {
        let csv = "name,category,regions,mobilization_window,badges,phone,email\n\
Harbor Pumps,Water Extraction,Gulf Coast,next week,,(555) 000-0001,ops@harbor.example\n";
        let err = ProviderCatalog::from_reader(Cursor::new(csv)).expect_err("bad window");
        assert!(err.to_string().contains("next week"));
    }

    #[test]
    fn csv_catalog_without_rows_is_empty_error() {
        let csv = "name,category,regions,mobilization_window,badges,phone,email\n";
        let err = ProviderCatalog::from_reader(Cursor::new(csv)).expect_err("no rows");
        assert!(matches!(err, CatalogError::Empty));
    }
}
