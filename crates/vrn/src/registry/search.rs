use super::catalog::{DisasterType, ProviderCatalog, ProviderRecord};

/// Search panel state for the home view.
///
/// Edits are stored verbatim; normalisation happens only when the filter runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    disaster_type: DisasterType,
    location_text: String,
    has_been_submitted: bool,
}

/// What the results area should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// No search has been submitted yet.
    NotRun,
    /// A search ran and nothing matched.
    NoMatches,
    Matches(Vec<&'a ProviderRecord>),
}

impl<'a> SearchOutcome<'a> {
    pub fn records(&self) -> &[&'a ProviderRecord] {
        match self {
            SearchOutcome::Matches(records) => records,
            SearchOutcome::NotRun | SearchOutcome::NoMatches => &[],
        }
    }
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disaster_type(&self) -> DisasterType {
        self.disaster_type
    }

    pub fn location_text(&self) -> &str {
        &self.location_text
    }

    pub fn has_been_submitted(&self) -> bool {
        self.has_been_submitted
    }

    pub fn set_disaster_type(&mut self, value: DisasterType) {
        self.disaster_type = value;
    }

    pub fn set_location_text(&mut self, value: impl Into<String>) {
        self.location_text = value.into();
    }

    pub fn submit_search(&mut self) {
        self.has_been_submitted = true;
    }

    /// Visible result set: empty until the first submission.
    pub fn results<'a>(&self, catalog: &'a ProviderCatalog) -> Vec<&'a ProviderRecord> {
        if !self.has_been_submitted {
            return Vec::new();
        }
        filter_providers(catalog, self.disaster_type, &self.location_text)
    }

    pub fn outcome<'a>(&self, catalog: &'a ProviderCatalog) -> SearchOutcome<'a> {
        if !self.has_been_submitted {
            return SearchOutcome::NotRun;
        }

        let records = self.results(catalog);
        if records.is_empty() {
            SearchOutcome::NoMatches
        } else {
            SearchOutcome::Matches(records)
        }
    }
}

/// Lower-cased, trimmed form of a location query.
pub fn normalize_location(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Case-insensitive substring test against the free-text region field.
/// An empty needle matches every record.
pub fn region_matches(regions: &str, normalized_location: &str) -> bool {
    normalized_location.is_empty() || regions.to_lowercase().contains(normalized_location)
}

/// Filter the catalog in listing order.
///
/// `_disaster_type` is accepted for parity with the search form but does not
/// exclude records; no matching rule between disaster types and provider
/// categories has been defined.
pub fn filter_providers<'a>(
    catalog: &'a ProviderCatalog,
    _disaster_type: DisasterType,
    location_text: &str,
) -> Vec<&'a ProviderRecord> {
    let location = normalize_location(location_text);
    catalog
        .providers()
        .iter()
        .filter(|provider| region_matches(&provider.regions, &location))
        .collect()
}
