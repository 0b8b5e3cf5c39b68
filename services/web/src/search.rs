use crate::infra::load_catalog;
use clap::Args;
use std::path::PathBuf;
use vrn::error::AppError;
use vrn::registry::{DisasterType, ProviderRecord, SearchOutcome, SearchQuery};

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    /// City, state or region to match against provider regions. Blank lists everyone.
    #[arg(long, default_value = "")]
    pub(crate) location: String,
    /// Disaster type label, e.g. "Flood / Storm Surge"
    #[arg(long)]
    pub(crate) disaster_type: Option<DisasterType>,
    /// Provider catalog CSV to search instead of the built-in listings
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let SearchArgs {
        location,
        disaster_type,
        catalog,
    } = args;

    let catalog = load_catalog(catalog.as_deref())?;
    let mut query = SearchQuery::new();
    query.set_disaster_type(disaster_type.unwrap_or_default());
    query.set_location_text(location);
    query.submit_search();

    print!("{}", render_outcome(&query, &query.outcome(&catalog)));
    Ok(())
}

fn render_outcome(query: &SearchQuery, outcome: &SearchOutcome<'_>) -> String {
    let mut output = String::new();
    let location = match query.location_text().trim() {
        "" => "any region",
        other => other,
    };
    output.push_str(&format!(
        "Provider search: {} in {}\n",
        query.disaster_type(),
        location
    ));

    match outcome {
        SearchOutcome::Matches(records) => {
            output.push_str(&format!("Results ({})\n", records.len()));
            for (index, record) in records.iter().enumerate() {
                output.push_str(&render_record(index + 1, record));
            }
        }
        SearchOutcome::NoMatches | SearchOutcome::NotRun => {
            output.push_str("No matches yet. Try a broader region (e.g., Mid-Atlantic) or leave location blank.\n");
        }
    }
    output
}

fn render_record(position: usize, record: &ProviderRecord) -> String {
    let mut block = format!(
        "\n{position}. {}\n   {}\n   Regions: {}\n   Mobilization: {}\n",
        record.name, record.category, record.regions, record.mobilization_window
    );
    if !record.badges.is_empty() {
        block.push_str(&format!("   Verification: {}\n", record.badges.join(", ")));
    }
    block.push_str(&format!("   Contact: {} | {}\n", record.phone, record.email));
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use vrn::registry::ProviderCatalog;

    fn submitted(location: &str) -> SearchQuery {
        let mut query = SearchQuery::new();
        query.set_location_text(location);
        query.submit_search();
        query
    }

    #[test]
    fn lists_matches_with_contact_details() {
        let catalog = ProviderCatalog::seed();
        let query = submitted("sc");
        let output = render_outcome(&query, &query.outcome(&catalog));

        assert!(output.starts_with("Provider search: Flood / Storm Surge in sc\n"));
        assert!(output.contains("Results (1)"));
        assert!(output.contains("1. Rapid Dry & Restore"));
        assert!(output.contains("Mobilization: <24 hours"));
        assert!(output.contains("Contact: (555) 014-2031 | dispatch@rapiddry.example"));
    }

    #[test]
    fn blank_location_reads_as_any_region() {
        let catalog = ProviderCatalog::seed();
        let query = submitted("  ");
        let output = render_outcome(&query, &query.outcome(&catalog));

        assert!(output.contains("in any region"));
        assert!(output.contains("3. Evergreen Mitigation Services"));
    }

    #[test]
    fn reports_no_matches() {
        let catalog = ProviderCatalog::seed();
        let query = submitted("antarctica");
        let output = render_outcome(&query, &query.outcome(&catalog));
        assert!(output.contains("No matches yet"));
    }
}
