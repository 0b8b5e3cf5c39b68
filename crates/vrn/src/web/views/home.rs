use std::fmt::{self, Write as _};

use super::{badge, escape_html, section_title};
use crate::registry::{
    DisasterType, ProviderCatalog, ProviderRecord, Route, SearchOutcome, SearchQuery,
};

const FAMILY_CHECKLIST: [&str; 5] = [
    "Ensure everyone is safe. If needed, call 911.",
    "Document damage with photos/video and note dates/times.",
    "Contact your insurer (if applicable) and ask about next steps.",
    "Use VRN to find providers by region and mobilization window.",
    "Get a written scope and confirm insurance before work begins.",
];

pub(super) fn render(
    html: &mut String,
    query: &SearchQuery,
    catalog: &ProviderCatalog,
) -> fmt::Result {
    html.push_str(r#"<section class="page two-column"><div class="primary">"#);
    section_title(
        html,
        Some("Families-first • Natural disasters"),
        "Find verified help fast when it matters most",
        Some(
            "Search by disaster type and location to find providers who have documented readiness indicators. \
In a crisis, clarity matters. We keep it simple: capability, region, and how quickly they can mobilize.",
        ),
    )?;

    html.push_str(r#"<div class="pills">"#);
    for pill in [
        "Verification badges",
        "Region + mobilization",
        "Transparent standards",
    ] {
        write!(html, r#"<span class="pill">{pill}</span>"#)?;
    }
    html.push_str("</div>\n");

    search_form(html, query)?;
    results(html, &query.outcome(catalog))?;

    html.push_str(r#"</div><aside class="secondary">"#);
    html.push_str(
        r#"<div class="card"><h2>A calm checklist for families</h2><p class="muted">When everything feels urgent, your next step should still be safe. Here’s a simple sequence you can follow.</p><ol class="steps">"#,
    );
    for step in FAMILY_CHECKLIST {
        write!(html, "<li>{step}</li>")?;
    }
    html.push_str("</ol></div>\n");
    writeln!(
        html,
        r#"<div class="card"><h2>Are you a provider?</h2><p class="muted">Apply to be listed and earn verification badges.</p><p>Providers remain independent. VRN verifies documented readiness indicators and publishes transparent standards.</p><a class="button" href="{}">Apply to be listed</a></div>"#,
        Route::Signup.path()
    )?;
    html.push_str("</aside></section>\n");
    Ok(())
}

fn search_form(html: &mut String, query: &SearchQuery) -> fmt::Result {
    writeln!(
        html,
        r#"<div class="card"><form class="search" method="get" action="{}">"#,
        Route::Home.path()
    )?;
    html.push_str(
        r#"<label><span>Disaster type</span><select name="disaster_type">"#,
    );
    for kind in DisasterType::ALL {
        let selected = if kind == query.disaster_type() {
            " selected"
        } else {
            ""
        };
        write!(
            html,
            r#"<option value="{0}"{1}>{0}</option>"#,
            escape_html(kind.label()),
            selected
        )?;
    }
    html.push_str("</select></label>\n");
    writeln!(
        html,
        r#"<label><span>Location</span><input type="text" name="location" value="{}" placeholder="City, State or Region (e.g., VA/NC/SC)"></label>"#,
        escape_html(query.location_text())
    )?;
    html.push_str(r#"<input type="hidden" name="submitted" value="true">"#);
    html.push_str(r#"<button type="submit" class="button primary">Search</button>"#);
    html.push_str(
        r#"<p class="fineprint"><strong>Immediate emergency?</strong> Call 911. VRN is a registry of independent providers and does not dispatch emergency services.</p>"#,
    );
    html.push_str("</form></div>\n");
    Ok(())
}

fn results(html: &mut String, outcome: &SearchOutcome<'_>) -> fmt::Result {
    if matches!(outcome, SearchOutcome::NotRun) {
        return Ok(());
    }

    let records = outcome.records();
    html.push_str(r#"<section class="results" aria-live="polite"><div class="results-header">"#);
    if records.is_empty() {
        html.push_str("<h2>Results</h2>");
    } else {
        write!(html, "<h2>Results ({})</h2>", records.len())?;
    }
    html.push_str(
        r#"<span class="muted">Demo results (wire up to a database when ready)</span></div>"#,
    );

    match outcome {
        SearchOutcome::Matches(records) => {
            for record in records {
                provider_card(html, record)?;
            }
        }
        SearchOutcome::NoMatches | SearchOutcome::NotRun => {
            html.push_str(
                r#"<div class="card empty"><h3>No matches yet</h3><p class="muted">Try a broader region (e.g., “Mid-Atlantic”) or leave location blank to see sample providers.</p></div>"#,
            );
        }
    }

    html.push_str("</section>\n");
    Ok(())
}

fn provider_card(html: &mut String, record: &ProviderRecord) -> fmt::Result {
    html.push_str(r#"<article class="card provider"><div class="provider-main">"#);
    write!(
        html,
        r#"<h3>{}</h3><div class="muted">{}</div><div class="badges">"#,
        escape_html(&record.name),
        escape_html(&record.category)
    )?;
    badge(html, &record.regions);
    badge(
        html,
        &format!("Mobilization: {}", record.mobilization_window.label()),
    );
    html.push_str(r#"</div><div class="badges">"#);
    for label in &record.badges {
        badge(html, label);
    }
    html.push_str("</div></div>");
    writeln!(
        html,
        r#"<div class="provider-contact"><div class="eyebrow">Contact</div><div>{}</div><div>{}</div><p class="fineprint">Tip: Ask for current availability, insurance COI, and a written scope before authorizing work.</p></div></article>"#,
        escape_html(&record.phone),
        escape_html(&record.email)
    )
}
