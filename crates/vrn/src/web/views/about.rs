use std::fmt::{self, Write as _};

use super::{escape_html, section_title};

const VERIFICATION_STEPS: [(&str, &str); 5] = [
    (
        "1) Documentation review",
        "Providers submit business identifiers, insurance certificates, relevant licenses/certifications, and capability summaries.",
    ),
    (
        "2) Consistency & plausibility checks",
        "We look for internal alignment across staffing, equipment, regions served, mobilization claims, and incident history.",
    ),
    (
        "3) Attestation & update obligations",
        "Providers attest that submitted information is accurate and agree to update VRN when material changes occur.",
    ),
    (
        "4) Selective external touchpoints (when needed)",
        "For higher verification tiers, we may request references or confirm public-facing items such as contract history.",
    ),
    (
        "5) Re-verification cadence",
        "Verification status may require periodic renewal (e.g., annual) or document refresh (e.g., updated insurance).",
    ),
];

const LEGAL_PARAGRAPHS: [&str; 5] = [
    "Verified Response Network, LLC (&quot;VRN&quot;) operates a professional registry of service providers who self-report and document capabilities related to emergency and disaster response.",
    "VRN does <strong>not</strong> provide emergency response services, dispatch providers, or direct field operations. If you are in immediate danger, call 911 or your local emergency number.",
    "Inclusion in the registry does not constitute endorsement, recommendation, certification of quality, or guarantee of performance. Verification reflects documented information and self-reported readiness at the time of review.",
    "All services are performed solely by independent third-party providers. Users are responsible for conducting their own due diligence prior to engaging any provider.",
    "To the fullest extent permitted by law, VRN disclaims liability arising from reliance on registry information.",
];

pub(super) fn render(html: &mut String) -> fmt::Result {
    html.push_str(r#"<section class="page">"#);
    section_title(
        html,
        Some("About"),
        "Built for families, grounded in clarity and trust",
        Some(
            "Verified Response Network (VRN) exists to help families and communities find capable help quickly during natural disasters. Our focus is verification: documented readiness indicators, transparent standards, and a calm experience when time is tight.",
        ),
    )?;

    html.push_str(r#"<div class="two-column"><div class="primary">"#);
    html.push_str(
        r#"<div class="card"><h2>Our verification process</h2><p class="muted">We verify documented readiness indicators, not outcomes, availability, or performance.</p><div class="steps-list">"#,
    );
    for (title, detail) in VERIFICATION_STEPS {
        write!(
            html,
            r#"<div class="step"><h3>{}</h3><p>{detail}</p></div>"#,
            escape_html(title)
        )?;
    }
    html.push_str("</div></div>\n");

    html.push_str(
        r#"<div class="card"><h2>What verification is (and isn’t)</h2><ul class="is-isnt">
<li><strong>Is:</strong> a review of documented readiness indicators at the time of review.</li>
<li><strong>Isn’t:</strong> a guarantee of performance, price, or real-time availability.</li>
<li><strong>Isn’t:</strong> a dispatch service or emergency responder.</li>
</ul></div>
"#,
    );

    html.push_str(r#"</div><div class="secondary"><div class="card"><h2>Legal + liability statements</h2>"#);
    for paragraph in LEGAL_PARAGRAPHS {
        writeln!(html, r#"<p class="legal">{paragraph}</p>"#)?;
    }
    html.push_str("</div>\n");

    html.push_str(
        r#"<div class="card"><h2>A note to families</h2><p>We built VRN with a simple belief: in stressful moments, people deserve clear information. That’s why we focus on what you can quickly verify: region, response window, and documented indicators.</p><p>If you’d like to see more providers in your area, encourage local contractors to apply, and we’ll do the rest.</p></div>"#,
    );
    html.push_str("</div></div></section>\n");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_all_verification_steps_and_disclaimers() {
        let mut html = String::new();
        render(&mut html).expect("about renders");

        assert_eq!(html.matches(r#"<div class="step">"#).count(), 5);
        assert!(html.contains("2) Consistency &amp; plausibility checks"));
        assert!(html.contains("VRN does <strong>not</strong> provide emergency response services"));
        assert_eq!(html.matches(r#"<p class="legal">"#).count(), 5);
    }
}
