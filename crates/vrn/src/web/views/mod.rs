//! Server-rendered HTML for each mounted view.

use std::fmt::{self, Write as _};

use crate::registry::{ProviderCatalog, Route, View};

mod about;
mod home;
mod signup;

/// Everything a view needs besides its own state.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub catalog: &'a ProviderCatalog,
    pub year: i32,
    /// Generic notice shown above a rejected signup form.
    pub notice: Option<&'a str>,
}

pub fn render(view: &View, ctx: &RenderContext<'_>) -> Result<String, fmt::Error> {
    match view {
        View::Home(query) => layout(Some(Route::Home), "Find verified help", ctx.year, |html| {
            home::render(html, query, ctx.catalog)
        }),
        View::Signup(form) => layout(Some(Route::Signup), "Sign up", ctx.year, |html| {
            signup::render(html, form, ctx.notice)
        }),
        View::About => layout(Some(Route::About), "About", ctx.year, about::render),
    }
}

pub fn render_not_found(path: &str, year: i32) -> Result<String, fmt::Error> {
    layout(None, "Page not found", year, |html| {
        html.push_str(r#"<section class="page narrow">"#);
        section_title(
            html,
            Some("404"),
            "We couldn't find that page",
            Some(
                format!(
                    "Nothing lives at {}. Use the links above to get back on track.",
                    escape_html(path)
                )
                .as_str(),
            ),
        )?;
        writeln!(
            html,
            r#"<a class="button primary" href="{}">Search providers</a></section>"#,
            Route::Home.path()
        )
    })
}

fn layout<F>(active: Option<Route>, title: &str, year: i32, body: F) -> Result<String, fmt::Error>
where
    F: FnOnce(&mut String) -> fmt::Result,
{
    let mut html = String::with_capacity(16 * 1024);
    writeln!(html, "<!doctype html>")?;
    writeln!(html, r#"<html lang="en"><head><meta charset="utf-8">"#)?;
    writeln!(
        html,
        r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#
    )?;
    writeln!(
        html,
        "<title>{} · Verified Response Network</title>",
        escape_html(title)
    )?;
    writeln!(
        html,
        r#"<link rel="stylesheet" href="/assets/site.css"></head><body>"#
    )?;

    nav(&mut html, active)?;
    html.push_str("<main>\n");
    body(&mut html)?;
    html.push_str("</main>\n");
    footer(&mut html, year)?;

    html.push_str("</body></html>\n");
    Ok(html)
}

fn nav(html: &mut String, active: Option<Route>) -> fmt::Result {
    html.push_str(r#"<header class="nav"><div class="nav-inner">"#);
    writeln!(
        html,
        r#"<a class="brand" href="{}" aria-label="Go to home"><span class="brand-mark" aria-hidden="true">✓</span><span><span class="brand-name">Verified Response Network</span><span class="brand-tag">Crisis-ready provider registry</span></span></a>"#,
        Route::Home.path()
    )?;
    html.push_str(r#"<nav class="nav-links">"#);
    for route in Route::ALL {
        let current = if active == Some(route) {
            r#" class="active" aria-current="page""#
        } else {
            ""
        };
        write!(
            html,
            r#"<a href="{}"{}>{}</a>"#,
            route.path(),
            current,
            route.label()
        )?;
    }
    html.push_str("</nav></div></header>\n");
    Ok(())
}

fn footer(html: &mut String, year: i32) -> fmt::Result {
    html.push_str(r#"<footer class="footer"><div class="footer-grid"><div>"#);
    html.push_str(r#"<div class="footer-title">Verified Response Network</div>"#);
    html.push_str(
        r#"<p class="muted">A verified registry of crisis-ready service providers.</p><div class="badges">"#,
    );
    for label in [
        "Families-first",
        "Verification-focused",
        "Independent providers",
    ] {
        badge(html, label);
    }
    html.push_str(r#"</div></div><div><div class="footer-title">Quick Links</div><ul class="plain">"#);
    for (route, label) in [
        (Route::Home, "Search providers"),
        (Route::Signup, "Provider sign up"),
        (Route::About, "About + verification"),
    ] {
        write!(html, r#"<li><a href="{}">{}</a></li>"#, route.path(), label)?;
    }
    html.push_str(r#"</ul></div><div><div class="footer-title">Important</div>"#);
    html.push_str(
        r#"<p class="muted">VRN does not dispatch emergency services and does not guarantee provider performance. If you are in immediate danger, call 911 or your local emergency number.</p></div></div>"#,
    );
    writeln!(
        html,
        r#"<div class="copyright">© {year} Verified Response Network, LLC. All rights reserved.</div></footer>"#
    )
}

pub(crate) fn badge(html: &mut String, label: &str) {
    html.push_str(r#"<span class="badge">"#);
    html.push_str(&escape_html(label));
    html.push_str("</span>");
}

pub(crate) fn section_title(
    html: &mut String,
    eyebrow: Option<&str>,
    title: &str,
    subtitle: Option<&str>,
) -> fmt::Result {
    html.push_str(r#"<div class="section-title">"#);
    if let Some(eyebrow) = eyebrow {
        write!(html, r#"<div class="eyebrow">{}</div>"#, escape_html(eyebrow))?;
    }
    write!(html, "<h1>{}</h1>", escape_html(title))?;
    if let Some(subtitle) = subtitle {
        // subtitles may carry pre-escaped markup
        write!(html, r#"<p class="lead">{subtitle}</p>"#)?;
    }
    html.push_str("</div>\n");
    Ok(())
}

pub(crate) fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
