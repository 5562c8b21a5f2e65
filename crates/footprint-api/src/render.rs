//! # Page Rendering
//!
//! Inline HTML for the two pages this service serves: the input form and the
//! result view. The markup is small enough that a template engine would be
//! pure overhead, so pages are assembled with `format!` into a shared
//! layout.
//!
//! Everything interpolated into the markup is server-controlled (catalog
//! labels, fixed flash messages, a formatted float), but values pass through
//! [`escape`] anyway so a future catalog edit cannot break the page.

use footprint_core::ActivityCatalog;

use crate::flash::Flash;

/// Minimal HTML escaping for text and attribute positions.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shared page chrome.
fn layout(content: &str) -> String {
    format!(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>Carbon Footprint Tracker</title>\n\
         </head>\n\
         <body>\n\
         <header><h1>Carbon Footprint Tracker</h1></header>\n\
         <main>\n{content}</main>\n\
         </body>\n\
         </html>\n"
    )
}

/// The input form, with the queued flash message (if any) shown once.
pub fn index_page(catalog: &ActivityCatalog, flash: Option<Flash>) -> String {
    let mut options = String::new();
    for activity in catalog.activities() {
        options.push_str(&format!(
            "<option value=\"{}\">{} ({})</option>\n",
            escape(&activity.key),
            escape(&activity.label),
            escape(&activity.unit),
        ));
    }

    let flash_html = match flash {
        Some(flash) => format!(
            "<ul class=\"flash\"><li>{}</li></ul>\n",
            escape(flash.message())
        ),
        None => String::new(),
    };

    layout(&format!(
        "<h2>Calculate Your Carbon Footprint</h2>\n\
         <form method=\"post\" action=\"/calculate\">\n\
         <label for=\"activity_type\">Select activity type:</label>\n\
         <select id=\"activity_type\" name=\"activity_type\">\n{options}</select>\n\
         <br>\n\
         <label for=\"amount\">Amount:</label>\n\
         <input type=\"text\" id=\"amount\" name=\"amount\" required>\n\
         <br>\n\
         <input type=\"submit\" value=\"Calculate\">\n\
         </form>\n{flash_html}"
    ))
}

/// The result view: estimated emissions plus the advisory.
pub fn result_page(emissions_kg: f64, advisory: &str) -> String {
    layout(&format!(
        "<h2>Carbon Footprint Result</h2>\n\
         <p>Your estimated emissions are: {} kg CO2</p>\n\
         <p>{}</p>\n\
         <a href=\"/\">Calculate again</a>\n",
        emissions_kg,
        escape(advisory),
    ))
}
