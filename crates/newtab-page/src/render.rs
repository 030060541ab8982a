use crate::surface::{PageSurface, ADVICE_ELEMENT_ID};
use newtab_model::BackgroundError;
use std::collections::BTreeMap;

/// In-memory page surface: element text by id plus an optional background
/// style. Renders to a standalone HTML document — the Rust rendition of the
/// new tab page is a generated static document.
#[derive(Debug, Clone, Default)]
pub struct StaticPage {
    elements: BTreeMap<String, String>,
    background_image: Option<String>,
}

impl StaticPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text content of the element with the given id, if any was set.
    pub fn text(&self, element_id: &str) -> Option<&str> {
        self.elements.get(element_id).map(String::as_str)
    }

    /// The assigned CSS `background-image` value, if any.
    pub fn background_image(&self) -> Option<&str> {
        self.background_image.as_deref()
    }

    /// Render the page as a complete HTML document.
    pub fn to_html(&self) -> String {
        let body_style = match &self.background_image {
            Some(bg) => format!(
                " style=\"background-image: {bg}; background-size: cover; background-position: center;\""
            ),
            None => String::new(),
        };
        let advice = escape_html(self.text(ADVICE_ELEMENT_ID).unwrap_or(""));

        format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <title>New Tab</title>\n\
             </head>\n\
             <body{body_style}>\n\
             <div id=\"{ADVICE_ELEMENT_ID}\">{advice}</div>\n\
             </body>\n\
             </html>\n"
        )
    }
}

impl PageSurface for StaticPage {
    fn set_text(&mut self, element_id: &str, text: &str) {
        self.elements.insert(element_id.to_string(), text.to_string());
    }

    fn set_background_image(&mut self, css_value: &str) -> Result<(), BackgroundError> {
        let inner = css_value
            .strip_prefix("url('")
            .and_then(|rest| rest.strip_suffix("')"))
            .ok_or_else(|| BackgroundError::new(format!("not a url() value: {css_value}")))?;
        // Quotes or newlines inside the URL would break out of the style
        // attribute this page embeds the value into.
        if inner.contains(['\'', '"', '\n']) {
            return Err(BackgroundError::new("unsafe characters in image url"));
        }
        self.background_image = Some(css_value.to_string());
        Ok(())
    }
}

/// Provenance for a rendered page, written alongside it as `source.md`.
#[derive(Debug, Clone)]
pub struct PageProvenance {
    pub advice_url: String,
    pub image_url: String,
    pub fetched_at: String,
}

impl PageProvenance {
    pub fn now(advice_url: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            advice_url: advice_url.into(),
            image_url: image_url.into(),
            fetched_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Generate a source.md provenance file.
    pub fn source_md(&self) -> String {
        format!(
            "# Source\n\n\
             - **Advice URL:** {}\n\
             - **Image URL:** {}\n\
             - **Fetched:** {}\n",
            self.advice_url, self.image_url, self.fetched_at,
        )
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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
