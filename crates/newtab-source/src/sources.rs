use newtab_model::AdviceShape;

const ADVICE_SLIP_URL: &str = "https://api.adviceslip.com/advice";
const RANDOM_FACTS_URL: &str = "https://uselessfacts.jsph.pl/api/v2/facts/random";
const UNSPLASH_RANDOM_URL: &str = "https://source.unsplash.com/random/1920x1080";
const PICSUM_RANDOM_URL: &str = "https://picsum.photos/1920/1080";

/// Where advice text comes from: an endpoint plus the field-extraction
/// strategy matching its response shape.
#[derive(Debug, Clone)]
pub struct AdviceSource {
    pub url: String,
    pub shape: AdviceShape,
}

impl AdviceSource {
    /// api.adviceslip.com — `{ slip: { advice } }` shape.
    pub fn advice_slip() -> Self {
        Self {
            url: ADVICE_SLIP_URL.to_string(),
            shape: AdviceShape::Slip,
        }
    }

    /// uselessfacts.jsph.pl — `{ text }` / `{ message }` shape.
    pub fn random_facts() -> Self {
        Self {
            url: RANDOM_FACTS_URL.to_string(),
            shape: AdviceShape::TextOrMessage,
        }
    }

    /// Same shape, different endpoint. Used by tests and URL overrides.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

/// A fixed URL that resolves to a random image when the rendering surface
/// dereferences it. Constructing the URL is purely local; the randomization
/// happens server-side on each dereference.
#[derive(Debug, Clone)]
pub struct ImageSource {
    pub url: String,
}

impl ImageSource {
    pub fn unsplash() -> Self {
        Self {
            url: UNSPLASH_RANDOM_URL.to_string(),
        }
    }

    pub fn picsum() -> Self {
        Self {
            url: PICSUM_RANDOM_URL.to_string(),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// The CSS `background-image` value for this source.
    pub fn css_value(&self) -> String {
        format!("url('{}')", self.url)
    }
}
