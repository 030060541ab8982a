use crate::surface::{PageSurface, ADVICE_ELEMENT_ID};
use newtab_model::{extract_advice, FETCH_FAILED_FALLBACK, NO_ADVICE_FALLBACK};
use newtab_source::{AdviceFetch, AdviceSource, ImageSource};

/// How the advice operation of a load pass ended.
///
/// Informational only: every case already wrote its text into the display
/// target, and the loader propagates nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdviceOutcome {
    /// Fetched, parsed, and extracted; the text was rendered.
    Loaded(String),
    /// Valid JSON with no usable field; the empty-content fallback rendered.
    Empty,
    /// Transport, read, or parse failure; the fetch-failure fallback rendered.
    Failed(String),
}

/// How the background operation of a load pass ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackgroundOutcome {
    /// The CSS value was assigned to the page background.
    Applied(String),
    /// The surface rejected the assignment; the background stays unset.
    Rejected(String),
}

/// Report of one load pass. Not an error channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub advice: AdviceOutcome,
    pub background: BackgroundOutcome,
}

/// Run one load pass: fetch advice into the display target and assign the
/// random background image.
///
/// The two operations are independent; neither failure blocks or corrupts
/// the other, and no failure escapes this function. The advice fetch is
/// issued first; the background assignment is synchronous and takes effect
/// before the fetch's suspension resolves. No timeout is applied to the
/// fetch.
pub async fn load_content<F: AdviceFetch>(
    fetcher: &F,
    page: &mut impl PageSurface,
    advice_source: &AdviceSource,
    image_source: &ImageSource,
) -> LoadOutcome {
    let advice_fut = fetcher.fetch_json(&advice_source.url);

    let background = apply_background(page, image_source);

    let advice = match advice_fut.await {
        Ok(payload) => match extract_advice(advice_source.shape, &payload) {
            Some(text) => {
                tracing::info!(url = %advice_source.url, chars = text.len(), "Advice loaded");
                page.set_text(ADVICE_ELEMENT_ID, &text);
                AdviceOutcome::Loaded(text)
            }
            None => {
                tracing::warn!(url = %advice_source.url, "Advice payload had no usable field");
                page.set_text(ADVICE_ELEMENT_ID, NO_ADVICE_FALLBACK);
                AdviceOutcome::Empty
            }
        },
        Err(err) => {
            tracing::warn!(url = %advice_source.url, error = %err, "Advice fetch failed");
            page.set_text(ADVICE_ELEMENT_ID, FETCH_FAILED_FALLBACK);
            AdviceOutcome::Failed(err.to_string())
        }
    };

    LoadOutcome { advice, background }
}

fn apply_background(page: &mut impl PageSurface, image_source: &ImageSource) -> BackgroundOutcome {
    let css_value = image_source.css_value();
    match page.set_background_image(&css_value) {
        Ok(()) => {
            tracing::debug!(url = %image_source.url, "Background image assigned");
            BackgroundOutcome::Applied(css_value)
        }
        Err(err) => {
            tracing::debug!(error = %err, "Background assignment rejected");
            BackgroundOutcome::Rejected(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::StaticPage;
    use async_trait::async_trait;
    use newtab_model::{AdviceFetchError, BackgroundError};
    use serde_json::{json, Value};

    enum Canned {
        Json(Value),
        NotJson(&'static str),
        ConnectionError,
    }

    struct FakeFetcher(Canned);

    #[async_trait]
    impl AdviceFetch for FakeFetcher {
        async fn fetch_json(&self, _url: &str) -> Result<Value, AdviceFetchError> {
            match &self.0 {
                Canned::Json(v) => Ok(v.clone()),
                Canned::NotJson(body) => Ok(serde_json::from_str(body)?),
                Canned::ConnectionError => {
                    Err(AdviceFetchError::Request("connection reset".into()))
                }
            }
        }
    }

    /// Surface that refuses every background assignment.
    struct NoBackgroundPage(StaticPage);

    impl PageSurface for NoBackgroundPage {
        fn set_text(&mut self, element_id: &str, text: &str) {
            self.0.set_text(element_id, text);
        }

        fn set_background_image(&mut self, _css_value: &str) -> Result<(), BackgroundError> {
            Err(BackgroundError::new("surface has no background"))
        }
    }

    fn sources() -> (AdviceSource, ImageSource) {
        (AdviceSource::advice_slip(), ImageSource::unsplash())
    }

    #[tokio::test]
    async fn test_slip_shape_success() {
        let fetcher = FakeFetcher(Canned::Json(json!({"slip": {"advice": "Test advice"}})));
        let (advice_source, image_source) = sources();
        let mut page = StaticPage::new();

        let outcome = load_content(&fetcher, &mut page, &advice_source, &image_source).await;

        assert_eq!(page.text(ADVICE_ELEMENT_ID), Some("Test advice"));
        assert_eq!(outcome.advice, AdviceOutcome::Loaded("Test advice".into()));
    }

    #[tokio::test]
    async fn test_text_or_message_shape() {
        let (_, image_source) = sources();
        let advice_source = AdviceSource::random_facts();

        let cases = [
            (json!({"text": "Hello"}), "Hello"),
            (json!({"message": "Hi"}), "Hi"),
            (json!({}), NO_ADVICE_FALLBACK),
        ];
        for (payload, expected) in cases {
            let fetcher = FakeFetcher(Canned::Json(payload));
            let mut page = StaticPage::new();
            load_content(&fetcher, &mut page, &advice_source, &image_source).await;
            assert_eq!(page.text(ADVICE_ELEMENT_ID), Some(expected));
        }
    }

    #[tokio::test]
    async fn test_network_failure_renders_fallback() {
        let fetcher = FakeFetcher(Canned::ConnectionError);
        let (advice_source, image_source) = sources();
        let mut page = StaticPage::new();

        let outcome = load_content(&fetcher, &mut page, &advice_source, &image_source).await;

        assert_eq!(page.text(ADVICE_ELEMENT_ID), Some(FETCH_FAILED_FALLBACK));
        assert!(matches!(outcome.advice, AdviceOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_malformed_json_renders_fallback() {
        let fetcher = FakeFetcher(Canned::NotJson("<html>not json</html>"));
        let (advice_source, image_source) = sources();
        let mut page = StaticPage::new();

        let outcome = load_content(&fetcher, &mut page, &advice_source, &image_source).await;

        assert_eq!(page.text(ADVICE_ELEMENT_ID), Some(FETCH_FAILED_FALLBACK));
        assert!(matches!(outcome.advice, AdviceOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_background_applied_regardless_of_advice_outcome() {
        let (advice_source, image_source) = sources();
        let expected_css = image_source.css_value();

        let fetchers = [
            FakeFetcher(Canned::Json(json!({"slip": {"advice": "ok"}}))),
            FakeFetcher(Canned::Json(json!({}))),
            FakeFetcher(Canned::ConnectionError),
        ];
        for fetcher in fetchers {
            let mut page = StaticPage::new();
            let outcome = load_content(&fetcher, &mut page, &advice_source, &image_source).await;
            assert_eq!(page.background_image(), Some(expected_css.as_str()));
            assert_eq!(
                outcome.background,
                BackgroundOutcome::Applied(expected_css.clone())
            );
        }
    }

    #[tokio::test]
    async fn test_rejected_background_does_not_escape() {
        let fetcher = FakeFetcher(Canned::Json(json!({"slip": {"advice": "still here"}})));
        let (advice_source, image_source) = sources();
        let mut page = NoBackgroundPage(StaticPage::new());

        let outcome = load_content(&fetcher, &mut page, &advice_source, &image_source).await;

        // Advice is unaffected and no background was substituted.
        assert_eq!(page.0.text(ADVICE_ELEMENT_ID), Some("still here"));
        assert_eq!(page.0.background_image(), None);
        assert!(matches!(outcome.background, BackgroundOutcome::Rejected(_)));
    }

    #[tokio::test]
    async fn test_two_passes_are_identical() {
        let fetcher = FakeFetcher(Canned::Json(json!({"slip": {"advice": "same"}})));
        let (advice_source, image_source) = sources();

        let mut first_page = StaticPage::new();
        let first = load_content(&fetcher, &mut first_page, &advice_source, &image_source).await;
        let mut second_page = StaticPage::new();
        let second = load_content(&fetcher, &mut second_page, &advice_source, &image_source).await;

        assert_eq!(first, second);
        assert_eq!(
            first_page.text(ADVICE_ELEMENT_ID),
            second_page.text(ADVICE_ELEMENT_ID)
        );
        assert_eq!(first_page.background_image(), second_page.background_image());
    }
}
