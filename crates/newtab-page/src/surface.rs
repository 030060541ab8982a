use newtab_model::BackgroundError;

/// Element id of the display target the advice text is written into.
/// Its presence is a precondition of the page markup, not a runtime error
/// the loader manages.
pub const ADVICE_ELEMENT_ID: &str = "advice";

/// The rendering surface a load pass writes into.
///
/// Mirrors the page's two disjoint targets: a text node looked up by
/// element id, and the page-level background-image style. The loader is
/// host-agnostic; tests inject an in-memory surface.
pub trait PageSurface {
    /// Set the text content of the element with the given id.
    fn set_text(&mut self, element_id: &str, text: &str);

    /// Assign a CSS `background-image` value to the page background.
    /// Surfaces may reject a value they cannot safely apply.
    fn set_background_image(&mut self, css_value: &str) -> Result<(), BackgroundError>;
}
