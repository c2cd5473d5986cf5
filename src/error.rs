//! Initialization errors for the controller boot sequence.

/// Error returned when a controller cannot attach to the document.
///
/// Every variant is non-fatal: the boot sequence logs it and moves on to the
/// next controller.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// No browser window (not running in a browsing context).
    #[error("browser window is not available")]
    NoWindow,
    /// The window has no document.
    #[error("document is not available")]
    NoDocument,
    /// The document has no root element.
    #[error("document has no root element")]
    NoRootElement,
    /// The document has no body.
    #[error("document has no body")]
    NoBody,
    /// An element the controller requires is missing from the markup.
    #[error("required element `#{0}` is missing")]
    MissingElement(&'static str),
    /// The viewport-intersection watcher could not be created.
    #[error("intersection observer could not be created")]
    Observer,
}
