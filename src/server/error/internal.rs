use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored quarter is not in `YYYY/Q` form.
    ///
    /// Dashboard rows are written by an importer; a malformed quarter means bad data
    /// rather than bad input, so it results in a 500.
    #[error("Malformed quarter '{0}', expected YYYY/Q")]
    MalformedQuarter(String),
}
