/// Failures the analytics engine reports to its callers.
///
/// "No result" for classification and prediction is not an error; those
/// operations return `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalyticsError {
    /// An input record is malformed and was rejected as a whole.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Too few period records to derive even one cycle length.
    #[error("Not enough period data: need at least {required} records, found {found}")]
    NotEnoughData { required: usize, found: usize },
}
