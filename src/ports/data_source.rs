/// Port for fetching the application's textual datum.
///
/// Implementations are stateless: `get_data` has no side effects, never
/// fails, and returns the same non-empty string on every call.
pub trait DataSource: std::fmt::Debug {
    /// Return the datum identifying this backend.
    fn get_data(&self) -> String;
}
