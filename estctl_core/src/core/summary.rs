/// Trait for providing lightweight logging summaries of loop values
///
/// Report lines are built from these summaries so that every observer prints
/// states and control inputs the same way.
pub trait LogSummary {
    /// Return a compact string representation suitable for logging
    fn log_summary(&self) -> String;
}

impl LogSummary for f64 {
    fn log_summary(&self) -> String {
        format!("{:.4}", self)
    }
}
