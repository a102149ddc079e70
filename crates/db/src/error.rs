use salon_core::error::CoreError;

/// Failures inside the store itself, as opposed to bad input or missing rows.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A writer panicked while holding the table lock.
    #[error("{entity} table lock poisoned")]
    Poisoned { entity: &'static str },

    /// A derived figure could not be computed from the stored rows.
    #[error(transparent)]
    Aggregate(#[from] CoreError),
}
