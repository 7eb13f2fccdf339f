//! Error types for the data model.

/// Errors raised while building a factor-group table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrimitivesError {
    /// The table has no groups.
    #[error("factor group table is empty")]
    EmptyTable,

    /// A group lists no factor indices.
    #[error("factor group {0} has no indices")]
    EmptyGroup(String),

    /// Factor indices are 1-based.
    #[error("factor group {0} contains index 0 (indices are 1-based)")]
    ZeroIndex(String),

    /// A factor index is claimed by more than one group.
    #[error("factor index {index} appears in both {first} and {second}")]
    DuplicateIndex {
        /// The repeated 1-based index.
        index: usize,
        /// Group that claimed the index first.
        first: String,
        /// Group that repeated it.
        second: String,
    },

    /// Two groups share a name.
    #[error("duplicate factor group name: {0}")]
    DuplicateName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PrimitivesError::EmptyGroup("Macro".to_string());
        assert!(err.to_string().contains("Macro"));

        let err = PrimitivesError::DuplicateIndex {
            index: 42,
            first: "Value".to_string(),
            second: "Growth".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("42") && msg.contains("Value") && msg.contains("Growth"));
    }
}
