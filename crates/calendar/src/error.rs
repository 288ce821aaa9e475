//! Error types for the urti-calendar crate.

/// Validation failures when constructing a [`crate::Month`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month name is not one of the twelve canonical
    /// three-letter abbreviations (`"Jan"` .. `"Dec"`).
    #[error("unrecognized month name: {name:?}")]
    InvalidMonthName {
        /// The name that was provided.
        name: String,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month_name() {
        let err = CalendarError::InvalidMonthName {
            name: "Sept".to_string(),
        };
        assert_eq!(err.to_string(), "unrecognized month name: \"Sept\"");
    }

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_is_send_sync_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
