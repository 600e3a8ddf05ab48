use std::{error::Error, fmt::Display};

/// This type gets used to be our catch all error.
/// We implement conversions for all Library errors to ease error management.
#[derive(Debug)]
pub enum QsError {
    /// A query or update was asked for `[left, right]`, which is not a valid range
    /// of a structure holding `len` elements.
    InvalidRangeQsError {
        /// First position of the requested range.
        left: usize,
        /// Last position (inclusive) of the requested range.
        right: usize,
        /// Number of elements held by the structure.
        len: usize,
    },
    /// Allows a generic Error message.
    StringQsError(String),
    /// Anticipated errors, may be rethrown with an additional error message
    RethrowQsError(String, Box<dyn Error>),
    /// All other library Errors get converted to this error.
    OtherQsError(Box<dyn Error>),
}

/// This type is our goto Result, as it allows us to convert between many different errors.
pub type QsResult<O> = Result<O, QsError>;

impl Display for QsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QsError::InvalidRangeQsError { left, right, len } => write!(
                f,
                "invalid range [{}, {}] for a structure of length {}",
                left, right, len
            ),
            QsError::StringQsError(str) => str.fmt(f),
            QsError::RethrowQsError(str, err) => {
                str.fmt(f)?;
                " with: ".fmt(f)?;
                err.fmt(f)?;
                Ok(())
            }
            QsError::OtherQsError(err) => err.fmt(f),
        }
    }
}
impl Error for QsError {}

impl QsError {
    /// Checks that `[left, right]` is a non-empty range inside `0..len`.
    /// # Usage
    /// ```
    /// # use common::QsError;
    /// assert!(QsError::check_range(1, 3, 5).is_ok());
    /// assert!(QsError::check_range(3, 1, 5).is_err());
    /// assert!(QsError::check_range(0, 5, 5).is_err());
    /// ```
    pub fn check_range(left: usize, right: usize, len: usize) -> QsResult<()> {
        if left <= right && right < len {
            Ok(())
        } else {
            Err(QsError::InvalidRangeQsError { left, right, len })
        }
    }

    /// Allows to annotate a QsError with a to better detect the origin of errors.
    /// # Usage
    /// ```
    /// # use common::{QsError, QsResult};
    /// # fn fallible_function() -> QsResult<()> {
    /// # Err(QsError::StringQsError("".into()))
    /// # }
    /// # fn container_function() -> QsResult<()> {
    /// fallible_function().map_err(QsError::rethrow_with("function failed"))?;
    /// # Ok(())
    /// # }
    /// assert!(container_function().is_err());
    /// ```
    pub fn rethrow_with(str: &'static str) -> impl Fn(QsError) -> QsError {
        move |err| QsError::RethrowQsError(str.to_string(), Box::new(err))
    }
}

macro_rules! implement_from {
    ($type:ty) => {
        impl From<$type> for QsError {
            fn from(other: $type) -> Self {
                QsError::OtherQsError(Box::from(other))
            }
        }
    };
}
implement_from!(std::io::Error);
implement_from!(flexi_logger::FlexiLoggerError);

impl<'a> From<&'a str> for QsError {
    fn from(other: &'a str) -> Self {
        QsError::StringQsError(other.to_string())
    }
}
impl From<String> for QsError {
    fn from(other: String) -> Self {
        QsError::StringQsError(other)
    }
}
