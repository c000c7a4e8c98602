/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// A string type that guarantees non-blank content.
///
/// The input must contain at least one non-whitespace character. Unlike a trimmed form field,
/// the text is kept exactly as entered, so `" 2% "` is stored and sent as `" 2% "`.
///
/// Taskboard uses this for presence checks on form fields: a title of `"   "` is treated the
/// same as a missing title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Arguments
    ///
    /// * `input` - Text as entered by the user.
    ///
    /// # Errors
    ///
    /// Returns `Err(TextError::Empty)` if the input is empty once whitespace is ignored.
    pub fn new(input: impl Into<String>) -> Result<Self, TextError> {
        let input = input.into();
        if input.trim().is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(input))
    }

    pub fn into_string(self) -> String {
        self.0
    }
}
