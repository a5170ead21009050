//! Input validation for summarize requests.
//!
//! Rules are evaluated in order and the first failing rule wins:
//! 1. body present and a JSON object
//! 2. `text` field present (as a string)
//! 3. trimmed text not empty
//! 4. trimmed length >= `min_text_length`
//! 5. trimmed length <= `max_text_length`
//!
//! Whitespace follows [`is_text_whitespace`], which also counts the ASCII
//! information separators (U+001C..=U+001F) that `char::is_whitespace` skips.

use serde_json::Value;

use crate::config::TextBounds;
use crate::errors::ValidationError;
use crate::models::SummarizeRequest;

/// Name of the request field carrying the input text.
pub const TEXT_FIELD: &str = "text";

/// Whitespace used for trimming and word splitting.
///
/// Unicode `White_Space` plus the file/group/record/unit separators.
#[must_use]
pub fn is_text_whitespace(c: char) -> bool {
  c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Trims leading and trailing [`is_text_whitespace`] characters.
#[must_use]
pub fn trim_text(text: &str) -> &str {
  text.trim_matches(is_text_whitespace)
}

/// Length of a string in characters (Unicode scalar values).
#[must_use]
pub fn char_length(text: &str) -> usize {
  text.chars().count()
}

/// Validates a raw request body and returns the accepted request.
///
/// The returned [`SummarizeRequest`] always carries trimmed, non-empty text
/// within `bounds`.
///
/// # Arguments
/// * `body` - Parsed request body, `None` when absent or not valid JSON
/// * `bounds` - Configured text bounds
///
/// # Errors
/// The first [`ValidationError`] whose rule is violated.
pub fn validate_text(
  body: Option<&Value>,
  bounds: &TextBounds,
) -> Result<SummarizeRequest, ValidationError> {
  let Some(Value::Object(fields)) = body else {
    return Err(ValidationError::MissingBody);
  };

  let Some(text) = fields.get(TEXT_FIELD).and_then(Value::as_str) else {
    return Err(ValidationError::MissingField { field: TEXT_FIELD });
  };

  let text = validate_trimmed(text, bounds)?;
  Ok(SummarizeRequest {
    text: text.to_string(),
  })
}

/// Applies the text rules (3-5) to an already extracted string.
///
/// # Errors
/// [`ValidationError::EmptyText`], [`ValidationError::TooShort`] or
/// [`ValidationError::TooLong`].
pub fn validate_trimmed<'a>(text: &'a str, bounds: &TextBounds) -> Result<&'a str, ValidationError> {
  let trimmed = trim_text(text);
  if trimmed.is_empty() {
    return Err(ValidationError::EmptyText);
  }

  let length = char_length(trimmed);
  if length < bounds.min_text_length {
    return Err(ValidationError::TooShort {
      min: bounds.min_text_length,
    });
  }

  if length > bounds.max_text_length {
    return Err(ValidationError::TooLong {
      max: bounds.max_text_length,
    });
  }

  Ok(trimmed)
}
