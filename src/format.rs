//! String rendering of sequences.
//!
//! A [`Format`] describes the layout:
//!
//! ```text
//! left_edge  left_rim e1 right_rim  element_separator  left_rim e2 right_rim  right_edge
//! ```
//!
//! For pair sequences each element is `key value_separator value`.
//!
//! # Examples
//!
//! ```rust
//! use lambars_iter::format::{Format, string_def, string_fmt2};
//!
//! assert_eq!(string_def(Some(vec![1, 2, 3])), "[1 2 3]");
//!
//! let format = Format::default().with_element_separator(", ").with_value_separator("=");
//! assert_eq!(string_fmt2(Some(vec![("a", 1), ("b", 2)]), &format), "[a=1, b=2]");
//! ```

use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::IterError;

/// Layout used to render a sequence as a string.
///
/// [`Format::default`] yields `[e1 e2 e3]` for values and `[k1:v1 k2:v2]`
/// for pairs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Format {
    /// Written before each element.
    pub left_rim: String,
    /// Written after each element.
    pub right_rim: String,
    /// Written between elements.
    pub element_separator: String,
    /// Written before the whole sequence.
    pub left_edge: String,
    /// Written after the whole sequence.
    pub right_edge: String,
    /// Written between the key and the value of a pair.
    pub value_separator: String,
}

impl Default for Format {
    fn default() -> Self {
        Self {
            left_rim: String::new(),
            right_rim: String::new(),
            element_separator: " ".to_string(),
            left_edge: "[".to_string(),
            right_edge: "]".to_string(),
            value_separator: ":".to_string(),
        }
    }
}

impl Format {
    /// Sets the strings written around each element.
    #[must_use]
    pub fn with_rims(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.left_rim = left.into();
        self.right_rim = right.into();
        self
    }

    /// Sets the strings written around the whole sequence.
    #[must_use]
    pub fn with_edges(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.left_edge = left.into();
        self.right_edge = right.into();
        self
    }

    /// Sets the string written between elements.
    #[must_use]
    pub fn with_element_separator(mut self, separator: impl Into<String>) -> Self {
        self.element_separator = separator.into();
        self
    }

    /// Sets the string written between the key and the value of a pair.
    #[must_use]
    pub fn with_value_separator(mut self, separator: impl Into<String>) -> Self {
        self.value_separator = separator.into();
        self
    }

    fn render<I, F>(&self, elements: I, mut write_element: F) -> String
    where
        I: Iterator,
        F: FnMut(&mut String, I::Item),
    {
        let mut rendered = self.left_edge.clone();
        for (index, element) in elements.enumerate() {
            if index > 0 {
                rendered.push_str(&self.element_separator);
            }
            rendered.push_str(&self.left_rim);
            write_element(&mut rendered, element);
            rendered.push_str(&self.right_rim);
        }
        rendered.push_str(&self.right_edge);
        rendered
    }
}

/// Renders a sequence using `format`.
///
/// An absent sequence renders as the empty string; an empty sequence renders
/// as just the edges.
///
/// # Examples
///
/// ```rust
/// use lambars_iter::format::{Format, string_fmt};
///
/// let format = Format::default().with_rims("<", ">").with_element_separator("-");
/// assert_eq!(string_fmt(Some(1..=4), &format), "[<1>-<2>-<3>-<4>]");
/// assert_eq!(string_fmt(None::<Vec<i32>>, &format), "");
/// ```
pub fn string_fmt<I>(sequence: Option<I>, format: &Format) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    sequence.map_or_else(String::new, |sequence| {
        format.render(sequence.into_iter(), |rendered, value| {
            rendered.push_str(&value.to_string());
        })
    })
}

/// Renders a sequence using [`Format::default`].
pub fn string_def<I>(sequence: Option<I>) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    string_fmt(sequence, &Format::default())
}

/// Renders a pair sequence using `format`.
///
/// An absent sequence renders as the empty string.
pub fn string_fmt2<I, K, V>(sequence: Option<I>, format: &Format) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    sequence.map_or_else(String::new, |sequence| {
        format.render(sequence.into_iter(), |rendered, (key, value)| {
            rendered.push_str(&key.to_string());
            rendered.push_str(&format.value_separator);
            rendered.push_str(&value.to_string());
        })
    })
}

/// Renders a pair sequence using [`Format::default`].
pub fn string_def2<I, K, V>(sequence: Option<I>) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: Display,
    V: Display,
{
    string_fmt2(sequence, &Format::default())
}

/// Converts a sequence into a lazy sequence of strings.
///
/// # Errors
///
/// Returns [`IterError::NilSequence`] if `sequence` is `None`.
pub fn string_seq<I>(sequence: Option<I>) -> Result<impl Iterator<Item = String>, IterError>
where
    I: IntoIterator,
    I::Item: Display,
{
    let sequence = sequence.ok_or(IterError::NilSequence)?;
    Ok(sequence.into_iter().map(|value| value.to_string()))
}

/// Collects the string form of every element.
///
/// # Errors
///
/// Returns [`IterError::NilSequence`] if `sequence` is `None`.
///
/// # Examples
///
/// ```rust
/// use lambars_iter::format::string_slice;
///
/// assert_eq!(string_slice(Some([1.5, 2.0])).unwrap(), vec!["1.5", "2"]);
/// ```
pub fn string_slice<I>(sequence: Option<I>) -> Result<Vec<String>, IterError>
where
    I: IntoIterator,
    I::Item: Display,
{
    Ok(string_seq(sequence)?.collect())
}
