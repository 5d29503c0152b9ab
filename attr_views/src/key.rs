//! Attribute key parsing
//!
//! The textual contract other layers use to address an attribute is the
//! two-part key `"<view>:<attribute>"`. Both segments are printable
//! identifiers with no embedded separator. This format is stable.

use crate::error::AttrError;

/// Parser for composite attribute keys
pub struct KeyParser;

impl KeyParser {
    /// Splits a composite key into its view and attribute segments
    ///
    /// # Examples
    ///
    /// ```
    /// use attr_views::KeyParser;
    ///
    /// let (view, name) = KeyParser::split("posix:permissions").unwrap();
    /// assert_eq!(view, "posix");
    /// assert_eq!(name, "permissions");
    ///
    /// assert!(KeyParser::split("noseparator").is_err());
    /// ```
    pub fn split(key: &str) -> Result<(&str, &str), AttrError> {
        let (view, name) = key
            .split_once(':')
            .ok_or_else(|| AttrError::MalformedName(key.to_string()))?;

        if !Self::is_valid_segment(view) || !Self::is_valid_segment(name) {
            return Err(AttrError::MalformedName(key.to_string()));
        }

        Ok((view, name))
    }

    /// Validates a single key segment
    ///
    /// Segments are non-empty runs of ASCII letters, digits, `.`, `_`,
    /// and `-`.
    pub fn is_valid_segment(segment: &str) -> bool {
        !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_simple_key() {
        assert_eq!(KeyParser::split("basic:size").unwrap(), ("basic", "size"));
    }

    #[test]
    fn test_split_rejects_missing_separator() {
        let result = KeyParser::split("basicthing");
        assert!(matches!(result, Err(AttrError::MalformedName(_))));
    }

    #[test]
    fn test_split_rejects_empty_segments() {
        assert!(KeyParser::split(":size").is_err());
        assert!(KeyParser::split("basic:").is_err());
        assert!(KeyParser::split(":").is_err());
    }

    #[test]
    fn test_split_rejects_second_separator() {
        // split_once leaves the second ':' inside the attribute segment,
        // which then fails segment validation
        assert!(KeyParser::split("a:b:c").is_err());
    }

    #[test]
    fn test_split_rejects_non_identifier_characters() {
        assert!(KeyParser::split("basic:si ze").is_err());
        assert!(KeyParser::split("ba/sic:size").is_err());
    }

    #[test]
    fn test_valid_segment_charset() {
        assert!(KeyParser::is_valid_segment("lastModifiedTime"));
        assert!(KeyParser::is_valid_segment("mime.type"));
        assert!(KeyParser::is_valid_segment("my-attr_2"));
        assert!(!KeyParser::is_valid_segment(""));
        assert!(!KeyParser::is_valid_segment("a:b"));
    }
}
