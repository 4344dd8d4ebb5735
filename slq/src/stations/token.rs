//! Station tokens as typed by the user.

use crate::domain::text::parse_unsigned;

/// A station given either by numeric site id or by (part of) its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StationToken {
    Id(u32),
    Name(String),
}

impl StationToken {
    /// A token made entirely of decimal digits is a site id; anything else
    /// is a name.
    ///
    /// # Examples
    ///
    /// ```
    /// use slq::stations::StationToken;
    ///
    /// assert_eq!(StationToken::parse("9001"), StationToken::Id(9001));
    /// assert_eq!(
    ///     StationToken::parse("9001 Centralen"),
    ///     StationToken::Name("9001 Centralen".into())
    /// );
    /// ```
    pub fn parse(s: &str) -> Self {
        match parse_unsigned(s) {
            Some(id) => StationToken::Id(id),
            None => StationToken::Name(s.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_tokens_are_ids() {
        assert_eq!(StationToken::parse("9001"), StationToken::Id(9001));
        assert_eq!(StationToken::parse("0"), StationToken::Id(0));
    }

    #[test]
    fn other_tokens_are_names() {
        assert_eq!(
            StationToken::parse("Slussen"),
            StationToken::Name("Slussen".into())
        );
        assert_eq!(StationToken::parse("9001x"), StationToken::Name("9001x".into()));
        assert_eq!(StationToken::parse(""), StationToken::Name(String::new()));
    }
}
