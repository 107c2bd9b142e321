//! Field rules for media items.
//!
//! Every rule is a pure predicate. The media-type reference check needs the
//! repository and therefore lives on `MediaService`.

use std::fmt;
use std::ops::RangeInclusive;

use url::Url;

/// Allowed length for title, genre and image URL.
pub const SHORT_TEXT_LEN: RangeInclusive<usize> = 2..=100;

/// Allowed length for descriptions.
pub const DESCRIPTION_LEN: RangeInclusive<usize> = 2..=1000;

/// A validated attribute of a media item, used to name the offender in
/// validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaField {
    Title,
    Genre,
    MediaType,
    ImageUrl,
    Description,
}

impl MediaField {
    /// Message carried by the validation error for this field.
    pub fn invalid_message(self) -> String {
        format!("{self} is not valid")
    }
}

impl fmt::Display for MediaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Title => "Title",
            Self::Genre => "Genre",
            Self::MediaType => "MediaType",
            Self::ImageUrl => "ImageUrl",
            Self::Description => "Description",
        };
        f.write_str(name)
    }
}

/// Length in Unicode scalar values.
fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Title must be non-empty and 2 to 100 characters long.
pub fn validate_title(title: &str) -> bool {
    !title.is_empty() && SHORT_TEXT_LEN.contains(&char_len(title))
}

/// Genre must be 2 to 100 characters long.
pub fn validate_genre(genre: &str) -> bool {
    SHORT_TEXT_LEN.contains(&char_len(genre))
}

/// Image URL must be 2 to 100 characters long and an absolute,
/// well-formed URI.
///
/// ```
/// use media_core::domain::validation::validate_image_url;
///
/// assert!(validate_image_url("http://www.test.com/test.jpg"));
/// assert!(!validate_image_url("Valid_Url test.com"));
/// assert!(!validate_image_url(""));
/// ```
pub fn validate_image_url(image_url: &str) -> bool {
    SHORT_TEXT_LEN.contains(&char_len(image_url)) && is_well_formed_absolute_uri(image_url)
}

/// Description must be 2 to 1000 characters long.
pub fn validate_description(description: &str) -> bool {
    DESCRIPTION_LEN.contains(&char_len(description))
}

/// Characters `Url::parse` repairs or tolerates that RFC 3986 never allows
/// unescaped.
const DISALLOWED_URI_CHARS: &[char] = &['\\', '<', '>', '|', '{', '}', '"', '^', '`'];

/// Schemes whose authority `Url::parse` infers when `//` is missing.
const HIERARCHICAL_SCHEMES: &[&str] = &["http", "https", "ftp", "ws", "wss", "file"];

/// `Url::parse` requires a scheme but repairs malformed input. The raw
/// string must already be clean, and schemes that carry an authority must
/// spell out `scheme://`.
fn is_well_formed_absolute_uri(value: &str) -> bool {
    if value
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || DISALLOWED_URI_CHARS.contains(&c))
    {
        return false;
    }

    let Ok(url) = Url::parse(value) else {
        return false;
    };

    !HIERARCHICAL_SCHEMES.contains(&url.scheme())
        || value
            .get(url.scheme().len()..)
            .is_some_and(|rest| rest.starts_with("://"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_bounds() {
        assert!(validate_title("Test Title"));
        assert!(validate_title("Ab"));
        assert!(validate_title(&"T".repeat(100)));

        assert!(!validate_title("T"));
        assert!(!validate_title(""));
        assert!(!validate_title(&"T".repeat(101)));
        assert!(!validate_title(&"T".repeat(1001)));
    }

    #[test]
    fn genre_bounds() {
        assert!(validate_genre("Test Genre"));
        assert!(!validate_genre(""));
        assert!(validate_genre("Ab"));
        assert!(!validate_genre("G"));
        assert!(!validate_genre(&"G".repeat(101)));
    }

    #[test]
    fn description_bounds() {
        assert!(validate_description("Test Description"));
        assert!(validate_description("Ab"));
        assert!(validate_description(&"d".repeat(1000)));
        assert!(!validate_description("d"));
        assert!(!validate_description(&"d".repeat(1001)));
    }

    #[test]
    fn image_url_must_be_absolute_and_well_formed() {
        assert!(validate_image_url("http://www.test.com/test.jpg"));
        assert!(validate_image_url("https://cdn.example.org/covers/1.png?size=large"));

        assert!(!validate_image_url("Valid_Url test.com"));
        assert!(!validate_image_url("Test ImageUrl"));
        assert!(!validate_image_url("/relative/path.jpg"));
        assert!(!validate_image_url("www.test.com/test.jpg"));
        assert!(!validate_image_url("http://www.test.com/my image.jpg"));
        assert!(!validate_image_url(""));
    }

    #[test]
    fn image_url_rejects_input_the_parser_would_repair() {
        assert!(!validate_image_url("http:\\\\www.test.com\\test.jpg"));
        assert!(!validate_image_url("http:www.test.com/test.jpg"));
        assert!(!validate_image_url("http:/www.test.com/test.jpg"));
        assert!(!validate_image_url("HTTP:www.test.com/test.jpg"));
        assert!(!validate_image_url("http://www.test.com/a<b>.jpg"));
        assert!(!validate_image_url("http://www.test.com/a|b{c}.jpg"));
        assert!(!validate_image_url("http://www.test.com/\"quoted\".jpg"));
        assert!(!validate_image_url("http://www.test.com/a^b`c.jpg"));

        assert!(validate_image_url("HTTPS://www.test.com/test.jpg"));
        assert!(validate_image_url("http://www.test.com/a%3Cb%3E.jpg"));
        assert!(validate_image_url("urn:isbn:0451450523"));
    }

    #[test]
    fn image_url_accepts_shortest_absolute_uri() {
        // Scheme plus colon: exactly the two-character lower bound.
        assert!(validate_image_url("a:"));
        assert!(!validate_image_url("a"));
    }

    #[test]
    fn image_url_length_is_checked_before_parsing() {
        let long = format!("http://www.test.com/{}.jpg", "a".repeat(100));
        assert!(Url::parse(&long).is_ok());
        assert!(!validate_image_url(&long));
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // 50 two-byte characters: 100 bytes, 50 chars.
        assert!(validate_title(&"é".repeat(50)));
        // 100 multi-byte characters are still within bounds.
        assert!(validate_genre(&"ü".repeat(100)));
        assert!(!validate_genre(&"ü".repeat(101)));
    }

    #[test]
    fn field_messages() {
        assert_eq!(MediaField::Title.invalid_message(), "Title is not valid");
        assert_eq!(
            MediaField::MediaType.invalid_message(),
            "MediaType is not valid"
        );
        assert_eq!(
            MediaField::ImageUrl.invalid_message(),
            "ImageUrl is not valid"
        );
    }
}
