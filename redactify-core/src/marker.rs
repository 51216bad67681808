//! PII marker grammar
//!
//! The engine annotates detected entities in its output as `<CATEGORY:value>`,
//! plus a generic `<PII>` token emitted under the placeholder policy. This
//! module knows the fixed marker vocabulary and splits a result buffer into
//! plain-text runs and marker prefixes with a single left-to-right scan.

/// Entity categories the engine may emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// `<PERSON:...>`
    Person,
    /// `<LOCATION:...>`
    Location,
    /// `<PHONE_NUMBER:...>`
    PhoneNumber,
    /// `<EMAIL_ADDRESS:...>`
    EmailAddress,
    /// The generic `<PII>` token
    Generic,
}

impl Category {
    /// All marker categories, in replacement order
    pub const ALL: [Category; 5] = [
        Category::Person,
        Category::Location,
        Category::PhoneNumber,
        Category::EmailAddress,
        Category::Generic,
    ];

    /// The literal prefix this category matches in engine output
    ///
    /// For [`Category::Generic`] the whole token is the prefix; for the
    /// typed categories the entity value and closing `>` follow the prefix
    /// and are left untouched.
    pub fn prefix(&self) -> &'static str {
        match self {
            Category::Person => "<PERSON:",
            Category::Location => "<LOCATION:",
            Category::PhoneNumber => "<PHONE_NUMBER:",
            Category::EmailAddress => "<EMAIL_ADDRESS:",
            Category::Generic => "<PII>",
        }
    }

    /// Display color used when highlighting
    pub fn color(&self) -> &'static str {
        match self {
            Category::Person => "blue",
            Category::Location => "green",
            Category::PhoneNumber => "red",
            Category::EmailAddress | Category::Generic => "orange",
        }
    }

    /// HTML-safe label shown in place of the prefix
    ///
    /// Typed labels render the prefix literally (underscores replaced with
    /// spaces, `<` escaped); the generic token is replaced wholesale with a
    /// glyph placeholder.
    pub fn html_label(&self) -> &'static str {
        match self {
            Category::Person => "&lt;PERSON:",
            Category::Location => "&lt;LOCATION:",
            Category::PhoneNumber => "&lt;PHONE NUMBER:",
            Category::EmailAddress => "&lt;EMAIL ADDRESS:",
            Category::Generic => "****",
        }
    }
}

/// One piece of a scanned engine-output buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A run of text containing no marker prefix
    Text(&'a str),
    /// A recognized marker prefix
    Marker(Category),
}

/// Split engine output into text runs and marker prefixes
///
/// Single pass, earliest match wins; the marker prefixes cannot contain one
/// another so the scan is unambiguous. Text with no markers comes back as one
/// `Text` segment.
pub fn scan(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let next = Category::ALL
            .iter()
            .filter_map(|&cat| rest.find(cat.prefix()).map(|pos| (pos, cat)))
            .min_by_key(|&(pos, _)| pos);

        match next {
            Some((pos, category)) => {
                if pos > 0 {
                    segments.push(Segment::Text(&rest[..pos]));
                }
                segments.push(Segment::Marker(category));
                rest = &rest[pos + category.prefix().len()..];
            }
            None => {
                segments.push(Segment::Text(rest));
                break;
            }
        }
    }

    segments
}
