//! Per-field annotation parsing.
//!
//! A field's tag string controls how the flattening engine treats it. The
//! format is a comma-separated list where the first segment renames the
//! field and the remaining segments are boolean options:
//!
//! ```text
//! ""                 declared name, no options
//! "name"             renamed, no options
//! "name,omitempty"   renamed, one option
//! ",flatten"         declared name, one option
//! ```
//!
//! Recognized options are `omitempty`, `omitnested`, `string` and `flatten`
//! (see [`Flattener`](crate::Flattener) for their semantics). Unrecognized
//! options are preserved in the parsed directive but never consulted. The
//! literal tag `-` excludes a field entirely; the engine checks for it
//! before parsing, so `-` never reaches [`TagDirective::parse`] as a name.

/// The default tag namespace consulted by [`Flattener`](crate::Flattener).
///
/// Types declared through the [`inspect!`](crate::inspect) macro register
/// their plain tags under this namespace. A [`Flattener`](crate::Flattener)
/// built with `with_tag_name` reads a different namespace instead.
pub const DEFAULT_TAG_NAME: &str = "inspect";

/// A parsed field annotation: name override plus option set.
///
/// # Examples
///
/// ```rust
/// use serde_inspect::TagDirective;
///
/// let directive = TagDirective::parse("server_name,omitempty");
/// assert_eq!(directive.name, "server_name");
/// assert!(directive.options.has("omitempty"));
/// assert!(!directive.options.has("flatten"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDirective<'a> {
    /// Name override; empty means "use the declared field name".
    pub name: &'a str,
    /// Membership-only option set.
    pub options: TagOptions<'a>,
}

/// The option segments of a tag, with membership-only semantics.
///
/// Duplicates and empty segments from malformed input are kept as-is; only
/// [`has`](TagOptions::has) membership matters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagOptions<'a>(Vec<&'a str>);

impl<'a> TagOptions<'a> {
    /// Returns `true` if the option set contains `option`.
    #[must_use]
    pub fn has(&self, option: &str) -> bool {
        self.0.iter().any(|opt| *opt == option)
    }

    /// Returns `true` if no options were given.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the raw option tokens in input order.
    pub fn iter(&self) -> impl Iterator<Item = &&'a str> {
        self.0.iter()
    }
}

impl<'a> TagDirective<'a> {
    /// Parses a raw tag string.
    ///
    /// Pure and total: malformed input (trailing commas, empty segments)
    /// degrades to empty-string options and never fails. Parsing the same
    /// input always yields the same directive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_inspect::TagDirective;
    ///
    /// assert_eq!(TagDirective::parse("").name, "");
    /// assert_eq!(TagDirective::parse("alias").name, "alias");
    ///
    /// let directive = TagDirective::parse(",omitempty,string");
    /// assert_eq!(directive.name, "");
    /// assert!(directive.options.has("omitempty"));
    /// assert!(directive.options.has("string"));
    /// ```
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        let mut segments = raw.split(',');
        let name = segments.next().unwrap_or("");
        TagDirective {
            name,
            options: TagOptions(segments.collect()),
        }
    }
}
