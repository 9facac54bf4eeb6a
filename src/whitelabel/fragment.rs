//! Locating and replacing marked markup fragments.
//!
//! A fragment is an element whose `class` attribute carries a marker class,
//! from its opening tag up to the nearest closing tag of the same name. This
//! is a pattern match, not a parser: an element of the same name nested
//! inside the fragment closes it early.

use crate::error::Result;
use regex::{Captures, Regex};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassMatch {
    /// The class list contains the marker as a whole word.
    Token,
    /// The double-quoted class attribute value starts with the marker.
    Prefix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker<'a> {
    pub tag: &'a str,
    pub class: &'a str,
    pub matching: ClassMatch,
}

impl<'a> Marker<'a> {
    pub const fn token(tag: &'a str, class: &'a str) -> Self {
        Self {
            tag,
            class,
            matching: ClassMatch::Token,
        }
    }

    pub const fn prefix(tag: &'a str, class: &'a str) -> Self {
        Self {
            tag,
            class,
            matching: ClassMatch::Prefix,
        }
    }
}

/// Replaces the inner content of the first fragment matching a marker.
///
/// `build` receives the current inner content and returns its replacement,
/// which is inserted verbatim. Content without a matching fragment is
/// returned unchanged.
pub trait FragmentReplacer {
    fn replace<'c>(
        &self,
        content: &'c str,
        marker: &Marker<'_>,
        build: &dyn Fn(&str) -> String,
    ) -> Result<Cow<'c, str>>;
}

/// Case-insensitive, dot-matches-newline, non-greedy regex matching.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexFragmentReplacer;

impl RegexFragmentReplacer {
    fn pattern(marker: &Marker<'_>) -> String {
        let tag = regex::escape(marker.tag);
        let class = regex::escape(marker.class);
        let open = match marker.matching {
            ClassMatch::Token => format!(
                r#"<{tag}[^>]*class\s*=\s*["'][^"']*\b{class}\b[^"']*["'][^>]*>"#
            ),
            ClassMatch::Prefix => format!(r#"<{tag} class="{class}[^"]*"[^>]*>"#),
        };
        format!(r"(?is)({open})(.*?)(</{tag}>)")
    }
}

impl FragmentReplacer for RegexFragmentReplacer {
    fn replace<'c>(
        &self,
        content: &'c str,
        marker: &Marker<'_>,
        build: &dyn Fn(&str) -> String,
    ) -> Result<Cow<'c, str>> {
        let re = Regex::new(&Self::pattern(marker))?;
        Ok(re.replacen(content, 1, |caps: &Captures| {
            format!("{}{}{}", &caps[1], build(&caps[2]), &caps[3])
        }))
    }
}
