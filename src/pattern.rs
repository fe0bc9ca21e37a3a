//! Route pattern compilation.
//!
//! A pattern is literal text with `:name` captures, e.g. `/user/:id/posts`.
//! Each capture becomes a named regex group matching [`DEFAULT_CAPTURE`]
//! unless a condition for that name supplies its own expression. The
//! assembled expression tolerates one trailing slash and is anchored at both
//! ends.
//!
//! Groups are named by position (`__p0`, `__p1`, ...), so literal text and
//! conditions may contain groups of their own without shifting captures.

use crate::router::RouterError;

use std::collections::HashMap;
use std::fmt;

use regex::Regex;
use smallvec::SmallVec;

/// Default expression for a capture. `%` is included so percent-encoded
/// octets match and can be decoded afterwards.
pub const DEFAULT_CAPTURE: &str = r"[a-zA-Z0-9_\+\-%]+";

const COLON: char = ':';
const GROUP_PREFIX: &str = "__p";

#[derive(Debug, Clone)]
pub struct RoutePattern {
    source: Box<str>,
    names: SmallVec<[Box<str>; 4]>,
    // group index of each name, same order as `names`
    groups: SmallVec<[usize; 4]>,
    regex: Regex,
}

impl RoutePattern {
    /// Compiles `source`, substituting `conditions[name]` for the default
    /// expression of each `:name` capture.
    ///
    /// Neither literal text nor conditions are escaped. Only the assembled
    /// expression has to be valid, so a condition is free to be a fragment
    /// that balances against the group it is wrapped in.
    pub fn compile(
        source: &str,
        conditions: &HashMap<String, String>,
    ) -> Result<Self, RouterError> {
        let mut expr = String::with_capacity(source.len() + 16);
        let mut names: SmallVec<[Box<str>; 4]> = SmallVec::new();

        expr.push('^');

        let mut rest = source;
        while let Some(pos) = rest.find(COLON) {
            let after = &rest[pos + 1..];
            let len = word_len(after);
            if len == 0 {
                expr.push_str(&rest[..=pos]);
                rest = after;
                continue;
            }
            expr.push_str(&rest[..pos]);

            let name = &after[..len];
            let inner = conditions.get(name).map_or(DEFAULT_CAPTURE, String::as_str);
            expr.push_str("(?P<");
            expr.push_str(&group_name(names.len()));
            expr.push('>');
            expr.push_str(inner);
            expr.push(')');
            names.push(name.into());

            rest = &after[len..];
        }
        expr.push_str(rest);
        expr.push_str("/?$");

        let regex = Regex::new(&expr).map_err(|e| RouterError::Configuration {
            pattern: source.to_owned(),
            parameter: blame_condition(&names, conditions),
            source: e,
        })?;

        let groups = (0..names.len())
            .map(|i| group_index(&regex, &group_name(i)))
            .collect();

        Ok(Self {
            source: source.into(),
            names,
            groups,
            regex,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// The compiled expression text; two patterns conflict when these are equal.
    pub fn expression(&self) -> &str {
        self.regex.as_str()
    }

    pub fn parameter_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(|n| &**n)
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Raw (undecoded) captured values paired with their names, in pattern order.
    pub fn captures<'p>(&self, path: &'p str) -> Option<SmallVec<[(&str, &'p str); 8]>> {
        let caps = self.regex.captures(path)?;
        let mut buf = SmallVec::new();
        for (name, &group) in self.names.iter().zip(&self.groups) {
            let value = caps.get(group).map(|m| m.as_str()).unwrap_or("");
            buf.push((&**name, value));
        }
        Some(buf)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl PartialEq for RoutePattern {
    fn eq(&self, other: &Self) -> bool {
        self.expression() == other.expression()
    }
}

impl Eq for RoutePattern {}

#[inline]
fn word_len(s: &str) -> usize {
    s.bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count()
}

#[inline]
fn group_name(index: usize) -> String {
    format!("{}{}", GROUP_PREFIX, index)
}

// every name passed here was emitted into `regex`
fn group_index(regex: &Regex, name: &str) -> usize {
    regex
        .capture_names()
        .position(|n| n == Some(name))
        .unwrap_or(0)
}

// the first condition of the pattern that is invalid on its own, if any
fn blame_condition(names: &[Box<str>], conditions: &HashMap<String, String>) -> Option<String> {
    names.iter().find_map(|name| {
        let cond = conditions.get(&**name)?;
        match Regex::new(cond) {
            Ok(_) => None,
            Err(_) => Some(name.to_string()),
        }
    })
}
