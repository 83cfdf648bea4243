//! Path patterns and their compiled matchers.
//!
//! A path pattern is split on `/` and each non-empty segment is one of:
//!
//! - a literal, matched ASCII case-insensitively
//! - `:name`, capturing one segment
//! - `:name?`, an optional capture which is omitted from the result when absent
//! - `:name.ext`, capturing the segment stem before a literal suffix
//! - `*` or `*?` (last segment only), capturing the remainder as `"wild"`
//!
//! A pre-built [`Regex`] is used as-is and contributes its named groups.

use crate::router::{Params, RouterError};

use std::fmt;

use regex::Regex;

const STAR: char = '*';
const COLON: char = ':';
const SLASH: char = '/';
const QMARK: char = '?';
const DOT: char = '.';

/// The capture name of a trailing wildcard.
pub const WILD: &str = "wild";

#[derive(Clone)]
pub enum Pattern {
    Path(Box<str>),
    Regex(Regex),
}

impl Pattern {
    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Path(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Path(p) => p,
            Self::Regex(r) => r.as_str(),
        }
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::Path("/".into())
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Self::Path(s.into())
    }
}

impl From<String> for Pattern {
    fn from(s: String) -> Self {
        Self::Path(s.into())
    }
}

impl From<Regex> for Pattern {
    fn from(r: Regex) -> Self {
        Self::Regex(r)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Path(lhs), Self::Path(rhs)) => lhs == rhs,
            (Self::Regex(lhs), Self::Regex(rhs)) => lhs.as_str() == rhs.as_str(),
            _ => false,
        }
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(p) => f.debug_tuple("Path").field(p).finish(),
            Self::Regex(r) => f.debug_tuple("Regex").field(&r.as_str()).finish(),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A compiled pattern.
#[derive(Debug, Clone)]
pub struct Matcher {
    kind: Kind,
}

#[derive(Debug, Clone)]
enum Kind {
    Keys {
        regex: Regex,
        keys: Vec<Box<str>>,
    },
    Named {
        base: Option<Box<Matcher>>,
        regex: Regex,
    },
}

impl Matcher {
    /// Compiles `pattern` under `base`.
    ///
    /// Path patterns are joined onto `base` before compiling. A regex cannot be
    /// joined, so under a non-root base the path is split at a segment boundary:
    /// the head must match the whole base and the regex is tested against the
    /// tail. The longest matching head wins.
    ///
    /// A `loose` matcher accepts any path that starts with the pattern at a
    /// segment boundary.
    pub fn compile(pattern: &Pattern, base: &str, loose: bool) -> Result<Self, RouterError> {
        match pattern {
            Pattern::Path(p) => Self::compile_path(&join(base, p), loose),
            Pattern::Regex(regex) => {
                let base = if is_root(base) {
                    None
                } else {
                    Some(Box::new(Self::compile_path(base, false)?))
                };
                let regex = regex.clone();
                Ok(Self {
                    kind: Kind::Named { base, regex },
                })
            }
        }
    }

    fn compile_path(path: &str, loose: bool) -> Result<Self, RouterError> {
        let (source, keys) = parse(path, loose)?;
        let regex = Regex::new(&source).map_err(|source| RouterError::InvalidPattern {
            pattern: path.to_owned(),
            source,
        })?;
        Ok(Self {
            kind: Kind::Keys { regex, keys },
        })
    }

    /// Capture names in declaration order, or `None` for a pre-built regex.
    pub fn keys(&self) -> Option<&[Box<str>]> {
        match self.kind {
            Kind::Keys { ref keys, .. } => Some(keys),
            Kind::Named { .. } => None,
        }
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.test(path).is_some()
    }

    /// Tests `path`, returning its captures on success.
    pub fn test(&self, path: &str) -> Option<Params> {
        let mut params = Params::new();
        self.test_into(path, &mut params)?;
        Some(params)
    }

    fn test_into(&self, path: &str, params: &mut Params) -> Option<()> {
        match self.kind {
            Kind::Keys {
                ref regex,
                ref keys,
            } => {
                let caps = regex.captures(path)?;
                for (i, name) in keys.iter().enumerate() {
                    if let Some(m) = caps.get(i + 1) {
                        params.insert(name.clone(), m.as_str());
                    }
                }
                Some(())
            }
            Kind::Named {
                ref base,
                ref regex,
            } => {
                let base = match base {
                    Some(base) => base,
                    None => return test_named(regex, path, params),
                };
                // Longest base first; every split point is a segment boundary.
                let ends = path
                    .match_indices(SLASH)
                    .map(|(i, _)| i)
                    .chain(Some(path.len()));
                for end in ends.rev() {
                    let mut caps = Params::new();
                    if base.test_into(&path[..end], &mut caps).is_some()
                        && test_named(regex, &path[end..], &mut caps).is_some()
                    {
                        params.merge(caps);
                        return Some(());
                    }
                }
                None
            }
        }
    }
}

fn test_named(regex: &Regex, path: &str, params: &mut Params) -> Option<()> {
    let owned;
    let path = if path.starts_with(SLASH) {
        path
    } else {
        owned = format!("/{}", path);
        &owned
    };
    let caps = regex.captures(path)?;
    for name in regex.capture_names().flatten() {
        if let Some(m) = caps.name(name) {
            params.insert(name, m.as_str());
        }
    }
    Some(())
}

/// Joins two path prefixes with exactly one separating slash.
pub fn join(base: &str, path: &str) -> String {
    let base = base.trim_end_matches(SLASH);
    let path = path.trim_start_matches(SLASH);
    let mut out = String::with_capacity(base.len() + path.len() + 2);
    if !base.starts_with(SLASH) {
        out.push(SLASH);
    }
    out.push_str(base);
    if !path.is_empty() {
        if !out.ends_with(SLASH) {
            out.push(SLASH);
        }
        out.push_str(path);
    }
    out
}

#[inline]
fn is_root(base: &str) -> bool {
    base.trim_matches(SLASH).is_empty()
}

fn check_parts(parts: &[&str]) -> Result<(), RouterError> {
    for (i, &part) in parts.iter().enumerate() {
        if part.starts_with(STAR) && i + 1 != parts.len() {
            return Err(RouterError::MisplacedWildcard);
        }
        if let Some(name) = part.strip_prefix(COLON) {
            if name.is_empty() || name.starts_with(QMARK) || name.starts_with(DOT) {
                return Err(RouterError::EmptyCaptureName);
            }
        }
    }
    Ok(())
}

fn parse(path: &str, loose: bool) -> Result<(String, Vec<Box<str>>), RouterError> {
    let parts: Vec<&str> = path.split(SLASH).filter(|s| !s.is_empty()).collect();
    check_parts(&parts)?;

    let mut keys: Vec<Box<str>> = Vec::new();
    let mut source = String::from("(?i)^");

    for part in parts {
        if let Some(rest) = part.strip_prefix(STAR) {
            keys.push(WILD.into());
            source.push_str(if rest.starts_with(QMARK) {
                "(?:/(.*))?"
            } else {
                "/(.*)"
            });
        } else if let Some(rest) = part.strip_prefix(COLON) {
            let optional = rest.find(QMARK);
            let ext = rest.find(DOT);
            let end = rest.find([QMARK, DOT]).unwrap_or(rest.len());
            keys.push(rest[..end].into());

            let suffix = match ext {
                Some(i) => regex::escape(&rest[i..].replace(QMARK, "")),
                None => String::new(),
            };
            if optional.is_some() {
                source.push_str("(?:/([^/]+?)");
                source.push_str(&suffix);
                source.push_str(")?");
            } else {
                source.push_str("/([^/]+?)");
                source.push_str(&suffix);
            }
        } else {
            source.push(SLASH);
            source.push_str(&regex::escape(part));
        }
    }

    source.push_str(if loose { "(?:/|$)" } else { "/?$" });
    Ok((source, keys))
}
