use crate::router::RouterError;

use std::fmt;
use std::str::FromStr;

/// The request methods a route can be bound to.
///
/// [`Method::All`] is the wildcard: a route registered with it accepts every
/// method, and middleware routes always carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    All,
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "",
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    #[inline]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl Default for Method {
    fn default() -> Self {
        Self::All
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("ALL"),
            m => f.write_str(m.as_str()),
        }
    }
}

impl FromStr for Method {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const TABLE: &[(&str, Method)] = &[
            ("ALL", Method::All),
            ("GET", Method::Get),
            ("HEAD", Method::Head),
            ("POST", Method::Post),
            ("PUT", Method::Put),
            ("PATCH", Method::Patch),
            ("DELETE", Method::Delete),
        ];

        if s.is_empty() {
            return Ok(Self::All);
        }
        TABLE
            .iter()
            .find_map(|&(name, m)| if name.eq_ignore_ascii_case(s) { Some(m) } else { None })
            .ok_or_else(|| RouterError::UnknownMethod(s.to_owned()))
    }
}

#[cfg(feature = "http")]
impl TryFrom<&http::Method> for Method {
    type Error = RouterError;

    fn try_from(m: &http::Method) -> Result<Self, Self::Error> {
        match *m {
            http::Method::GET => Ok(Self::Get),
            http::Method::HEAD => Ok(Self::Head),
            http::Method::POST => Ok(Self::Post),
            http::Method::PUT => Ok(Self::Put),
            http::Method::PATCH => Ok(Self::Patch),
            http::Method::DELETE => Ok(Self::Delete),
            _ => Err(RouterError::UnknownMethod(m.as_str().to_owned())),
        }
    }
}
