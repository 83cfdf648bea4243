use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Path parameters captured while resolving a request.
///
/// Keys keep their first-insertion order. Inserting an existing key replaces
/// its value in place, so merging the captures of several routes leaves the
/// value of the last matching route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    buf: SmallVec<[(Box<str>, Box<str>); 4]>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.buf
            .iter()
            .find_map(|(k, v)| if &**k == name { Some(&**v) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn insert(&mut self, name: impl Into<Box<str>>, value: impl Into<Box<str>>) {
        let name = name.into();
        let value = value.into();
        match self.buf.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.buf.push((name, value)),
        }
    }

    /// Merges `other` into `self`, overwriting keys that already exist.
    pub fn merge(&mut self, other: Params) {
        for (k, v) in other.buf {
            self.insert(k, v);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.buf.iter().map(|(k, v)| (&**k, &**v))
    }
}

impl Deref for Params {
    type Target = [(Box<str>, Box<str>)];
    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl IntoIterator for Params {
    type Item = (Box<str>, Box<str>);
    type IntoIter = smallvec::IntoIter<[(Box<str>, Box<str>); 4]>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<Box<str>>,
    V: Into<Box<str>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}
