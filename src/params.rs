use std::collections::HashMap;
use std::iter::FromIterator;
use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

type KvBuffer = SmallVec<[(Box<str>, String); 8]>;

/// An ordered name → value mapping.
///
/// Keys are unique: inserting an existing key replaces its value in place,
/// keeping the position of the first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    buf: KvBuffer,
}

impl Params {
    pub fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.buf
            .iter()
            .find_map(|(k, v)| if &**k == name { Some(v.as_str()) } else { None })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    /// Returns the previous value of `name`, if any.
    pub fn insert(&mut self, name: impl Into<Box<str>>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self.buf.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => Some(std::mem::replace(v, value)),
            None => {
                self.buf.push((name, value));
                None
            }
        }
    }

    /// Overlays every entry of `other` on top of `self`.
    pub fn merge(&mut self, other: &Params) {
        for (k, v) in other.iter() {
            self.insert(k, v);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.buf.iter().map(|(k, v)| (&**k, v.as_str()))
    }

    pub fn into_hash_map(self) -> HashMap<String, String> {
        self.into_iter().collect()
    }
}

impl Deref for Params {
    type Target = [(Box<str>, String)];
    fn deref(&self) -> &Self::Target {
        &*self.buf
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<Box<str>>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        params.extend(iter);
        params
    }
}

impl<K, V> Extend<(K, V)> for Params
where
    K: Into<Box<str>>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = IntoIter;
    fn into_iter(self) -> IntoIter {
        IntoIter {
            inner: self.buf.into_iter(),
        }
    }
}

pub struct IntoIter {
    inner: smallvec::IntoIter<[(Box<str>, String); 8]>,
}

impl Iterator for IntoIter {
    type Item = (String, String);

    fn next(&mut self) -> Option<Self::Item> {
        let (k, v) = self.inner.next()?;
        Some((k.into(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        let (k, v) = self.inner.next_back()?;
        Some((k.into(), v))
    }
}

impl ExactSizeIterator for IntoIter {}
