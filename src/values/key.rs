use std::{fmt, str::FromStr};

use proptest::prelude::*;

use crate::prelude::*;

/// A key accepted by [`LazyTree`](crate::collections::LazyTree).
///
/// Keys live in the closed range `[Key::MIN, Key::MAX]`; a `Key` can only be
/// built through a range check, so code holding one never has to validate it
/// again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key(u8);

impl Key {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 99;

    pub fn new(value: i64) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(Error::KeyOutOfRange(value));
        }

        Ok(Self(value as u8))
    }

    pub fn get(&self) -> i64 {
        self.0 as i64
    }
}

impl TryFrom<i64> for Key {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Key> for i64 {
    fn from(key: Key) -> Self {
        key.get()
    }
}

impl FromStr for Key {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: i64 = s.trim().parse()?;
        Self::new(value)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Arbitrary for Key {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (Self::MIN..=Self::MAX).prop_map(|value| Self(value as u8)).boxed()
    }
}
