//! Member identifiers backed by string interning.
//!
//! This module provides the [`MemberId`] type. Identifiers in the member
//! file are opaque: stored exports carry timestamp-derived strings, while
//! hand-written data sets often use plain integers. Both spellings intern to the same [`MemberId`], so `42` and
//! `"42"` refer to the same person.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, Visitor},
};
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for member identifiers.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock")
}

/// Opaque, cheaply copyable identifier of a family member.
///
/// # Examples
///
/// ```
/// use shajara_core::identifier::MemberId;
///
/// let by_name = MemberId::new("1700000000000");
/// let by_number = MemberId::from(1_700_000_000_000_u64);
/// assert_eq!(by_name, by_number);
/// assert_eq!(by_name, "1700000000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberId(DefaultSymbol);

impl MemberId {
    /// Creates a `MemberId` from its string form.
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }

    /// Returns `true` if the identifier is the empty string.
    ///
    /// Member files write `""` for an unset relationship, so an empty
    /// identifier is never a meaningful reference.
    pub fn is_empty(&self) -> bool {
        interner().resolve(self.0).is_none_or(str::is_empty)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner();
        let value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{value}")
    }
}

impl std::str::FromStr for MemberId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for MemberId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<u64> for MemberId {
    /// Numeric identifiers intern under their decimal spelling.
    fn from(value: u64) -> Self {
        Self::new(&value.to_string())
    }
}

impl PartialEq<str> for MemberId {
    fn eq(&self, other: &str) -> bool {
        interner().resolve(self.0) == Some(other)
    }
}

impl PartialEq<&str> for MemberId {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for MemberId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct MemberIdVisitor;

impl Visitor<'_> for MemberIdVisitor {
    type Value = MemberId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a member identifier as a string or an integer")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(MemberId::new(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(MemberId::from(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(MemberId::new(&value.to_string()))
    }
}

impl<'de> Deserialize<'de> for MemberId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MemberIdVisitor)
    }
}
