//! The family member record.
//!
//! A [`Member`] is one person in the family data set together with the three
//! directed relationship claims it makes: a father, a mother and a spouse.
//! Claims are stored exactly as recorded. Nothing here checks that a claimed
//! father is male, that the spouse claims back, or that the referenced member
//! still exists; those questions are answered (leniently) by the relationship
//! index built on top of a member list.
//!
//! The serde representation is the member file format: camelCase fields,
//! with `""` standing for an absent reference or date. An exported
//! `familyMembers` array deserializes directly:
//!
//! ```
//! # use shajara_core::member::{Gender, Member};
//! let json = r#"{
//!     "id": "1700000000001",
//!     "name": "Dilnoza",
//!     "birthDate": "1990-04-12",
//!     "deathDate": "",
//!     "gender": "female",
//!     "fatherId": "1700000000000",
//!     "motherId": null,
//!     "spouseId": "",
//!     "image": ""
//! }"#;
//! let member: Member = serde_json::from_str(json).unwrap();
//! assert_eq!(member.gender(), Gender::Female);
//! assert!(member.father_id().is_some());
//! assert!(member.mother_id().is_none());
//! assert!(member.spouse_id().is_none());
//! assert!(member.image().is_none());
//! assert_eq!(member.birth_year(), Some(1990));
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::identifier::MemberId;

/// Calendar date format used by the member store.
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Error returned when a stored date cannot be read as a calendar date.
#[derive(Debug, Error)]
#[error("invalid calendar date '{input}': {source}")]
pub struct DateParseError {
    input: String,
    #[source]
    source: time::error::Parse,
}

/// Parses a stored date such as `1990-04-12`.
///
/// Values carrying a time component (`1990-04-12T00:00:00.000Z`) are accepted
/// and truncated to the date.
///
/// # Errors
///
/// Returns [`DateParseError`] when the date portion is not a valid
/// `YYYY-MM-DD` calendar date.
pub fn parse_calendar_date(input: &str) -> Result<Date, DateParseError> {
    let date_part = input.split_once('T').map_or(input, |(date, _)| date);
    Date::parse(date_part.trim(), DATE_FORMAT).map_err(|source| DateParseError {
        input: input.to_string(),
        source,
    })
}

/// Recorded gender of a member.
///
/// Only used to offer parent candidates; layout never depends on it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// A person record in the family data set.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    id: MemberId,
    #[serde(default)]
    name: String,
    #[serde(default, with = "calendar_date")]
    birth_date: Option<Date>,
    #[serde(default, with = "calendar_date")]
    death_date: Option<Date>,
    #[serde(default)]
    gender: Gender,
    #[serde(default, deserialize_with = "reference")]
    father_id: Option<MemberId>,
    #[serde(default, deserialize_with = "reference")]
    mother_id: Option<MemberId>,
    #[serde(default, deserialize_with = "reference")]
    spouse_id: Option<MemberId>,
    #[serde(default, deserialize_with = "non_empty_string")]
    image: Option<String>,
}

impl Member {
    /// Creates a member with no dates, relationships or image.
    pub fn new(id: impl Into<MemberId>, name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            birth_date: None,
            death_date: None,
            gender,
            father_id: None,
            mother_id: None,
            spouse_id: None,
            image: None,
        }
    }

    /// Sets the father reference (builder style).
    pub fn with_father(mut self, father_id: impl Into<MemberId>) -> Self {
        self.father_id = Some(father_id.into());
        self
    }

    /// Sets the mother reference (builder style).
    pub fn with_mother(mut self, mother_id: impl Into<MemberId>) -> Self {
        self.mother_id = Some(mother_id.into());
        self
    }

    /// Sets the spouse reference (builder style).
    pub fn with_spouse(mut self, spouse_id: impl Into<MemberId>) -> Self {
        self.spouse_id = Some(spouse_id.into());
        self
    }

    /// Sets the birth date (builder style).
    pub fn with_birth_date(mut self, date: Date) -> Self {
        self.birth_date = Some(date);
        self
    }

    /// Sets the death date (builder style).
    pub fn with_death_date(mut self, date: Date) -> Self {
        self.death_date = Some(date);
        self
    }

    /// Sets the opaque image reference (builder style).
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn birth_date(&self) -> Option<Date> {
        self.birth_date
    }

    pub fn death_date(&self) -> Option<Date> {
        self.death_date
    }

    pub fn father_id(&self) -> Option<MemberId> {
        self.father_id
    }

    pub fn mother_id(&self) -> Option<MemberId> {
        self.mother_id
    }

    pub fn spouse_id(&self) -> Option<MemberId> {
        self.spouse_id
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Returns `true` when neither a father nor a mother is recorded.
    ///
    /// Only the presence of the fields matters: a member whose father
    /// reference dangles is not a root.
    pub fn is_root(&self) -> bool {
        self.father_id.is_none() && self.mother_id.is_none()
    }

    /// Returns the birth year, if a birth date is recorded.
    pub fn birth_year(&self) -> Option<i32> {
        self.birth_date.map(Date::year)
    }

    /// Returns the age in whole calendar years.
    ///
    /// The age is counted up to the death year for deceased members and up to
    /// `today` otherwise. Only years are compared, so the result is the year
    /// difference rather than the exact anniversary count. Returns `None`
    /// without a birth date or when the difference is not positive.
    ///
    /// # Examples
    ///
    /// ```
    /// # use shajara_core::member::{Gender, Member};
    /// # use time::macros::date;
    /// let member = Member::new("1", "Bobur", Gender::Male).with_birth_date(date!(1950 - 06 - 01));
    /// assert_eq!(member.age_on(date!(2024 - 01 - 01)), Some(74));
    ///
    /// let deceased = member.with_death_date(date!(2010 - 03 - 15));
    /// assert_eq!(deceased.age_on(date!(2024 - 01 - 01)), Some(60));
    /// ```
    pub fn age_on(&self, today: Date) -> Option<i32> {
        let birth = self.birth_date?;
        let end = self.death_date.unwrap_or(today);
        let age = end.year() - birth.year();
        (age > 0).then_some(age)
    }
}

/// Reads a relationship reference, treating `null`, a missing field and the
/// empty string alike as "no reference".
fn reference<'de, D>(deserializer: D) -> Result<Option<MemberId>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = Option::<MemberId>::deserialize(deserializer)?;
    Ok(id.filter(|id| !id.is_empty()))
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|value| !value.is_empty()))
}

/// Serde adapter for optional `YYYY-MM-DD` dates stored as strings.
mod calendar_date {
    use serde::{Deserialize, Deserializer, Serializer, de, ser};
    use time::Date;

    use super::{DATE_FORMAT, parse_calendar_date};

    pub(super) fn serialize<S>(date: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => {
                let formatted = date.format(DATE_FORMAT).map_err(ser::Error::custom)?;
                serializer.serialize_some(&formatted)
            }
            None => serializer.serialize_none(),
        }
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(value) if !value.trim().is_empty() => parse_calendar_date(&value)
                .map(Some)
                .map_err(de::Error::custom),
            _ => Ok(None),
        }
    }
}
