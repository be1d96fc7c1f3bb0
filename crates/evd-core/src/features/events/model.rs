//! Event records and their inputs.
//!
//! Records serialize in the camelCase shape the views consume
//! (`maxAttendees`, `createdBy`).

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Owner recorded on every event created through the store.
pub const EVENT_CREATOR: &str = "admin";

/// Where an event happens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// A stored event.
///
/// `attendees` is signed: nothing stops an update from driving it below zero,
/// and `max_attendees` is never compared against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub location: Location,
    pub attendees: i64,
    pub max_attendees: i64,
    pub category: String,
    pub created_by: String,
}

/// Caller input for `add_event`.
///
/// `attendees` and `created_by` are accepted so any form payload
/// deserializes, but the store discards both. An `id`, when given, replaces
/// the issued one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    pub location: Location,
    #[serde(default)]
    pub max_attendees: i64,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendees: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

impl NewEvent {
    /// Builds the stored record. The input's own id wins over `issued_id`.
    /// Attendance starts at zero and the creator is always
    /// [`EVENT_CREATOR`], whatever the input said.
    pub(crate) fn into_event(self, issued_id: i64) -> Event {
        Event {
            id: self.id.unwrap_or(issued_id),
            title: self.title,
            description: self.description,
            date: self.date,
            time: self.time,
            location: self.location,
            attendees: 0,
            max_attendees: self.max_attendees,
            category: self.category,
            created_by: EVENT_CREATOR.to_string(),
        }
    }
}

/// A shallow update: every `Some` field replaces the stored one, everything
/// else is kept. `location` is replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(with = "hhmm::option", skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendees: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges this patch over `event`.
    pub fn apply_to(self, event: &mut Event) {
        let EventPatch {
            id,
            title,
            description,
            date,
            time,
            location,
            attendees,
            max_attendees,
            category,
            created_by,
        } = self;

        if let Some(v) = id {
            event.id = v;
        }
        if let Some(v) = title {
            event.title = v;
        }
        if let Some(v) = description {
            event.description = v;
        }
        if let Some(v) = date {
            event.date = v;
        }
        if let Some(v) = time {
            event.time = v;
        }
        if let Some(v) = location {
            event.location = v;
        }
        if let Some(v) = attendees {
            event.attendees = v;
        }
        if let Some(v) = max_attendees {
            event.max_attendees = v;
        }
        if let Some(v) = category {
            event.category = v;
        }
        if let Some(v) = created_by {
            event.created_by = v;
        }
    }
}

/// The current user's response to an event.
///
/// Anything other than the two known statuses is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RsvpStatus {
    Attending,
    Interested,
    Other(String),
}

impl RsvpStatus {
    pub fn as_str(&self) -> &str {
        match self {
            RsvpStatus::Attending => "attending",
            RsvpStatus::Interested => "interested",
            RsvpStatus::Other(s) => s,
        }
    }
}

impl From<&str> for RsvpStatus {
    fn from(s: &str) -> Self {
        match s {
            "attending" => RsvpStatus::Attending,
            "interested" => RsvpStatus::Interested,
            other => RsvpStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for RsvpStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "attending" => RsvpStatus::Attending,
            "interested" => RsvpStatus::Interested,
            _ => RsvpStatus::Other(s),
        }
    }
}

impl From<RsvpStatus> for String {
    fn from(status: RsvpStatus) -> Self {
        match status {
            RsvpStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary counts over the whole store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStats {
    pub total: usize,
    pub upcoming: usize,
    pub past: usize,
    pub total_attendees: i64,
}

/// `HH:MM` serde format for event times.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn parse(s: &str) -> Result<NaiveTime, chrono::ParseError> {
        NaiveTime::parse_from_str(s, FORMAT)
    }

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(serde::de::Error::custom)
    }

    pub mod option {
        use chrono::NaiveTime;
        use serde::{Deserialize, Deserializer, Serializer};

        #[allow(clippy::ref_option)]
        pub fn serialize<S: Serializer>(
            time: &Option<NaiveTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match time {
                Some(t) => super::serialize(t, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveTime>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|s| super::parse(&s).map_err(serde::de::Error::custom))
                .transpose()
        }
    }
}
