//! Activity model matching the `GET /activities` payload.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Everything the service reports about one activity, minus its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Server order, kept as-is.
    pub participants: Vec<String>,
}

/// A named activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub details: ActivityDetails,
}

impl Activity {
    pub fn new(name: impl Into<String>, details: ActivityDetails) -> Self {
        Self {
            name: name.into(),
            details,
        }
    }

    /// Remaining capacity. Negative when the server reports more participants
    /// than the capacity allows.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.details.max_participants) - self.details.participants.len() as i64
    }
}

/// The full activity collection, in the order the server listed it.
///
/// Only ever built whole (from a response or an iterator); there is no
/// in-place mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    activities: Vec<Activity>,
}

impl Roster {
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.activities.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|a| a.name.as_str())
    }

    /// Insert keeping first-seen position; a repeated name takes the later value.
    fn upsert(&mut self, activity: Activity) {
        match self.activities.iter_mut().find(|a| a.name == activity.name) {
            Some(existing) => existing.details = activity.details,
            None => self.activities.push(activity),
        }
    }
}

impl FromIterator<Activity> for Roster {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        let mut roster = Roster::default();
        for activity in iter {
            roster.upsert(activity);
        }
        roster
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.activities.iter()
    }
}

impl Serialize for Roster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for activity in &self.activities {
            map.serialize_entry(&activity.name, &activity.details)?;
        }
        map.end()
    }
}

struct RosterVisitor;

impl<'de> Visitor<'de> for RosterVisitor {
    type Value = Roster;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of activity name to activity details")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Roster, M::Error> {
        let mut roster = Roster {
            activities: Vec::with_capacity(access.size_hint().unwrap_or(0)),
        };
        while let Some((name, details)) = access.next_entry::<String, ActivityDetails>()? {
            roster.upsert(Activity { name, details });
        }
        Ok(roster)
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RosterVisitor)
    }
}
