//! In-memory trail lookup.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::airports::DirectoryError;
use crate::domain::{Activity, ActivityCategory, ActivityId, DomainError};

/// Trail difficulty rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Strenuous,
}

/// One trail record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trail {
    pub name: String,
    pub park_code: String,
    pub park_name: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub permit_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Trail {
    /// Turn the trail into a hike activity on `day`.
    pub fn to_activity(&self, id: ActivityId, day: u32) -> Result<Activity, DomainError> {
        let mut activity =
            Activity::new(id, self.name.clone(), ActivityCategory::Hike, day)?.with_park(&self.park_name);
        if let Some(url) = &self.url {
            activity = activity.with_link(url)?;
        }
        if self.permit_required {
            activity = activity.requiring_permit();
        }
        Ok(activity)
    }
}

/// Thread-safe, cheaply cloneable trail directory.
#[derive(Debug, Clone, Default)]
pub struct TrailDirectory {
    trails: Arc<Vec<Trail>>,
}

impl TrailDirectory {
    pub fn new(trails: Vec<Trail>) -> Self {
        Self {
            trails: Arc::new(trails),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, DirectoryError> {
        let trails: Vec<Trail> = serde_json::from_str(json).map_err(|e| DirectoryError::Json {
            message: e.to_string(),
        })?;
        Ok(Self::new(trails))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| DirectoryError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.trails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trails.is_empty()
    }

    /// Trail with this name, ignoring case. Within a park if `park_code`
    /// is given.
    pub fn by_name(&self, name: &str, park_code: Option<&str>) -> Option<&Trail> {
        let name = name.trim();
        self.trails.iter().find(|t| {
            t.name.eq_ignore_ascii_case(name)
                && park_code.is_none_or(|code| t.park_code.eq_ignore_ascii_case(code.trim()))
        })
    }

    /// Trails for the given parks.
    ///
    /// Matches on park codes first; if that finds nothing, falls back to
    /// case-insensitive park-name matching.
    pub fn find(&self, park_codes: &[String], park_names: &[String]) -> Vec<Trail> {
        let codes: Vec<String> = park_codes.iter().map(|c| c.trim().to_lowercase()).collect();
        let by_code: Vec<Trail> = self
            .trails
            .iter()
            .filter(|t| codes.contains(&t.park_code.to_lowercase()))
            .cloned()
            .collect();
        if !by_code.is_empty() {
            return by_code;
        }

        let names: Vec<String> = park_names.iter().map(|n| n.trim().to_lowercase()).collect();
        self.trails
            .iter()
            .filter(|t| names.contains(&t.park_name.to_lowercase()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trail(name: &str, code: &str, park: &str, permit: bool) -> Trail {
        Trail {
            name: name.to_string(),
            park_code: code.to_string(),
            park_name: park.to_string(),
            difficulty: Difficulty::Strenuous,
            permit_required: permit,
            url: Some(format!("https://www.nps.gov/{code}/")),
        }
    }

    fn directory() -> TrailDirectory {
        TrailDirectory::new(vec![
            trail("Angels Landing", "zion", "Zion National Park", true),
            trail("The Narrows", "zion", "Zion National Park", false),
            trail("Delicate Arch", "arch", "Arches National Park", false),
        ])
    }

    #[test]
    fn find_by_code() {
        let found = directory().find(&["ZION".to_string()], &[]);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn falls_back_to_names() {
        let found = directory().find(
            &["nope".to_string()],
            &["arches national park".to_string()],
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Delicate Arch");
    }

    #[test]
    fn nothing_matches() {
        assert!(directory().find(&[], &["Acadia National Park".to_string()]).is_empty());
    }

    #[test]
    fn lookup_by_name() {
        let dir = directory();
        assert_eq!(dir.by_name(" the narrows ", None).map(|t| t.park_code.as_str()), Some("zion"));
        assert!(dir.by_name("The Narrows", Some("ZION")).is_some());
        assert!(dir.by_name("The Narrows", Some("arch")).is_none());
        assert!(dir.by_name("Half Dome", None).is_none());
    }

    #[test]
    fn to_activity_carries_flags() {
        let t = trail("Angels Landing", "zion", "Zion National Park", true);
        let a = t.to_activity(ActivityId(7), 2).unwrap();
        assert_eq!(a.category, ActivityCategory::Hike);
        assert!(a.permit_required);
        assert_eq!(a.park.as_deref(), Some("Zion National Park"));
        assert_eq!(a.link.as_deref(), Some("https://www.nps.gov/zion/"));
    }

    #[test]
    fn bundled_data_loads() {
        let dir = TrailDirectory::load("data/trails.json").unwrap();
        assert!(!dir.find(&["yell".to_string()], &[]).is_empty());
    }
}
