//! User-created trip activities.

use std::fmt;
use std::str::FromStr;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::DomainError;

/// Accept `raw` as a link only if it is an absolute http(s) URL.
pub fn web_link(raw: &str) -> Result<String, DomainError> {
    let raw = raw.trim();
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(url.into()),
        _ => Err(DomainError::UnsafeLink(raw.to_string())),
    }
}

/// Session-unique activity identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(pub u32);

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What kind of thing an activity is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Hike,
    Viewpoint,
    #[default]
    Other,
}

impl ActivityCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityCategory::Hike => "hike",
            ActivityCategory::Viewpoint => "viewpoint",
            ActivityCategory::Other => "other",
        }
    }
}

impl FromStr for ActivityCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hike" | "trail" => Ok(ActivityCategory::Hike),
            "viewpoint" | "view" => Ok(ActivityCategory::Viewpoint),
            "other" | "custom" => Ok(ActivityCategory::Other),
            other => Err(DomainError::UnknownCategory(other.to_string())),
        }
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hike, viewpoint or custom entry placed on a trip day.
///
/// `day` is 1-based. It is not checked against the trip length: the
/// itinerary shows out-of-range activities separately instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub name: String,
    pub category: ActivityCategory,
    pub day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub park: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub permit_required: bool,
    #[serde(default)]
    pub shuttle_required: bool,
}

impl Activity {
    pub fn new(
        id: ActivityId,
        name: impl Into<String>,
        category: ActivityCategory,
        day: u32,
    ) -> Result<Self, DomainError> {
        if day == 0 {
            return Err(DomainError::ZeroDay);
        }
        Ok(Self {
            id,
            name: name.into(),
            category,
            day,
            park: None,
            link: None,
            permit_required: false,
            shuttle_required: false,
        })
    }

    pub fn with_park(mut self, park: impl Into<String>) -> Self {
        self.park = Some(park.into());
        self
    }

    /// Attach a web link. Anything but http(s) is rejected.
    pub fn with_link(mut self, link: &str) -> Result<Self, DomainError> {
        self.link = Some(web_link(link)?);
        Ok(self)
    }

    pub fn requiring_permit(mut self) -> Self {
        self.permit_required = true;
        self
    }

    pub fn requiring_shuttle(mut self) -> Self {
        self.shuttle_required = true;
        self
    }

    /// Case-insensitive match of `needle` against name, category and park.
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.category.as_str().contains(&needle)
            || self
                .park
                .as_ref()
                .is_some_and(|p| p.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hike() -> Activity {
        Activity::new(ActivityId(1), "Angels Landing", ActivityCategory::Hike, 2)
            .unwrap()
            .with_park("Zion National Park")
            .requiring_permit()
    }

    #[test]
    fn builder_flags() {
        let a = hike();
        assert!(a.permit_required);
        assert!(!a.shuttle_required);
        assert_eq!(a.park.as_deref(), Some("Zion National Park"));
    }

    #[test]
    fn links_must_be_web_urls() {
        let a = hike().with_link(" https://www.nps.gov/zion/planyourvisit/angels-landing-hiking-permits.htm ").unwrap();
        assert!(a.link.unwrap().starts_with("https://www.nps.gov/"));

        for bad in ["javascript:alert(1)", "data:text/html,hi", "/relative", "nps.gov"] {
            assert!(
                matches!(hike().with_link(bad), Err(DomainError::UnsafeLink(_))),
                "{bad} accepted"
            );
        }
    }

    #[test]
    fn rejects_day_zero() {
        let err = Activity::new(ActivityId(1), "x", ActivityCategory::Other, 0).unwrap_err();
        assert_eq!(err, DomainError::ZeroDay);
    }

    #[test]
    fn text_matching() {
        let a = hike();
        assert!(a.matches_text("angels"));
        assert!(a.matches_text("HIKE"));
        assert!(a.matches_text("zion"));
        assert!(a.matches_text(""));
        assert!(!a.matches_text("geyser"));
    }

    #[test]
    fn category_parsing() {
        assert_eq!("Hike".parse::<ActivityCategory>().unwrap(), ActivityCategory::Hike);
        assert_eq!(
            "view".parse::<ActivityCategory>().unwrap(),
            ActivityCategory::Viewpoint
        );
        assert!("picnic".parse::<ActivityCategory>().is_err());
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_value(hike()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["category"], "hike");
        assert!(json.get("link").is_none());
    }
}
