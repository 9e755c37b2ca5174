//! NPS API DTOs and the domain types built from them.

use serde::{Deserialize, Serialize};

use crate::domain::{Coordinate, web_link};

/// Response from `/alerts`.
#[derive(Debug, Clone, Deserialize)]
pub struct AlertsResponse {
    #[serde(default)]
    pub data: Vec<AlertDto>,
}

/// One alert as the API sends it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub park_code: String,
}

/// A current park alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub park_code: String,
}

impl From<AlertDto> for Alert {
    fn from(dto: AlertDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            category: dto.category,
            url: web_link(&dto.url).ok(),
            park_code: dto.park_code.to_lowercase(),
        }
    }
}

/// Response from `/parks`.
#[derive(Debug, Clone, Deserialize)]
pub struct ParksResponse {
    #[serde(default)]
    pub data: Vec<ParkDto>,
}

/// Park metadata. Coordinates arrive as strings and may be empty.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkDto {
    #[serde(default)]
    pub park_code: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub latitude: String,
    #[serde(default)]
    pub longitude: String,
}

impl ParkDto {
    /// Parsed coordinates, if both fields are present and numeric.
    pub fn coordinate(&self) -> Option<Coordinate> {
        let lat = self.latitude.trim().parse().ok()?;
        let lon = self.longitude.trim().parse().ok()?;
        Some(Coordinate::new(lat, lon))
    }
}

/// Where an entrance coordinate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntranceSource {
    Nps,
    Catalog,
}

/// Canonical entrance location of a park.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entrance {
    pub park_code: String,
    pub coordinate: Coordinate,
    pub source: EntranceSource,
}
