//! Static catalog of US national parks.
//!
//! Tiers are hand-curated: tier A parks are large, multi-region parks
//! that reward several days; tier B parks fill one or two; everything
//! else (including parks missing from this table) is tier C.
//!
//! Entrance coordinates are the fallback used when the park metadata
//! service has no coordinates for a park.

use super::{Coordinate, Tier};

/// Static metadata for one park.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParkInfo {
    pub name: &'static str,
    /// Four-letter NPS park code
    pub code: &'static str,
    pub tier: Tier,
    pub entrance: Coordinate,
}

const fn park(name: &'static str, code: &'static str, tier: Tier, lat: f64, lon: f64) -> ParkInfo {
    ParkInfo {
        name,
        code,
        tier,
        entrance: Coordinate::new(lat, lon),
    }
}

static PARKS: &[ParkInfo] = &[
    // Tier A
    park("Yellowstone National Park", "yell", Tier::A, 44.6596, -111.0995),
    park("Grand Teton National Park", "grte", Tier::A, 43.7904, -110.6818),
    park("Yosemite National Park", "yose", Tier::A, 37.8651, -119.5383),
    park("Glacier National Park", "glac", Tier::A, 48.7596, -113.7870),
    park("Grand Canyon National Park", "grca", Tier::A, 36.0544, -112.1401),
    park("Zion National Park", "zion", Tier::A, 37.2002, -112.9871),
    park("Great Smoky Mountains National Park", "grsm", Tier::A, 35.6532, -83.5070),
    park("Rocky Mountain National Park", "romo", Tier::A, 40.3428, -105.6836),
    park("Olympic National Park", "olym", Tier::A, 47.8021, -123.6044),
    park("Denali National Park", "dena", Tier::A, 63.7298, -148.8986),
    // Tier B
    park("Arches National Park", "arch", Tier::B, 38.6165, -109.6200),
    park("Bryce Canyon National Park", "brca", Tier::B, 37.6405, -112.1697),
    park("Canyonlands National Park", "cany", Tier::B, 38.4596, -109.8210),
    park("Capitol Reef National Park", "care", Tier::B, 38.2916, -111.2615),
    park("Sequoia National Park", "seki", Tier::B, 36.4864, -118.5658),
    park("Kings Canyon National Park", "seki", Tier::B, 36.7378, -118.9630),
    park("Joshua Tree National Park", "jotr", Tier::B, 33.8734, -115.9010),
    park("Mount Rainier National Park", "mora", Tier::B, 46.8800, -121.7269),
    park("Death Valley National Park", "deva", Tier::B, 36.5054, -117.0794),
    park("Acadia National Park", "acad", Tier::B, 44.3386, -68.2733),
    park("Badlands National Park", "badl", Tier::B, 43.8554, -102.3397),
    park("Shenandoah National Park", "shen", Tier::B, 38.4755, -78.4535),
    park("Crater Lake National Park", "crla", Tier::B, 42.8684, -122.1685),
    park("Redwood National Park", "redw", Tier::B, 41.2132, -124.0046),
    park("Everglades National Park", "ever", Tier::B, 25.2866, -80.8987),
    park("Big Bend National Park", "bibe", Tier::B, 29.1275, -103.2425),
    park("North Cascades National Park", "noca", Tier::B, 48.7718, -121.2985),
    // Tier C
    park("Great Sand Dunes National Park", "grsa", Tier::C, 37.7916, -105.5943),
    park("Mesa Verde National Park", "meve", Tier::C, 37.2309, -108.4618),
    park("Petrified Forest National Park", "pefo", Tier::C, 35.0657, -109.7820),
    park("White Sands National Park", "whsa", Tier::C, 32.7872, -106.3257),
    park("Saguaro National Park", "sagu", Tier::C, 32.2967, -111.1666),
    park("Black Canyon of the Gunnison National Park", "blca", Tier::C, 38.5754, -107.7416),
    park("Wind Cave National Park", "wica", Tier::C, 43.5724, -103.4394),
    park("Theodore Roosevelt National Park", "thro", Tier::C, 46.9790, -103.5387),
    park("Great Basin National Park", "grba", Tier::C, 38.9833, -114.3000),
    park("Lassen Volcanic National Park", "lavo", Tier::C, 40.4977, -121.4207),
    park("Pinnacles National Park", "pinn", Tier::C, 36.4906, -121.1825),
    park("Carlsbad Caverns National Park", "cave", Tier::C, 32.1479, -104.5567),
    park("Guadalupe Mountains National Park", "gumo", Tier::C, 31.9231, -104.8645),
    park("Mammoth Cave National Park", "maca", Tier::C, 37.1862, -86.1000),
    park("Hot Springs National Park", "hosp", Tier::C, 34.5217, -93.0424),
    park("Congaree National Park", "cong", Tier::C, 33.7948, -80.7821),
    park("Cuyahoga Valley National Park", "cuva", Tier::C, 41.2808, -81.5678),
    park("Indiana Dunes National Park", "indu", Tier::C, 41.6533, -87.0524),
    park("Voyageurs National Park", "voya", Tier::C, 48.4841, -92.8271),
];

/// All parks in the catalog.
pub fn park_catalog() -> &'static [ParkInfo] {
    PARKS
}

fn strip_suffix(name: &str) -> &str {
    name.strip_suffix(" national park")
        .or_else(|| name.strip_suffix(" np"))
        .unwrap_or(name)
        .trim()
}

/// Look up a park by full name, short name ("Zion") or NPS code ("zion").
///
/// Matching is case-insensitive and ignores a trailing "National Park".
pub fn find_park(query: &str) -> Option<&'static ParkInfo> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    let short = strip_suffix(&needle);

    PARKS.iter().find(|p| {
        let name = p.name.to_lowercase();
        name == needle || strip_suffix(&name) == short || p.code == needle
    })
}
