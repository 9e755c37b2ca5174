//! Activity filtering and grouping.

use std::collections::BTreeMap;

use crate::domain::Activity;

/// Activities on `day` (all days when `None`) matching `search`.
///
/// The search is a case-insensitive substring over name, category and
/// park. A blank search matches everything.
pub fn filter_activities<'a>(
    activities: &'a [Activity],
    day: Option<u32>,
    search: &str,
) -> Vec<&'a Activity> {
    activities
        .iter()
        .filter(|a| day.is_none_or(|d| a.day == d))
        .filter(|a| a.matches_text(search))
        .collect()
}

/// Activities keyed by day, in insertion order within each day.
pub fn group_by_day<'a>(
    activities: impl IntoIterator<Item = &'a Activity>,
) -> BTreeMap<u32, Vec<&'a Activity>> {
    let mut days: BTreeMap<u32, Vec<&Activity>> = BTreeMap::new();
    for activity in activities {
        days.entry(activity.day).or_default().push(activity);
    }
    days
}
