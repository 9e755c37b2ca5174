//! Initial weighted allocation.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Pace, TripPark};

use super::{DayAllocation, effective_total};

/// Extra weight given to the park with the most planned activities.
const ACTIVITY_BOOST: f64 = 0.5;

/// Allocation weight of each park, in input order.
///
/// Weight = tier base × activity multiplier × pace multiplier, where the
/// activity multiplier is `1 + (count / max_count) * 0.5`. Parks with no
/// activities are unscaled.
pub fn park_weights(
    parks: &[TripPark],
    activity_counts: &HashMap<String, u32>,
    pace: Pace,
) -> Vec<f64> {
    let count_of = |p: &TripPark| activity_counts.get(&p.name).copied().unwrap_or(0);
    let max_count = parks.iter().map(count_of).max().unwrap_or(0);

    parks
        .iter()
        .map(|p| {
            let count = count_of(p);
            let activity = if count > 0 && max_count > 0 {
                1.0 + (f64::from(count) / f64::from(max_count)) * ACTIVITY_BOOST
            } else {
                1.0
            };
            p.tier.base_weight() * activity * pace.multiplier()
        })
        .collect()
}

/// Split `total_days` across `parks`.
///
/// Every park gets at least one day. The result sums to the trip total
/// unless there are more parks than days, in which case every park gets
/// exactly one day.
pub fn allocate_days(
    parks: &[TripPark],
    total_days: u32,
    activity_counts: &HashMap<String, u32>,
    pace: Pace,
) -> DayAllocation {
    if parks.is_empty() {
        return DayAllocation::default();
    }
    let total = effective_total(total_days);

    let weights = park_weights(parks, activity_counts, pace);
    let weight_sum: f64 = weights.iter().sum();

    let mut days: Vec<u32> = weights
        .iter()
        .map(|w| ((w / weight_sum) * f64::from(total)).round().max(1.0) as u32)
        .collect();

    reconcile(&mut days, total);

    debug!(parks = parks.len(), total, ?days, "allocated trip days");

    DayAllocation::from_parts(parks.iter().map(|p| p.name.clone()), days)
}

/// Push the rounded counts back to `total`, one day at a time, largest
/// allocations first.
fn reconcile(days: &mut [u32], total: u32) {
    let mut diff = i64::from(total) - days.iter().map(|&d| i64::from(d)).sum::<i64>();
    if diff == 0 {
        return;
    }

    // Sorted once; sort_by is stable so equal counts keep trip order.
    let mut order: Vec<usize> = (0..days.len()).collect();
    order.sort_by(|&a, &b| days[b].cmp(&days[a]));

    while diff != 0 {
        let mut progressed = false;
        for &i in &order {
            if diff == 0 {
                break;
            }
            if diff > 0 {
                days[i] += 1;
                diff -= 1;
                progressed = true;
            } else if days[i] > 1 {
                days[i] -= 1;
                diff += 1;
                progressed = true;
            }
        }
        if !progressed {
            // Every park is at one day and there are still too many.
            break;
        }
    }
}
