//! Rebalancing after a manual edit to one park.

use tracing::debug;

use crate::domain::MAX_TRIP_DAYS;

use super::{AllocationError, DayAllocation, effective_total};

/// Set `park` to `requested_days` and let the other parks absorb the
/// difference so the allocation still sums to `total_days`.
///
/// Other parks are adjusted one day at a time, largest allocation first,
/// re-sorted before every pass. Nobody drops below one day. If the other
/// parks are all at one day and the total is still too high, the edited
/// park is clamped down to what fits.
///
/// The input allocation is validated first (see
/// [`DayAllocation::validate`]), and `total_days` may not exceed
/// [`MAX_TRIP_DAYS`].
pub fn rebalance(
    allocation: &DayAllocation,
    park: &str,
    requested_days: u32,
    total_days: u32,
) -> Result<DayAllocation, AllocationError> {
    allocation.validate()?;
    let target = allocation
        .index_of(park)
        .ok_or_else(|| AllocationError::UnknownPark(park.to_string()))?;
    let total = effective_total(total_days);
    if total > MAX_TRIP_DAYS {
        return Err(AllocationError::TripTooLong {
            days: u64::from(total),
        });
    }
    let mut days = allocation.day_counts();

    if days.len() == 1 {
        days[0] = total;
        return Ok(rebuilt(allocation, days));
    }

    days[target] = requested_days.clamp(1, total);
    let mut diff = i64::from(total) - days.iter().map(|&d| i64::from(d)).sum::<i64>();

    while diff != 0 {
        let mut others: Vec<usize> = (0..days.len()).filter(|&i| i != target).collect();
        others.sort_by(|&a, &b| days[b].cmp(&days[a]));

        let mut progressed = false;
        for i in others {
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
            break;
        }
    }

    if diff < 0 {
        let excess = diff.unsigned_abs() as u32;
        let clamped = days[target].saturating_sub(excess).max(1);
        debug!(
            park,
            requested_days,
            clamped,
            "requested days exceed what the other parks can give up"
        );
        days[target] = clamped;
    }

    Ok(rebuilt(allocation, days))
}

fn rebuilt(allocation: &DayAllocation, days: Vec<u32>) -> DayAllocation {
    DayAllocation::from_parts(allocation.iter().map(|e| e.park.clone()), days)
}
