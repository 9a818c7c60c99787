use crate::boundary::Boundaries;
use crate::drone::{dist_sq, Drone};
use crate::error::SearchError;
use crate::sector::{SectorGrid, SectorObject};
use fnv::FnvHashSet;
use mint::Point2;
use rayon::prelude::*;
use tracing::debug;

/// Tuning knobs for a conflict search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// How many conflict radii wide to make each sector. Bigger sectors mean
    /// fewer, fuller buckets; smaller sectors mean more bookkeeping overhead.
    /// Must be at least 1.
    pub pad_mult: u32,
    /// Process only the first `limit` drones of the input. `None` processes
    /// everything; mostly useful for benchmarking prefixes of a large set.
    pub limit: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pad_mult: 10,
            limit: None,
        }
    }
}

/// Counts the drones that are strictly closer than `conflict_radius` to at
/// least one other drone, with default tuning.
///
/// Accepts anything convertible to a 2D point, e.g. `[f64; 2]` pairs or
/// `mint::Point2<f64>`. Coordinates must lie within `[0, airspace_size]`.
///
/// # Example
/// ```rust
/// // Two drones ~2.83m apart with a 4m separation requirement, one loner.
/// let positions: &[[f64; 2]] = &[[0.0, 0.0], [2.0, 2.0], [15.0, 15.0]];
/// let conflicted = sector_search::count_conflicts(positions, 4.0, 20.0).unwrap();
/// assert_eq!(conflicted, 2);
/// ```
pub fn count_conflicts<P>(
    positions: &[P],
    conflict_radius: f64,
    airspace_size: f64,
) -> Result<usize, SearchError>
where
    P: Into<Point2<f64>> + Copy,
{
    count_conflicts_with(
        positions,
        conflict_radius,
        airspace_size,
        &SearchConfig::default(),
    )
}

/// Counts drones in conflict, with explicit tuning.
///
/// Four stages, rebuilt from scratch on every call:
/// 1. wrap the raw coordinates into [`Drone`]s (ids are input indices),
/// 2. split the airspace into overlapping sectors ([`Boundaries`]),
/// 3. assign every drone to each sector covering it ([`SectorGrid`]),
/// 4. scan the sectors pairwise in parallel and count the distinct flagged ids.
///
/// All validation failures surface before stage 3 touches the grid; a good
/// input always completes and the result depends only on the arguments.
pub fn count_conflicts_with<P>(
    positions: &[P],
    conflict_radius: f64,
    airspace_size: f64,
    config: &SearchConfig,
) -> Result<usize, SearchError>
where
    P: Into<Point2<f64>> + Copy,
{
    let bounds = Boundaries::build(airspace_size, conflict_radius, config.pad_mult)?;

    let take = match config.limit {
        Some(limit) if limit > positions.len() => {
            return Err(SearchError::LimitOutOfRange {
                limit,
                available: positions.len(),
            });
        }
        Some(limit) => limit,
        None => positions.len(),
    };

    let drones: Vec<Drone> = positions[..take]
        .iter()
        .enumerate()
        .map(|(id, &pos)| Drone::new(id, pos))
        .collect();

    // NaN coordinates fail the range check as well.
    for drone in &drones {
        let Point2 { x, y } = drone.pos;
        if !(0.0..=airspace_size).contains(&x) || !(0.0..=airspace_size).contains(&y) {
            return Err(SearchError::OutOfBounds {
                id: drone.id,
                x,
                y,
                airspace_size,
            });
        }
    }

    let mut grid = SectorGrid::new(bounds);
    for drone in &drones {
        grid.insert(drone);
    }

    let (sectors, entries) = grid.occupancy();
    debug!(
        drones = drones.len(),
        sectors, entries, "assigned drones to sectors"
    );

    // Once assignment is done the grid is read-only, so every sector scans
    // independently and the flagged ids fan back into one set.
    let conflicted: FnvHashSet<usize> = grid
        .sectors()
        .par_iter()
        .fold(FnvHashSet::default, |mut flagged, (_, bucket)| {
            flagged.extend(scan_sector(bucket, conflict_radius));
            flagged
        })
        .reduce(FnvHashSet::default, |mut merged, part| {
            merged.extend(part);
            merged
        });

    debug!(conflicted = conflicted.len(), "aggregated sector scans");
    Ok(conflicted.len())
}

/// Brute-force pairwise scan of one sector bucket.
///
/// Returns every id that participates in a conflicting pair inside this
/// bucket, once per pair it appears in. Duplicates across pairs and across
/// sectors are expected; the aggregation step deduplicates by id.
pub fn scan_sector(bucket: &[SectorObject], conflict_radius: f64) -> Vec<usize> {
    let mut flagged = Vec::new();
    if bucket.len() < 2 {
        return flagged;
    }

    let radius_sq = conflict_radius * conflict_radius;
    for (ax, &(id_a, pos_a)) in bucket.iter().enumerate() {
        for &(id_b, pos_b) in &bucket[ax + 1..] {
            if dist_sq(pos_a, pos_b) < radius_sq {
                flagged.push(id_a);
                flagged.push(id_b);
            }
        }
    }
    flagged
}
