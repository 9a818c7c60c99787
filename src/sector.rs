use crate::boundary::Boundaries;
use crate::drone::Drone;
use fnv::FnvHashMap;
use mint::Point2;

/// A bucket entry: drone id plus its position, copied into every sector the
/// drone overlaps.
pub type SectorObject = (usize, Point2<f64>);

/// Integer `(x, y)` index of a sector into the boundary sequence.
pub type SectorId = (usize, usize);

/// The overlapping-sector grid covering one airspace.
///
/// Buckets are allocated lazily on first insert; a key that was never touched
/// is an empty sector, including the fictitious edge sectors that
/// [`Boundaries::span`] reports for coordinates on the outer rim.
pub struct SectorGrid {
    bounds: Boundaries,
    sectors: FnvHashMap<SectorId, Vec<SectorObject>>,
}

impl SectorGrid {
    pub fn new(bounds: Boundaries) -> Self {
        Self {
            bounds,
            sectors: FnvHashMap::default(),
        }
    }

    /// Assigns a drone to every sector whose coverage area contains it.
    ///
    /// A drone always lands in the four sectors formed by crossing its two
    /// x-axis cells with its two y-axis cells. Near a seam or a corner those
    /// shared buckets are what keep straddling pairs together; the resulting
    /// duplication is resolved when flagged ids are aggregated, never here.
    pub fn insert(&mut self, drone: &Drone) {
        let (x_lo, x_hi) = self.bounds.span(drone.pos.x);
        let (y_lo, y_hi) = self.bounds.span(drone.pos.y);

        for x in [x_lo, x_hi] {
            for y in [y_lo, y_hi] {
                self.sectors
                    .entry((x, y))
                    .or_default()
                    .push((drone.id, drone.pos));
            }
        }
    }

    /// The populated sector buckets, in no particular order.
    pub fn sectors(&self) -> &FnvHashMap<SectorId, Vec<SectorObject>> {
        &self.sectors
    }

    pub fn bounds(&self) -> &Boundaries {
        &self.bounds
    }

    /// Number of populated sectors and total bucket entries, duplicates
    /// included.
    pub fn occupancy(&self) -> (usize, usize) {
        let entries = self.sectors.values().map(Vec::len).sum();
        (self.sectors.len(), entries)
    }
}
