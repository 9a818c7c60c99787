//!
//! sector_search counts how many drones over a square airspace are flying too
//! close to one another, without paying the global O(N²) all-pairs cost.
//!
//! The airspace is split into square sectors a generous multiple of the
//! conflict radius wide. Every drone is assigned to each sector whose coverage
//! contains it; sectors overlap by a full cell width, so a pair straddling a
//! seam always shares at least one sector. Each sector is then scanned
//! pairwise on its own (in parallel, the scans are independent) and the
//! flagged ids are deduplicated into a single count.
//!
//! ```rust
//! use sector_search::count_conflicts;
//!
//! // 20m x 20m airspace, 4m separation requirement.
//! let positions: &[[f64; 2]] = &[[0.0, 0.0], [2.0, 2.0], [15.0, 15.0]];
//! assert_eq!(count_conflicts(positions, 4.0, 20.0).unwrap(), 2);
//! ```
//!
//! A pathological input that piles everything into one sector still degrades
//! to a pairwise scan of that sector; the win is for inputs that actually
//! spread out over the airspace.
//!

pub mod boundary;
pub mod drone;
pub mod error;
pub mod search;
pub mod sector;

pub use boundary::Boundaries;
pub use drone::Drone;
pub use error::SearchError;
pub use search::{count_conflicts, count_conflicts_with, SearchConfig};
pub use sector::{SectorGrid, SectorId, SectorObject};
