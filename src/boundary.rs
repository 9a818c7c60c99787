use crate::error::SearchError;

/// Ordered cell-edge offsets along one axis of the airspace.
///
/// The airspace is square, so the same sequence serves both axes. Edges start
/// at 0, step by `conflict_radius * pad_mult` and always end exactly at the
/// airspace size, even when that makes the final segment shorter than a full
/// cell. Invariant: strictly increasing, at least two edges.
#[derive(Clone, Debug)]
pub struct Boundaries {
    edges: Vec<f64>,
}

impl Boundaries {
    /// Builds the edge sequence for one axis.
    ///
    /// The sector width is `conflict_radius * pad_mult`; combined with the
    /// one-cell overlap applied by [`span`](Self::span), any two points within
    /// `conflict_radius` of each other are guaranteed to share at least one
    /// sector.
    ///
    /// # Example
    /// ```rust
    /// use sector_search::Boundaries;
    ///
    /// let b = Boundaries::build(20.0, 4.0, 2).unwrap();
    /// assert_eq!(b.edges(), &[0.0, 8.0, 16.0, 20.0]);
    /// ```
    pub fn build(
        airspace_size: f64,
        conflict_radius: f64,
        pad_mult: u32,
    ) -> Result<Self, SearchError> {
        if !(conflict_radius.is_finite() && conflict_radius > 0.0) {
            return Err(SearchError::InvalidRadius(conflict_radius));
        }
        if !(airspace_size.is_finite() && airspace_size > 0.0) {
            return Err(SearchError::InvalidAirspaceSize(airspace_size));
        }
        if pad_mult == 0 {
            return Err(SearchError::InvalidPadMult);
        }

        // Multiply rather than accumulate so long sequences don't drift.
        let step = conflict_radius * f64::from(pad_mult);
        let mut edges: Vec<f64> = (0..)
            .map(|i| step * i as f64)
            .take_while(|&edge| edge < airspace_size)
            .collect();
        edges.push(airspace_size);

        Ok(Self { edges })
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Maps a coordinate to the `(lo, hi)` pair of overlapping cell indices it
    /// belongs to along this axis, with `hi = lo + 1`.
    ///
    /// `hi` is the position of the first edge strictly greater than the
    /// coordinate, so a coordinate sitting exactly on an edge falls into the
    /// upper cell. A coordinate at the outer airspace edge clamps to the last
    /// pair; `hi` may then name the fictitious cell one past the last real
    /// one, which downstream storage treats as just another (empty) bucket.
    ///
    /// # Example
    /// ```rust
    /// use sector_search::Boundaries;
    ///
    /// let b = Boundaries::build(40.0, 5.0, 2).unwrap(); // edges every 10m
    /// assert_eq!(b.span(17.0), (1, 2));
    /// assert_eq!(b.span(10.0), (1, 2)); // on an edge: falls upward
    /// ```
    pub fn span(&self, coord: f64) -> (usize, usize) {
        let hi = self
            .edges
            .partition_point(|&edge| edge <= coord)
            .clamp(1, self.edges.len() - 1);
        (hi - 1, hi)
    }
}
