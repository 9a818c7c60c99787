use mint::Point2;

/// A drone position snapshot: an identifier glued to a coordinate pair.
///
/// The id is the drone's index in the caller's input sequence and stays stable
/// for the duration of one search. Coordinates are meters, the same unit as
/// the airspace size and the conflict radius.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Drone {
    pub id: usize,
    pub pos: Point2<f64>,
}

impl Drone {
    pub fn new(id: usize, pos: impl Into<Point2<f64>>) -> Self {
        Self {
            id,
            pos: pos.into(),
        }
    }
}

/// Squared euclidean distance between two points.
/// Conflict checks compare against the squared radius and skip the sqrt.
pub(crate) fn dist_sq(a: Point2<f64>, b: Point2<f64>) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}
