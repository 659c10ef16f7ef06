use nalgebra::Point3;

/// One entry in the species order of a structure: an element symbol and the
/// positions of its atoms.
///
/// The species count is the length of the position list, which keeps the
/// two consistent by construction. Position order is insertion order and is
/// preserved through mutation for deterministic serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct Species {
    symbol: String,
    positions: Vec<Point3<f64>>,
}

impl Species {
    pub fn new(symbol: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            positions: Vec::new(),
        }
    }

    pub fn with_positions(symbol: &str, positions: Vec<Point3<f64>>) -> Self {
        Self {
            symbol: symbol.to_string(),
            positions,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Number of atoms of this species currently in the structure.
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// Appends an atom position at the end of the insertion order.
    pub fn push_position(&mut self, position: Point3<f64>) {
        self.positions.push(position);
    }

    /// Removes and returns the position at `index`, shifting later entries
    /// forward.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_position(&mut self, index: usize) -> Point3<f64> {
        self.positions.remove(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_tracks_positions() {
        let mut species = Species::new("Si");
        assert_eq!(species.count(), 0);

        species.push_position(Point3::new(0.0, 0.0, 0.0));
        species.push_position(Point3::new(0.5, 0.5, 0.5));
        assert_eq!(species.count(), 2);

        species.remove_position(0);
        assert_eq!(species.count(), 1);
        assert_eq!(species.positions()[0], Point3::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn remove_preserves_relative_order() {
        let mut species = Species::with_positions(
            "O",
            vec![
                Point3::new(0.1, 0.0, 0.0),
                Point3::new(0.2, 0.0, 0.0),
                Point3::new(0.3, 0.0, 0.0),
            ],
        );
        let removed = species.remove_position(1);
        assert_eq!(removed, Point3::new(0.2, 0.0, 0.0));
        assert_eq!(
            species.positions(),
            &[Point3::new(0.1, 0.0, 0.0), Point3::new(0.3, 0.0, 0.0)]
        );
    }
}
