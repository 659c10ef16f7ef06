use super::coords::CoordSystem;
use super::species::Species;
use nalgebra::Point3;

/// A parsed crystal structure: the ordered species list and the
/// coordinate-system marker.
///
/// Species order is semantically meaningful: the counts line and the
/// flattened positional block of the output are reconstructed by iterating
/// it. A species whose last atom has been removed stays in the order with a
/// count of zero rather than being pruned.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    species: Vec<Species>,
    coords: CoordSystem,
}

impl Structure {
    pub fn new(species: Vec<Species>, coords: CoordSystem) -> Self {
        Self { species, coords }
    }

    pub fn species(&self) -> &[Species] {
        &self.species
    }

    pub fn coords(&self) -> &CoordSystem {
        &self.coords
    }

    pub fn total_atoms(&self) -> usize {
        self.species.iter().map(Species::count).sum()
    }

    /// Index of the first species with the given symbol.
    pub fn species_index(&self, symbol: &str) -> Option<usize> {
        self.species.iter().position(|s| s.symbol() == symbol)
    }

    pub fn species_mut(&mut self, index: usize) -> &mut Species {
        &mut self.species[index]
    }

    /// Appends a new species at the end of the order.
    pub fn push_species(&mut self, species: Species) {
        self.species.push(species);
    }

    /// All positions, iterated in species order and insertion order within
    /// each species. This is the order the positional block is written in.
    pub fn all_positions(&self) -> impl Iterator<Item = &Point3<f64>> {
        self.species.iter().flat_map(|s| s.positions().iter())
    }
}

/// Incremental constructor used by the file parsers.
pub struct StructureBuilder {
    species: Vec<Species>,
    coords: Option<CoordSystem>,
}

impl Default for StructureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StructureBuilder {
    pub fn new() -> Self {
        Self {
            species: Vec::new(),
            coords: None,
        }
    }

    pub fn coords(&mut self, coords: CoordSystem) -> &mut Self {
        self.coords = Some(coords);
        self
    }

    /// Appends a new species entry and makes it current.
    pub fn start_species(&mut self, symbol: &str) -> &mut Self {
        self.species.push(Species::new(symbol));
        self
    }

    /// Adds a position to the current species.
    pub fn add_position(&mut self, position: Point3<f64>) -> &mut Self {
        self.species
            .last_mut()
            .expect("Must start a species before adding positions")
            .push_position(position);
        self
    }

    pub fn build(self) -> Structure {
        Structure {
            species: self.species,
            coords: self
                .coords
                .expect("Must set a coordinate system before building"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::coords::CoordKind;

    fn two_species_structure() -> Structure {
        let mut builder = StructureBuilder::new();
        builder.coords(CoordKind::Direct.into());
        builder.start_species("Si");
        builder.add_position(Point3::new(0.0, 0.0, 0.0));
        builder.add_position(Point3::new(0.5, 0.5, 0.5));
        builder.start_species("O");
        builder.add_position(Point3::new(0.25, 0.25, 0.25));
        builder.build()
    }

    #[test]
    fn builder_partitions_positions_by_species() {
        let structure = two_species_structure();

        assert_eq!(structure.species().len(), 2);
        assert_eq!(structure.species()[0].symbol(), "Si");
        assert_eq!(structure.species()[0].count(), 2);
        assert_eq!(structure.species()[1].symbol(), "O");
        assert_eq!(structure.species()[1].count(), 1);
        assert_eq!(structure.total_atoms(), 3);
    }

    #[test]
    fn species_index_finds_first_match() {
        let structure = two_species_structure();
        assert_eq!(structure.species_index("Si"), Some(0));
        assert_eq!(structure.species_index("O"), Some(1));
        assert_eq!(structure.species_index("Fe"), None);
    }

    #[test]
    fn zero_count_species_stays_listed() {
        let mut structure = two_species_structure();
        structure.species_mut(1).remove_position(0);

        assert_eq!(structure.species()[1].count(), 0);
        assert_eq!(structure.species().len(), 2);
        assert_eq!(structure.species_index("O"), Some(1));
        assert_eq!(structure.total_atoms(), 2);
    }

    #[test]
    fn all_positions_follows_species_then_insertion_order() {
        let structure = two_species_structure();
        let positions: Vec<_> = structure.all_positions().copied().collect();
        assert_eq!(
            positions,
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(0.5, 0.5, 0.5),
                Point3::new(0.25, 0.25, 0.25),
            ]
        );
    }
}
