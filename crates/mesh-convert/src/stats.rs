//! Polygon arity statistics.
//!
//! [`PolygonStatistics`] counts faces per arity (vertex count). Counts are
//! updated incrementally while faces are ingested and split, and the table
//! remembers the order in which each arity was first seen so the rendered
//! histogram is stable for a given input.

use std::fmt;

use hashbrown::HashMap;
use serde::Serialize;

use crate::error::{MeshError, MeshResult};

const POLYGON_NAMES: [&str; 17] = [
    "Triangle",
    "Quadrilateral",
    "Pentagon",
    "Hexagon",
    "Heptagon",
    "Octagon",
    "Nonagon",
    "Decagon",
    "Undecagon",
    "Dodecagon",
    "Tridecagon",
    "Tetradecagon",
    "Pentadecagon",
    "Hexadecagon",
    "Heptadecagon",
    "Octadecagon",
    "Enneadecagon",
];

/// Width of one histogram column.
const CELL_WIDTH: usize = 18;

/// Human-readable name of a polygon by arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonName {
    /// Arities 3 to 19 have a proper name.
    Named(&'static str),
    /// Arity 20 and above.
    Generic(usize),
}

impl PolygonName {
    /// Look up the name for `arity`. Returns `None` below 3.
    pub fn for_arity(arity: usize) -> Option<Self> {
        match arity {
            0..=2 => None,
            3..=19 => Some(PolygonName::Named(POLYGON_NAMES[arity - 3])),
            _ => Some(PolygonName::Generic(arity)),
        }
    }

    /// Plural label used in the histogram, e.g. `Triangles` or `24-gons`.
    pub fn plural(&self) -> String {
        match self {
            PolygonName::Named(name) => format!("{}s", name),
            PolygonName::Generic(arity) => format!("{}-gons", arity),
        }
    }
}

impl fmt::Display for PolygonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolygonName::Named(name) => f.write_str(name),
            PolygonName::Generic(arity) => write!(f, "{}-gon", arity),
        }
    }
}

/// Mapping from polygon arity to the number of faces with that arity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolygonStatistics {
    counts: HashMap<usize, usize>,
    /// Arities in first-seen order.
    order: Vec<usize>,
}

impl PolygonStatistics {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more face of `arity`.
    pub fn increment(&mut self, arity: usize) {
        let count = self.counts.entry(arity).or_insert_with(|| {
            self.order.push(arity);
            0
        });
        *count += 1;
    }

    /// Record one face of `arity` fewer.
    ///
    /// A bucket that reaches zero is kept until [`compact`](Self::compact).
    pub fn decrement(&mut self, arity: usize) -> MeshResult<()> {
        match self.counts.get_mut(&arity) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Ok(())
            }
            _ => Err(MeshError::StatisticsUnderflow { arity }),
        }
    }

    /// Drop every bucket whose count is zero.
    pub fn compact(&mut self) {
        self.counts.retain(|_, count| *count > 0);
        let counts = &self.counts;
        self.order.retain(|arity| counts.contains_key(arity));
    }

    /// Number of faces recorded with `arity` (zero if absent).
    pub fn count(&self, arity: usize) -> usize {
        self.counts.get(&arity).copied().unwrap_or(0)
    }

    /// True if a bucket exists for `arity`, even one at zero.
    pub fn contains(&self, arity: usize) -> bool {
        self.counts.contains_key(&arity)
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if no bucket exists.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(arity, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.order.iter().map(|arity| (*arity, self.counts[arity]))
    }

    /// Sum of all counts.
    pub fn total_faces(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of integers needed to list every face with its arity prefix:
    /// `Σ arity·count + Σ count`.
    pub fn connectivity_size(&self) -> usize {
        self.counts
            .iter()
            .map(|(arity, count)| (arity + 1) * count)
            .sum()
    }

    /// Fixed-width two-column histogram, 80 characters per line.
    ///
    /// Each cell is `||{label:^18}:{count:^18}`; every pair of cells closes
    /// with `||`, and an odd trailing cell is padded so the closing border
    /// lines up with full rows. No buckets renders a lone `||`.
    pub fn render(&self) -> String {
        let mut output = String::new();
        let mut cells = 0usize;

        for (arity, count) in self.iter() {
            if cells % 2 == 0 && cells > 0 {
                output.push_str("||\n");
            }
            let label = PolygonName::for_arity(arity)
                .map(|name| name.plural())
                .unwrap_or_else(|| format!("{}-gons", arity));
            output.push_str(&format!(
                "||{:^w$}:{:^w$}",
                label,
                count,
                w = CELL_WIDTH
            ));
            cells += 1;
        }

        if cells % 2 == 1 {
            output.push_str(&format!("{:>42}", "||\n"));
        } else {
            output.push_str("||\n");
        }
        output
    }

    /// Snapshot as a serializable histogram.
    pub fn to_entries(&self) -> Vec<PolygonCount> {
        self.iter()
            .map(|(arity, count)| PolygonCount {
                arity,
                name: PolygonName::for_arity(arity)
                    .map(|n| n.to_string())
                    .unwrap_or_default(),
                count,
            })
            .collect()
    }
}

impl Extend<usize> for PolygonStatistics {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, arities: I) {
        for arity in arities {
            self.increment(arity);
        }
    }
}

/// One histogram row, for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolygonCount {
    pub arity: usize,
    pub name: String,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_names() {
        assert_eq!(PolygonName::for_arity(2), None);
        assert_eq!(
            PolygonName::for_arity(3),
            Some(PolygonName::Named("Triangle"))
        );
        assert_eq!(
            PolygonName::for_arity(19),
            Some(PolygonName::Named("Enneadecagon"))
        );
        assert_eq!(PolygonName::for_arity(20), Some(PolygonName::Generic(20)));
        assert_eq!(PolygonName::Generic(24).to_string(), "24-gon");
        assert_eq!(PolygonName::Generic(24).plural(), "24-gons");
        assert_eq!(PolygonName::Named("Hexagon").plural(), "Hexagons");
    }

    #[test]
    fn test_increment_decrement_compact() {
        let mut stats = PolygonStatistics::new();
        stats.extend([4, 4, 3, 5]);
        assert_eq!(stats.count(4), 2);
        assert_eq!(stats.total_faces(), 4);

        stats.decrement(5).unwrap();
        assert!(stats.contains(5));
        assert_eq!(stats.count(5), 0);

        stats.compact();
        assert!(!stats.contains(5));
        assert_eq!(stats.iter().collect::<Vec<_>>(), vec![(4, 2), (3, 1)]);
    }

    #[test]
    fn test_decrement_underflow() {
        let mut stats = PolygonStatistics::new();
        assert!(matches!(
            stats.decrement(7),
            Err(MeshError::StatisticsUnderflow { arity: 7 })
        ));
        stats.increment(7);
        stats.decrement(7).unwrap();
        assert!(stats.decrement(7).is_err());
    }

    #[test]
    fn test_connectivity_size() {
        let mut stats = PolygonStatistics::new();
        stats.extend([3, 3]);
        assert_eq!(stats.connectivity_size(), 8);
        stats.increment(5);
        assert_eq!(stats.connectivity_size(), 14);
    }

    #[test]
    fn test_render_even() {
        let mut stats = PolygonStatistics::new();
        stats.extend([3, 4]);
        let expected = format!(
            "||{:^18}:{:^18}||{:^18}:{:^18}||\n",
            "Triangles", 1, "Quadrilaterals", 1
        );
        assert_eq!(stats.render(), expected);
        assert_eq!(expected.trim_end().len(), 80);
    }

    #[test]
    fn test_render_odd_pads_border() {
        let mut stats = PolygonStatistics::new();
        stats.extend([3, 4, 4, 21]);
        let rendered = stats.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("||     21-gons      :"));
        assert!(lines[1].ends_with("||"));
        assert_eq!(lines[0].len(), 80);
        assert_eq!(lines[1].len(), 80);
    }

    #[test]
    fn test_render_empty() {
        let rendered = PolygonStatistics::new().render();
        assert_eq!(rendered, "||\n");
    }

    #[test]
    fn test_entries() {
        let mut stats = PolygonStatistics::new();
        stats.extend([6, 3]);
        let entries = stats.to_entries();
        assert_eq!(entries[0].name, "Hexagon");
        assert_eq!(entries[1].arity, 3);
    }
}
