use std::fmt;

/// Ordering key for a property: priority rank first, then the name with one
/// leading dash removed so `-webkit-foo` sorts next to `webkit-foo`.
///
/// Field order defines the derived `Ord`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SortKey {
    pub rank: u8,
    pub comparison_name: String,
}

impl SortKey {
    pub fn new(rank: u8, name: &str) -> Self {
        Self {
            rank,
            comparison_name: name.strip_prefix('-').unwrap_or(name).to_string(),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:?})", self.rank, self.comparison_name)
    }
}
