use super::BreadthFirstPaths;
use crate::{error::*, graph::*};
use tracing::debug;

/// Shortest chains of labels from a fixed source label in a [SymbolGraph].
///
/// In a performer/movie graph this gives the Kevin Bacon number:
/// the chain alternates performers and movies, so the number is half the chain's edge count.
pub struct DegreesOfSeparation<'a, G> {
    symbols: &'a SymbolGraph<G>,
    paths: BreadthFirstPaths,
}

impl<'a, G> DegreesOfSeparation<'a, G>
where
    G: QueryableGraph,
{
    pub fn new(symbols: &'a SymbolGraph<G>, source: &str) -> Result<Self> {
        let s = symbols.index_of(source)?;
        let paths = BreadthFirstPaths::new(symbols.graph(), s)?;
        Ok(Self { symbols, paths })
    }

    pub fn source(&self) -> Result<&'a str> {
        let symbols = self.symbols;
        symbols.label_of(&self.paths.source())
    }

    /// Labels on a shortest path from the source to `target`, both inclusive,
    /// or `None` if `target` is unreachable.
    pub fn path_to(&self, target: &str) -> Result<Option<Vec<&'a str>>> {
        let t = self.symbols.index_of(target)?;
        let path = match self.paths.path_to(&t)? {
            Some(path) => path,
            None => {
                debug!(label = target, "not connected");
                return Ok(None);
            }
        };
        let symbols = self.symbols;
        let labels = path
            .iter()
            .map(|v| symbols.label_of(v))
            .collect::<Result<Vec<_>>>()?;
        Ok(Some(labels))
    }

    /// Number of edges on a shortest path from the source to `target`.
    pub fn degrees(&self, target: &str) -> Result<Option<usize>> {
        let t = self.symbols.index_of(target)?;
        self.paths.dist_to(&t)
    }
}

/// One-shot form of [DegreesOfSeparation::path_to].
pub fn separation<'a, G>(
    symbols: &'a SymbolGraph<G>,
    source: &str,
    target: &str,
) -> Result<Option<Vec<&'a str>>>
where
    G: QueryableGraph,
{
    // reject an unknown target before searching
    symbols.index_of(target)?;
    DegreesOfSeparation::new(symbols, source)?.path_to(target)
}
