//! Reduced superclass hierarchy over cataloged classes.
//!
//! Profiles routinely skip levels of the base hierarchy: a profile may keep
//! `Breaker` and `ConductingEquipment` but drop `Switch` in between. The
//! output schema must still say `Breaker` specializes `ConductingEquipment`,
//! and must not also list every further ancestor as a direct superclass.
//!
//! [`Lattice::build`] records, for every cataloged class, *every* cataloged
//! ancestor (not just the immediate ones) and closes the relation
//! transitively. [`Lattice::direct_supers`] then answers with the transitive
//! reduction: an ancestor is direct unless it is also an ancestor of some
//! other, strictly lower ancestor.

use cim_ir::{Iri, OntologyStore, StoreResult};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::catalog::Catalog;

/// Reachability structure over catalog identifiers.
#[derive(Debug)]
pub struct Lattice {
    /// Node identifiers, in catalog order.
    nodes: Vec<Iri>,
    index: FxHashMap<Iri, usize>,
    /// Transitively closed ancestor sets, never containing the node itself.
    ancestors: Vec<FxHashSet<usize>>,
}

impl Lattice {
    /// Build the reachability structure for a frozen catalog.
    #[tracing::instrument(level = "debug", skip_all, fields(classes = catalog.len()))]
    pub fn build<S: OntologyStore + ?Sized>(catalog: &Catalog<'_>, store: &S) -> StoreResult<Self> {
        let nodes: Vec<Iri> = catalog.identifiers().collect();
        let index: FxHashMap<Iri, usize> = nodes
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx))
            .collect();

        let mut edges: Vec<Vec<usize>> = Vec::with_capacity(nodes.len());
        for (node, base) in catalog.bases().enumerate() {
            let mut out = Vec::new();
            for ancestor in store.super_classes(base)? {
                let Some(target) = catalog.lookup(ancestor).and_then(|id| index.get(&id)) else {
                    continue;
                };
                if *target != node && !out.contains(target) {
                    out.push(*target);
                }
            }
            edges.push(out);
        }

        let ancestors = (0..edges.len())
            .map(|node| reachable(&edges, node))
            .collect();

        Ok(Lattice {
            nodes,
            index,
            ancestors,
        })
    }

    /// Every node identifier, in catalog order.
    pub fn nodes(&self) -> &[Iri] {
        &self.nodes
    }

    /// Whether `sup` is a (possibly indirect) superclass of `sub`.
    pub fn is_ancestor(&self, sub: Iri, sup: Iri) -> bool {
        match (self.index.get(&sub), self.index.get(&sup)) {
            (Some(&sub), Some(&sup)) => self.ancestors[sub].contains(&sup),
            _ => false,
        }
    }

    /// Direct superclasses of `id` in the reduced hierarchy, in catalog
    /// order.
    pub fn direct_supers(&self, id: Iri) -> SmallVec<[Iri; 4]> {
        let Some(&node) = self.index.get(&id) else {
            return SmallVec::new();
        };
        let ancestors = &self.ancestors[node];

        let mut direct: SmallVec<[usize; 4]> = ancestors
            .iter()
            .copied()
            .filter(|&sup| {
                !ancestors.iter().any(|&mid| {
                    mid != sup
                        && self.ancestors[mid].contains(&sup)
                        && !self.ancestors[sup].contains(&mid)
                })
            })
            .collect();
        direct.sort_unstable();
        direct.into_iter().map(|idx| self.nodes[idx]).collect()
    }

    /// All `(sub, super)` edges of the reduced hierarchy.
    pub fn reduced_edges(&self) -> Vec<(Iri, Iri)> {
        self.nodes
            .iter()
            .flat_map(|&sub| self.direct_supers(sub).into_iter().map(move |sup| (sub, sup)))
            .collect()
    }
}

/// Nodes reachable from `start` along `edges`, excluding `start`.
fn reachable(edges: &[Vec<usize>], start: usize) -> FxHashSet<usize> {
    let mut seen = FxHashSet::default();
    let mut stack: Vec<usize> = edges[start].clone();
    while let Some(node) = stack.pop() {
        if node != start && seen.insert(node) {
            stack.extend(edges[node].iter().copied());
        }
    }
    seen
}
