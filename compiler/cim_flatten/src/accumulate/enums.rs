use cim_ir::{FxIndexMap, FxIndexSet, Resource};

/// Individuals of enumerated profiles, merged per base class.
#[derive(Debug, Default)]
pub struct EnumAccumulator {
    members: FxIndexMap<Resource, FxIndexSet<Resource>>,
}

impl EnumAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `individuals` into the set held for `base`. Returns how many
    /// were new.
    pub fn add(&mut self, base: Resource, individuals: impl IntoIterator<Item = Resource>) -> usize {
        let set = self.members.entry(base).or_default();
        let before = set.len();
        set.extend(individuals);
        set.len() - before
    }

    /// Individuals recorded for `base`, in first-seen order.
    pub fn get(&self, base: Resource) -> impl Iterator<Item = Resource> + '_ {
        self.members.get(&base).into_iter().flatten().copied()
    }

    /// Total individuals across every base.
    pub fn len(&self) -> usize {
        self.members.values().map(FxIndexSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
