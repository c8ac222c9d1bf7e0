use std::{
    collections::HashSet,
    error::Error,
    fmt::{Debug, Display},
    hash::Hash,
};

/// Construct for handing out unique ids, via an incrementing counter.
///
/// Contains a set of every id ever reserved. There is deliberately no way to
/// free an id: within a session, an id that has been used once is never handed
/// out again, even after the thing it named is gone.
#[derive(Debug)]
pub struct IdRegistry<K>
where
    K: Clone + Eq + Hash + Debug,
{
    counter: u64,
    seen: HashSet<K>,
}
impl<K> IdRegistry<K>
where
    K: Clone + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        IdRegistry {
            counter: 0,
            seen: HashSet::new(),
        }
    }

    /// Reserve an id chosen by the caller, marking it as taken.
    ///
    /// Fails if the id has ever been reserved before, including ids whose
    /// owner has since been removed.
    pub fn reserve(&mut self, id: K) -> Result<(), IdCollisionError<K>> {
        if self.seen.contains(&id) {
            return Err(IdCollisionError { id });
        }

        self.seen.insert(id);
        Ok(())
    }

    /// Return a new unique id, built by `mint` from an incrementing counter.
    ///
    /// Counter values whose minted id collides with a reserved one are skipped.
    pub fn generate(&mut self, mint: impl Fn(u64) -> K) -> K {
        loop {
            self.counter = self.counter.wrapping_add(1);
            let id = mint(self.counter);
            if !self.seen.contains(&id) {
                self.seen.insert(id.clone());
                return id;
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct IdCollisionError<K: Debug> {
    id: K,
}
impl<K> Display for IdCollisionError<K>
where
    K: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Id already taken: {:?}", self.id)
    }
}
impl<K> Error for IdCollisionError<K> where K: Debug {}
