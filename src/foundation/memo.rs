/// Single-entry cache of the last `(input, output)` pair of a pure derivation.
///
/// A lookup with an input equal to the cached one returns the cached output; anything else
/// recomputes and replaces it.
#[derive(Debug)]
pub struct Memo<K, V> {
    last: Option<(K, V)>,
    hits: u64,
    misses: u64,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            last: None,
            hits: 0,
            misses: 0,
        }
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the output for `key`, computing it only if `key` differs from the cached input.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> &V {
        let entry = match self.last.take() {
            Some((k, v)) if k == key => {
                self.hits += 1;
                (k, v)
            }
            _ => {
                self.misses += 1;
                let v = compute(&key);
                (key, v)
            }
        };
        &self.last.insert(entry).1
    }

    /// Drop the cached pair.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Lookups served from cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that recomputed.
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/memo.rs"]
mod tests;
