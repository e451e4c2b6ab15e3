//! Query Cache
//!
//! Response cache keyed by request, with tag-based invalidation.
//! Each cached query declares the tags it provides; a mutation invalidates
//! tags, which marks every entry providing one of them stale so the next
//! read goes back to the server.
//!
//! Every invalidation also moves the generation of its tags. A response that
//! was requested before the move is not cached, so a slow pre-mutation read
//! can never overwrite fresher data.

use std::collections::HashMap;
use std::fmt::Debug;

/// A cached response and the tags it provides
#[derive(Clone, Debug)]
struct Entry<V, T> {
    value: V,
    tags: Vec<T>,
    stale: bool,
}

/// Tag-indexed query cache
#[derive(Clone, Debug)]
pub struct QueryCache<V, T> {
    entries: HashMap<String, Entry<V, T>>,
    /// Invalidation count per tag
    generations: Vec<(T, u64)>,
}

impl<V, T> Default for QueryCache<V, T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            generations: Vec::new(),
        }
    }
}

impl<V, T> QueryCache<V, T>
where
    T: Clone + PartialEq + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh value for `key`, if any. Stale entries are treated as misses.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .get(key)
            .filter(|entry| !entry.stale)
            .map(|entry| &entry.value)
    }

    /// Store a fresh value, replacing whatever was cached under `key`
    pub fn insert(&mut self, key: impl Into<String>, value: V, tags: Vec<T>) {
        self.entries.insert(
            key.into(),
            Entry {
                value,
                tags,
                stale: false,
            },
        );
    }

    /// Generation of `tags`, to be passed to [`QueryCache::insert_if_current`]
    /// once the response arrives
    pub fn generation(&self, tags: &[T]) -> u64 {
        self.generations
            .iter()
            .filter(|(tag, _)| tags.contains(tag))
            .fold(0, |sum, (_, count)| sum.wrapping_add(*count))
    }

    /// Insert unless `tags` were invalidated since `generation` was read.
    ///
    /// Returns whether the value was cached.
    pub fn insert_if_current(
        &mut self,
        key: impl Into<String>,
        value: V,
        tags: Vec<T>,
        generation: u64,
    ) -> bool {
        let key = key.into();
        if self.generation(&tags) != generation {
            log::debug!("[CACHE] dropped outdated response for {}", key);
            return false;
        }
        self.insert(key, value, tags);
        true
    }

    /// Mark every entry providing any of `tags` as stale.
    ///
    /// Returns the number of entries that went from fresh to stale.
    pub fn invalidate(&mut self, tags: &[T]) -> usize {
        for tag in tags {
            match self.generations.iter_mut().find(|(known, _)| known == tag) {
                Some((_, count)) => *count = count.wrapping_add(1),
                None => self.generations.push((tag.clone(), 1)),
            }
        }

        let mut marked = 0;
        for (key, entry) in self.entries.iter_mut() {
            if entry.stale {
                continue;
            }
            if entry.tags.iter().any(|tag| tags.contains(tag)) {
                entry.stale = true;
                marked += 1;
                log::debug!("[CACHE] invalidated {} via {:?}", key, tags);
            }
        }
        marked
    }

    /// Whether `key` is cached but stale
    #[cfg(test)]
    fn is_stale(&self, key: &str) -> bool {
        self.entries.get(key).map_or(false, |entry| entry.stale)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
