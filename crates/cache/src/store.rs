use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::hash::Hash;

use crate::error::{ErrorKind, Result};

/// A cached resolving method: its name and the types of its argument tuple
/// and result.
pub trait Method: 'static {
    /// Used in logs and [`NotFound`](ErrorKind::NotFound) errors.
    const NAME: &'static str;
    type Args: Debug + Clone + Eq + Hash + Send + Sync + 'static;
    type Value: Debug + Clone + Send + Sync + 'static;
}

struct Table {
    method: &'static str,
    entries: Box<dyn Any + Send + Sync>,
}

/// Method-scoped key/value store.
///
/// Mutation requires `&mut self`; concurrent use from several threads must
/// go through a lock (or one cache per worker).
#[derive(Default)]
pub struct LookupCache {
    tables: HashMap<TypeId, Table>,
}

impl LookupCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries<M: Method>(&self) -> Option<&HashMap<M::Args, M::Value>> {
        self.tables.get(&TypeId::of::<M>()).and_then(|table| table.entries.downcast_ref())
    }

    fn entries_mut<M: Method>(&mut self) -> &mut HashMap<M::Args, M::Value> {
        let table = self.tables.entry(TypeId::of::<M>()).or_insert_with(|| Table {
            method: M::NAME,
            entries: Box::new(HashMap::<M::Args, M::Value>::new()),
        });
        // Tables are keyed by the TypeId of `M`, so the downcast cannot fail.
        table.entries.downcast_mut().unwrap()
    }

    /// Inserts or overwrites the entry for `args`.
    pub fn populate<M: Method>(&mut self, args: M::Args, value: M::Value) {
        tracing::trace!(method = M::NAME, ?args, ?value, "Populating cache entry");
        self.entries_mut::<M>().insert(args, value);
    }

    /// Inserts or overwrites every entry, returning how many were written.
    pub fn populate_many<M: Method>(&mut self, entries: impl IntoIterator<Item = (M::Args, M::Value)>) -> usize {
        let mut entries = entries.into_iter().peekable();
        if entries.peek().is_none() {
            return 0;
        }
        let table = self.entries_mut::<M>();
        let mut count = 0;
        for (args, value) in entries {
            table.insert(args, value);
            count += 1;
        }
        tracing::trace!(method = M::NAME, count, "Populated cache entries");
        count
    }

    /// Returns the cached value for `args`.
    ///
    /// # Errors
    /// [`ErrorKind::NotFound`] when nothing was ever populated for `args`.
    pub fn retrieve<M: Method>(&self, args: &M::Args) -> Result<M::Value> {
        match self.get::<M>(args) {
            Some(value) => {
                tracing::trace!(method = M::NAME, ?args, "Cache hit");
                Ok(value.clone())
            },
            None => {
                tracing::trace!(method = M::NAME, ?args, "Cache miss");
                exn::bail!(ErrorKind::NotFound {
                    method: M::NAME,
                    key: format!("{args:?}"),
                })
            },
        }
    }

    pub fn get<M: Method>(&self, args: &M::Args) -> Option<&M::Value> {
        self.entries::<M>()?.get(args)
    }

    pub fn contains<M: Method>(&self, args: &M::Args) -> bool {
        self.get::<M>(args).is_some()
    }

    /// Returns the cached value for `args`, computing and caching it with
    /// `resolve` on a miss. Errors from `resolve` are returned as-is and
    /// nothing is cached.
    pub fn get_or_try_insert_with<M: Method, E>(
        &mut self,
        args: M::Args,
        resolve: impl FnOnce(&M::Args) -> std::result::Result<M::Value, E>,
    ) -> std::result::Result<M::Value, E> {
        if let Some(value) = self.get::<M>(&args) {
            tracing::trace!(method = M::NAME, ?args, "Cache hit");
            return Ok(value.clone());
        }
        let value = resolve(&args)?;
        self.populate::<M>(args, value.clone());
        Ok(value)
    }

    /// Number of entries cached for method `M`.
    pub fn len<M: Method>(&self) -> usize {
        self.entries::<M>().map_or(0, HashMap::len)
    }

    /// Returns `true` when nothing at all is cached.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Debug for LookupCache {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut methods: Vec<_> = self.tables.values().map(|table| table.method).collect();
        methods.sort_unstable();
        f.debug_struct("LookupCache").field("methods", &methods).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Series;
    impl Method for Series {
        const NAME: &'static str = "series";
        type Args = String;
        type Value = u64;
    }

    struct Episode;
    impl Method for Episode {
        const NAME: &'static str = "episode";
        type Args = (u64, u32, u32);
        type Value = u64;
    }

    /// Same argument and value types as [`Series`], different scope.
    struct Alias;
    impl Method for Alias {
        const NAME: &'static str = "alias";
        type Args = String;
        type Value = u64;
    }

    #[test]
    fn test_retrieve_missing() {
        let cache = LookupCache::new();
        let err = cache.retrieve::<Series>(&"foo show".to_string()).unwrap_err();
        assert_eq!(
            &*err,
            &ErrorKind::NotFound {
                method: "series",
                key: "\"foo show\"".to_string()
            }
        );
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_populate_overwrites() {
        let mut cache = LookupCache::new();
        cache.populate::<Series>("foo show".to_string(), 1);
        cache.populate::<Series>("foo show".to_string(), 2);
        assert_eq!(cache.retrieve::<Series>(&"foo show".to_string()).unwrap(), 2);
        assert_eq!(cache.len::<Series>(), 1);
    }

    #[test]
    fn test_methods_are_scoped() {
        let mut cache = LookupCache::new();
        cache.populate::<Series>("foo show".to_string(), 42);
        assert!(cache.contains::<Series>(&"foo show".to_string()));
        assert!(!cache.contains::<Alias>(&"foo show".to_string()));
        assert_eq!(cache.len::<Alias>(), 0);
    }

    #[rstest]
    #[case(1, 100)]
    #[case(2, 101)]
    #[case(3, 102)]
    fn test_populate_many(#[case] episode: u32, #[case] expected: u64) {
        let mut cache = LookupCache::new();
        let written = cache.populate_many::<Episode>([((7, 1, 1), 100), ((7, 1, 2), 101), ((7, 1, 3), 102)]);
        assert_eq!(written, 3);
        assert_eq!(cache.len::<Episode>(), 3);
        assert_eq!(cache.retrieve::<Episode>(&(7, 1, episode)).unwrap(), expected);
        assert!(cache.retrieve::<Episode>(&(7, 1, 4)).is_err());
        assert!(cache.retrieve::<Episode>(&(7, 2, episode)).is_err());
    }

    #[test]
    fn test_populate_many_empty() {
        let mut cache = LookupCache::new();
        assert_eq!(cache.populate_many::<Episode>([]), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_get_or_try_insert_with() {
        let mut cache = LookupCache::new();
        let mut calls = 0;
        for _ in 0..3 {
            let value = cache
                .get_or_try_insert_with::<Series, ()>("foo show".to_string(), |_| {
                    calls += 1;
                    Ok(42)
                })
                .unwrap();
            assert_eq!(value, 42);
        }
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_get_or_try_insert_with_error_is_not_cached() {
        let mut cache = LookupCache::new();
        let result = cache.get_or_try_insert_with::<Series, &str>("nothing".to_string(), |_| Err("no results"));
        assert_eq!(result, Err("no results"));
        assert!(!cache.contains::<Series>(&"nothing".to_string()));
    }

    #[test]
    fn test_debug_lists_methods() {
        let mut cache = LookupCache::new();
        cache.populate::<Series>("a".to_string(), 1);
        cache.populate::<Episode>((1, 1, 1), 10);
        assert_eq!(format!("{cache:?}"), r#"LookupCache { methods: ["episode", "series"] }"#);
    }
}
