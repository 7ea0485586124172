use super::ConverterInfo;
use crate::{stmt::Type, Result};
use dashmap::DashMap;
use std::sync::Arc;

type Key = (Type, Type);

/// Memoizes descriptors by `(model type, provider type)`.
///
/// Clones share the same storage. Repeated lookups for a pair return the
/// same `Arc`, so callers may compare descriptors with [`Arc::ptr_eq`].
#[derive(Debug, Clone, Default)]
pub struct ConverterCache {
    entries: Arc<DashMap<Key, Arc<ConverterInfo>>>,
}

impl ConverterCache {
    pub fn new() -> ConverterCache {
        ConverterCache::default()
    }

    pub fn get(&self, model_ty: &Type, provider_ty: &Type) -> Option<Arc<ConverterInfo>> {
        self.entries
            .get(&(model_ty.clone(), provider_ty.clone()))
            .map(|entry| entry.value().clone())
    }

    /// Returns the cached descriptor for the pair, building it with `f` on a
    /// miss.
    ///
    /// `f` runs without holding any lock. If two threads miss on the same
    /// pair at once, both build a descriptor and the first one stored wins.
    pub fn get_or_try_insert(
        &self,
        model_ty: Type,
        provider_ty: Type,
        f: impl FnOnce(&Type, &Type) -> Result<ConverterInfo>,
    ) -> Result<Arc<ConverterInfo>> {
        let key = (model_ty, provider_ty);

        if let Some(entry) = self.entries.get(&key) {
            return Ok(entry.value().clone());
        }

        tracing::debug!(model_ty = %key.0, provider_ty = %key.1, "converter cache miss");

        let info = Arc::new(f(&key.0, &key.1)?);
        Ok(self.entries.entry(key).or_insert(info).value().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}
