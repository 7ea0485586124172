use ferry_core::convert::{ConverterCache, Selector};
use ferry_core::stmt::Type;
use std::sync::Arc;

#[test]
fn repeated_selection_reuses_descriptors() {
    let selector = Selector::new();

    let first = selector.select(&Type::Uuid, None).next().unwrap();
    let second = selector.select(&Type::Uuid, None).next().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(selector.cache().len(), 1);
}

#[test]
fn cache_is_keyed_by_both_types() {
    let selector = Selector::new();

    let all: Vec<_> = selector.select(&Type::Uuid, None).collect();
    assert_eq!(all.len(), 2);
    assert_eq!(selector.cache().len(), 2);

    let bytes = selector
        .select(&Type::Uuid, Some(&Type::Bytes))
        .next()
        .unwrap();
    assert!(Arc::ptr_eq(&bytes, &all[1]));
    assert_eq!(selector.cache().len(), 2);

    let cached = selector.cache().get(&Type::Uuid, &Type::String).unwrap();
    assert!(Arc::ptr_eq(&cached, &all[0]));
    assert!(selector.cache().get(&Type::Uuid, &Type::I64).is_none());
}

#[test]
fn selectors_share_a_cache() {
    let cache = ConverterCache::new();
    let a = Selector::with_cache(cache.clone());
    let b = Selector::with_cache(cache.clone());

    let from_a = a.select(&Type::I32, Some(&Type::String)).next().unwrap();
    let from_b = b.select(&Type::I32, Some(&Type::String)).next().unwrap();

    assert!(Arc::ptr_eq(&from_a, &from_b));
    assert_eq!(cache.len(), 1);

    let cloned = a.clone();
    let from_clone = cloned
        .select(&Type::I32, Some(&Type::String))
        .next()
        .unwrap();
    assert!(Arc::ptr_eq(&from_a, &from_clone));
}

#[test]
fn clear_forgets_descriptors() {
    let selector = Selector::new();

    let before = selector.select(&Type::Date, None).next().unwrap();
    assert!(!selector.cache().is_empty());

    selector.cache().clear();
    assert!(selector.cache().is_empty());

    let after = selector.select(&Type::Date, None).next().unwrap();
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(before.provider_ty(), after.provider_ty());
}

#[test]
fn concurrent_selection_agrees() {
    let selector = Selector::new();

    let infos: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    selector
                        .select(&Type::I64, Some(&Type::Bytes))
                        .next()
                        .unwrap()
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    let cached = selector.cache().get(&Type::I64, &Type::Bytes).unwrap();
    assert_eq!(selector.cache().len(), 1);

    // Threads that missed together may hold their own build; all later
    // lookups see the stored one.
    let again = selector
        .select(&Type::I64, Some(&Type::Bytes))
        .next()
        .unwrap();
    assert!(Arc::ptr_eq(&cached, &again));
    assert!(infos.iter().all(|info| info.provider_ty() == &Type::Bytes));
}
