use crate::{AssetCategory, AssetStore, SharedAssetData};

/// Resolve a logical asset name to its bytes, or `None`.
///
/// Probe order: the exact name first, then — when the name carries no
/// extension of its own — each of the category's default extensions.
/// Callers treat `None` as "skip this visual element"; nothing here ever
/// aborts a document.
pub fn locate(
    store: &dyn AssetStore,
    category: AssetCategory,
    logical_name: &str,
) -> Option<SharedAssetData> {
    let name = logical_name.trim();
    if name.is_empty() {
        return None;
    }

    if let Some(data) = store.get(category, name) {
        return Some(data);
    }

    if !name.contains('.') {
        for ext in category.default_extensions() {
            let candidate = format!("{name}.{ext}");
            if let Some(data) = store.get(category, &candidate) {
                log::debug!("asset '{name}' resolved as '{candidate}'");
                return Some(data);
            }
        }
    }

    log::debug!("asset '{name}' not found in {}", category.dir_name());
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryAssetStore;

    fn store_with(category: AssetCategory, name: &str) -> InMemoryAssetStore {
        let store = InMemoryAssetStore::new();
        store.put(category, name, b"data".to_vec()).unwrap();
        store
    }

    #[test]
    fn empty_name_short_circuits() {
        let store = InMemoryAssetStore::new();
        assert!(locate(&store, AssetCategory::Logo, "").is_none());
        assert!(locate(&store, AssetCategory::Logo, "   ").is_none());
    }

    #[test]
    fn exact_match_wins() {
        let store = store_with(AssetCategory::Logo, "acme.png");
        assert!(locate(&store, AssetCategory::Logo, "acme.png").is_some());
    }

    #[test]
    fn extension_probe_follows_fixed_order() {
        let store = InMemoryAssetStore::new();
        store.put(AssetCategory::Image, "chart.jpg", vec![1]).unwrap();
        store.put(AssetCategory::Image, "chart.png", vec![2]).unwrap();

        // "png" precedes "jpg" in the default extension list.
        let data = locate(&store, AssetCategory::Image, "chart").unwrap();
        assert_eq!(&*data, &[2]);
    }

    #[test]
    fn names_with_extension_are_not_probed_further() {
        let store = store_with(AssetCategory::Image, "chart.png");
        assert!(locate(&store, AssetCategory::Image, "chart.gif").is_none());
    }

    #[test]
    fn missing_asset_is_none_not_error() {
        let store = InMemoryAssetStore::new();
        assert!(locate(&store, AssetCategory::Logo, "ghost").is_none());
    }
}
