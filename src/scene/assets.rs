use rustc_hash::FxHashMap;
use smol_str::{SmolStr, format_smolstr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Image,
    Video,
    Audio,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId(SmolStr);

impl AssetId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AssetEntry {
    id: AssetId,
    kind: AssetKind,
}

/// Stable ids for scene assets, keyed by source URL.
#[derive(Debug, Default)]
pub struct AssetRegistry {
    by_path: FxHashMap<SmolStr, AssetEntry>,
    next_id: u32,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id already issued for `path`, or issues `asset-N`.
    ///
    /// The second element is `true` when the asset was created by this call.
    pub fn get_or_register(&mut self, path: &str, kind: AssetKind) -> (AssetId, bool) {
        if let Some(entry) = self.by_path.get(path) {
            return (entry.id.clone(), false);
        }
        let id = AssetId(format_smolstr!("asset-{}", self.next_id));
        self.next_id += 1;
        self.by_path.insert(
            SmolStr::new(path),
            AssetEntry {
                id: id.clone(),
                kind,
            },
        );
        (id, true)
    }

    pub fn get(&self, path: &str) -> Option<&AssetId> {
        self.by_path.get(path).map(|entry| &entry.id)
    }

    pub fn kind(&self, path: &str) -> Option<AssetKind> {
        self.by_path.get(path).map(|entry| entry.kind)
    }

    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }
}
