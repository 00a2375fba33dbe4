//! Reading and stamping the identity of versioned values.

use crate::GroupVersionKind;

/// Access to the [`GroupVersionKind`] a versioned value carries.
///
/// Generic code uses this to read or stamp an object's version tag without
/// knowing its concrete type. The trait is object safe.
///
/// Implementations are not synchronized: `set_group_version_kind` takes
/// `&mut self`, and an owner sharing a value across threads must serialize
/// writers itself (for example behind a `Mutex`).
pub trait ObjectKind {
    /// Returns the current identity.
    fn group_version_kind(&self) -> GroupVersionKind;

    /// Replaces the current identity.
    fn set_group_version_kind(&mut self, gvk: GroupVersionKind);
}

/// Stateless [`ObjectKind`] that reports the empty identity and ignores writes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EmptyObjectKind;

/// Shared instance of [`EmptyObjectKind`].
pub const EMPTY_OBJECT_KIND: EmptyObjectKind = EmptyObjectKind;

impl ObjectKind for EmptyObjectKind {
    fn group_version_kind(&self) -> GroupVersionKind {
        GroupVersionKind::default()
    }

    fn set_group_version_kind(&mut self, _gvk: GroupVersionKind) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Manifest {
        gvk: GroupVersionKind,
    }

    impl ObjectKind for Manifest {
        fn group_version_kind(&self) -> GroupVersionKind {
            self.gvk.clone()
        }

        fn set_group_version_kind(&mut self, gvk: GroupVersionKind) {
            self.gvk = gvk;
        }
    }

    fn stamp(obj: &mut dyn ObjectKind, gvk: GroupVersionKind) -> GroupVersionKind {
        obj.set_group_version_kind(gvk);
        obj.group_version_kind()
    }

    #[test]
    fn test_empty_object_kind_reports_empty() {
        assert!(EMPTY_OBJECT_KIND.group_version_kind().is_empty());
    }

    #[test]
    fn test_empty_object_kind_ignores_writes() {
        let mut empty = EMPTY_OBJECT_KIND;
        let got = stamp(&mut empty, GroupVersionKind::new("apps", "v1", "Deployment"));
        assert!(got.is_empty());
    }

    #[test]
    fn test_stateful_object_kind_stores_writes() {
        let mut manifest = Manifest::default();
        let gvk = GroupVersionKind::new("apps", "v1", "Deployment");
        assert_eq!(stamp(&mut manifest, gvk.clone()), gvk);

        let next = GroupVersionKind::new("apps", "v2", "Deployment");
        assert_eq!(stamp(&mut manifest, next.clone()), next);
    }

    #[test]
    fn test_shared_owner_serializes_writers() {
        use std::sync::{Arc, Mutex};

        let shared = Arc::new(Mutex::new(Manifest::default()));
        let handles: Vec<_> = ["v1", "v2", "v3"]
            .into_iter()
            .map(|version| {
                let shared = Arc::clone(&shared);
                std::thread::spawn(move || {
                    let gvk = GroupVersionKind::new("apps", version, "Deployment");
                    shared.lock().unwrap().set_group_version_kind(gvk);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let gvk = shared.lock().unwrap().group_version_kind();
        assert_eq!(gvk.group, "apps");
        assert!(["v1", "v2", "v3"].contains(&gvk.version.as_str()));
    }
}
