//! Preferred-version resolution over a candidate list.

use crate::{GroupVersion, GroupVersionKind};

impl GroupVersion {
    /// Picks the preferred kind out of `kinds`.
    ///
    /// The first candidate matching both group and version wins. Failing
    /// that, the first candidate in the same group is accepted regardless of
    /// version. Input order is the tie-break in both passes. Returns `None`
    /// when no candidate shares the group.
    pub fn kind_for_group_version_kinds(
        &self,
        kinds: &[GroupVersionKind],
    ) -> Option<GroupVersionKind> {
        kinds
            .iter()
            .find(|gvk| gvk.group == self.group && gvk.version == self.version)
            .or_else(|| kinds.iter().find(|gvk| gvk.group == self.group))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deployments() -> Vec<GroupVersionKind> {
        vec![
            GroupVersionKind::new("apps", "v1", "Deployment"),
            GroupVersionKind::new("apps", "v2", "Deployment"),
        ]
    }

    #[test]
    fn test_exact_match() {
        let preferred = GroupVersion::new("apps", "v1");
        assert_eq!(
            preferred.kind_for_group_version_kinds(&deployments()),
            Some(GroupVersionKind::new("apps", "v1", "Deployment"))
        );
    }

    #[test]
    fn test_exact_match_beats_earlier_group_match() {
        let preferred = GroupVersion::new("apps", "v2");
        assert_eq!(
            preferred.kind_for_group_version_kinds(&deployments()),
            Some(GroupVersionKind::new("apps", "v2", "Deployment"))
        );
    }

    #[test]
    fn test_group_fallback_takes_first_in_order() {
        let preferred = GroupVersion::new("apps", "v3");
        assert_eq!(
            preferred.kind_for_group_version_kinds(&deployments()),
            Some(GroupVersionKind::new("apps", "v1", "Deployment"))
        );

        let mut reversed = deployments();
        reversed.reverse();
        assert_eq!(
            preferred.kind_for_group_version_kinds(&reversed),
            Some(GroupVersionKind::new("apps", "v2", "Deployment"))
        );
    }

    #[test]
    fn test_no_match() {
        let preferred = GroupVersion::new("networking", "v1");
        assert_eq!(preferred.kind_for_group_version_kinds(&deployments()), None);
    }

    #[test]
    fn test_empty_candidates() {
        let preferred = GroupVersion::new("apps", "v1");
        assert_eq!(preferred.kind_for_group_version_kinds(&[]), None);
    }

    #[test]
    fn test_core_group_only_matches_core_candidates() {
        let kinds = vec![
            GroupVersionKind::new("apps", "v1", "Deployment"),
            GroupVersionKind::new("", "v1", "Pod"),
        ];
        let preferred = GroupVersion::new("", "v2");
        assert_eq!(
            preferred.kind_for_group_version_kinds(&kinds),
            Some(GroupVersionKind::new("", "v1", "Pod"))
        );
    }

    #[test]
    fn test_first_exact_match_wins_among_duplicates() {
        let kinds = vec![
            GroupVersionKind::new("apps", "v1", "Deployment"),
            GroupVersionKind::new("apps", "v1", "StatefulSet"),
        ];
        let preferred = GroupVersion::new("apps", "v1");
        assert_eq!(
            preferred
                .kind_for_group_version_kinds(&kinds)
                .map(|gvk| gvk.kind),
            Some("Deployment".to_string())
        );
    }
}
