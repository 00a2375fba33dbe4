//! Parsers for the textual identity forms.
//!
//! Only [`parse_group_version`] can fail. The dot-separated forms come from
//! loosely validated text (flags, manifests) and degrade to a partial tuple
//! instead of rejecting input.

use crate::{GroupKind, GroupResource, GroupVersion, GroupVersionKind, SchemeError};

/// Parses `<kind>.<group>`, splitting at the first dot.
///
/// Without a dot the whole input is the kind and the group is empty.
pub fn parse_group_kind(s: &str) -> GroupKind {
    match s.split_once('.') {
        Some((kind, group)) => GroupKind::new(group, kind),
        None => GroupKind::new("", s),
    }
}

/// Parses a kind argument that may carry a version: `<kind>.<version>.<group>`.
///
/// The triple is only produced when the input has at least two dots; the
/// group then keeps any remaining dots. The second value is always
/// [`parse_group_kind`] of the same input, so `Pod.v1.apps` yields both
/// `{apps, v1, Pod}` and `{group: "v1.apps", kind: "Pod"}`. Which reading to
/// trust is up to the caller.
pub fn parse_kind_arg(s: &str) -> (Option<GroupVersionKind>, GroupKind) {
    let gvk = if s.matches('.').count() >= 2 {
        let mut parts = s.splitn(3, '.');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(kind), Some(version), Some(group)) => {
                Some(GroupVersionKind::new(group, version, kind))
            }
            _ => None,
        }
    } else {
        None
    };

    (gvk, parse_group_kind(s))
}

/// Parses `<group>/<version>` or a bare `<version>`.
///
/// `""` and `"/"` both yield the empty GroupVersion. More than one `/` is
/// rejected.
pub fn parse_group_version(s: &str) -> Result<GroupVersion, SchemeError> {
    if s.is_empty() || s == "/" {
        return Ok(GroupVersion::default());
    }

    if s.matches('/').count() > 1 {
        return Err(SchemeError::malformed(s));
    }

    match s.split_once('/') {
        Some((group, version)) => Ok(GroupVersion::new(group, version)),
        None => Ok(GroupVersion::new("", s)),
    }
}

/// Parses `<resource>.<group>`, splitting at the first dot.
///
/// Without a dot the whole input is the resource and the group is empty.
pub fn parse_group_resource(s: &str) -> GroupResource {
    match s.split_once('.') {
        Some((resource, group)) => GroupResource::new(group, resource),
        None => GroupResource::new("", s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("Pod.apps", "apps", "Pod")]
    #[case("Pod", "", "Pod")]
    #[case("Deployment.apps.example.com", "apps.example.com", "Deployment")]
    #[case(".apps", "apps", "")]
    #[case("Pod.", "", "Pod")]
    #[case("", "", "")]
    fn test_parse_group_kind(#[case] input: &str, #[case] group: &str, #[case] kind: &str) {
        assert_eq!(parse_group_kind(input), GroupKind::new(group, kind));
    }

    #[test]
    fn test_parse_kind_arg_returns_both_readings() {
        let (gvk, gk) = parse_kind_arg("Pod.v1.apps");
        assert_eq!(gvk, Some(GroupVersionKind::new("apps", "v1", "Pod")));
        assert_eq!(gk, GroupKind::new("v1.apps", "Pod"));
    }

    #[test]
    fn test_parse_kind_arg_group_keeps_extra_dots() {
        let (gvk, gk) = parse_kind_arg("Ingress.v1.networking.k8s.io");
        assert_eq!(
            gvk,
            Some(GroupVersionKind::new("networking.k8s.io", "v1", "Ingress"))
        );
        assert_eq!(gk, GroupKind::new("v1.networking.k8s.io", "Ingress"));
    }

    #[rstest]
    #[case("Pod")]
    #[case("Pod.apps")]
    #[case("")]
    fn test_parse_kind_arg_without_version(#[case] input: &str) {
        let (gvk, gk) = parse_kind_arg(input);
        assert_eq!(gvk, None);
        assert_eq!(gk, parse_group_kind(input));
    }

    #[test]
    fn test_parse_kind_arg_empty_segments() {
        let (gvk, _) = parse_kind_arg("..");
        assert_eq!(gvk, Some(GroupVersionKind::default()));
    }

    #[rstest]
    #[case("", "", "")]
    #[case("/", "", "")]
    #[case("v1", "", "v1")]
    #[case("apps/v1", "apps", "v1")]
    #[case("/v1", "", "v1")]
    #[case("apps/", "apps", "")]
    #[case("networking.k8s.io/v1beta1", "networking.k8s.io", "v1beta1")]
    fn test_parse_group_version(#[case] input: &str, #[case] group: &str, #[case] version: &str) {
        assert_eq!(
            parse_group_version(input).unwrap(),
            GroupVersion::new(group, version)
        );
    }

    #[rstest]
    #[case("a/b/c")]
    #[case("//")]
    #[case("apps/v1/")]
    fn test_parse_group_version_malformed(#[case] input: &str) {
        let err = parse_group_version(input).unwrap_err();
        assert!(matches!(
            &err,
            SchemeError::MalformedIdentifier { input: got } if got == input
        ));
        assert_eq!(err.input(), input);
    }

    #[test]
    fn test_parse_group_version_core_group_drops_slash() {
        let gv = parse_group_version("/v1").unwrap();
        assert_eq!(gv.to_string(), "v1");
    }

    #[rstest]
    #[case("deployments.apps", "apps", "deployments")]
    #[case("pods", "", "pods")]
    #[case("ingresses.networking.k8s.io", "networking.k8s.io", "ingresses")]
    fn test_parse_group_resource(
        #[case] input: &str,
        #[case] group: &str,
        #[case] resource: &str,
    ) {
        assert_eq!(parse_group_resource(input), GroupResource::new(group, resource));
    }

    proptest! {
        #[test]
        fn group_version_single_slash_roundtrip(
            group in "[a-z0-9.-]{1,16}",
            version in "[a-z0-9]{0,8}",
        ) {
            let input = format!("{group}/{version}");
            let gv = parse_group_version(&input).unwrap();
            prop_assert_eq!(gv.to_string(), input);
        }

        #[test]
        fn group_version_display_then_parse_is_identity(
            group in "[a-z0-9.-]{1,16}",
            version in "[a-z0-9]{1,8}",
        ) {
            let gv = GroupVersion::new(group, version);
            prop_assert_eq!(parse_group_version(&gv.to_string()).unwrap(), gv);
        }

        #[test]
        fn group_version_without_slash_is_version_only(s in "[^/]{1,24}") {
            prop_assert_eq!(parse_group_version(&s).unwrap(), GroupVersion::new("", s.clone()));
        }

        #[test]
        fn group_version_one_slash_never_fails(a in "[^/]{0,8}", b in "[^/]{0,8}") {
            let input = format!("{a}/{b}");
            prop_assert_eq!(parse_group_version(&input).unwrap(), GroupVersion::new(a, b));
        }

        #[test]
        fn group_version_many_slashes_is_malformed(
            a in "[a-z]{0,6}",
            b in "[a-z]{0,6}",
            c in "[a-z/]{0,6}",
        ) {
            let input = format!("{a}/{b}/{c}");
            prop_assert!(parse_group_version(&input).unwrap_err().is_malformed());
        }

        #[test]
        fn kind_arg_group_kind_matches_parse_group_kind(s in "[A-Za-z0-9.]{0,24}") {
            let (_, gk) = parse_kind_arg(&s);
            prop_assert_eq!(gk, parse_group_kind(&s));
        }
    }
}
