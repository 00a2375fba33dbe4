//! # flora-scheme
//!
//! Versioned resource identity types for the flora platform.
//!
//! ## Identity Tuples
//!
//! Every versioned type is addressed by a combination of:
//!
//! - **group**: the namespace of a family of related kinds (`apps`, or empty for
//!   the legacy core group)
//! - **version**: the revision of a shape within a group (`v1`, `v2beta1`)
//! - **kind**: the type name used in object contexts (`Deployment`)
//! - **resource**: the collection name used in endpoint contexts (`deployments`)
//!
//! The pairs and triples ([`GroupKind`], [`GroupVersion`], [`GroupVersionKind`],
//! [`GroupResource`], [`GroupVersionResource`]) are plain values: cheap to
//! clone, comparable, hashable.
//!
//! ## String Forms
//!
//! Each parser has its own delimiter convention and they are deliberately not
//! unified:
//!
//! - `apps/v1` → [`parse_group_version`] (strict, fails on more than one `/`)
//! - `Deployment.apps` → [`parse_group_kind`] (total)
//! - `Deployment.v1.apps` → [`parse_kind_arg`] (total, returns both readings)
//! - `deployments.apps` → [`parse_group_resource`] (total)
//!
//! ## Resolution
//!
//! [`GroupVersion::kind_for_group_version_kinds`] picks the preferred
//! candidate out of a list: exact group and version first, then any version
//! of the same group, in input order.

mod error;
mod object_kind;
mod parse;
mod resolve;
mod types;

pub use error::SchemeError;
pub use object_kind::{EmptyObjectKind, ObjectKind, EMPTY_OBJECT_KIND};
pub use parse::{parse_group_kind, parse_group_resource, parse_group_version, parse_kind_arg};
pub use types::*;
