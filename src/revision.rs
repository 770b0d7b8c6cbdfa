//! Server revision model.
//!
//! The platform API changed shape across historical revisions; queries
//! dispatch on which revision the process is running against. The revision
//! is detected once at startup by the host and treated as read-only for the
//! lifetime of the process - this module only models the value, it never
//! re-detects it mid-run.

use serde::{Deserialize, Serialize};

/// A supported server platform revision.
///
/// The set is closed and ordered: variant order matches release order, so
/// `V1_12 < V1_13` holds and "introduced in revision X" checks can use
/// ordinary comparisons. `Unknown` sorts last and is never considered a
/// supported revision.
///
/// The 1.9-1.11 platform releases exist historically but are outside the
/// supported set; version detection maps them to `Unknown`.
///
/// ```
/// use effect_compat::ServerRevision;
///
/// assert!(ServerRevision::V1_12 < ServerRevision::V1_16);
/// assert!(ServerRevision::V1_8.is_supported());
/// assert!(!ServerRevision::Unknown.is_supported());
/// ```
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ServerRevision {
    /// 1.8.8 - the oldest supported revision. Only exposes full
    /// enumeration of an entity's active effects.
    V1_8,
    /// 1.12 - first modern revision, with direct per-type effect retrieval.
    V1_12,
    /// 1.13
    V1_13,
    /// 1.14
    V1_14,
    /// 1.15
    V1_15,
    /// 1.16
    V1_16,
    /// Anything outside the supported set. Lookups on this revision fail
    /// loudly rather than guessing a query strategy.
    Unknown,
}

impl ServerRevision {
    /// All supported revisions, in release order.
    pub const SUPPORTED: [ServerRevision; 6] = [
        ServerRevision::V1_8,
        ServerRevision::V1_12,
        ServerRevision::V1_13,
        ServerRevision::V1_14,
        ServerRevision::V1_15,
        ServerRevision::V1_16,
    ];

    /// Check whether this revision is in the supported set.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        !matches!(self, ServerRevision::Unknown)
    }

    /// Best-effort detection from a platform version string.
    ///
    /// Accepts both plain (`"1.12.2"`) and decorated
    /// (`"git-Paper-1.12.2-R0.1-SNAPSHOT"`) forms: the first `1.x` token
    /// found decides the result. Unrecognized and unsupported versions
    /// (including 1.9-1.11) yield `Unknown`.
    ///
    /// The lookup core never calls this itself - hosts detect once at
    /// startup and pass the resolved value in.
    ///
    /// ```
    /// use effect_compat::ServerRevision;
    ///
    /// assert_eq!(
    ///     ServerRevision::from_server_string("1.8.8-R0.1-SNAPSHOT"),
    ///     ServerRevision::V1_8,
    /// );
    /// assert_eq!(
    ///     ServerRevision::from_server_string("git-Paper-1.16.5"),
    ///     ServerRevision::V1_16,
    /// );
    /// assert_eq!(
    ///     ServerRevision::from_server_string("1.9.4"),
    ///     ServerRevision::Unknown,
    /// );
    /// ```
    #[must_use]
    pub fn from_server_string(version: &str) -> Self {
        for token in version.split(|c: char| !(c.is_ascii_digit() || c == '.')) {
            let mut parts = token.split('.');
            if parts.next() != Some("1") {
                continue;
            }
            let Some(minor) = parts.next().and_then(|m| m.parse::<u32>().ok()) else {
                continue;
            };
            return match minor {
                8 => ServerRevision::V1_8,
                12 => ServerRevision::V1_12,
                13 => ServerRevision::V1_13,
                14 => ServerRevision::V1_14,
                15 => ServerRevision::V1_15,
                16 => ServerRevision::V1_16,
                _ => ServerRevision::Unknown,
            };
        }
        ServerRevision::Unknown
    }
}

impl std::fmt::Display for ServerRevision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ServerRevision::V1_8 => "1.8",
            ServerRevision::V1_12 => "1.12",
            ServerRevision::V1_13 => "1.13",
            ServerRevision::V1_14 => "1.14",
            ServerRevision::V1_15 => "1.15",
            ServerRevision::V1_16 => "1.16",
            ServerRevision::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_order() {
        let mut sorted = ServerRevision::SUPPORTED;
        sorted.sort();
        assert_eq!(sorted, ServerRevision::SUPPORTED);
        for revision in ServerRevision::SUPPORTED {
            assert!(revision < ServerRevision::Unknown);
        }
    }

    #[test]
    fn test_is_supported() {
        for revision in ServerRevision::SUPPORTED {
            assert!(revision.is_supported());
        }
        assert!(!ServerRevision::Unknown.is_supported());
    }

    #[test]
    fn test_detection_plain() {
        assert_eq!(
            ServerRevision::from_server_string("1.8.8"),
            ServerRevision::V1_8
        );
        assert_eq!(
            ServerRevision::from_server_string("1.12.2"),
            ServerRevision::V1_12
        );
        assert_eq!(
            ServerRevision::from_server_string("1.16.5"),
            ServerRevision::V1_16
        );
    }

    #[test]
    fn test_detection_decorated() {
        assert_eq!(
            ServerRevision::from_server_string("git-Paper-1.15.2-R0.1-SNAPSHOT"),
            ServerRevision::V1_15
        );
        assert_eq!(
            ServerRevision::from_server_string("1.13.2-R0.1-SNAPSHOT"),
            ServerRevision::V1_13
        );
    }

    #[test]
    fn test_detection_unsupported_versions() {
        // Real historical versions, deliberately outside the supported set.
        for version in ["1.9", "1.9.4", "1.10.2", "1.11.2"] {
            assert_eq!(
                ServerRevision::from_server_string(version),
                ServerRevision::Unknown,
                "{} should not detect as supported",
                version
            );
        }
    }

    #[test]
    fn test_detection_garbage() {
        assert_eq!(
            ServerRevision::from_server_string(""),
            ServerRevision::Unknown
        );
        assert_eq!(
            ServerRevision::from_server_string("not a version"),
            ServerRevision::Unknown
        );
        assert_eq!(
            ServerRevision::from_server_string("2.0.1"),
            ServerRevision::Unknown
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ServerRevision::V1_8), "1.8");
        assert_eq!(format!("{}", ServerRevision::Unknown), "unknown");
    }

    #[test]
    fn test_serialization() {
        let revision = ServerRevision::V1_14;
        let json = serde_json::to_string(&revision).unwrap();
        let deserialized: ServerRevision = serde_json::from_str(&json).unwrap();
        assert_eq!(revision, deserialized);
    }
}
