//! Version label synthesis for work that has not been tagged yet.
use semver::Version;

use crate::analyzer::release::Tag;

/// Marker appended to the synthesized version of the unreleased bucket.
pub const UNRELEASED_MARK: &str = "(Unreleased)";

/// Version used when the latest tag is not semver or there are no tags.
pub const FALLBACK_VERSION: Version = Version::new(0, 0, 1);

/// Parse a tag name as a semantic version, allowing a single leading `v`.
pub fn parse_tag_version(name: &str) -> Option<Version> {
    let trimmed = name.strip_prefix(['v', 'V']).unwrap_or(name);
    Version::parse(trimmed).ok()
}

/// Increment the patch component. Pre-release and build metadata are
/// dropped.
pub fn bump_patch(version: &Version) -> Version {
    Version::new(version.major, version.minor, version.patch + 1)
}

/// Next version after the most recent tag.
pub fn unreleased_version(latest: Option<&Tag>) -> Version {
    latest
        .and_then(|tag| tag.semver.as_ref())
        .map(bump_patch)
        .unwrap_or(FALLBACK_VERSION)
}

/// Label of the unreleased bucket, e.g. `2.3.10 (Unreleased)`.
pub fn unreleased_label(latest: Option<&Tag>) -> String {
    format!("{} {UNRELEASED_MARK}", unreleased_version(latest))
}
