use crate::shared::constants::{DEV_VERSION_TAG, RELEASES_INDEX_URL};

/// Maps a version tag to its release notes page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogLinkResolver {
    releases_url: String,
}

impl ChangelogLinkResolver {
    pub fn new(releases_url: &str) -> Self {
        Self {
            releases_url: releases_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn releases_url(&self) -> &str {
        &self.releases_url
    }

    /// Dev builds link to the releases index, anything else to its tag page.
    /// Tags are not validated.
    pub fn resolve(&self, tag: &str) -> String {
        if tag == DEV_VERSION_TAG {
            return self.releases_url.clone();
        }

        format!("{}/tag/{}", self.releases_url, tag)
    }
}

impl Default for ChangelogLinkResolver {
    fn default() -> Self {
        Self::new(RELEASES_INDEX_URL)
    }
}

/// Resolve against the upstream releases index
pub fn tag_changelog_link(tag: &str) -> String {
    ChangelogLinkResolver::default().resolve(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_tag_links_to_index() {
        assert_eq!(
            tag_changelog_link("v0.0.0"),
            "https://github.com/andersan81/cyclops/releases"
        );
    }

    #[test]
    fn test_release_tag_links_to_tag_page() {
        assert_eq!(
            tag_changelog_link("v1.2.3"),
            "https://github.com/andersan81/cyclops/releases/tag/v1.2.3"
        );
    }

    #[test]
    fn test_malformed_tags_pass_through() {
        assert_eq!(
            tag_changelog_link(""),
            "https://github.com/andersan81/cyclops/releases/tag/"
        );
        assert_eq!(
            tag_changelog_link("not a tag"),
            "https://github.com/andersan81/cyclops/releases/tag/not a tag"
        );
    }

    #[test]
    fn test_custom_index_trailing_slash_trimmed() {
        let resolver = ChangelogLinkResolver::new("https://example.com/releases/");
        assert_eq!(resolver.releases_url(), "https://example.com/releases");
        assert_eq!(
            resolver.resolve("v2.0.0"),
            "https://example.com/releases/tag/v2.0.0"
        );
        assert_eq!(resolver.resolve("v0.0.0"), "https://example.com/releases");
    }
}
