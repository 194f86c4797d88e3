//! Data-driven tag rewrite rules, grouped per target platform.
//!
//! Adding a platform means adding a [`PlatformProfile`]; the traversal in
//! `rewrite` never changes.

/// One rewrite: which tags it matches and what it does to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagRule {
    /// Lowercase tag names this rule applies to.
    pub tags: &'static [&'static str],
    /// New tag name, if the element is renamed.
    pub rename_to: Option<&'static str>,
    /// Class appended after any classes the element already has.
    pub add_class: Option<&'static str>,
    /// Wrap the element's text in `<code>` when it has no `<code>` descendant.
    pub ensure_code_child: bool,
}

impl TagRule {
    pub fn matches(&self, tag: &str) -> bool {
        self.tags.contains(&tag)
    }
}

/// Ordered rules for one publishing platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformProfile {
    pub name: &'static str,
    pub rules: &'static [TagRule],
}

/// The WordPress block editor only recognizes blocks carrying its
/// `wp-block-*` classes.
pub static WORDPRESS_BLOCK_EDITOR: PlatformProfile = PlatformProfile {
    name: "wordpress",
    rules: &[
        TagRule {
            tags: &["h1", "h2", "h3", "h4", "h5", "h6"],
            rename_to: Some("h5"),
            add_class: Some("wp-block-heading"),
            ensure_code_child: false,
        },
        TagRule {
            tags: &["pre"],
            rename_to: None,
            add_class: Some("wp-block-code"),
            ensure_code_child: true,
        },
        TagRule {
            tags: &["ul"],
            rename_to: None,
            add_class: Some("wp-block-list"),
            ensure_code_child: false,
        },
    ],
};
