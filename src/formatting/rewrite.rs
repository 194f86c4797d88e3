//! Applies tag rules to a parsed HTML fragment in place.
//!
//! Serialization is left to scraper's `inner_html`, so escaping and
//! element kinds follow html5ever.

use super::rules::TagRule;
use ego_tree::{NodeId, NodeRef};
use html5ever::{local_name, ns, LocalName, QualName};
use scraper::node::{Element, Node, Text};
use scraper::Html;

/// What the rules decided for a single element.
#[derive(Debug, Default)]
struct Rewrite {
    rename_to: Option<&'static str>,
    classes: Vec<&'static str>,
    ensure_code_child: bool,
}

impl Rewrite {
    /// Applies every rule in order against the element's current name.
    fn resolve(tag: &str, rules: &[TagRule]) -> Self {
        let mut rewrite = Rewrite::default();
        let mut current = tag;

        for rule in rules {
            if !rule.matches(current) {
                continue;
            }
            if let Some(target) = rule.rename_to {
                rewrite.rename_to = Some(target);
                current = target;
            }
            if let Some(class) = rule.add_class {
                rewrite.classes.push(class);
            }
            rewrite.ensure_code_child |= rule.ensure_code_child;
        }

        rewrite
    }

    fn is_noop(&self) -> bool {
        self.rename_to.is_none() && self.classes.is_empty() && !self.ensure_code_child
    }
}

/// Rewrites `html` according to `rules` and returns the serialized fragment.
pub(super) fn rewrite_fragment(html: &str, rules: &[TagRule]) -> String {
    let mut fragment = Html::parse_fragment(html);

    // Document order; the root <html> wrapper is never rewritten
    let elements: Vec<NodeId> = fragment
        .root_element()
        .descendants()
        .skip(1)
        .filter(|node| node.value().is_element())
        .map(|node| node.id())
        .collect();

    for id in elements {
        apply_rules(&mut fragment, id, rules);
    }

    fragment.root_element().inner_html()
}

fn apply_rules(fragment: &mut Html, id: NodeId, rules: &[TagRule]) {
    let Some(node) = fragment.tree.get(id) else {
        return;
    };
    let Some(element) = node.value().as_element() else {
        return;
    };

    let rewrite = Rewrite::resolve(element.name(), rules);
    if rewrite.is_noop() {
        return;
    }
    let code_text = (rewrite.ensure_code_child && !has_code_descendant(node))
        .then(|| text_content(node));

    let Some(mut node) = fragment.tree.get_mut(id) else {
        return;
    };
    if let Node::Element(element) = node.value() {
        if let Some(target) = rewrite.rename_to {
            element.name.local = LocalName::from(target);
        }
        if !rewrite.classes.is_empty() {
            add_classes(element, &rewrite.classes);
        }
    }

    if let Some(text) = code_text {
        while let Some(mut child) = node.first_child() {
            child.detach();
        }
        let code = Element::new(QualName::new(None, ns!(html), local_name!("code")), Vec::new());
        node.append(Node::Element(code))
            .append(Node::Text(Text { text: text.into() }));
    }
}

/// Appends `classes` after the element's existing classes.
fn add_classes(element: &mut Element, classes: &[&str]) {
    let class_attr = QualName::new(None, ns!(), local_name!("class"));

    match element
        .attrs
        .iter_mut()
        .find(|(name, _)| *name == class_attr)
    {
        Some((_, value)) => {
            let merged = value
                .split_whitespace()
                .chain(classes.iter().copied())
                .collect::<Vec<_>>()
                .join(" ");
            *value = merged.into();
        }
        None => {
            // Attributes are kept sorted by name
            let at = element.attrs.partition_point(|(name, _)| *name < class_attr);
            element
                .attrs
                .insert(at, (class_attr, classes.join(" ").into()));
        }
    }
}

fn has_code_descendant(node: NodeRef<'_, Node>) -> bool {
    node.descendants()
        .skip(1)
        .any(|d| matches!(d.value(), Node::Element(e) if e.name() == "code"))
}

fn text_content(node: NodeRef<'_, Node>) -> String {
    node.descendants()
        .filter_map(|d| d.value().as_text())
        .map(|text| &**text)
        .collect()
}
