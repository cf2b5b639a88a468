use crate::markup::MarkupNode;

/// Returns the bold title element of a course entry
///
/// A course entry is an anchor whose first child is a paragraph, and that
/// paragraph's first child is a bold element holding the title line.
///
/// # Arguments
/// * `node` - The anchor to inspect
///
/// # Returns
/// `Some(title)` if the nesting matches, `None` otherwise
pub fn title_element<N: MarkupNode>(node: &N) -> Option<N> {
    let paragraph = node.first_child().filter(|child| child.is_element("p"))?;

    paragraph
        .first_child()
        .filter(|child| child.is_element("b") || child.is_element("strong"))
}

/// Determines whether a node anchors a course entry
///
/// # Arguments
/// * `node` - Any node of a parsed listing
///
/// # Returns
/// `true` for `<a name=..><p><b>..` shaped nodes, `false` for everything else,
/// including navigation links and anchors without content
pub fn is_course_element<N: MarkupNode>(node: &N) -> bool {
    node.is_element("a") && node.attr("name").is_some() && title_element(node).is_some()
}

fn collect<N: MarkupNode>(node: N, found: &mut Vec<N>) {
    let children = node.children();
    if is_course_element(&node) {
        found.push(node);
    }
    for child in children {
        collect(child, found);
    }
}

/// Finds every course entry below `root`, in document order
pub fn find_course_elements<N: MarkupNode>(root: N) -> Vec<N> {
    let mut found = Vec::new();
    collect(root, &mut found);
    found
}
