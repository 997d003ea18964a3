//! Indented text outline of a view tree.
//!
//! Stand-in rendering surface: one line per node, two spaces per depth
//! level, slots summarised rather than expanded.

use pelagic::ViewNode;

/// Render a node and its subtree.
pub fn render(node: &ViewNode) -> String {
    let mut out = String::new();
    line(node, 0, &mut out);
    out
}

fn line(node: &ViewNode, depth: usize, out: &mut String) {
    let pad = "  ".repeat(depth);
    let label = match node {
        ViewNode::Section { anchor, title, .. } => format!("# {title} [#{anchor}]"),
        ViewNode::Heading(text) => format!("## {text}"),
        ViewNode::Text(text) => text.clone(),
        ViewNode::Badge { label, tone } => format!("[{label}] ({tone})"),
        ViewNode::Link { label, target } => format!("{label} -> {target}"),
        ViewNode::KeyValue(rows) => rows
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join(" | "),
        ViewNode::Gauge {
            label,
            value,
            percent,
        } => format!("{label}: {value} ({percent:.1}%)"),
        ViewNode::Card { title, selected, .. } => {
            if *selected {
                format!("* {title} (selected)")
            } else {
                format!("* {title}")
            }
        }
        ViewNode::Group { title, .. } => format!("-- {title} --"),
        ViewNode::FilterBar { tokens, active } => {
            let rendered: Vec<String> = tokens
                .iter()
                .map(|t| {
                    if *t == *active {
                        format!("<{t}>")
                    } else {
                        (*t).to_owned()
                    }
                })
                .collect();
            format!("filters: {}", rendered.join(" "))
        }
        ViewNode::Chart(slot) => format!(
            "chart {:?} \"{}\"{}",
            slot.feed.kind,
            slot.feed.title,
            if slot.live { " (live)" } else { "" }
        ),
        ViewNode::Map(slot) => format!(
            "map {} units, {} plumes, center ({}, {})",
            slot.units.len(),
            slot.plumes.len(),
            slot.center.lat,
            slot.center.lon
        ),
        ViewNode::Form(slot) => format!(
            "form {:?}{}",
            slot.phase,
            slot.banner.map(|b| format!(" - {b}")).unwrap_or_default()
        ),
        ViewNode::Modal { title, .. } => format!("=== MODAL: {title} ==="),
    };
    out.push_str(&pad);
    out.push_str(&label);
    out.push('\n');
    for child in node.children() {
        line(child, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_indents_children() {
        let tree = ViewNode::Section {
            anchor: "demo",
            title: "Demo",
            children: vec![ViewNode::text("hello")],
        };
        let rendered = render(&tree);
        assert_eq!(rendered, "# Demo [#demo]\n  hello\n");
    }
}
