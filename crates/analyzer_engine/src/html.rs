use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::Html;

/// Elements whose contents never reach the extracted text.
const SKIPPED_ELEMENTS: [&str; 2] = ["script", "style"];

/// Flattens an HTML document to plain text.
///
/// Script and style subtrees are dropped, every remaining text node is
/// concatenated in document order, and whitespace runs collapse to a single
/// space. Layout is not preserved.
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut raw = String::with_capacity(html.len() / 2);
    collect_text(document.tree.root(), &mut raw);
    collapse_whitespace(&raw)
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => out.push_str(text),
        Node::Element(element) => {
            let name = element.name();
            if SKIPPED_ELEMENTS
                .iter()
                .any(|skipped| skipped.eq_ignore_ascii_case(name))
            {
                return;
            }
            for child in node.children() {
                collect_text(child, out);
            }
        }
        Node::Comment(_) | Node::Doctype(_) | Node::ProcessingInstruction(_) => {}
        _ => {
            for child in node.children() {
                collect_text(child, out);
            }
        }
    }
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
