//! Indentation tree for UABEA TXT dumps
//!
//! A TXT dump is a flat list of lines whose leading-space count encodes
//! nesting. This module rebuilds the tree with a stack of open containers:
//! each line pops every container at its indent or deeper, then attaches a
//! new node to whatever remains on top.

use indexmap::IndexMap;
use serde_json::Value;

use super::PREAMBLE;
use crate::error::{Error, Result};
use crate::formats::value::{Scalar, parse_scalar};

type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug)]
enum TreeNode {
    Object(IndexMap<String, NodeId>),
    Array(Vec<NodeId>),
    Scalar(Scalar),
}

/// Parsed dump tree, arena-allocated.
#[derive(Debug)]
pub struct DumpTree {
    nodes: Vec<TreeNode>,
}

impl DumpTree {
    /// Build the tree from raw TXT dump text.
    ///
    /// Blank lines, the `0 MonoBehaviour Base` preamble, `[n]` index markers
    /// and `int size` counter lines carry no data and are skipped. Any other
    /// line that does not parse as a container or a `name = value` leaf is a
    /// syntax error carrying its 1-based line number.
    pub fn parse(text: &str) -> Result<Self> {
        let mut tree = Self {
            nodes: vec![TreeNode::Object(IndexMap::new())],
        };
        // Depth -1 keeps the root below every real indent level.
        let mut stack: Vec<(isize, NodeId)> = vec![(-1, ROOT)];

        for (index, line) in text.lines().enumerate() {
            let line_number = index + 1;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with(PREAMBLE) {
                continue;
            }

            let stripped = line.trim_start_matches(' ');
            let indent = (line.len() - stripped.len()) as isize;
            while stack.len() > 1 && stack.last().is_some_and(|&(depth, _)| depth >= indent) {
                stack.pop();
            }
            let parent = stack.last().map_or(ROOT, |&(_, id)| id);

            // Marker checks look only at the declaration left of `=`, so a
            // quoted value containing "int size" or "Array Array" stays data.
            let declaration = stripped.split_once('=').map_or(stripped, |(left, _)| left);
            if is_index_marker(stripped) || declaration.contains("int size") {
                continue;
            }

            if declaration.contains("Array Array") {
                let node = tree.alloc(TreeNode::Array(Vec::new()));
                tree.attach(parent, "Array", node);
                stack.push((indent, node));
                continue;
            }

            if let Some((left, value)) = stripped.split_once('=') {
                let name = field_name(left).ok_or_else(|| Error::Syntax {
                    line: line_number,
                    message: "value line needs an alignment tag, a type, and a name".to_string(),
                    content: stripped.to_string(),
                })?;
                let node = tree.alloc(TreeNode::Scalar(parse_scalar(value.trim())));
                tree.attach(parent, name, node);
                continue;
            }

            let name = field_name(stripped).ok_or_else(|| Error::Syntax {
                line: line_number,
                message: "node line needs an alignment tag, a type, and a name".to_string(),
                content: stripped.to_string(),
            })?;
            let node = tree.alloc(TreeNode::Object(IndexMap::new()));
            tree.attach(parent, name, node);
            stack.push((indent, node));
        }

        Ok(tree)
    }

    /// Convert the tree into a JSON value, preserving field order.
    #[must_use]
    pub fn to_json(&self) -> Value {
        self.node_json(ROOT)
    }

    fn node_json(&self, id: NodeId) -> Value {
        match &self.nodes[id] {
            TreeNode::Object(fields) => {
                let mut out = serde_json::Map::new();
                for (name, &child) in fields {
                    out.insert(name.clone(), self.node_json(child));
                }
                Value::Object(out)
            }
            TreeNode::Array(items) => {
                Value::Array(items.iter().map(|&child| self.node_json(child)).collect())
            }
            TreeNode::Scalar(scalar) => scalar.clone().into_json(),
        }
    }

    fn alloc(&mut self, node: TreeNode) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Duplicate names in an object replace the earlier entry in place.
    fn attach(&mut self, parent: NodeId, name: &str, child: NodeId) {
        match &mut self.nodes[parent] {
            TreeNode::Object(fields) => {
                fields.insert(name.to_string(), child);
            }
            TreeNode::Array(items) => items.push(child),
            TreeNode::Scalar(_) => {}
        }
    }
}

/// The field name is the last whitespace token; the tag and type before it
/// are dump decoration. Fewer than two tokens is malformed.
fn field_name(decorated: &str) -> Option<&str> {
    let mut tokens = decorated.split_whitespace();
    tokens.next()?;
    let mut name = tokens.next()?;
    for token in tokens {
        name = token;
    }
    Some(name)
}

fn is_index_marker(stripped: &str) -> bool {
    stripped
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SAMPLE: &str = "0 MonoBehaviour Base\n \
                          0 PPtr<GameObject> m_GameObject\n  \
                          0 int m_FileID = 0\n  \
                          0 SInt64 m_PathID = 0\n \
                          1 UInt8 m_Enabled = 1\n \
                          1 string m_Name = \"I2Languages\"\n \
                          0 LanguageSourceData mSource\n  \
                          0 TermData mTerms\n   \
                          1 Array Array (1 items)\n    \
                          0 int size = 1\n    \
                          [0]\n     \
                          0 TermData data\n      \
                          1 string Term = \"greet\"\n";

    #[test]
    fn test_parse_nested_structure() {
        let tree = DumpTree::parse(SAMPLE).unwrap();
        assert_eq!(
            tree.to_json(),
            json!({
                "m_GameObject": { "m_FileID": 0, "m_PathID": 0 },
                "m_Enabled": 1,
                "m_Name": "I2Languages",
                "mSource": {
                    "mTerms": {
                        "Array": [ { "Term": "greet" } ]
                    }
                }
            })
        );
    }

    #[test]
    fn test_crlf_input_parses_identically() {
        let crlf = SAMPLE.replace('\n', "\r\n");
        let a = DumpTree::parse(SAMPLE).unwrap().to_json();
        let b = DumpTree::parse(&crlf).unwrap().to_json();
        assert_eq!(a, b);
    }

    #[test]
    fn test_dedent_pops_to_sibling() {
        let text = "0 MonoBehaviour Base\n \
                    0 Outer a\n  \
                    0 int x = 1\n \
                    0 Outer b\n  \
                    0 int y = 2\n";
        let tree = DumpTree::parse(text).unwrap();
        assert_eq!(
            tree.to_json(),
            json!({ "a": { "x": 1 }, "b": { "y": 2 } })
        );
    }

    #[test]
    fn test_skips_markers_and_blank_lines() {
        let text = "0 MonoBehaviour Base\n\n \
                    0 Thing data\n  \
                    1 Array Array (2 items)\n   \
                    0 int size = 2\n   \
                    [0]\n    \
                    1 string data = \"a\"\n   \
                    [1]\n    \
                    1 string data = \"b\"\n";
        let tree = DumpTree::parse(text).unwrap();
        assert_eq!(
            tree.to_json(),
            json!({ "data": { "Array": ["a", "b"] } })
        );
    }

    #[test]
    fn test_marker_phrases_inside_values_stay_data() {
        let text = " 1 string a = \"int size = 4\"\n \
                     1 string b = \"Array Array (2 items)\"\n";
        let tree = DumpTree::parse(text).unwrap();
        assert_eq!(
            tree.to_json(),
            json!({ "a": "int size = 4", "b": "Array Array (2 items)" })
        );
    }

    #[test]
    fn test_duplicate_name_replaces() {
        let text = " 0 int x = 1\n 0 int x = 2\n";
        let tree = DumpTree::parse(text).unwrap();
        assert_eq!(tree.to_json(), json!({ "x": 2 }));
    }

    #[test]
    fn test_syntax_error_carries_line_number() {
        let text = "0 MonoBehaviour Base\n 0 Good node\n garbage\n";
        let err = DumpTree::parse(text).unwrap_err();
        match err {
            Error::Syntax { line, content, .. } => {
                assert_eq!(line, 3);
                assert_eq!(content, "garbage");
            }
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_value_line() {
        let err = DumpTree::parse(" x = 1\n").unwrap_err();
        assert!(matches!(err, Error::Syntax { line: 1, .. }));
    }
}
