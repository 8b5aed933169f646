use std::sync::LazyLock;

use regex::Regex;

use crate::error::DocError;
use crate::model::{NodeId, Parameter, SymbolKind, SymbolNode, SymbolTree};

/// Parenthesized input-parameter list. Leftmost lazy match: parameter
/// types that themselves contain parentheses are not bracketed correctly
/// by this pattern.
static INPUT_PARAMS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\((.*?)\)").unwrap());

/// Bracketed indexer parameter list.
static INDEXER_PARAMS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*?)\]").unwrap());

/// Generic arity marker: a backtick run followed by a decimal arity.
static GENERIC_ARITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`+[0-9]+").unwrap());

/// Structured form of one raw member identifier, before tree attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberIdentity {
    /// One-letter kind code from the identifier prefix.
    pub kind_code: String,
    /// Dotted namespace/type segments; the last is the member's own
    /// short name. Never empty.
    pub path: Vec<String>,
    pub generic_parameters: Vec<Parameter>,
    pub input_parameters: Vec<Parameter>,
    /// Explicit return type from the `~` suffix, if any.
    pub return_type: Option<String>,
}

impl MemberIdentity {
    /// The member's own short name: the last path segment.
    pub fn short_name(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or("")
    }

    /// The namespace/type segments leading to the member.
    pub fn namespace_path(&self) -> &[String] {
        &self.path[..self.path.len() - 1]
    }
}

/// Break a raw identifier into its structured parts.
///
/// Each extraction strips its matched text from a working copy so later
/// steps see a reduced string: parameter list, indexer brackets, generic
/// arity, then the kind-prefixed dotted path.
pub fn parse_identity(raw: &str) -> Result<MemberIdentity, DocError> {
    let mut working = raw.to_string();

    let input_parameters = extract_input_parameters(&mut working);
    strip_indexer_parameters(&mut working);
    let generic_parameters = extract_generic_parameters(&mut working);

    let Some((kind_code, rest)) = working.split_once(':') else {
        return Err(DocError::malformed(raw, "missing `:` kind separator"));
    };

    let (dotted, return_type) = match rest.split_once('~') {
        Some((dotted, ret)) if !ret.is_empty() => (dotted, Some(ret.to_string())),
        Some((dotted, _)) => (dotted, None),
        None => (rest, None),
    };

    if dotted.is_empty() {
        return Err(DocError::malformed(raw, "empty member path"));
    }

    Ok(MemberIdentity {
        kind_code: kind_code.to_string(),
        path: dotted.split('.').map(str::to_string).collect(),
        generic_parameters,
        input_parameters,
        return_type,
    })
}

/// Parse `raw` and attach the resulting node to `tree`.
///
/// Returns the id of the attached node; when an identical definition is
/// already present, that first insertion wins and its id is returned.
pub fn parse_member_id(tree: &mut SymbolTree, raw: &str) -> Result<NodeId, DocError> {
    let identity = parse_identity(raw)?;
    attach(tree, raw, identity)
}

fn attach(tree: &mut SymbolTree, raw: &str, identity: MemberIdentity) -> Result<NodeId, DocError> {
    let mut segments = identity.namespace_path();
    if let Some(first) = segments.first() {
        if first == tree.assembly_name() {
            segments = &segments[1..];
        }
    }

    // Walk the namespace path, creating placeholders as needed. Operator
    // methods never acquire children: a path passing through one makes
    // the whole identifier unparsable.
    let mut parent = tree.root();
    for segment in segments {
        parent = match tree.child_by_key(parent, segment) {
            Some(existing) => existing,
            None => {
                tree.insert_child(parent, SymbolNode::new(SymbolKind::Namespace, segment.as_str()))
            }
        };
        if tree.node(parent).kind == SymbolKind::OperatorMethod {
            return Err(DocError::operator_path(raw));
        }
    }

    let kind = classify(&identity);
    if kind.is_member() {
        tree.promote_to_type(parent);
    }

    let mut node = SymbolNode::new(kind, identity.short_name());
    node.generic_parameters = identity.generic_parameters;
    node.input_parameters = identity.input_parameters;
    node.return_type = identity.return_type;
    Ok(tree.insert_child(parent, node))
}

/// Map the kind code to a node kind. A `P` member with input parameters
/// is an indexer; codes outside the known five fall back to Namespace.
fn classify(identity: &MemberIdentity) -> SymbolKind {
    match identity.kind_code.as_str() {
        "F" => SymbolKind::Field,
        "T" => SymbolKind::Type,
        "M" => SymbolKind::Method,
        "P" if identity.input_parameters.is_empty() => SymbolKind::Property,
        "P" => SymbolKind::IndexerProperty,
        "E" => SymbolKind::Event,
        _ => SymbolKind::Namespace,
    }
}

fn extract_input_parameters(working: &mut String) -> Vec<Parameter> {
    let Some(m) = INPUT_PARAMS.find(working) else {
        return Vec::new();
    };
    let (start, end) = (m.start(), m.end());
    let inner = working[start + 1..end - 1].to_string();
    working.replace_range(start..end, "");
    split_top_level(&inner)
        .into_iter()
        .map(Parameter::new)
        .collect()
}

fn strip_indexer_parameters(working: &mut String) {
    // Content is discarded; bracket presence does not affect
    // classification or parameter data.
    if let Some(m) = INDEXER_PARAMS.find(working) {
        let (start, end) = (m.start(), m.end());
        working.replace_range(start..end, "");
    }
}

fn extract_generic_parameters(working: &mut String) -> Vec<Parameter> {
    let Some(m) = GENERIC_ARITY.find(working) else {
        return Vec::new();
    };
    let marker = m.as_str().to_string();
    let arity: usize = marker.trim_start_matches('`').parse().unwrap_or(0);

    // The marker is removed everywhere it occurs, not just at the match
    // site, so a generic type's members reduce to the type's own path.
    *working = working.replace(&marker, "");

    match arity {
        0 => Vec::new(),
        1 => vec![Parameter::new("T")],
        n => (1..=n).map(|i| Parameter::new(format!("T{i}"))).collect(),
    }
}

/// Split on commas at the top nesting level only. Commas inside `{}`,
/// `[]` or `()` belong to a nested generic or array type and do not
/// separate parameters.
fn split_top_level(input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    for (i, c) in input.char_indices() {
        match c {
            '{' | '[' | '(' => depth += 1,
            '}' | ']' | ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(input[start..i].to_string());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(input[start..].to_string());
    parts
}
