#![allow(clippy::unwrap_used)]
use super::super::*;

#[test]
fn test_generic_name_without_parameters() {
    let node = SymbolNode::new(SymbolKind::Type, "Gadget");
    assert_eq!(node.generic_name(), "Gadget");
}

#[test]
fn test_generic_name_with_parameters() {
    let mut node = SymbolNode::new(SymbolKind::Type, "Cache");
    node.generic_parameters = vec![Parameter::new("T1"), Parameter::new("T2")];
    assert_eq!(node.generic_name(), "Cache<T1,T2>");
}

#[test]
fn test_full_name_without_parameters_has_no_parentheses() {
    let node = SymbolNode::new(SymbolKind::Method, "Reset");
    assert_eq!(node.full_name(), "Reset");
}

#[test]
fn test_full_name_with_parameters() {
    let mut node = SymbolNode::new(SymbolKind::Method, "Spin");
    node.input_parameters = vec![
        Parameter::new("System.Int32"),
        Parameter::new("System.String"),
    ];
    assert_eq!(node.full_name(), "Spin(System.Int32,System.String)");
}

#[test]
fn test_definition_includes_return_type() {
    let mut node = SymbolNode::new(SymbolKind::Method, "op_Implicit");
    node.input_parameters = vec![Parameter::new("Acme.Vec2")];
    node.return_type = Some("Acme.Vec3".to_string());
    assert_eq!(node.definition(), "op_Implicit(Acme.Vec2) [Acme.Vec3]");
}

#[test]
fn test_definition_combines_generics_and_parameters() {
    let mut node = SymbolNode::new(SymbolKind::Method, "Map");
    node.generic_parameters = vec![Parameter::new("T")];
    node.input_parameters = vec![Parameter::new("System.Func{T}")];
    assert_eq!(node.definition(), "Map<T>(System.Func{T})");
}
