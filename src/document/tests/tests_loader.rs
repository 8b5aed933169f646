#![allow(clippy::unwrap_used)]
use crate::model::SymbolKind;

use super::super::{build_tree, load, parse_document};

const SAMPLE: &str = r#"<?xml version="1.0"?>
<doc>
    <assembly>
        <name>WidgetKit</name>
    </assembly>
    <members>
        <member name="T:Acme.Widgets.Gadget">
            <summary>A configurable gadget.</summary>
        </member>
        <member name="P:Acme.Widgets.Gadget.Speed">
            <summary>Current speed of the <see cref="T:Acme.Widgets.Gadget"/>.</summary>
        </member>
        <member name="M:Acme.Widgets.Gadget.Spin(System.Int32)">
            <summary>Spins for the given duration.</summary>
            <param name="duration">Duration in milliseconds.</param>
            <returns>Nothing.</returns>
        </member>
        <member name="F:Acme.Widgets.Gadget.count"/>
    </members>
</doc>
"#;

#[test]
fn test_load_reads_assembly_name() {
    let doc = load(SAMPLE).unwrap();
    assert_eq!(doc.assembly_name, "WidgetKit");
}

#[test]
fn test_load_collects_members_in_document_order() {
    let doc = load(SAMPLE).unwrap();
    let names: Vec<&str> = doc.members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "T:Acme.Widgets.Gadget",
            "P:Acme.Widgets.Gadget.Speed",
            "M:Acme.Widgets.Gadget.Spin(System.Int32)",
            "F:Acme.Widgets.Gadget.count",
        ]
    );
}

#[test]
fn test_load_keeps_raw_summary_markup() {
    let doc = load(SAMPLE).unwrap();
    assert_eq!(
        doc.members[1].summary.as_deref(),
        Some("Current speed of the <see cref=\"T:Acme.Widgets.Gadget\"/>.")
    );
}

#[test]
fn test_load_skips_non_summary_member_content() {
    let doc = load(SAMPLE).unwrap();
    assert_eq!(
        doc.members[2].summary.as_deref(),
        Some("Spins for the given duration.")
    );
}

#[test]
fn test_load_handles_empty_member_element() {
    let doc = load(SAMPLE).unwrap();
    assert_eq!(doc.members[3].name, "F:Acme.Widgets.Gadget.count");
    assert!(doc.members[3].summary.is_none());
}

#[test]
fn test_load_missing_assembly_name_defaults_to_empty() {
    let xml = r#"<doc><members><member name="T:Ns.C"/></members></doc>"#;
    let doc = load(xml).unwrap();
    assert_eq!(doc.assembly_name, "");
    assert_eq!(doc.members.len(), 1);
}

#[test]
fn test_load_rejects_unbalanced_xml() {
    let err = load("<doc><members><member name=\"T:Ns.C\">").unwrap_err();
    assert!(matches!(err, crate::DocError::Xml(_)));
}

#[test]
fn test_build_tree_names_root_and_attaches_summaries() {
    let doc = load(SAMPLE).unwrap();
    let tree = build_tree(&doc);

    assert_eq!(tree.assembly_name(), "WidgetKit");
    let gadget = tree.lookup("Acme.Widgets.Gadget").unwrap();
    assert_eq!(tree.node(gadget).kind, SymbolKind::Type);
    assert_eq!(
        tree.node(gadget).summary.as_deref(),
        Some("A configurable gadget.")
    );
}

#[test]
fn test_build_tree_skips_malformed_members() {
    let xml = r#"<doc>
        <members>
            <member name="T:Ns.C"/>
            <member name="NotAnIdentifier"/>
            <member name="P:Ns.C.Speed"/>
        </members>
    </doc>"#;
    let doc = load(xml).unwrap();
    let tree = build_tree(&doc);

    assert!(tree.lookup("Ns.C").is_some());
    assert!(tree.lookup("Ns.C.Speed").is_some());
    // Root, Ns, C, Speed: the malformed entry contributed nothing.
    assert_eq!(tree.node_count(), 4);
}

#[test]
fn test_build_tree_keeps_first_summary_on_duplicates() {
    let xml = r#"<doc>
        <members>
            <member name="P:Ns.C.Speed"><summary>First.</summary></member>
            <member name="P:Ns.C.Speed"><summary>Second.</summary></member>
        </members>
    </doc>"#;
    let doc = load(xml).unwrap();
    let tree = build_tree(&doc);

    let speed = tree.lookup("Ns.C.Speed").unwrap();
    assert_eq!(tree.node(speed).summary.as_deref(), Some("First."));
}

#[test]
fn test_parse_document_resolves_references() {
    let tree = parse_document(SAMPLE).unwrap();
    let speed = tree.lookup("Acme.Widgets.Gadget.Speed").unwrap();
    assert_eq!(
        tree.node(speed).summary.as_deref(),
        Some("Current speed of the Acme.Widgets.Gadget.")
    );
}
