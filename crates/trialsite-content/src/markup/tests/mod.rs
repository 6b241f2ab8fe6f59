//! Integration tests for the markup module.
//!
//! Fixtures (.md) and snapshots (.snap) are co-located in `fixtures/`.

mod normalize;

use pretty_assertions::assert_eq;

use crate::markup::{
    blocks::ContentBlock, blocks as lazy_blocks, inline::InlineSpan, render_document,
};

// Fixture-based snapshot tests

#[test]
fn fixture_white_paper_article() {
    assert_fixture("white_paper_article");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!(
        "{}/src/markup/tests/fixtures",
        env!("CARGO_MANIFEST_DIR")
    );
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let blocks = render_document(&md);
    invariants::check(&md, &blocks);

    let snap = normalize::normalize(&blocks);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, snap);
    });
}

// Invariant tests

#[test]
fn reclassifying_is_identical() {
    let md = "# A\n- b\n1. c\n**d**\n*e*\n| f |\ng\n";
    assert_eq!(render_document(md), render_document(md));
}

#[test]
fn lazy_and_eager_agree() {
    let md = "## Heading\ntext\n\n- item";
    let lazy: Vec<_> = lazy_blocks(md).collect();
    assert_eq!(lazy, render_document(md));
}

#[test]
fn empty_document_has_no_blocks() {
    assert!(render_document("").is_empty());
}

#[test]
fn single_empty_line_is_blank() {
    assert_eq!(render_document("\n"), vec![ContentBlock::Blank]);
}

#[test]
fn malformed_input_never_fails() {
    let md = "#\n# \n**\n*\n|\n||\n1.\n-\n****\n#######";
    let blocks = render_document(md);
    invariants::check(md, &blocks);
}

#[test]
fn mixed_document_preserves_order() {
    let blocks = render_document("# One\nTwo\n- Three");
    assert_eq!(
        blocks,
        vec![
            ContentBlock::Heading {
                level: 1,
                text: "One".into()
            },
            ContentBlock::Paragraph {
                text: "Two".into(),
                spans: vec![InlineSpan::plain("Two")],
            },
            ContentBlock::ListItem {
                ordered: false,
                text: "Three".into()
            },
        ]
    );
}
