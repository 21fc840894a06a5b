use srcgen_core::listing::{SourceEntry, SourceListing};
use srcgen_core::render::{render_block, render_template};

fn listing(paths: &[&str]) -> SourceListing {
    SourceListing {
        entries: paths
            .iter()
            .map(|p| SourceEntry {
                path: p.to_string(),
            })
            .collect(),
    }
}

#[test]
fn substitutes_the_sorted_listing_into_the_template() {
    let listing = listing(&["a/x.cpp", "a/z.cpp", "b/y.h"]);
    let block = render_block(&listing, "\t");
    let rendered = render_template("sources = %<FILES>\n", &block).expect("render");

    assert_eq!(rendered.replaced, 1);
    assert_eq!(rendered.text, "sources = \n\ta/x.cpp\n\ta/z.cpp\n\tb/y.h\n");
}

#[test]
fn every_token_receives_the_identical_block() {
    let block = render_block(&listing(&["a.cpp"]), "\t");
    let template = "target_sources(app PRIVATE %<SOURCES>)\ninstall(FILES %<FILES>)\n";
    let rendered = render_template(template, &block).expect("render");

    assert_eq!(rendered.replaced, 2);
    assert_eq!(
        rendered.text,
        "target_sources(app PRIVATE \n\ta.cpp)\ninstall(FILES \n\ta.cpp)\n"
    );
}

#[test]
fn tokenless_template_is_written_back_unchanged() {
    let block = render_block(&listing(&["a.cpp"]), "\t");
    let template = "cmake_minimum_required(VERSION 3.22)\n";
    let rendered = render_template(template, &block).expect("render");

    assert_eq!(rendered.replaced, 0);
    assert_eq!(rendered.text, template);
}

#[test]
fn empty_tree_leaves_just_the_opening_indent() {
    let block = render_block(&listing(&[]), "\t");
    let rendered = render_template("sources = %<FILES>", &block).expect("render");

    assert_eq!(rendered.text, "sources = \n\t");
}
