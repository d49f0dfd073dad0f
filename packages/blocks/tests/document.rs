//! End-to-end checks over a realistic post body.

use blockplus_blocks::{has_blocks, parse, scan, strip_classes, ClassStripper, Renderer};

const POST: &str = r#"<!-- wp:columns {"align":"wide"} -->
<div class="wp-block-columns alignwide"><!-- wp:column -->
<div class="wp-block-column"><!-- wp:paragraph -->
<p class="has-text-align-center">One</p>
<!-- /wp:paragraph --></div>
<!-- /wp:column -->

<!-- wp:column -->
<div class="wp-block-column"><!-- wp:image {"id":7} -->
<figure class="wp-block-image"><img src="a.png" alt=""/></figure>
<!-- /wp:image --></div>
<!-- /wp:column --></div>
<!-- /wp:columns -->"#;

#[test]
fn scan_finds_every_nested_type() {
    assert!(has_blocks(POST));
    let present = scan(&parse(POST));
    let types: Vec<&str> = present.iter().collect();
    assert_eq!(
        types,
        vec!["core/column", "core/columns", "core/image", "core/paragraph"]
    );
}

#[test]
fn per_block_and_document_stripping_agree() {
    let classes = ["wp-block-column", "wp-block-image"];
    let blocks = parse(POST);

    let per_block = Renderer::new()
        .with_filter(ClassStripper::new(classes))
        .render(&blocks);
    let plain = Renderer::new().render(&blocks);
    let whole = strip_classes(&plain, &classes);

    assert_eq!(per_block, whole);
    assert_eq!(strip_classes(&per_block, &classes), per_block);
    assert!(per_block.contains("<div>"));
    assert!(per_block.contains("<figure><img"));
    assert!(per_block.contains(r#"class="wp-block-columns alignwide""#));
}
