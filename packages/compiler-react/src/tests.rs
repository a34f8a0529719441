use crate::{compile_to_react, CompileOptions};
use pagecraft_model::{Block, BlockKind, BlockRegistry, Visibility, Website};

fn sample_site() -> Website {
    let registry = BlockRegistry::default();
    let mut site = Website::new("w-1".to_string(), "Acme Landing");
    for (index, kind) in [BlockKind::Hero, BlockKind::Text, BlockKind::Hero]
        .into_iter()
        .enumerate()
    {
        let def = registry.definition(kind).expect("kind registered");
        let mut block = Block::new(
            format!("b-{index}"),
            kind,
            def.default_content.clone(),
            def.default_style.clone(),
        );
        block.order = index;
        site.blocks.push(block);
    }
    site
}

#[test]
fn test_module_structure() {
    let site = sample_site();
    let result = compile_to_react(&site, CompileOptions::default()).unwrap();

    assert!(result.contains("import \"./styles.css\";"));
    assert!(result.contains("import React from \"react\";"));
    assert!(result.contains("const _Hero = ({ content, style }) => ("));
    assert!(result.contains("const Hero = React.memo(_Hero);"));
    assert!(result.contains("export default Page;"));
}

#[test]
fn test_one_component_per_kind_used() {
    let site = sample_site();
    let result = compile_to_react(&site, CompileOptions::default()).unwrap();

    // Two hero blocks, one Hero component definition.
    assert_eq!(result.matches("const _Hero =").count(), 1);
    assert_eq!(result.matches("const _TextBlock =").count(), 1);
    // No component for kinds the page never uses.
    assert!(!result.contains("const _Footer"));
}

#[test]
fn test_page_composes_visible_blocks_in_order() {
    let mut site = sample_site();
    site.blocks[1].visibility = Visibility::Hidden;

    let result = compile_to_react(&site, CompileOptions::default()).unwrap();

    // Hidden text block is gone from the page and its component with it.
    assert!(!result.contains("<TextBlock"));
    assert_eq!(result.matches("<Hero content=").count(), 2);
}

#[test]
fn test_content_embedded_as_object_literal() {
    let site = sample_site();
    let result = compile_to_react(&site, CompileOptions::default()).unwrap();

    assert!(result.contains("\"heading\":\"Build something great\""));
    assert!(result.contains("\"textAlign\":\"center\""));
}

#[test]
fn test_typescript_annotations() {
    let site = sample_site();
    let options = CompileOptions {
        use_typescript: true,
        include_css_imports: false,
    };
    let result = compile_to_react(&site, options).unwrap();

    assert!(result.contains("{ content: any; style: React.CSSProperties }"));
    assert!(!result.contains("import \"./styles.css\";"));
}
