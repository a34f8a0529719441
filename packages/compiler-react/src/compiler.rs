use crate::context::{CompileOptions, CompilerContext};
use pagecraft_model::{
    Alignment, Block, BlockKind, BlockStyle, Radius, Shadow, SizeBucket, Website, WidthBucket,
};
use serde_json::{json, Map, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("compilation error: {0}")]
    Generic(String),
}

/// Compile a website document to a React module: one memoized component
/// per block kind used, plus a default-exported page composing the
/// visible blocks in document order.
pub fn compile_to_react(
    website: &Website,
    options: CompileOptions,
) -> Result<String, CompileError> {
    let ctx = CompilerContext::new(options);
    let visible: Vec<&Block> = website
        .ordered_blocks()
        .into_iter()
        .filter(|b| b.is_visible())
        .collect();

    compile_imports(&ctx);

    // One component per kind, in order of first appearance.
    let mut kinds: Vec<BlockKind> = Vec::new();
    for block in &visible {
        if !kinds.contains(&block.kind) {
            kinds.push(block.kind);
        }
    }
    for kind in &kinds {
        compile_component(*kind, &ctx);
    }

    compile_page(website, &visible, &ctx);

    Ok(ctx.get_output())
}

fn compile_imports(ctx: &CompilerContext) {
    if ctx.options.include_css_imports {
        ctx.add_line("import \"./styles.css\";");
    }
    ctx.add_line("import React from \"react\";");
    ctx.add("\n");
}

fn props_signature(ctx: &CompilerContext) -> &'static str {
    if ctx.options.use_typescript {
        "({ content, style }: { content: any; style: React.CSSProperties })"
    } else {
        "({ content, style })"
    }
}

fn component_name(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Hero => "Hero",
        BlockKind::Navbar => "Navbar",
        BlockKind::Text => "TextBlock",
        BlockKind::Image => "ImageBlock",
        BlockKind::Gallery => "Gallery",
        BlockKind::Features => "Features",
        BlockKind::Pricing => "Pricing",
        BlockKind::Testimonials => "Testimonials",
        BlockKind::Cta => "CallToAction",
        BlockKind::Form => "ContactForm",
        BlockKind::Video => "VideoBlock",
        BlockKind::Spacer => "Spacer",
        BlockKind::Footer => "Footer",
    }
}

fn compile_component(kind: BlockKind, ctx: &CompilerContext) {
    let name = component_name(kind);

    ctx.add_line(&format!("const _{} = {} => (", name, props_signature(ctx)));
    ctx.indent();
    ctx.add_line("<section style={style}>");
    ctx.indent();

    match kind {
        BlockKind::Hero => {
            ctx.add_line("<h1>{content.heading}</h1>");
            ctx.add_line("<p>{content.subheading}</p>");
            ctx.add_line(
                "{content.button_text && <a href={content.button_link}>{content.button_text}</a>}",
            );
        }
        BlockKind::Navbar => {
            ctx.add_line("<nav>");
            ctx.indent();
            ctx.add_line("<strong>{content.brand}</strong>");
            ctx.add_line("<ul>");
            ctx.indent();
            ctx.add_line(
                "{(content.links || []).map((link) => <li key={link}><a href=\"#\">{link}</a></li>)}",
            );
            ctx.dedent();
            ctx.add_line("</ul>");
            ctx.dedent();
            ctx.add_line("</nav>");
        }
        BlockKind::Text => {
            ctx.add_line("<p>{content.body}</p>");
        }
        BlockKind::Image => {
            ctx.add_line("<img src={content.src} alt={content.alt} />");
            ctx.add_line("{content.caption && <figcaption>{content.caption}</figcaption>}");
        }
        BlockKind::Gallery => {
            ctx.add_line(
                "{(content.images || []).map((image, index) => <img key={index} src={image.src} alt={image.alt} />)}",
            );
        }
        BlockKind::Features => {
            ctx.add_line("<h2>{content.heading}</h2>");
            ctx.add_line("{(content.items || []).map((item) => (");
            ctx.indent();
            ctx.add_line("<div key={item.title}>");
            ctx.indent();
            ctx.add_line("<h3>{item.title}</h3>");
            ctx.add_line("<p>{item.description}</p>");
            ctx.dedent();
            ctx.add_line("</div>");
            ctx.dedent();
            ctx.add_line("))}");
        }
        BlockKind::Pricing => {
            ctx.add_line("<h2>{content.heading}</h2>");
            ctx.add_line("{(content.plans || []).map((plan) => (");
            ctx.indent();
            ctx.add_line("<div key={plan.name}>");
            ctx.indent();
            ctx.add_line("<h3>{plan.name}</h3>");
            ctx.add_line("<p>{plan.price}</p>");
            ctx.add_line(
                "<ul>{(plan.features || []).map((feature) => <li key={feature}>{feature}</li>)}</ul>",
            );
            ctx.dedent();
            ctx.add_line("</div>");
            ctx.dedent();
            ctx.add_line("))}");
        }
        BlockKind::Testimonials => {
            ctx.add_line("{(content.quotes || []).map((quote, index) => (");
            ctx.indent();
            ctx.add_line("<blockquote key={index}>");
            ctx.indent();
            ctx.add_line("<p>{quote.text}</p>");
            ctx.add_line("<cite>{quote.author}</cite>");
            ctx.dedent();
            ctx.add_line("</blockquote>");
            ctx.dedent();
            ctx.add_line("))}");
        }
        BlockKind::Cta => {
            ctx.add_line("<h2>{content.heading}</h2>");
            ctx.add_line("<a href={content.button_link}>{content.button_text}</a>");
        }
        BlockKind::Form => {
            ctx.add_line("<h2>{content.heading}</h2>");
            ctx.add_line("<form>");
            ctx.indent();
            ctx.add_line(
                "{(content.fields || []).map((field) => <input key={field} name={field} placeholder={field} />)}",
            );
            ctx.add_line("<button type=\"submit\">{content.submit_text}</button>");
            ctx.dedent();
            ctx.add_line("</form>");
        }
        BlockKind::Video => {
            ctx.add_line("{content.url && <video src={content.url} controls />}");
        }
        BlockKind::Spacer => {
            ctx.add_line("<div style={{ height: content.height }} />");
        }
        BlockKind::Footer => {
            ctx.add_line("<p>{content.text}</p>");
            ctx.add_line(
                "<ul>{(content.links || []).map((link) => <li key={link}>{link}</li>)}</ul>",
            );
        }
    }

    ctx.dedent();
    ctx.add_line("</section>");
    ctx.dedent();
    ctx.add_line(");");
    ctx.add_line(&format!("_{name}.displayName = \"{name}\";"));
    ctx.add_line(&format!("const {name} = React.memo(_{name});"));
    ctx.add("\n");
}

/// React inline-style object for a block style.
fn style_object(style: &BlockStyle) -> Value {
    let mut object = Map::new();
    if let Some(background) = &style.background {
        object.insert("background".to_string(), json!(background));
    }
    if let Some(color) = &style.text_color {
        object.insert("color".to_string(), json!(color));
    }
    if let Some(padding) = style.padding {
        let value = match padding {
            SizeBucket::None => "0",
            SizeBucket::Small => "1rem 1.5rem",
            SizeBucket::Medium => "2rem 1.5rem",
            SizeBucket::Large => "4rem 1.5rem",
            SizeBucket::ExtraLarge => "6rem 1.5rem",
        };
        object.insert("padding".to_string(), json!(value));
    }
    if let Some(align) = style.align {
        let value = match align {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        };
        object.insert("textAlign".to_string(), json!(value));
    }
    if let Some(width) = style.width {
        let max = match width {
            WidthBucket::Narrow => Some("36rem"),
            WidthBucket::Normal => Some("48rem"),
            WidthBucket::Wide => Some("72rem"),
            WidthBucket::Full => None,
        };
        if let Some(max) = max {
            object.insert("maxWidth".to_string(), json!(max));
            object.insert("margin".to_string(), json!("0 auto"));
        }
    }
    if let Some(radius) = style.border_radius {
        let value = match radius {
            Radius::None => "0",
            Radius::Small => "0.25rem",
            Radius::Medium => "0.5rem",
            Radius::Large => "1rem",
            Radius::Full => "9999px",
        };
        object.insert("borderRadius".to_string(), json!(value));
    }
    if let Some(shadow) = style.shadow {
        let value = match shadow {
            Shadow::None => "none",
            Shadow::Small => "0 1px 2px rgba(0,0,0,0.08)",
            Shadow::Medium => "0 4px 12px rgba(0,0,0,0.12)",
            Shadow::Large => "0 12px 32px rgba(0,0,0,0.18)",
        };
        object.insert("boxShadow".to_string(), json!(value));
    }
    Value::Object(object)
}

fn compile_page(website: &Website, visible: &[&Block], ctx: &CompilerContext) {
    let page_signature = if ctx.options.use_typescript {
        "(): React.ReactElement"
    } else {
        "()"
    };

    ctx.add_line(&format!("const Page = {} => (", page_signature));
    ctx.indent();
    ctx.add_line("<>");
    ctx.indent();
    for block in visible {
        let name = component_name(block.kind);
        // JSON literals are valid JS object literals.
        ctx.add_line(&format!(
            "<{name} content={{{}}} style={{{}}} />",
            Value::Object(block.content.clone()),
            style_object(&block.style)
        ));
    }
    ctx.dedent();
    ctx.add_line("</>");
    ctx.dedent();
    ctx.add_line(");");
    ctx.add_line(&format!("Page.displayName = \"{}\";", website.name));
    ctx.add("\n");
    ctx.add_line("export default Page;");
}
