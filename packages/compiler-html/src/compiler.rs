use pagecraft_model::{
    Alignment, Block, BlockKind, BlockStyle, Radius, Shadow, SizeBucket, Website, WidthBucket,
};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during HTML compilation
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("unsupported feature: {0}")]
    UnsupportedFeature(String),

    #[error("compilation error: {0}")]
    Generic(String),
}

impl From<String> for CompileError {
    fn from(s: String) -> Self {
        CompileError::Generic(s)
    }
}

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Emit per-block inline styles
    pub inline_styles: bool,
    /// Emit utility class names instead of inline styles
    pub use_classes: bool,
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            inline_styles: true,
            use_classes: false,
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            let indent = self.options.indent.repeat(self.depth);
            self.add(&indent);
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Escape text content for HTML.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// String content field, empty if absent or not a string.
fn text_field<'a>(block: &'a Block, key: &str) -> &'a str {
    block.content.get(key).and_then(Value::as_str).unwrap_or("")
}

fn list_field<'a>(block: &'a Block, key: &str) -> &'a [Value] {
    block
        .content
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

// ---- style mapping ------------------------------------------------------

fn padding_css(bucket: SizeBucket) -> &'static str {
    match bucket {
        SizeBucket::None => "0",
        SizeBucket::Small => "1rem 1.5rem",
        SizeBucket::Medium => "2rem 1.5rem",
        SizeBucket::Large => "4rem 1.5rem",
        SizeBucket::ExtraLarge => "6rem 1.5rem",
    }
}

fn width_css(bucket: WidthBucket) -> Option<&'static str> {
    match bucket {
        WidthBucket::Narrow => Some("36rem"),
        WidthBucket::Normal => Some("48rem"),
        WidthBucket::Wide => Some("72rem"),
        WidthBucket::Full => None,
    }
}

fn radius_css(bucket: Radius) -> &'static str {
    match bucket {
        Radius::None => "0",
        Radius::Small => "0.25rem",
        Radius::Medium => "0.5rem",
        Radius::Large => "1rem",
        Radius::Full => "9999px",
    }
}

fn shadow_css(bucket: Shadow) -> &'static str {
    match bucket {
        Shadow::None => "none",
        Shadow::Small => "0 1px 2px rgba(0,0,0,0.08)",
        Shadow::Medium => "0 4px 12px rgba(0,0,0,0.12)",
        Shadow::Large => "0 12px 32px rgba(0,0,0,0.18)",
    }
}

/// CSS declarations for a block style, used for inline styles and the
/// responsive media-query rules alike.
fn style_declarations(style: &BlockStyle) -> Vec<String> {
    let mut decls = Vec::new();
    if let Some(background) = &style.background {
        decls.push(format!("background: {background}"));
    }
    if let Some(color) = &style.text_color {
        decls.push(format!("color: {color}"));
    }
    if let Some(padding) = style.padding {
        decls.push(format!("padding: {}", padding_css(padding)));
    }
    if let Some(align) = style.align {
        let value = match align {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        };
        decls.push(format!("text-align: {value}"));
    }
    if let Some(width) = style.width {
        if let Some(max) = width_css(width) {
            decls.push(format!("max-width: {max}"));
            decls.push("margin-left: auto".to_string());
            decls.push("margin-right: auto".to_string());
        }
    }
    if let Some(radius) = style.border_radius {
        decls.push(format!("border-radius: {}", radius_css(radius)));
    }
    if let Some(shadow) = style.shadow {
        decls.push(format!("box-shadow: {}", shadow_css(shadow)));
    }
    decls
}

/// Utility class list for a block style (class mode).
fn style_classes(style: &BlockStyle) -> Vec<String> {
    let mut classes = Vec::new();
    if let Some(background) = &style.background {
        classes.push(format!("bg-[{background}]"));
    }
    if let Some(color) = &style.text_color {
        classes.push(format!("text-[{color}]"));
    }
    if let Some(padding) = style.padding {
        classes.push(
            match padding {
                SizeBucket::None => "py-0",
                SizeBucket::Small => "py-4 px-6",
                SizeBucket::Medium => "py-8 px-6",
                SizeBucket::Large => "py-16 px-6",
                SizeBucket::ExtraLarge => "py-24 px-6",
            }
            .to_string(),
        );
    }
    if let Some(align) = style.align {
        classes.push(
            match align {
                Alignment::Left => "text-left",
                Alignment::Center => "text-center",
                Alignment::Right => "text-right",
            }
            .to_string(),
        );
    }
    if let Some(width) = style.width {
        classes.push(
            match width {
                WidthBucket::Narrow => "max-w-xl mx-auto",
                WidthBucket::Normal => "max-w-3xl mx-auto",
                WidthBucket::Wide => "max-w-6xl mx-auto",
                WidthBucket::Full => "w-full",
            }
            .to_string(),
        );
    }
    if let Some(radius) = style.border_radius {
        classes.push(
            match radius {
                Radius::None => "rounded-none",
                Radius::Small => "rounded",
                Radius::Medium => "rounded-lg",
                Radius::Large => "rounded-2xl",
                Radius::Full => "rounded-full",
            }
            .to_string(),
        );
    }
    if let Some(shadow) = style.shadow {
        classes.push(
            match shadow {
                Shadow::None => "shadow-none",
                Shadow::Small => "shadow-sm",
                Shadow::Medium => "shadow-md",
                Shadow::Large => "shadow-xl",
            }
            .to_string(),
        );
    }
    classes
}

/// The opening `<section>` tag for a block, carrying its anchor id and
/// either inline styles or utility classes.
fn section_open(block: &Block, ctx: &Context) -> String {
    let mut attrs = format!("id=\"block-{}\"", block.id);

    if ctx.options.use_classes {
        let classes = style_classes(&block.style).join(" ");
        if !classes.is_empty() {
            attrs.push_str(&format!(" class=\"{classes}\""));
        }
    } else if ctx.options.inline_styles {
        let decls = style_declarations(&block.style).join("; ");
        if !decls.is_empty() {
            attrs.push_str(&format!(" style=\"{decls}\""));
        }
    }

    format!("<section {attrs}>")
}

// ---- per-kind templates -------------------------------------------------

fn compile_block(block: &Block, ctx: &mut Context) {
    ctx.add_line(&section_open(block, ctx));
    ctx.indent();

    match block.kind {
        BlockKind::Navbar => {
            ctx.add_line(&format!(
                "<nav><strong>{}</strong>",
                escape(text_field(block, "brand"))
            ));
            ctx.indent();
            ctx.add_line("<ul>");
            ctx.indent();
            for link in list_field(block, "links") {
                if let Some(label) = link.as_str() {
                    ctx.add_line(&format!("<li><a href=\"#\">{}</a></li>", escape(label)));
                }
            }
            ctx.dedent();
            ctx.add_line("</ul>");
            ctx.dedent();
            ctx.add_line("</nav>");
        }
        BlockKind::Hero => {
            ctx.add_line(&format!("<h1>{}</h1>", escape(text_field(block, "heading"))));
            ctx.add_line(&format!(
                "<p>{}</p>",
                escape(text_field(block, "subheading"))
            ));
            let button = text_field(block, "button_text");
            if !button.is_empty() {
                ctx.add_line(&format!(
                    "<a class=\"button\" href=\"{}\">{}</a>",
                    escape(text_field(block, "button_link")),
                    escape(button)
                ));
            }
        }
        BlockKind::Text => {
            ctx.add_line(&format!("<p>{}</p>", escape(text_field(block, "body"))));
        }
        BlockKind::Image => {
            ctx.add_line(&format!(
                "<img src=\"{}\" alt=\"{}\" />",
                escape(text_field(block, "src")),
                escape(text_field(block, "alt"))
            ));
            let caption = text_field(block, "caption");
            if !caption.is_empty() {
                ctx.add_line(&format!("<figcaption>{}</figcaption>", escape(caption)));
            }
        }
        BlockKind::Gallery => {
            ctx.add_line("<div class=\"gallery\">");
            ctx.indent();
            for image in list_field(block, "images") {
                let src = image.get("src").and_then(Value::as_str).unwrap_or("");
                let alt = image.get("alt").and_then(Value::as_str).unwrap_or("");
                ctx.add_line(&format!(
                    "<img src=\"{}\" alt=\"{}\" />",
                    escape(src),
                    escape(alt)
                ));
            }
            ctx.dedent();
            ctx.add_line("</div>");
        }
        BlockKind::Video => {
            let url = text_field(block, "url");
            if url.is_empty() {
                ctx.add_line("<!-- video: no url configured -->");
            } else {
                ctx.add_line(&format!(
                    "<video src=\"{}\" controls></video>",
                    escape(url)
                ));
            }
        }
        BlockKind::Features => {
            ctx.add_line(&format!("<h2>{}</h2>", escape(text_field(block, "heading"))));
            ctx.add_line("<div class=\"features\">");
            ctx.indent();
            for item in list_field(block, "items") {
                let title = item.get("title").and_then(Value::as_str).unwrap_or("");
                let description = item
                    .get("description")
                    .and_then(Value::as_str)
                    .unwrap_or("");
                ctx.add_line("<div class=\"feature\">");
                ctx.indent();
                ctx.add_line(&format!("<h3>{}</h3>", escape(title)));
                ctx.add_line(&format!("<p>{}</p>", escape(description)));
                ctx.dedent();
                ctx.add_line("</div>");
            }
            ctx.dedent();
            ctx.add_line("</div>");
        }
        BlockKind::Pricing => {
            ctx.add_line(&format!("<h2>{}</h2>", escape(text_field(block, "heading"))));
            ctx.add_line("<div class=\"plans\">");
            ctx.indent();
            for plan in list_field(block, "plans") {
                let name = plan.get("name").and_then(Value::as_str).unwrap_or("");
                let price = plan.get("price").and_then(Value::as_str).unwrap_or("");
                ctx.add_line("<div class=\"plan\">");
                ctx.indent();
                ctx.add_line(&format!("<h3>{}</h3>", escape(name)));
                ctx.add_line(&format!("<p class=\"price\">{}</p>", escape(price)));
                if let Some(features) = plan.get("features").and_then(Value::as_array) {
                    ctx.add_line("<ul>");
                    ctx.indent();
                    for feature in features {
                        if let Some(text) = feature.as_str() {
                            ctx.add_line(&format!("<li>{}</li>", escape(text)));
                        }
                    }
                    ctx.dedent();
                    ctx.add_line("</ul>");
                }
                ctx.dedent();
                ctx.add_line("</div>");
            }
            ctx.dedent();
            ctx.add_line("</div>");
        }
        BlockKind::Testimonials => {
            for quote in list_field(block, "quotes") {
                let text = quote.get("text").and_then(Value::as_str).unwrap_or("");
                let author = quote.get("author").and_then(Value::as_str).unwrap_or("");
                ctx.add_line("<blockquote>");
                ctx.indent();
                ctx.add_line(&format!("<p>{}</p>", escape(text)));
                ctx.add_line(&format!("<cite>{}</cite>", escape(author)));
                ctx.dedent();
                ctx.add_line("</blockquote>");
            }
        }
        BlockKind::Cta => {
            ctx.add_line(&format!("<h2>{}</h2>", escape(text_field(block, "heading"))));
            ctx.add_line(&format!(
                "<a class=\"button\" href=\"{}\">{}</a>",
                escape(text_field(block, "button_link")),
                escape(text_field(block, "button_text"))
            ));
        }
        BlockKind::Form => {
            ctx.add_line(&format!("<h2>{}</h2>", escape(text_field(block, "heading"))));
            ctx.add_line("<form>");
            ctx.indent();
            for field in list_field(block, "fields") {
                if let Some(name) = field.as_str() {
                    if name == "message" {
                        ctx.add_line(&format!(
                            "<textarea name=\"{0}\" placeholder=\"{0}\"></textarea>",
                            escape(name)
                        ));
                    } else {
                        ctx.add_line(&format!(
                            "<input name=\"{0}\" placeholder=\"{0}\" />",
                            escape(name)
                        ));
                    }
                }
            }
            ctx.add_line(&format!(
                "<button type=\"submit\">{}</button>",
                escape(text_field(block, "submit_text"))
            ));
            ctx.dedent();
            ctx.add_line("</form>");
        }
        BlockKind::Spacer => {
            let height = block
                .content
                .get("height")
                .and_then(Value::as_u64)
                .unwrap_or(64);
            ctx.add_line(&format!("<div style=\"height: {height}px\"></div>"));
        }
        BlockKind::Footer => {
            ctx.add_line(&format!("<p>{}</p>", escape(text_field(block, "text"))));
            ctx.add_line("<ul>");
            ctx.indent();
            for link in list_field(block, "links") {
                if let Some(label) = link.as_str() {
                    ctx.add_line(&format!("<li><a href=\"#\">{}</a></li>", escape(label)));
                }
            }
            ctx.dedent();
            ctx.add_line("</ul>");
        }
    }

    ctx.dedent();
    ctx.add_line("</section>");
}

// ---- document assembly --------------------------------------------------

fn compile_head(website: &Website, ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"utf-8\" />");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />");

    let title = website
        .settings
        .seo
        .title
        .as_deref()
        .unwrap_or(&website.name);
    ctx.add_line(&format!("<title>{}</title>", escape(title)));

    if let Some(description) = &website.settings.seo.description {
        ctx.add_line(&format!(
            "<meta name=\"description\" content=\"{}\" />",
            escape(description)
        ));
    }

    ctx.add_line(&format!(
        "<link href=\"https://fonts.googleapis.com/css2?family={}&display=swap\" rel=\"stylesheet\" />",
        website.settings.font_family.replace(' ', "+")
    ));

    compile_style_block(website, ctx);

    ctx.dedent();
    ctx.add_line("</head>");
}

/// Base rules, per-block custom CSS and responsive overrides.
fn compile_style_block(website: &Website, ctx: &mut Context) {
    ctx.add_line("<style>");
    ctx.indent();

    ctx.add_line(&format!(
        "body {{ margin: 0; font-family: '{}', sans-serif; background: {}; }}",
        website.settings.font_family, website.settings.theme.background
    ));
    ctx.add_line(&format!(
        ".button {{ display: inline-block; padding: 0.75rem 1.5rem; background: {}; color: #fff; text-decoration: none; }}",
        website.settings.theme.primary_color
    ));

    for block in website.ordered_blocks() {
        if !block.is_visible() {
            continue;
        }
        if let Some(css) = &block.custom_css {
            ctx.add_line(&format!("#block-{} {{ {} }}", block.id, css));
        }
        if let Some(tablet) = &block.responsive.tablet {
            let decls = style_declarations(tablet).join("; ");
            if !decls.is_empty() {
                ctx.add_line(&format!(
                    "@media (max-width: 1024px) {{ #block-{} {{ {decls} }} }}",
                    block.id
                ));
            }
        }
        if let Some(mobile) = &block.responsive.mobile {
            let decls = style_declarations(mobile).join("; ");
            if !decls.is_empty() {
                ctx.add_line(&format!(
                    "@media (max-width: 640px) {{ #block-{} {{ {decls} }} }}",
                    block.id
                ));
            }
        }
    }

    ctx.dedent();
    ctx.add_line("</style>");
}

/// Compile a website document to a standalone HTML page. Hidden blocks
/// are skipped; visible blocks render in document order.
pub fn compile_to_html(
    website: &Website,
    options: CompileOptions,
) -> Result<String, CompileError> {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.indent();

    compile_head(website, &mut ctx);

    ctx.add_line("<body>");
    ctx.indent();
    for block in website.ordered_blocks() {
        if !block.is_visible() {
            continue;
        }
        compile_block(block, &mut ctx);
    }
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    Ok(ctx.get_output())
}
