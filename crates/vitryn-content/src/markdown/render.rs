//! Markdown-to-block-tree rendering.
//!
//! Parses a markdown body with `pulldown-cmark` and folds the event
//! stream into a tree of [`Block`] values the presentation layer can
//! style without re-parsing anything. Every block and inline node
//! carries a stable styling hint (see [`Block::hint`]), headings get
//! slug-derived anchor ids for in-page navigation, and relative image
//! references are rewritten under a configurable asset base.
//!
//! The renderer is deliberately forgiving: unclosed structures are
//! flushed as-is when input ends, raw HTML is ignored, and nothing here
//! returns an error. Malformed markdown yields a best-effort tree, never
//! a failure.
//!
//! # Example
//!
//! ```rust
//! use vitryn_content::markdown::{render_blocks, Block, RenderOptions};
//!
//! let blocks = render_blocks("## Getting Started\n\nHello.", &RenderOptions::new());
//! assert_eq!(blocks.len(), 2);
//! assert!(matches!(
//!     &blocks[0],
//!     Block::Heading { level: 2, id, .. } if id == "getting-started"
//! ));
//! assert_eq!(blocks[0].hint(), "prose-h2");
//! ```

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};
use serde::{Deserialize, Serialize};
use vitryn_core::slugify;

use crate::markdown::frontmatter::split_frontmatter;

/// Words per minute assumed by the reading-time estimate.
const READING_WORDS_PER_MINUTE: usize = 200;

/// Inline content inside a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Inline {
    /// Plain text run.
    Text(String),
    /// Inline code span.
    Code(String),
    /// Bold span.
    Strong(Vec<Inline>),
    /// Italic span.
    Emphasis(Vec<Inline>),
    /// Hyperlink.
    Link {
        href: String,
        title: Option<String>,
        children: Vec<Inline>,
    },
    /// Inline image; standalone images are promoted to [`Block::Image`].
    Image {
        src: String,
        alt: String,
        title: Option<String>,
    },
}

impl Inline {
    /// Styling hook consumed by the presentation layer.
    pub fn hint(&self) -> &'static str {
        match self {
            Inline::Text(_) => "prose-text",
            Inline::Code(_) => "prose-code-inline",
            Inline::Strong(_) => "prose-strong",
            Inline::Emphasis(_) => "prose-em",
            Inline::Link { .. } => "prose-link",
            Inline::Image { .. } => "prose-image",
        }
    }
}

/// One block-level construct of the rendered document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    /// Heading with a slug-derived anchor id.
    Heading {
        level: u8,
        id: String,
        content: Vec<Inline>,
    },
    /// Paragraph of inline content.
    Paragraph { content: Vec<Inline> },
    /// Ordered or unordered list; each item is a sequence of blocks.
    List {
        ordered: bool,
        items: Vec<Vec<Block>>,
    },
    /// Quoted block.
    Blockquote { blocks: Vec<Block> },
    /// Fenced or indented code block.
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    /// Standalone image, asset path already rewritten.
    Image {
        src: String,
        alt: String,
        title: Option<String>,
    },
    /// Table split into a header row and body rows of inline cells.
    Table {
        headers: Vec<Vec<Inline>>,
        rows: Vec<Vec<Vec<Inline>>>,
    },
    /// Thematic break.
    Rule,
}

impl Block {
    /// Styling hook consumed by the presentation layer.
    pub fn hint(&self) -> &'static str {
        match self {
            Block::Heading { level, .. } => match *level {
                1 => "prose-h1",
                2 => "prose-h2",
                3 => "prose-h3",
                4 => "prose-h4",
                5 => "prose-h5",
                _ => "prose-h6",
            },
            Block::Paragraph { .. } => "prose-body",
            Block::List { ordered: true, .. } => "prose-list-ordered",
            Block::List { ordered: false, .. } => "prose-list-unordered",
            Block::Blockquote { .. } => "prose-quote",
            Block::CodeBlock { .. } => "prose-code",
            Block::Image { .. } => "prose-figure",
            Block::Table { .. } => "prose-table",
            Block::Rule => "prose-rule",
        }
    }
}

/// A fully rendered document body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Top-level blocks in source order.
    pub blocks: Vec<Block>,
    /// Whitespace-separated word count of the raw body.
    pub word_count: usize,
    /// Estimated reading time in minutes, never zero.
    pub reading_minutes: u32,
}

/// One heading in a document outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineEntry {
    pub level: u8,
    pub id: String,
    pub text: String,
}

impl Document {
    /// Whether rendering produced no blocks at all.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Collect every heading, in source order, for in-page navigation.
    pub fn outline(&self) -> Vec<OutlineEntry> {
        let mut entries = Vec::new();
        collect_outline(&self.blocks, &mut entries);
        entries
    }
}

fn collect_outline(blocks: &[Block], entries: &mut Vec<OutlineEntry>) {
    for block in blocks {
        match block {
            Block::Heading { level, id, content } => entries.push(OutlineEntry {
                level: *level,
                id: id.clone(),
                text: inline_text(content),
            }),
            Block::Blockquote { blocks } => collect_outline(blocks, entries),
            Block::List { items, .. } => {
                for item in items {
                    collect_outline(item, entries);
                }
            }
            _ => {}
        }
    }
}

/// Rendering configuration.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Base path prepended to relative image references. `None` leaves
    /// them untouched.
    pub asset_base: Option<String>,
}

impl RenderOptions {
    /// Options with no asset rewriting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the asset base for relative image references.
    pub fn with_asset_base(mut self, base: impl Into<String>) -> Self {
        self.asset_base = Some(base.into());
        self
    }
}

/// Rewrite a relative asset reference under a base path.
///
/// References starting with `http` or `/` are already resolvable and are
/// returned unchanged, as is everything when no base is configured.
///
/// ```rust
/// use vitryn_content::markdown::rewrite_asset_url;
///
/// assert_eq!(
///     rewrite_asset_url("hero.png", Some("/assets/blog")),
///     "/assets/blog/hero.png"
/// );
/// assert_eq!(
///     rewrite_asset_url("https://cdn.example.com/x.png", Some("/assets/blog")),
///     "https://cdn.example.com/x.png"
/// );
/// ```
pub fn rewrite_asset_url(href: &str, asset_base: Option<&str>) -> String {
    match asset_base {
        Some(base) if !href.starts_with("http") && !href.starts_with('/') => {
            format!("{base}/{href}")
        }
        _ => href.to_string(),
    }
}

/// Count whitespace-separated words in raw text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated reading time in whole minutes, never less than one.
pub fn reading_time_minutes(text: &str) -> u32 {
    minutes_for_words(word_count(text))
}

fn minutes_for_words(words: usize) -> u32 {
    words.div_ceil(READING_WORDS_PER_MINUTE).max(1) as u32
}

/// Render a markdown body into a block tree.
pub fn render_blocks(markdown: &str, options: &RenderOptions) -> Vec<Block> {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES);
    let mut builder = TreeBuilder::new(options);
    for event in parser {
        builder.handle(event);
    }
    builder.finish()
}

/// Render a full document: split off frontmatter, render the body, and
/// attach word-count and reading-time estimates.
///
/// Frontmatter metadata is discarded here; ingestion reads it through
/// [`crate::normalize`]. Passing a body whose frontmatter was already
/// stripped is fine, the split is then a no-op.
pub fn render_document(markdown: &str, options: &RenderOptions) -> Document {
    let body = split_frontmatter(markdown).body();
    let words = word_count(body);
    Document {
        blocks: render_blocks(body, options),
        word_count: words,
        reading_minutes: minutes_for_words(words),
    }
}

/// Plain text of an inline run, formatting stripped.
pub fn inline_text(content: &[Inline]) -> String {
    let mut text = String::new();
    push_inline_text(content, &mut text);
    text
}

fn push_inline_text(content: &[Inline], out: &mut String) {
    for inline in content {
        match inline {
            Inline::Text(text) | Inline::Code(text) => out.push_str(text),
            Inline::Strong(children) | Inline::Emphasis(children) => {
                push_inline_text(children, out);
            }
            Inline::Link { children, .. } => push_inline_text(children, out),
            Inline::Image { alt, .. } => out.push_str(alt),
        }
    }
}

/// Extract the first non-empty paragraph as plain text, truncated at a
/// word boundary with a trailing ellipsis when over `max_chars`.
///
/// Headings are skipped, so a document that opens with a title still
/// yields its first real paragraph. Returns `None` when the document has
/// no paragraph content.
pub fn first_paragraph(markdown: &str, max_chars: usize) -> Option<String> {
    let parser = Parser::new(markdown);
    let mut in_heading = false;
    let mut in_paragraph = false;
    let mut text = String::new();

    for event in parser {
        match event {
            Event::Start(Tag::Heading { .. }) => in_heading = true,
            Event::End(TagEnd::Heading(_)) => in_heading = false,
            Event::Start(Tag::Paragraph) if !in_heading => {
                in_paragraph = true;
                text.clear();
            }
            Event::End(TagEnd::Paragraph) if in_paragraph => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    return Some(truncate_at_word(trimmed, max_chars));
                }
                in_paragraph = false;
            }
            Event::Text(t) | Event::Code(t) if in_paragraph => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak if in_paragraph => text.push(' '),
            _ => {}
        }
    }

    None
}

/// Truncate to at most `max_chars` characters, cutting at the last word
/// boundary and appending an ellipsis.
fn truncate_at_word(text: &str, max_chars: usize) -> String {
    let Some((end, _)) = text.char_indices().nth(max_chars) else {
        return text.to_string();
    };
    let cut = text[..end].rfind(char::is_whitespace).unwrap_or(end);
    format!("{}...", text[..cut].trim_end())
}

// ============================================================================
// Event-stream folding
// ============================================================================

/// Container blocks that are open while their children stream in.
enum Container {
    Blockquote { blocks: Vec<Block> },
    List { ordered: bool, items: Vec<Vec<Block>> },
    Item { blocks: Vec<Block> },
    Table { headers: Vec<Vec<Inline>>, rows: Vec<Vec<Vec<Inline>>> },
    TableHead { cells: Vec<Vec<Inline>> },
    TableRow { cells: Vec<Vec<Inline>> },
}

/// Leaf block currently accumulating content.
enum Leaf {
    Heading { level: u8, content: Vec<Inline> },
    Paragraph { content: Vec<Inline> },
    CodeBlock { language: Option<String>, code: String },
    TableCell { content: Vec<Inline> },
}

/// Inline span currently accumulating children.
enum Span {
    Strong {
        children: Vec<Inline>,
    },
    Emphasis {
        children: Vec<Inline>,
    },
    Link {
        href: String,
        title: Option<String>,
        children: Vec<Inline>,
    },
    Image {
        src: String,
        title: Option<String>,
        children: Vec<Inline>,
    },
}

impl Span {
    fn children_mut(&mut self) -> &mut Vec<Inline> {
        match self {
            Span::Strong { children }
            | Span::Emphasis { children }
            | Span::Link { children, .. }
            | Span::Image { children, .. } => children,
        }
    }
}

struct TreeBuilder<'a> {
    options: &'a RenderOptions,
    blocks: Vec<Block>,
    containers: Vec<Container>,
    leaf: Option<Leaf>,
    spans: Vec<Span>,
}

impl<'a> TreeBuilder<'a> {
    fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            blocks: Vec::new(),
            containers: Vec::new(),
            leaf: None,
            spans: Vec::new(),
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.push_inline(Inline::Code(code.to_string())),
            Event::SoftBreak | Event::HardBreak => self.push_inline(Inline::Text(" ".to_string())),
            Event::Rule => {
                self.close_leaf();
                self.push_block(Block::Rule);
            }
            // Raw HTML, footnotes, and math are outside the supported
            // markdown surface and are dropped.
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                self.close_leaf();
                self.leaf = Some(Leaf::Paragraph {
                    content: Vec::new(),
                });
            }
            Tag::Heading { level, .. } => {
                self.close_leaf();
                self.leaf = Some(Leaf::Heading {
                    level: level as u8,
                    content: Vec::new(),
                });
            }
            Tag::BlockQuote(_) => {
                self.close_leaf();
                self.containers.push(Container::Blockquote {
                    blocks: Vec::new(),
                });
            }
            Tag::CodeBlock(kind) => {
                self.close_leaf();
                let language = match kind {
                    CodeBlockKind::Fenced(info) => {
                        let lang = info.split_whitespace().next().unwrap_or_default();
                        (!lang.is_empty()).then(|| lang.to_string())
                    }
                    CodeBlockKind::Indented => None,
                };
                self.leaf = Some(Leaf::CodeBlock {
                    language,
                    code: String::new(),
                });
            }
            Tag::List(start) => {
                self.close_leaf();
                self.containers.push(Container::List {
                    ordered: start.is_some(),
                    items: Vec::new(),
                });
            }
            Tag::Item => {
                self.close_leaf();
                self.containers.push(Container::Item { blocks: Vec::new() });
            }
            Tag::Table(_) => {
                self.close_leaf();
                self.containers.push(Container::Table {
                    headers: Vec::new(),
                    rows: Vec::new(),
                });
            }
            Tag::TableHead => self.containers.push(Container::TableHead { cells: Vec::new() }),
            Tag::TableRow => self.containers.push(Container::TableRow { cells: Vec::new() }),
            Tag::TableCell => {
                self.leaf = Some(Leaf::TableCell {
                    content: Vec::new(),
                });
            }
            Tag::Emphasis => self.spans.push(Span::Emphasis {
                children: Vec::new(),
            }),
            Tag::Strong => self.spans.push(Span::Strong {
                children: Vec::new(),
            }),
            Tag::Link {
                dest_url, title, ..
            } => self.spans.push(Span::Link {
                href: dest_url.to_string(),
                title: (!title.is_empty()).then(|| title.to_string()),
                children: Vec::new(),
            }),
            Tag::Image {
                dest_url, title, ..
            } => self.spans.push(Span::Image {
                src: rewrite_asset_url(&dest_url, self.options.asset_base.as_deref()),
                title: (!title.is_empty()).then(|| title.to_string()),
                children: Vec::new(),
            }),
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::CodeBlock | TagEnd::TableCell => {
                self.close_leaf();
            }
            TagEnd::BlockQuote(_) => {
                self.close_leaf();
                if let Some(Container::Blockquote { blocks }) = self.containers.pop() {
                    self.push_block(Block::Blockquote { blocks });
                }
            }
            TagEnd::List(_) => {
                self.close_leaf();
                if let Some(Container::List { ordered, items }) = self.containers.pop() {
                    self.push_block(Block::List { ordered, items });
                }
            }
            TagEnd::Item => {
                self.close_leaf();
                if let Some(Container::Item { blocks }) = self.containers.pop() {
                    self.attach_item(blocks);
                }
            }
            TagEnd::Table => {
                self.close_leaf();
                if let Some(Container::Table { headers, rows }) = self.containers.pop() {
                    self.push_block(Block::Table { headers, rows });
                }
            }
            TagEnd::TableHead => {
                self.close_leaf();
                if let Some(Container::TableHead { cells }) = self.containers.pop() {
                    if let Some(Container::Table { headers, .. }) = self.containers.last_mut() {
                        *headers = cells;
                    }
                }
            }
            TagEnd::TableRow => {
                self.close_leaf();
                if let Some(Container::TableRow { cells }) = self.containers.pop() {
                    if let Some(Container::Table { rows, .. }) = self.containers.last_mut() {
                        rows.push(cells);
                    }
                }
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Link | TagEnd::Image => self.close_span(),
            _ => self.close_leaf(),
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(Leaf::CodeBlock { code, .. }) = &mut self.leaf {
            code.push_str(text);
            return;
        }
        self.push_inline(Inline::Text(text.to_string()));
    }

    fn push_inline(&mut self, inline: Inline) {
        if let Some(span) = self.spans.last_mut() {
            append_inline(span.children_mut(), inline);
            return;
        }
        match &mut self.leaf {
            Some(Leaf::Heading { content, .. })
            | Some(Leaf::Paragraph { content })
            | Some(Leaf::TableCell { content }) => append_inline(content, inline),
            Some(Leaf::CodeBlock { code, .. }) => {
                if let Inline::Text(text) | Inline::Code(text) = inline {
                    code.push_str(&text);
                }
            }
            // Tight list items carry bare inline content with no
            // paragraph tags around it; open one implicitly.
            None => {
                self.leaf = Some(Leaf::Paragraph {
                    content: vec![inline],
                });
            }
        }
    }

    fn push_block(&mut self, block: Block) {
        for frame in self.containers.iter_mut().rev() {
            match frame {
                Container::Blockquote { blocks } | Container::Item { blocks } => {
                    blocks.push(block);
                    return;
                }
                _ => {}
            }
        }
        self.blocks.push(block);
    }

    fn attach_item(&mut self, blocks: Vec<Block>) {
        if let Some(Container::List { items, .. }) = self.containers.last_mut() {
            items.push(blocks);
        } else {
            for block in blocks {
                self.push_block(block);
            }
        }
    }

    fn close_leaf(&mut self) {
        let Some(leaf) = self.leaf.take() else {
            return;
        };
        match leaf {
            Leaf::Heading { level, content } => {
                let id = slugify(&inline_text(&content));
                self.push_block(Block::Heading { level, id, content });
            }
            Leaf::Paragraph { mut content } => {
                // A paragraph that is exactly one image becomes a figure.
                if matches!(content.as_slice(), [Inline::Image { .. }]) {
                    if let Some(Inline::Image { src, alt, title }) = content.pop() {
                        self.push_block(Block::Image { src, alt, title });
                        return;
                    }
                }
                self.push_block(Block::Paragraph { content });
            }
            Leaf::CodeBlock { language, mut code } => {
                if code.ends_with('\n') {
                    code.pop();
                }
                self.push_block(Block::CodeBlock { language, code });
            }
            Leaf::TableCell { content } => {
                let mut content = Some(content);
                for frame in self.containers.iter_mut().rev() {
                    match frame {
                        Container::TableHead { cells } | Container::TableRow { cells } => {
                            if let Some(cell) = content.take() {
                                cells.push(cell);
                            }
                            break;
                        }
                        _ => {}
                    }
                }
                // A cell with no surrounding row only happens in a
                // degenerate stream; keep its content as a paragraph.
                if let Some(content) = content {
                    self.push_block(Block::Paragraph { content });
                }
            }
        }
    }

    fn close_span(&mut self) {
        let Some(span) = self.spans.pop() else {
            return;
        };
        let inline = match span {
            Span::Strong { children } => Inline::Strong(children),
            Span::Emphasis { children } => Inline::Emphasis(children),
            Span::Link {
                href,
                title,
                children,
            } => Inline::Link {
                href,
                title,
                children,
            },
            Span::Image {
                src,
                title,
                children,
            } => Inline::Image {
                src,
                alt: inline_text(&children),
                title,
            },
        };
        self.push_inline(inline);
    }

    /// Flush whatever is still open. Balanced event streams leave nothing
    /// behind; truncated input gets its partial structures emitted rather
    /// than dropped.
    fn finish(mut self) -> Vec<Block> {
        while !self.spans.is_empty() {
            self.close_span();
        }
        self.close_leaf();
        while let Some(frame) = self.containers.pop() {
            match frame {
                Container::Blockquote { blocks } => self.push_block(Block::Blockquote { blocks }),
                Container::List { ordered, items } => {
                    self.push_block(Block::List { ordered, items });
                }
                Container::Item { blocks } => self.attach_item(blocks),
                Container::Table { headers, rows } => {
                    self.push_block(Block::Table { headers, rows });
                }
                Container::TableHead { .. } | Container::TableRow { .. } => {}
            }
        }
        self.blocks
    }
}

fn append_inline(target: &mut Vec<Inline>, inline: Inline) {
    // Merge adjacent text runs so soft breaks don't fragment content.
    if let (Some(Inline::Text(last)), Inline::Text(text)) = (target.last_mut(), &inline) {
        last.push_str(text);
        return;
    }
    target.push(inline);
}

// ============================================================================
// Tests
// ============================================================================
