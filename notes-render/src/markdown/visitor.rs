//! Event walker: pulldown-cmark events in, draw calls out.

use pulldown_cmark::{Event, HeadingLevel, Tag, TagEnd};

use crate::capabilities::RenderCapabilities;
use crate::font_matrix::FontMatrix;
use crate::markdown::directive::{DivTag, div_tags};
use crate::style::{ListState, RenderState};
use crate::surface::{DrawSurface, RunStyle};
use crate::theme::Theme;

/// What an "enter" event changed, so the matching "exit" can undo it.
#[derive(Debug)]
enum Scope {
    Paragraph,
    Heading { prev_level: u8 },
    BlockQuote,
    CodeBlock { prev: bool },
    List,
    Item,
    Table,
    TableHead { prev: bool },
    TableRow,
    TableCell,
    Emphasis { prev: bool },
    Strong { prev: bool },
    Strikethrough { prev: bool },
    Link { prev: Option<String> },
    Image,
    HtmlBlock,
    Other,
}

/// An open markdown node and how many directives were open when it started.
#[derive(Debug)]
struct Frame {
    scope: Scope,
    directive_mark: usize,
}

/// An open `<div class="...">` block.
#[derive(Debug)]
struct DirectiveScope {
    tag: String,
    /// Depth of the markdown block the directive was opened in.
    owner: usize,
    pushed_color: bool,
    prev_border: Option<bool>,
    prev_level: Option<u8>,
}

/// Result of a finished walk.
#[derive(Debug)]
pub(crate) struct Pass {
    pub state: RenderState,
    pub activated: Vec<String>,
}

pub(crate) struct Visitor<'a, F, C, S> {
    matrix: &'a FontMatrix<F>,
    capabilities: &'a C,
    surface: &'a mut S,
    state: RenderState,
    scopes: Vec<Frame>,
    directives: Vec<DirectiveScope>,
    /// Whether something has been drawn on the current line.
    line_open: bool,
    activated: Vec<String>,
}

impl<'a, F, C, S> Visitor<'a, F, C, S>
where
    C: RenderCapabilities,
    S: DrawSurface<F>,
{
    pub fn new(matrix: &'a FontMatrix<F>, capabilities: &'a C, surface: &'a mut S) -> Self {
        Self {
            matrix,
            capabilities,
            surface,
            state: RenderState::default(),
            scopes: Vec::new(),
            directives: Vec::new(),
            line_open: false,
            activated: Vec::new(),
        }
    }

    pub fn walk<'e>(&mut self, events: impl IntoIterator<Item = Event<'e>>) {
        for event in events {
            match event {
                Event::Start(tag) => {
                    let directive_mark = self.directives.len();
                    let scope = self.enter(tag);
                    self.scopes.push(Frame { scope, directive_mark });
                }
                Event::End(tag) => self.end(tag),
                Event::Text(text) => self.text(&text),
                Event::Code(code) => self.inline_code(&code),
                Event::InlineMath(math) | Event::DisplayMath(math) => self.inline_code(&math),
                Event::Html(html) | Event::InlineHtml(html) => self.html(&html),
                Event::FootnoteReference(label) => self.run(&format!("[{label}]")),
                Event::SoftBreak => self.run(" "),
                Event::HardBreak => self.hard_break(),
                Event::Rule => {
                    self.end_line();
                    self.surface.separator();
                }
                Event::TaskListMarker(checked) => self.run(if checked { "[x] " } else { "[ ] " }),
            }
        }
    }

    /// Close anything left open and hand back the final state.
    pub fn finish(mut self) -> Pass {
        while let Some(frame) = self.scopes.pop() {
            self.exit_frame(frame);
        }
        while self.pop_directive() {}
        Pass {
            state: self.state,
            activated: self.activated,
        }
    }

    fn enter(&mut self, tag: Tag<'_>) -> Scope {
        match tag {
            Tag::Paragraph => Scope::Paragraph,
            Tag::Heading { level, .. } => {
                self.end_line();
                let prev_level = self.state.heading_level;
                self.state.heading_level = match level {
                    HeadingLevel::H1 => 1,
                    HeadingLevel::H2 => 2,
                    HeadingLevel::H3 => 3,
                    HeadingLevel::H4 => 4,
                    HeadingLevel::H5 => 5,
                    HeadingLevel::H6 => 6,
                };
                let font = self.capabilities.resolve_font(self.matrix, &self.state);
                self.surface.push_font(font);
                Scope::Heading { prev_level }
            }
            Tag::BlockQuote(_) => {
                self.end_line();
                self.state.quote_depth += 1;
                self.surface.indent();
                self.surface.push_text_color(Theme::QUOTE);
                Scope::BlockQuote
            }
            Tag::CodeBlock(_) => {
                self.end_line();
                let prev = std::mem::replace(&mut self.state.in_code_block, true);
                Scope::CodeBlock { prev }
            }
            Tag::List(start) => {
                self.end_line();
                self.state.lists.push(ListState { next_number: start });
                self.surface.indent();
                Scope::List
            }
            Tag::Item => {
                self.end_line();
                let marker = match self.state.lists.last_mut() {
                    Some(ListState { next_number: Some(n) }) => {
                        let marker = format!("{n}. ");
                        *n += 1;
                        marker
                    }
                    _ => "\u{2022} ".to_string(),
                };
                self.run(&marker);
                Scope::Item
            }
            Tag::Table(alignments) => {
                self.end_line();
                self.surface.begin_table(alignments.len(), self.state.table_border);
                Scope::Table
            }
            Tag::TableHead => {
                let prev = std::mem::replace(&mut self.state.table_header, true);
                self.surface.next_row();
                Scope::TableHead { prev }
            }
            Tag::TableRow => {
                self.surface.next_row();
                Scope::TableRow
            }
            Tag::TableCell => {
                self.surface.next_cell();
                Scope::TableCell
            }
            Tag::Emphasis => Scope::Emphasis {
                prev: std::mem::replace(&mut self.state.italic, true),
            },
            Tag::Strong => Scope::Strong {
                prev: std::mem::replace(&mut self.state.bold, true),
            },
            Tag::Strikethrough => Scope::Strikethrough {
                prev: std::mem::replace(&mut self.state.strikethrough, true),
            },
            Tag::Link { dest_url, .. } => Scope::Link {
                prev: self.state.link.replace(dest_url.into_string()),
            },
            Tag::Image { dest_url, title, .. } => {
                if self.state.image_depth == 0 {
                    self.image(&dest_url, &title);
                }
                self.state.image_depth += 1;
                Scope::Image
            }
            Tag::HtmlBlock => Scope::HtmlBlock,
            _ => Scope::Other,
        }
    }

    fn end(&mut self, _tag: TagEnd) {
        if let Some(frame) = self.scopes.pop() {
            self.exit_frame(frame);
        }
    }

    /// Directives opened inside a node close with it, innermost first.
    /// Raw HTML blocks hand their directives to the enclosing node.
    fn exit_frame(&mut self, frame: Frame) {
        if !matches!(frame.scope, Scope::HtmlBlock) {
            while self.directives.len() > frame.directive_mark {
                self.pop_directive();
            }
        }
        self.exit(frame.scope);
    }

    /// Depth of the markdown block that owns directives opened right now.
    fn block_depth(&self) -> usize {
        match self.scopes.last() {
            Some(Frame {
                scope: Scope::HtmlBlock,
                ..
            }) => self.scopes.len() - 1,
            _ => self.scopes.len(),
        }
    }

    fn exit(&mut self, scope: Scope) {
        match scope {
            Scope::Paragraph => {
                self.end_line();
                if self.state.lists.is_empty() {
                    self.surface.spacing();
                }
            }
            Scope::Heading { prev_level } => {
                self.surface.pop_font();
                self.end_line();
                if matches!(self.state.heading_level, 1 | 2) {
                    self.surface.separator();
                }
                self.state.heading_level = prev_level;
            }
            Scope::BlockQuote => {
                self.end_line();
                self.surface.pop_text_color();
                self.surface.unindent();
                self.state.quote_depth -= 1;
            }
            Scope::CodeBlock { prev } => {
                self.end_line();
                self.state.in_code_block = prev;
                self.surface.spacing();
            }
            Scope::List => {
                self.end_line();
                self.state.lists.pop();
                self.surface.unindent();
                if self.state.lists.is_empty() {
                    self.surface.spacing();
                }
            }
            Scope::Item => self.end_line(),
            Scope::Table => {
                self.surface.end_table();
                self.line_open = false;
                self.surface.spacing();
            }
            Scope::TableHead { prev } => self.state.table_header = prev,
            Scope::TableRow | Scope::TableCell | Scope::HtmlBlock | Scope::Other => {}
            Scope::Emphasis { prev } => self.state.italic = prev,
            Scope::Strong { prev } => self.state.bold = prev,
            Scope::Strikethrough { prev } => self.state.strikethrough = prev,
            Scope::Link { prev } => self.state.link = prev,
            Scope::Image => self.state.image_depth -= 1,
        }
    }

    fn text(&mut self, text: &str) {
        if self.state.image_depth > 0 {
            return;
        }
        if !self.state.in_code_block {
            self.run(text);
            return;
        }

        for line in text.split_inclusive('\n') {
            let content = line.strip_suffix('\n').unwrap_or(line);
            // Keep blank code lines at full height.
            let content = if content.is_empty() { " " } else { content };
            self.surface.push_text_color(Theme::CODE);
            self.run(content);
            self.surface.pop_text_color();
            if line.ends_with('\n') {
                self.end_line();
            }
        }
    }

    fn inline_code(&mut self, code: &str) {
        if self.state.image_depth > 0 {
            return;
        }
        self.surface.push_text_color(Theme::CODE);
        self.run(code);
        self.surface.pop_text_color();
    }

    /// Draw one text run with its own resolved font.
    fn run(&mut self, text: &str) {
        if self.state.image_depth > 0 {
            return;
        }

        let font = self.capabilities.resolve_font(self.matrix, &self.state);
        self.surface.push_font(font);

        let style = RunStyle {
            underline: self.state.link.is_some(),
            strikethrough: self.state.strikethrough,
        };
        match self.state.link.as_deref() {
            Some(href) => {
                self.surface.push_text_color(Theme::LINK);
                self.surface.text(text, style);
                self.surface.pop_text_color();
                if self.surface.clickable(href) {
                    self.activated.push(href.to_string());
                }
            }
            None => self.surface.text(text, style),
        }

        self.surface.pop_font();
        self.line_open = true;
    }

    fn image(&mut self, href: &str, title: &str) {
        let Some(info) = self.capabilities.resolve_image(href) else {
            tracing::trace!(%href, "image not resolved, skipping");
            return;
        };

        self.surface.image(&info);
        if !title.is_empty() {
            self.surface.tooltip(title);
        }
        if let Some(link) = self.state.link.as_deref() {
            if self.surface.clickable(link) {
                self.activated.push(link.to_string());
            }
        }
        self.line_open = true;
    }

    fn html(&mut self, html: &str) {
        for tag in div_tags(html) {
            match tag {
                DivTag::Open(class) => self.open_directive(class),
                DivTag::Close => self.close_directive(),
            }
        }
    }

    fn open_directive(&mut self, tag: &str) {
        let mut scope = DirectiveScope {
            tag: tag.to_string(),
            owner: self.block_depth(),
            pushed_color: false,
            prev_border: None,
            prev_level: None,
        };

        match self.capabilities.directive(tag) {
            Some(style) => {
                if let Some(color) = style.text_color {
                    self.surface.push_text_color(color);
                    scope.pushed_color = true;
                }
                if let Some(border) = style.table_border {
                    scope.prev_border = Some(std::mem::replace(&mut self.state.table_border, border));
                }
                if let Some(level) = style.heading_level {
                    scope.prev_level = Some(std::mem::replace(&mut self.state.heading_level, level));
                }
            }
            None => tracing::trace!(%tag, "unrecognized directive ignored"),
        }

        self.directives.push(scope);
    }

    /// Handle `</div>`. Only a directive opened in the current block can be closed.
    fn close_directive(&mut self) {
        let depth = self.block_depth();
        match self.directives.last().map(|open| open.owner == depth) {
            Some(true) => {
                self.pop_directive();
            }
            Some(false) => tracing::trace!(depth, "closing div outside the block that opened it, ignored"),
            None => tracing::trace!("closing div without an open directive"),
        }
    }

    /// Undo the innermost directive. Returns false when none is open.
    fn pop_directive(&mut self) -> bool {
        let Some(scope) = self.directives.pop() else {
            return false;
        };

        if let Some(level) = scope.prev_level {
            self.state.heading_level = level;
        }
        if let Some(border) = scope.prev_border {
            self.state.table_border = border;
        }
        if scope.pushed_color {
            self.surface.pop_text_color();
        }
        tracing::trace!(tag = %scope.tag, "directive closed");
        true
    }

    fn hard_break(&mut self) {
        self.surface.new_line();
        self.line_open = false;
    }

    /// Finish the current line if anything was drawn on it.
    fn end_line(&mut self) {
        if self.line_open {
            self.surface.new_line();
            self.line_open = false;
        }
    }
}
