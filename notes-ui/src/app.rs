//! The notes window: an editor pane with one tab per note beside a live
//! markdown preview of the open note.

use notes_render::{FontMatrix, RenderCapabilities, markdown};

use crate::host::FrameHost;
use crate::notes::Notebook;

const SOURCE_PANE: &str = "source";
const PREVIEW_PANE: &str = "markdown";
const SOURCE_WIDTH: f32 = 0.5;

pub struct NotesApp<F, C> {
    notebook: Notebook,
    matrix: FontMatrix<F>,
    capabilities: C,
}

impl<F, C: RenderCapabilities> NotesApp<F, C> {
    pub fn new(notebook: Notebook, matrix: FontMatrix<F>, capabilities: C) -> Self {
        Self {
            notebook,
            matrix,
            capabilities,
        }
    }

    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }

    pub fn notebook_mut(&mut self) -> &mut Notebook {
        &mut self.notebook
    }

    pub fn capabilities(&self) -> &C {
        &self.capabilities
    }

    /// Draw one frame. Widget results are applied immediately, so an edit
    /// shows up in the preview of the same frame.
    pub fn frame<H: FrameHost<F>>(&mut self, host: &mut H) {
        host.begin_frame();

        if host.begin_pane(SOURCE_PANE, SOURCE_WIDTH) {
            self.source_pane(host);
        }
        host.end_pane();

        if host.begin_pane(PREVIEW_PANE, 0.0) {
            if let Some(note) = self.notebook.active() {
                markdown::render(&note.content, &self.matrix, &self.capabilities, host);
            }
        }
        host.end_pane();

        host.end_frame();
    }

    fn source_pane<H: FrameHost<F>>(&mut self, host: &mut H) {
        if self.notebook.is_empty() {
            if host.button("New") {
                self.notebook.new_note();
            }
            return;
        }

        if !host.begin_tab_bar("notes") {
            return;
        }
        for index in 0..self.notebook.len() {
            let label = self.notebook.notes()[index].filename.clone();
            if !host.tab_item(&label) {
                continue;
            }
            self.notebook.select(index);
            if let Some(note) = self.notebook.get_mut(index) {
                if host.text_editor(&format!("editor-{index}"), &mut note.content) {
                    tracing::trace!(index, len = note.content.len(), "note edited");
                }
            }
        }
        if host.trailing_tab_button("+") {
            self.notebook.new_note();
        }
        host.end_tab_bar();
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use notes_render::{FaceLoader, FontError, FontPaths, ImageRegistry, TypographyConfig};

    use super::*;
    use crate::capabilities::DesktopCapabilities;
    use crate::capabilities::tests::RecordingOpener;
    use crate::headless::{HeadlessHost, WidgetCall};

    struct LabelLoader;

    impl FaceLoader for LabelLoader {
        type Face = String;

        fn load_face(&mut self, path: &Path, size_px: f32) -> Result<String, FontError> {
            Ok(format!("{}@{size_px}", path.display()))
        }
    }

    type TestApp = NotesApp<String, DesktopCapabilities<RecordingOpener>>;

    fn app(notebook: Notebook) -> TestApp {
        let config = TypographyConfig::default();
        let matrix = FontMatrix::load(&config.size_table(), &FontPaths::default(), &mut LabelLoader)
            .expect("label loader never fails");
        let caps = DesktopCapabilities::with_opener(ImageRegistry::new(), RecordingOpener::default());
        NotesApp::new(notebook, matrix, caps)
    }

    fn texts(host: &HeadlessHost) -> Vec<String> {
        host.surface().text_runs().map(|run| run.text.clone()).collect()
    }

    #[test]
    fn test_empty_notebook_offers_new_button() {
        let mut app = app(Notebook::new());
        let mut host = HeadlessHost::new();

        app.frame(&mut host);
        assert!(host.widgets().contains(&WidgetCall::Button("New".into())));
        assert!(!host.widgets().iter().any(|w| matches!(w, WidgetCall::TabBar(_))));
        assert!(host.surface().calls().is_empty());

        host.press("New");
        app.frame(&mut host);
        assert_eq!(app.notebook().len(), 1);
        assert_eq!(app.notebook().notes()[0].filename, "1");
    }

    #[test]
    fn test_open_tab_selects_and_previews() {
        let mut book = Notebook::new();
        book.open_note("todo.md", "# Todo");
        let mut app = app(book);
        let mut host = HeadlessHost::new();

        app.frame(&mut host);
        assert_eq!(app.notebook().active_index(), Some(0));
        assert_eq!(texts(&host), vec!["Todo"]);
        assert!(host.widgets().contains(&WidgetCall::Editor("editor-0".into())));
    }

    #[test]
    fn test_typing_updates_preview_same_frame() {
        let mut book = Notebook::new();
        book.new_note();
        let mut app = app(book);
        let mut host = HeadlessHost::new();

        host.type_text("**hi**");
        app.frame(&mut host);
        assert_eq!(app.notebook().notes()[0].content, "**hi**");
        assert_eq!(texts(&host), vec!["hi"]);
    }

    #[test]
    fn test_plus_tab_adds_note() {
        let mut book = Notebook::new();
        book.new_note();
        let mut app = app(book);
        let mut host = HeadlessHost::new();

        host.press("+");
        app.frame(&mut host);
        let labels: Vec<_> = app.notebook().notes().iter().map(|n| n.filename.clone()).collect();
        assert_eq!(labels, vec!["1", "2"]);
    }

    #[test]
    fn test_switching_tabs_changes_preview() {
        let mut book = Notebook::new();
        book.open_note("a.md", "first");
        book.open_note("b.md", "second");
        let mut app = app(book);
        let mut host = HeadlessHost::new();

        app.frame(&mut host);
        assert_eq!(texts(&host), vec!["first"]);

        host.select_tab("b.md");
        app.frame(&mut host);
        assert_eq!(app.notebook().active_index(), Some(1));
        assert_eq!(texts(&host), vec!["second"]);
    }

    #[test]
    fn test_clicked_link_is_opened() {
        let mut book = Notebook::new();
        book.open_note("links.md", "[site](https://example.com)");
        let mut app = app(book);
        let mut host = HeadlessHost::new();
        host.surface_mut().click("https://example.com");

        app.frame(&mut host);
        assert_eq!(
            *app.capabilities().opener().opened.borrow(),
            vec!["https://example.com".to_string()]
        );
    }
}
