use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use dskey_core::settings::Settings;
use dskey_core::transform::Transform;
use dskey_core::{DoubleStruck, Key, Keyboard, Layout, TextBuffer, TextDocument};

const OUTPUT_FILE: &str = "output.txt";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Pane {
    Input,
    Keyboard,
    Output,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusKind {
    Info,
    Error,
}

pub struct App {
    pub focused_pane: Pane,
    pub input: TextBuffer,
    pub keyboard: Keyboard,
    pub selected: (usize, usize),
    pub show_codepoints: bool,
    pub output_scroll: usize,
    pub status: String,
    pub status_kind: StatusKind,
    transform: DoubleStruck,
    output_path: PathBuf,
}

impl App {
    pub fn new() -> Self {
        match Settings::load_default() {
            Ok(settings) => Self::with_settings(&settings, "Ready".to_string()),
            Err(err) => {
                let mut app = Self::with_settings(&Settings::new(), String::new());
                app.set_error(format!("Settings ignored: {}", err));
                app
            }
        }
    }

    pub fn with_settings(settings: &Settings, status: String) -> Self {
        let output_path = Settings::default_path()
            .and_then(|p| p.parent().map(|dir| dir.join(OUTPUT_FILE)))
            .unwrap_or_else(|| PathBuf::from(OUTPUT_FILE));

        Self {
            focused_pane: Pane::Input,
            input: TextBuffer::new(),
            keyboard: Keyboard::with_transform(settings.keyboard_context(), settings.transform()),
            selected: (0, 0),
            show_codepoints: settings.codepoints(),
            output_scroll: 0,
            status,
            status_kind: StatusKind::Info,
            transform: settings.transform(),
            output_path,
        }
    }

    /// Double-struck rendering of the input.
    ///
    /// Keyboard presses insert already-mapped text; mapping it again is a no-op.
    pub fn output(&self) -> String {
        self.transform.apply(self.input.text())
    }

    pub fn graphemes(&self) -> bool {
        self.transform.graphemes()
    }

    pub fn set_status<S: Into<String>>(&mut self, msg: S) {
        self.status = msg.into();
        self.status_kind = StatusKind::Info;
    }

    pub fn set_error<S: Into<String>>(&mut self, msg: S) {
        self.status = msg.into();
        self.status_kind = StatusKind::Error;
    }

    pub fn type_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.input.insert_text(ch.encode_utf8(&mut buf));
    }

    pub fn delete_char(&mut self) {
        self.input.delete_backward();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.output_scroll = 0;
        self.set_status("Cleared");
    }

    pub fn layout(&self) -> Layout {
        self.keyboard.layout()
    }

    pub fn selected_key(&self) -> Option<Key> {
        self.layout().get(self.selected.0, self.selected.1)
    }

    pub fn move_selection(&mut self, d_row: isize, d_col: isize) {
        let layout = self.layout();
        let rows = layout.rows();
        let row = (self.selected.0 as isize + d_row).clamp(0, rows.len() as isize - 1) as usize;
        let max_col = rows[row].len().saturating_sub(1) as isize;
        let col = (self.selected.1 as isize + d_col).clamp(0, max_col) as usize;
        self.selected = (row, col);
    }

    /// Press the highlighted on-screen key
    pub fn press_selected(&mut self) {
        let Some(key) = self.selected_key() else {
            return;
        };
        match self.keyboard.press(key, &mut self.input) {
            Ok(outcome) => self.set_status(format!("{} -> {:?}", key.label(false), outcome)),
            Err(err) => self.set_error(err.to_string()),
        }
        // Row lengths differ between pages
        self.move_selection(0, 0);
    }

    /// Scroll the output by `delta` lines, staying within its last line
    pub fn scroll_output(&mut self, delta: isize) {
        let max = self.output().split('\n').count().saturating_sub(1);
        let next = (self.output_scroll as isize + delta).clamp(0, max as isize);
        self.output_scroll = next as usize;
    }

    pub fn toggle_codepoints(&mut self) {
        self.show_codepoints = !self.show_codepoints;
        self.set_status(format!("codepoints = {}", self.show_codepoints));
    }

    pub fn toggle_graphemes(&mut self) {
        self.transform = DoubleStruck::with_graphemes(!self.transform.graphemes());
        self.set_status(format!("graphemes = {}", self.transform.graphemes()));
    }

    pub fn save_output(&mut self) {
        match write_output(&self.output_path, &self.output()) {
            Ok(()) => self.set_status(format!("Saved {}", self.output_path.display())),
            Err(err) => self.set_error(format!("Save error: {}", err)),
        }
    }

    pub fn cycle_pane_forward(&mut self) {
        self.focused_pane = match self.focused_pane {
            Pane::Input => Pane::Keyboard,
            Pane::Keyboard => Pane::Output,
            Pane::Output => Pane::Input,
        };
    }

    pub fn cycle_pane_backward(&mut self) {
        self.focused_pane = match self.focused_pane {
            Pane::Input => Pane::Output,
            Pane::Keyboard => Pane::Input,
            Pane::Output => Pane::Keyboard,
        };
    }
}

fn write_output(path: &Path, text: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let temp = path.with_extension("txt.tmp");
    fs::write(&temp, text)?;
    fs::rename(&temp, path)
}
