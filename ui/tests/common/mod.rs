use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use egui_kittest::Harness;
use kittest::Queryable;
use qrstudio_business::Analyzer;
use qrstudio_clipboard::MemoryClipboard;
use qrstudio_ui::QrStudioApp;
use qrstudio_ui::state::State;
use qrstudio_ui::utils::save_target::DirectorySaveTarget;
use tempfile::TempDir;
use tokio::runtime::Handle;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_CONTENT_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

/// Frames to wait for an analysis before giving up.
const MAX_WAIT_FRAMES: usize = 100;

/// A `generateContent` reply whose model text is `text`.
pub fn gemini_reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] }
        }]
    }))
}

pub fn official_site_reply() -> ResponseTemplate {
    gemini_reply(
        r##"{"label":"Official Site","primaryColor":"#112233","secondaryColor":"#FFFFFF","description":"Scan to visit the official site."}"##,
    )
}

pub struct TestCtx<'a> {
    _mock_server: Option<MockServer>,
    save_dir: TempDir,
    clipboard: Arc<MemoryClipboard>,
    harness: Harness<'a, QrStudioApp>,
}

impl<'a> TestCtx<'a> {
    /// Full app against a mock Gemini endpoint answering with `reply`.
    pub async fn new_app(reply: ResponseTemplate) -> Self {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_CONTENT_PATH))
            .respond_with(reply)
            .mount(&mock_server)
            .await;

        let save_dir = tempfile::tempdir().expect("temp dir");
        let clipboard = Arc::new(MemoryClipboard::new());
        let state = State::test(
            mock_server.uri(),
            save_dir.path().to_path_buf(),
            clipboard.clone(),
        );

        Self::with_state(Some(mock_server), save_dir, clipboard, state)
    }

    /// Full app using `analyzer` instead of the HTTP one.
    #[allow(unused)]
    pub fn with_analyzer(analyzer: Arc<dyn Analyzer>) -> Self {
        let save_dir = tempfile::tempdir().expect("temp dir");
        let clipboard = Arc::new(MemoryClipboard::new());
        let state = State::new(
            analyzer,
            Handle::current(),
            clipboard.clone(),
            Box::new(DirectorySaveTarget::new(save_dir.path())),
        );

        Self::with_state(None, save_dir, clipboard, state)
    }

    fn with_state(
        mock_server: Option<MockServer>,
        save_dir: TempDir,
        clipboard: Arc<MemoryClipboard>,
        state: State,
    ) -> Self {
        let app = QrStudioApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            save_dir,
            clipboard,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, QrStudioApp> {
        &mut self.harness
    }

    pub fn state(&self) -> &State {
        self.harness.state().state()
    }

    pub fn state_mut(&mut self) -> &mut State {
        self.harness.state_mut().state_mut()
    }

    #[allow(unused)]
    pub fn save_dir(&self) -> &Path {
        self.save_dir.path()
    }

    #[allow(unused)]
    pub fn clipboard(&self) -> &MemoryClipboard {
        &self.clipboard
    }

    pub fn shows(&self, text: &str) -> bool {
        self.harness.query_by_label_contains(text).is_some()
    }

    /// Clicks the widget labelled exactly `label` and lets the UI settle.
    pub fn click(&mut self, label: &str) {
        self.harness.step();
        self.harness.get_by_label(label).click();
        self.harness.step();
        self.harness.step();
    }

    /// Types into the input and presses the generate button.
    pub fn submit(&mut self, input: &str) {
        self.state_mut().session.set_input(input);
        self.click("Generate QR code");
    }

    /// Steps frames, yielding to the runtime in between, until `done` holds.
    pub async fn wait_until(&mut self, done: impl Fn(&State) -> bool) -> bool {
        for _ in 0..MAX_WAIT_FRAMES {
            self.harness.step();
            if done(self.state()) {
                self.harness.step();
                return true;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        false
    }
}
