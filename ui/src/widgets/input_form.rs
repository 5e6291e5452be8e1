//! Text/URL input and the generate button.

use egui::{Button, Key, TextEdit, Ui};
use qrstudio_business::Status;

use crate::state::State;

pub fn input_form(state: &mut State, ui: &mut Ui) {
    let analyzing = state.session.status() == Status::Analyzing;

    ui.label("Text or URL");
    let response = ui.add_enabled(
        !analyzing,
        TextEdit::multiline(state.session.input_mut())
            .hint_text("https://example.com")
            .desired_rows(3)
            .desired_width(f32::INFINITY),
    );

    // Ctrl/Cmd+Enter submits from the text box.
    let shortcut = response.has_focus()
        && ui.input(|i| i.key_pressed(Key::Enter) && i.modifiers.command_only());

    ui.add_space(8.0);
    let text = if analyzing {
        "Analyzing..."
    } else {
        "Generate QR code"
    };
    let clicked = ui.add_enabled(!analyzing, Button::new(text)).clicked();

    if clicked || shortcut {
        state.submit();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use egui_kittest::Harness;
    use kittest::Queryable;
    use qrstudio_clipboard::MemoryClipboard;

    use crate::state::State;

    #[tokio::test]
    async fn test_empty_submit_raises_notice() {
        let dir = tempfile::tempdir().expect("temp dir");
        let state = State::test(
            "http://127.0.0.1:9".to_owned(),
            dir.path().to_path_buf(),
            Arc::new(MemoryClipboard::new()),
        );
        let mut harness = Harness::new_ui_state(
            |ui, state| {
                super::input_form(state, ui);
            },
            state,
        );
        harness.step();

        if let Some(button) = harness.query_by_label("Generate QR code") {
            button.click();
        }
        harness.step();

        assert_eq!(
            harness.state().notice.as_deref(),
            Some("Please enter some text or a URL.")
        );
        assert!(!harness.state().runner.is_busy());
    }
}
