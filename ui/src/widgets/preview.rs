//! Right-hand pane: what the session currently has to show.

use egui::{Align, Image, Layout, RichText, Ui, vec2};
use qrstudio_business::{PREVIEW_SIZE_PX, SessionStatus};

use crate::state::{State, StatusKind};
use crate::utils::colors::{COLOR_GREEN, COLOR_RED};

pub fn preview(state: &mut State, ui: &mut Ui) {
    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        ui.add_space(16.0);
        match state.session.session_status().clone() {
            SessionStatus::Idle => show_idle(state, ui),
            SessionStatus::Analyzing { text, .. } => show_analyzing(ui, &text),
            SessionStatus::Error { message } => show_error(state, ui, &message),
            SessionStatus::Ready => show_ready(state, ui),
        }
        show_status_line(state, ui);
    });
}

fn show_idle(state: &State, ui: &mut Ui) {
    ui.heading("Your QR code will appear here");
    ui.add_space(8.0);
    ui.label(&state.session.settings().description);
}

fn show_analyzing(ui: &mut Ui, text: &str) {
    ui.spinner();
    ui.label("Analyzing content...");
    ui.weak(text);
}

fn show_error(state: &mut State, ui: &mut Ui, message: &str) {
    ui.label(RichText::new("Analysis failed").size(20.0).color(COLOR_RED));
    ui.add_space(4.0);
    ui.label(message);
    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.button("Continue anyway").clicked() {
            state.continue_anyway();
        }
        if ui.button("Start over").clicked() {
            state.reset();
        }
    });
}

fn show_ready(state: &mut State, ui: &mut Ui) {
    let settings = state.session.settings().clone();

    if settings.url.is_empty() {
        ui.heading("Nothing to encode yet");
        ui.label("Enter some text or a URL and generate a code.");
        return;
    }

    let side = PREVIEW_SIZE_PX as f32;
    match state.preview.get(ui.ctx(), &settings) {
        Ok(texture) => {
            ui.add(Image::new(texture).fit_to_exact_size(vec2(side, side)));
        }
        Err(e) => {
            ui.colored_label(COLOR_RED, format!("Could not draw the QR code: {e}"));
        }
    }

    ui.add_space(8.0);
    ui.heading(&settings.label);
    ui.label(&settings.description);
    ui.add_space(12.0);

    ui.horizontal(|ui| {
        if ui.button("Download PNG").clicked() {
            state.download();
        }
        if ui.button("Copy image").clicked() {
            state.copy_image();
        }
        if ui.button("Start over").clicked() {
            state.reset();
        }
    });
}

fn show_status_line(state: &State, ui: &mut Ui) {
    if let Some(line) = &state.status_line {
        let color = match line.kind {
            StatusKind::Info => COLOR_GREEN,
            StatusKind::Error => COLOR_RED,
        };
        ui.add_space(8.0);
        ui.colored_label(color, &line.text);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use egui_kittest::Harness;
    use kittest::Queryable;
    use qrstudio_clipboard::MemoryClipboard;

    use crate::state::State;

    fn test_state(dir: &tempfile::TempDir) -> State {
        State::test(
            "http://127.0.0.1:9".to_owned(),
            dir.path().to_path_buf(),
            Arc::new(MemoryClipboard::new()),
        )
    }

    #[tokio::test]
    async fn test_idle_shows_placeholder() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut harness = Harness::new_ui_state(
            |ui, state| {
                super::preview(state, ui);
            },
            test_state(&dir),
        );
        harness.step();

        assert!(
            harness
                .query_by_label_contains("Your QR code will appear here")
                .is_some(),
            "Idle placeholder should be displayed"
        );
    }
}
