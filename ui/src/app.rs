use std::time::Duration;

use qrstudio_business::Status;

use crate::{state::State, widgets};

/// How often to check for a finished analysis while one is running.
const ANALYSIS_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct QrStudioApp {
    state: State,
}

impl QrStudioApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for QrStudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();
        let status = self.state.session.status();
        if status == Status::Analyzing {
            ctx.request_repaint_after(ANALYSIS_POLL_INTERVAL);
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("QR Studio");
                ui.weak("Styled QR codes from any text or link");
            });
        });

        egui::SidePanel::left("controls")
            .resizable(false)
            .default_width(300.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                widgets::input_form(&mut self.state, ui);
                if status == Status::Ready {
                    ui.separator();
                    widgets::customization(&mut self.state, ui);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::preview(&mut self.state, ui);
        });

        widgets::notice(&mut self.state, ctx);
    }
}
