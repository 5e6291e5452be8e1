use egui::{Align2, Context, Window};

use crate::state::State;

/// Blocking message window, dismissed with OK.
pub fn notice(state: &mut State, ctx: &Context) {
    let Some(message) = state.notice.clone() else {
        return;
    };

    let mut dismissed = false;
    Window::new("Notice")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(message);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });

    if dismissed {
        state.dismiss_notice();
    }
}
