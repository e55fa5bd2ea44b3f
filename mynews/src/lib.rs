mod images;
mod shell;
mod store;

use eframe::{
    egui::{CentralPanel, Ui},
    App,
};
use shell::View;
pub use shell::{Msg, MyNews, FALLBACK_API_KEY, PADDING};

impl App for MyNews {
    fn update(&mut self, ctx: &eframe::egui::Context, _frame: &mut eframe::Frame) {
        let msg = CentralPanel::default()
            .show(ctx, |ui| match self.view() {
                View::Loading => {
                    render_loading(ui);
                    None
                }
                View::Showing => self.render_article(ui),
                View::Failed => render_error(ui),
            })
            .inner;

        if let Some(msg) = msg {
            self.handle(msg);
        }
    }
}

fn render_loading(ui: &mut Ui) {
    ui.vertical_centered_justified(|ui| {
        ui.heading("Loading ⌛");
    });
}

fn render_error(ui: &mut Ui) -> Option<Msg> {
    ui.vertical_centered(|ui| {
        ui.add_space(100.0);
        ui.heading("Failed to load news. Please try again later.");
        ui.add_space(2.0 * PADDING);
        if ui.button("Retry").clicked() {
            Some(Msg::Retry)
        } else {
            None
        }
    })
    .inner
}
