use eframe::{egui::Vec2, run_native, NativeOptions};
use mynews::{MyNews, FALLBACK_API_KEY};

fn main() {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();

    let api_key = std::env::var("NEWS_API_KEY").unwrap_or_else(|_| {
        tracing::warn!("NEWS_API_KEY is not set; the headline service will reject every request");
        FALLBACK_API_KEY.to_string()
    });

    let app = MyNews::new(&api_key);
    let mut win_options = NativeOptions::default();
    win_options.initial_window_size = Some(Vec2::new(600.0, 800.0));
    run_native("My News", win_options, Box::new(|cc| Box::new(app.init(cc))));
}
