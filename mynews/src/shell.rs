use eframe::{
    egui::{Button, Context, RichText, TextStyle, TextureHandle, Ui, Vec2, Visuals},
    CreationContext,
};
use newsapi::{Article, NewsApi, NewsApiError};

use crate::images::{ImageResolver, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::store::ArticleStore;

pub const PADDING: f32 = 10.0;

/// Sentinel used when NEWS_API_KEY is absent; the service rejects it, so
/// every fetch lands in the error view instead of crashing at startup.
pub const FALLBACK_API_KEY: &str = "missing-api-key";

const NO_TITLE: &str = "No title available";
const NO_DESCRIPTION: &str = "No description available";

/// User intent reported by the render pass; `handle` applies it to state.
#[derive(Debug)]
pub enum Msg {
    Previous,
    Next,
    ReadMore,
    Retry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum View {
    Loading,
    Showing,
    Failed,
}

pub struct MyNews {
    client: NewsApi,
    resolver: ImageResolver,
    store: ArticleStore,
    view: View,
    // Thumbnail for the index it was resolved at; inner None means both the
    // article image and the placeholder were unreachable.
    thumbnail: Option<(usize, Option<TextureHandle>)>,
}

impl MyNews {
    pub fn new(api_key: &str) -> MyNews {
        MyNews {
            client: NewsApi::new(api_key),
            resolver: ImageResolver::new(),
            store: ArticleStore::new(),
            view: View::Loading,
            thumbnail: None,
        }
    }

    pub fn init(mut self, cc: &CreationContext) -> Self {
        cc.egui_ctx.set_visuals(Visuals::dark());
        self.refresh();
        self
    }

    pub(crate) fn view(&self) -> View {
        self.view
    }

    /// Blocking fetch on the UI thread; the window is unresponsive for its
    /// duration, same as every other fetch in this app.
    pub fn refresh(&mut self) {
        self.thumbnail = None;
        let result = self.client.fetch().map(|response| response.into_articles());
        self.apply_fetch(result);
    }

    fn apply_fetch(&mut self, result: Result<Vec<Article>, NewsApiError>) {
        match result {
            Ok(articles) if !articles.is_empty() => {
                tracing::info!("loaded {} articles", articles.len());
                self.store.reset(articles);
                self.view = View::Showing;
            }
            Ok(_) => {
                tracing::warn!("fetch succeeded but returned no articles");
                self.store.reset(vec![]);
                self.view = View::Failed;
            }
            Err(err) => {
                tracing::error!("failed fetching news: {}", err);
                self.store.reset(vec![]);
                self.view = View::Failed;
            }
        }
    }

    pub fn handle(&mut self, msg: Msg) {
        match msg {
            Msg::Previous => self.store.move_previous(),
            Msg::Next => self.store.move_next(),
            Msg::ReadMore => self.open_current_article(),
            Msg::Retry => self.refresh(),
        }
    }

    fn open_current_article(&self) {
        let url = self.store.current().ok().and_then(|a| a.url.as_deref());
        if let Some(url) = url {
            if let Err(err) = open::that(url) {
                tracing::error!("failed opening {} in the browser: {}", url, err);
            }
        }
    }

    fn ensure_thumbnail(&mut self, ctx: &Context) {
        if self.store.is_empty() {
            return;
        }
        let index = self.store.current_index();
        if matches!(&self.thumbnail, Some((cached, _)) if *cached == index) {
            return;
        }
        let url = self
            .store
            .current()
            .ok()
            .and_then(|a| a.url_to_image.clone());
        let canvas = self.resolver.resolve(url.as_deref());
        let texture = canvas.map(|canvas| ctx.load_texture("article-thumbnail", canvas));
        self.thumbnail = Some((index, texture));
    }

    pub(crate) fn render_article(&mut self, ui: &mut Ui) -> Option<Msg> {
        self.ensure_thumbnail(ui.ctx());
        let article = match self.store.current() {
            Ok(article) => article,
            Err(_) => return None,
        };

        let mut msg = None;
        ui.vertical_centered(|ui| {
            ui.add_space(PADDING);
            if let Some((_, Some(texture))) = &self.thumbnail {
                ui.image(texture, Vec2::new(CANVAS_WIDTH as f32, CANVAS_HEIGHT as f32));
            }
            ui.add_space(2.0 * PADDING);
            ui.heading(title_text(article));
            ui.add_space(2.0 * PADDING);
            ui.label(RichText::new(description_text(article)).text_style(TextStyle::Button));
            ui.add_space(2.0 * PADDING);

            ui.horizontal(|ui| {
                let prev = ui.add_enabled(self.store.has_previous(), Button::new("Prev"));
                if prev.clicked() {
                    msg = Some(Msg::Previous);
                }
                if ui.button("Read More").clicked() {
                    msg = Some(Msg::ReadMore);
                }
                let next = ui.add_enabled(self.store.has_next(), Button::new("Next"));
                if next.clicked() {
                    msg = Some(Msg::Next);
                }
            });
        });
        msg
    }
}

pub(crate) fn title_text(article: &Article) -> &str {
    article.title.as_deref().unwrap_or(NO_TITLE)
}

pub(crate) fn description_text(article: &Article) -> &str {
    article.description.as_deref().unwrap_or(NO_DESCRIPTION)
}
