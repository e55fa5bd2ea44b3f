use newsapi::Article;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("no articles loaded")]
pub struct EmptyStore;

/// Ordered article sequence plus the viewing cursor. The cursor only moves
/// through the bounds-checked `move_*` operations, so it stays inside
/// `0..len` whenever the store is non-empty.
pub struct ArticleStore {
    articles: Vec<Article>,
    current: usize,
}

impl ArticleStore {
    pub fn new() -> ArticleStore {
        ArticleStore {
            articles: vec![],
            current: 0,
        }
    }

    /// Replaces the whole sequence and rewinds to the first article.
    pub fn reset(&mut self, articles: Vec<Article>) {
        self.articles = articles;
        self.current = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn current(&self) -> Result<&Article, EmptyStore> {
        self.articles.get(self.current).ok_or(EmptyStore)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn has_previous(&self) -> bool {
        self.current > 0
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.articles.len()
    }

    /// No-op at the first article; the UI disables the button but the store
    /// must not underflow regardless of caller discipline.
    pub fn move_previous(&mut self) {
        if self.has_previous() {
            self.current -= 1;
        }
    }

    pub fn move_next(&mut self) {
        if self.has_next() {
            self.current += 1;
        }
    }
}
