use std::io::Read;

use eframe::egui::ColorImage;
use image::imageops::FilterType;

pub const CANVAS_WIDTH: u32 = 350;
pub const CANVAS_HEIGHT: u32 = 250;

// The fallback graphic is itself a remote resource, same as the articles.
const PLACEHOLDER_URL: &str = "https://via.placeholder.com/350x250?text=No+Image";

#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    #[error("Failed fetching image")]
    FetchFailed(#[from] Box<ureq::Error>),
    #[error("Failed reading image bytes")]
    ReadFailed(#[from] std::io::Error),
    #[error("Failed decoding image")]
    DecodeFailed(#[from] image::ImageError),
}

/// Fetches article thumbnails and scales them to the fixed 350×250 canvas.
pub struct ImageResolver {
    agent: ureq::Agent,
}

impl ImageResolver {
    pub fn new() -> ImageResolver {
        ImageResolver {
            agent: ureq::agent(),
        }
    }

    /// Two-stage lookup: the article's own image first, then the remote
    /// placeholder. Each stage's failure is logged on its own; when both
    /// fail the caller renders no image at all.
    pub fn resolve(&self, url: Option<&str>) -> Option<ColorImage> {
        resolve_with(|url| self.fetch_canvas(url), url)
    }

    fn fetch_canvas(&self, url: &str) -> Result<ColorImage, ImageError> {
        let response = self.agent.get(url).call().map_err(Box::new)?;
        let mut bytes = Vec::new();
        response.into_reader().read_to_end(&mut bytes)?;
        decode_canvas(&bytes)
    }
}

// An absent URL skips the first stage entirely; a present-but-broken one
// falls through to the placeholder.
fn resolve_with<F>(fetch: F, url: Option<&str>) -> Option<ColorImage>
where
    F: Fn(&str) -> Result<ColorImage, ImageError>,
{
    if let Some(url) = url {
        match fetch(url) {
            Ok(canvas) => return Some(canvas),
            Err(err) => {
                tracing::warn!("article image unavailable ({}): {}", url, err);
            }
        }
    }
    match fetch(PLACEHOLDER_URL) {
        Ok(canvas) => Some(canvas),
        Err(err) => {
            tracing::error!("placeholder image unavailable: {}", err);
            None
        }
    }
}

fn decode_canvas(bytes: &[u8]) -> Result<ColorImage, ImageError> {
    let scaled = image::load_from_memory(bytes)?
        .resize_exact(CANVAS_WIDTH, CANVAS_HEIGHT, FilterType::Triangle)
        .to_rgba8();
    Ok(ColorImage::from_rgba_unmultiplied(
        [CANVAS_WIDTH as usize, CANVAS_HEIGHT as usize],
        scaled.as_raw(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let pixels = image::RgbaImage::from_pixel(width, height, image::Rgba([40, 60, 80, 255]));
        let mut bytes = Vec::new();
        pixels
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image::ImageOutputFormat::Png,
            )
            .unwrap();
        bytes
    }

    #[test]
    fn decode_scales_to_the_fixed_canvas() {
        let canvas = decode_canvas(&png_bytes(4, 4)).unwrap();
        assert_eq!(canvas.size, [CANVAS_WIDTH as usize, CANVAS_HEIGHT as usize]);
    }

    #[test]
    fn decode_handles_oversized_input() {
        let canvas = decode_canvas(&png_bytes(700, 100)).unwrap();
        assert_eq!(canvas.size, [CANVAS_WIDTH as usize, CANVAS_HEIGHT as usize]);
    }

    #[test]
    fn garbage_bytes_are_a_decode_error() {
        let err = decode_canvas(b"definitely not an image").err().unwrap();
        assert!(matches!(err, ImageError::DecodeFailed(_)));
    }

    fn canvas() -> ColorImage {
        ColorImage::new([1, 1], eframe::egui::Color32::BLACK)
    }

    fn unreachable_host() -> ImageError {
        ImageError::ReadFailed(std::io::Error::new(
            std::io::ErrorKind::Other,
            "host unreachable",
        ))
    }

    #[test]
    fn absent_url_goes_straight_to_the_placeholder() {
        let fetched = std::cell::RefCell::new(Vec::new());
        let result = resolve_with(
            |url| {
                fetched.borrow_mut().push(url.to_string());
                Ok(canvas())
            },
            None,
        );
        assert!(result.is_some());
        assert_eq!(*fetched.borrow(), vec![PLACEHOLDER_URL.to_string()]);
    }

    #[test]
    fn working_article_image_never_touches_the_placeholder() {
        let fetched = std::cell::RefCell::new(Vec::new());
        let result = resolve_with(
            |url| {
                fetched.borrow_mut().push(url.to_string());
                Ok(canvas())
            },
            Some("https://example.com/story.png"),
        );
        assert!(result.is_some());
        assert_eq!(
            *fetched.borrow(),
            vec!["https://example.com/story.png".to_string()]
        );
    }

    #[test]
    fn broken_article_image_falls_through_to_the_placeholder() {
        let fetched = std::cell::RefCell::new(Vec::new());
        let result = resolve_with(
            |url| {
                fetched.borrow_mut().push(url.to_string());
                if url == PLACEHOLDER_URL {
                    Ok(canvas())
                } else {
                    Err(unreachable_host())
                }
            },
            Some("https://example.com/broken.png"),
        );
        assert!(result.is_some());
        assert_eq!(
            *fetched.borrow(),
            vec![
                "https://example.com/broken.png".to_string(),
                PLACEHOLDER_URL.to_string()
            ]
        );
    }

    #[test]
    fn double_failure_yields_no_canvas() {
        let result = resolve_with(
            |_| Err(unreachable_host()),
            Some("https://example.com/broken.png"),
        );
        assert!(result.is_none());
    }
}
