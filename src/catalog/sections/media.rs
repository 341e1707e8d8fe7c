use crate::catalog::view::Page;
use crate::consts::cli_consts::media::{AUDIO_URL, IMAGE_CAPTION, IMAGE_URL, VIDEO_URL};

/// Static embeds; fetching and decoding is left to the host.
pub fn render(page: &mut Page<'_>) {
    page.image(IMAGE_URL, Some(IMAGE_CAPTION), true);
    page.audio(AUDIO_URL);
    page.video(VIDEO_URL);
}
