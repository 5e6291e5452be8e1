//! Preview texture for the current settings, re-rendered only when they change.

use egui::{ColorImage, Context, TextureHandle, TextureOptions};
use qrstudio_business::{PREVIEW_SIZE_PX, QrSettings, RenderError, render_qr};

#[derive(Default)]
pub struct QrTexture {
    cached: Option<(QrSettings, Result<TextureHandle, RenderError>)>,
}

impl QrTexture {
    pub fn get(
        &mut self,
        ctx: &Context,
        settings: &QrSettings,
    ) -> Result<&TextureHandle, &RenderError> {
        if self
            .cached
            .as_ref()
            .is_none_or(|(rendered, _)| rendered != settings)
        {
            self.cached = None;
        }
        let (_, result) = self
            .cached
            .get_or_insert_with(|| (settings.clone(), load(ctx, settings)));
        result.as_ref()
    }
}

fn load(ctx: &Context, settings: &QrSettings) -> Result<TextureHandle, RenderError> {
    log::debug!("Rendering preview for {:?}", settings.label);
    let img = render_qr(settings, PREVIEW_SIZE_PX)?;
    let size = [img.width() as usize, img.height() as usize];
    let image = ColorImage::from_rgba_unmultiplied(size, img.as_raw());
    Ok(ctx.load_texture("qr_preview", image, TextureOptions::NEAREST))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(url: &str) -> QrSettings {
        QrSettings {
            url: url.to_owned(),
            ..QrSettings::default()
        }
    }

    #[test]
    fn test_texture_is_reused_until_settings_change() {
        let ctx = Context::default();
        let mut preview = QrTexture::default();

        let first = preview
            .get(&ctx, &settings("hello"))
            .expect("renders")
            .id();
        let again = preview
            .get(&ctx, &settings("hello"))
            .expect("renders")
            .id();
        assert_eq!(first, again);

        let changed = preview
            .get(&ctx, &settings("hello again"))
            .expect("renders")
            .id();
        assert_ne!(first, changed);
    }

    #[test]
    fn test_render_errors_are_returned() {
        let ctx = Context::default();
        let mut preview = QrTexture::default();

        assert_eq!(
            preview.get(&ctx, &settings("")).err(),
            Some(&RenderError::EmptyData)
        );
    }
}
