//! Share image rendering
//!
//! create -> draw -> rasterize -> destroy. The target is destroyed on every
//! exit path, including a failed create or rasterize.

use mythweaver_domain::ShareCard;

use crate::ports::outbound::{RasterImage, RenderError, RenderTarget};

struct DestroyOnDrop<'a>(&'a mut dyn RenderTarget);

impl Drop for DestroyOnDrop<'_> {
    fn drop(&mut self) {
        self.0.destroy();
    }
}

pub fn render_share_image(
    card: &ShareCard,
    target: &mut dyn RenderTarget,
) -> Result<RasterImage, RenderError> {
    let surface = DestroyOnDrop(target);
    surface.0.create(card.width, card.height)?;
    for command in &card.commands {
        surface.0.draw(command)?;
    }
    let image = surface.0.rasterize()?;
    tracing::debug!(
        width = card.width,
        height = card.height,
        mime = image.mime_type,
        "Share image rendered"
    );
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mythweaver_domain::build_share_card;

    use crate::application::services::fixtures::bakery_story;
    use crate::infrastructure::render::RecordingTarget;

    #[test]
    fn draws_every_command_then_destroys() {
        let card = build_share_card(&bakery_story());
        let mut target = RecordingTarget::new();
        let recorded = target.clone();

        let image = render_share_image(&card, &mut target).unwrap();

        let recording = recorded.recording();
        assert_eq!(image.extension, "png");
        assert_eq!(recording.size, Some((1200, 630)));
        assert_eq!(recording.commands, card.commands);
        assert_eq!(recording.destroyed, 1);
    }

    #[test]
    fn rasterize_failure_still_destroys() {
        let card = build_share_card(&bakery_story());
        let mut target = RecordingTarget::failing_rasterize();
        let recorded = target.clone();

        let err = render_share_image(&card, &mut target).unwrap_err();

        assert!(matches!(err, RenderError::Rasterize(_)));
        assert_eq!(recorded.recording().destroyed, 1);
    }
}
