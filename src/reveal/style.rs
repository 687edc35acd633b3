use crate::config;

use super::config::{Direction, RevealConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

/// Visual state of a reveal target, ready to be written as inline CSS.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    pub translate: (f64, f64),
    pub scale: f64,
    pub blur_px: f64,
    pub duration_ms: u32,
}

impl RevealStyle {
    pub fn compute(visibility: Visibility, config: &RevealConfig) -> Self {
        let duration_ms = config.duration_ms;
        match visibility {
            Visibility::Visible => Self::settled(duration_ms),
            Visibility::Hidden => Self {
                opacity: 0.0,
                translate: config.direction.hidden_offset(config.distance),
                scale: if config.direction == Direction::Scale {
                    config::REVEAL_HIDDEN_SCALE
                } else {
                    1.0
                },
                blur_px: if config.direction == Direction::Blur {
                    config::REVEAL_BLUR_PX
                } else {
                    0.0
                },
                duration_ms,
            },
        }
    }

    /// Fully revealed, nothing offset.
    pub fn settled(duration_ms: u32) -> Self {
        Self {
            opacity: 1.0,
            translate: (0.0, 0.0),
            scale: 1.0,
            blur_px: 0.0,
            duration_ms,
        }
    }

    pub fn to_css(&self) -> String {
        let (x, y) = self.translate;
        let d = self.duration_ms;
        format!(
            "opacity: {}; transform: translate3d({}px, {}px, 0) scale({}); filter: blur({}px); \
             transition: opacity {d}ms ease-out, transform {d}ms ease-out, filter {d}ms ease-out; \
             will-change: opacity, transform;",
            self.opacity, x, y, self.scale, self.blur_px,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_is_transparent_and_offset() {
        let config = RevealConfig::new().direction(Direction::Left).distance(25.0);
        let style = RevealStyle::compute(Visibility::Hidden, &config);
        assert_eq!(style.opacity, 0.0);
        assert_eq!(style.translate, (25.0, 0.0));
        assert_eq!(style.scale, 1.0);
        assert_eq!(style.blur_px, 0.0);
    }

    #[test]
    fn visible_is_opaque_and_in_place() {
        for direction in [Direction::Up, Direction::Right, Direction::Scale, Direction::Blur] {
            let config = RevealConfig::new().direction(direction);
            let style = RevealStyle::compute(Visibility::Visible, &config);
            assert_eq!(style, RevealStyle::settled(config.duration_ms));
        }
    }

    #[test]
    fn blur_only_while_hidden() {
        let config = RevealConfig::new().direction(Direction::Blur);
        assert!(RevealStyle::compute(Visibility::Hidden, &config).blur_px > 0.0);
        assert_eq!(RevealStyle::compute(Visibility::Visible, &config).blur_px, 0.0);
    }

    #[test]
    fn scale_shrinks_without_moving() {
        let config = RevealConfig::new().direction(Direction::Scale);
        let style = RevealStyle::compute(Visibility::Hidden, &config);
        assert_eq!(style.translate, (0.0, 0.0));
        assert!(style.scale < 1.0);
    }

    #[test]
    fn css_carries_every_property() {
        let config = RevealConfig::new().duration(450);
        let css = RevealStyle::compute(Visibility::Hidden, &config).to_css();
        assert!(css.contains("opacity: 0;"));
        assert!(css.contains("translate3d(0px, 40px, 0)"));
        assert!(css.contains("opacity 450ms ease-out"));
    }
}
