// scroll-driven effects
//
// the browser side only measures the element and writes the style; everything in between is
// a pure function of the measurement, so the same scroll position always yields the same style

// parallax text starts this far below its resting place
pub const PARALLAX_TRAVEL_PX: f64 = 100.0;

// fade-in blocks rise this far while they appear
pub const FADE_RISE_PX: f64 = 20.0;

// fraction of the viewport an element must clear before it counts as in view
pub const FADE_THRESHOLD: f64 = 0.1;

// about-section subsections reveal one after another
pub const FADE_STAGGER_MS: u32 = 150;

// the element's bounding rect relative to the viewport, in css pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementGeometry {
    pub top: f64,
    pub height: f64,
}

impl ElementGeometry {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxStyle {
    pub translate_y: f64,
}

impl ParallaxStyle {
    pub fn transform(&self) -> String {
        format!("translateY({}px)", self.translate_y)
    }
}

// how far the element has travelled through the viewport, from 0 (just below the fold) to
// 1 (just scrolled off the top)
pub fn visible_fraction(el: ElementGeometry, vp: Viewport) -> f64 {
    let span = vp.height + el.height;
    if span <= 0.0 || !span.is_finite() {
        return 0.0;
    }

    ((vp.height - el.top) / span).clamp(0.0, 1.0)
}

pub fn parallax_offset(el: ElementGeometry, vp: Viewport) -> ParallaxStyle {
    ParallaxStyle {
        translate_y: PARALLAX_TRAVEL_PX - visible_fraction(el, vp) * PARALLAX_TRAVEL_PX,
    }
}

pub fn in_view(el: ElementGeometry, vp: Viewport, threshold: f64) -> bool {
    el.top < vp.height * (1.0 - threshold) && el.bottom() > 0.0
}

// once a block has faded in it stays visible, scrolling back up does not hide it again
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reveal {
    revealed: bool,
}

impl Reveal {
    pub fn observe(&mut self, el: ElementGeometry, vp: Viewport) -> bool {
        self.revealed |= in_view(el, vp, FADE_THRESHOLD);
        self.revealed
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

// a reveal latch bound to one element id; pointing it at a different element starts it over,
// so a component reused across routes fades in the new content instead of keeping the old state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementReveal {
    target: String,
    reveal: Reveal,
}

impl ElementReveal {
    pub fn new(target: impl Into<String>) -> Self {
        ElementReveal {
            target: target.into(),
            reveal: Reveal::default(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns false (and keeps the latch) when `target` is already the tracked element.
    pub fn retarget(&mut self, target: &str) -> bool {
        if self.target == target {
            return false;
        }

        self.target = target.to_owned();
        self.reveal = Reveal::default();
        true
    }

    pub fn observe(&mut self, el: ElementGeometry, vp: Viewport) -> bool {
        self.reveal.observe(el, vp)
    }

    pub fn is_revealed(&self) -> bool {
        self.reveal.is_revealed()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeStyle {
    pub opacity: f64,
    pub translate_y: f64,
    pub delay_ms: u32,
}

impl FadeStyle {
    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px); transition-delay: {}ms;",
            self.opacity, self.translate_y, self.delay_ms
        )
    }
}

pub fn fade_style(revealed: bool, delay_ms: u32) -> FadeStyle {
    if revealed {
        FadeStyle {
            opacity: 1.0,
            translate_y: 0.0,
            delay_ms,
        }
    } else {
        FadeStyle {
            opacity: 0.0,
            translate_y: FADE_RISE_PX,
            delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport { height: 800.0 };

    fn at(top: f64) -> ElementGeometry {
        ElementGeometry { top, height: 200.0 }
    }

    #[test]
    fn parallax_is_idempotent() {
        for top in [-500.0, -200.0, 0.0, 123.4, 400.0, 799.0, 2000.0] {
            assert_eq!(parallax_offset(at(top), VP), parallax_offset(at(top), VP));
        }
    }

    #[test]
    fn parallax_travels_from_full_offset_to_rest() {
        // below the fold
        assert_eq!(parallax_offset(at(900.0), VP).translate_y, 100.0);
        // top edge just entering
        assert_eq!(parallax_offset(at(800.0), VP).translate_y, 100.0);
        // halfway: (800 - 300) / 1000
        assert_eq!(parallax_offset(at(300.0), VP).translate_y, 50.0);
        // fully scrolled past
        assert_eq!(parallax_offset(at(-200.0), VP).translate_y, 0.0);
        assert_eq!(parallax_offset(at(-900.0), VP).translate_y, 0.0);
    }

    #[test]
    fn degenerate_geometry_does_not_produce_nan() {
        let el = ElementGeometry {
            top: 0.0,
            height: 0.0,
        };
        let style = parallax_offset(el, Viewport { height: 0.0 });
        assert_eq!(style.translate_y, PARALLAX_TRAVEL_PX);
        assert_eq!(style.transform(), "translateY(100px)");
    }

    #[test]
    fn in_view_respects_threshold_and_bottom_edge() {
        assert!(!in_view(at(750.0), VP, FADE_THRESHOLD));
        assert!(in_view(at(700.0), VP, FADE_THRESHOLD));
        assert!(in_view(at(-199.0), VP, FADE_THRESHOLD));
        assert!(!in_view(at(-200.0), VP, FADE_THRESHOLD));
    }

    #[test]
    fn reveal_latches() {
        let mut reveal = Reveal::default();

        assert!(!reveal.observe(at(1000.0), VP));
        assert!(reveal.observe(at(100.0), VP));
        assert!(reveal.observe(at(1000.0), VP));
        assert!(reveal.is_revealed());
    }

    #[test]
    fn element_reveal_starts_over_on_a_new_element() {
        let mut reveal = ElementReveal::new("alpha-section-0");
        assert!(reveal.observe(at(100.0), VP));

        // same element: the latch holds
        assert!(!reveal.retarget("alpha-section-0"));
        assert!(reveal.is_revealed());

        // navigating to another project reuses the component with a new id
        assert!(reveal.retarget("beta-section-0"));
        assert_eq!(reveal.target(), "beta-section-0");
        assert!(!reveal.is_revealed());

        assert!(!reveal.observe(at(1000.0), VP));
        assert!(reveal.observe(at(300.0), VP));
    }

    #[test]
    fn fade_style_states() {
        assert_eq!(
            fade_style(false, 300).css(),
            "opacity: 0; transform: translateY(20px); transition-delay: 300ms;"
        );
        assert_eq!(
            fade_style(true, 0).css(),
            "opacity: 1; transform: translateY(0px); transition-delay: 0ms;"
        );
    }
}
