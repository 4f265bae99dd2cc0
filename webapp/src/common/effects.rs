use std::rc::Rc;

use dioxus::prelude::*;

use portfolio::effects::{ElementReveal, PARALLAX_TRAVEL_PX, ParallaxStyle, parallax_offset};

use crate::common::dom::{self, Listener};

// both effects are driven off window scroll events and re-measure the element on each one
//
// signals are only written when the derived value actually changes, so a scroll that moves
// nothing does not re-render the component
//
// the router reuses a component when only its props change (say, following a link from one
// project to the next), so the element id is tracked reactively and the scroll listener always
// reads the current one

fn refresh_parallax(id: &str, mut style: Signal<ParallaxStyle>) {
    let Some((element, viewport)) = dom::measure(id) else {
        return;
    };

    let next = parallax_offset(element, viewport);
    if *style.peek() != next {
        style.set(next);
    }
}

fn refresh_reveal(mut reveal: Signal<ElementReveal>) {
    // once revealed the latch only resets on a new element, so skip the measurement entirely
    if reveal.peek().is_revealed() {
        return;
    }

    let Some((element, viewport)) = dom::measure(reveal.peek().target()) else {
        return;
    };

    let mut next = reveal.peek().clone();
    if next.observe(element, viewport) {
        reveal.set(next);
    }
}

pub fn use_parallax(id: String) -> Signal<ParallaxStyle> {
    // before the first measurement the element is treated as fully below the fold
    let style = use_signal(|| ParallaxStyle {
        translate_y: PARALLAX_TRAVEL_PX,
    });
    let mut target = use_signal(|| id.clone());

    use_effect(use_reactive((&id,), move |(id,)| {
        if *target.peek() != id {
            target.set(id.clone());
        }
        refresh_parallax(&id, style)
    }));

    use_hook(move || {
        Rc::new(Listener::on_window("scroll", move |_| {
            refresh_parallax(&target.peek(), style)
        }))
    });

    style
}

pub fn use_scroll_fade(id: String) -> Signal<ElementReveal> {
    let mut reveal = use_signal(|| ElementReveal::new(id.clone()));

    // an element already in view on load fades in without waiting for a scroll
    use_effect(use_reactive((&id,), move |(id,)| {
        if reveal.peek().target() != id {
            reveal.write().retarget(&id);
        }
        refresh_reveal(reveal)
    }));

    use_hook(move || Rc::new(Listener::on_window("scroll", move |_| refresh_reveal(reveal))));

    reveal
}
