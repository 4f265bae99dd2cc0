// mobile navigation menu
//
// the navbar feeds every relevant browser event through `apply` and then mirrors the state onto
// the page (overlay visibility, hamburger icon, body scroll lock)

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    KeyDown,
    Escape,
    PointerDownInside,
    PointerDownOutside,
    LinkFollowed,
}

impl MenuEvent {
    pub fn from_key(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => MenuEvent::Escape,
            _ => MenuEvent::KeyDown,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn apply(&mut self, event: MenuEvent) {
        self.open = match event {
            MenuEvent::Toggle => !self.open,
            MenuEvent::Escape | MenuEvent::PointerDownOutside | MenuEvent::LinkFollowed => false,
            MenuEvent::KeyDown | MenuEvent::PointerDownInside => self.open,
        };
    }

    // value for `document.body.style.overflow`
    pub fn body_overflow(&self) -> &'static str {
        if self.open { "hidden" } else { "" }
    }

    pub fn toggle_label_key(&self) -> &'static str {
        if self.open {
            "navbar.close_menu"
        } else {
            "navbar.open_menu"
        }
    }

    pub fn overlay_class(&self) -> &'static str {
        if self.open {
            "mobile-menu open"
        } else {
            "mobile-menu"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_and_closes() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());

        menu.apply(MenuEvent::Toggle);
        assert!(menu.is_open());
        assert_eq!(menu.body_overflow(), "hidden");

        menu.apply(MenuEvent::Toggle);
        assert!(!menu.is_open());
        assert_eq!(menu.body_overflow(), "");
    }

    #[test]
    fn escape_outside_click_and_navigation_close() {
        for event in [
            MenuEvent::Escape,
            MenuEvent::PointerDownOutside,
            MenuEvent::LinkFollowed,
        ] {
            let mut menu = MenuState::default();
            menu.apply(MenuEvent::Toggle);
            menu.apply(event);
            assert!(!menu.is_open(), "{event:?} should close the menu");
        }
    }

    #[test]
    fn other_keys_and_inside_clicks_keep_state() {
        let mut menu = MenuState::default();
        menu.apply(MenuEvent::Toggle);

        menu.apply(MenuEvent::from_key("a"));
        menu.apply(MenuEvent::PointerDownInside);
        assert!(menu.is_open());

        menu.apply(MenuEvent::from_key("Escape"));
        assert!(!menu.is_open());
    }

    #[test]
    fn closing_a_closed_menu_is_a_no_op() {
        let mut menu = MenuState::default();
        menu.apply(MenuEvent::Escape);
        assert_eq!(menu, MenuState::default());
    }
}
