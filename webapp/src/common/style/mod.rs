use constcat::concat;

mod components;
mod home;
mod project;
mod variables;

pub use components::BASE_COMPONENTS;
pub use home::HOME_STYLES;
pub use project::PROJECT_STYLES;
pub use variables::CSS_VARIABLES;

// one stylesheet for the whole site, injected once at the root
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-body);
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.6;
  transition: background-color var(--transition-normal) var(--easing-standard),
              color var(--transition-normal) var(--easing-standard);
}

a {
  color: var(--accent);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

ul {
  list-style: none;
}

ul.bullets {
  list-style: disc;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    HOME_STYLES,
    PROJECT_STYLES
);
