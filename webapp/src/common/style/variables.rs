pub const CSS_VARIABLES: &str = r#"
:root {
  /* Palette */
  --accent: #C0856B;           /* Terracotta accent for highlighted copy */
  --accent-light: #D9A48C;
  --accent-dark: #9C6450;

  --neutral-50: #FAF8F6;
  --neutral-100: #F2EFEB;
  --neutral-200: #E4DFD9;
  --neutral-300: #CFC8C0;
  --neutral-400: #A39B92;
  --neutral-500: #7A736B;
  --neutral-600: #57514B;
  --neutral-700: #3A3631;
  --neutral-800: #24211E;
  --neutral-900: #161412;

  --error: #D9534F;

  /* Typography */
  --font-body: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  --font-display: 'Playfair Display', Georgia, 'Times New Roman', serif;

  /* Layout */
  --header-height: 72px;
  --container-width: 1200px;
  --prose-width: 760px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;
  --space-24: 96px;

  /* Border Radius */
  --radius-sm: 4px;
  --radius-md: 8px;
  --radius-lg: 16px;
  --radius-full: 9999px;

  /* Transitions */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --transition-reveal: 700ms;
  --easing-standard: cubic-bezier(0.4, 0, 0.2, 1);
}

/* Light theme */
:root[data-theme="light"] {
  --background: var(--neutral-50);
  --surface: #FFFFFF;
  --surface-muted: var(--neutral-100);
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-tertiary: var(--neutral-500);
  --border: var(--neutral-200);
  --overlay: rgba(250, 248, 246, 0.97);
  --shadow-md: 0 4px 12px rgba(22, 20, 18, 0.08);
}

/* Dark theme, also the fallback before the theme attribute is set */
:root,
:root[data-theme="dark"] {
  --background: var(--neutral-900);
  --surface: var(--neutral-800);
  --surface-muted: var(--neutral-700);
  --text-primary: var(--neutral-50);
  --text-secondary: var(--neutral-300);
  --text-tertiary: var(--neutral-400);
  --border: var(--neutral-700);
  --overlay: rgba(22, 20, 18, 0.97);
  --shadow-md: 0 4px 12px rgba(0, 0, 0, 0.4);
}
"#;
