pub const BASE_COMPONENTS: &str = r#"
/* Navigation bar */
.navbar {
  position: sticky;
  top: 0;
  z-index: 20;
  height: var(--header-height);
  background-color: var(--background);
  border-bottom: 1px solid var(--border);
}

.navbar-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: 100%;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

.navbar-brand {
  display: flex;
  flex-direction: column;
  color: var(--text-primary);
}

.navbar-brand:hover {
  text-decoration: none;
}

.navbar-name {
  font-family: var(--font-display);
  font-size: 1.25rem;
}

.navbar-role {
  font-size: 0.75rem;
  letter-spacing: 0.08em;
  text-transform: uppercase;
  color: var(--text-tertiary);
}

.navbar-links {
  display: flex;
  align-items: center;
  gap: var(--space-6);
}

.navbar-link {
  color: var(--text-secondary);
  font-weight: 500;
  transition: color var(--transition-fast) var(--easing-standard);
}

.navbar-link:hover {
  color: var(--accent);
  text-decoration: none;
}

.navbar-controls {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.icon-button {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-1);
  min-width: 40px;
  height: 40px;
  padding: 0 var(--space-2);
  border: 1px solid var(--border);
  border-radius: var(--radius-full);
  background: transparent;
  color: var(--text-secondary);
  font: inherit;
  font-size: 0.875rem;
  cursor: pointer;
  transition: color var(--transition-fast) var(--easing-standard),
              border-color var(--transition-fast) var(--easing-standard);
}

.icon-button:hover {
  color: var(--accent);
  border-color: var(--accent);
}

.icon-button svg {
  width: 18px;
  height: 18px;
}

.menu-toggle {
  display: none;
}

/* Mobile menu overlay */
.mobile-menu {
  position: fixed;
  inset: var(--header-height) 0 0 0;
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
  padding: var(--space-8) var(--space-6);
  background-color: var(--overlay);
  opacity: 0;
  visibility: hidden;
  transition: opacity var(--transition-normal) var(--easing-standard),
              visibility var(--transition-normal) var(--easing-standard);
}

.mobile-menu.open {
  opacity: 1;
  visibility: visible;
}

.mobile-menu .navbar-link {
  font-family: var(--font-display);
  font-size: 1.75rem;
}

@media (max-width: 768px) {
  .navbar-links {
    display: none;
  }

  .menu-toggle {
    display: inline-flex;
  }
}

@media (min-width: 769px) {
  .mobile-menu {
    display: none;
  }
}

/* Buttons and links */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-full);
  border: none;
  font: inherit;
  font-weight: 500;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
}

.btn:active {
  transform: translateY(1px);
}

.btn-primary {
  background-color: var(--accent);
  color: var(--neutral-50);
}

.btn-primary:hover {
  background-color: var(--accent-dark);
  text-decoration: none;
}

.arrow-link {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  color: var(--accent);
  font-weight: 500;
}

.arrow-link svg {
  width: 16px;
  height: 16px;
  transition: transform var(--transition-fast) var(--easing-standard);
}

.arrow-link:hover svg {
  transform: translateX(4px);
}

.accent {
  color: var(--accent);
}

/* Scroll effects */
.parallax-text {
  will-change: transform;
}

.fade-in {
  transition: opacity var(--transition-reveal) var(--easing-standard),
              transform var(--transition-reveal) var(--easing-standard);
}

/* Media */
.media-frame {
  position: relative;
  overflow: hidden;
  border-radius: var(--radius-lg);
  background-color: var(--surface-muted);
}

.media-frame img,
.media-frame video {
  display: block;
  width: 100%;
  height: auto;
}

.media-frame .media-hover {
  position: absolute;
  inset: 0;
  opacity: 0;
  transition: opacity var(--transition-normal) var(--easing-standard);
}

.media-frame:hover .media-hover {
  opacity: 1;
}

/* Password gate */
.gate {
  display: flex;
  min-height: calc(100vh - var(--header-height));
  align-items: center;
  justify-content: center;
  padding: var(--space-8) var(--space-6);
}

.gate-card {
  width: 100%;
  max-width: 440px;
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.gate-icon {
  width: 48px;
  height: 48px;
  color: var(--accent);
}

.gate-title {
  font-family: var(--font-display);
  font-size: 2rem;
  line-height: 1.2;
}

.gate-contact {
  color: var(--text-secondary);
}

.gate-form {
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
}

.gate-input-row {
  position: relative;
  display: flex;
}

.gate-input {
  flex: 1;
  padding: var(--space-3) var(--space-12) var(--space-3) var(--space-4);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
  font: inherit;
}

.gate-input:focus {
  outline: none;
  border-color: var(--accent);
}

.gate-reveal {
  position: absolute;
  top: 50%;
  right: var(--space-2);
  transform: translateY(-50%);
  border: none;
}

.gate-error {
  color: var(--error);
  font-size: 0.875rem;
}

/* Footer */
.footer {
  border-top: 1px solid var(--border);
  padding: var(--space-12) var(--space-6);
}

.footer-inner {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-8);
  justify-content: space-between;
  max-width: var(--container-width);
  margin: 0 auto;
  color: var(--text-tertiary);
  font-size: 0.875rem;
}

.footer-name {
  font-family: var(--font-display);
  font-size: 1.25rem;
  color: var(--text-primary);
}

.footer-meta {
  display: flex;
  flex-direction: column;
  gap: var(--space-1);
  text-align: right;
}

/* Fallback pages */
.not-found,
.fatal {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
  align-items: center;
  justify-content: center;
  min-height: calc(100vh - var(--header-height));
  padding: var(--space-8);
  text-align: center;
}

.not-found h1 {
  font-family: var(--font-display);
  font-size: 3rem;
}
"#;
