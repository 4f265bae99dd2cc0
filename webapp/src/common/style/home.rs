pub const HOME_STYLES: &str = r#"
/* Hero */
.hero {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--space-24) var(--space-6) var(--space-16);
}

.hero-label {
  font-size: 0.875rem;
  letter-spacing: 0.12em;
  text-transform: uppercase;
  color: var(--text-tertiary);
  margin-bottom: var(--space-6);
}

.hero-intro {
  font-family: var(--font-display);
  font-size: clamp(2rem, 4.5vw, 3.5rem);
  line-height: 1.2;
  max-width: 22ch;
  margin-bottom: var(--space-8);
}

/* Project showcase */
.projects {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--space-16) var(--space-6);
  scroll-margin-top: var(--header-height);
}

.section-title {
  font-family: var(--font-display);
  font-size: clamp(1.75rem, 3vw, 2.5rem);
  margin-bottom: var(--space-12);
}

.project-card {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: var(--space-12);
  align-items: center;
  margin-bottom: var(--space-24);
}

.project-card.mirrored .project-card-media {
  order: 2;
}

.project-card-body {
  display: flex;
  flex-direction: column;
  gap: var(--space-6);
}

.project-card-title {
  font-family: var(--font-display);
  font-size: 2rem;
  line-height: 1.2;
}

.project-card-title a {
  color: var(--text-primary);
}

.project-card-description {
  color: var(--text-secondary);
}

.detail-grid {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: var(--space-4);
}

.detail-group.stacked {
  grid-column: 1 / -1;
}

.detail-label {
  font-size: 0.75rem;
  letter-spacing: 0.08em;
  text-transform: uppercase;
  color: var(--text-tertiary);
  margin-bottom: var(--space-2);
}

.chips {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

.chip {
  padding: var(--space-1) var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-full);
  font-size: 0.8125rem;
  color: var(--text-secondary);
}

@media (max-width: 900px) {
  .project-card {
    grid-template-columns: 1fr;
  }

  .project-card.mirrored .project-card-media {
    order: 0;
  }

  .detail-grid {
    grid-template-columns: 1fr;
  }
}

/* About */
.about {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--space-16) var(--space-6);
  scroll-margin-top: var(--header-height);
}

.about-grid {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: var(--space-8);
}

.about-block h3 {
  font-family: var(--font-display);
  font-size: 1.5rem;
  margin-bottom: var(--space-4);
}

.about-block p {
  color: var(--text-secondary);
  margin-bottom: var(--space-4);
}

@media (max-width: 900px) {
  .about-grid {
    grid-template-columns: 1fr;
  }
}

/* Call to action */
.cta {
  max-width: var(--prose-width);
  margin: 0 auto;
  padding: var(--space-24) var(--space-6);
  text-align: center;
  font-family: var(--font-display);
  font-size: clamp(1.5rem, 3vw, 2.25rem);
  line-height: 1.3;
}
"#;
