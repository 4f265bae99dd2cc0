pub const PROJECT_STYLES: &str = r#"
/* Case study */
.case-study {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--space-12) var(--space-6) var(--space-16);
}

.back-link {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  color: var(--text-secondary);
  margin-bottom: var(--space-12);
}

.back-link svg {
  width: 16px;
  height: 16px;
}

.case-header {
  max-width: var(--prose-width);
  margin-bottom: var(--space-16);
}

.case-tags {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin-bottom: var(--space-6);
}

.case-title {
  font-family: var(--font-display);
  font-size: clamp(2.25rem, 5vw, 4rem);
  line-height: 1.1;
  margin-bottom: var(--space-4);
}

.case-subtitle {
  font-size: 1.25rem;
  color: var(--text-secondary);
}

.case-summary {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: var(--space-8);
  padding: var(--space-8) 0;
  border-top: 1px solid var(--border);
  border-bottom: 1px solid var(--border);
  margin-bottom: var(--space-16);
}

.case-summary h4 {
  font-size: 0.75rem;
  letter-spacing: 0.08em;
  text-transform: uppercase;
  color: var(--text-tertiary);
  margin-bottom: var(--space-2);
}

.case-overview {
  margin-bottom: var(--space-16);
}

.case-section {
  max-width: var(--prose-width);
  margin: 0 auto var(--space-16);
}

.case-section.wide {
  max-width: none;
}

.case-section-header {
  display: flex;
  align-items: baseline;
  gap: var(--space-4);
  margin-bottom: var(--space-8);
}

.case-section-number {
  font-family: var(--font-display);
  font-size: 1rem;
  color: var(--accent);
}

.case-section-title {
  font-family: var(--font-display);
  font-size: clamp(1.5rem, 3vw, 2.25rem);
}

.prose {
  margin-bottom: var(--space-8);
}

.prose h4 {
  font-size: 1.125rem;
  margin-bottom: var(--space-2);
}

.prose p {
  color: var(--text-secondary);
}

.highlights {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: var(--space-6);
  margin-bottom: var(--space-8);
}

.highlight {
  display: flex;
  gap: var(--space-4);
}

.highlight svg {
  flex: none;
  width: 24px;
  height: 24px;
  color: var(--accent);
}

.highlight h5 {
  font-size: 1rem;
  margin-bottom: var(--space-1);
}

.highlight p,
.card p {
  color: var(--text-secondary);
  font-size: 0.9375rem;
}

.cards {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: var(--space-6);
  margin-bottom: var(--space-8);
}

.card {
  padding: var(--space-6);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  box-shadow: var(--shadow-md);
}

.card h5 {
  font-size: 1rem;
  margin-bottom: var(--space-2);
}

.stat {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  padding: var(--space-8);
  border-left: 3px solid var(--accent);
  margin-bottom: var(--space-8);
}

.stat-value {
  font-family: var(--font-display);
  font-size: 3rem;
  line-height: 1;
  color: var(--accent);
}

.stat-label {
  font-weight: 600;
}

.bullets {
  padding-left: var(--space-6);
  margin-bottom: var(--space-8);
  color: var(--text-secondary);
}

.bullets li {
  margin-bottom: var(--space-2);
}

.case-media {
  margin-bottom: var(--space-8);
}

/* More projects */
.more-projects {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--space-16) var(--space-6);
  border-top: 1px solid var(--border);
}

.more-projects-list {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: var(--space-6);
  margin: var(--space-8) 0;
}

.more-project {
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
  padding: var(--space-6);
  border: 1px solid var(--border);
  border-radius: var(--radius-lg);
  color: var(--text-primary);
}

.more-project:hover {
  border-color: var(--accent);
  text-decoration: none;
}

.more-project h4 {
  font-family: var(--font-display);
  font-size: 1.25rem;
}

@media (max-width: 768px) {
  .case-summary,
  .highlights {
    grid-template-columns: 1fr;
  }
}
"#;
