pub const PAGE_STYLES: &str = r#"
/* About, Contact, Products and fallback pages */

.page-header {
  padding: var(--space-10) 0 var(--space-6);
}

.page-title {
  font-family: var(--font-heading);
  font-size: var(--h2-size);
  font-weight: var(--h2-weight);
  line-height: var(--h2-line-height);
  margin-bottom: var(--space-2);
}

.page-lead {
  font-size: 1.125rem;
  color: var(--text-secondary);
  max-width: 720px;
}

.prose p {
  margin-bottom: var(--space-4);
  max-width: 720px;
}

.values-list {
  list-style: none;
  display: grid;
  gap: var(--space-3);
  margin: var(--space-6) 0;
}

.values-list li {
  padding-left: var(--space-6);
  position: relative;
}

.values-list li::before {
  content: "\2713";
  position: absolute;
  left: 0;
  color: var(--primary);
  font-weight: 700;
}

.hours-list {
  list-style: none;
}

.hours-list li {
  padding: var(--space-1) 0;
  border-bottom: 1px solid var(--border);
}

.contact-details dt {
  font-weight: 600;
  margin-top: var(--space-4);
}

.contact-details dd {
  color: var(--text-secondary);
}

.not-found {
  text-align: center;
  padding: var(--space-16) 0;
}

.not-found-code {
  font-family: var(--font-heading);
  font-size: 4rem;
  color: var(--primary);
}
"#;
