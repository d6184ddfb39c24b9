pub const HOME_STYLES: &str = r#"
/* Home Page Styles */

.home-container {
  display: flex;
  flex-direction: column;
}

section {
  padding: var(--space-12) 0;
}

/* Hero Section */
.hero {
  background: linear-gradient(135deg, var(--secondary), var(--primary));
  color: #FFFFFF;
  padding: var(--space-16) 0;
  text-align: center;
}

.hero-content {
  max-width: 800px;
  margin: 0 auto;
}

.hero-title {
  font-family: var(--font-heading);
  font-size: var(--h1-size);
  font-weight: var(--h1-weight);
  line-height: var(--h1-line-height);
  margin-bottom: var(--space-4);
  letter-spacing: 0.01em;
}

.hero-subtitle {
  font-size: 1.375rem;
  margin-bottom: var(--space-8);
  opacity: 0.9;
}

.hero-actions {
  display: flex;
  gap: var(--space-4);
  justify-content: center;
  flex-wrap: wrap;
}

.hero .btn-secondary {
  color: #FFFFFF;
  border-color: rgba(255, 255, 255, 0.6);
}

.hero .btn-secondary:hover {
  background-color: rgba(255, 255, 255, 0.12);
}

/* Features */
.feature-card {
  height: 100%;
  text-align: center;
}

.feature-icon {
  font-size: 2rem;
  margin-bottom: var(--space-3);
}

.feature-title {
  font-family: var(--font-heading);
  font-size: var(--h4-size);
  font-weight: var(--h4-weight);
  margin-bottom: var(--space-2);
}

.feature-desc {
  color: var(--text-secondary);
}

/* Call to action */
.cta-section {
  background-color: var(--surface);
  border-top: 1px solid var(--border);
  text-align: center;
}

.cta-title {
  font-family: var(--font-heading);
  font-size: var(--h2-size);
  font-weight: var(--h2-weight);
  margin-bottom: var(--space-3);
}

.cta-text {
  color: var(--text-secondary);
  margin-bottom: var(--space-6);
}

@media (max-width: 599px) {
  .hero {
    padding: var(--space-10) 0;
  }

  .hero-title {
    font-size: var(--h2-size);
  }

  .hero-subtitle {
    font-size: 1.125rem;
  }
}
"#;
