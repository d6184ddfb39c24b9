pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--button-radius);
  text-transform: var(--button-text-transform);
  font-weight: 600;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
  border: none;
  outline: none;
}

.btn:focus {
  box-shadow: var(--shadow-focus);
}

.btn:active {
  transform: translateY(1px);
}

.btn:hover {
  text-decoration: none;
}

.btn-primary {
  background-color: var(--primary);
  color: var(--primary-contrast);
}

.btn-primary:hover {
  filter: brightness(0.92);
}

.btn-secondary {
  background-color: transparent;
  color: var(--text-primary);
  border: 1px solid var(--border);
}

.btn-secondary:hover {
  background-color: var(--border);
}

.btn-sm {
  padding: var(--space-1) var(--space-3);
  font-size: 0.875rem;
}

.btn-lg {
  padding: var(--space-3) var(--space-5);
  font-size: 1.125rem;
}

.btn[disabled] {
  opacity: 0.5;
  cursor: default;
}

/* Cards */
.card {
  background-color: var(--surface);
  border-radius: var(--card-radius);
  box-shadow: var(--card-shadow);
  border: 1px solid var(--border);
  overflow: hidden;
  transition: transform var(--transition-normal) var(--easing-standard);
}

.card:hover {
  transform: translateY(-2px);
}

.card-body {
  padding: var(--space-5);
}

/* Product cards */
.product-card {
  display: flex;
  flex-direction: column;
  height: 100%;
}

.product-category {
  font-size: var(--caption-size);
  line-height: var(--caption-line-height);
  color: var(--secondary);
  text-transform: uppercase;
  letter-spacing: 0.06em;
  margin-bottom: var(--space-1);
}

.product-name {
  font-family: var(--font-heading);
  font-size: var(--h4-size);
  font-weight: var(--h4-weight);
  line-height: var(--h4-line-height);
  margin-bottom: var(--space-2);
}

.product-desc {
  color: var(--text-secondary);
  flex: 1;
  margin-bottom: var(--space-4);
}

.product-price {
  font-weight: 700;
  font-size: 1.125rem;
  color: var(--primary);
}

/* Form Elements */
.form-group {
  margin-bottom: var(--space-4);
}

.form-label {
  display: block;
  margin-bottom: var(--space-2);
  font-weight: 500;
  color: var(--text-secondary);
}

.form-input,
.form-textarea {
  width: 100%;
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--input-radius);
  background-color: var(--surface);
  color: var(--text-primary);
  font: inherit;
  transition: border-color var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
}

.form-input:focus,
.form-textarea:focus {
  border-color: var(--primary);
  box-shadow: var(--shadow-focus);
  outline: none;
}

.form-textarea {
  min-height: 140px;
  resize: vertical;
}

.form-note {
  font-size: var(--caption-size);
  color: var(--text-secondary);
  margin-top: var(--space-2);
}

/* Pager */
.pager {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-4);
  padding: var(--space-8) 0;
}

.pager-status {
  color: var(--text-secondary);
}

/* Floating scroll-to-top button */
.scroll-top-button {
  position: fixed;
  right: var(--space-6);
  bottom: var(--space-6);
  width: 48px;
  height: 48px;
  border-radius: var(--radius-full);
  border: none;
  background-color: var(--primary);
  color: var(--primary-contrast);
  font-size: 1.25rem;
  box-shadow: var(--shadow-raised);
  cursor: pointer;
  z-index: 20;
  opacity: 0;
  pointer-events: none;
  transform: translateY(12px);
  transition: opacity var(--transition-normal) var(--easing-standard),
              transform var(--transition-normal) var(--easing-standard);
}

.scroll-top-button.visible {
  opacity: 1;
  pointer-events: auto;
  transform: translateY(0);
}

/* Theme toggle */
.theme-toggle {
  background: none;
  border: 1px solid var(--border);
  border-radius: var(--radius-full);
  color: var(--text-primary);
  padding: var(--space-1) var(--space-3);
  cursor: pointer;
  font: inherit;
}
"#;
