use constcat::concat;

mod components;
mod home;
mod pages;
mod variables;

use components::BASE_COMPONENTS;
use home::HOME_STYLES;
use pages::PAGE_STYLES;
use variables::CSS_VARIABLES;

// everything except the theme block, which ThemeProvider renders on its own so that it can
// change without re-emitting the rest of the sheet
pub const MODERN_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: var(--font-body);
  font-size: var(--body-size);
  line-height: var(--body-line-height);
  color: var(--text-primary);
  background-color: var(--background);
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
r#"
/* Application-specific styles */
.app-header {
  background-color: var(--surface);
  box-shadow: var(--app-bar-shadow);
  position: sticky;
  top: 0;
  z-index: 10;
}

.nav-container {
  display: flex;
  min-height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  flex-wrap: wrap;
  gap: var(--space-2);
}

.logo a {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  color: var(--text-primary);
  font-family: var(--font-heading);
  font-weight: 700;
  font-size: 1.25rem;
}

.logo a:hover {
  text-decoration: none;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-2);
  flex-wrap: wrap;
}

.nav-link {
  color: var(--text-secondary);
  font-weight: 500;
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-sm);
  transition: color var(--transition-fast) var(--easing-standard),
  background-color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--text-primary);
  background-color: var(--border);
  text-decoration: none;
}

.nav-link.active {
  color: var(--primary);
}

.app-header.compact .nav-container {
  padding-top: var(--space-2);
  padding-bottom: var(--space-2);
}

.app-header.compact .nav-links {
  width: 100%;
  justify-content: space-between;
  gap: var(--space-1);
}

.app-header.compact .nav-link {
  padding: var(--space-1) var(--space-2);
}

.page-content {
  min-height: calc(100vh - var(--header-height));
}

.section-title {
  font-family: var(--font-heading);
  font-size: var(--h3-size);
  font-weight: var(--h3-weight);
  margin-bottom: var(--space-6);
  color: var(--text-primary);
}

.app-footer {
  background-color: var(--surface);
  border-top: 1px solid var(--border);
  color: var(--text-secondary);
  padding: var(--space-8) 0;
  font-size: var(--caption-size);
}

.footer-inner {
  display: flex;
  justify-content: space-between;
  flex-wrap: wrap;
  gap: var(--space-4);
}
"#,
    HOME_STYLES,
    PAGE_STYLES
);
