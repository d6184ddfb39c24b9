// layout and motion tokens
//
// colors, type and component shapes come from the active theme (see ThemeProvider); these
// are the parts that do not change between light and dark
pub const CSS_VARIABLES: &str = r#"
:root {
  /* Layout */
  --header-height: 64px;
  --container-width: 1200px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-5: 20px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-12: 48px;
  --space-16: 64px;

  /* Border Radius */
  --radius-sm: 4px;
  --radius-full: 9999px;

  /* Shadows that do not depend on the theme */
  --shadow-focus: 0 0 0 3px rgba(194, 65, 12, 0.3);
  --shadow-raised: 0 6px 16px rgba(0, 0, 0, 0.18);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 250ms;
  --transition-slow: 350ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}"#;
