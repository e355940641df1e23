pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #F59E0B;          /* Marquee amber */
  --primary-light: #FBBF24;
  --primary-dark: #D97706;

  /* Neutrals */
  --neutral-100: #F3F4F6;
  --neutral-400: #9CA3AF;
  --neutral-500: #6B7280;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;
  --neutral-950: #0B0F1A;

  /* Semantic Colors */
  --success: #10B981;
  --error: #EF4444;
  --info: #3B82F6;

  /* Background and Surface Colors */
  --background: var(--neutral-950);
  --surface: var(--neutral-900);
  --surface-raised: var(--neutral-800);

  /* Text Colors */
  --text-primary: var(--neutral-100);
  --text-secondary: var(--neutral-400);
  --text-inverse: var(--neutral-900);

  /* Border Colors */
  --border: var(--neutral-700);
  --border-focus: var(--primary);

  /* Layout */
  --header-height: 60px;
  --container-width: 1280px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;

  /* Border Radius */
  --radius-md: 6px;
  --radius-lg: 8px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.4);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.5), 0 4px 6px -2px rgba(0, 0, 0, 0.4);

  /* Animation */
  --transition-fast: 150ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}"#;
