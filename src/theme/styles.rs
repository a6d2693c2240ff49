//! Global CSS styles for the Guide Directory.
//!
//! Dark surface with an orange accent, the same palette the generated guide
//! pages use.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --bg: #121212;
  --bg-raised: #1e1e1e;
  --border: #2a2a2a;

  /* Accent */
  --accent: #ff6600;
  --accent-glow: rgba(255, 102, 0, 0.3);

  /* Text */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* Typography */
  --font-sans: 'Outfit', system-ui, sans-serif;

  /* Magnetic hover offset */
  --mag-x: 0px;
  --mag-y: 0px;
}

/* === Base === */
* {
  box-sizing: border-box;
}

body {
  margin: 0;
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  transition: opacity 0.4s ease, transform 0.4s ease;
}

/* === Page Transitions === */
body.page-exit-active {
  opacity: 0;
  transform: translateY(-8px);
}

body.page-enter-active {
  animation: pageEnter 0.5s ease-out;
}

@keyframes pageEnter {
  from { opacity: 0; transform: translateY(8px); }
  to { opacity: 1; transform: translateY(0); }
}

/* === Layout === */
.directory-page {
  max-width: 720px;
  margin: 0 auto;
  padding: 3rem 1.5rem;
}

.directory-title {
  font-size: 2.5rem;
  font-weight: 600;
  margin: 0 0 1.5rem;
  color: var(--accent);
  opacity: 0;
  animation: textCreation 0.5s ease-out forwards;
}

@keyframes textCreation {
  from { opacity: 0; transform: translateY(6px); filter: blur(4px); }
  to { opacity: 1; transform: translateY(0); filter: blur(0); }
}

/* === Search === */
.search-input-wrapper {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem 1rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 8px;
}

.search-input-wrapper:focus-within {
  border-color: var(--accent);
  box-shadow: 0 0 0 3px var(--accent-glow);
}

.input-field {
  flex: 1;
  background: transparent;
  border: none;
  outline: none;
  color: var(--text-primary);
  font: inherit;
  font-size: 1rem;
}

.input-field::placeholder {
  color: var(--text-muted);
}

/* === Status === */
.status-message {
  margin: 1.5rem 0 0;
  color: var(--text-secondary);
}

.status-note {
  display: inline-block;
  margin-top: 0.5rem;
  font-size: 0.875rem;
  color: var(--text-muted);
}

/* === Guide List === */
#guideList {
  list-style: none;
  margin: 1.5rem 0 0;
  padding: 0;
}

#guideList li {
  margin-bottom: 0.5rem;
  transition: transform 0.2s ease-out;
}

#guideList li a {
  display: block;
  padding: 0.875rem 1rem;
  background: var(--bg-raised);
  border: 1px solid var(--border);
  border-radius: 8px;
  color: var(--text-primary);
  text-decoration: none;
}

#guideList li a:hover {
  border-color: var(--accent);
}

.guide-name {
  font-weight: 500;
}

.list-item-animate {
  opacity: 0;
  animation: listItemIn 0.35s ease-out forwards;
}

@keyframes listItemIn {
  from { opacity: 0; transform: translateY(6px); }
  to { opacity: 1; transform: translateY(0); }
}

.is-magnetic-hover {
  transform: translate(var(--mag-x), var(--mag-y));
}

.list-item-animate.is-magnetic-hover {
  opacity: 1;
  animation: none;
}
"#;
