//! Global CSS styles for the portfolio page.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backgrounds */
  --ink-black: #0c0d10;
  --ink-panel: #14161b;
  --ink-border: #23262e;

  /* Accent */
  --amber: #f5a524;
  --amber-glow: rgba(245, 165, 36, 0.35);
  --teal: #2dd4bf;
  --teal-glow: rgba(45, 212, 191, 0.3);

  /* Text */
  --text-primary: #f2f2f2;
  --text-secondary: rgba(242, 242, 242, 0.7);
  --text-muted: rgba(242, 242, 242, 0.45);

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Transitions */
  --fast: 0.15s ease;
  --smooth: 0.3s ease;

  /* Layout */
  --card-gap: 16px;
  --section-pad: 4rem 2rem;
}

* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  background: var(--ink-black);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.6;
}

section {
  padding: var(--section-pad);
  max-width: 1100px;
  margin: 0 auto;
}

.section-title {
  font-size: 2rem;
  margin-bottom: 2rem;
}

.section-title::after {
  content: "";
  display: block;
  width: 56px;
  height: 3px;
  margin-top: 0.5rem;
  background: var(--amber);
}

/* === Navigation === */
.nav {
  position: sticky;
  top: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 2rem;
  background: rgba(12, 13, 16, 0.92);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--ink-border);
}

.nav__brand {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--amber);
  text-decoration: none;
}

.nav__links {
  display: flex;
  gap: 1.5rem;
  list-style: none;
  align-items: center;
}

.nav__link {
  color: var(--text-secondary);
  text-decoration: none;
  transition: color var(--fast);
}

.nav__link:hover {
  color: var(--text-primary);
}

.nav__toggle {
  display: none;
  flex-direction: column;
  gap: 4px;
  background: none;
  border: none;
  cursor: pointer;
  padding: 6px;
}

.nav__toggle-bar {
  width: 22px;
  height: 2px;
  background: var(--text-primary);
}

.nav__scrim {
  position: fixed;
  inset: 0;
  z-index: 90;
}

.nav__dropdown {
  position: relative;
}

.nav__dropbtn {
  background: none;
  border: none;
  color: var(--text-secondary);
  font: inherit;
  cursor: pointer;
  transition: color var(--fast);
}

.nav__dropbtn:hover {
  color: var(--text-primary);
}

.nav__dropdown-list {
  display: none;
  position: absolute;
  top: 100%;
  right: 0;
  min-width: 160px;
  list-style: none;
  background: var(--ink-panel);
  border: 1px solid var(--ink-border);
  border-radius: 8px;
  padding: 0.5rem 0;
}

.nav__dropdown.is-open .nav__dropdown-list {
  display: block;
}

.nav__dropdown-list .nav__link {
  display: block;
  padding: 0.5rem 1rem;
}

@media (max-width: 768px) {
  .nav__toggle {
    display: flex;
  }

  .nav__links {
    display: none;
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    flex-direction: column;
    align-items: stretch;
    gap: 0;
    background: var(--ink-panel);
    border-bottom: 1px solid var(--ink-border);
    padding: 0.5rem 0;
    z-index: 95;
  }

  .nav__links.is-open {
    display: flex;
  }

  .nav__links .nav__link {
    display: block;
    padding: 0.75rem 2rem;
  }

  .nav__dropdown-list {
    position: static;
    border: none;
    background: transparent;
    padding-left: 1rem;
  }
}

/* === Hero === */
.hero {
  text-align: center;
  padding: 6rem 2rem 4rem;
}

.hero__title {
  font-size: 2.75rem;
  margin-bottom: 0.75rem;
}

.hero__tagline {
  color: var(--text-secondary);
  font-size: 1.15rem;
  max-width: 540px;
  margin: 0 auto;
}

/* === Skills === */
.skills {
  display: grid;
  gap: 1.25rem;
  max-width: 640px;
}

.skill__header {
  display: flex;
  justify-content: space-between;
  margin-bottom: 0.35rem;
}

.skill__name {
  font-weight: 600;
}

.skill__percent {
  color: var(--text-muted);
}

.progress {
  height: 8px;
  border-radius: 4px;
  background: var(--ink-border);
  overflow: hidden;
}

.progress__fill {
  display: block;
  height: 100%;
  border-radius: 4px;
  background: linear-gradient(90deg, var(--teal), var(--amber));
  transition: width 1.1s ease;
}

/* === Services carousel === */
.services__viewport {
  position: relative;
}

.services__track {
  display: flex;
  gap: var(--card-gap);
  overflow-x: auto;
  scroll-snap-type: x mandatory;
  scrollbar-width: none;
  padding-bottom: 0.5rem;
}

.services__track::-webkit-scrollbar {
  display: none;
}

.service-card {
  flex: 0 0 300px;
  scroll-snap-align: start;
  background: var(--ink-panel);
  border: 1px solid var(--ink-border);
  border-radius: 12px;
  overflow: hidden;
  cursor: pointer;
  transition: border-color var(--fast), transform var(--fast);
}

.service-card:hover {
  border-color: var(--amber);
  transform: translateY(-2px);
}

.service-card__img {
  width: 100%;
  height: 170px;
  object-fit: cover;
  background: var(--ink-border);
}

.service-card__body {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem;
}

.service-card__title {
  font-size: 1.05rem;
}

.service-arrow {
  background: none;
  border: 1px solid var(--ink-border);
  border-radius: 50%;
  width: 32px;
  height: 32px;
  color: var(--amber);
  cursor: pointer;
  transition: border-color var(--fast), background var(--fast);
}

.service-arrow:hover {
  border-color: var(--amber);
  background: var(--amber-glow);
}

.nav-btn {
  position: absolute;
  top: 40%;
  z-index: 5;
  width: 36px;
  height: 36px;
  border-radius: 50%;
  border: 1px solid var(--ink-border);
  background: var(--ink-panel);
  color: var(--text-primary);
  cursor: pointer;
  transition: border-color var(--fast);
}

.nav-btn:hover {
  border-color: var(--amber);
}

.nav-btn.prev {
  left: -14px;
}

.nav-btn.next {
  right: -14px;
}

.services__dots {
  display: flex;
  justify-content: center;
  gap: 8px;
  margin-top: 1rem;
}

.dot {
  width: 9px;
  height: 9px;
  border-radius: 50%;
  border: none;
  background: var(--ink-border);
  cursor: pointer;
  transition: background var(--fast), transform var(--fast);
}

.dot.is-active {
  background: var(--amber);
  transform: scale(1.25);
}

/* === Service modal === */
.service-modal {
  position: fixed;
  inset: 0;
  z-index: 200;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.65);
  outline: none;
}

.service-modal__panel {
  width: min(520px, calc(100vw - 2rem));
  background: var(--ink-panel);
  border: 1px solid var(--ink-border);
  border-radius: 14px;
  overflow: hidden;
  position: relative;
}

.service-modal__close {
  position: absolute;
  top: 10px;
  right: 10px;
  z-index: 1;
  width: 32px;
  height: 32px;
  border-radius: 50%;
  border: none;
  background: rgba(0, 0, 0, 0.5);
  color: var(--text-primary);
  cursor: pointer;
}

.service-modal__img {
  width: 100%;
  height: 230px;
  object-fit: cover;
  background: var(--ink-border);
}

.service-modal__body {
  padding: 1.25rem 1.5rem 1.5rem;
}

.service-modal__title {
  margin-bottom: 0.5rem;
}

.service-modal__text {
  color: var(--text-secondary);
  margin-bottom: 1.25rem;
}

.service-modal__actions {
  display: flex;
  gap: 0.75rem;
}

.service-modal__btn {
  padding: 0.6rem 1.2rem;
  border-radius: 8px;
  font: inherit;
  cursor: pointer;
  text-decoration: none;
}

.service-modal__btn--primary {
  background: var(--amber);
  border: none;
  color: var(--ink-black);
}

.service-modal__btn--ghost {
  background: none;
  border: 1px solid var(--ink-border);
  color: var(--text-secondary);
}

/* === Projects === */
.filter-bar {
  display: flex;
  gap: 0.6rem;
  margin-bottom: 1.5rem;
  flex-wrap: wrap;
}

.filter-btn {
  padding: 0.45rem 1.1rem;
  border-radius: 999px;
  border: 1px solid var(--ink-border);
  background: none;
  color: var(--text-secondary);
  font: inherit;
  cursor: pointer;
  transition: border-color var(--fast), color var(--fast);
}

.filter-btn:hover {
  color: var(--text-primary);
}

.filter-btn.is-active {
  border-color: var(--amber);
  background: var(--amber-glow);
  color: var(--text-primary);
}

.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1.25rem;
}

.project-card {
  background: var(--ink-panel);
  border: 1px solid var(--ink-border);
  border-radius: 12px;
  overflow: hidden;
  transition: border-color var(--fast);
}

.project-card:hover {
  border-color: var(--teal);
}

.project-card.is-hidden {
  display: none;
}

.project-card__img {
  width: 100%;
  height: 160px;
  object-fit: cover;
  background: var(--ink-border);
}

.project-card__body {
  padding: 0.85rem 1rem;
}

.project-card__category {
  color: var(--text-muted);
  font-size: 0.85rem;
  text-transform: uppercase;
  letter-spacing: 0.05em;
}

/* === Contact === */
.contact {
  text-align: center;
  color: var(--text-secondary);
  padding-bottom: 6rem;
}
"#;
