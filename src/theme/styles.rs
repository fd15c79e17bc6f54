//! Global CSS styles for Holocron.
//!
//! Dark archive aesthetic: deep space backgrounds, gold specials, violet
//! limited editions.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SPACE (Backgrounds) */
  --space-black: #0b0c10;
  --space-panel: #13151c;
  --space-border: #23263a;

  /* SABER BLUE (Links, Actions) */
  --saber: #4aa8ff;
  --saber-glow: rgba(74, 168, 255, 0.3);

  /* GOLD (Special Cards, Titles) */
  --gold: #e3b341;
  --gold-glow: rgba(227, 179, 65, 0.35);

  /* VIOLET (Limited Edition Cards) */
  --violet: #b687f0;
  --violet-glow: rgba(182, 135, 240, 0.35);

  /* TEXT */
  --text-primary: #f2f3f5;
  --text-secondary: rgba(242, 243, 245, 0.7);
  --text-muted: rgba(242, 243, 245, 0.5);

  /* SEMANTIC */
  --success: #4caf7d;
  --danger: #ff4d6a;
  --warning: #ffa23e;
  --info: #5f8fff;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--space-black);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Navigation === */
.nav-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem 2rem;
  background: var(--space-panel);
  border-bottom: 1px solid var(--space-border);
}

.nav-title {
  font-size: var(--text-xl);
  font-weight: 700;
  color: var(--gold);
  text-decoration: none;
  text-shadow: 0 0 20px var(--gold-glow);
  letter-spacing: 0.08em;
}

.nav-links {
  display: flex;
  gap: 1.5rem;
}

.nav-link {
  color: var(--text-secondary);
  text-decoration: none;
  font-size: var(--text-sm);
  letter-spacing: 0.05em;
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--saber);
}

.nav-link--active {
  color: var(--text-primary);
  border-bottom: 2px solid var(--saber);
}

.nav-points {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  color: var(--gold);
  background: rgba(227, 179, 65, 0.1);
  border: 1px solid var(--gold);
  border-radius: 999px;
  padding: 0.25rem 0.9rem;
}

.nav-points--loading {
  color: var(--text-muted);
}

/* === Page Layout === */
.page {
  max-width: 1060px;
  margin: 0 auto;
  padding: 2rem;
}

/* === Hero (Home) === */
.hero {
  text-align: center;
  padding: 3rem 1rem 2rem;
}

.hero-title {
  font-size: var(--text-3xl);
  color: var(--gold);
  text-shadow: 0 0 30px var(--gold-glow);
  letter-spacing: 0.12em;
}

.hero-tagline {
  max-width: 560px;
  margin: 1rem auto 0;
  color: var(--text-secondary);
}

.hero-actions {
  display: flex;
  gap: 1rem;
  justify-content: center;
  margin-top: 2rem;
}

.home-progress,
.home-archive {
  margin-top: 3rem;
}

.archive-stats {
  display: flex;
  gap: 1.5rem;
  margin-top: 1rem;
}

.archive-stat {
  flex: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  background: var(--space-panel);
  border: 1px solid var(--space-border);
  border-radius: 10px;
  padding: 1.5rem;
}

.archive-stat-number {
  font-family: var(--font-mono);
  font-size: var(--text-2xl);
  color: var(--saber);
}

.archive-stat-label {
  font-size: var(--text-sm);
  color: var(--text-muted);
  letter-spacing: 0.08em;
  text-transform: uppercase;
}

.archive-loading,
.album-loading,
.album-empty {
  color: var(--text-muted);
  font-style: italic;
  margin-top: 1rem;
}

/* === Progress Bars === */
.progress-track {
  height: 8px;
  border-radius: 999px;
  background: var(--space-border);
  overflow: hidden;
  margin-top: 0.5rem;
}

.progress-fill {
  height: 100%;
  border-radius: 999px;
  background: linear-gradient(90deg, var(--saber), var(--gold));
  transition: width var(--transition-normal);
}

/* === Buttons === */
.btn {
  display: inline-block;
  font-family: var(--font-sans);
  font-size: var(--text-sm);
  letter-spacing: 0.04em;
  padding: 0.6rem 1.4rem;
  border-radius: 8px;
  border: 1px solid transparent;
  cursor: pointer;
  text-decoration: none;
  transition: all var(--transition-fast);
}

.btn:disabled {
  opacity: 0.45;
  cursor: not-allowed;
}

.btn--primary {
  background: var(--saber);
  color: var(--space-black);
}

.btn--primary:hover:not(:disabled) {
  box-shadow: 0 0 16px var(--saber-glow);
}

.btn--ghost {
  background: transparent;
  color: var(--text-secondary);
  border-color: var(--space-border);
}

.btn--ghost:hover:not(:disabled) {
  color: var(--text-primary);
  border-color: var(--saber);
}

.btn--danger {
  background: transparent;
  color: var(--danger);
  border-color: var(--danger);
}

.btn--danger:hover:not(:disabled) {
  background: var(--danger);
  color: var(--space-black);
}

.btn--wide {
  display: block;
  width: 100%;
  margin-top: 1rem;
}

/* === Shop === */
.shop-header {
  display: flex;
  align-items: baseline;
  justify-content: space-between;
}

.shop-wallet {
  font-family: var(--font-mono);
  color: var(--gold);
}

.shop-blurb {
  color: var(--text-secondary);
  margin-top: 0.5rem;
}

.shop-cooldown {
  font-family: var(--font-mono);
  color: var(--warning);
  margin-top: 0.75rem;
}

.shop-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
  gap: 1.5rem;
  margin-top: 2rem;
}

/* === Pack Cards === */
.pack-card {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.25rem;
  background: var(--space-panel);
  border: 1px solid var(--space-border);
  border-radius: 12px;
  padding: 2rem 1rem 1.5rem;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.pack-card:hover {
  border-color: var(--saber);
  transform: translateY(-2px);
}

.pack-card--disabled {
  opacity: 0.55;
  cursor: not-allowed;
}

.pack-card--disabled:hover {
  border-color: var(--space-border);
  transform: none;
}

.pack-card-emblem {
  font-size: 2.5rem;
}

.pack-card-title {
  font-size: var(--text-lg);
}

.pack-card-size {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.pack-card-cost {
  font-family: var(--font-mono);
  color: var(--gold);
}

.pack-info-teaser {
  color: var(--text-secondary);
}

.pack-info-warning {
  color: var(--warning);
  margin-top: 0.75rem;
}

.pack-info-configs {
  margin-top: 1rem;
  color: var(--text-secondary);
}

.pack-info-configs ul {
  list-style: none;
  margin-top: 0.5rem;
}

.pack-info-configs li {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
}

.pack-info-wallet {
  margin-top: 1rem;
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  color: var(--text-muted);
}

/* === Badges === */
.badge {
  display: inline-block;
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  padding: 0.15rem 0.6rem;
  border-radius: 999px;
  border: 1px solid var(--space-border);
  color: var(--text-secondary);
}

.badge--cooldown {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  color: var(--warning);
  border-color: var(--warning);
}

.badge--active {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  color: var(--success);
  border-color: var(--success);
}

.badge--gold {
  color: var(--gold);
  border-color: var(--gold);
  box-shadow: 0 0 10px var(--gold-glow);
}

.badge--limited {
  color: var(--violet);
  border-color: var(--violet);
  box-shadow: 0 0 10px var(--violet-glow);
}

/* === Collection Cards === */
.card {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.4rem;
  background: var(--space-panel);
  border: 1px solid var(--space-border);
  border-radius: 12px;
  padding: 1.25rem 1rem;
  min-height: 220px;
  width: 100%;
}

.card--gold {
  border-color: var(--gold);
  box-shadow: 0 0 18px var(--gold-glow);
}

.card--limited {
  border-color: var(--violet);
  box-shadow: 0 0 18px var(--violet-glow);
}

.card-emblem {
  font-size: 2rem;
}

.card-name {
  font-size: var(--text-base);
  text-align: center;
}

.card-attributes {
  list-style: none;
  font-size: var(--text-xs);
  color: var(--text-secondary);
  text-align: center;
}

.card-offline {
  font-size: var(--text-xs);
  color: var(--text-muted);
  font-style: italic;
}

/* === Pack Reveal === */
.reveal-suspense {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.5rem;
  padding: 3rem 0;
  color: var(--text-secondary);
}

.reveal-glow {
  width: 80px;
  height: 80px;
  border-radius: 50%;
  background: radial-gradient(circle, var(--gold-glow), transparent 70%);
  animation: reveal-pulse 1.2s ease-in-out infinite;
}

@keyframes reveal-pulse {
  0%, 100% { transform: scale(1); opacity: 0.6; }
  50% { transform: scale(1.25); opacity: 1; }
}

.reveal-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(180px, 1fr));
  gap: 1rem;
  margin-top: 1rem;
}

.reveal-slot {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
}

.reveal-actions {
  display: flex;
  gap: 0.5rem;
}

.reveal-fate {
  font-size: var(--text-xs);
  color: var(--text-muted);
  font-style: italic;
}

.reveal-hint {
  margin-top: 1.5rem;
  font-size: var(--text-sm);
  color: var(--text-muted);
  text-align: center;
}

/* === Album === */
.album-header {
  display: flex;
  align-items: baseline;
  gap: 1.5rem;
}

.album-header h1 {
  flex: 1;
}

.album-summary {
  font-family: var(--font-mono);
  color: var(--text-secondary);
}

.album-section {
  margin-top: 2.5rem;
}

.album-section-header {
  display: flex;
  align-items: baseline;
  justify-content: space-between;
}

.album-section-count {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  color: var(--text-muted);
}

/* === Carousel === */
.carousel {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-top: 1rem;
}

.carousel-strip {
  display: flex;
  gap: 1rem;
  flex: 1;
}

.carousel-item {
  flex: 1;
  min-width: 0;
}

.carousel-control {
  background: var(--space-panel);
  border: 1px solid var(--space-border);
  border-radius: 8px;
  color: var(--text-secondary);
  font-family: var(--font-mono);
  padding: 0.5rem 0.75rem;
  cursor: pointer;
  transition: all var(--transition-fast);
}

.carousel-control:hover {
  color: var(--saber);
  border-color: var(--saber);
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.7);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 100;
}

.modal-body {
  position: relative;
  background: var(--space-panel);
  border: 1px solid var(--space-border);
  border-radius: 12px;
  padding: 2rem;
  width: min(480px, 90vw);
  max-height: 85vh;
  overflow-y: auto;
}

.modal-body--wide {
  width: min(960px, 94vw);
}

.modal-title {
  font-size: var(--text-xl);
  color: var(--gold);
  margin-bottom: 1rem;
}

.modal-close {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  background: transparent;
  border: none;
  color: var(--text-muted);
  font-family: var(--font-mono);
  font-size: var(--text-base);
  cursor: pointer;
}

.modal-close:hover {
  color: var(--text-primary);
}

.modal-actions {
  display: flex;
  gap: 1rem;
  margin-top: 1.5rem;
}

/* === Toasts === */
.toast-stack {
  position: fixed;
  top: 1rem;
  right: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  z-index: 200;
}

.toast {
  font-size: var(--text-sm);
  background: var(--space-panel);
  border: 1px solid var(--space-border);
  border-left-width: 4px;
  border-radius: 8px;
  padding: 0.75rem 1.25rem;
  max-width: 340px;
  animation: toast-in 200ms ease;
}

@keyframes toast-in {
  from { transform: translateX(1rem); opacity: 0; }
  to { transform: translateX(0); opacity: 1; }
}

.toast-success { border-left-color: var(--success); }
.toast-error   { border-left-color: var(--danger); }
.toast-warning { border-left-color: var(--warning); }
.toast-info    { border-left-color: var(--info); }
"#;
