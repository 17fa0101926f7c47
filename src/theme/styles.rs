//! Global CSS styles for Cardforge.
//!
//! The skin classes here mirror the scene compositor's palette so the live
//! preview and the exported PNG read the same.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* App chrome */
  --bg: #0f1016;
  --bg-raised: #181a23;
  --border: #272a38;
  --text-primary: #f4f4f6;
  --text-secondary: rgba(244, 244, 246, 0.7);
  --text-muted: rgba(244, 244, 246, 0.45);
  --accent: #8b5cf6;
  --accent-strong: #7c3aed;

  /* Skin palette (kept in step with the render core) */
  --glass-top: #1a1a2e;
  --glass-bottom: #16213e;
  --orb-purple: #8b5cf6;
  --orb-pink: #ec4899;
  --orb-cyan: #22d3ee;
  --neon-bg: #05010d;
  --neon-cyan: #00e5ff;
  --neon-pink: #ff2ec4;
  --brand: #4f46e5;
  --brand-accent: #c7d2fe;
  --minimal-light-bg: #fafafa;
  --minimal-dark-bg: #101014;
  --ink: #18181b;
  --paper: #f5f5f7;
  --neu-bg: #e0e5ec;
  --neu-text: #44476a;
  --neu-shadow: #a3b1c6;

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

body {
  background: var(--bg);
  color: var(--text-primary);
  font-family: 'Inter', 'Segoe UI', system-ui, sans-serif;
  -webkit-font-smoothing: antialiased;
}

/* === App Shell === */
.app-container {
  max-width: 880px;
  margin: 0 auto;
  padding: 2.5rem 1.5rem 4rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.75rem;
}

.app-header {
  text-align: center;
}

.app-title {
  font-size: 2.25rem;
  font-weight: 700;
  letter-spacing: -0.02em;
  background: linear-gradient(120deg, var(--orb-purple), var(--orb-cyan));
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.app-subtitle {
  margin-top: 0.5rem;
  color: var(--text-secondary);
}

.mode-toggle-btn {
  margin-top: 1.25rem;
  padding: 0.5rem 1.25rem;
  border: 1px solid var(--border);
  border-radius: 999px;
  background: var(--bg-raised);
  color: var(--text-primary);
  font-size: 0.875rem;
  cursor: pointer;
  transition: border-color var(--transition-fast), background var(--transition-fast);
}

.mode-toggle-btn:hover {
  border-color: var(--accent);
}

/* === Controls === */
.input-section {
  width: 100%;
}

.input-row {
  display: flex;
  gap: 0.75rem;
  flex-wrap: wrap;
}

.input-wrapper {
  flex: 1 1 260px;
}

.text-input {
  width: 100%;
  padding: 0.8rem 1rem;
  border: 1px solid var(--border);
  border-radius: 10px;
  background: var(--bg-raised);
  color: var(--text-primary);
  font-size: 1rem;
  outline: none;
  transition: border-color var(--transition-fast);
}

.text-input:focus {
  border-color: var(--accent);
}

.text-input:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.select-wrapper {
  position: relative;
  flex: 0 1 220px;
}

.style-select {
  width: 100%;
  padding: 0.8rem 2.25rem 0.8rem 1rem;
  border: 1px solid var(--border);
  border-radius: 10px;
  background: var(--bg-raised);
  color: var(--text-primary);
  font-size: 0.9rem;
  appearance: none;
  cursor: pointer;
  outline: none;
}

.select-chevron {
  position: absolute;
  right: 0.75rem;
  top: 50%;
  width: 16px;
  height: 16px;
  transform: translateY(-50%);
  pointer-events: none;
  color: var(--text-muted);
}

/* === Preview Card === */
.preview-card-wrapper {
  width: 100%;
  display: flex;
  justify-content: center;
}

.preview-card {
  position: relative;
  width: min(640px, 100%);
  min-height: 200px;
  border-radius: 18px;
  overflow: hidden;
  background: linear-gradient(var(--glass-top), var(--glass-bottom));
}

/* Decorative orbs (glass skin) */
.orb {
  position: absolute;
  width: 45%;
  aspect-ratio: 1;
  border-radius: 50%;
  filter: blur(48px);
  opacity: 0.55;
}

.orb-purple { background: var(--orb-purple); top: -10%; left: -8%; }
.orb-pink { background: var(--orb-pink); bottom: -12%; right: -10%; }
.orb-cyan { background: var(--orb-cyan); top: -8%; right: 4%; width: 34%; }

.glass-overlay {
  position: absolute;
  inset: 14% 10%;
  border-radius: 20px;
  overflow: hidden;
  border: 1.5px solid rgba(255, 255, 255, 0.25);
}

.glass-frost {
  position: absolute;
  inset: 0;
  background: rgba(255, 255, 255, 0.12);
}

.glass-content {
  position: relative;
  height: 100%;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.9rem;
  padding: 1rem;
}

.glass-text {
  font-size: clamp(1.4rem, 5vw, 2.4rem);
  font-weight: 600;
  color: var(--paper);
  text-align: center;
  word-break: break-word;
}

.glass-accent-line {
  width: 16%;
  height: 5px;
  border-radius: 3px;
  background: linear-gradient(90deg, var(--orb-purple), var(--orb-cyan));
}

.placeholder-text {
  color: var(--text-muted);
  font-style: italic;
  position: relative;
  display: block;
  text-align: center;
  padding: 3rem 1rem;
}

/* === Design layers (non-glass skins) === */
.design-layer {
  position: absolute;
  inset: 0;
  overflow: hidden;
}

.design-content {
  position: relative;
  height: 100%;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.9rem;
  padding: 1rem;
}

.design-text {
  font-size: clamp(1.4rem, 5vw, 2.4rem);
  font-weight: 600;
  text-align: center;
  word-break: break-word;
}

.design-accent {
  width: 16%;
  height: 5px;
  border-radius: 3px;
}

.design-gradient-dynamic {
  background: linear-gradient(135deg, #f97316, #ec4899, #8b5cf6);
}
.text-gradient-dynamic { color: var(--paper); }
.accent-gradient-dynamic { background: var(--paper); }

.design-solid-brand { background: var(--brand); }
.text-solid-brand { color: var(--paper); }
.accent-solid-brand { background: var(--brand-accent); }

.design-minimal-light { background: var(--minimal-light-bg); }
.text-minimal-light { color: var(--ink); }
.accent-minimal-light { background: var(--ink); }
.design-minimal-light .placeholder-text { color: rgba(24, 24, 27, 0.45); }

.design-minimal-dark { background: var(--minimal-dark-bg); }
.text-minimal-dark { color: var(--paper); }
.accent-minimal-dark { background: var(--paper); }

.design-neon-glow { background: var(--neon-bg); }
.text-neon-glow {
  color: var(--neon-cyan);
  text-shadow: 0 0 12px var(--neon-cyan), 0 0 32px rgba(0, 229, 255, 0.5);
}
.accent-neon-glow {
  background: var(--neon-pink);
  box-shadow: 0 0 10px var(--neon-pink);
}

.neon-orb {
  position: absolute;
  width: 42%;
  aspect-ratio: 1;
  border-radius: 50%;
  filter: blur(56px);
  opacity: 0.5;
}
.neon-cyan-orb { background: var(--neon-cyan); top: -8%; left: -6%; }
.neon-pink-orb { background: var(--neon-pink); bottom: -10%; right: -6%; }

.design-neumorphism { background: var(--neu-bg); }
.design-neumorphism .design-content {
  inset: 14% 10%;
  position: absolute;
  height: auto;
  border-radius: 24px;
  background: var(--neu-bg);
  box-shadow: 9px 9px 20px var(--neu-shadow), -9px -9px 20px #ffffff;
}
.text-neumorphism { color: var(--neu-text); }
.accent-neumorphism { background: var(--neu-shadow); }
.design-neumorphism .placeholder-text { color: rgba(68, 71, 106, 0.5); }

/* === Export buttons === */
.download-btn {
  display: inline-flex;
  align-items: center;
  gap: 0.6rem;
  padding: 0.8rem 1.75rem;
  border: none;
  border-radius: 12px;
  background: linear-gradient(120deg, var(--accent), var(--accent-strong));
  color: #ffffff;
  font-size: 1rem;
  font-weight: 600;
  cursor: pointer;
  transition: opacity var(--transition-fast), transform var(--transition-fast);
}

.download-btn:hover:not(:disabled) {
  transform: translateY(-1px);
}

.download-btn:disabled {
  opacity: 0.45;
  cursor: not-allowed;
}

.download-icon {
  width: 18px;
  height: 18px;
}

/* === Demo Grid === */
.demo-grid {
  width: 100%;
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 1.25rem;
}

.demo-item {
  position: relative;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.demo-item .preview-card {
  min-height: 150px;
}

.demo-item .glass-text,
.demo-item .design-text {
  font-size: clamp(1rem, 3vw, 1.4rem);
}

.demo-download-btn {
  align-self: flex-end;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 36px;
  height: 36px;
  border: 1px solid var(--border);
  border-radius: 10px;
  background: var(--bg-raised);
  color: var(--text-secondary);
  cursor: pointer;
  transition: border-color var(--transition-fast), color var(--transition-fast);
}

.demo-download-btn:hover:not(:disabled) {
  border-color: var(--accent);
  color: var(--text-primary);
}

.demo-download-btn:disabled {
  opacity: 0.45;
  cursor: wait;
}

.demo-download-btn .download-icon {
  width: 16px;
  height: 16px;
}

/* === Animation === */
.fade-in {
  animation: fade-in 400ms ease both;
}

@keyframes fade-in {
  from { opacity: 0; transform: translateY(6px); }
  to { opacity: 1; transform: translateY(0); }
}
"#;
