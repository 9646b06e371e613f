//! Global CSS styles for the Neon-Suture storefront.
//!
//! Editorial-glass aesthetic: onyx ground, serif display type, mono labels.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
/* palette variables come from theme::colors */
:root {
  /* Typography */
  --font-serif: 'Cormorant Garamond', 'Playfair Display', Georgia, serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Motion */
  --ease-signature: cubic-bezier(0.22, 1, 0.36, 1);
  --ease-unfold: cubic-bezier(0.23, 1, 0.32, 1);
  --transition-fast: 300ms ease;
  --transition-slow: 700ms var(--ease-signature);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  background: var(--onyx);
  color: var(--gainsboro);
  font-family: var(--font-serif);
  -webkit-font-smoothing: antialiased;
}

::selection {
  background: var(--white);
  color: var(--black);
}

img {
  display: block;
  max-width: none;
}

a {
  color: inherit;
  text-decoration: none;
}

.mono {
  font-family: var(--font-mono);
  text-transform: uppercase;
  letter-spacing: 0.2em;
}

.storefront {
  position: relative;
  min-height: 100vh;
}

.storefront main {
  position: relative;
  z-index: 10;
  width: 100%;
}

/* === Buttons === */
button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

.btn-solid, .btn-outline, .btn-ghost, .btn-alert {
  font-family: var(--font-mono);
  font-size: 0.875rem;
  text-transform: uppercase;
  padding: 1rem 2rem;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.btn-solid { background: var(--white); color: var(--black); }
.btn-solid:hover { background: var(--gainsboro); }
.btn-outline { border: 1px solid var(--glass-strong); color: var(--white); }
.btn-outline:hover { background: var(--white); color: var(--black); }
.btn-ghost { color: var(--gainsboro); padding: 0.5rem; }
.btn-ghost:hover { color: var(--text-secondary); }
.btn-alert { background: var(--white); color: var(--black); }
.btn-alert:hover { background: var(--alert); color: var(--white); }

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 0.5rem;
  color: var(--white);
  transition: opacity var(--transition-fast), color var(--transition-fast);
}
.icon-btn:hover { opacity: 0.5; }
.close-btn { font-size: 2rem; line-height: 1; }
.remove-btn { color: var(--text-faint); font-size: 0.75rem; }
.remove-btn:hover { color: var(--alert); opacity: 1; }

.magnetic-btn {
  position: relative;
  cursor: pointer;
  will-change: transform;
}
.magnetic-btn__label {
  position: relative;
  z-index: 1;
  display: flex;
  align-items: center;
  gap: 1rem;
}
.magnetic-btn__glow {
  position: absolute;
  inset: 0;
  border-radius: 9999px;
  background: var(--glass-fill);
  filter: blur(16px);
  opacity: 0;
  transform: scale(0.5);
  transition: opacity 400ms ease, transform 400ms ease;
  pointer-events: none;
}
.magnetic-btn__glow.visible { opacity: 1; transform: scale(1.2); }

/* === Section Heading === */
.section-heading {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  margin-bottom: 6rem;
  color: var(--onyx);
}
.section-heading.light { color: var(--white); }
.section-heading__marker { display: flex; align-items: center; gap: 1rem; }
.section-heading__number {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  letter-spacing: 0.2em;
  opacity: 0.4;
}
.section-heading__rule { height: 1px; width: 3rem; background: currentColor; opacity: 0.15; }
.section-heading__title {
  font-size: clamp(3rem, 6vw, 4.5rem);
  font-weight: 300;
  line-height: 0.9;
  letter-spacing: -0.02em;
}
.section-heading__subtitle {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.2em;
  max-width: 24rem;
  margin-top: 1rem;
  opacity: 0.6;
  line-height: 1.6;
}

/* === Navigation === */
.nav {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.5rem 2rem;
  mix-blend-mode: difference;
  pointer-events: none;
}
.nav > * { pointer-events: auto; }
.nav__brand { font-size: 1.5rem; font-weight: 700; letter-spacing: -0.05em; }
.nav__links { display: flex; align-items: center; gap: 2rem; }
.nav__link { font-family: var(--font-mono); font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.2em; }
.nav__orb {
  position: relative;
  width: 3rem;
  height: 3rem;
  border-radius: 9999px;
  border: 1px solid var(--glass-strong);
  background: var(--glass-fill);
  backdrop-filter: blur(12px);
  display: flex;
  align-items: center;
  justify-content: center;
}
.nav__badge {
  position: absolute;
  top: 0;
  right: 0;
  min-width: 1rem;
  height: 1rem;
  border-radius: 9999px;
  background: var(--white);
  color: var(--black);
  border: 1px solid var(--black);
  font-size: 10px;
  font-weight: 700;
  display: flex;
  align-items: center;
  justify-content: center;
}

/* === Parallax watermark === */
.parallax-bg {
  position: fixed;
  inset: 0;
  z-index: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  pointer-events: none;
  overflow: hidden;
}
.parallax-bg__word {
  font-size: 20vw;
  line-height: 1;
  color: rgba(255, 255, 255, 0.05);
  white-space: nowrap;
  user-select: none;
}

/* === Hero === */
.hero {
  position: relative;
  height: 100vh;
  width: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  z-index: 10;
  background: var(--onyx);
  transform-origin: center;
}
.hero__slices { position: absolute; inset: 0; display: flex; pointer-events: none; }
.hero__slice { position: relative; height: 100%; flex: 1; overflow: hidden; }
.hero__slice-image { position: absolute; top: 0; height: 100%; width: 100vw; }
.hero__slice-image img { width: 100%; height: 100%; object-fit: cover; filter: grayscale(1) contrast(1.25); }
.hero__slice-shade { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.3); }
.hero__content { position: relative; z-index: 20; text-align: center; mix-blend-mode: difference; color: var(--white); }
.hero__title { font-size: clamp(6rem, 14vw, 12rem); line-height: 1; letter-spacing: -0.05em; }
.hero__tagline {
  margin-top: 2rem;
  display: flex;
  justify-content: center;
  gap: 3rem;
  font-family: var(--font-mono);
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.3em;
}
.hero__arrow {
  position: absolute;
  bottom: 3rem;
  left: 50%;
  transform: translateX(-50%);
  color: var(--text-muted);
  animation: bounce 1s infinite;
}

/* === Archive rail === */
.archive { position: relative; height: 300vh; background: var(--onyx); }
.archive__sticky {
  position: sticky;
  top: 0;
  height: 100vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  overflow: hidden;
}
.archive__heading { position: absolute; top: 3rem; left: 6rem; z-index: 20; }
.archive__track { display: flex; gap: 3rem; align-items: center; padding-left: 25vw; padding-right: 5vw; will-change: transform; }
.prism-card {
  position: relative;
  width: 350px;
  height: 55vh;
  flex-shrink: 0;
  background: var(--glass-fill);
  border: 1px solid var(--glass-border);
  overflow: hidden;
  backdrop-filter: blur(4px);
  transition: background 500ms ease;
}
.prism-card:hover { background: var(--glass-border); }
.prism-card__image { position: absolute; inset: 0; }
.prism-card__image img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0.6;
  filter: grayscale(1);
  transition: transform 700ms ease, opacity 700ms ease, filter 700ms ease;
}
.prism-card:hover .prism-card__image img { transform: scale(1.1); opacity: 0.8; filter: grayscale(0); }
.prism-card__shade { position: absolute; inset: 0; background: linear-gradient(to top, rgba(0,0,0,0.9), rgba(0,0,0,0.2), transparent); }
.prism-card__content { position: absolute; inset: 0; padding: 2rem; display: flex; flex-direction: column; justify-content: flex-end; }
.prism-card__header { position: relative; z-index: 10; transition: transform 500ms ease; }
.prism-card:hover .prism-card__header { transform: translateY(-1rem); }
.prism-card__meta { display: flex; justify-content: space-between; margin-bottom: 0.5rem; color: var(--text-muted); font-family: var(--font-mono); font-size: 0.75rem; }
.prism-card__name { font-size: 1.875rem; color: var(--white); }
.prism-card__specs {
  position: relative;
  z-index: 10;
  max-height: 0;
  overflow: hidden;
  transition: max-height 500ms var(--ease-unfold);
}
.prism-card:hover .prism-card__specs { max-height: 12rem; }
.prism-card__spec-grid {
  padding-top: 1.5rem;
  margin-top: 1rem;
  border-top: 1px solid var(--glass-strong);
  display: grid;
  grid-template-columns: 1fr 1fr;
  row-gap: 1rem;
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--text-secondary);
}
.prism-card__spec-label { display: block; color: var(--text-faint); margin-bottom: 0.25rem; }
.prism-card__spec-wide { grid-column: span 2; }
.archive__end {
  width: 300px;
  height: 55vh;
  flex-shrink: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  border: 1px solid var(--glass-border);
  color: rgba(255, 255, 255, 0.2);
  font-style: italic;
  font-size: 2.25rem;
}

/* === Sale banner === */
.sale {
  position: relative;
  height: 80vh;
  overflow: hidden;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(127, 29, 29, 0.2);
  border-top: 1px solid var(--glass-fill);
  border-bottom: 1px solid var(--glass-fill);
}
.sale__bg { position: absolute; inset: 0; z-index: 0; }
.sale__bg img { width: 100%; height: 140%; object-fit: cover; filter: grayscale(1) contrast(1.5); mix-blend-mode: multiply; opacity: 0.4; }
.sale__bg-shade { position: absolute; inset: 0; background: linear-gradient(to top, var(--onyx), transparent, var(--onyx)); }
.sale__ticker-layer { position: absolute; inset: 0; display: flex; flex-direction: column; justify-content: center; pointer-events: none; z-index: 10; opacity: 0.2; overflow: hidden; }
.sale__ticker { white-space: nowrap; font-size: 20vw; font-weight: 900; line-height: 1; color: rgba(239, 68, 68, 0.5); mix-blend-mode: overlay; }
.sale__content {
  position: relative;
  z-index: 20;
  text-align: center;
  padding: 2rem;
  backdrop-filter: blur(4px);
  background: rgba(0, 0, 0, 0.3);
  border: 1px solid var(--glass-border);
  max-width: 42rem;
}
.sale__alert {
  display: inline-block;
  margin-bottom: 1rem;
  padding: 0.25rem 0.5rem;
  background: var(--alert);
  color: var(--black);
  font-family: var(--font-mono);
  font-size: 0.75rem;
  font-weight: 700;
  text-transform: uppercase;
  letter-spacing: 0.2em;
  animation: pulse 2s infinite;
}
.sale__title { font-size: clamp(3.75rem, 8vw, 6rem); color: var(--white); margin-bottom: 1.5rem; letter-spacing: -0.05em; line-height: 1; }
.sale__copy { font-family: var(--font-mono); color: var(--text-secondary); margin: 0 auto 2rem; max-width: 32rem; }
.sale__discount { font-size: clamp(1.875rem, 4vw, 3rem); color: #ef4444; margin-bottom: 2rem; }

/* === Core grid === */
.core-grid { position: relative; z-index: 20; background: var(--onyx); padding: 8rem 3rem; border-top: 1px solid var(--glass-border); }
.core-grid__intro {
  max-width: 1600px;
  margin: 0 auto 6rem;
  display: flex;
  justify-content: space-between;
  align-items: flex-end;
  padding-bottom: 2rem;
  border-bottom: 1px solid var(--glass-border);
}
.core-grid__headline { font-size: clamp(2.25rem, 5vw, 3.75rem); color: var(--white); max-width: 36rem; line-height: 1.2; }
.core-grid__system { font-family: var(--font-mono); font-size: 0.75rem; color: var(--text-muted); text-align: right; }
.core-grid__items { max-width: 1600px; margin: 0 auto; display: grid; grid-template-columns: repeat(12, 1fr); row-gap: 8rem; column-gap: 2rem; }
.core-grid__cell { position: relative; grid-column: 3 / span 3; }
.core-grid__cell.offset { grid-column: 8 / span 3; margin-top: 8rem; }
.product-card { cursor: pointer; }
.product-card__frame { position: relative; overflow: hidden; aspect-ratio: 3 / 4; margin-bottom: 1.5rem; background: #111827; }
.product-card__frame img { width: 100%; height: 100%; object-fit: cover; filter: grayscale(1); transition: filter var(--transition-slow); }
.product-card:hover .product-card__frame img { filter: grayscale(0); }
.product-card__tint { position: absolute; inset: 0; background: transparent; transition: background 500ms ease; }
.product-card:hover .product-card__tint { background: var(--glass-fill); }
.product-card__tag {
  position: absolute;
  top: 1rem;
  right: 1rem;
  padding: 0.25rem 0.75rem;
  background: var(--glass-border);
  border: 1px solid var(--glass-strong);
  backdrop-filter: blur(12px);
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--white);
  opacity: 0;
  transform: translateY(1rem);
  transition: opacity 500ms ease, transform 500ms ease;
}
.product-card:hover .product-card__tag { opacity: 1; transform: translateY(0); }
.product-card__caption { display: flex; justify-content: space-between; align-items: flex-start; border-top: 1px solid var(--glass-border); padding-top: 1rem; }
.product-card__name { font-size: 1.5rem; color: var(--white); margin-bottom: 0.25rem; }
.product-card:hover .product-card__name { font-style: italic; }
.product-card__collection { font-family: var(--font-mono); font-size: 0.75rem; color: var(--text-muted); }
.product-card__price { font-family: var(--font-mono); font-size: 0.875rem; color: var(--white); }

/* === Material panel === */
.materials { position: relative; background: var(--white); color: var(--onyx); }
.materials__grid { display: grid; grid-template-columns: 1fr 1fr; }
.materials__visual {
  position: sticky;
  top: 0;
  height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(249, 250, 251, 0.5);
  overflow: hidden;
}
.materials__frame { position: relative; width: 60%; aspect-ratio: 3 / 4; background: var(--onyx); overflow: hidden; box-shadow: 0 25px 50px rgba(0,0,0,0.25); }
.materials__image { position: absolute; inset: 0; animation: material-in 800ms var(--ease-signature); }
.materials__image img { width: 100%; height: 100%; object-fit: cover; filter: grayscale(1) contrast(1.25); opacity: 0.8; }
.materials__image-shade { position: absolute; inset: 0; background: linear-gradient(to top, rgba(10,10,10,0.8), transparent); }
.materials__hud {
  position: absolute;
  inset: 0;
  z-index: 10;
  padding: 1.5rem;
  border: 1px solid var(--glass-border);
  display: flex;
  flex-direction: column;
  justify-content: space-between;
  pointer-events: none;
  font-family: var(--font-mono);
  font-size: 10px;
  letter-spacing: 0.2em;
  color: var(--text-secondary);
}
.materials__hud-row { display: flex; justify-content: space-between; align-items: flex-end; }
.materials__hud-pulse { animation: pulse 2s infinite; }
.materials__scanline { position: absolute; left: 0; right: 0; height: 1px; background: rgba(239, 68, 68, 0.8); box-shadow: 0 0 20px var(--alert-glow); z-index: 20; }
.materials__copy { position: relative; z-index: 10; padding: 6rem; background: var(--white); }
.materials__list { display: flex; flex-direction: column; padding-bottom: 20vh; }
.material-entry { position: relative; min-height: 80vh; display: flex; flex-direction: column; justify-content: center; }
.material-entry__body { position: relative; padding: 3rem 3rem 3rem 2rem; border-left: 2px solid rgba(10,10,10,0.1); transition: border-color 500ms ease; }
.material-entry.active .material-entry__body { border-color: var(--onyx); }
.material-entry__index { position: absolute; top: -3rem; left: -0.75rem; font-family: var(--font-mono); font-size: 6rem; font-weight: 700; color: rgba(10,10,10,0.05); z-index: -1; user-select: none; }
.material-entry__title { font-size: 2.25rem; margin-bottom: 1.5rem; opacity: 0.3; transition: opacity 500ms ease; }
.material-entry.active .material-entry__title { opacity: 1; }
.material-entry__description { font-size: 1.125rem; line-height: 1.7; color: rgba(10,10,10,0.7); margin-bottom: 2rem; max-width: 28rem; }
.material-entry__properties { display: flex; flex-wrap: wrap; gap: 0.75rem; }
.material-entry__property { padding: 0.25rem 0.75rem; border: 1px solid rgba(10,10,10,0.2); font-family: var(--font-mono); font-size: 10px; text-transform: uppercase; letter-spacing: 0.2em; }

/* === Lookbook === */
.lookbook { position: relative; background: var(--onyx); padding: 8rem 3rem; overflow: hidden; border-top: 1px solid var(--glass-fill); }
.lookbook__inner { max-width: 1600px; margin: 0 auto; }
.lookbook__header { display: flex; justify-content: space-between; align-items: flex-end; margin-bottom: 6rem; }
.lookbook__title { font-size: clamp(2.25rem, 5vw, 3.75rem); color: rgba(255,255,255,0.9); line-height: 1; margin-bottom: 1rem; }
.lookbook__kicker { font-family: var(--font-mono); font-size: 0.75rem; color: var(--text-muted); letter-spacing: 0.2em; text-transform: uppercase; }
.lookbook__grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1.5rem; }
.lens-card { position: relative; }
.lens-card__frame { position: relative; aspect-ratio: 2 / 3; width: 100%; overflow: hidden; background: var(--onyx); cursor: pointer; will-change: transform; }
.lens-card__frame img { width: 100%; height: 100%; object-fit: cover; filter: grayscale(1); opacity: 0.9; transition: filter 700ms ease-out, opacity 700ms ease-out; }
.lens-card:hover .lens-card__frame img { filter: grayscale(0); opacity: 1; }
.lens-card__glare { position: absolute; left: 0; right: 0; height: 20%; background: linear-gradient(to bottom, transparent, rgba(255,255,255,0.1), transparent); transform: skewY(12deg); pointer-events: none; z-index: 10; }
.lens-card__overlay { position: absolute; inset: 0; background: rgba(0,0,0,0.6); opacity: 0; transition: opacity 500ms ease; display: flex; flex-direction: column; justify-content: flex-end; padding: 1.5rem; backdrop-filter: blur(2px); }
.lens-card:hover .lens-card__overlay { opacity: 1; }
.lens-card__details { transform: translateY(1rem); transition: transform 500ms ease 100ms; }
.lens-card:hover .lens-card__details { transform: translateY(0); }
.lens-card__row { display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 0.5rem; }
.lens-card__name { font-size: 1.5rem; color: var(--white); font-style: italic; }
.lens-card__price { font-family: var(--font-mono); font-size: 0.875rem; color: rgba(255,255,255,0.9); }
.lens-card__description { font-family: var(--font-mono); font-size: 0.75rem; color: var(--text-muted); margin-bottom: 1rem; }
.lens-card__cta { font-family: var(--font-mono); font-size: 10px; text-transform: uppercase; letter-spacing: 0.2em; color: var(--white); border: 1px solid var(--text-faint); padding: 0.25rem 0.75rem; background: var(--glass-fill); }
.lens-card__micro { position: absolute; top: 0.5rem; right: 0.5rem; display: flex; gap: 0.25rem; transition: opacity var(--transition-fast); }
.lens-card__dot { width: 4px; height: 4px; border-radius: 9999px; background: var(--text-muted); }
.lens-card__ref { position: absolute; bottom: 1rem; left: 1rem; font-family: var(--font-mono); font-size: 9px; color: var(--text-muted); background: rgba(0,0,0,0.6); border: 1px solid var(--glass-border); padding: 0.25rem 0.5rem; transition: opacity var(--transition-fast); }
.lens-card:hover .lens-card__micro, .lens-card:hover .lens-card__ref { opacity: 0; }

/* === Footer === */
.footer { position: relative; z-index: 20; background: var(--black); border-top: 1px solid var(--glass-border); padding: 6rem 6rem 3rem; }
.footer__inner { max-width: 1600px; margin: 0 auto; }
.footer__columns { display: grid; grid-template-columns: repeat(4, 1fr); gap: 3rem; margin-bottom: 6rem; }
.footer__column { display: flex; flex-direction: column; gap: 1rem; }
.footer__brand { font-size: 1.5rem; color: var(--white); letter-spacing: -0.05em; }
.footer__blurb { font-family: var(--font-mono); font-size: 0.75rem; color: rgba(255,255,255,0.4); line-height: 1.7; max-width: 20rem; }
.footer__label { font-family: var(--font-mono); font-size: 10px; color: var(--text-faint); text-transform: uppercase; letter-spacing: 0.2em; margin-bottom: 0.5rem; }
.footer__heading { font-family: var(--font-mono); font-size: 0.75rem; color: rgba(255,255,255,0.6); text-transform: uppercase; letter-spacing: 0.2em; margin-bottom: 1rem; }
.footer__link { font-size: 1.125rem; color: rgba(255,255,255,0.6); transition: color var(--transition-fast); }
.footer__link:hover { color: var(--white); font-style: italic; }
.footer__address { color: rgba(255,255,255,0.6); font-size: 0.875rem; }
.footer__newsletter { display: flex; border-bottom: 1px solid var(--glass-strong); padding-bottom: 0.5rem; }
.footer__newsletter input { background: transparent; border: none; outline: none; color: var(--white); font-family: var(--font-mono); font-size: 0.875rem; width: 100%; }
.footer__join { padding: 0 0 0 1rem; font-size: 0.75rem; }
.footer__socials { display: flex; gap: 1rem; margin-top: 2rem; }
.footer__social { font-family: var(--font-mono); font-size: 10px; color: rgba(255,255,255,0.4); border: 1px solid var(--glass-border); padding: 0.25rem 0.5rem; }
.footer__social:hover { color: var(--white); }
.footer__base { display: flex; justify-content: space-between; align-items: flex-end; border-top: 1px solid var(--glass-border); padding-top: 2rem; }
.footer__watermark { font-size: 8vw; line-height: 1; color: rgba(255,255,255,0.05); user-select: none; pointer-events: none; }
.footer__legal { font-family: var(--font-mono); font-size: 10px; color: var(--text-faint); text-align: right; }

/* === Product overlay === */
.overlay {
  position: fixed;
  inset: 0;
  z-index: 60;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(10, 10, 10, 0.9);
  backdrop-filter: blur(40px);
  animation: fade-in 400ms ease;
}
.overlay__panel { position: relative; width: 90%; height: 90%; background: var(--black); overflow: hidden; display: flex; border: 1px solid var(--glass-border); box-shadow: 0 25px 50px rgba(0,0,0,0.5); }
.overlay__close { position: absolute; top: 1.5rem; right: 1.5rem; z-index: 20; mix-blend-mode: difference; }
.overlay__media { width: 50%; height: 100%; position: relative; overflow: hidden; background: #111827; }
.overlay__media img { width: 100%; height: 100%; object-fit: cover; }
.overlay__media-shade { position: absolute; inset: 0; background: linear-gradient(to top, var(--black), transparent, transparent); opacity: 0.5; }
.overlay__info { width: 50%; height: 100%; padding: 5rem; display: flex; flex-direction: column; justify-content: center; background: var(--onyx); }
.overlay__body { animation: rise-in 800ms var(--ease-signature) 200ms both; }
.overlay__meta { display: flex; align-items: center; justify-content: space-between; margin-bottom: 2rem; border-bottom: 1px solid var(--glass-strong); padding-bottom: 1rem; }
.overlay__collection { font-family: var(--font-mono); font-size: 0.75rem; color: var(--text-muted); }
.overlay__price { font-family: var(--font-mono); font-size: 1.25rem; color: var(--white); }
.overlay__name { font-size: clamp(3rem, 6vw, 4.5rem); font-weight: 300; color: var(--white); margin-bottom: 1.5rem; letter-spacing: -0.02em; }
.overlay__description { font-size: 1.25rem; color: var(--text-secondary); margin-bottom: 3rem; line-height: 1.6; }
.overlay__details { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; margin-bottom: 3rem; }
.overlay__detail { display: flex; align-items: center; gap: 0.5rem; color: rgba(255,255,255,0.4); font-family: var(--font-mono); font-size: 0.75rem; text-transform: uppercase; }
.overlay__bullet { width: 4px; height: 4px; border-radius: 9999px; background: rgba(255,255,255,0.4); }

/* === Cart drawer === */
.drawer-backdrop { position: fixed; inset: 0; z-index: 90; background: rgba(0,0,0,0.8); backdrop-filter: blur(4px); animation: fade-in 300ms ease; }
.drawer {
  position: fixed;
  top: 0;
  right: 0;
  height: 100%;
  width: 500px;
  max-width: 100%;
  z-index: 100;
  display: flex;
  flex-direction: column;
  background: var(--onyx);
  border-left: 1px solid var(--glass-border);
  box-shadow: -25px 0 50px rgba(0,0,0,0.5);
  will-change: transform;
}
.drawer__header { display: flex; align-items: center; justify-content: space-between; padding: 2rem; border-bottom: 1px solid var(--glass-border); background: var(--glass-fill); }
.drawer__count { font-family: var(--font-mono); font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.2em; color: var(--text-muted); }
.drawer__items { flex: 1; overflow-y: auto; padding: 2rem; display: flex; flex-direction: column; gap: 2rem; }
.drawer__empty { height: 100%; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 0.5rem; color: var(--text-faint); font-family: var(--font-mono); font-size: 0.875rem; text-align: center; }
.drawer-row { display: flex; gap: 1rem; animation: rise-in 400ms ease both; }
.drawer-row__thumb { width: 6rem; height: 8rem; flex-shrink: 0; overflow: hidden; border: 1px solid var(--glass-border); }
.drawer-row__thumb img { width: 100%; height: 100%; object-fit: cover; }
.drawer-row__body { flex: 1; display: flex; flex-direction: column; justify-content: space-between; }
.drawer-row__top { display: flex; justify-content: space-between; align-items: flex-start; }
.drawer-row__name { font-size: 1.25rem; color: var(--white); }
.drawer-row__collection { font-family: var(--font-mono); font-size: 0.75rem; color: var(--text-muted); margin-top: 0.25rem; }
.drawer-row__price { font-family: var(--font-mono); font-size: 0.875rem; color: var(--white); }
.drawer__footer { padding: 2rem; border-top: 1px solid var(--glass-border); background: var(--glass-fill); display: flex; flex-direction: column; gap: 1.5rem; }
.drawer__total { display: flex; justify-content: space-between; align-items: flex-end; }
.drawer__total-label { font-family: var(--font-mono); font-size: 0.75rem; color: var(--text-muted); }
.drawer__total-value { font-size: 1.875rem; color: var(--white); }
.drawer__checkout { width: 100%; }

/* === Keyframes === */
@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }
@keyframes rise-in { from { opacity: 0; transform: translateY(3rem); } to { opacity: 1; transform: translateY(0); } }
@keyframes material-in {
  from { opacity: 0; transform: scale(1.1); filter: blur(10px); }
  to { opacity: 1; transform: scale(1); filter: blur(0); }
}
@keyframes pulse { 0%, 100% { opacity: 1; } 50% { opacity: 0.5; } }
@keyframes bounce {
  0%, 100% { transform: translate(-50%, -25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
  50% { transform: translate(-50%, 0); animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use suture_ui::ButtonVariant;

    #[test]
    fn every_button_variant_is_styled() {
        for variant in [
            ButtonVariant::Solid,
            ButtonVariant::Outline,
            ButtonVariant::Ghost,
            ButtonVariant::Alert,
        ] {
            let rule = format!(".{} {{", variant.class());
            assert!(GLOBAL_STYLES.contains(&rule), "missing {rule}");
        }
    }
}
