// Page hooks and class names the visual layer binds to.

// Scroll effects
pub const PROGRESS_BAR: &str = ".scroll-progress-bar";
pub const HERO: &str = ".hero-content";
pub const SECTION_TITLES: &str = ".section-title";
pub const SECTIONS: &str = "section[id]";
pub const NAV_LINKS: &str = ".nav-link";
pub const SCROLL_TOP_ID: &str = "scrollToTop";
pub const ANCHORS: &str = "a[href^=\"#\"]";

// Reveal
pub const REVEAL_TARGETS: &str = "section, .expertise-card, .project-card, .timeline-item";
pub const STAGGER_CONTAINERS: [&str; 3] = ["expertise-grid", "projects-list", "timeline"];
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

// Counters
pub const COUNTERS: &str =
    ".achievement-stat[data-count], .hero-stats .stat-number[data-count]";
pub const COUNT_ATTR: &str = "data-count";
pub const COUNTER_THRESHOLD: f64 = 0.5;

// Carousel
pub const SLIDES: &str = ".testimonial-card";
pub const SLIDE_DOTS: &str = ".testimonial-dots .dot";
pub const SLIDER: &str = ".testimonials-slider";

// Cursor + hover
pub const HOVER_TARGETS: &str = "a, button, .btn, .expertise-card, .project-card";
pub const SPOTLIGHT_CARDS: &str = ".project-card";
pub const MARQUEE: &str = ".marquee-content";

// Grid pulse overlay
pub const PROJECT_IMAGES: &str = ".project-image";

// Class names
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_VISIBLE: &str = "visible";
pub const CLASS_REVEALED: &str = "animate-in";
pub const CLASS_COUNTED: &str = "counted";
pub const CLASS_CURSOR: &str = "custom-cursor";
pub const CLASS_FOLLOWER: &str = "cursor-follower";
pub const CLASS_CURSOR_HOVER: &str = "cursor-hover";
pub const CLASS_GRID_CANVAS: &str = "project-canvas";

// Configuration overrides are read from `<body data-fx-...>`.
pub const CONFIG_ATTR_PREFIX: &str = "data-fx-";

pub const BACKGROUND_CANVAS_CSS: &str = "position: fixed; top: 0; left: 0; width: 100%; \
    height: 100%; pointer-events: none; z-index: 0; opacity: 0.3;";
pub const GRID_CANVAS_CSS: &str = "position: absolute; top: 0; left: 0; width: 100%; \
    height: 100%; pointer-events: none; opacity: 0.3;";

pub const CURSOR_CSS: &str = r#"
.custom-cursor, .cursor-follower {
    position: fixed;
    border-radius: 50%;
    pointer-events: none;
    z-index: 9999;
    mix-blend-mode: difference;
}
.custom-cursor {
    width: 10px;
    height: 10px;
    background: #00ff88;
    transform: translate(-50%, -50%);
}
.cursor-follower {
    width: 40px;
    height: 40px;
    border: 2px solid #00ff88;
    transform: translate(-50%, -50%);
    transition: transform 0.3s ease, background 0.3s ease;
}
.custom-cursor.cursor-hover,
.cursor-follower.cursor-hover {
    transform: translate(-50%, -50%) scale(1.5);
}
.cursor-follower.cursor-hover {
    background: rgba(0, 255, 136, 0.1);
}
@media (max-width: 968px) {
    .custom-cursor, .cursor-follower { display: none; }
}
"#;
