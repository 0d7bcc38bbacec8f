// Default tuning for every visual effect. `FxConfig::default()` mirrors these.

// Particle field
pub const PARTICLE_COUNT: usize = 50;
pub const CONNECTION_DISTANCE: f32 = 150.0; // pairs at or beyond this are not joined
pub const PARTICLE_SPEED_MAX: f32 = 0.25; // per-axis, units per frame
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_MAX: f32 = 3.0;
pub const CONNECTION_LINE_WIDTH: f64 = 0.5;
pub const PARTICLE_RGB: [u8; 3] = [0x00, 0xff, 0x88];

// Cursor
pub const FOLLOWER_DAMPING: f64 = 0.1; // fraction of the gap closed per frame

// Scroll-driven effects
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0; // scroll spy
pub const NAV_SYNC_OFFSET: f64 = 200.0; // nav synchroniser
pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;
pub const HERO_PARALLAX_FACTOR: f64 = 0.3;
pub const HERO_FADE_DISTANCE: f64 = 800.0;
pub const TITLE_PARALLAX_FACTOR: f64 = 0.1;

// Reveal + stagger
pub const STAGGER_SPACING_MS: u32 = 100;
pub const STAGGER_SETTLE_MS: u32 = 50; // delay between staging a child and releasing it
pub const STAGGER_DURATION_MS: u32 = 600;
pub const STAGGER_EASING: [f64; 4] = [0.25, 0.46, 0.45, 0.94];
pub const STAGGER_START_OFFSET_PX: f64 = 30.0;

// Counter
pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const COUNTER_FRAME_MS: f64 = 16.0;
pub const COUNTER_GROUPED_ABOVE: f64 = 100.0; // targets above this render as "1,234+"

// Carousel
pub const CAROUSEL_INTERVAL_MS: u32 = 5000;
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

// Smooth anchor scrolling
pub const ANCHOR_SCROLL_OFFSET: f64 = 80.0;
pub const ANCHOR_SCROLL_DURATION_MS: f64 = 1000.0;

// Grid pulse overlay on project images
pub const GRID_SPACING: f32 = 30.0;
pub const GRID_DOT_RADIUS_BASE: f32 = 2.0;
pub const GRID_DOT_RADIUS_SPAN: f32 = 2.0;
pub const GRID_PHASE_PER_UNIT: f32 = 0.01;
pub const GRID_LINE_ALPHA: f32 = 0.15;
