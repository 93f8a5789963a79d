// Web-side layout and DOM hook constants.

// Canvas / camera
pub const CANVAS_ID: &str = "lava-scene";
pub const CAMERA_EYE: [f32; 3] = [0.0, 1.5, 7.2];
pub const CAMERA_FOV_Y: f32 = std::f32::consts::FRAC_PI_4; // 45 degrees
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 120.0;

// Sprite instance buffer: embers + a full double burst + orbs, rounded up
pub const INSTANCE_CAPACITY: usize = 1024;

// Page sections feeding the named scroll regions
pub const HERO_SELECTOR: &str = ".hero";
pub const PORTFOLIO_SELECTOR: &str = ".portfolio";
pub const TUBE_SELECTOR: &str = ".lava-tube";
pub const BASALT_SELECTOR: &str = ".basalt";
pub const PUMICE_SELECTOR: &str = ".pumice";

// Hover/interaction hooks
pub const SHIMMER_SELECTOR: &str = ".portfolio-card, .social-pill";
pub const CARD_SELECTOR: &str = ".portfolio-card";
pub const CTA_SELECTOR: &str = ".cta";
pub const PARALLAX_SELECTOR: &str = ".ambient";

pub const PARALLAX_DEPTH_STEP: f32 = 0.03;
pub const EMBER_BURST_LIFETIME_MS: i32 = 600;
pub const ERUPTION_CLASS: &str = "eruption-active";
