pub const BUSINESS_NAME: &str = "Brightway Cleaning";
pub const CONTACT_PHONE: &str = "(555) 014-2277";
pub const CONTACT_EMAIL: &str = "hello@brightwaycleaning.com";

/// Width below which the navigation collapses into the mobile menu.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;
pub const SCROLL_THROTTLE_MS: f64 = 100.0;
pub const RESIZE_DEBOUNCE_MS: u32 = 150;

pub const SLIDER_INITIAL_PERCENTAGE: f64 = 50.0;
pub const SLIDER_KEYBOARD_STEP: f64 = 5.0;

pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 1200;

pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const LAZY_ROOT_MARGIN: &str = "200px 0px";

pub fn get_site_url() -> String {
    option_env!("SITE_URL")
        .unwrap_or("https://brightwaycleaning.com")
        .to_string()
}

pub fn analytics_enabled() -> bool {
    option_env!("ANALYTICS_DISABLED").is_none()
}
