// Small helpers shared by the model and the views

use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG_LOG: AtomicBool = AtomicBool::new(false);

pub fn set_debug_logging(on: bool) {
    DEBUG_LOG.store(on, Ordering::Relaxed);
}

/// Debug line on the browser console; silent unless enabled in the config.
pub fn clog(msg: &str) {
    if !DEBUG_LOG.load(Ordering::Relaxed) {
        return;
    }
    #[cfg(target_arch = "wasm32")]
    gloo::console::log!(msg);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// Warnings always reach the console.
pub fn cwarn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    gloo::console::warn!(msg);
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// Formats a weight without a trailing ".0" for whole numbers.
pub fn format_weight(weight: f64) -> String {
    format!("{}", weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_weights_drop_the_fraction() {
        assert_eq!(format_weight(9.0), "9");
        assert_eq!(format_weight(0.0), "0");
    }

    #[test]
    fn fractional_weights_keep_digits() {
        assert_eq!(format_weight(2.5), "2.5");
        assert_eq!(format_weight(9.1), "9.1");
    }
}
