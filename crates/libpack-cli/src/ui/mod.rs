//! Terminal status messages.
//!
//! Everything here writes to stderr; stdout is reserved for configuration
//! output.
//!
//! ```no_run
//! use libpack_cli::ui;
//!
//! ui::init_colors(false);
//! ui::info("Assembling production configuration");
//! ui::success("Wrote dist/webpack.json");
//! ```

mod messages;

pub use messages::{error, info, success};

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Enable or disable colored status lines for the process.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && should_use_color();
    owo_colors::set_override(enabled);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear() {
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::remove_var("FORCE_COLOR");
        }
    }

    #[test]
    #[serial]
    fn test_should_use_color_no_color() {
        clear();
        unsafe { std::env::set_var("NO_COLOR", "1") };
        assert!(!should_use_color());
        clear();
    }

    #[test]
    #[serial]
    fn test_should_use_color_force_color() {
        clear();
        unsafe { std::env::set_var("FORCE_COLOR", "1") };
        assert!(should_use_color());
        clear();
    }

    #[test]
    #[serial]
    fn test_should_use_color_no_color_overrides_force() {
        clear();
        unsafe {
            std::env::set_var("NO_COLOR", "1");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(!should_use_color());
        clear();
    }
}
