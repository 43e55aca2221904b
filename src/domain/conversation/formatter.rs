//! Reply templates.
//!
//! Every text the bot sends is rendered here. Nothing in this module touches
//! the transport or performs I/O.

use std::fmt::Write;

use crate::domain::prayer::PrayerSchedule;

/// Renders user-facing messages.
pub struct MessageFormatter;

impl MessageFormatter {
    /// Greeting sent on `/start`.
    pub fn welcome() -> &'static str {
        WELCOME
    }

    /// Command overview sent on `/help`.
    pub fn help() -> &'static str {
        HELP
    }

    /// Prompt sent after every completed round.
    pub fn location_prompt() -> &'static str {
        LOCATION_PROMPT
    }

    /// Guidance when a location could not be resolved.
    pub fn not_found() -> &'static str {
        NOT_FOUND
    }

    /// Validation prompt for empty text.
    pub fn empty_input() -> &'static str {
        EMPTY_INPUT
    }

    /// Apology when the timings service could not be reached.
    pub fn unavailable() -> &'static str {
        UNAVAILABLE
    }

    /// Prayer times report for `label`, in canonical prayer order.
    ///
    /// Keys outside the canonical set are left out.
    pub fn report(label: &str, schedule: &PrayerSchedule) -> String {
        let mut out = format!("Prayer Times for {}:\n\n", label);
        for (prayer, time) in schedule.canonical_entries() {
            // writing to a String cannot fail
            let _ = writeln!(out, "{}: {}", prayer, time);
        }
        out
    }
}

// ============================================================================
// Templates
// ============================================================================

const WELCOME: &str = "Welcome to Prayer Times Bot! 🌙

I will send you prayer times based on your location.
You can either:
1. Share your current location using the button below
2. Type any city name (e.g., \"New York\", \"London\", \"Tokyo\")
3. Type city and country (e.g., \"Paris, France\", \"Dubai, UAE\")";

const HELP: &str = "Available commands:
/start - Start the bot and enter a location
/help - Show this help message

You can get prayer times by:
1. Typing any city name (e.g., \"New York\", \"London\")
2. Typing city and country (e.g., \"Paris, France\")
3. Sharing your current location";

const LOCATION_PROMPT: &str = "To get prayer times for another location:
1. Type any city name (e.g., 'New York', 'London')
2. Type city and country (e.g., 'Paris, France')
3. Share your current location using the button";

const NOT_FOUND: &str = "Sorry, I couldn't find that location. Please try:
1. A more specific location (e.g., 'New York, USA' instead of just 'New York')
2. Share your current location using the button";

const EMPTY_INPUT: &str = "Please enter a valid location name or share your location.";

const UNAVAILABLE: &str = "Sorry, I couldn't fetch the prayer times. Please try again later.";
