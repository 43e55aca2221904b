//! How a conversation round ended.

use crate::domain::location::ResolvedLocation;

/// Result of handling one inbound event.
///
/// The three failure variants are recovered inside the session loop and
/// shown to the user as plain-language messages.
#[derive(Debug, Clone, PartialEq)]
pub enum RoundOutcome {
    /// `/start` was handled and the welcome prompt sent.
    Welcomed,
    /// `/help` was answered.
    HelpShown,
    /// Prayer times were reported for the resolved location.
    Reported(ResolvedLocation),
    /// Text input was empty or whitespace.
    InputInvalid,
    /// The location could not be resolved.
    LocationNotFound,
    /// The location resolved but no schedule could be fetched.
    ScheduleUnavailable(ResolvedLocation),
    /// Input arrived before `/start`; nothing was sent.
    Ignored,
}

impl RoundOutcome {
    /// Short name for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Welcomed => "welcomed",
            Self::HelpShown => "help_shown",
            Self::Reported(_) => "reported",
            Self::InputInvalid => "input_invalid",
            Self::LocationNotFound => "location_not_found",
            Self::ScheduleUnavailable(_) => "schedule_unavailable",
            Self::Ignored => "ignored",
        }
    }
}
