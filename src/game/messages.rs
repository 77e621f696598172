/// A pair of lines used when writing up an elimination.
///
/// `elim` sits between the assassin and their target, for example
/// "alice *closed the case on* bob". `forfeit` follows the player
/// when nobody gets credit: "bob *cut the wrong wire.*"
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMessage {
    pub elim: String,
    pub forfeit: String,
}

impl LogMessage {
    pub fn new(elim: impl Into<String>, forfeit: impl Into<String>) -> Self {
        Self {
            elim: elim.into(),
            forfeit: forfeit.into(),
        }
    }
}

const DEFAULT_MESSAGES: [(&str, &str); 10] = [
    ("made short work of", "didn’t survive the night."),
    ("said “goodnight” to", "forgot how gravity works."),
    ("made early retirement plans for", "ignored a “wet floor” sign."),
    ("sent a strongly worded bullet to", "forgot to check their corners."),
    ("offered severance pay to", "proved that safety harnesses matter."),
    ("proved that hesitation kills, just ask", "overestimated their balance."),
    ("cleared the schedule of", "didn’t make it to the credits."),
    ("closed the case on", "fell for their own trap."),
    ("retired", "forgot to reload."),
    ("terminated", "cut the wrong wire."),
];

/// The built in set of log messages.
pub fn default_messages() -> Vec<LogMessage> {
    DEFAULT_MESSAGES
        .iter()
        .map(|(elim, forfeit)| LogMessage::new(*elim, *forfeit))
        .collect()
}
