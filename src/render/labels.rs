//! Known record targets.
//!
//! Some addresses belong to hosting providers we deal with often; the table
//! shows their operator and location instead of only the bare IP.

/// Literal IP address → operator/location label.
pub const KNOWN_TARGETS: &[(&str, &str)] = &[
    ("213.143.195.2", "21TORR"),
    ("94.186.156.122", "21TORR"),
    ("35.246.248.138", "Platform.sh DE"),
    ("35.246.184.45", "Platform.sh DE"),
    ("35.242.229.239", "Platform.sh DE"),
    ("13.51.62.86", "Platform.sh SE"),
];

/// Label for a known target, if any. Matches the literal string only.
pub fn label_for(target: &str) -> Option<&'static str> {
    KNOWN_TARGETS
        .iter()
        .find(|(ip, _)| *ip == target)
        .map(|(_, label)| *label)
}

/// How the target column of a record row is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A known address, shown as `LABEL (ip)`
    Known {
        /// Operator/location label
        label: &'static str,
        /// The literal address
        ip: String,
    },
    /// Any other target, shown verbatim
    Plain(String),
    /// The record carried no printable target
    Missing,
}

impl Target {
    /// Classifies a record target.
    pub fn from_record_target(target: Option<&str>) -> Self {
        match target {
            None => Target::Missing,
            Some(value) => match label_for(value) {
                Some(label) => Target::Known {
                    label,
                    ip: value.to_string(),
                },
                None => Target::Plain(value.to_string()),
            },
        }
    }
}
