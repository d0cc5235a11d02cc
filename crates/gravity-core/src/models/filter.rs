use serde::{Deserialize, Serialize};

use super::stream_item::{Priority, StreamItem};

/// Stream view filter selected in the sidebar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamFilter {
    #[default]
    All,
    High,
    Unread,
}

impl StreamFilter {
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::High => "high",
            Self::Unread => "unread",
        }
    }

    /// Lenient parsing: anything unrecognised means "all"
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("high") => Self::High,
            Some("unread") => Self::Unread,
            _ => Self::All,
        }
    }

    pub fn matches(&self, item: &StreamItem) -> bool {
        match self {
            Self::All => true,
            Self::High => item.priority == Priority::High,
            Self::Unread => item.unread,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_param_defaults_to_all() {
        assert_eq!(StreamFilter::from_param(None), StreamFilter::All);
        assert_eq!(StreamFilter::from_param(Some("bogus")), StreamFilter::All);
        assert_eq!(StreamFilter::from_param(Some("Unread")), StreamFilter::Unread);
        assert_eq!(StreamFilter::from_param(Some("high")), StreamFilter::High);
    }
}
