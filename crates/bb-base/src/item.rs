use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The sole persisted entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub timestamp: DateTime<Utc>,
}

impl Item {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self { timestamp }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_reads_back_exactly() {
        let t = Utc.with_ymd_and_hms(2024, 12, 14, 9, 30, 0).unwrap();
        let item = Item::new(t);
        assert_eq!(item.timestamp, t);
    }

    #[test]
    fn timestamp_keeps_subsecond_precision() {
        let t = Utc.timestamp_opt(1_734_168_600, 123_456_789).unwrap();
        assert_eq!(Item::new(t).timestamp, t);
    }

    #[test]
    fn yaml_shape_is_single_field() {
        let t = Utc.with_ymd_and_hms(2024, 12, 14, 0, 0, 0).unwrap();
        let yaml = serde_yaml::to_string(&Item::new(t)).unwrap();
        assert_eq!(yaml.lines().count(), 1);
        assert!(yaml.starts_with("timestamp: "));
        assert!(yaml.contains("2024-12-14T00:00:00Z"));
    }
}
