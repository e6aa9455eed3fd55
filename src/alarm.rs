use serde::Deserialize;

const ALARM_COLOR: u32 = 16711680;
const OK_COLOR: u32 = 65280;

/// Best-effort view of a CloudWatch alarm notification. Missing fields get
/// fixed defaults; a message that is not a JSON object of this shape fails to
/// parse and the caller falls back to plain-text delivery.
#[derive(Debug, Deserialize, PartialEq)]
pub struct AlarmRecord {
    #[serde(rename = "AlarmName", default = "default_alarm_name")]
    pub alarm_name: String,
    #[serde(rename = "NewStateValue", default = "default_state")]
    pub state: String,
    #[serde(rename = "NewStateReason", default = "default_reason")]
    pub reason: String,
}

fn default_alarm_name() -> String {
    "Unknown".to_string()
}

fn default_state() -> String {
    "UNKNOWN".to_string()
}

fn default_reason() -> String {
    "No reason".to_string()
}

impl AlarmRecord {
    pub fn parse(message: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(message)
    }

    /// Red for "ALARM", green for every other state. Unrecognized states land
    /// on the green branch as well.
    pub fn color(&self) -> u32 {
        if self.state == "ALARM" {
            ALARM_COLOR
        } else {
            OK_COLOR
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::alarm::AlarmRecord;

    #[test]
    fn test_parse_full_record() {
        let record = AlarmRecord::parse(
            r#"{"AlarmName":"HighCPU","NewStateValue":"ALARM","NewStateReason":"CPU > 90%"}"#,
        )
        .unwrap();
        assert_eq!(
            record,
            AlarmRecord {
                alarm_name: "HighCPU".to_string(),
                state: "ALARM".to_string(),
                reason: "CPU > 90%".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_missing_fields_uses_defaults() {
        let record = AlarmRecord::parse("{}").unwrap();
        assert_eq!(
            record,
            AlarmRecord {
                alarm_name: "Unknown".to_string(),
                state: "UNKNOWN".to_string(),
                reason: "No reason".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_rejects_plain_text() {
        assert!(AlarmRecord::parse("Instance i-123 terminated").is_err());
    }

    #[test]
    fn test_parse_rejects_json_of_wrong_shape() {
        assert!(AlarmRecord::parse(r#""just a string""#).is_err());
        assert!(AlarmRecord::parse("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_color_alarm_state() {
        let record = AlarmRecord::parse(r#"{"NewStateValue":"ALARM"}"#).unwrap();
        assert_eq!(record.color(), 16711680);
    }

    #[test]
    fn test_color_any_other_state() {
        let ok = AlarmRecord::parse(r#"{"NewStateValue":"OK"}"#).unwrap();
        assert_eq!(ok.color(), 65280);

        let unknown = AlarmRecord::parse("{}").unwrap();
        assert_eq!(unknown.color(), 65280);
    }
}
