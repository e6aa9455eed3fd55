use serde::Serialize;

use crate::alarm::AlarmRecord;

/// Outbound Discord body. One of two shapes, chosen by whether the SNS
/// message parses as an alarm record.
#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum WebhookPayload {
    Alarm { embeds: Vec<Embed> },
    Text { content: String },
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl WebhookPayload {
    pub fn from_message(message: &str) -> Self {
        match AlarmRecord::parse(message) {
            Ok(alarm) => Self::from_alarm(alarm),
            Err(_) => WebhookPayload::Text {
                content: format!("📢 **Notification:**\n{}", message),
            },
        }
    }

    fn from_alarm(alarm: AlarmRecord) -> Self {
        let color = alarm.color();
        WebhookPayload::Alarm {
            embeds: vec![Embed {
                title: format!("🚨 {}", alarm.alarm_name),
                description: alarm.reason,
                color,
                fields: vec![EmbedField {
                    name: "State".to_string(),
                    value: alarm.state,
                    inline: true,
                }],
            }],
        }
    }
}
