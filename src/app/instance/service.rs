//! 实例描述符
//!
//! 进程启动时生成一次，之后只读。每次请求只重新计算运行时长。

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::model::InstanceInfo;

const INSTANCE_ID_LEN: usize = 8;
const FALLBACK_HOSTNAME: &str = "unknown-host";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceDescriptor {
    instance_id: String,
    hostname: String,
    startup_time: DateTime<Utc>,
}

impl InstanceDescriptor {
    /// 在启动时调用：生成 8 位实例 id，读取主机名
    pub fn capture(startup_time: DateTime<Utc>) -> Self {
        let hostname = hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| FALLBACK_HOSTNAME.to_string());

        Self::new(generate_instance_id(), hostname, startup_time)
    }

    pub fn new(instance_id: String, hostname: String, startup_time: DateTime<Utc>) -> Self {
        Self {
            instance_id,
            hostname,
            startup_time,
        }
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn startup_time(&self) -> DateTime<Utc> {
        self.startup_time
    }

    /// 以 `now` 为准生成实例信息
    pub fn snapshot(&self, now: DateTime<Utc>) -> InstanceInfo {
        InstanceInfo {
            instance_id: self.instance_id.clone(),
            hostname: self.hostname.clone(),
            startup_time: self.startup_time,
            uptime: format_uptime(now - self.startup_time),
        }
    }
}

/// UUID 简写形式的前 8 个字符
fn generate_instance_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(INSTANCE_ID_LEN);
    id
}

/// 格式化为 `HH:MM:SS`
///
/// 小时是累计小时数，超过 24 也不回绕，超过 99 时会多于两位。负值按 0 处理。
pub fn format_uptime(elapsed: Duration) -> String {
    let total = elapsed.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn uptime_is_zero_padded() {
        assert_eq!(format_uptime(Duration::seconds(0)), "00:00:00");
        assert_eq!(format_uptime(Duration::seconds(65)), "00:01:05");
        assert_eq!(format_uptime(Duration::seconds(3 * 3600 + 7)), "03:00:07");
    }

    #[test]
    fn uptime_hours_do_not_wrap_at_a_day() {
        let elapsed = Duration::hours(26) + Duration::minutes(3) + Duration::seconds(7);
        assert_eq!(format_uptime(elapsed), "26:03:07");
    }

    #[test]
    fn uptime_beyond_99_hours_grows_wider() {
        assert_eq!(format_uptime(Duration::hours(100) + Duration::seconds(5)), "100:00:05");
    }

    #[test]
    fn negative_uptime_clamps_to_zero() {
        assert_eq!(format_uptime(Duration::seconds(-30)), "00:00:00");
    }

    #[test]
    fn sub_second_remainder_is_truncated() {
        assert_eq!(format_uptime(Duration::milliseconds(59_999)), "00:00:59");
    }

    #[test]
    fn captured_id_is_eight_hex_chars() {
        let descriptor = InstanceDescriptor::capture(start());
        assert_eq!(descriptor.instance_id().len(), 8);
        assert!(descriptor
            .instance_id()
            .chars()
            .all(|c| c.is_ascii_hexdigit()));
        assert!(!descriptor.hostname().is_empty());
    }

    #[test]
    fn snapshot_keeps_identity_and_computes_uptime() {
        let descriptor = InstanceDescriptor::new("abcd1234".into(), "node-a".into(), start());
        let first = descriptor.snapshot(start() + Duration::seconds(10));
        let second = descriptor.snapshot(start() + Duration::seconds(3725));

        assert_eq!(first.instance_id, "abcd1234");
        assert_eq!(second.instance_id, first.instance_id);
        assert_eq!(second.hostname, "node-a");
        assert_eq!(first.startup_time, start());
        assert_eq!(first.uptime, "00:00:10");
        assert_eq!(second.uptime, "01:02:05");
    }

    #[test]
    fn instance_info_uses_camel_case_fields() {
        let descriptor = InstanceDescriptor::new("abcd1234".into(), "node-a".into(), start());
        let json = serde_json::to_value(descriptor.snapshot(start())).unwrap();
        assert_eq!(json["instanceId"], "abcd1234");
        assert_eq!(json["hostname"], "node-a");
        assert_eq!(json["startupTime"], "2024-03-01T12:00:00Z");
        assert_eq!(json["uptime"], "00:00:00");
    }
}
