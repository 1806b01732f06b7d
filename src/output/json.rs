//! JSON report output.

use crate::models::{InfoRow, SubnetResult};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Envelope written for `--format json`.
#[derive(Serialize, Debug)]
pub struct JsonReport<'a> {
    /// Input as entered, surrounding whitespace removed.
    pub input: &'a str,
    pub generated_at: String,
    pub basic_info: Vec<InfoRow>,
    pub notice: Option<String>,
    pub result: &'a SubnetResult,
}

impl<'a> JsonReport<'a> {
    pub fn new(input: &'a str, result: &'a SubnetResult, generated_at: DateTime<Utc>) -> Self {
        JsonReport {
            input,
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            basic_info: result.basic_info(),
            notice: result.truncation_notice(),
            result,
        }
    }
}

/// Pretty-printed JSON report of `result`.
pub fn render_json(
    input: &str,
    result: &SubnetResult,
    generated_at: DateTime<Utc>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport::new(input, result, generated_at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::compute_subnets;
    use chrono::TimeZone;
    use serde_json::Value;

    #[test]
    fn test_render_json() {
        let result = compute_subnets("192.168.1.5/31").unwrap();
        let when = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let text = render_json("192.168.1.5/31", &result, when).unwrap();
        let v: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(v["input"], "192.168.1.5/31");
        assert_eq!(v["generated_at"], "2024-05-01T12:00:00Z");
        assert_eq!(v["notice"], Value::Null);
        assert_eq!(v["result"]["network"], "192.168.1.4/31");
        assert_eq!(v["result"]["base_network"], "192.168.1.0/24");
        assert_eq!(v["result"]["netmask"], "255.255.255.254");
        assert_eq!(v["result"]["usable_hosts"], 0);
        assert_eq!(v["result"]["block_size"], 2);
        assert_eq!(v["result"]["subnet_bits"], 7);
        assert_eq!(v["result"]["num_subnets"], 128);
        assert_eq!(v["result"]["rows"].as_array().unwrap().len(), 128);
        assert_eq!(v["result"]["rows"][0]["first_host"], Value::Null);
        assert_eq!(v["basic_info"][0]["property"], "Network Address");
        assert_eq!(v["basic_info"][0]["value"], "192.168.1.4");
    }

    #[test]
    fn test_render_json_unsplit() {
        let result = compute_subnets("10.0.0.1/8").unwrap();
        let when = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let v: Value = serde_json::from_str(&render_json("10.0.0.1/8", &result, when).unwrap())
            .unwrap();
        assert_eq!(v["result"]["num_subnets"], Value::Null);
        assert_eq!(v["result"]["truncated"], false);
        assert_eq!(v["result"]["rows"][0]["first_host"], "10.0.0.1");
        assert_eq!(v["result"]["rows"][0]["last_host"], "10.255.255.254");
    }
}
