//! Identifiers for stored entities: a millisecond timestamp plus a random base36 suffix.

use chrono::{DateTime, Utc};
use rand::Rng;

const SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn random_suffix() -> String {
    let mut rng = rand::thread_rng();
    (0..SUFFIX_LEN).map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char).collect()
}

/// History item id: `{millis}_{suffix}`.
pub fn history_id(now: DateTime<Utc>) -> String {
    format!("{}_{}", now.timestamp_millis(), random_suffix())
}

/// User template id: `custom-{millis}-{suffix}`.
pub fn template_id(now: DateTime<Utc>) -> String {
    format!("custom-{}-{}", now.timestamp_millis(), random_suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_id_embeds_timestamp() {
        let now = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        let id = history_id(now);
        let (millis, suffix) = id.split_once('_').unwrap();
        assert_eq!(millis, "1700000000123");
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix.bytes().all(|b| BASE36.contains(&b)));
    }

    #[test]
    fn template_id_is_prefixed() {
        let now = DateTime::from_timestamp_millis(42).unwrap();
        assert!(template_id(now).starts_with("custom-42-"));
    }

    #[test]
    fn ids_differ_within_same_millisecond() {
        let now = Utc::now();
        assert_ne!(template_id(now), template_id(now));
    }
}
