use serde::{Deserialize, Deserializer};

/// 区分“字段缺省”和“显式 null”
///
/// 配合 `#[serde(default, deserialize_with = "deserialize_present")]` 用于
/// `Option<Option<T>>` 字段：缺省为 `None`，`null` 为 `Some(None)`，
/// 有值为 `Some(Some(v))`。
pub fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "deserialize_present")]
        writers: Option<Option<String>>,
    }

    #[test]
    fn test_absent_null_and_value() {
        let absent: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.writers, None);

        let null: Probe = serde_json::from_str(r#"{"writers": null}"#).unwrap();
        assert_eq!(null.writers, Some(None));

        let value: Probe = serde_json::from_str(r#"{"writers": "Nolan"}"#).unwrap();
        assert_eq!(value.writers, Some(Some("Nolan".to_string())));
    }
}
