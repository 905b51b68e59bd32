//! Data Transfer Objects for the activities REST API.
//!
//! ```text
//! GET    /activities                          -> ActivitiesResponse
//! POST   /activities/{name}/signup?email=...  -> MessageResponse | ErrorResponse
//! DELETE /activities/{name}/signup?email=...  -> MessageResponse | ErrorResponse
//! ```

use std::{collections::HashMap, fmt};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};

/// Details of one activity as returned by `GET /activities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDetailsDto {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
}

/// Body of `GET /activities`: a JSON object keyed by activity name.
///
/// Entries keep the key order of the JSON document, which is the order the
/// activities are rendered in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivitiesResponse {
    pub entries: Vec<(String, ActivityDetailsDto)>,
}

impl ActivitiesResponse {
    /// Insert an entry, replacing the details of an existing key in place.
    pub fn insert(&mut self, name: String, details: ActivityDetailsDto) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = details,
            None => self.entries.push((name, details)),
        }
    }
}

impl Serialize for ActivitiesResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, details) in &self.entries {
            map.serialize_entry(name, details)?;
        }
        map.end()
    }
}

struct ActivitiesVisitor;

impl<'de> Visitor<'de> for ActivitiesVisitor {
    type Value = ActivitiesResponse;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of activity name to activity details")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let capacity = access.size_hint().unwrap_or(0);
        let mut entries: Vec<(String, ActivityDetailsDto)> = Vec::with_capacity(capacity);
        // Position of each key in `entries`
        let mut positions: HashMap<String, usize> = HashMap::with_capacity(capacity);

        while let Some((name, details)) = access.next_entry::<String, ActivityDetailsDto>()? {
            match positions.get(&name) {
                Some(&index) => entries[index].1 = details,
                None => {
                    positions.insert(name.clone(), entries.len());
                    entries.push((name, details));
                }
            }
        }
        Ok(ActivitiesResponse { entries })
    }
}

impl<'de> Deserialize<'de> for ActivitiesResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ActivitiesVisitor)
    }
}

/// Success body of the signup and unregister endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error body of the signup and unregister endpoints.
///
/// `detail` is usually a string, but validation failures carry a list of
/// error objects instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Build an error body with a plain text detail.
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(serde_json::Value::String(detail.into())),
        }
    }

    /// The detail text, if it is a non-empty string.
    pub fn detail_text(&self) -> Option<&str> {
        match &self.detail {
            Some(serde_json::Value::String(text)) if !text.is_empty() => Some(text.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(max_participants: i64, participants: &[&str]) -> ActivityDetailsDto {
        ActivityDetailsDto {
            description: "D".to_string(),
            schedule: "Mon".to_string(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_activities_response_keeps_document_order() {
        // テスト項目: JSON オブジェクトのキー順がそのまま保持される
        // given (前提条件):
        let json = r#"{
            "Programming Class": {"description": "D", "schedule": "Mon", "max_participants": 20, "participants": []},
            "Chess Club": {"description": "D", "schedule": "Mon", "max_participants": 12, "participants": ["a@x.com"]},
            "Art Studio": {"description": "D", "schedule": "Mon", "max_participants": 15, "participants": []}
        }"#;

        // when (操作):
        let response: ActivitiesResponse = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        let names: Vec<&str> = response.entries.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Programming Class", "Chess Club", "Art Studio"]);
        assert_eq!(response.entries[1].1, details(12, &["a@x.com"]));
    }

    #[test]
    fn test_activities_response_duplicate_key_keeps_first_position() {
        // テスト項目: 重複キーは最初の位置のまま後勝ちの値で上書きされる
        // given (前提条件):
        let json = r#"{
            "A": {"description": "D", "schedule": "Mon", "max_participants": 1, "participants": []},
            "B": {"description": "D", "schedule": "Mon", "max_participants": 2, "participants": []},
            "A": {"description": "D", "schedule": "Mon", "max_participants": 3, "participants": []}
        }"#;

        // when (操作):
        let response: ActivitiesResponse = serde_json::from_str(json).unwrap();

        // then (期待する結果):
        assert_eq!(response.entries.len(), 2);
        assert_eq!(response.entries[0].0, "A");
        assert_eq!(response.entries[0].1.max_participants, 3);
    }

    #[test]
    fn test_activities_response_large_document_with_repeated_keys() {
        // テスト項目: 多数のキーと繰り返しのキーを含む文書でも順序と後勝ちが保たれる
        // given (前提条件):
        let mut fields: Vec<String> = (0..2000)
            .map(|i| {
                format!(
                    r#""Activity {i}": {{"description": "D", "schedule": "Mon", "max_participants": {i}, "participants": []}}"#
                )
            })
            .collect();
        fields.push(
            r#""Activity 7": {"description": "D", "schedule": "Mon", "max_participants": -1, "participants": []}"#
                .to_string(),
        );
        let json = format!("{{{}}}", fields.join(","));

        // when (操作):
        let response: ActivitiesResponse = serde_json::from_str(&json).unwrap();

        // then (期待する結果):
        assert_eq!(response.entries.len(), 2000);
        assert_eq!(response.entries[0].0, "Activity 0");
        assert_eq!(response.entries[1999].0, "Activity 1999");
        assert_eq!(response.entries[7].0, "Activity 7");
        assert_eq!(response.entries[7].1.max_participants, -1);
    }

    #[test]
    fn test_activities_response_rejects_non_object() {
        // テスト項目: オブジェクト以外の JSON はデコードエラーになる
        // given (前提条件):
        let json = r#"[1, 2, 3]"#;

        // when (操作):
        let result = serde_json::from_str::<ActivitiesResponse>(json);

        // then (期待する結果):
        assert!(result.is_err());
    }

    #[test]
    fn test_activities_response_serializes_as_object_in_order() {
        // テスト項目: シリアライズ時もエントリ順の JSON オブジェクトになる
        // given (前提条件):
        let mut response = ActivitiesResponse::default();
        response.insert("Zeta".to_string(), details(1, &[]));
        response.insert("Alpha".to_string(), details(2, &[]));

        // when (操作):
        let json = serde_json::to_string(&response).unwrap();

        // then (期待する結果):
        assert!(json.starts_with(r#"{"Zeta":"#));
        assert!(json.find("Zeta").unwrap() < json.find("Alpha").unwrap());
    }

    #[test]
    fn test_error_response_detail_text() {
        // テスト項目: detail が文字列のときだけテキストとして取り出せる
        // given (前提条件):
        let text: ErrorResponse = serde_json::from_str(r#"{"detail":"Activity not found"}"#).unwrap();
        let missing: ErrorResponse = serde_json::from_str(r#"{}"#).unwrap();
        let empty: ErrorResponse = serde_json::from_str(r#"{"detail":""}"#).unwrap();
        let list: ErrorResponse =
            serde_json::from_str(r#"{"detail":[{"loc":["query","email"],"msg":"field required"}]}"#)
                .unwrap();

        // when (操作) / then (期待する結果):
        assert_eq!(text.detail_text(), Some("Activity not found"));
        assert_eq!(missing.detail_text(), None);
        assert_eq!(empty.detail_text(), None);
        assert_eq!(list.detail_text(), None);
    }
}
