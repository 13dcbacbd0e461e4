use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT payload asserted by a bearer token. Wire keys are `user`, `id`
/// and `exp`; a token missing either identity field does not decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "user")]
    pub username: String,
    #[serde(rename = "id")]
    pub user_id: Uuid,
    pub exp: i64, // expires at (unix timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claims_use_short_wire_keys() {
        let claims = Claims {
            username: "alice12".into(),
            user_id: Uuid::new_v4(),
            exp: 1_700_000_000,
        };
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["user"], "alice12");
        assert!(json.get("id").is_some());
        assert_eq!(json["exp"], 1_700_000_000);
        assert!(json.get("username").is_none());
    }
}
