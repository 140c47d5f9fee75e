pub mod types;
pub mod utils;
pub mod env;
pub mod observability;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn message_body_uses_capitalized_key() {
        let body = serde_json::to_value(types::MessageBody::new("Favorite does not exist")).unwrap();
        assert_eq!(body, serde_json::json!({"Message": "Favorite does not exist"}));
    }
}
