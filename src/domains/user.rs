use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ResponseDefaults;
use crate::interceptors::{ApiResponse, Responder};

pub const DEFAULTS: ResponseDefaults =
    ResponseDefaults::with_messages("user operation succeeded", "user operation failed");

/// Rendering of `login_time`, e.g. `2024-01-01 12:00:00`.
pub const LOGIN_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn responder(debug: bool) -> Responder {
    Responder::new(DEFAULTS, debug)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginSuccess<U> {
    pub user: U,
    pub token: String,
    pub login_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub updated_fields: Vec<String>,
}

pub fn login_success<U: Serialize>(
    responder: &Responder,
    user: U,
    token: impl Into<String>,
) -> ApiResponse<LoginSuccess<U>> {
    login_success_at(responder, user, token, Utc::now())
}

/// [`login_success`] with an explicit login time.
pub fn login_success_at<U: Serialize>(
    responder: &Responder,
    user: U,
    token: impl Into<String>,
    login_time: DateTime<Utc>,
) -> ApiResponse<LoginSuccess<U>> {
    responder.success(
        Some(LoginSuccess {
            user,
            token: token.into(),
            login_time: login_time.format(LOGIN_TIME_FORMAT).to_string(),
        }),
        Some("login succeeded"),
        None,
    )
}

pub fn profile_updated(responder: &Responder, updated_fields: Vec<String>) -> ApiResponse<ProfileUpdate> {
    responder.success(
        Some(ProfileUpdate { updated_fields }),
        Some("profile updated"),
        None,
    )
}

pub fn unauthorized(responder: &Responder, reason: Option<&str>) -> ApiResponse {
    let message = match reason.filter(|reason| !reason.is_empty()) {
        Some(reason) => format!("unauthorized access: {reason}"),
        None => "unauthorized access".to_string(),
    };

    responder.error::<Value>(Some(&message), Some(401), None, None)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDateTime, TimeZone};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn login_success_carries_user_and_token() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let response = login_success_at(&responder(false), json!({ "id": 1 }), "tok", at);

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "code": 200,
                "message": "login succeeded",
                "data": {
                    "user": { "id": 1 },
                    "token": "tok",
                    "login_time": "2024-01-01 12:00:00",
                },
                "success": true,
            })
        );
    }

    #[test]
    fn login_success_stamps_current_time() {
        let response = login_success(&responder(false), "alice", "tok");
        let login_time = response.data.unwrap().login_time;

        assert!(NaiveDateTime::parse_from_str(&login_time, LOGIN_TIME_FORMAT).is_ok());
    }

    #[test]
    fn profile_updated_lists_fields() {
        let response = profile_updated(&responder(false), vec!["email".to_string()]);

        assert_eq!(response.message, "profile updated");
        assert_eq!(response.data.unwrap().updated_fields, vec!["email"]);
    }

    #[test]
    fn unauthorized_without_reason() {
        let response = unauthorized(&responder(false), None);

        assert_eq!(response.code, 401);
        assert!(!response.success);
        assert_eq!(response.message, "unauthorized access");
    }

    #[test]
    fn unauthorized_with_reason() {
        let response = unauthorized(&responder(false), Some("token expired"));

        assert_eq!(response.message, "unauthorized access: token expired");
    }

    #[test]
    fn user_defaults_apply() {
        let response = responder(false).error::<Value>(None, None, None, None);

        assert_eq!(response.message, "user operation failed");
        assert_eq!(response.code, 400);
    }
}
