/// Default status codes and messages used when a caller leaves them out.
///
/// Each shop domain owns one of these records instead of overriding a base
/// builder, see [`crate::domains`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseDefaults {
    pub success_code: u16,
    pub error_code: u16,
    pub success_message: &'static str,
    pub error_message: &'static str,
}

impl ResponseDefaults {
    pub const BASE: Self = Self {
        success_code: 200,
        error_code: 400,
        success_message: "operation succeeded",
        error_message: "operation failed",
    };

    /// Same codes as [`ResponseDefaults::BASE`] with domain specific messages.
    pub const fn with_messages(success_message: &'static str, error_message: &'static str) -> Self {
        Self {
            success_code: Self::BASE.success_code,
            error_code: Self::BASE.error_code,
            success_message,
            error_message,
        }
    }

    pub fn code_for(&self, success: bool) -> u16 {
        if success {
            self.success_code
        } else {
            self.error_code
        }
    }

    pub fn message_for(&self, success: bool) -> &'static str {
        if success {
            self.success_message
        } else {
            self.error_message
        }
    }
}

impl Default for ResponseDefaults {
    fn default() -> Self {
        Self::BASE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_messages_keeps_base_codes() {
        let defaults = ResponseDefaults::with_messages("ok", "nope");

        assert_eq!(defaults.success_code, 200);
        assert_eq!(defaults.error_code, 400);
        assert_eq!(defaults.message_for(true), "ok");
        assert_eq!(defaults.message_for(false), "nope");
    }

    #[test]
    fn code_for_picks_by_outcome() {
        let defaults = ResponseDefaults::default();

        assert_eq!(defaults.code_for(true), 200);
        assert_eq!(defaults.code_for(false), 400);
    }
}
