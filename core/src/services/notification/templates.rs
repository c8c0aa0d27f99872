//! Plain-text message templates for verification and reset notifications.

/// Rendered email, ready to hand to a gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub subject: String,
    pub body: String,
}

/// Email carrying the clickable verification link
pub fn verification_link_email(first_name: &str, verification_url: &str) -> EmailMessage {
    EmailMessage {
        subject: "Verify Your Email - MrMotors".to_string(),
        body: format!(
            "Hi {first_name},\n\n\
             Thank you for signing up at MrMotors!\n\n\
             Please click the link below to verify your email address:\n\
             {verification_url}\n\n\
             If you didn't create an account, please ignore this email.\n\n\
             Best regards,\n\
             The MrMotors Team\n"
        ),
    }
}

/// Email carrying the manually-entered verification code
pub fn verification_code_email(first_name: &str, code: &str) -> EmailMessage {
    EmailMessage {
        subject: "Your Verification Code - MrMotors".to_string(),
        body: format!(
            "Hi {first_name},\n\n\
             Your MrMotors verification code is: {code}\n\n\
             The code expires in 10 minutes.\n\n\
             If you didn't request this code, please ignore this email.\n\n\
             Best regards,\n\
             The MrMotors Team\n"
        ),
    }
}

/// Email carrying the password-reset link
pub fn password_reset_email(first_name: &str, reset_url: &str) -> EmailMessage {
    EmailMessage {
        subject: "Reset Your Password - MrMotors".to_string(),
        body: format!(
            "Hi {first_name},\n\n\
             You requested to reset your password at MrMotors.\n\n\
             Please click the link below to reset your password:\n\
             {reset_url}\n\n\
             This link will expire in 24 hours.\n\n\
             If you didn't request this, please ignore this email.\n\n\
             Best regards,\n\
             The MrMotors Team\n"
        ),
    }
}

/// SMS carrying the phone-verification code
pub fn phone_verification_sms(code: &str) -> String {
    format!("Your MrMotors verification code is: {code}. It expires in 10 minutes.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_link_email_contains_url() {
        let message =
            verification_link_email("Jane", "https://mrmotors.example/verify-email/tok/");
        assert!(message.subject.contains("Verify"));
        assert!(message.body.contains("https://mrmotors.example/verify-email/tok/"));
        assert!(message.body.contains("Hi Jane"));
    }

    #[test]
    fn test_reset_email_mentions_expiry() {
        let message = password_reset_email("Jane", "https://x/password-reset/tok/");
        assert!(message.body.contains("24 hours"));
    }

    #[test]
    fn test_phone_sms_contains_code() {
        let body = phone_verification_sms("123456");
        assert!(body.contains("123456"));
    }
}
