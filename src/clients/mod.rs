//! Clients for the captcha and email providers

pub mod ses;
pub mod turnstile;

pub use ses::{EmailSender, SesEmailSender};
pub use turnstile::{CaptchaOutcome, CaptchaVerifier, TurnstileClient};
