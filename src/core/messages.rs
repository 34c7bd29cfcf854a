//! Texts returned to the contact form. The site is Polish-language.

pub const SENT: &str = "Wysłano!";
pub const MISSING_FIELDS: &str = "Uzupełnij wszystkie pola i zgody.";
pub const CAPTCHA_FAILED: &str = "Weryfikacja nieudana.";
pub const SERVER_ERROR: &str = "Błąd serwera.";

pub const SUBJECT_LABEL: &str = "[Kontakt] ";
pub const DEV_SUBJECT_PREFIX: &str = "[DEV] ";
pub const HTML_HEADING: &str = "Wiadomość";
pub const HTML_FROM_LABEL: &str = "Od";
