//! Rule sets for the authentication forms.

use crate::validation::{ValidationRules, rules};

pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const CONFIRM_PASSWORD: &str = "confirm_password";

pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

pub fn sign_in_rules() -> ValidationRules {
    ValidationRules::from([
        (EMAIL.to_string(), vec![rules::required(), rules::email()]),
        (PASSWORD.to_string(), vec![rules::required()]),
    ])
}

pub fn sign_up_rules(min_password_length: usize, max_name_length: usize) -> ValidationRules {
    ValidationRules::from([
        (
            NAME.to_string(),
            vec![rules::required(), rules::max_length(max_name_length)],
        ),
        (EMAIL.to_string(), vec![rules::required(), rules::email()]),
        (
            PASSWORD.to_string(),
            vec![
                rules::required(),
                rules::min_length(min_password_length),
                rules::password(min_password_length),
            ],
        ),
        (
            CONFIRM_PASSWORD.to_string(),
            vec![
                rules::required(),
                rules::matches_field(PASSWORD).with_message(PASSWORDS_DO_NOT_MATCH),
            ],
        ),
    ])
}
