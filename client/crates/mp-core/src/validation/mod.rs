//! Form validation helper.
//!
//! A [`Rule`] is a predicate over a field value (optionally looking at the
//! whole form) plus the message reported when it fails. Rules for a field are
//! evaluated in order and only the first failing message is kept.
//!
//! ```
//! use mp_core::validation::{FormData, ValidationRules, rules, validate_form};
//!
//! let form = FormData::from([("email".to_string(), "bad".to_string())]);
//! let rules = ValidationRules::from([("email".to_string(), vec![rules::email()])]);
//!
//! let errors = validate_form(&form, &rules);
//! assert_eq!(errors["email"], "Please enter a valid email address");
//! ```

pub mod forms;
pub mod patterns;
pub mod rules;

mod rule;

pub use rule::Rule;

use std::collections::{BTreeMap, HashMap};

/// Flat mapping of field name to raw input.
pub type FormData = HashMap<String, String>;

/// Rules per field name.
pub type ValidationRules = BTreeMap<String, Vec<Rule>>;

/// First error message per failing field. Fields without errors are absent.
pub type ValidationErrors = BTreeMap<String, String>;

/// Returns the message of the first rule that fails, or `None`.
pub fn validate_field(value: Option<&str>, rules: &[Rule], form: Option<&FormData>) -> Option<String> {
    let empty = FormData::new();
    let form = form.unwrap_or(&empty);

    rules
        .iter()
        .find(|rule| !rule.passes(value, form))
        .map(|rule| rule.message().to_string())
}

/// Validate every field named in `rules` against `form`.
pub fn validate_form(form: &FormData, rules: &ValidationRules) -> ValidationErrors {
    rules
        .iter()
        .filter_map(|(field, field_rules)| {
            let value = form.get(field).map(String::as_str);
            validate_field(value, field_rules, Some(form)).map(|message| (field.clone(), message))
        })
        .collect()
}
