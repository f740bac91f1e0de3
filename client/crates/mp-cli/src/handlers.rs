use crate::{CliError, CliResult, Commands, ThemeCommands, ValidateCommands, demo};

use mp_config::Config;
use mp_core::validation::{
    FormData, ValidationErrors, ValidationRules, forms, rules, validate_field, validate_form,
};
use mp_core::{ThemePreference, UserPatch, UserRole};
use mp_nav::{RoleRouter, RouterView};
use mp_session::{AppSession, ThemeProvider};

use log::error;
use serde_json::{Value, json};

pub(crate) const FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub(crate) const INVALID_CREDENTIALS: &str = "Invalid email or password";
pub(crate) const SIGN_UP_FAILED: &str = "Error creating account";

/// Run one command against the session described by `config`.
pub async fn execute(command: Commands, config: &Config) -> CliResult<Value> {
    if let Commands::Demo = command {
        return demo::run(config).await;
    }

    let session = AppSession::from_config(config)?;
    execute_with(&session, config, command).await
}

/// Run one command against an existing session.
pub async fn execute_with(
    session: &AppSession,
    config: &Config,
    command: Commands,
) -> CliResult<Value> {
    session.initialize().await;

    match command {
        Commands::SignIn { email, password } => sign_in(session, &email, &password).await,
        Commands::SignUp {
            name,
            email,
            password,
            confirm_password,
            role,
        } => {
            let form = SignUpForm {
                name: &name,
                email: &email,
                password: &password,
                confirm_password: &confirm_password,
            };
            sign_up(session, config, form, &role).await
        }
        Commands::SignOut => {
            session.auth().sign_out().await?;
            Ok(json!({ "signedOut": true, "route": current_route(session) }))
        }
        Commands::Whoami => Ok(json!(session.auth().snapshot())),
        Commands::Update {
            name,
            email,
            role,
            verified,
        } => {
            let role = role.as_deref().map(str::parse::<UserRole>).transpose()?;
            let patch = UserPatch {
                id: None,
                email,
                role,
                name,
                is_verified: verified,
            };
            update(session, config, &patch).await
        }
        Commands::Route => Ok(current_route(session)),
        Commands::Theme { action } => match action {
            ThemeCommands::Get => Ok(theme_report(session.theme())),
            ThemeCommands::Set { theme } => {
                let theme = theme.parse::<ThemePreference>()?;
                session.theme().set_theme(theme).await?;
                Ok(theme_report(session.theme()))
            }
        },
        Commands::Validate { action } => validate(config, action),
        Commands::Demo => demo::run(config).await,
    }
}

pub(crate) struct SignUpForm<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub confirm_password: &'a str,
}

impl SignUpForm<'_> {
    fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.password.is_empty()
            && !self.confirm_password.is_empty()
    }

    fn to_form_data(&self) -> FormData {
        form_data(&[
            (forms::NAME, self.name),
            (forms::EMAIL, self.email),
            (forms::PASSWORD, self.password),
            (forms::CONFIRM_PASSWORD, self.confirm_password),
        ])
    }
}

async fn sign_in(session: &AppSession, email: &str, password: &str) -> CliResult<Value> {
    if email.is_empty() || password.is_empty() {
        return Err(CliError::toast(FILL_ALL_FIELDS));
    }

    check_form(
        &form_data(&[(forms::EMAIL, email), (forms::PASSWORD, password)]),
        &forms::sign_in_rules(),
    )?;

    let user = session
        .auth()
        .sign_in(email, password)
        .await
        .map_err(|e| {
            error!("Sign in failed: {e}");
            CliError::toast(INVALID_CREDENTIALS)
        })?;

    Ok(json!({ "user": user, "route": current_route(session) }))
}

async fn sign_up(
    session: &AppSession,
    config: &Config,
    form: SignUpForm<'_>,
    role: &str,
) -> CliResult<Value> {
    if !form.is_complete() {
        return Err(CliError::toast(FILL_ALL_FIELDS));
    }

    if form.password != form.confirm_password {
        return Err(CliError::toast(forms::PASSWORDS_DO_NOT_MATCH));
    }

    let role = role.parse::<UserRole>()?;

    check_form(
        &form.to_form_data(),
        &forms::sign_up_rules(
            config.validation.min_password_length,
            config.validation.max_name_length,
        ),
    )?;

    let user = session
        .auth()
        .sign_up(form.email, form.password, role, form.name)
        .await
        .map_err(|e| {
            error!("Sign up failed: {e}");
            CliError::toast(SIGN_UP_FAILED)
        })?;

    Ok(json!({ "user": user, "route": current_route(session) }))
}

async fn update(session: &AppSession, config: &Config, patch: &UserPatch) -> CliResult<Value> {
    let mut errors = ValidationErrors::new();

    if let Some(name) = &patch.name {
        let name_rules = [
            rules::required(),
            rules::max_length(config.validation.max_name_length),
        ];
        if let Some(message) = validate_field(Some(name.as_str()), &name_rules, None) {
            errors.insert(forms::NAME.to_string(), message);
        }
    }

    if let Some(email) = &patch.email {
        let email_rules = [rules::required(), rules::email()];
        if let Some(message) = validate_field(Some(email.as_str()), &email_rules, None) {
            errors.insert(forms::EMAIL.to_string(), message);
        }
    }

    if !errors.is_empty() {
        return Err(CliError::validation(errors));
    }

    let user = session.auth().update_user(patch).await?;
    Ok(json!({ "user": user, "route": current_route(session) }))
}

fn validate(config: &Config, action: ValidateCommands) -> CliResult<Value> {
    match action {
        ValidateCommands::SignIn { email, password } => check_form(
            &form_data(&[(forms::EMAIL, email.as_str()), (forms::PASSWORD, password.as_str())]),
            &forms::sign_in_rules(),
        )?,
        ValidateCommands::SignUp {
            name,
            email,
            password,
            confirm_password,
        } => {
            let form = SignUpForm {
                name: &name,
                email: &email,
                password: &password,
                confirm_password: &confirm_password,
            };
            check_form(
                &form.to_form_data(),
                &forms::sign_up_rules(
                    config.validation.min_password_length,
                    config.validation.max_name_length,
                ),
            )?
        }
    }

    Ok(json!({ "valid": true }))
}

fn check_form(form: &FormData, rules: &ValidationRules) -> CliResult<()> {
    let errors = validate_form(form, rules);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(CliError::validation(errors))
    }
}

fn form_data(fields: &[(&str, &str)]) -> FormData {
    fields
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

fn current_route(session: &AppSession) -> Value {
    route_report(RoleRouter::new(session.auth()).view())
}

pub(crate) fn route_report(view: RouterView) -> Value {
    match view.route() {
        None => json!({ "route": Value::Null }),
        Some(route) => {
            let tree = route.tree();
            json!({
                "route": route,
                "navigator": tree.navigator,
                "initialScreen": tree.initial_screen,
                "screens": tree.screens,
                "detailScreens": tree.detail_screens,
            })
        }
    }
}

fn theme_report(theme: &ThemeProvider) -> Value {
    json!({
        "theme": theme.theme(),
        "colorScheme": theme.color_scheme(),
        "isDark": theme.is_dark(),
        "colors": theme.colors(),
    })
}
