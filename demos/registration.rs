//! User registration on the rail.
//!
//! Run with `cargo run --example registration --features async-tokio`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rop_rail::effect::{FnLogger, LogContext};
use rop_rail::prelude_async::*;

#[derive(Debug, Clone)]
struct NewUser {
    email: String,
    name: String,
    password: String,
    age: u8,
}

#[derive(Debug)]
enum RegisterError {
    Validation(String),
    Persistence(String),
    Notification(String),
}

impl std::fmt::Display for RegisterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterError::Validation(message) => write!(f, "invalid input: {message}"),
            RegisterError::Persistence(message) => write!(f, "could not save user: {message}"),
            RegisterError::Notification(message) => write!(f, "could not notify user: {message}"),
        }
    }
}

#[derive(Default)]
struct UserRepository {
    rows: Mutex<HashMap<String, NewUser>>,
}

impl UserRepository {
    fn insert(&self, user: &NewUser) -> Result<(), String> {
        let mut rows = self.rows.lock().map_err(|e| e.to_string())?;
        if rows.contains_key(&user.email) {
            return Err(format!("{} is already registered", user.email));
        }
        rows.insert(user.email.clone(), user.clone());
        Ok(())
    }
}

fn require(
    messages: &impl MessageProvider,
    user: &NewUser,
    ok: bool,
    key: &str,
) -> Validation<NewUser> {
    if ok {
        Validation::valid(user.clone())
    } else {
        Validation::invalid(messages.message(key).into_owned())
    }
}

fn validate_user(messages: &impl MessageProvider, user: &NewUser) -> Validation<NewUser> {
    validate_all!(
        require(messages, user, !user.email.is_empty(), "empty_email"),
        require(messages, user, user.email.is_empty() || user.email.contains('@'), "invalid_email"),
        require(messages, user, user.name.len() >= 3, "short_name"),
        require(messages, user, !user.password.is_empty(), "empty_password"),
        require(messages, user, user.password.is_empty() || user.password.len() >= 8, "short_password"),
        require(messages, user, user.age >= 18, "underage"),
    )
}

async fn register(
    user: NewUser,
    messages: &StaticMessages,
    repository: &Arc<UserRepository>,
    effects: &EffectExecutor<TokioExecutor>,
    logger: &Arc<dyn StructuredLogger + Send + Sync>,
) -> Outcome<String, RegisterError> {
    let repository = Arc::clone(repository);

    Pipeline::<NewUser, RegisterError>::start(user)
        .validate(|user| validate_user(messages, &user), RegisterError::Validation)
        .flat_map_async(|user| {
            effects.run_effect(
                user,
                move |user| repository.insert(user),
                |fault| RegisterError::Persistence(fault.to_string()),
                "save_user",
                Arc::clone(logger),
            )
        })
        .flat_map_async(|user| {
            effects.run_effect(
                user,
                |user| {
                    if user.email.ends_with("@example.invalid") {
                        Err("mailbox unreachable")
                    } else {
                        Ok(())
                    }
                },
                |fault| RegisterError::Notification(fault.to_string()),
                "send_welcome_email",
                Arc::clone(logger),
            )
        })
        .map(|user| user.email)
        .await
}

#[tokio::main]
async fn main() {
    let messages = StaticMessages::new("en")
        .with("empty_email", "Email must not be empty")
        .with("invalid_email", "Email is not valid")
        .with("short_name", "Name must have at least 3 characters")
        .with("empty_password", "Password must not be empty")
        .with("short_password", "Password must have at least 8 characters")
        .with("underage", "You must be at least 18");

    let logger: Arc<dyn StructuredLogger + Send + Sync> =
        Arc::new(FnLogger::new(|event: &str, context: &LogContext| {
            let fields: Vec<String> = context.iter().map(|(k, v)| format!("{k}={v}")).collect();
            println!("[{event}] {}", fields.join(" "));
        }));
    let repository = Arc::new(UserRepository::default());
    let effects = EffectExecutor::new(TokioExecutor::current());

    let rejected = NewUser {
        email: String::new(),
        name: "Jo".to_string(),
        password: "123".to_string(),
        age: 16,
    };
    let problems = validate_user(&messages, &rejected)
        .into_errors()
        .map(|m| m.to_string())
        .unwrap_or_default();
    println!("all problems: {problems}");

    let candidates = [
        rejected,
        NewUser {
            email: "ana@example.com".to_string(),
            name: "Ana".to_string(),
            password: "correct horse".to_string(),
            age: 30,
        },
        NewUser {
            email: "ana@example.com".to_string(),
            name: "Ana Again".to_string(),
            password: "battery staple".to_string(),
            age: 31,
        },
        NewUser {
            email: "bob@example.invalid".to_string(),
            name: "Bob".to_string(),
            password: "hunter2hunter2".to_string(),
            age: 40,
        },
    ];

    for user in candidates {
        let outcome = register(user, &messages, &repository, &effects, &logger).await;
        let line = outcome.fold(|e| format!("rejected: {e}"), |email| format!("registered {email}"));
        println!("{line}");
    }

    let checks = run_in_parallel(
        "ana@example.com".to_string(),
        [("blocklist", false), ("rate_limit", true)].map(|(name, pass)| {
            move |email: String| async move {
                if pass {
                    Outcome::success(format!("{name}: ok for {email}"))
                } else {
                    Outcome::failure(format!("{name}: rejected {email}"))
                }
            }
        }),
        |errors| errors.join(", "),
    )
    .await;
    println!("checks: {checks:?}");
}
