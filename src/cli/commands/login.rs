//! Login command implementation

use super::context::{load_context, EXIT_CONNECTION, EXIT_FAILURE, EXIT_FATAL};
use crate::core::screens::login::{
    strip_phone_separators, LoginController, LoginForm, LoginOutcome,
};
use crate::core::AppShell;
use crate::domain::secret_string;
use clap::Args;

/// Arguments for the login command
#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Registered 10-digit mobile number
    #[arg(long)]
    pub phone: String,

    /// Password (prefer the environment variable over the flag)
    #[arg(long, env = "CHHANV_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl LoginArgs {
    /// The phone argument is validated as given, apart from separators
    fn to_form(&self) -> LoginForm {
        LoginForm::new(
            strip_phone_separators(&self.phone),
            secret_string(self.password.clone().unwrap_or_default()),
        )
    }

    /// Execute the login command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let context = match load_context(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        let form = self.to_form();

        println!("🔐 Logging in as {}", form.phone);

        let controller = LoginController::new(context.api.clone(), context.session.clone());
        let outcome = controller.submit(&form).await;

        let mut shell = AppShell::new(context.session.clone());
        shell.finish_splash();
        shell.on_login(&outcome);

        Ok(report_outcome(&outcome, shell.current().name()))
    }
}

/// Print the outcome and map it to an exit code
fn report_outcome(outcome: &LoginOutcome, screen: &str) -> i32 {
    match outcome {
        LoginOutcome::Success { user_name, .. } => {
            println!("✅ Welcome, {user_name}");
            println!("   Now on: {screen}");
            0
        }
        other => {
            if let Some(alert) = other.alert() {
                println!("❌ {}", alert.title);
                for line in alert.message.lines() {
                    println!("   {line}");
                }
            }
            match other {
                LoginOutcome::Failed(_) => EXIT_CONNECTION,
                LoginOutcome::MalformedResponse(_) => EXIT_FATAL,
                _ => EXIT_FAILURE,
            }
        }
    }
}
