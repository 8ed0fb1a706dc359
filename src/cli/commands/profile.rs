//! Profile command implementation

use super::context::{load_context, print_not_logged_in, EXIT_FAILURE};
use super::render;
use crate::core::screens::ProfileController;
use clap::Args;

/// Arguments for the profile command
#[derive(Args, Debug)]
pub struct ProfileArgs {}

impl ProfileArgs {
    /// Execute the profile command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let context = match load_context(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        if context.session.session().await.is_none() {
            print_not_logged_in();
            return Ok(EXIT_FAILURE);
        }

        let controller = ProfileController::new(context.api.clone(), context.session.clone());
        controller.load().await;
        let snapshot = controller.snapshot().await;

        println!("👤 Profile");
        match snapshot.profile.data() {
            Some(profile) => render::print_profile(profile),
            None => println!("  Profile unavailable"),
        }

        println!();
        println!("👪 Family members");
        match snapshot.family_members.data() {
            Some(members) if !members.is_empty() => {
                for member in members {
                    render::print_family_member(member);
                }
            }
            _ => println!("  No family members added"),
        }

        Ok(0)
    }
}
