//! Home command implementation

use super::context::{load_context, print_not_logged_in, EXIT_FAILURE};
use super::render;
use crate::core::screens::HomeController;
use clap::Args;

/// Arguments for the home command
#[derive(Args, Debug)]
pub struct HomeArgs {
    /// List every camp instead of the one under the carousel cursor
    #[arg(long)]
    pub all: bool,
}

impl HomeArgs {
    /// Execute the home command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let context = match load_context(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        if context.session.user_id().await.is_none() {
            print_not_logged_in();
            return Ok(EXIT_FAILURE);
        }

        let controller = HomeController::new(
            context.api.clone(),
            context.session.clone(),
            context.config.screens.recent_reports_limit,
        );
        controller.load().await;
        let snapshot = controller.snapshot().await;

        println!("🏠 Upcoming camps");
        if self.all {
            render::print_camps(&snapshot.camps, "No upcoming camps");
        } else {
            match snapshot.current_camp() {
                Some(camp) => {
                    render::print_camp(camp);
                    if snapshot.carousel.len() > 1 {
                        println!(
                            "     ({} of {}, use --all to list every camp)",
                            snapshot.carousel.index() + 1,
                            snapshot.carousel.len()
                        );
                    }
                }
                None => println!("  No upcoming camps"),
            }
        }

        println!();
        println!("📋 Recent reports");
        match snapshot.recent_reports.data() {
            Some(reports) if !reports.is_empty() => {
                for report in reports {
                    render::print_report_summary(report);
                }
            }
            _ => println!("  No recent reports"),
        }

        Ok(0)
    }
}
