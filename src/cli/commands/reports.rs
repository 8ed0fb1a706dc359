//! Reports command implementation

use super::context::{load_context, print_not_logged_in, EXIT_FAILURE};
use super::render;
use crate::core::screens::{ReportsController, ReportsTab};
use clap::Args;

/// Arguments for the reports command
#[derive(Args, Debug)]
pub struct ReportsArgs {
    /// Show the family tab instead of the employee tab
    #[arg(long)]
    pub family: bool,

    /// Show the full details of one family report
    #[arg(long, value_name = "REPORT_ID")]
    pub member: Option<i64>,
}

impl ReportsArgs {
    /// Execute the reports command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let context = match load_context(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        if context.session.user_id().await.is_none() {
            print_not_logged_in();
            return Ok(EXIT_FAILURE);
        }

        let controller = ReportsController::new(
            context.api.clone(),
            context.session.clone(),
            context.config.screens.camp_listing_limit,
        );
        controller.load().await;

        if let Some(report_id) = self.member {
            if !controller.select_family_member(report_id).await {
                println!("❌ No family report with id {report_id}");
                return Ok(EXIT_FAILURE);
            }
        } else if self.family {
            controller.select_tab(ReportsTab::Family).await;
        }

        let snapshot = controller.snapshot().await;
        let collections = snapshot.reports.data_or_default();

        if let Some(report) = &snapshot.selected_family_member {
            println!("👪 Family report");
            render::print_report_details(report);
            return Ok(0);
        }

        match snapshot.tab {
            ReportsTab::Employee => {
                println!("📋 Your reports ({})", collections.employee_reports.len());
                if collections.employee_reports.is_empty() {
                    println!("  No reports yet");
                }
                for report in &collections.employee_reports {
                    render::print_report_details(report);
                }
            }
            ReportsTab::Family => {
                println!("👪 Family reports ({})", collections.family_reports.len());
                if collections.family_reports.is_empty() {
                    println!("  No family reports yet");
                }
                for report in &collections.family_reports {
                    render::print_report_summary(report);
                }
                if !collections.family_reports.is_empty() {
                    println!("  Use --member <REPORT_ID> for details");
                }
            }
        }

        println!();
        println!("🏥 Camps");
        render::print_camps(&snapshot.camps, "No camps listed");

        Ok(0)
    }
}
