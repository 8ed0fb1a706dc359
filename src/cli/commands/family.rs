//! Family command implementation

use super::context::{load_context, EXIT_CONNECTION, EXIT_FAILURE};
use super::render;
use crate::core::screens::{AddFamilyOutcome, ProfileController};
use crate::domain::NewFamilyMember;
use clap::{Args, Subcommand};

/// Family member subcommands
#[derive(Subcommand, Debug)]
pub enum FamilyCommand {
    /// Add a family member to the logged-in account
    Add(FamilyAddArgs),
}

impl FamilyCommand {
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        match self {
            FamilyCommand::Add(args) => args.execute(config_path).await,
        }
    }
}

/// Arguments for `family add`
#[derive(Args, Debug)]
pub struct FamilyAddArgs {
    #[arg(long)]
    pub name: String,

    /// Relation to the employee (e.g. Spouse, Son)
    #[arg(long)]
    pub relation: String,

    /// Age in years; used to derive the date of birth when --dob is absent
    #[arg(long, default_value = "")]
    pub age: String,

    #[arg(long)]
    pub gender: String,

    #[arg(long)]
    pub phone: String,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    pub dob: String,

    #[arg(long, default_value = "")]
    pub blood_group: String,
}

impl FamilyAddArgs {
    fn to_form(&self) -> NewFamilyMember {
        NewFamilyMember {
            name: self.name.clone(),
            relation: self.relation.clone(),
            date_of_birth: self.dob.clone(),
            age: self.age.clone(),
            blood_group: self.blood_group.clone(),
            gender: self.gender.clone(),
            phone_number: self.phone.clone(),
        }
    }

    /// Execute the family add command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let context = match load_context(config_path) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        let controller = ProfileController::new(context.api.clone(), context.session.clone());
        let outcome = controller.add_family_member(&self.to_form()).await;

        let alert = outcome.alert();
        let marker = if outcome.is_added() { "✅" } else { "❌" };
        println!("{marker} {}", alert.title);
        println!("   {}", alert.message);

        match outcome {
            AddFamilyOutcome::Added(_) => {
                let snapshot = controller.snapshot().await;
                if let Some(members) = snapshot.family_members.data() {
                    println!();
                    println!("👪 Family members");
                    for member in members {
                        render::print_family_member(member);
                    }
                }
                Ok(0)
            }
            AddFamilyOutcome::Failed(_) => Ok(EXIT_CONNECTION),
            _ => Ok(EXIT_FAILURE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_mapping() {
        let args = FamilyAddArgs {
            name: "Meena".to_string(),
            relation: "Spouse".to_string(),
            age: "34".to_string(),
            gender: "Female".to_string(),
            phone: "9876500000".to_string(),
            dob: String::new(),
            blood_group: "B+".to_string(),
        };
        let form = args.to_form();
        assert_eq!(form.name, "Meena");
        assert_eq!(form.phone_number, "9876500000");
        assert!(form.date_of_birth.is_empty());
        assert!(form.missing_fields().is_empty());
    }
}
