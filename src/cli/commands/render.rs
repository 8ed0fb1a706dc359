//! Terminal rendering of screen data

use crate::core::screens::LoadState;
use crate::domain::camp::format_display_date;
use crate::domain::{Camp, FamilyMember, HealthReport, Notification, UserData};

pub fn print_camp(camp: &Camp) {
    let title = camp.camp_name.as_deref().unwrap_or("Health Camp");
    println!("  🏥 {title} (#{})", camp.id);
    println!("     📅 {}  ⏰ {}", camp.display_date(), camp.time_window());
    println!("     📍 {}", camp.location);
    if !camp.services.is_empty() {
        println!("     🩺 Services: {}", camp.services);
    }
    if !camp.doctors.is_empty() {
        println!("     👨‍⚕️ Doctors: {}", camp.doctors);
    }
    if let Some(status) = &camp.status {
        println!("     Status: {status}");
    }
}

pub fn print_camps(state: &LoadState<Vec<Camp>>, empty_message: &str) {
    match state.data() {
        Some(camps) if !camps.is_empty() => {
            for camp in camps {
                print_camp(camp);
            }
        }
        _ => println!("  {empty_message}"),
    }
}

/// One-line summary used by the recent-reports card
pub fn print_report_summary(report: &HealthReport) {
    let status = report.status.as_deref().unwrap_or("-");
    println!(
        "  📄 #{} {} | {} | {} | {}",
        report.id,
        report.reporttype,
        format_display_date(&report.campdate),
        report.doctor_name,
        status
    );
}

pub fn print_report_details(report: &HealthReport) {
    println!("  📄 Report #{} ({:?})", report.id, report.category());
    if !report.patient_name.is_empty() {
        let relation = if report.relation.is_empty() {
            String::new()
        } else {
            format!(" ({})", report.relation)
        };
        println!("     Patient: {}{relation}", report.patient_name);
    }
    println!(
        "     Camp: {} on {}",
        report.campname,
        format_display_date(&report.campdate)
    );
    println!("     Doctor: {}", report.doctor_name);
    for (label, value) in [
        ("Symptoms", &report.symptoms),
        ("Diagnosis", &report.diagnosis),
        ("Medicines", &report.medicines),
        ("Condition", &report.condition),
        ("Notes", &report.notes),
    ] {
        if !value.is_empty() {
            println!("     {label}: {value}");
        }
    }
    for test in &report.tests {
        println!(
            "       • {}: {} (normal {}) [{}]",
            test.name,
            test.value,
            test.normal_range,
            test.severity().label()
        );
    }
}

pub fn print_profile(profile: &UserData) {
    println!("  👤 {}", profile.name);
    println!("     {} {}", profile.designation, profile.department);
    println!("     📞 {}", profile.phone_number);
    if !profile.email.is_empty() {
        println!("     ✉️  {}", profile.email);
    }
    if !profile.blood_group.is_empty() {
        println!("     🩸 {}", profile.blood_group);
    }
    println!("     Family members on record: {}", profile.family_members);
    println!(
        "     ABHA ID: {}  Ayushman card: {}",
        yes_no(profile.has_abha_id),
        yes_no(profile.has_ayushman_card)
    );
}

pub fn print_family_member(member: &FamilyMember) {
    println!(
        "  👪 {} ({}) - {}",
        member.name,
        member.relation,
        member.health_id()
    );
    let blood_group = if member.blood_group.is_empty() {
        "-"
    } else {
        member.blood_group.as_str()
    };
    println!(
        "     Age {} | {} | DOB {} | Blood {} | 📞 {}",
        member.age, member.gender, member.date_of_birth, blood_group, member.phone_number
    );
}

pub fn print_notification(notification: &Notification) {
    let marker = if notification.is_read { " " } else { "●" };
    let flag = if notification.is_important() { "❗" } else { "" };
    println!(
        "  {marker} [{}] {}{flag} - {} {}",
        notification.id, notification.title, notification.date, notification.time
    );
    println!("      {}", notification.message);
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
