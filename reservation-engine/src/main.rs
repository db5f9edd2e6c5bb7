use reservation_engine::reservations::{AvailabilitySummary, ReservationWizard, WizardStep};
use reservation_engine::utils::time::format_long_date;
use reservation_engine::{BookingEnvironment, Config, print_banner, setup_environment};
use shared::models::default_sections;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 加载 .env (可选)
    dotenv::dotenv().ok();

    // 2. 加载配置并初始化日志
    let config = Config::from_env();
    setup_environment(&config)?;

    print_banner();
    tracing::info!(
        timezone = %config.timezone,
        mode = ?config.availability_mode,
        "Reservation engine starting..."
    );

    // 3. 构建运行环境
    let env = BookingEnvironment::from_config(&config)?;
    let mut wizard = ReservationWizard::new(env);

    let steps: Vec<_> = [
        WizardStep::DateTime,
        WizardStep::TableSelect,
        WizardStep::GuestInfo,
        WizardStep::Confirm,
    ]
    .into_iter()
    .map(|step| format!("{}. {}", step.number(), step.title()))
    .collect();
    println!("Steps: {}", steps.join("  >  "));
    println!();

    let days = wizard.calendar();
    println!("Bookable days:");
    for day in &days {
        let marker = if day.is_today { " (today)" } else { "" };
        println!("  {}  {}{}", day.iso_date, day.display_label, marker);
    }

    // 4. 第一个还有空位的日期
    let mut first_open = None;
    for day in &days {
        wizard.select_date(day.date)?;
        if let Some(slot) = wizard.time_slots().iter().find(|s| s.available) {
            first_open = Some((day.date, slot.time.clone()));
            break;
        }
    }

    let Some((date, time)) = first_open else {
        println!("No open time slots in the next {} days", days.len());
        return Ok(());
    };

    println!();
    println!("{}:", format_long_date(date));
    for group in wizard.slot_groups() {
        let labels: Vec<_> = group
            .slots
            .iter()
            .map(|s| if s.available { s.time.clone() } else { format!("({})", s.time) })
            .collect();
        println!("  {:<7} {}", group.period.name(), labels.join("  "));
    }

    // 5. 该时段的桌台
    wizard.select_time(&time)?;
    let AvailabilitySummary {
        total,
        available,
        suitable,
    } = wizard.availability_summary();
    println!();
    println!(
        "Tables at {} for {}: {} total, {} available, {} suitable",
        time,
        wizard.draft().party_size,
        total,
        available,
        suitable
    );
    for entry in wizard.tables() {
        let status = match (entry.available, entry.suitable) {
            (true, true) => "free",
            (true, false) => "too small",
            (false, _) => "taken",
        };
        println!(
            "  {:<9} {:>2} seats  {:<16} {}",
            entry.table.name,
            entry.table.seats,
            entry.table.area.display_name(),
            status
        );
    }

    println!();
    println!("Sections:");
    for section in default_sections() {
        println!("  {:<13} {}", section.name, section.description);
    }

    Ok(())
}
