//! Demo: track a month-long project and render its burndown chart.

use burndown_chart::ChartRenderer;
use burndown_core::ProjectPlan;
use burndown_progress::Session;
use chrono::NaiveDate;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();

    let plan = ProjectPlan::new("Web Application Development", start, end, 120.0)?;
    let mut session = Session::new(plan);

    session.append(
        NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
        100.0,
        Some("Completed project setup and initial architecture".into()),
    )?;
    session.append(
        NaiveDate::from_ymd_opt(2024, 2, 12).unwrap(),
        70.0,
        Some("Implemented core backend services".into()),
    )?;
    session.append(
        NaiveDate::from_ymd_opt(2024, 2, 19).unwrap(),
        35.0,
        Some("Developed frontend components and integrated APIs".into()),
    )?;
    session.append(
        NaiveDate::from_ymd_opt(2024, 2, 26).unwrap(),
        0.0,
        Some("Final testing and deployment preparation".into()),
    )?;

    let ideal: Vec<_> = session.ideal()?.points().collect();
    let caption = format!("Burndown Chart - {}", session.plan().name);
    let chart = ChartRenderer::new().render(&caption, &ideal, &session.observations())?;
    chart.write_to("web_app_burndown.svg")?;
    println!("Burndown chart saved to web_app_burndown.svg");

    let summary = session.summary(end);
    println!("\nProject Progress Summary:");
    println!("  Total scope: {}", summary.total_scope);
    println!("  Percent complete: {:.0}%", summary.percent_complete * 100.0);
    println!("  Days elapsed: {}", summary.days_elapsed);
    println!("  Days remaining: {}", summary.days_remaining);
    println!("  Status: {}", summary.status);

    Ok(())
}
