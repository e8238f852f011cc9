//! Output rendering and formatting

use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use console::{Style, Term};
use romrun_ops::{
    EmulatorInfo, HealthCheck, HealthStatus, IssueSeverity, OperationResult, PlatformInfo,
};
use romrun_types::{ColorChoice, LaunchReport, Platform};
use std::io;

/// Output renderer for CLI results
#[derive(Clone)]
pub struct OutputRenderer {
    /// Use JSON output format
    json_output: bool,
    /// Color configuration
    color_choice: ColorChoice,
    /// Terminal instance
    term: Term,
}

impl OutputRenderer {
    /// Create new output renderer
    pub fn new(json_output: bool, color_choice: ColorChoice) -> Self {
        Self {
            json_output,
            color_choice,
            term: Term::stdout(),
        }
    }

    /// Render operation result
    pub fn render_result(&self, result: &OperationResult) -> io::Result<()> {
        if self.json_output {
            self.render_json(result)
        } else {
            self.render_table(result)
        }
    }

    /// Render as JSON
    fn render_json(&self, result: &OperationResult) -> io::Result<()> {
        let json = result.to_json().map_err(io::Error::other)?;
        println!("{json}");
        Ok(())
    }

    /// Render as formatted table
    fn render_table(&self, result: &OperationResult) -> io::Result<()> {
        match result {
            OperationResult::Report(report) => self.render_launch_report(report),
            OperationResult::EmulatorList(list) => self.render_emulator_list(list),
            OperationResult::PlatformList(list) => self.render_platform_list(list),
            OperationResult::HealthCheck(health) => self.render_health_check(health),
        }
    }

    /// Render launch report with the full attempt trail
    fn render_launch_report(&self, report: &LaunchReport) -> io::Result<()> {
        if report.success {
            let winner = report.winner.as_deref().unwrap_or("?");
            println!(
                "[OK] Launched {} with {} ({}ms)",
                self.style_name(&report.rom.display().to_string()),
                self.style_name(winner),
                report.duration_ms
            );
        } else {
            println!(
                "[ERROR] Could not launch {}: every installed emulator failed",
                self.style_name(&report.rom.display().to_string())
            );
        }

        if report.attempts.is_empty() {
            return Ok(());
        }

        println!();
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new("#").add_attribute(Attribute::Bold),
            Cell::new("Emulator").add_attribute(Attribute::Bold),
            Cell::new("Outcome").add_attribute(Attribute::Bold),
            Cell::new("Command").add_attribute(Attribute::Bold),
        ]);

        for (index, attempt) in report.attempts.iter().enumerate() {
            let outcome_cell = match attempt.outcome.failure_detail() {
                None => Cell::new("launched").fg(Color::Green),
                Some(detail) => Cell::new(detail).fg(Color::Red),
            };
            table.add_row(vec![
                Cell::new((index + 1).to_string()),
                Cell::new(&attempt.emulator),
                outcome_cell,
                Cell::new(attempt.command.join(" ")),
            ]);
        }

        println!("{table}");
        Ok(())
    }

    /// Render emulator list
    fn render_emulator_list(&self, list: &[EmulatorInfo]) -> io::Result<()> {
        if list.is_empty() {
            println!("No catalog entries.");
            return Ok(());
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new("Platform").add_attribute(Attribute::Bold),
            Cell::new("Emulator").add_attribute(Attribute::Bold),
            Cell::new("Priority").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
            Cell::new("Executable").add_attribute(Attribute::Bold),
        ]);

        for info in list {
            let status_cell = if info.installed {
                Cell::new("Installed").fg(Color::Green)
            } else {
                Cell::new("Missing").fg(Color::Yellow)
            };
            let executable = info
                .executable
                .as_ref()
                .map_or_else(|| format!("({})", info.program), |p| p.display().to_string());

            table.add_row(vec![
                Cell::new(info.platform.id()),
                Cell::new(&info.name),
                Cell::new(info.priority.to_string()),
                status_cell,
                Cell::new(executable),
            ]);
        }

        println!("{table}");
        Ok(())
    }

    /// Render platform list
    fn render_platform_list(&self, list: &[PlatformInfo]) -> io::Result<()> {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new("Platform").add_attribute(Attribute::Bold),
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Extensions").add_attribute(Attribute::Bold),
            Cell::new("Installed").add_attribute(Attribute::Bold),
        ]);

        for info in list {
            let extensions = info
                .extensions
                .iter()
                .map(|e| format!(".{e}"))
                .collect::<Vec<_>>()
                .join(" ");
            let coverage_cell = if info.installed == 0 {
                Cell::new(format!("0 of {}", info.emulators)).fg(Color::Red)
            } else {
                Cell::new(format!("{} of {}", info.installed, info.emulators)).fg(Color::Green)
            };

            table.add_row(vec![
                Cell::new(&info.id),
                Cell::new(&info.display_name),
                Cell::new(extensions),
                coverage_cell,
            ]);
        }

        println!("{table}");
        Ok(())
    }

    /// Render health check results
    fn render_health_check(&self, health: &HealthCheck) -> io::Result<()> {
        let overall_icon = if health.healthy { "[OK]" } else { "[ERROR]" };
        println!("{overall_icon} Emulator Coverage Check");
        println!();

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(vec![
            Cell::new("Platform").add_attribute(Attribute::Bold),
            Cell::new("Status").add_attribute(Attribute::Bold),
            Cell::new("Duration").add_attribute(Attribute::Bold),
            Cell::new("Message").add_attribute(Attribute::Bold),
        ]);

        // Components keyed by platform id; iterate in the canonical order
        for platform in Platform::ALL {
            let Some(component) = health.components.get(platform.id()) else {
                continue;
            };
            let status_cell = match component.status {
                HealthStatus::Healthy => Cell::new("Healthy").fg(Color::Green),
                HealthStatus::Degraded => Cell::new("Degraded").fg(Color::Yellow),
                HealthStatus::Unhealthy => Cell::new("Unhealthy").fg(Color::Red),
            };

            table.add_row(vec![
                Cell::new(&component.name),
                status_cell,
                Cell::new(format!("{}ms", component.check_duration_ms)),
                Cell::new(&component.message),
            ]);
        }

        println!("{table}");

        // Issues
        if !health.issues.is_empty() {
            println!();
            println!("Issues Found:");

            for issue in &health.issues {
                let severity_icon = match issue.severity {
                    IssueSeverity::Low => "[INFO]",
                    IssueSeverity::Medium => "[WARN]",
                    IssueSeverity::High => "[HIGH]",
                    IssueSeverity::Critical => "[CRITICAL]",
                };

                println!("{severity_icon} {}: {}", issue.component, issue.description);
                if let Some(suggestion) = &issue.suggestion {
                    println!("   {suggestion}");
                }
            }
        }

        Ok(())
    }

    /// Style a highlighted name
    fn style_name(&self, name: &str) -> String {
        if self.supports_color() {
            Style::new().bold().apply_to(name).to_string()
        } else {
            name.to_string()
        }
    }

    /// Check if color output is supported
    fn supports_color(&self) -> bool {
        match self.color_choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.term.features().colors_supported(),
        }
    }
}
