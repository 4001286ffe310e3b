//! Colorful console output for solver events.
//!
//! Provides a custom `tracing` layer that formats solver events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solve and phase start/end)
//! - **DEBUG**: Heuristic steps, one per fixed variable
//! - **TRACE**: Candidate variables and appropriateness queries (not printed)

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Targets whose events the console layer prints.
const TARGETS: [&str; 2] = ["fuzzyforge_solver", "fuzzyforge::"];

/// Initializes the solver console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing with `RUST_LOG` overrides.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let mut filter = EnvFilter::builder()
            .with_default_directive(directive("fuzzyforge_solver=info"))
            .from_env_lossy();
        if let Ok(extra) = "fuzzyforge=info".parse::<Directive>() {
            filter = filter.add_directive(extra);
        }

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SolverConsoleLayer)
            .try_init();
    });
}

fn directive(s: &str) -> Directive {
    s.parse().unwrap_or_else(|_| LevelFilter::INFO.into())
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since solve start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 _____                    _____
|  ___|   _ ___________ _|  ___|__  _ __ __ _  ___
| |_ | | | |_  /_  / | | | |_ / _ \| '__/ _` |/ _ \
|  _|| |_| |/ / / /| |_| |  _| (_) | | | (_| |  __/
|_|   \__,_/___/___|\__, |_|  \___/|_|  \__, |\___|
                    |___/               |___/
"#;

    let version_line = format!(
        "              v{} - Fuzzy Constraint Satisfaction Solver\n",
        VERSION
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats solver events with colors.
pub struct SolverConsoleLayer;

impl<S: Subscriber> Layer<S> for SolverConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !accepts_target(metadata.target()) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

fn accepts_target(target: &str) -> bool {
    target == "fuzzyforge" || TARGETS.iter().any(|prefix| target.starts_with(prefix))
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    phase: Option<String>,
    joint_type: Option<String>,
    variable: Option<String>,
    value: Option<String>,
    step: Option<u64>,
    steps: Option<u64>,
    duration_ms: Option<u64>,
    variable_count: Option<u64>,
    constraint_count: Option<u64>,
    instantiations: Option<u64>,
    nodes: Option<u64>,
    backtracks: Option<u64>,
    difficulty: Option<f64>,
    joint_degree: Option<f64>,
    search_space_log10: Option<f64>,
    found: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "phase" => self.phase = Some(s.trim_matches('"').to_string()),
            "joint_type" => self.joint_type = Some(s.trim_matches('"').to_string()),
            "variable" => self.variable = Some(s),
            "value" => self.value = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "step" => self.step = Some(value),
            "steps" => self.steps = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "variable_count" => self.variable_count = Some(value),
            "constraint_count" => self.constraint_count = Some(value),
            "instantiations" => self.instantiations = Some(value),
            "nodes" => self.nodes = Some(value),
            "backtracks" => self.backtracks = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "difficulty" => self.difficulty = Some(value),
            "joint_degree" => self.joint_degree = Some(value),
            "search_space_log10" => self.search_space_log10 = Some(value),
            _ => {}
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "found" {
            self.found = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "phase" => self.phase = Some(value.to_string()),
            "joint_type" => self.joint_type = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "phase_start" => format_phase_start(v),
        "phase_end" => format_phase_end(v),
        "step" => format_step(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let variables = v.variable_count.unwrap_or(0);
    let constraints = v.constraint_count.unwrap_or(0);
    let joint_type = v.joint_type.as_deref().unwrap_or("productive");

    let mut output = format!(
        "{} {} Solving │ {} variables │ {} constraints │ {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        variables.to_formatted_string(&Locale::en).bright_yellow(),
        constraints.to_formatted_string(&Locale::en).bright_yellow(),
        joint_type.bright_white(),
    );

    if let Some(log10) = v.search_space_log10 {
        output.push_str(&format!(" │ scale {}", format_scale(log10).bright_magenta()));
    }

    output
}

fn format_solve_end(v: &EventVisitor) -> String {
    let degree = v.joint_degree.unwrap_or(0.0);
    let found = v.found.unwrap_or(false);
    let duration = v.duration_ms.unwrap_or(0);

    let path = if found {
        "PATH FOUND".bright_green().bold().to_string()
    } else {
        "NO PATH".bright_red().bold().to_string()
    };

    format!(
        "{} {} Solving complete │ {} │ degree {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(duration).yellow(),
        format_degree(degree),
        path
    )
}

fn format_phase_start(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");

    format!(
        "{} {} {} started",
        format_elapsed(),
        "▶".bright_blue(),
        phase.white().bold()
    )
}

fn format_phase_end(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");
    let duration = v.duration_ms.unwrap_or(0);

    let mut output = format!(
        "{} {} {} ended │ {}",
        format_elapsed(),
        "◀".bright_blue(),
        phase.white().bold(),
        format_duration_ms(duration).yellow(),
    );

    if let Some(steps) = v.steps {
        output.push_str(&format!(
            " │ {} steps",
            steps.to_formatted_string(&Locale::en).white()
        ));
    }
    if let Some(instantiations) = v.instantiations {
        output.push_str(&format!(
            " │ {} instantiations",
            instantiations
                .to_formatted_string(&Locale::en)
                .bright_magenta()
                .bold()
        ));
    }
    if let Some(nodes) = v.nodes {
        output.push_str(&format!(
            " │ {} nodes",
            nodes.to_formatted_string(&Locale::en).white()
        ));
    }
    if let Some(backtracks) = v.backtracks {
        output.push_str(&format!(
            " │ {} backtracks",
            backtracks.to_formatted_string(&Locale::en).white()
        ));
    }
    if let Some(found) = v.found {
        let status = if found {
            "found".bright_green().to_string()
        } else {
            "exhausted".bright_red().to_string()
        };
        output.push_str(&format!(" │ {}", status));
    }

    output
}

fn format_step(v: &EventVisitor, level: Level) -> String {
    if level != Level::DEBUG {
        return String::new();
    }

    let step = v.step.unwrap_or(0);
    let variable = v.variable.as_deref().unwrap_or("?");
    let value = v.value.as_deref().unwrap_or("?");
    let difficulty = v
        .difficulty
        .map_or_else(|| "N/A".to_string(), |d| format!("{:.3}", d));

    format!(
        "{} {} Step {:>6} │ {} = {} │ difficulty {}",
        format_elapsed(),
        "✓".bright_green(),
        step.to_formatted_string(&Locale::en).bright_black(),
        variable.white(),
        value.bright_white().bold(),
        difficulty.bright_black()
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

// Degrees live in [0, 1]: full satisfaction is green, none is red.
fn format_degree(degree: f64) -> String {
    let text = format!("{:.4}", degree);
    if degree >= 1.0 {
        text.bright_green().bold().to_string()
    } else if degree > 0.0 {
        text.yellow().to_string()
    } else {
        text.bright_red().to_string()
    }
}

fn format_scale(log10: f64) -> String {
    if !log10.is_finite() {
        return "0".to_string();
    }
    let exponent = log10.floor() as i32;
    let mantissa = 10f64.powf(log10 - exponent as f64);

    format!("{:.3} x 10^{}", mantissa, exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_format_scale() {
        assert_eq!(format_scale(0.0), "1.000 x 10^0");
        assert_eq!(format_scale(2.0_f64.log10() * 10.0), "1.024 x 10^3");
        assert_eq!(format_scale(f64::NEG_INFINITY), "0");
    }

    #[test]
    fn test_accepts_target() {
        assert!(accepts_target("fuzzyforge_solver::heuristic"));
        assert!(accepts_target("fuzzyforge"));
        assert!(accepts_target("fuzzyforge::solve"));
        assert!(!accepts_target("fuzzyforge_config"));
        assert!(!accepts_target("hyper::client"));
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let visitor = EventVisitor {
            event: Some("appropriateness".to_string()),
            ..EventVisitor::default()
        };
        assert!(format_event(&visitor, Level::INFO).is_empty());
    }

    #[test]
    fn test_step_only_at_debug() {
        let visitor = EventVisitor {
            event: Some("step".to_string()),
            step: Some(3),
            variable: Some("\"x\"".to_string()),
            value: Some("1".to_string()),
            difficulty: Some(1.5),
            ..EventVisitor::default()
        };
        assert!(format_event(&visitor, Level::TRACE).is_empty());

        let line = format_event(&visitor, Level::DEBUG);
        assert!(line.contains("\"x\""));
        assert!(line.contains("1.500"));
    }

    #[test]
    fn test_phase_end_lists_present_counters() {
        let visitor = EventVisitor {
            event: Some("phase_end".to_string()),
            phase: Some("Backtracking Search".to_string()),
            nodes: Some(1234),
            backtracks: Some(2),
            found: Some(true),
            ..EventVisitor::default()
        };
        let line = format_event(&visitor, Level::INFO);
        assert!(line.contains("Backtracking Search"));
        assert!(line.contains("1,234"));
        assert!(line.contains("backtracks"));
        assert!(!line.contains("instantiations"));
    }
}
