use clap::Parser;
use ticket_estimator::utils::error::{ErrorSeverity, TicketError};
use ticket_estimator::utils::{logger, validation::Validate};
use ticket_estimator::{
    BugTicket, CliConfig, EstimateParams, RequestTicket, TicketKind, TomlConfig, UrgencyScorable,
};

fn main() {
    let config = CliConfig::parse();

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ ticket-estimate failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }
}

fn run(config: &CliConfig) -> ticket_estimator::Result<()> {
    config.validate()?;

    let file = match &config.config {
        Some(path) => {
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            Some(file)
        }
        None => None,
    };

    match file.as_ref().and_then(TomlConfig::log_level) {
        Some(level) if !config.verbose => logger::init_logger_with_level(level),
        _ => logger::init_cli_logger(config.verbose),
    }

    if let Some(path) = &config.config {
        tracing::info!("📁 Loaded estimator defaults from: {}", path);
    }
    tracing::debug!("CLI config: {:?}", config);

    let params = config.estimate_params(file.as_ref());

    match config.kind {
        TicketKind::Bug => {
            let ticket = BugTicket::new(
                config.id,
                config.requester.clone(),
                config.priority,
                config.days_open,
                config.severity,
            )?;
            report(&ticket, params);
        }
        TicketKind::Request => {
            let ticket = RequestTicket::new(
                config.id,
                config.requester.clone(),
                config.priority,
                config.days_open,
            )?;
            report(&ticket, params);
        }
    }

    Ok(())
}

fn report<T: UrgencyScorable>(ticket: &T, params: EstimateParams) {
    println!("{}", ticket.summary());

    if !params.is_default() {
        println!(
            "tuned est={}h (complexity={}, after_hours={})",
            ticket.ticket().estimate(params),
            params.complexity_factor,
            params.after_hours_penalty
        );
    }
}

fn exit_code(e: &TicketError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 4,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
