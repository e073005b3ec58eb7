use dynopay_smoke::{init_tracing, run_suite, Config, SuiteReport};
use std::process::ExitCode;

fn verdict(passed: bool) -> &'static str {
    if passed {
        "PASS"
    } else {
        "FAIL"
    }
}

fn print_summary(report: &SuiteReport) {
    println!();
    println!("{}", "=".repeat(60));
    println!("TEST SUMMARY");
    println!("{}", "=".repeat(60));
    println!(
        "Checks passed: {}/{}",
        report.tally.passed, report.tally.attempted
    );
    println!("Success rate: {:.1}%", report.tally.success_rate());
    println!();
    println!("Health Check:          {}", verdict(report.health_passed));
    println!(
        "Configured Currencies: {}",
        verdict(report.currencies_passed)
    );
    println!("Currency Rates:        {}", verdict(report.rates_passed));
    println!("Payment Creation:      {}", verdict(report.payments_passed));

    if let Some(support) = &report.currency_support {
        if !support.missing.is_empty() {
            println!("Missing currencies:    {}", support.missing.join(", "));
        }
    }

    if let Some(payments) = &report.payments {
        for (currency, passed) in &payments.results {
            println!("  payment {:<14} {}", currency, verdict(*passed));
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(base_url = %config.base_url, "Starting DynoPay backend smoke probes");

    let report = match run_suite(&config).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Failed to start probe suite: {}", e);
            return ExitCode::FAILURE;
        }
    };

    print_summary(&report);

    if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
