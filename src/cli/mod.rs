//! CLI argument parsing and run handling

use crate::client::{HttpClient, TargetClient};
use crate::config::RunConfig;
use crate::orchestrator::OrchestratorBuilder;
use crate::outcome::Outcome;
use crate::report::LoadReport;

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::time::Instant;

/// httpblast - concurrent HTTP load generation
#[derive(Parser, Debug)]
#[command(name = "httpblast")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target URL to send GET requests to
    #[arg(short, long)]
    pub url: String,

    /// Total number of requests to send
    #[arg(short = 'n', long = "requests", default_value_t = 100)]
    pub requests: usize,

    /// Number of concurrent workers
    #[arg(short, long, default_value_t = 10)]
    pub concurrency: usize,
}

impl Cli {
    /// Run the load test based on CLI arguments
    pub async fn run(&self) -> Result<()> {
        let config = RunConfig::new(self.requests, self.concurrency);
        config.validate().context("invalid configuration")?;

        let client =
            Arc::new(HttpClient::new(&self.url).context("invalid configuration")?);

        println!();
        println!("{}", "=".repeat(70));
        println!("   httpblast - HTTP load generator");
        println!("{}", "=".repeat(70));
        println!();
        println!("Configuration:");
        println!("  Target:       {}", client.target_url());
        println!("  Requests:     {}", self.requests);
        println!("  Concurrency:  {}", self.concurrency);
        println!("{}", "=".repeat(70));
        println!();

        let (orchestrator, mut outcome_rx) = OrchestratorBuilder::new()
            .config(config)
            .client(client)
            .build()?;

        let start = Instant::now();
        let worker_stats = orchestrator.run().await?;
        let total_time = start.elapsed();

        // All senders are gone once the join barrier has passed, so this
        // drains every published outcome and then stops.
        let mut outcomes: Vec<Outcome> = Vec::with_capacity(self.requests);
        while let Some(outcome) = outcome_rx.recv().await {
            outcomes.push(outcome);
        }

        let claimed: usize = worker_stats.iter().map(|s| s.total_requests()).sum();
        if claimed != outcomes.len() {
            tracing::warn!(
                claimed,
                collected = outcomes.len(),
                "outcome count does not match executed requests"
            );
        }

        let report = LoadReport::from_outcomes(&outcomes, total_time);
        self.print_report(&report);

        Ok(())
    }

    /// Print the final report in a readable format
    fn print_report(&self, report: &LoadReport) {
        println!();
        println!("{}", "=".repeat(70));
        println!("   Results");
        println!("{}", "=".repeat(70));
        println!();
        println!("📊 Overall:");
        println!("  Total Requests:       {}", report.total_requests);
        println!(
            "  Successful:           {} ({:.1}%)",
            report.success_count,
            report.success_rate() * 100.0
        );
        println!("  Failed:               {}", report.fail_count);
        println!("  Total Time:           {:.2} s", report.total_duration_secs);
        println!(
            "  Throughput:           {:.2} req/s",
            report.requests_per_second
        );
        println!("  Bytes Received:       {}", report.total_bytes);
        println!();
        println!("⏱️  Latency:");
        println!("  Average:              {:.2} ms", report.avg_latency_ms);
        println!("  Minimum:              {:.2} ms", report.latency.min);
        println!("  Median (P50):         {:.2} ms", report.latency.p50);
        println!("  90th Percentile:      {:.2} ms", report.latency.p90);
        println!("  95th Percentile:      {:.2} ms", report.latency.p95);
        println!("  99th Percentile:      {:.2} ms", report.latency.p99);
        println!("  Maximum:              {:.2} ms", report.latency.max);
        println!();
        println!("{}", "=".repeat(70));
        println!();
    }
}
