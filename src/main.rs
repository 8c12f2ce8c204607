use chrono::Local;
use chrono_tz::Tz;
use colored::Colorize;
use serde_json::json;
use std::error::Error;

use subnet_cron_calc::output;
use subnet_cron_calc::processing::ip_range;
use subnet_cron_calc::{
    describe, is_ip_in_cidr, next_executions_after, parse_expression, range_to_cidrs,
    summarize_cidr,
};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();

    log::info!("#Start main()");

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    args.retain(|a| a != "--json");

    if !json {
        print_report_header();
    }

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["cidr", block] => run_cidr(block, json),
        ["range", start, end] => run_range(start, end, json),
        ["contains", ip, block] => run_contains(ip, block, json),
        ["cron", expr] => run_cron(expr, json),
        [] => output::print_prefix_table(),
        _ => print_usage(),
    }

    Ok(())
}

fn run_cidr(block: &str, json: bool) {
    let summary = match summarize_cidr(block) {
        Ok(summary) => summary,
        Err(e) => return print_invalid(&e.to_string()),
    };

    let limit = env_usize("RANGE_LIMIT", 256);
    let range = ip_range(summary.network, summary.broadcast, limit)
        .expect("network is never above broadcast");

    if json {
        print_json(&json!({ "summary": summary, "range": range }));
    } else {
        output::print_cidr_report(&summary, &range);
    }
}

fn run_range(start: &str, end: &str, json: bool) {
    let blocks = match range_to_cidrs(start, end) {
        Ok(blocks) => blocks,
        Err(e) => return print_invalid(&e.to_string()),
    };

    if json {
        print_json(&json!({ "start": start, "end": end, "cidrs": blocks }));
    } else {
        // range_to_cidrs validated both addresses
        let start = start.trim().parse().expect("validated start address");
        let end = end.trim().parse().expect("validated end address");
        output::print_range_report(start, end, &blocks);
    }
}

fn run_contains(ip: &str, block: &str, json: bool) {
    let contained = match is_ip_in_cidr(ip, block) {
        Ok(contained) => contained,
        Err(e) => return print_invalid(&e.to_string()),
    };

    if json {
        print_json(&json!({ "ip": ip, "cidr": block, "contained": contained }));
    } else {
        let addr = ip.trim().parse().expect("validated address");
        output::print_contains_report(addr, block.trim(), contained);
    }
}

fn run_cron(expr: &str, json: bool) {
    let parsed = match parse_expression(expr) {
        Ok(parsed) => parsed,
        Err(e) => return print_invalid(&e.to_string()),
    };

    let count = env_usize("PREVIEW_COUNT", 3);
    let now = Local::now().naive_local();
    let executions = next_executions_after(&parsed, now, count);
    let description = describe(&parsed);

    if json {
        let next: Vec<String> = executions
            .iter()
            .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
            .collect();
        print_json(&json!({
            "expression": parsed.to_string(),
            "description": description,
            "next": next,
        }));
    } else {
        output::print_cron_report(&parsed, &description, &executions, now);
    }
}

/// Stamp the report with the configured reporting timezone.
fn print_report_header() {
    let tz: Tz = std::env::var("REPORT_TZ")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(chrono_tz::Europe::Berlin);
    let now = chrono::Utc::now().with_timezone(&tz);
    println!("# subnet-cron-calc {}", now.format("%Y-%m-%d %H:%M %Z"));
}

fn print_invalid(reason: &str) {
    log::warn!("invalid input: {reason}");
    eprintln!("{}", reason.red());
}

fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).expect("report values serialize")
    );
}

fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn print_usage() {
    eprintln!("Usage: subnet-cron-calc [--json] <command>");
    eprintln!("  cidr <a.b.c.d/n>           subnet details and address list");
    eprintln!("  range <start> <end>        minimal CIDR cover of a range");
    eprintln!("  contains <ip> <a.b.c.d/n>  membership check");
    eprintln!("  cron '<expression>'        validate and preview a cron expression");
    eprintln!("  (no command)               common prefix reference table");
}
