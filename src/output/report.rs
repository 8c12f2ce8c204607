//! Terminal reports for the calculator commands.

use colored::Colorize;
use std::net::Ipv4Addr;

use crate::models::{common_prefixes, CidrBlock, CidrSummary, CronExpression};
use crate::processing::IpRange;

use super::terminal::{format_field, group_thousands, relative_time};
use chrono::NaiveDateTime;

/// Print the derived attributes of a CIDR block, followed by the (bounded)
/// address listing.
pub fn print_cidr_report(summary: &CidrSummary, range: &IpRange) {
    log::info!("#Start print_cidr_report() for {}", summary.block);

    println!("{}", format!("# {}", summary.block).on_blue());
    print_row("Network", summary.network);
    print_row("Broadcast", summary.broadcast);
    print_row("Subnet mask", summary.subnet_mask);
    print_row("Wildcard mask", summary.wildcard_mask);
    print_row("Binary mask", &summary.binary_mask);
    print_row("Total addresses", group_thousands(summary.total_addresses));
    print_row("Usable addresses", group_thousands(summary.usable_addresses));
    print_row("First usable", summary.first_usable);
    print_row("Last usable", summary.last_usable);
    print_row("Class", summary.class);
    print_row(
        "Type",
        if summary.private {
            "Private".green()
        } else {
            "Public".yellow()
        },
    );

    println!();
    for (i, addr) in range.addresses.iter().enumerate() {
        let label = if summary.prefix < 31 && *addr == summary.network {
            " (Network)"
        } else if summary.prefix < 31 && !range.truncated && i == range.addresses.len() - 1 {
            " (Broadcast)"
        } else {
            ""
        };
        println!("{addr}{label}");
    }
    if range.truncated {
        println!(
            "{}",
            format!(
                "Showing first {} of {} addresses",
                range.addresses.len(),
                group_thousands(range.total)
            )
            .yellow()
        );
    }
}

/// Print the CIDR decomposition of an address range.
pub fn print_range_report(start: Ipv4Addr, end: Ipv4Addr, blocks: &[CidrBlock]) {
    log::info!("#Start print_range_report() {start}-{end}");

    println!("{}", format!("# {start} - {end}").on_blue());
    for block in blocks {
        let summary = block.summarize().expect("decomposed blocks are valid");
        println!(
            "{cidr} {count}",
            cidr = format_field(block, 20),
            count = format_field(group_thousands(summary.total_addresses), 14),
        );
    }
    println!("{} block(s)", blocks.len());
}

/// Print the membership verdict for an address and a block.
pub fn print_contains_report(ip: Ipv4Addr, cidr: &str, contained: bool) {
    if contained {
        println!("{ip} is {} {cidr}", "within".green());
    } else {
        println!("{ip} is {} {cidr}", "not within".red());
    }
}

/// Print the validation verdict, description, and upcoming executions of a
/// cron expression.
pub fn print_cron_report(
    expr: &CronExpression,
    description: &str,
    executions: &[NaiveDateTime],
    now: NaiveDateTime,
) {
    log::info!("#Start print_cron_report() for '{expr}'");

    println!("{}", format!("# {expr}").on_blue());
    println!("{}", description.green());
    println!();

    if executions.is_empty() {
        println!("{}", "No upcoming executions found".yellow());
        return;
    }
    for (i, at) in executions.iter().enumerate() {
        println!(
            "{n}. {when}   {rel}",
            n = i + 1,
            when = at.format("%a, %b %-d, %Y %-I:%M %p"),
            rel = relative_time(*at, now).green(),
        );
    }
}

/// Print the common prefix reference table.
pub fn print_prefix_table() {
    println!(
        r#"{prefix},{mask},{usable},{name}"#,
        prefix = format_field("prefix", 9),
        mask = format_field("subnet_mask", 17),
        usable = format_field("usable_hosts", 14),
        name = format_field("name", 16),
    );
    for info in common_prefixes() {
        println!(
            r#"{prefix},{mask},{usable},{name}"#,
            prefix = format_field(format!("/{}", info.prefix), 9),
            mask = format_field(info.mask, 17),
            usable = format_field(group_thousands(info.usable), 14),
            name = format_field(info.name, 16),
        );
    }
}

fn print_row<T: std::fmt::Display>(label: &str, value: T) {
    println!("{label:<18} {value}");
}
