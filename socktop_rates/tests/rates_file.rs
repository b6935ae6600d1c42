//! End-to-end conversion tests: raw samples in, rates file out.
use assert_cmd::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;

fn run(input: &Path) -> std::process::Output {
    Command::cargo_bin("socktop_rates")
        .unwrap()
        .env_remove("SOCKTOP_RATES_EXTRA_GAUGES")
        .arg(input)
        .output()
        .expect("run socktop_rates")
}

fn lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("rates file written")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn bytes_example_gives_fifty_per_second() {
    let td = tempfile::tempdir().unwrap();
    let raw = td.path().join("raw.csv");
    fs::write(
        &raw,
        "time_utc,bytes\n2025-01-01T00:00:00Z,1000\n2025-01-01T00:00:10Z,1500\n",
    )
    .unwrap();
    let out = run(&raw);
    assert!(out.status.success());
    let rates = td.path().join("rates.csv");
    assert_eq!(
        String::from_utf8_lossy(&out.stdout).trim(),
        format!("Wrote: {}", rates.display())
    );
    assert_eq!(
        lines(&rates),
        vec!["time_utc,iface,bytes_per_s", "2025-01-01T00:00:10Z,,50.00"]
    );
}

#[test]
fn interface_file_with_gauges() {
    let td = tempfile::tempdir().unwrap();
    let raw = td.path().join("raw-eth0.csv");
    fs::write(
        &raw,
        "time_utc,iface,rx_bytes,tx_bytes,tcp_estab,proc_rss_kb,proc_vsz_kb\n\
         2025-01-01T00:00:00Z,eth0,1000,500,12,2048,8192\n\
         2025-01-01T00:00:02Z,eth0,3000,400,14,2100,8192\n\
         2025-01-01T00:00:05Z,eth0,3000,,15,2200,8200\n",
    )
    .unwrap();
    let out = run(&raw);
    assert!(out.status.success());
    assert_eq!(
        lines(&td.path().join("rates-eth0.csv")),
        vec![
            "time_utc,iface,rx_bytes_per_s,tx_bytes_per_s,tcp_estab,proc_rss_kb,proc_vsz_kb",
            "2025-01-01T00:00:02Z,eth0,1000.00,-50.00,14,2100,8192",
            "2025-01-01T00:00:05Z,eth0,0.00,-133.33,15,2200,8200",
        ]
    );
}

#[test]
fn backwards_clock_skips_pair_but_continues() {
    let td = tempfile::tempdir().unwrap();
    let raw = td.path().join("metrics.csv");
    fs::write(
        &raw,
        "time_utc,iface,pkts\n\
         2025-01-01T00:01:00Z,lo,10\n\
         2025-01-01T00:00:50Z,lo,20\n\
         2025-01-01T00:01:00Z,lo,40\n\
         2025-01-01T00:01:00Z,lo,90\n\
         2025-01-01T00:01:05Z,lo,100\n",
    )
    .unwrap();
    let out = run(&raw);
    assert!(out.status.success());
    assert_eq!(
        lines(&td.path().join("metrics.csv.rates.csv")),
        vec![
            "time_utc,iface,pkts_per_s",
            "2025-01-01T00:01:00Z,lo,2.00",
            "2025-01-01T00:01:05Z,lo,2.00",
        ]
    );
}

#[test]
fn extra_gauges_opt_in_from_env() {
    let td = tempfile::tempdir().unwrap();
    let raw = td.path().join("raw.csv");
    fs::write(
        &raw,
        "time_utc,load1,bytes\n2025-01-01T00:00:00Z,0.5,0\n2025-01-01T00:00:04Z,1.25,8\n",
    )
    .unwrap();
    let out = Command::cargo_bin("socktop_rates")
        .unwrap()
        .env("SOCKTOP_RATES_EXTRA_GAUGES", "load1")
        .arg(&raw)
        .output()
        .expect("run socktop_rates");
    assert!(out.status.success());
    assert_eq!(
        lines(&td.path().join("rates.csv")),
        vec![
            "time_utc,iface,bytes_per_s,load1",
            "2025-01-01T00:00:04Z,,2.00,1.25"
        ]
    );

    // without the opt-in, load1 is a counter and "1.25" coerces to 0
    let out = run(&raw);
    assert!(out.status.success());
    assert_eq!(
        lines(&td.path().join("rates.csv")),
        vec![
            "time_utc,iface,load1_per_s,bytes_per_s",
            "2025-01-01T00:00:04Z,,0.00,2.00"
        ]
    );
}
