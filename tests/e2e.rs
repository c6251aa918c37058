use std::process::Command;

fn run(fixture: &str) -> (String, String, bool) {
    let path = format!("tests/fixtures/{fixture}");
    let output = Command::new(env!("CARGO_BIN_EXE_ramp-eng"))
        .arg(&path)
        .env("RUST_LOG", "warn")
        .output()
        .expect("failed to run binary");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

#[test]
fn valid_event_script() {
    let (stdout, stderr, success) = run("valid.csv");

    assert!(success);
    assert!(stderr.is_empty());

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines[0],
        "asset,currency,mode,fiat,asset_amount,processing_fee,network_fee,total_fee"
    );
    assert_eq!(lines[1], "ETH,USD,sell,$500,0.2369,2.50,0.00,2.50");
}

#[test]
fn errors_warn_but_do_not_block() {
    let (stdout, stderr, success) = run("with_errors.csv");

    assert!(success);
    assert!(stderr.contains("unrecognized event"));
    assert!(stderr.contains("missing value"));

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines[0],
        "asset,currency,mode,fiat,asset_amount,processing_fee,network_fee,total_fee"
    );
    assert_eq!(lines[1], "BTC,EUR,buy,€500,0.0059,2.50,0.50,3.00");
}
