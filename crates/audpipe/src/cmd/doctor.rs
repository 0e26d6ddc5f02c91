use std::path::Path;

use serde::Serialize;

use crate::cmd::{Context, DoctorArgs};
use crate::exit::{CliResult, HEALTH_CHECK_FAILED, SUCCESS};
use crate::output::{print_json, OutputFormat};

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum CheckStatus {
    Pass,
    Fail,
    Info,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    name: String,
    status: CheckStatus,
    detail: String,
}

#[derive(Debug, Serialize)]
struct DoctorOutput {
    checks: Vec<CheckResult>,
    overall: &'static str,
}

pub fn run(_args: DoctorArgs, ctx: &Context) -> CliResult<i32> {
    let checks = vec![
        pipe_check("to_host_pipe", ctx.endpoints.to_host()),
        pipe_check("from_host_pipe", ctx.endpoints.from_host()),
        line_terminator_check(),
        compiled_features_check(),
    ];

    let has_fail = checks.iter().any(|c| matches!(c.status, CheckStatus::Fail));
    let overall = if has_fail { "fail" } else { "pass" };

    let output = DoctorOutput { checks, overall };
    print_doctor(&output, ctx.format);

    if has_fail {
        Ok(HEALTH_CHECK_FAILED)
    } else {
        Ok(SUCCESS)
    }
}

fn print_doctor(output: &DoctorOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(output),
        OutputFormat::Table | OutputFormat::Pretty => {
            println!("audpipe doctor\n");
            for c in &output.checks {
                println!(
                    "  [{:>4}] {:<18} {}",
                    status_text(c.status),
                    c.name,
                    c.detail
                );
            }
            if output.overall == "pass" {
                println!("\n  Result: all checks passed");
            } else {
                println!("\n  Result: start Audacity and enable mod-script-pipe in Preferences > Modules");
            }
        }
        OutputFormat::Raw => {
            println!("{}", output.overall);
        }
    }
}

fn status_text(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Pass => "PASS",
        CheckStatus::Fail => "FAIL",
        CheckStatus::Info => "INFO",
    }
}

fn pipe_check(name: &str, path: &Path) -> CheckResult {
    let (status, detail) = match std::fs::metadata(path) {
        Ok(metadata) if is_pipe(&metadata) => {
            (CheckStatus::Pass, format!("{} present", path.display()))
        }
        Ok(_) => (
            CheckStatus::Fail,
            format!("{} exists but is not a pipe", path.display()),
        ),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => (
            CheckStatus::Fail,
            format!("{} not found", path.display()),
        ),
        Err(err) => (
            CheckStatus::Fail,
            format!("{} unreadable: {err}", path.display()),
        ),
    };

    CheckResult {
        name: name.to_string(),
        status,
        detail,
    }
}

#[cfg(unix)]
fn is_pipe(metadata: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::FileTypeExt;
    metadata.file_type().is_fifo()
}

#[cfg(not(unix))]
fn is_pipe(_metadata: &std::fs::Metadata) -> bool {
    true
}

fn line_terminator_check() -> CheckResult {
    CheckResult {
        name: "line_terminator".to_string(),
        status: CheckStatus::Info,
        detail: format!("{:?}", audpipe_frame::LINE_TERMINATOR),
    }
}

fn compiled_features_check() -> CheckResult {
    let mut features = Vec::new();
    if cfg!(feature = "client") {
        features.push("client");
    }
    if cfg!(feature = "cli") {
        features.push("cli");
    }

    CheckResult {
        name: "compiled_features".to_string(),
        status: CheckStatus::Info,
        detail: features.join(", "),
    }
}
