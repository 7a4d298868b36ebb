use std::path::Path;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::network::NetworkProfileRegistry;

use super::views::CheckReport;

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let report = build_report(&ctx.networks_file, &ctx.registry);
    ctx.output.emit(&render_lines(&report), &report)
}

fn build_report(networks_file: &Path, registry: &NetworkProfileRegistry) -> CheckReport {
    CheckReport {
        networks_file: networks_file.display().to_string(),
        profiles: registry.len(),
        live_profiles: registry
            .profiles()
            .filter(|(_, profile)| profile.is_live())
            .count(),
        verification_enabled: registry.verification_credential().is_some(),
    }
}

fn render_lines(report: &CheckReport) -> Vec<String> {
    let verification = if report.verification_enabled {
        "enabled"
    } else {
        "disabled"
    };

    vec![
        format!("{}: ok", report.networks_file),
        format!(
            "   {} profiles ({} live), verification {verification}",
            report.profiles, report.live_profiles
        ),
    ]
}
