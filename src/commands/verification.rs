use crate::context::AppContext;
use crate::error::AppResult;
use crate::network::{NetworkProfileRegistry, Secret};

use super::views::VerificationStatus;

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let status = build_status(&ctx.registry);
    ctx.output.emit(&[render_line(&status)], &status)
}

fn build_status(registry: &NetworkProfileRegistry) -> VerificationStatus {
    let fingerprint = registry
        .verification_credential()
        .map(|key| Secret::new(key).fingerprint());

    VerificationStatus {
        enabled: fingerprint.is_some(),
        fingerprint,
    }
}

fn render_line(status: &VerificationStatus) -> String {
    match &status.fingerprint {
        Some(fingerprint) => format!("verification enabled ({fingerprint})"),
        None => "verification disabled".to_string(),
    }
}
