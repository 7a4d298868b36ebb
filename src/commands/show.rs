use crate::cli::ShowArgs;
use crate::context::AppContext;
use crate::error::AppResult;

use super::views::ProfileView;

pub fn run(ctx: &AppContext, args: ShowArgs) -> AppResult<()> {
    let profile = ctx.registry.resolve(&args.network)?;
    let view = ProfileView::new(&args.network, profile);

    ctx.output.emit(&render_lines(&view), &view)
}

fn render_lines(view: &ProfileView) -> Vec<String> {
    let mut lines = vec![
        view.name.clone(),
        format!("   endpoint: {}", view.endpoint),
        format!("   chain id: {}", view.chain_id),
        format!("   live: {}", if view.live { "yes" } else { "no" }),
        format!("   gas price: {}", view.gas_price),
    ];

    if view.accounts.is_empty() {
        lines.push("   accounts: (none)".to_string());
    } else {
        lines.push(format!("   accounts: {}", view.accounts.len()));
        lines.extend(
            view.accounts
                .iter()
                .map(|fingerprint| format!("     - {fingerprint}")),
        );
    }

    lines
}
