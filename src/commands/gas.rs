use crate::cli::GasArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::network::{NetworkProfile, NetworkProfileRegistry};

use super::views::GasQuote;

pub fn run(ctx: &AppContext, args: GasArgs) -> AppResult<()> {
    let profile = ctx.registry.resolve(&args.network)?;
    let quote = build_quote(args.network, profile, args.reported);

    ctx.output.emit(&[render_line(&quote)], &quote)
}

fn build_quote(network: String, profile: &NetworkProfile, reported_wei: u128) -> GasQuote {
    GasQuote {
        network,
        policy: profile.gas_price_policy(),
        reported_wei,
        effective_wei: NetworkProfileRegistry::effective_gas_price(profile, reported_wei),
    }
}

fn render_line(quote: &GasQuote) -> String {
    format!(
        "{}: {} wei ({}, reported {} wei)",
        quote.network, quote.effective_wei, quote.policy, quote.reported_wei
    )
}
