use crate::context::AppContext;
use crate::error::AppResult;

use super::views::ProfileView;

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let views = ctx
        .registry
        .profiles()
        .map(|(name, profile)| ProfileView::new(name, profile))
        .collect::<Vec<_>>();

    ctx.output.emit(&render_lines(&views), &views)
}

fn render_lines(views: &[ProfileView]) -> Vec<String> {
    if views.is_empty() {
        return vec!["0 networks".to_string()];
    }

    views
        .iter()
        .enumerate()
        .map(|(index, view)| format!("{}. {}", index + 1, view.summary_line()))
        .collect()
}
