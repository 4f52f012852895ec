use panel_core::responses::InterviewListResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(candidate: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let interviews = ctx.service.list_for_candidate(ctx.caller(), candidate).await?;
    output(&InterviewListResponse::new(interviews), flags.format)
}
