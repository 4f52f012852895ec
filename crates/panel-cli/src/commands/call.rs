use panel_core::responses::InterviewLookupResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(stream_call_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let interview = ctx.service.find_by_stream_call_id(stream_call_id).await?;
    output(
        &InterviewLookupResponse {
            stream_call_id: stream_call_id.to_string(),
            interview,
        },
        flags.format,
    )
}
