use panel_core::responses::StatusUpdateResponse;
use panel_core::status::stamps_end_time;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, status: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let interview = ctx.service.update_status(ctx.caller(), id, status).await?;
    output(
        &StatusUpdateResponse {
            end_time_stamped: stamps_end_time(status),
            interview,
        },
        flags.format,
    )
}
