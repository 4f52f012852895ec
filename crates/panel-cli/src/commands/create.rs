use panel_core::entities::NewInterview;
use panel_core::responses::InterviewCreateResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CreateArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: CreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stream_call_id = args.stream_call_id.clone();
    let id = ctx.service.create(ctx.caller(), into_new_interview(args)).await?;
    let interview = ctx.service.find_by_stream_call_id(&stream_call_id).await?;
    output(&InterviewCreateResponse { id, interview }, flags.format)
}

fn into_new_interview(args: CreateArgs) -> NewInterview {
    NewInterview {
        title: args.title,
        description: args.description.filter(|d| !d.trim().is_empty()),
        start_time: args.start_time,
        status: args.status,
        stream_call_id: args.stream_call_id,
        candidate_id: args.candidate_id,
        interviewer_ids: args.interviewer_ids,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::into_new_interview;
    use crate::cli::root_commands::CreateArgs;

    #[test]
    fn blank_description_becomes_none() {
        let input = into_new_interview(CreateArgs {
            title: "Onsite".into(),
            description: Some("  ".into()),
            start_time: 5,
            status: "scheduled".into(),
            stream_call_id: "call-1".into(),
            candidate_id: "a@x.com".into(),
            interviewer_ids: vec!["b@x.com".into()],
        });
        assert_eq!(input.description, None);
        assert_eq!(input.interviewer_ids, vec!["b@x.com"]);
        assert_eq!(input.start_time, 5);
    }
}
