use clap::{Args, Subcommand};

use crate::cli::subcommands::AuthCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List every interview.
    List,
    /// List the interviews of one candidate (only the candidate may ask).
    Mine(MineArgs),
    /// Look up the interview attached to a video call.
    Call(CallArgs),
    /// Schedule a new interview.
    Create(CreateArgs),
    /// Change an interview's status (interviewers only).
    Status(StatusArgs),
    /// Authentication.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
}

/// Arguments for `panel mine`.
#[derive(Clone, Debug, Args)]
pub struct MineArgs {
    /// Candidate identifier (email).
    pub candidate: String,
}

/// Arguments for `panel call`.
#[derive(Clone, Debug, Args)]
pub struct CallArgs {
    /// External video-call identifier.
    pub stream_call_id: String,
}

/// Arguments for `panel create`.
#[derive(Clone, Debug, Args)]
pub struct CreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    /// Epoch milliseconds or an RFC 3339 timestamp.
    #[arg(long, value_parser = parse_start_time)]
    pub start_time: i64,
    #[arg(long, default_value = panel_core::status::STATUS_SCHEDULED)]
    pub status: String,
    /// External video-call identifier.
    #[arg(long = "call")]
    pub stream_call_id: String,
    /// Candidate identifier (email).
    #[arg(long = "candidate")]
    pub candidate_id: String,
    /// Interviewer identifier (email). Repeat for each interviewer.
    #[arg(long = "interviewer", required = true)]
    pub interviewer_ids: Vec<String>,
}

/// Arguments for `panel status`.
#[derive(Clone, Debug, Args)]
pub struct StatusArgs {
    /// Interview ID.
    pub id: String,
    /// New status value.
    pub status: String,
}

fn parse_start_time(value: &str) -> Result<i64, String> {
    if let Ok(millis) = value.parse::<i64>() {
        return Ok(millis);
    }
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.timestamp_millis())
        .map_err(|_| format!("'{value}' is neither epoch milliseconds nor an RFC 3339 timestamp"))
}

#[cfg(test)]
mod tests {
    use super::parse_start_time;

    #[test]
    fn start_time_accepts_epoch_millis() {
        assert_eq!(parse_start_time("1760000000000"), Ok(1_760_000_000_000));
    }

    #[test]
    fn start_time_accepts_rfc3339() {
        assert_eq!(parse_start_time("1970-01-01T00:00:01Z"), Ok(1_000));
        assert_eq!(parse_start_time("1970-01-01T01:00:01+01:00"), Ok(1_000));
    }

    #[test]
    fn start_time_rejects_garbage() {
        assert!(parse_start_time("tomorrow").is_err());
    }
}
