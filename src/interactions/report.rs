//! Outcome reporter: the one place that turns an [`Outcome`] into the user's reply.
use super::outcome::{FailureKind, Flow, Outcome};
use super::reply::{DeferredReply, ReplyTransport};

/// Text of the ephemeral reply for `outcome`.
pub fn render(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Success { message, .. } => (*message).to_string(),
        Outcome::Failure(failure) => {
            format!("Error: {} ({})", failure.context, failure.kind.tag())
        }
    }
}

/// Emit the log line an outcome calls for, if any.
pub fn record(outcome: &Outcome) {
    match outcome {
        Outcome::Success {
            verified: Some(v), ..
        } => {
            tracing::info!(
                target: "verify",
                user = %v.user_name,
                user_id = %v.user_id,
                guild_id = %v.guild_id,
                "member verified"
            );
        }
        Outcome::Success { .. } => {}
        Outcome::Failure(failure) => {
            if !matches!(
                failure.kind,
                FailureKind::Unknown | FailureKind::PlatformError(_)
            ) {
                return;
            }
            let kind = failure.kind.tag();
            let cause = failure.cause.as_deref().unwrap_or("<none>");
            // tracing targets are static, so each flow gets its own call site.
            match failure.flow {
                Flow::Panel => {
                    tracing::warn!(target: "panel", kind = %kind, cause, "interaction failed");
                }
                Flow::Grant | Flow::Dispatch => {
                    tracing::warn!(target: "verify", kind = %kind, cause, "interaction failed");
                }
            }
        }
    }
}

/// Log, then consume the reply with the rendered text. A failed delivery (usually an
/// expired interaction token) is logged and dropped; the flow is never re-run.
pub async fn report<T: ReplyTransport>(outcome: Outcome, reply: DeferredReply<T>) {
    record(&outcome);
    let content = render(&outcome);
    if let Err(e) = reply.send(&content).await {
        tracing::warn!(target: "ui.reply", error = %e, "reply delivery failed");
    }
}
