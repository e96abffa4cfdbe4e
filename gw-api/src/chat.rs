//! One chat round trip.

use crate::store::Store;
use crate::Backend;
use gw_model::role::UserRole;
use gw_model::transcript::Transcript;
use log::info;

/// Send `input` and record both sides of the exchange in `transcript`.
///
/// Returns `false` without touching the backend or the transcript when the
/// input is blank.
pub async fn send_message<B, S>(
    backend: &B,
    mut transcript: S,
    input: &str,
    role: Option<UserRole>,
) -> bool
where
    B: Backend,
    S: Store<Transcript>,
{
    let Some(request) = transcript.update(|t| t.begin_send(input, role)) else {
        return false;
    };
    info!("sending chat query ({} chars) as {}", request.query.len(), request.role);
    let result = backend.chat(&request).await;
    transcript.update(|t| t.finish_send(result));
    true
}
