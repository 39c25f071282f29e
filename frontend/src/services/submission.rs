use common::model::submission::FormSubmission;
use gloo_net::http::Request;

use crate::error::ClientError;

/// Posts the completed induction. Any non-2xx status is an error; the
/// response body is not read.
pub async fn submit_induction(url: &str, submission: &FormSubmission) -> Result<(), ClientError> {
    let response = Request::post(url).json(submission)?.send().await?;
    if response.ok() {
        Ok(())
    } else {
        Err(ClientError::Status(response.status()))
    }
}
