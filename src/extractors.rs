use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

/// A wrapper around `axum::Json<T>` that rejects nothing: a missing body,
/// wrong content type, or malformed JSON all fall back to `T::default()`.
/// Malformed or absent input is treated as empty input throughout this
/// service, never as a client error.
pub struct LenientJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(LenientJson(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Treating request body as empty");
                Ok(LenientJson(T::default()))
            }
        }
    }
}
