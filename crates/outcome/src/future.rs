//! Combinators over a pending outcome
//!
//! Each combinator awaits the wrapped future and then applies the same rule
//! as its synchronous counterpart on [`Outcome`]. Nothing runs concurrently:
//! the returned future is driven by whoever awaits it, and dropping it
//! cancels the underlying computation like any other Rust future.

use std::future::Future;

use flowkit_error::DomainError;

use crate::Outcome;

/// Extension trait implemented for every `Future<Output = Outcome<T, E>>`.
///
/// # Examples
///
/// ```rust
/// use flowkit_error::AppError;
/// use flowkit_outcome::{Outcome, OutcomeFutureExt};
///
/// async fn load_user_id() -> Outcome<u64, AppError> {
///     Outcome::success(7)
/// }
///
/// # futures::executor::block_on(async {
/// let label = load_user_id().map_async(|id| format!("user-{id}")).await;
/// assert_eq!(label, Outcome::success("user-7".to_owned()));
/// # });
/// ```
pub trait OutcomeFutureExt<T, E>: Future<Output = Outcome<T, E>> + Sized
where
    E: DomainError,
{
    /// Awaits the outcome, then applies [`Outcome::map`].
    fn map_async<R>(self, f: impl FnOnce(T) -> R) -> impl Future<Output = Outcome<R, E>> {
        async move { self.await.map(f) }
    }

    /// Awaits the outcome, then chains an asynchronous fallible step.
    ///
    /// The step only starts when the first outcome is a success; its own
    /// pending outcome is awaited before returning.
    fn flat_map_async<R, Fut>(
        self,
        f: impl FnOnce(T) -> Fut,
    ) -> impl Future<Output = Outcome<R, E>>
    where
        Fut: Future<Output = Outcome<R, E>>,
    {
        async move {
            match self.await {
                Outcome::Success(value) => f(value).await,
                Outcome::Failure(error) => Outcome::Failure(error),
            }
        }
    }

    /// Awaits the outcome, then applies [`Outcome::get_or_else`].
    fn get_or_else_async(self, default: impl FnOnce() -> T) -> impl Future<Output = T> {
        async move { self.await.get_or_else(default) }
    }
}

impl<T, E, F> OutcomeFutureExt<T, E> for F
where
    E: DomainError,
    F: Future<Output = Outcome<T, E>>,
{
}
