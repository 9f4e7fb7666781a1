//! Utilities over sequences of outcomes

use flowkit_error::DomainError;

use crate::Outcome;

/// Combines the values of every outcome, failing on the first failure.
///
/// Outcomes are pulled in order. The first failure is returned immediately:
/// later items are not pulled and `combiner` never runs. When every item
/// succeeds, `combiner` receives the values in input order.
///
/// # Examples
///
/// ```rust
/// use flowkit_error::AppError;
/// use flowkit_outcome::{Outcome, combine};
///
/// let parts: Vec<Outcome<i32, AppError>> =
///     vec![Outcome::success(1), Outcome::success(2), Outcome::success(3)];
/// let total = combine(parts, |values| values.iter().sum::<i32>());
/// assert_eq!(total, Outcome::success(6));
/// ```
pub fn combine<T, E, R, I>(results: I, combiner: impl FnOnce(Vec<T>) -> R) -> Outcome<R, E>
where
    E: DomainError,
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let iter = results.into_iter();
    let mut values = Vec::with_capacity(iter.size_hint().0);

    for (index, outcome) in iter.enumerate() {
        match outcome {
            Outcome::Success(value) => values.push(value),
            Outcome::Failure(error) => {
                tracing::debug!(
                    index,
                    error = error.message(),
                    "combine short-circuited on failure"
                );
                return Outcome::Failure(error);
            }
        }
    }

    Outcome::Success(combiner(values))
}

/// Returns the first successful outcome, in order.
///
/// Stops pulling items as soon as a success is found. If none succeeds
/// (including an empty input), fails with `on_all_failed()`.
pub fn first_success<T, E, I>(results: I, on_all_failed: impl FnOnce() -> E) -> Outcome<T, E>
where
    E: DomainError,
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut failures = 0usize;

    for outcome in results {
        match outcome {
            Outcome::Success(value) => return Outcome::Success(value),
            Outcome::Failure(_) => failures += 1,
        }
    }

    tracing::debug!(failures, "first_success found no successful outcome");
    Outcome::Failure(on_all_failed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowkit_error::AppError;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    type Out<T> = Outcome<T, AppError>;

    fn err(message: &str) -> AppError {
        AppError::new(message)
    }

    #[test]
    fn test_combine_collects_in_order() {
        let parts = vec![Out::success(1), Out::success(2), Out::success(3)];
        let combined = combine(parts, |values| values);
        assert_eq!(combined, Outcome::success(vec![1, 2, 3]));
    }

    #[test]
    fn test_combine_sum() {
        let parts = vec![Out::success(1), Out::success(2), Out::success(3)];
        assert_eq!(
            combine(parts, |values| values.into_iter().sum::<i32>()),
            Outcome::success(6)
        );
    }

    #[test]
    fn test_combine_returns_first_failure_without_combining() {
        let combined_called = Cell::new(false);
        let parts = vec![
            Out::success(1),
            Out::success(2),
            Out::failure(err("third")),
            Out::success(4),
            Out::failure(err("fifth")),
        ];

        let combined = combine(parts, |values: Vec<i32>| {
            combined_called.set(true);
            values.into_iter().sum::<i32>()
        });

        assert_eq!(combined, Outcome::failure(err("third")));
        assert!(!combined_called.get());
    }

    #[test]
    fn test_combine_stops_pulling_after_failure() {
        let pulled = Cell::new(0);
        let source = (0..5).map(|i| {
            pulled.set(pulled.get() + 1);
            if i == 1 {
                Out::failure(err("second"))
            } else {
                Out::success(i)
            }
        });

        let combined = combine(source, |values| values.len());
        assert_eq!(combined, Outcome::failure(err("second")));
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn test_combine_empty_is_success() {
        let combined = combine(Vec::<Out<i32>>::new(), |values| values.len());
        assert_eq!(combined, Outcome::success(0));
    }

    #[test]
    fn test_first_success_skips_failures() {
        let parts = vec![
            Out::failure(err("a")),
            Out::failure(err("b")),
            Out::success(42),
            Out::success(43),
        ];
        let found = first_success(parts, || unreachable!("at least one succeeded"));
        assert_eq!(found, Outcome::success(42));
    }

    #[test]
    fn test_first_success_all_failed() {
        let found = first_success(vec![Out::<i32>::failure(err("a"))], || err("all failed"));
        assert_eq!(found, Outcome::failure(err("all failed")));
    }

    #[test]
    fn test_first_success_empty_uses_supplier() {
        let found = first_success(Vec::<Out<i32>>::new(), || err("empty"));
        assert_eq!(found, Outcome::failure(err("empty")));
    }
}
