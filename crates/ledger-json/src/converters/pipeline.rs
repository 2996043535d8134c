//! Short-circuiting composition of fallible steps.
//!
//! Each step takes the previous step's value and yields `Some(next)` or
//! `None`. The first `None` ends the chain: no later step is evaluated.

/// A value threaded through fallible steps.
#[must_use]
#[derive(Debug)]
pub struct Pipeline<T> {
    value: Option<T>,
}

impl<T> Pipeline<T> {
    pub fn new(value: T) -> Self {
        Self { value: Some(value) }
    }

    pub fn from_option(value: Option<T>) -> Self {
        Self { value }
    }

    /// Applies `step` if every earlier step succeeded.
    pub fn then<U, F>(self, step: F) -> Pipeline<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        Pipeline {
            value: self.value.and_then(step),
        }
    }

    pub fn finish(self) -> Option<T> {
        self.value
    }
}

/// Runs `steps` left to right over `init`, stopping at the first `None`.
pub fn run<T, I, F>(init: Option<T>, steps: I) -> Option<T>
where
    I: IntoIterator<Item = F>,
    F: FnOnce(T) -> Option<T>,
{
    steps.into_iter().try_fold(init?, |acc, step| step(acc))
}

/// Step that stores a value into `object` through the pure update `assign`.
pub fn assign_object_field<B, V, F>(object: B, assign: F) -> impl FnOnce(V) -> Option<B>
where
    F: FnOnce(B, V) -> B,
{
    move |value| Some(assign(object, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn chains_successful_steps() {
        let out = Pipeline::new(2)
            .then(|x| Some(x * 10))
            .then(|x| Some(format!("{x}")))
            .finish();
        assert_eq!(out, Some("20".to_string()));
    }

    #[test]
    fn stops_at_first_failure() {
        let later = Cell::new(false);
        let out = Pipeline::new(2)
            .then(|_| None::<i32>)
            .then(|x| {
                later.set(true);
                Some(x)
            })
            .finish();
        assert_eq!(out, None);
        assert!(!later.get());
    }

    #[test]
    fn run_short_circuits() {
        let calls = Cell::new(0);
        let step = |fail: bool| {
            let calls = &calls;
            move |x: i32| {
                calls.set(calls.get() + 1);
                (!fail).then_some(x + 1)
            }
        };
        assert_eq!(run(Some(0), [step(false), step(false)]), Some(2));
        assert_eq!(calls.get(), 2);

        calls.set(0);
        assert_eq!(run(Some(0), [step(false), step(true), step(false)]), None);
        assert_eq!(calls.get(), 2);

        calls.set(0);
        assert_eq!(run(None, [step(false)]), None);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn assign_updates_a_copy() {
        #[derive(Debug, Default, PartialEq)]
        struct Pair {
            a: u32,
            b: u32,
        }
        let set_b = assign_object_field(Pair { a: 1, b: 0 }, |p: Pair, b| Pair { b, ..p });
        assert_eq!(set_b(5), Some(Pair { a: 1, b: 5 }));
    }
}
