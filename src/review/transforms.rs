//! Transform pipeline infrastructure
//!
//! The normalizer is built from small stages that each rewrite a `String` into a
//! new `String`. This module provides the pieces used to compose them.
//!
//! # Architecture Overview
//!
//! ## 1. The `Runnable` Trait
//!
//! The interface for all stages. Any type implementing `Runnable<I, O>` turns an
//! input of type `I` into an output of type `O`:
//!
//! ```rust,ignore
//! pub trait Runnable<I, O> {
//!     fn run(&self, input: I) -> O;
//! }
//! ```
//!
//! Stages cannot fail. Every stage of the review pipeline is a total function, so
//! there is no error channel to thread through the composition.
//!
//! ## 2. The `Transform<I, O>` Type
//!
//! A wrapper that enables composition. Any `Runnable` can be appended to a
//! `Transform` with `.then()`, and the compiler checks that the types line up:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(|s: String| s)
//!     .then(ShoutFolding::new())
//!     .then(SentenceCase::new());
//! ```
//!
//! ## 3. Static Lazy Transforms
//!
//! The standard pipeline is pre-built as a static using `once_cell::sync::Lazy`,
//! see the [`standard`] module.
//!
//! # Module Organization
//!
//! - [`stages`]: the four normalization stages
//! - [`standard`]: the pre-built pipeline plus `normalize` and `trace`

pub mod stages;
pub mod standard;

/// Trait for anything that can transform an input to an output
///
/// This is implemented by individual stages. The `Transform` struct composes
/// multiple `Runnable` implementations.
pub trait Runnable<I, O> {
    /// Execute this transformation on the input
    fn run(&self, input: I) -> O;
}

/// A composable transformation pipeline
///
/// `Transform<I, O>` represents a transformation from type `I` to type `O`.
/// The boxed closure is `Send + Sync`, so a `Transform` stored in a static can be
/// shared between threads.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> O + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create an identity transform that passes input through unchanged
    ///
    /// Note: This only works when `O: From<I>`
    pub fn identity() -> Self
    where
        I: 'static,
        O: From<I> + 'static,
    {
        Transform {
            run_fn: Box::new(<O as From<I>>::from),
        }
    }

    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> O + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Add a stage to this transform, returning a new transform with extended output type
    ///
    /// The compiler ensures that the stage's input type matches this transform's
    /// output type.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input);
                stage.run(intermediate)
            }),
        }
    }

    /// Chain another transform to this transform
    ///
    /// Similar to `then` but takes a pre-built `Transform`. The referenced transform
    /// must be `'static`, typically a `Lazy` static from [`standard`].
    pub fn then_transform<O2>(self, next: &'static Transform<O, O2>) -> Transform<I, O2>
    where
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input);
                next.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> O {
        (self.run_fn)(input)
    }
}

// Transforms can be used as stages of other transforms
impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> O {
        Transform::run(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;

    struct Exclaim;
    impl Runnable<String, String> for Exclaim {
        fn run(&self, input: String) -> String {
            format!("{input}!")
        }
    }

    struct Shout;
    impl Runnable<String, String> for Shout {
        fn run(&self, input: String) -> String {
            input.to_uppercase()
        }
    }

    struct CharCount;
    impl Runnable<String, usize> for CharCount {
        fn run(&self, input: String) -> usize {
            input.chars().count()
        }
    }

    static EXCLAIM_TWICE: Lazy<Transform<String, String>> =
        Lazy::new(|| Transform::<String, String>::identity().then(Exclaim).then(Exclaim));

    #[test]
    fn test_transform_from_fn() {
        let transform = Transform::from_fn(|s: String| s.repeat(2));
        assert_eq!(transform.run("ab".to_string()), "abab");
    }

    #[test]
    fn test_identity_passes_input_through() {
        let transform: Transform<String, String> = Transform::identity();
        assert_eq!(transform.run("unchanged".to_string()), "unchanged");
    }

    #[test]
    fn test_stages_run_in_order() {
        let shout_then_exclaim = Transform::<String, String>::identity()
            .then(Shout)
            .then(Exclaim);
        assert_eq!(shout_then_exclaim.run("hi".to_string()), "HI!");

        let exclaim_then_count = Transform::<String, String>::identity()
            .then(Exclaim)
            .then(CharCount);
        assert_eq!(exclaim_then_count.run("hi".to_string()), 3);
    }

    #[test]
    fn test_then_transform_chains_static_pipeline() {
        let transform = Transform::from_fn(|s: String| s).then_transform(&EXCLAIM_TWICE);
        assert_eq!(transform.run("wow".to_string()), "wow!!");
    }

    #[test]
    fn test_transform_is_runnable() {
        let inner = Transform::<String, String>::identity().then(Shout);
        let outer = Transform::<String, String>::identity()
            .then(inner)
            .then(Exclaim);
        assert_eq!(outer.run("nested".to_string()), "NESTED!");
    }
}
