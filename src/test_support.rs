// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Evaluates whether a concrete type implements a trait, resolved at compile time.
///
/// Uses autoref method resolution: the by-value candidate only exists when the
/// bound holds, otherwise the call falls through to the `&Candidate` fallback.
macro_rules! implements {
    ($ty:ty: $trait:path) => {{
        use std::marker::PhantomData;

        struct Candidate<T: ?Sized>(PhantomData<T>);

        trait Matches {
            fn matches(&self) -> bool {
                true
            }
        }

        impl<T: ?Sized + $trait> Matches for Candidate<T> {}

        trait Fallback {
            fn matches(&self) -> bool {
                false
            }
        }

        impl<T: ?Sized> Fallback for &Candidate<T> {}

        (&Candidate::<$ty>(PhantomData)).matches()
    }};
}

pub(crate) use implements;
