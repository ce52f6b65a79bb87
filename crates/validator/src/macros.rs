//! The `validator!` declaration macro
//!
//! Every primitive check in [`crate::validators`] is declared through
//! [`validator!`]: one invocation produces the struct, its
//! [`Validate`](crate::foundation::Validate) impl, a `const` constructor for
//! field-carrying checks, and a factory function named after the check.

/// Declares a primitive check together with its factory function.
///
/// Three shapes are accepted:
///
/// - a unit check, `Name for Input;` whose `rule`/`error` blocks see only
///   the input,
/// - a check with fields, `Name { field: Ty } for Input;`, whose blocks also
///   see `self`,
/// - the same with one generic parameter, `Name<T: A + B> { .. } for T;`.
///
/// Field-carrying checks always derive `Debug` and `Clone`; pass further
/// derives as attributes. Unit checks derive everything they can.
///
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MaxLength { max: i64 } for str;
///     rule(self, input) { at_most(char_len(input), self.max) }
///     error(self, input) { ValidationError::max_length(self.max, char_len(input)) }
///     fn max_length(max: i64);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // Internal: the `Validate` body shared by every shape.
    (@impl $input:ty; $recv:ident, $inp:ident, $einp:ident; $rule:block $err:block) => {
        type Input = $input;

        #[allow(unused_variables)]
        fn validate(&$recv, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
            if $rule {
                Ok(())
            } else {
                let $einp = $inp;
                Err($err)
            }
        }
    };

    // Unit check (zero-sized).
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            $crate::validator!(@impl $input; self, $inp, $einp; $rule $err);
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };

    // Check with fields; `new` takes every field in order.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub const fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            $crate::validator!(@impl $input; $self_, $inp, $einp; $rule $err);
        }

        #[must_use]
        $vis const fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // Generic check over a single type parameter. Bounds must be plain
    // identifiers; import paths first.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Validate for $name<$gen> {
            $crate::validator!(@impl $input; $self_, $inp, $einp; $rule $err);
        }

        #[must_use]
        $vis fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================
