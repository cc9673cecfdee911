//! Declarative helpers for repetitive domain impls
//!
//! # Example
//!
//! ```rust
//! use authz_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Phase {
//!     Attempt,
//!     Retry,
//! }
//!
//! impl_domain_status_conversions!(Phase {
//!     Attempt => "attempt",
//!     Retry => "retry",
//! });
//!
//! assert_eq!(Phase::Retry.to_string(), "retry");
//! ```

/// Implements Display and case-insensitive FromStr for fieldless enums
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

/// Implements [`Audited`](crate::types::Audited) for an entity carrying the
/// standard `id`, `create_user`, `last_update_user`, `create_date` and
/// `last_update` fields.
#[macro_export]
macro_rules! impl_audited {
    ($($entity:ty),+ $(,)?) => {
        $(
            impl $crate::types::Audited for $entity {
                fn id(&self) -> Option<i64> {
                    self.id
                }

                fn create_user(&self) -> Option<i64> {
                    self.create_user
                }

                fn create_date(&self) -> Option<::chrono::NaiveDateTime> {
                    self.create_date
                }

                fn last_update(&self) -> Option<::chrono::NaiveDateTime> {
                    self.last_update
                }

                fn mark_updated(&mut self, user: Option<i64>) {
                    self.last_update_user = user;
                    self.last_update = Some($crate::utils::date_format::now());
                }
            }
        )+
    };
}
