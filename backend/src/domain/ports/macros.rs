//! Helper macro for declaring driven-port error enums.
//!
//! Each variant carries named fields (optionally documented) and a display
//! template; the macro derives `thiserror::Error` and emits a snake-case
//! constructor per variant whose parameters accept anything convertible into
//! the field type.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident {
                    $( $(#[$field_meta:meta])* $field:ident : $ty:ty ),* $(,)?
                } => $message:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $( $(#[$field_meta])* $field: $ty ),* },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = concat!("Construct [`", stringify!($name), "::", stringify!($variant), "`].")]
                    #[must_use]
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                }
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SamplePortError {
            Offline {
                /// Why the sample went offline.
                message: String,
            } => "offline: {message}",
            Rejected { code: u32 } => "rejected with {code}",
            Partial { message: String, code: u32 } => "partial {code}: {message}",
        }
    }

    #[test]
    fn constructor_accepts_str_for_string_fields() {
        assert_eq!(SamplePortError::offline("down").to_string(), "offline: down");
    }

    #[test]
    fn constructor_keeps_non_string_fields() {
        assert_eq!(SamplePortError::rejected(7_u32).to_string(), "rejected with 7");
    }

    #[test]
    fn constructor_orders_parameters_as_declared() {
        let err = SamplePortError::partial("half", 2_u32);
        assert_eq!(
            err,
            SamplePortError::Partial {
                message: "half".to_owned(),
                code: 2
            }
        );
        assert_eq!(err.to_string(), "partial 2: half");
    }
}
