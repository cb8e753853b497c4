//! Macro support for declaring port error enums.
//!
//! Every port failure in this crate carries a `message` string describing
//! what the adapter observed. `port_error!` declares the thiserror enum in
//! that shape together with a snake_case constructor per variant, so adapters
//! can write `UserPersistenceError::unavailable(cause)` at their mapping
//! sites instead of spelling out struct variants.

macro_rules! port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_doc:meta])*
                $variant:ident => $display:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_doc])*
                #[error($display)]
                $variant {
                    /// What the adapter observed when the operation failed.
                    message: String,
                },
            )+
        }

        ::paste::paste! {
            impl $name {
                $(
                    #[doc = concat!("Build [`", stringify!($name), "::", stringify!($variant), "`].")]
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant {
                            message: message.into(),
                        }
                    }
                )+
            }
        }
    };
}

pub(crate) use port_error;
