//! Helper macro for declaring port error enums.
//!
//! Every variant carries a single `message` and gets a snake_case
//! constructor accepting anything convertible into `String`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $format:literal
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($format)]
                $variant { message: String },
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = "Construct the `" $variant "` variant."]
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant {
                            message: message.into(),
                        }
                    }
                }
            )*

            /// Message carried by any variant.
            pub fn message(&self) -> &str {
                match self {
                    $(Self::$variant { message } => message.as_str(),)*
                }
            }
        }
    };
}

pub(crate) use define_port_error;
