//! Scopes of an account SAS.
//!
//! - [Specify the account SAS parameters](https://learn.microsoft.com/en-us/rest/api/storageservices/create-account-sas#specify-the-account-sas-parameters)

use std::fmt::{self, Write};
use std::str::FromStr;

use sastoken_core::Error;

/// Defines a set of single letter flags.
///
/// `Display` always writes letters in declaration order, which is the order
/// the service documents. `FromStr` accepts them in any order.
macro_rules! sas_flags {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$field_meta:meta])* $field:ident => $letter:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name {
            $($(#[$field_meta])* pub $field: bool,)+
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                $(
                    if self.$field {
                        f.write_char($letter)?;
                    }
                )+
                Ok(())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let mut v = Self::default();
                for c in s.chars() {
                    match c {
                        $($letter => v.$field = true,)+
                        _ => {
                            return Err(Error::request_invalid(concat!(
                                "invalid letter for ",
                                stringify!($name)
                            ))
                            .with_context(format!("letter: {c}"))
                            .with_context(format!("value: {s}")))
                        }
                    }
                }
                Ok(v)
            }
        }
    };
}

sas_flags! {
    /// Permissions granted by an account SAS (`sp`).
    AccountSasPermissions {
        /// Read access.
        read => 'r',
        /// Write access.
        write => 'w',
        /// Delete access.
        delete => 'd',
        /// List access.
        list => 'l',
        /// Add access to messages and append blocks.
        add => 'a',
        /// Create access.
        create => 'c',
        /// Update access to messages and table entities.
        update => 'u',
        /// Process access to queue messages.
        process => 'p',
    }
}

sas_flags! {
    /// Services reachable with an account SAS (`ss`).
    AccountSasServices {
        /// Blob service.
        blob => 'b',
        /// Table service.
        table => 't',
        /// Queue service.
        queue => 'q',
        /// File service.
        file => 'f',
    }
}

sas_flags! {
    /// Resource types reachable with an account SAS (`srt`).
    AccountSasResourceTypes {
        /// Service level APIs.
        service => 's',
        /// Container level APIs.
        container => 'c',
        /// Object level APIs.
        object => 'o',
    }
}
