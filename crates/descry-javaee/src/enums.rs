//! Descriptor enumerations with their XSD lexical spaces.
//!
//! Tokens must match the schemas exactly (including the inconsistent
//! casing between the EJB and Servlet vocabularies); an out-of-vocabulary
//! token is reported by the engine and leaves the field unset.

use descry_codec::DescriptorEnum;

macro_rules! descriptor_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $token:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl DescriptorEnum for $name {
            const NAME: &'static str = stringify!($name);
            const VALUES: &'static [&'static str] = &[$($token),+];

            fn parse(text: &str) -> Option<Self> {
                match text {
                    $($token => Some(Self::$variant),)+
                    _ => None,
                }
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $token),+
                }
            }
        }
    };
}

descriptor_enum! {
    /// Kind of session bean.
    SessionType {
        Singleton => "Singleton",
        Stateful => "Stateful",
        Stateless => "Stateless",
    }
}

descriptor_enum! {
    /// Who demarcates transactions for a bean.
    TransactionType {
        Bean => "Bean",
        Container => "Container",
    }
}

descriptor_enum! {
    /// Container-managed transaction attribute.
    TransAttribute {
        NotSupported => "NotSupported",
        Supports => "Supports",
        Required => "Required",
        RequiresNew => "RequiresNew",
        Mandatory => "Mandatory",
        Never => "Never",
    }
}

descriptor_enum! {
    /// Who manages concurrency for a singleton session bean.
    ConcurrencyManagementType {
        Bean => "Bean",
        Container => "Container",
    }
}

descriptor_enum! {
    /// The bean kind an `ejb-ref` points at.
    EjbRefType {
        Entity => "Entity",
        Session => "Session",
    }
}

descriptor_enum! {
    /// Who signs on to a resource manager.
    ResAuth {
        Application => "Application",
        Container => "Container",
    }
}

descriptor_enum! {
    /// Whether resource-manager connections may be shared.
    ResSharingScope {
        Shareable => "Shareable",
        Unshareable => "Unshareable",
    }
}

descriptor_enum! {
    /// Direction of a message-destination reference.
    MessageDestinationUsage {
        Consumes => "Consumes",
        Produces => "Produces",
        ConsumesProduces => "ConsumesProduces",
    }
}

descriptor_enum! {
    /// Bean interface a method designator applies to.
    MethodIntf {
        Home => "Home",
        Remote => "Remote",
        LocalHome => "LocalHome",
        Local => "Local",
        ServiceEndpoint => "ServiceEndpoint",
        Timer => "Timer",
        MessageEndpoint => "MessageEndpoint",
    }
}

descriptor_enum! {
    /// Session tracking modes for a web application.
    TrackingMode {
        Cookie => "COOKIE",
        Url => "URL",
        Ssl => "SSL",
    }
}

descriptor_enum! {
    /// Dispatcher kinds a filter mapping applies to.
    Dispatcher {
        Forward => "FORWARD",
        Include => "INCLUDE",
        Request => "REQUEST",
        Async => "ASYNC",
        Error => "ERROR",
    }
}

descriptor_enum! {
    /// Transport guarantee for a user-data constraint.
    TransportGuarantee {
        None => "NONE",
        Integral => "INTEGRAL",
        Confidential => "CONFIDENTIAL",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_tokens() {
        assert_eq!(SessionType::parse("Stateless"), Some(SessionType::Stateless));
        assert_eq!(SessionType::parse("stateless"), None);
        assert_eq!(TrackingMode::parse("COOKIE"), Some(TrackingMode::Cookie));
        assert_eq!(TrackingMode::parse("Cookie"), None);
    }

    #[test]
    fn test_round_trip_tokens() {
        for &token in TransAttribute::VALUES {
            let parsed = TransAttribute::parse(token).unwrap();
            assert_eq!(parsed.as_str(), token);
        }
    }
}
