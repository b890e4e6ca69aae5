/*-------------------------------------------------------------------------------------------------
  Prefix Type
-------------------------------------------------------------------------------------------------*/

/// IP prefix type (IPv4 or IPv6) of an address prefix string.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PrefixType {
    IPv4,
    IPv6,
}

impl PrefixType {
    /// Classify a raw prefix string by address family. Any string containing a `:` is treated as
    /// IPv6; everything else is IPv4. The string is not validated.
    pub fn of(prefix: &str) -> Self {
        if prefix.contains(':') {
            PrefixType::IPv6
        } else {
            PrefixType::IPv4
        }
    }

    /// Number of address bits for the family.
    pub(crate) fn max_length(&self) -> u8 {
        match self {
            PrefixType::IPv4 => 32,
            PrefixType::IPv6 => 128,
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
