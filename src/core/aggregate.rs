use crate::core::errors::{Error, Result};
use crate::core::prefix_type::PrefixType;
use ipnetwork::{Ipv4Network, Ipv6Network};
use log::debug;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/*-------------------------------------------------------------------------------------------------
  Aggregation Result
-------------------------------------------------------------------------------------------------*/

/// Minimal, non-overlapping CIDR blocks for each address family, sorted ascending by numeric
/// network address.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AggregationResult {
    pub ipv4: Vec<Ipv4Network>,
    pub ipv6: Vec<Ipv6Network>,
}

impl AggregationResult {
    /// IPv4 blocks rendered in canonical CIDR notation.
    pub fn ipv4_strings(&self) -> Vec<String> {
        self.ipv4.iter().map(|network| network.to_string()).collect()
    }

    /// IPv6 blocks rendered in canonical (compressed) CIDR notation.
    pub fn ipv6_strings(&self) -> Vec<String> {
        self.ipv6.iter().map(|network| network.to_string()).collect()
    }
}

/*-------------------------------------------------------------------------------------------------
  Aggregate
-------------------------------------------------------------------------------------------------*/

/// Partition the provided prefixes by address family and collapse each family into the smallest
/// set of CIDR blocks covering exactly the same addresses. Blocks contained in other blocks are
/// dropped and adjacent sibling blocks are merged into their parent until no merge remains.
///
/// ```
/// let result = azureservicetags::aggregate(["10.0.0.0/24", "10.0.1.0/24", "2001:db8::/32"])?;
///
/// assert_eq!(result.ipv4_strings(), vec!["10.0.0.0/23"]);
/// assert_eq!(result.ipv6_strings(), vec!["2001:db8::/32"]);
/// # Ok::<(), azureservicetags::Error>(())
/// ```
///
/// Returns [Error::MalformedAddress] for the first prefix that does not parse as a CIDR block.
pub fn aggregate<I, S>(prefixes: I) -> Result<AggregationResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut ipv4_blocks: Vec<Block> = Vec::new();
    let mut ipv6_blocks: Vec<Block> = Vec::new();

    for prefix in prefixes {
        let prefix = prefix.as_ref();
        match PrefixType::of(prefix) {
            PrefixType::IPv4 => {
                let network: Ipv4Network = parse_prefix(prefix)?;
                ipv4_blocks.push(Block::new(
                    u128::from(u32::from(network.ip())),
                    network.prefix(),
                    PrefixType::IPv4,
                ));
            }
            PrefixType::IPv6 => {
                let network: Ipv6Network = parse_prefix(prefix)?;
                ipv6_blocks.push(Block::new(
                    u128::from(network.ip()),
                    network.prefix(),
                    PrefixType::IPv6,
                ));
            }
        }
    }

    let ipv4_count = ipv4_blocks.len();
    let ipv6_count = ipv6_blocks.len();

    let ipv4 = collapse(ipv4_blocks)
        .into_iter()
        .map(Block::to_ipv4_network)
        .collect::<Result<Vec<Ipv4Network>>>()?;
    let ipv6 = collapse(ipv6_blocks)
        .into_iter()
        .map(Block::to_ipv6_network)
        .collect::<Result<Vec<Ipv6Network>>>()?;

    debug!("Aggregated {} IPv4 prefixes into {} blocks", ipv4_count, ipv4.len());
    debug!("Aggregated {} IPv6 prefixes into {} blocks", ipv6_count, ipv6.len());

    Ok(AggregationResult { ipv4, ipv6 })
}

fn parse_prefix<N>(prefix: &str) -> Result<N>
where
    N: FromStr<Err = ipnetwork::IpNetworkError>,
{
    prefix.parse().map_err(|source| Error::MalformedAddress {
        prefix: prefix.to_string(),
        source,
    })
}

/*--------------------------------------------------------------------------------------
  Collapse
--------------------------------------------------------------------------------------*/

/// Collapse blocks of a single address family. The returned blocks are sorted by network address
/// and no two of them overlap or can be merged.
fn collapse(mut blocks: Vec<Block>) -> Vec<Block> {
    // Network address ascending, shorter prefix first for equal addresses
    blocks.sort_unstable();

    let mut collapsed: Vec<Block> = Vec::with_capacity(blocks.len());

    for mut block in blocks {
        // Only the last retained block can cover a block that sorts after it
        if collapsed
            .last()
            .is_some_and(|retained| retained.contains(&block))
        {
            continue;
        }

        while let Some(parent) = collapsed
            .last()
            .and_then(|retained| retained.parent_with(&block))
        {
            collapsed.pop();
            block = parent;
        }

        collapsed.push(block);
    }

    collapsed
}

/*--------------------------------------------------------------------------------------
  Block
--------------------------------------------------------------------------------------*/

/// A CIDR block in integer form. IPv4 addresses occupy the low 32 bits.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
struct Block {
    network: u128,
    length: u8,
    width: u8,
}

impl Block {
    /// Build a block, clearing any host bits set in `address`.
    fn new(address: u128, length: u8, prefix_type: PrefixType) -> Self {
        let width = prefix_type.max_length();
        let host_bits = u32::from(width - length);
        let network = if host_bits >= u128::BITS {
            0
        } else {
            address & !((1u128 << host_bits) - 1)
        };

        Self {
            network,
            length,
            width,
        }
    }

    fn contains(&self, other: &Block) -> bool {
        self.length <= other.length
            && Block::new(other.network, self.length, self.prefix_type()).network == self.network
    }

    /// The parent block, when `self` is the lower half and `other` the upper half of it.
    fn parent_with(&self, other: &Block) -> Option<Block> {
        if self.length != other.length || self.length == 0 {
            return None;
        }

        let half = 1u128 << (self.width - self.length);
        if self.network & half == 0 && other.network == self.network | half {
            Some(Block {
                length: self.length - 1,
                ..*self
            })
        } else {
            None
        }
    }

    fn prefix_type(&self) -> PrefixType {
        if self.width == PrefixType::IPv6.max_length() {
            PrefixType::IPv6
        } else {
            PrefixType::IPv4
        }
    }

    fn to_ipv4_network(self) -> Result<Ipv4Network> {
        let address = Ipv4Addr::from(self.network as u32);
        Ipv4Network::new(address, self.length).map_err(|source| Error::MalformedAddress {
            prefix: format!("{}/{}", address, self.length),
            source,
        })
    }

    fn to_ipv6_network(self) -> Result<Ipv6Network> {
        let address = Ipv6Addr::from(self.network);
        Ipv6Network::new(address, self.length).map_err(|source| Error::MalformedAddress {
            prefix: format!("{}/{}", address, self.length),
            source,
        })
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
