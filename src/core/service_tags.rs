use crate::core::errors::Result;
use crate::core::json;
use log::{debug, info, trace};
use std::collections::BTreeMap;

/*-------------------------------------------------------------------------------------------------
  Service Tag
-------------------------------------------------------------------------------------------------*/

/// A named group of address prefixes published for one Azure service.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ServiceTag {
    /// Service tag name, e.g. `AzureBotService`.
    pub name: String,

    pub id: Option<String>,
    pub region: Option<String>,
    pub platform: Option<String>,
    pub system_service: Option<String>,
    pub change_number: Option<u64>,

    /// Raw IPv4 and IPv6 CIDR strings in document order.
    pub address_prefixes: Vec<String>,
}

/*-------------------------------------------------------------------------------------------------
  Service Tags
-------------------------------------------------------------------------------------------------*/

/// Parsed Service Tags document, indexed by service tag name.
#[derive(Clone, Debug, Default)]
pub struct ServiceTags {
    pub(crate) change_number: Option<u64>,
    pub(crate) cloud: Option<String>,
    pub(crate) tags: BTreeMap<String, ServiceTag>,
}

impl ServiceTags {
    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    /// Document revision number.
    pub fn change_number(&self) -> Option<u64> {
        self.change_number
    }

    /// Cloud the document describes, e.g. `Public`.
    pub fn cloud(&self) -> Option<&str> {
        self.cloud.as_deref()
    }

    pub fn tags(&self) -> &BTreeMap<String, ServiceTag> {
        &self.tags
    }

    /// Get a service tag by exact (case-sensitive) name.
    pub fn get_tag(&self, name: &str) -> Option<&ServiceTag> {
        self.tags.get(name)
    }

    /*-------------------------------------------------------------------------
      Service Tags from JSON
    -------------------------------------------------------------------------*/

    /// Parse a Service Tags JSON document. When a name appears more than once, the first entry
    /// is kept.
    pub fn from_json(json: &str) -> Result<Box<ServiceTags>> {
        let json_service_tags = json::parse(json)?;

        let mut service_tags = Box::new(ServiceTags {
            change_number: json_service_tags.change_number,
            cloud: json_service_tags.cloud.map(str::to_string),
            tags: BTreeMap::new(),
        });

        for json_service_tag in json_service_tags.values {
            if service_tags.tags.contains_key(json_service_tag.name) {
                debug!(
                    "Ignoring duplicate service tag entry: {}",
                    json_service_tag.name
                );
                continue;
            }

            let properties = json_service_tag.properties;
            trace!(
                "Service tag {}: {} address prefixes",
                json_service_tag.name,
                properties.address_prefixes.len()
            );

            service_tags.tags.insert(
                json_service_tag.name.to_string(),
                ServiceTag {
                    name: json_service_tag.name.to_string(),
                    id: json_service_tag.id.map(str::to_string),
                    region: properties.region.map(str::to_string),
                    platform: properties.platform.map(str::to_string),
                    system_service: properties.system_service.map(str::to_string),
                    change_number: properties.change_number,
                    address_prefixes: properties
                        .address_prefixes
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                },
            );
        }

        info!(
            "Parsed {} service tags (cloud: {}, change number: {})",
            service_tags.tags.len(),
            service_tags.cloud().unwrap_or("unknown"),
            service_tags
                .change_number
                .map_or_else(|| "unknown".to_string(), |number| number.to_string())
        );

        Ok(service_tags)
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
