use crate::core::errors::Result;
use serde::{Deserialize, Serialize};

/*-------------------------------------------------------------------------------------------------
  Parse JSON
-------------------------------------------------------------------------------------------------*/

pub fn parse(json: &str) -> Result<JsonServiceTags<'_>> {
    Ok(serde_json::from_str(json)?)
}

/*-------------------------------------------------------------------------------------------------
  JSON Data Structures
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  JSON Service Tags
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonServiceTags<'j> {
    #[serde(rename = "changeNumber", default)]
    pub change_number: Option<u64>,

    #[serde(default)]
    pub cloud: Option<&'j str>,

    #[serde(borrow)]
    pub values: Vec<JsonServiceTag<'j>>,
}

/*--------------------------------------------------------------------------------------
  JSON Service Tag
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonServiceTag<'j> {
    pub name: &'j str,

    #[serde(default)]
    pub id: Option<&'j str>,

    #[serde(borrow)]
    pub properties: JsonProperties<'j>,
}

/*--------------------------------------------------------------------------------------
  JSON Service Tag Properties
--------------------------------------------------------------------------------------*/

#[derive(Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct JsonProperties<'j> {
    #[serde(rename = "changeNumber", default)]
    pub change_number: Option<u64>,

    #[serde(default)]
    pub region: Option<&'j str>,

    #[serde(default)]
    pub platform: Option<&'j str>,

    #[serde(rename = "systemService", default)]
    pub system_service: Option<&'j str>,

    #[serde(rename = "addressPrefixes", borrow)]
    pub address_prefixes: Vec<&'j str>,
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
