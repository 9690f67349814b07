//! Network document schema: the on-disk YAML/JSON format.

use std::path::Path;

use lf_core::Real;
use serde::{Deserialize, Serialize};

use crate::error::NetworkResult;
use crate::network::Network;

/// On-disk description of a pipe network.
///
/// `resistances[p]` is the friction coefficient of pipe `p`; `loops` holds
/// one signed incidence row per closed loop, each of the same length as
/// `resistances`. An optional `initial_discharge` vector lets a document
/// carry the starting guess alongside the topology.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NetworkDoc {
    pub resistances: Vec<Real>,
    pub loops: Vec<Vec<i8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_discharge: Option<Vec<Real>>,
}

impl NetworkDoc {
    /// Validate and freeze the document into an immutable [`Network`].
    pub fn build(&self) -> NetworkResult<Network> {
        Network::from_parts(self.resistances.clone(), self.loops.clone())
    }
}

pub fn load_yaml(path: &Path) -> NetworkResult<NetworkDoc> {
    let content = std::fs::read_to_string(path)?;
    let doc: NetworkDoc = serde_yaml::from_str(&content)?;
    // Build to validate eagerly; the constructed network is discarded here.
    doc.build()?;
    Ok(doc)
}

pub fn save_yaml(path: &Path, doc: &NetworkDoc) -> NetworkResult<()> {
    doc.build()?;
    let content = serde_yaml::to_string(doc)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> NetworkResult<NetworkDoc> {
    let content = std::fs::read_to_string(path)?;
    let doc: NetworkDoc = serde_json::from_str(&content)?;
    doc.build()?;
    Ok(doc)
}
