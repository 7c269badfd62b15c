//! Node identity bootstrap: the two operations that attach a node to a
//! network. Both validate against a fixed [`RequestSchema`], then delegate
//! to the node client and return the resulting wallet address.

use serde_json::Value;
use streamgate_node::{NodeClient, NodeResult};
use streamgate_types::fields;

use crate::error::GatewayResult;
use crate::schema::RequestSchema;

const CONNECT_SCHEMA: RequestSchema =
    RequestSchema::new(&[(fields::ADMIN_NODE_ADDRESS, "admin node address")]);

const ADD_NODE_SCHEMA: RequestSchema = RequestSchema::new(&[
    (fields::BLOCKCHAIN_NAME, "blockchain name"),
    (fields::NEW_NODE_ADDRESS, "new node address"),
]);

/// Validated request to connect this node to an administering node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectToAdminNode {
    pub admin_node_address: String,
}

impl ConnectToAdminNode {
    pub fn from_body(body: Option<&Value>) -> GatewayResult<Self> {
        let mut values = CONNECT_SCHEMA.validate(body)?;
        Ok(Self {
            admin_node_address: values.remove(0),
        })
    }

    /// Returns this node's wallet address.
    pub async fn execute(&self, client: &dyn NodeClient) -> NodeResult<String> {
        client.connect_to_admin_node(&self.admin_node_address).await
    }
}

/// Validated request to add a node to a blockchain network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddNode {
    pub blockchain_name: String,
    pub new_node_address: String,
}

impl AddNode {
    pub fn from_body(body: Option<&Value>) -> GatewayResult<Self> {
        let mut values = ADD_NODE_SCHEMA.validate(body)?;
        let new_node_address = values.remove(1);
        let blockchain_name = values.remove(0);
        Ok(Self {
            blockchain_name,
            new_node_address,
        })
    }

    /// Returns the new node's wallet address.
    pub async fn execute(&self, client: &dyn NodeClient) -> NodeResult<String> {
        client
            .add_node(&self.blockchain_name, &self.new_node_address)
            .await
    }
}
