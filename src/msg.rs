use cosmwasm_std::{Addr, Binary, Coin};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// The signing/broadcast component consumes one of these two shapes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SendMsg {
    Send {
        from_address: Addr,
        to_address: Addr,
        amount: Vec<Coin>,
    },
    Execute {
        sender: Addr,
        contract_addr: String,
        msg: Binary,
        funds: Vec<Coin>,
    },
}
