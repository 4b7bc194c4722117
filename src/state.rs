use crate::error::SendError;
use cosmwasm_std::{Addr, Coin, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

pub const CW20_TOKEN_TYPE: &str = "cw20";

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Recipient,
    Amount,
    Memo,
    Fees,
    Gas,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Recipient => "recipient",
            FieldKind::Amount => "amount",
            FieldKind::Memo => "memo",
            FieldKind::Fees => "fees",
            FieldKind::Gas => "gas",
        }
    }
}

impl FromStr for FieldKind {
    type Err = SendError;

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "recipient" => Ok(FieldKind::Recipient),
            "amount" => Ok(FieldKind::Amount),
            "memo" => Ok(FieldKind::Memo),
            "fees" => Ok(FieldKind::Fees),
            "gas" => Ok(FieldKind::Gas),
            _ => Err(SendError::UnknownFieldKind {
                kind: kind.to_string(),
            }),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Currency {
    pub denom: String,
    pub symbol: String,
    pub decimals: u32,
}

// Validation messages recorded by external validators, keyed by field kind
// and a validator-chosen sub-identifier. An absent entry means "no error";
// clearing removes the entry rather than storing a tombstone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorTable {
    errors: BTreeMap<FieldKind, BTreeMap<String, String>>,
}

impl ErrorTable {
    pub fn new() -> Self {
        ErrorTable::default()
    }

    // Returns whether the table actually changed, so callers only propagate
    // real updates.
    pub fn set_error(&mut self, kind: FieldKind, id: &str, message: Option<&str>) -> bool {
        match message {
            Some(message) => {
                let entries = self.errors.entry(kind).or_insert_with(BTreeMap::new);
                if entries.get(id).map(String::as_str) == Some(message) {
                    return false;
                }
                entries.insert(id.to_string(), message.to_string());
                true
            }
            None => {
                let removed = match self.errors.get_mut(&kind) {
                    Some(entries) => entries.remove(id).is_some(),
                    None => false,
                };
                if removed && self.errors.get(&kind).map_or(false, |e| e.is_empty()) {
                    self.errors.remove(&kind);
                }
                removed
            }
        }
    }

    pub fn get_error(&self, kind: FieldKind, id: &str) -> Option<&str> {
        self.errors
            .get(&kind)
            .and_then(|entries| entries.get(id))
            .map(String::as_str)
    }

    pub fn has_errors(&self, kind: FieldKind) -> bool {
        self.errors.get(&kind).map_or(false, |e| !e.is_empty())
    }
}

// The in-progress transfer. Recipient text and its parsed address are kept
// separately: the address stays unset until a validator accepts the text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SendDraft {
    raw_recipient: String,
    recipient: Option<Addr>,
    amount: Option<Coin>,
    gas: u64,
    fees: Vec<Coin>,
    memo: String,
    currencies: Vec<Currency>,
    fee_currencies: Vec<Currency>,
    balances: Vec<Coin>,
}

impl SendDraft {
    pub fn new() -> Self {
        SendDraft::default()
    }

    pub fn raw_recipient(&self) -> &str {
        &self.raw_recipient
    }

    pub fn set_recipient(&mut self, raw: String) {
        self.raw_recipient = raw;
    }

    pub fn recipient(&self) -> Option<&Addr> {
        self.recipient.as_ref()
    }

    pub fn set_recipient_addr(&mut self, recipient: Option<Addr>) {
        self.recipient = recipient;
    }

    pub fn amount(&self) -> Option<&Coin> {
        self.amount.as_ref()
    }

    pub fn set_amount(&mut self, amount: Option<Coin>) {
        self.amount = amount;
    }

    pub fn gas(&self) -> u64 {
        self.gas
    }

    pub fn set_gas(&mut self, gas: u64) {
        self.gas = gas;
    }

    pub fn fees(&self) -> &[Coin] {
        &self.fees
    }

    // Equality-guarded: an equal-by-value fee list leaves the stored vector
    // untouched and reports no change.
    pub fn set_fees(&mut self, fees: Vec<Coin>) -> bool {
        if self.fees == fees {
            return false;
        }
        self.fees = fees;
        true
    }

    pub fn memo(&self) -> &str {
        &self.memo
    }

    pub fn set_memo(&mut self, memo: String) {
        self.memo = memo;
    }

    pub fn currencies(&self) -> &[Currency] {
        &self.currencies
    }

    pub fn set_currencies(&mut self, currencies: Vec<Currency>) {
        self.currencies = currencies;
    }

    pub fn fee_currencies(&self) -> &[Currency] {
        &self.fee_currencies
    }

    pub fn set_fee_currencies(&mut self, fee_currencies: Vec<Currency>) {
        self.fee_currencies = fee_currencies;
    }

    pub fn balances(&self) -> &[Coin] {
        &self.balances
    }

    pub fn set_balances(&mut self, balances: Vec<Coin>) {
        self.balances = balances;
    }

    pub fn currency(&self, denom: &str) -> Option<&Currency> {
        self.currencies.iter().find(|c| c.denom == denom)
    }

    pub fn fee_currency(&self, denom: &str) -> Option<&Currency> {
        self.fee_currencies.iter().find(|c| c.denom == denom)
    }

    pub fn balance_of(&self, denom: &str) -> Uint128 {
        self.balances
            .iter()
            .find(|coin| coin.denom == denom)
            .map(|coin| coin.amount)
            .unwrap_or_else(Uint128::zero)
    }

    pub fn fee_total(&self, denom: &str) -> Uint128 {
        self.fees
            .iter()
            .filter(|coin| coin.denom == denom)
            .fold(Uint128::zero(), |total, coin| total + coin.amount)
    }

    // Clears the user-entered fields after a completed submission. The
    // chain-derived lists (currencies, balances) stay as fetched.
    pub fn reset(&mut self) {
        self.raw_recipient = String::from("");
        self.recipient = None;
        self.amount = None;
        self.gas = 0;
        self.fees = vec![];
        self.memo = String::from("");
    }
}
