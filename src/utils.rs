#[derive(Clone, Debug, PartialEq)]
pub struct ContractDenom {
    pub token_type: String,
    pub contract_addr: String,
    pub base_denom: String,
}

fn is_word(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// Splits a compound contract-token denom of the form
// "<type>:<contractAddress>:<baseDenom>". Anything that is not exactly three
// word segments is treated as a plain native denom.
pub fn parse_contract_denom(denom: &str) -> Option<ContractDenom> {
    let segments: Vec<&str> = denom.split(':').collect();
    if segments.len() != 3 || !segments.iter().all(|s| is_word(s)) {
        return None;
    }
    Some(ContractDenom {
        token_type: segments[0].to_string(),
        contract_addr: segments[1].to_string(),
        base_denom: segments[2].to_string(),
    })
}
