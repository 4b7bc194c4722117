use crate::error::SendError;
use crate::msg::SendMsg;
use crate::state::{ErrorTable, FieldKind, SendDraft, CW20_TOKEN_TYPE};
use crate::utils::parse_contract_denom;
use cosmwasm_std::{to_binary, Addr};
use cw20::Cw20ExecuteMsg;
use std::str::FromStr;

pub fn generate_send_msg(draft: &SendDraft, sender: Addr) -> Result<SendMsg, SendError> {
    let recipient = draft.recipient().ok_or(SendError::MissingField {
        field: String::from("recipient"),
    })?;
    let amount = draft.amount().ok_or(SendError::MissingField {
        field: String::from("amount"),
    })?;

    // A denom matching "<type>:<contract>:<base>" is always dispatched on
    // its token-standard tag, never silently treated as native.
    if let Some(parsed) = parse_contract_denom(&amount.denom) {
        if parsed.token_type != CW20_TOKEN_TYPE {
            return Err(SendError::UnknownTokenType {
                token_type: parsed.token_type,
            });
        }
        let msg = to_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount: amount.amount,
        })?;
        return Ok(SendMsg::Execute {
            sender,
            contract_addr: parsed.contract_addr,
            msg,
            funds: vec![],
        });
    }

    Ok(SendMsg::Send {
        from_address: sender,
        to_address: recipient.clone(),
        amount: vec![amount.clone()],
    })
}

// A kind passes only if the field is populated and the error table records
// nothing for it.
pub fn is_valid(draft: &SendDraft, errors: &ErrorTable, kinds: &[FieldKind]) -> bool {
    kinds.iter().all(|kind| {
        let populated = match kind {
            FieldKind::Recipient => draft.recipient().is_some(),
            FieldKind::Amount => draft.amount().map_or(false, |coin| !coin.amount.is_zero()),
            FieldKind::Memo => true,
            FieldKind::Fees => !draft.fees().is_empty(),
            FieldKind::Gas => draft.gas() > 0,
        };
        populated && !errors.has_errors(*kind)
    })
}

pub fn is_valid_fields(
    draft: &SendDraft,
    errors: &ErrorTable,
    kinds: &[&str],
) -> Result<bool, SendError> {
    let mut parsed = Vec::with_capacity(kinds.len());
    for kind in kinds {
        parsed.push(FieldKind::from_str(kind)?);
    }
    Ok(is_valid(draft, errors, &parsed))
}
