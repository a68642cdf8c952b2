//! Submission-time gate wired to the live document.
//!
//! Reads the two product form fields straight from the DOM by their fixed
//! ids and decides whether the submission may proceed, asking the user to
//! confirm auto-generation when the code field is blank.

use crate::shared::confirm::{BrowserConfirm, ConfirmPrompt};
use crate::shared::dom;
use contracts::domain::a001_product::submit_gate;

/// HTML id of the product-code input.
pub const PRODUCT_CODE_FIELD_ID: &str = "product_code";
/// HTML id of the item-name input.
pub const ITEM_NAME_FIELD_ID: &str = "item_name";

/// `true` when the form may be submitted. A populated code passes without
/// interaction; a blank one opens the native confirm dialog. Missing
/// fields propagate as errors instead of defaulting.
pub fn check_product_code() -> Result<bool, String> {
    check_with(&BrowserConfirm)
}

/// Same gate with the dialog injected.
pub fn check_with(dialog: &impl ConfirmPrompt) -> Result<bool, String> {
    let code = dom::input_value_by_id(PRODUCT_CODE_FIELD_ID)?;
    let item = dom::input_value_by_id(ITEM_NAME_FIELD_ID)?;
    Ok(submit_gate::allow_submit(&code, &item, |message| {
        dialog.confirm(message)
    }))
}
