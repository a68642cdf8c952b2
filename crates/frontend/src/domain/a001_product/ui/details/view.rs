use super::view_model::ProductFormVm;
use crate::domain::a001_product::guard;
use crate::domain::a001_product::guard::{ITEM_NAME_FIELD_ID, PRODUCT_CODE_FIELD_ID};
use contracts::domain::a001_product::Product;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Add-item form. The code and name inputs carry the fixed ids the
/// submission gate reads (`product_code`, `item_name`); leaving the code
/// blank offers auto-generation via the native confirm dialog.
#[component]
pub fn ProductForm(stock: RwSignal<Vec<Product>>) -> impl IntoView {
    let vm = ProductFormVm::new(stock);

    let handle_submit = move |ev: SubmitEvent| {
        // CSR app: the form never navigates; the gate decides whether the
        // add command runs at all.
        ev.prevent_default();
        match guard::check_product_code() {
            Ok(true) => vm.submit(),
            Ok(false) => {
                // User declined auto-generation; leave the form as-is.
            }
            Err(e) => {
                log::error!("product form gate failed: {}", e);
                vm.error.set(Some(e));
            }
        }
    };

    view! {
        <form class="form" on:submit=handle_submit>
            <div class="form__group">
                <label class="form__label" for=PRODUCT_CODE_FIELD_ID>
                    "Product Code"
                </label>
                <input
                    id=PRODUCT_CODE_FIELD_ID
                    class="form__input"
                    type="text"
                    placeholder="Leave blank to auto-generate"
                    prop:value=vm.product_code
                    on:input=move |ev| vm.product_code.set(event_target_value(&ev))
                />
            </div>

            <div class="form__group">
                <label class="form__label" for=ITEM_NAME_FIELD_ID>
                    "Item"
                </label>
                <input
                    id=ITEM_NAME_FIELD_ID
                    class="form__input"
                    type="text"
                    prop:value=vm.item_name
                    on:input=move |ev| vm.item_name.set(event_target_value(&ev))
                />
            </div>

            <div class="form__group">
                <label class="form__label" for="quantity">"Quantity"</label>
                <input
                    id="quantity"
                    class="form__input"
                    type="number"
                    prop:value=vm.quantity
                    on:input=move |ev| vm.quantity.set(event_target_value(&ev))
                />
            </div>

            <div class="form__group">
                <label class="form__label" for="low_threshold">"Low Threshold"</label>
                <input
                    id="low_threshold"
                    class="form__input"
                    type="number"
                    placeholder="5"
                    prop:value=vm.low_threshold
                    on:input=move |ev| vm.low_threshold.set(event_target_value(&ev))
                />
            </div>

            <div class="form__group form__group--inline">
                <label class="form__label" for="on_order">"On Order"</label>
                <input
                    id="on_order"
                    type="checkbox"
                    prop:checked=vm.on_order
                    on:change=move |ev| vm.on_order.set(event_target_checked(&ev))
                />
            </div>

            {move || {
                vm.error
                    .get()
                    .map(|e| view! { <div class="form__error">{e}</div> })
            }}

            <button class="button button--primary" type="submit">
                "Add Item"
            </button>
        </form>
    }
}
