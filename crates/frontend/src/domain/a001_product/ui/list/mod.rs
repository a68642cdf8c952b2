use crate::shared::confirm::{BrowserConfirm, ConfirmPrompt};
use contracts::domain::a001_product::{Product, ProductId};
use leptos::prelude::*;

/// Session stock table: one row per item, low-stock rows flagged, with a
/// confirm-guarded delete per row.
#[component]
pub fn ProductList(stock: RwSignal<Vec<Product>>) -> impl IntoView {
    let delete_product = move |id: ProductId, item_name: String| {
        let confirmed =
            BrowserConfirm.confirm(&format!("Delete \"{}\" from the stock list?", item_name));
        if !confirmed {
            return;
        }
        stock.update(|rows| rows.retain(|p| p.id != id));
    };

    view! {
        <table class="stock-table">
            <thead>
                <tr>
                    <th>"Product Code"</th>
                    <th>"Item"</th>
                    <th class="stock-table__num">"Quantity"</th>
                    <th class="stock-table__num">"Low Threshold"</th>
                    <th>"On Order"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || stock.get()
                    key=|product| product.id
                    children=move |product: Product| {
                        let id = product.id;
                        let item_name = product.item_name.clone();
                        let low = product.is_low_stock();
                        view! {
                            <tr class:stock-table__row--low=low>
                                <td>{product.product_code.clone()}</td>
                                <td>{product.item_name.clone()}</td>
                                <td class="stock-table__num">{product.quantity}</td>
                                <td class="stock-table__num">{product.low_threshold}</td>
                                <td>{if product.on_order { "X" } else { "" }}</td>
                                <td>
                                    <button
                                        class="button button--secondary"
                                        on:click=move |_| delete_product(id, item_name.clone())
                                    >
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
