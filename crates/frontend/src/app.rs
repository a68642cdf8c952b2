use crate::domain::a001_product::ui::details::ProductForm;
use crate::domain::a001_product::ui::list::ProductList;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Stock lives for the session only; nothing is persisted.
    let stock = RwSignal::new(Vec::<Product>::new());

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"InvManage"</h1>
                </div>
            </div>
            <div class="page__content">
                <ProductForm stock=stock />
                <ProductList stock=stock />
            </div>
        </div>
    }
}
