//! The item grid.

use leptos::prelude::*;

use crate::items::{HoverCycle, Item};

/// Renders the loaded items. Pointer movement over a row's image cycles
/// through that row's pictures; every other row shows its first picture.
#[component]
pub fn ItemList(#[prop(into)] items: Signal<Vec<Item>>) -> impl IntoView {
    let hover = RwSignal::new(HoverCycle::new());

    view! {
        <ul class="item-list grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6 p-4 md:p-8 list-none">
            {move || {
                items
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| item_row(index, item, hover))
                    .collect_view()
            }}
        </ul>
    }
}

fn item_row(index: usize, item: Item, hover: RwSignal<HoverCycle>) -> impl IntoView {
    let picture_count = item.pictures.len();
    let pictures = item.pictures.clone();
    // An item without pictures renders an empty source instead of
    // indexing out of bounds.
    let current_picture = move || {
        let shown = hover.get().displayed(index);
        pictures.get(shown).cloned().unwrap_or_default()
    };
    let alt = item.name.clone();

    view! {
        <li
            class="item card bg-base-100 shadow-md overflow-hidden"
            on:mouseenter=move |_| hover.update(|h| h.enter(index))
            on:mouseleave=move |_| hover.update(|h| h.leave())
        >
            <figure class="item-image h-48 bg-base-200">
                <img
                    class="object-cover w-full h-full"
                    src=current_picture
                    alt=alt
                    on:mouseover=move |_| {
                        hover.update(|h| h.pointer_over(index, picture_count))
                    }
                />
            </figure>
            <div class="item-details card-body">
                <h2 class="card-title">{item.name}</h2>
                <p>"₹"<b>{item.price}</b></p>
            </div>
        </li>
    }
}
