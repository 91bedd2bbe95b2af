use super::global_context::{AppGlobalContext, Page};
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <nav class="navbar">
            <span class="navbar__brand">"🧾 Back office"</span>
            <ul class="navbar__links">
                {Page::all()
                    .into_iter()
                    .map(|page| {
                        view! {
                            <li>
                                <a
                                    href=super::global_context::query_for(page)
                                    class=move || {
                                        if ctx.active.get() == page {
                                            "navbar__link navbar__link--active"
                                        } else {
                                            "navbar__link"
                                        }
                                    }
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        ctx.open(page);
                                    }
                                >
                                    {page.title()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
