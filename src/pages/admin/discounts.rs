//! Admin discounts page: list with an activate/deactivate toggle.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;
use crate::net::types::Role;
use crate::util::guard::RouteConstraints;

#[component]
pub fn AdminDiscountsPage() -> impl IntoView {
    view! {
        <PageShell constraints=RouteConstraints::roles(&[Role::Admin, Role::Manager])>
            <DiscountsContent/>
        </PageShell>
    }
}

#[component]
fn DiscountsContent() -> impl IntoView {
    let discounts = LocalResource::new(|| crate::net::api::fetch_discounts());

    let set_active = move |discount_id: String, active: bool| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::set_discount_active(&discount_id, active).await {
                    Ok(()) => discounts.refetch(),
                    Err(e) => log::warn!("discount toggle failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (discount_id, active, &discounts);
        }
    };

    view! {
        <div class="admin-page">
            <h1>"Discounts"</h1>
            <Suspense fallback=move || view! { <p>"Loading discounts..."</p> }>
                {move || {
                    discounts.get().map(|list| match list {
                        Some(list) if list.is_empty() => {
                            view! { <p>"No discounts configured."</p> }.into_any()
                        }
                        Some(list) => view! {
                            <table class="admin-table">
                                <thead>
                                    <tr>
                                        <th>"Code"</th>
                                        <th>"Percent"</th>
                                        <th>"Status"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|d| {
                                            let id = d.id.clone();
                                            let active = d.active;
                                            view! {
                                                <tr>
                                                    <td>{d.code.clone()}</td>
                                                    <td>{format!("{}%", d.percent)}</td>
                                                    <td>{if active { "Active" } else { "Inactive" }}</td>
                                                    <td>
                                                        <button
                                                            class="btn"
                                                            on:click=move |_| set_active(id.clone(), !active)
                                                        >
                                                            {if active { "Deactivate" } else { "Activate" }}
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        }
                        .into_any(),
                        None => view! { <p>"Could not load discounts."</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
