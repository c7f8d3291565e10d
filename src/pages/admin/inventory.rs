//! Admin inventory page: stock levels with manual adjustments.
//!
//! Open to managers and admins. Quantities come from the server-side stock
//! ledger; adjustments are deltas the server applies and re-reports.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;
use crate::net::types::Role;
use crate::util::guard::RouteConstraints;

#[component]
pub fn AdminInventoryPage() -> impl IntoView {
    view! {
        <PageShell constraints=RouteConstraints::roles(&[Role::Admin, Role::Manager])>
            <InventoryContent/>
        </PageShell>
    }
}

#[component]
fn InventoryContent() -> impl IntoView {
    let inventory = LocalResource::new(|| crate::net::api::fetch_inventory());
    let info = RwSignal::new(String::new());

    let adjust = move |product_id: String, warehouse_name: String, delta: i64| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::adjust_inventory(&product_id, &warehouse_name, delta).await {
                    Ok(()) => {
                        info.set(String::new());
                        inventory.refetch();
                    }
                    Err(e) => info.set(format!("Adjustment failed: {e}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (product_id, warehouse_name, delta, &inventory, &info);
        }
    };

    view! {
        <div class="admin-page">
            <h1>"Inventory"</h1>
            <Show when=move || !info.get().is_empty()>
                <p class="admin-page__message">{move || info.get()}</p>
            </Show>
            <Suspense fallback=move || view! { <p>"Loading inventory..."</p> }>
                {move || {
                    inventory.get().map(|rows| match rows {
                        Some(rows) if rows.is_empty() => {
                            view! { <p>"No stock rows."</p> }.into_any()
                        }
                        Some(rows) => view! {
                            <table class="admin-table">
                                <thead>
                                    <tr>
                                        <th>"Product"</th>
                                        <th>"Warehouse"</th>
                                        <th>"On hand"</th>
                                        <th>"Adjust"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {rows
                                        .into_iter()
                                        .map(|row| {
                                            let dec = (row.product_id.clone(), row.warehouse_name.clone());
                                            let inc = dec.clone();
                                            view! {
                                                <tr>
                                                    <td>{row.product_name.clone()}</td>
                                                    <td>{row.warehouse_name.clone()}</td>
                                                    <td>{row.quantity}</td>
                                                    <td>
                                                        <button
                                                            class="btn"
                                                            on:click=move |_| adjust(dec.0.clone(), dec.1.clone(), -1)
                                                        >
                                                            "-1"
                                                        </button>
                                                        <button
                                                            class="btn"
                                                            on:click=move |_| adjust(inc.0.clone(), inc.1.clone(), 1)
                                                        >
                                                            "+1"
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
                        None => view! { <p>"Could not load inventory."</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
