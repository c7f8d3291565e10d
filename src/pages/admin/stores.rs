//! Admin stores page: store summaries, admin-only.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;
use crate::net::types::Role;
use crate::util::guard::RouteConstraints;

#[component]
pub fn AdminStoresPage() -> impl IntoView {
    view! {
        <PageShell constraints=RouteConstraints::roles(&[Role::Admin])>
            <StoresContent/>
        </PageShell>
    }
}

#[component]
fn StoresContent() -> impl IntoView {
    let stores = LocalResource::new(|| crate::net::api::fetch_stores());

    view! {
        <div class="admin-page">
            <h1>"Stores"</h1>
            <Suspense fallback=move || view! { <p>"Loading stores..."</p> }>
                {move || {
                    stores.get().map(|list| match list {
                        Some(list) if list.is_empty() => {
                            view! { <p>"No stores configured."</p> }.into_any()
                        }
                        Some(list) => view! {
                            <table class="admin-table">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"City"</th>
                                        <th>"Warehouses"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|s| view! {
                                            <tr>
                                                <td>{s.name.clone()}</td>
                                                <td>{s.city.clone()}</td>
                                                <td>{s.warehouse_count}</td>
                                            </tr>
                                        })
                                        .collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        }
                        .into_any(),
                        None => view! { <p>"Could not load stores."</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
