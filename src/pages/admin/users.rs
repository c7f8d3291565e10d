//! Admin users page: account list with role assignment, admin-only.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::components::page_shell::PageShell;
use crate::net::types::Role;
use crate::util::guard::RouteConstraints;

/// Parse a role-select value back into a [`Role`].
fn parse_role(value: &str) -> Option<Role> {
    match value {
        "CUSTOMER" => Some(Role::Customer),
        "MANAGER" => Some(Role::Manager),
        "ADMIN" => Some(Role::Admin),
        _ => None,
    }
}

fn role_value(role: Role) -> &'static str {
    match role {
        Role::Customer => "CUSTOMER",
        Role::Manager => "MANAGER",
        Role::Admin => "ADMIN",
    }
}

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    view! {
        <PageShell constraints=RouteConstraints::roles(&[Role::Admin])>
            <UsersContent/>
        </PageShell>
    }
}

#[component]
fn UsersContent() -> impl IntoView {
    let users = LocalResource::new(|| crate::net::api::fetch_users());
    let info = RwSignal::new(String::new());

    let assign_role = move |user_id: String, value: String| {
        let Some(role) = parse_role(&value) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::set_user_role(&user_id, role).await {
                    Ok(()) => {
                        info.set(String::new());
                        users.refetch();
                    }
                    Err(e) => info.set(format!("Role change failed: {e}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, role, &users, &info);
        }
    };

    view! {
        <div class="admin-page">
            <h1>"Users"</h1>
            <Show when=move || !info.get().is_empty()>
                <p class="admin-page__message">{move || info.get()}</p>
            </Show>
            <Suspense fallback=move || view! { <p>"Loading users..."</p> }>
                {move || {
                    users.get().map(|list| match list {
                        Some(list) if list.is_empty() => {
                            view! { <p>"No users."</p> }.into_any()
                        }
                        Some(list) => view! {
                            <table class="admin-table">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Email"</th>
                                        <th>"Verified"</th>
                                        <th>"Role"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|u| {
                                            let id = u.id.clone();
                                            view! {
                                                <tr>
                                                    <td>{u.name.clone()}</td>
                                                    <td>{u.email.clone()}</td>
                                                    <td>{if u.verified { "Yes" } else { "No" }}</td>
                                                    <td>
                                                        <select
                                                            prop:value=role_value(u.role)
                                                            on:change=move |ev| assign_role(
                                                                id.clone(),
                                                                event_target_value(&ev),
                                                            )
                                                        >
                                                            <option value="CUSTOMER">"Customer"</option>
                                                            <option value="MANAGER">"Manager"</option>
                                                            <option value="ADMIN">"Admin"</option>
                                                        </select>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        }
                        .into_any(),
                        None => view! { <p>"Could not load users."</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
