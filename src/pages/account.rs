//! Account page: profile summary and saved addresses.
//!
//! Gating: any authenticated role, no page-level verification requirement.
//! Viewing addresses is allowed while unverified; mutating them is not,
//! which is enforced locally by disabling the save control rather than by
//! the route guard.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;
use crate::net::types::Address;
use crate::state::session::SessionStore;
use crate::util::guard::RouteConstraints;

#[component]
pub fn AccountPage() -> impl IntoView {
    view! {
        <PageShell constraints=RouteConstraints::authenticated()>
            <AccountContent/>
        </PageShell>
    }
}

#[component]
fn AccountContent() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = store.read();
    let addresses = LocalResource::new(|| crate::net::api::fetch_addresses());

    let label = RwSignal::new(String::new());
    let street = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let postal = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let verified = move || session.get().is_verified();

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !verified() {
            return;
        }
        let address = Address {
            id: String::new(),
            label: label.get().trim().to_owned(),
            street: street.get().trim().to_owned(),
            city: city.get().trim().to_owned(),
            postal_code: postal.get().trim().to_owned(),
        };
        if address.street.is_empty() || address.city.is_empty() {
            info.set("Street and city are required.".to_owned());
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::save_address(&address).await {
                    Ok(()) => {
                        info.set("Address saved.".to_owned());
                        addresses.refetch();
                    }
                    Err(e) => info.set(format!("Save failed: {e}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (address, &addresses);
        }
    };

    view! {
        <div class="account-page">
            <h1>"Your account"</h1>
            <section class="account-page__profile">
                {move || {
                    session.get().user.map(|u| view! {
                        <p>{u.name.clone()} " — " {u.email.clone()}</p>
                    })
                }}
                <Show when=move || !verified()>
                    <p class="account-page__hint">
                        "Verify your email to add or edit addresses."
                    </p>
                </Show>
            </section>

            <section class="account-page__addresses">
                <h2>"Saved addresses"</h2>
                <Suspense fallback=move || view! { <p>"Loading addresses..."</p> }>
                    {move || {
                        addresses.get().map(|list| match list {
                            Some(list) if list.is_empty() => {
                                view! { <p>"No saved addresses yet."</p> }.into_any()
                            }
                            Some(list) => view! {
                                <ul class="address-list">
                                    {list
                                        .into_iter()
                                        .map(|a| view! {
                                            <li class="address-list__item">
                                                <strong>{a.label.clone()}</strong>
                                                <span>{a.street.clone()} ", " {a.city.clone()} " " {a.postal_code.clone()}</span>
                                            </li>
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                            .into_any(),
                            None => view! { <p>"Could not load addresses."</p> }.into_any(),
                        })
                    }}
                </Suspense>

                <form class="address-form" on:submit=on_save>
                    <input
                        class="address-form__input"
                        type="text"
                        placeholder="Label (e.g. Home)"
                        prop:value=move || label.get()
                        on:input=move |ev| label.set(event_target_value(&ev))
                    />
                    <input
                        class="address-form__input"
                        type="text"
                        placeholder="Street"
                        prop:value=move || street.get()
                        on:input=move |ev| street.set(event_target_value(&ev))
                    />
                    <input
                        class="address-form__input"
                        type="text"
                        placeholder="City"
                        prop:value=move || city.get()
                        on:input=move |ev| city.set(event_target_value(&ev))
                    />
                    <input
                        class="address-form__input"
                        type="text"
                        placeholder="Postal code"
                        prop:value=move || postal.get()
                        on:input=move |ev| postal.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || !verified()>
                        "Save address"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="account-page__message">{move || info.get()}</p>
                </Show>
            </section>
        </div>
    }
}
